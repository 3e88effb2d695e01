use serde_json::Value;
use splist_rest::records::{
    BASE_TEMPLATE_DOCUMENT_LIBRARY, BASE_TEMPLATE_GENERIC_LIST,
    ListCatalogRecord, non_empty,
};
use splist_rest::{SpHttp, endpoints, envelope};

use super::errors::ListPickerError;
use super::model::{CatalogResult, ListOption};
use crate::widgets::list_browser::model::ListKind;

/// Fetch the site's visible generic lists and document libraries.
pub(crate) async fn load_catalog<C: SpHttp>(
    client: &C,
    web_url: &str,
) -> CatalogResult {
    let url = endpoints::list_catalog_url(web_url);
    let response = client.get(&url).await?;
    if !response.ok() {
        return Err(ListPickerError::Status {
            status: response.status(),
        });
    }
    let body: Value = response.json()?;

    let options: Vec<ListOption> = envelope::collection(&body)
        .into_iter()
        .filter_map(catalog_option)
        .collect();
    if options.is_empty() {
        log::warn!("no lists or libraries found at {web_url}");
    }
    Ok(options)
}

fn catalog_option(record: ListCatalogRecord) -> Option<ListOption> {
    let base_template = record.base_template?;
    if base_template != BASE_TEMPLATE_GENERIC_LIST
        && base_template != BASE_TEMPLATE_DOCUMENT_LIBRARY
    {
        return None;
    }
    let id = non_empty(record.id.as_deref())?;

    Some(ListOption {
        title: record.title.unwrap_or_else(|| id.clone()),
        id,
        kind: ListKind::from_base_template(Some(base_template)),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use splist_rest::{RestError, SpResponse};

    use super::*;

    struct FakeHttp {
        reply: fn() -> splist_rest::Result<SpResponse>,
    }

    impl SpHttp for FakeHttp {
        fn get(
            &self,
            url: &str,
        ) -> impl Future<Output = splist_rest::Result<SpResponse>> + Send
        {
            assert!(url.contains("/_api/web/lists?$filter=Hidden eq false"));
            let reply = (self.reply)();
            async move { reply }
        }
    }

    #[tokio::test]
    async fn given_mixed_templates_when_loaded_then_others_are_dropped() {
        let http = FakeHttp {
            reply: || {
                Ok(SpResponse::json_body(
                    200,
                    &json!({ "d": { "results": [
                        { "Id": "a", "Title": "Announcements", "BaseTemplate": 104 },
                        { "Id": "b", "Title": "Documents", "BaseTemplate": 101 },
                        { "Id": "c", "Title": "Tasks", "BaseTemplate": 100 },
                        { "Title": "No id", "BaseTemplate": 100 }
                    ] } }),
                ))
            },
        };

        let options = load_catalog(&http, "https://contoso/sites/dev")
            .await
            .expect("catalog");

        let labels: Vec<String> =
            options.iter().map(ToString::to_string).collect();
        assert_eq!(labels, vec!["Documents (Document Library)", "Tasks"]);
        assert_eq!(options[0].id, "b");
    }

    #[tokio::test]
    async fn given_error_status_when_loaded_then_status_error_returned() {
        let http = FakeHttp {
            reply: || Ok(SpResponse::json_body(401, &json!({}))),
        };

        let err = load_catalog(&http, "https://contoso/sites/dev")
            .await
            .unwrap_err();

        assert_eq!(err, ListPickerError::Status { status: 401 });
    }

    #[tokio::test]
    async fn given_transport_failure_when_loaded_then_error_is_returned() {
        let http = FakeHttp {
            reply: || {
                Err(RestError::Transport {
                    message: String::from("offline"),
                })
            },
        };

        let err = load_catalog(&http, "https://contoso/sites/dev")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "offline");
    }
}
