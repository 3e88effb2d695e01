use serde::de::DeserializeOwned;
use serde_json::Value;
use splist_rest::records::{
    FileRecord, FolderRecord, ListItemRecord, ListMetadataRecord, non_empty,
    parse_timestamp, user_title,
};
use splist_rest::{SpHttp, endpoints, envelope};

use super::errors::ListBrowserError;
use super::model::{
    Entry, EntryId, ListDescriptor, ListKind, LoadRequest, LoadResult,
    LoadedList,
};
use super::navigation::join_path;

/// Fetch a list's metadata and the entries of `request.path`.
///
/// Flat lists ignore the path. For libraries the folder and file listings
/// are fetched concurrently, and a failed listing counts as empty.
pub(crate) async fn load_list<C: SpHttp>(
    client: &C,
    request: &LoadRequest,
) -> LoadResult {
    let metadata_url =
        endpoints::list_metadata_url(&request.web_url, &request.list_id);
    let response = client.get(&metadata_url).await?;
    if !response.ok() {
        return Err(ListBrowserError::ListStatus {
            status: response.status(),
        });
    }
    let metadata: ListMetadataRecord =
        envelope::single(&response.json::<Value>()?)?;

    let descriptor = ListDescriptor {
        id: request.list_id.clone(),
        title: metadata.title.clone().unwrap_or_default(),
        kind: ListKind::from_base_template(metadata.base_template),
        root_folder_url: metadata.root_folder_url().map(ToString::to_string),
    };

    let entries = match descriptor.kind {
        ListKind::Flat => load_flat_entries(client, request).await?,
        ListKind::Hierarchical => {
            load_folder_entries(client, request, &descriptor).await
        },
    };

    log::debug!(
        "loaded {} entries from list {} at {:?}",
        entries.len(),
        request.list_id,
        request.path
    );
    Ok(LoadedList {
        descriptor,
        entries,
    })
}

async fn load_flat_entries<C: SpHttp>(
    client: &C,
    request: &LoadRequest,
) -> Result<Vec<Entry>, ListBrowserError> {
    let items_url =
        endpoints::list_items_url(&request.web_url, &request.list_id);
    let response = client.get(&items_url).await?;
    if !response.ok() {
        return Err(ListBrowserError::ItemsStatus {
            status: response.status(),
        });
    }
    let body: Value = response.json()?;

    Ok(envelope::collection::<ListItemRecord>(&body)
        .into_iter()
        .enumerate()
        .map(|(index, record)| item_entry(request, index, record))
        .collect())
}

async fn load_folder_entries<C: SpHttp>(
    client: &C,
    request: &LoadRequest,
    descriptor: &ListDescriptor,
) -> Vec<Entry> {
    let Some(root) = descriptor.root_folder_url.as_deref() else {
        log::warn!("library {} has no root folder", descriptor.id);
        return Vec::new();
    };
    let folder = folder_server_url(root, &request.path);

    let folders_url = endpoints::folder_folders_url(&request.web_url, &folder);
    let files_url = endpoints::folder_files_url(&request.web_url, &folder);
    let (folders, files) = futures::join!(
        fetch_collection::<C, FolderRecord>(client, &folders_url),
        fetch_collection::<C, FileRecord>(client, &files_url),
    );

    folders
        .into_iter()
        .filter_map(|record| folder_entry(request, record))
        .chain(
            files
                .into_iter()
                .filter_map(|record| file_entry(request, record)),
        )
        .collect()
}

/// Fetch a collection, degrading every failure to an empty result.
async fn fetch_collection<C: SpHttp, T: DeserializeOwned>(
    client: &C,
    url: &str,
) -> Vec<T> {
    let response = match client.get(url).await {
        Ok(response) => response,
        Err(err) => {
            log::debug!("treating {url} as empty: {err}");
            return Vec::new();
        },
    };
    if !response.ok() {
        log::debug!(
            "treating {url} as empty: status {}",
            response.status()
        );
        return Vec::new();
    }
    match response.json::<Value>() {
        Ok(body) => envelope::collection(&body),
        Err(err) => {
            log::debug!("treating {url} as empty: {err}");
            Vec::new()
        },
    }
}

/// Server-relative URL of the folder at `path` below the library root.
pub(crate) fn folder_server_url(root: &str, path: &str) -> String {
    let root = root.trim_end_matches('/');
    if path.is_empty() {
        return root.to_string();
    }
    format!("{root}/{}", join_path("", path))
}

/// Normalize one list item; `index` is its position in the response.
fn item_entry(
    request: &LoadRequest,
    index: usize,
    record: ListItemRecord,
) -> Entry {
    let id = match record.id {
        Some(id) => EntryId::Item(id),
        None => {
            log::debug!("list item #{index} has no id");
            EntryId::Row(index)
        },
    };
    let display_name = non_empty(record.title.as_deref())
        .or_else(|| non_empty(record.file_leaf_ref.as_deref()))
        .unwrap_or_else(|| match record.id {
            Some(id) => format!("Item {id}"),
            None => format!("Item #{}", index + 1),
        });

    Entry {
        id,
        display_name,
        is_container: false,
        modified: parse_timestamp(record.modified.as_deref()),
        created: parse_timestamp(record.created.as_deref()),
        author: user_title(record.author.as_ref()),
        editor: user_title(record.editor.as_ref()),
        resource_url: record.id.map(|id| {
            endpoints::item_display_url(&request.web_url, &request.list_id, id)
        }),
    }
}

fn folder_entry(request: &LoadRequest, record: FolderRecord) -> Option<Entry> {
    let name = non_empty(record.name.as_deref())?;

    Some(Entry {
        id: EntryId::Path {
            parent: request.path.clone(),
            name: name.clone(),
        },
        display_name: name,
        is_container: true,
        modified: parse_timestamp(record.time_last_modified.as_deref()),
        created: parse_timestamp(record.time_created.as_deref()),
        author: None,
        editor: None,
        resource_url: resource_url(request, record.server_relative_url),
    })
}

fn file_entry(request: &LoadRequest, record: FileRecord) -> Option<Entry> {
    let name = non_empty(record.name.as_deref())?;

    Some(Entry {
        id: EntryId::Path {
            parent: request.path.clone(),
            name: name.clone(),
        },
        display_name: name,
        is_container: false,
        modified: parse_timestamp(record.time_last_modified.as_deref()),
        created: parse_timestamp(record.time_created.as_deref()),
        author: user_title(record.author.as_ref()),
        editor: user_title(record.modified_by.as_ref()),
        resource_url: resource_url(request, record.server_relative_url),
    })
}

fn resource_url(
    request: &LoadRequest,
    server_relative_url: Option<String>,
) -> Option<String> {
    endpoints::absolute_url(&request.web_url, server_relative_url.as_deref()?)
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use splist_rest::{RestError, SpHttp, SpResponse};

    use super::*;
    use crate::widgets::list_browser::model::LoadStatus;
    use crate::widgets::list_browser::state::ListBrowserState;

    const WEB: &str = "https://contoso.sharepoint.com/sites/dev";

    enum Reply {
        Json(u16, Value),
        Fail(&'static str),
    }

    /// Canned transport; the first route whose pattern occurs in the URL
    /// answers.
    struct FakeHttp {
        routes: Vec<(&'static str, Reply)>,
    }

    impl FakeHttp {
        fn new(routes: Vec<(&'static str, Reply)>) -> Self {
            Self { routes }
        }
    }

    impl SpHttp for FakeHttp {
        fn get(
            &self,
            url: &str,
        ) -> impl Future<Output = splist_rest::Result<SpResponse>> + Send
        {
            let reply = self
                .routes
                .iter()
                .find(|(pattern, _)| url.contains(pattern))
                .map(|(_, reply)| match reply {
                    Reply::Json(status, body) => {
                        Ok(SpResponse::json_body(*status, body))
                    },
                    Reply::Fail(message) => Err(RestError::Transport {
                        message: message.to_string(),
                    }),
                })
                .unwrap_or_else(|| Ok(SpResponse::json_body(404, &json!({}))));
            async move { reply }
        }
    }

    fn request(path: &str) -> LoadRequest {
        LoadRequest {
            seq: 1,
            web_url: String::from(WEB),
            list_id: String::from("guid-1"),
            path: path.to_string(),
        }
    }

    fn metadata(title: &str, base_template: i64) -> Reply {
        Reply::Json(
            200,
            json!({
                "d": {
                    "Title": title,
                    "BaseTemplate": base_template,
                    "RootFolder": {
                        "ServerRelativeUrl": "/sites/dev/Shared Documents"
                    }
                }
            }),
        )
    }

    fn library_routes(
        folders: Reply,
        files: Reply,
    ) -> Vec<(&'static str, Reply)> {
        vec![
            ("/Folders?", folders),
            ("/Files?", files),
            ("lists(guid'", metadata("Documents", 101)),
        ]
    }

    #[tokio::test]
    async fn given_generic_list_when_loaded_then_items_are_normalized() {
        let http = FakeHttp::new(vec![
            (
                "/items?",
                Reply::Json(
                    200,
                    json!({
                        "value": [
                            {
                                "Id": 3,
                                "Title": "Budget",
                                "Modified": "2024-02-01T08:00:00Z",
                                "Author": { "Title": "Ada" },
                                "Editor": { "Title": "Grace" }
                            },
                            { "Id": 4, "Title": "", "FileLeafRef": "4_.000" },
                            { "Id": 5 }
                        ]
                    }),
                ),
            ),
            ("lists(guid'", metadata("Tasks", 100)),
        ]);

        let loaded = load_list(&http, &request("")).await.expect("load");

        assert_eq!(loaded.descriptor.title, "Tasks");
        assert_eq!(loaded.descriptor.kind, ListKind::Flat);
        let names: Vec<&str> = loaded
            .entries
            .iter()
            .map(|entry| entry.display_name.as_str())
            .collect();
        assert_eq!(names, vec!["Budget", "4_.000", "Item 5"]);
        let first = &loaded.entries[0];
        assert_eq!(first.id, EntryId::Item(3));
        assert!(!first.is_container);
        assert_eq!(first.author.as_deref(), Some("Ada"));
        assert_eq!(first.editor.as_deref(), Some("Grace"));
        assert_eq!(
            first.resource_url.as_deref(),
            Some(
                "https://contoso.sharepoint.com/sites/dev/_layouts/15/listform.aspx?PageType=4&ListId=guid-1&ID=3"
            )
        );
    }

    #[tokio::test]
    async fn given_library_when_loaded_then_folders_precede_files() {
        let http = FakeHttp::new(library_routes(
            Reply::Json(
                200,
                json!({ "value": [
                    { "Name": "Reports", "ServerRelativeUrl": "/sites/dev/Shared Documents/Q1/Reports" },
                    { "Name": "Drafts" }
                ] }),
            ),
            Reply::Json(
                200,
                json!({ "d": { "results": [
                    {
                        "Name": "plan.docx",
                        "ServerRelativeUrl": "/sites/dev/Shared Documents/Q1/plan.docx",
                        "TimeLastModified": "2024-04-02T10:00:00Z",
                        "Author": { "Title": "Ada" },
                        "ModifiedBy": { "Title": "Grace" }
                    }
                ] } }),
            ),
        ));

        let loaded = load_list(&http, &request("Q1")).await.expect("load");

        assert!(loaded.descriptor.is_hierarchical());
        let rows: Vec<(&str, bool)> = loaded
            .entries
            .iter()
            .map(|entry| (entry.display_name.as_str(), entry.is_container))
            .collect();
        assert_eq!(
            rows,
            vec![("Reports", true), ("Drafts", true), ("plan.docx", false)]
        );
        let file = &loaded.entries[2];
        assert_eq!(
            file.id,
            EntryId::Path {
                parent: String::from("Q1"),
                name: String::from("plan.docx"),
            }
        );
        assert_eq!(file.editor.as_deref(), Some("Grace"));
        assert_eq!(
            file.resource_url.as_deref(),
            Some(
                "https://contoso.sharepoint.com/sites/dev/Shared%20Documents/Q1/plan.docx"
            )
        );
    }

    #[tokio::test]
    async fn given_files_request_fails_when_loaded_then_folders_still_show() {
        let http = FakeHttp::new(library_routes(
            Reply::Json(200, json!({ "value": [{ "Name": "Reports" }] })),
            Reply::Fail("connection reset"),
        ));

        let loaded = load_list(&http, &request("")).await.expect("load");

        assert_eq!(loaded.entries.len(), 1);
        assert!(loaded.entries[0].is_container);
    }

    #[tokio::test]
    async fn given_folders_request_fails_when_loaded_then_files_still_show() {
        let http = FakeHttp::new(library_routes(
            Reply::Fail("connection reset"),
            Reply::Json(
                200,
                json!({ "value": [{ "Name": "a" }, { "Name": "b" }] }),
            ),
        ));

        let loaded = load_list(&http, &request("")).await.expect("load");

        let rows: Vec<(&str, bool)> = loaded
            .entries
            .iter()
            .map(|entry| (entry.display_name.as_str(), entry.is_container))
            .collect();
        assert_eq!(rows, vec![("a", false), ("b", false)]);
    }

    #[tokio::test]
    async fn given_both_listings_fail_when_loaded_then_library_is_empty() {
        let http = FakeHttp::new(library_routes(
            Reply::Json(500, json!({})),
            Reply::Json(403, json!({})),
        ));

        let loaded = load_list(&http, &request("")).await.expect("load");

        assert!(loaded.entries.is_empty());
        assert_eq!(loaded.descriptor.title, "Documents");
    }

    #[tokio::test]
    async fn given_metadata_status_error_when_loaded_then_list_error_returned()
    {
        let http = FakeHttp::new(vec![(
            "lists(guid'",
            Reply::Json(404, json!({})),
        )]);

        let err = load_list(&http, &request("")).await.unwrap_err();

        assert_eq!(err, ListBrowserError::ListStatus { status: 404 });
        assert_eq!(err.to_string(), "Failed to load list: 404");
    }

    #[tokio::test]
    async fn given_metadata_unavailable_when_applied_then_browser_shows_error()
    {
        let http = FakeHttp::new(vec![(
            "lists(guid'",
            Reply::Json(503, json!({})),
        )]);
        let mut state = ListBrowserState::default();
        assert!(state.select_list(String::from("guid-1")));
        let seq = state.begin_load();

        let result = load_list(&http, &LoadRequest { seq, ..request("") }).await;
        assert!(state.apply_loaded(seq, result));

        assert_eq!(state.status(), LoadStatus::Error);
        assert_eq!(state.error(), Some("Failed to load list: 503"));
        assert!(state.entries().is_empty());
    }

    #[tokio::test]
    async fn given_either_envelope_when_loaded_then_entries_are_identical() {
        let items = json!([
            {
                "Id": 7,
                "Title": "Budget",
                "Created": "2024-01-05T09:30:00Z",
                "Author": { "Title": "Ada" }
            },
            { "Id": 8, "FileLeafRef": "notes.txt" }
        ]);
        let odata = FakeHttp::new(vec![
            (
                "/items?",
                Reply::Json(200, json!({ "d": { "results": items.clone() } })),
            ),
            ("lists(guid'", metadata("Tasks", 100)),
        ]);
        let plain = FakeHttp::new(vec![
            ("/items?", Reply::Json(200, json!({ "value": items }))),
            ("lists(guid'", metadata("Tasks", 100)),
        ]);

        let from_odata = load_list(&odata, &request("")).await.expect("load");
        let from_plain = load_list(&plain, &request("")).await.expect("load");

        assert_eq!(from_odata.entries.len(), 2);
        assert_eq!(from_odata.entries, from_plain.entries);
    }

    #[tokio::test]
    async fn given_item_without_id_when_loaded_then_row_is_kept() {
        let http = FakeHttp::new(vec![
            (
                "/items?",
                Reply::Json(
                    200,
                    json!({ "value": [
                        { "Id": 1, "Title": "First" },
                        { "Title": "Orphan" },
                        {}
                    ] }),
                ),
            ),
            ("lists(guid'", metadata("Tasks", 100)),
        ]);

        let loaded = load_list(&http, &request("")).await.expect("load");

        let rows: Vec<(&EntryId, &str)> = loaded
            .entries
            .iter()
            .map(|entry| (&entry.id, entry.display_name.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                (&EntryId::Item(1), "First"),
                (&EntryId::Row(1), "Orphan"),
                (&EntryId::Row(2), "Item #3"),
            ]
        );
        assert!(loaded.entries[1].resource_url.is_none());
    }

    #[tokio::test]
    async fn given_items_status_error_when_loaded_then_items_error_returned() {
        let http = FakeHttp::new(vec![
            ("/items?", Reply::Json(500, json!({}))),
            ("lists(guid'", metadata("Tasks", 100)),
        ]);

        let err = load_list(&http, &request("")).await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to load items: 500");
    }

    #[tokio::test]
    async fn given_transport_failure_when_loaded_then_message_is_passed_on() {
        let http = FakeHttp::new(vec![(
            "lists(guid'",
            Reply::Fail("dns lookup failed"),
        )]);

        let err = load_list(&http, &request("")).await.unwrap_err();

        assert_eq!(err.to_string(), "dns lookup failed");
    }

    #[test]
    fn given_nested_path_when_folder_url_built_then_root_is_prefixed() {
        assert_eq!(
            folder_server_url("/sites/dev/Shared Documents/", ""),
            "/sites/dev/Shared Documents"
        );
        assert_eq!(
            folder_server_url("/sites/dev/Shared Documents", "A/B"),
            "/sites/dev/Shared Documents/A/B"
        );
    }
}
