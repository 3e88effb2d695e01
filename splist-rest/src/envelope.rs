//! OData response envelopes.
//!
//! SharePoint answers in `odata=verbose` (`{ "d": { "results": [...] } }`)
//! or `odata=nometadata` (`{ "value": [...] }`) depending on content
//! negotiation. Everything past this module sees plain records.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;

/// Extract the records of a collection response.
///
/// The verbose shape wins when both are present. When neither is present
/// the collection is empty. Records that do not match `T` are skipped.
pub fn collection<T: DeserializeOwned>(body: &Value) -> Vec<T> {
    let records = body
        .get("d")
        .and_then(|d| d.get("results"))
        .filter(|results| results.is_array())
        .or_else(|| body.get("value"));

    let Some(Value::Array(records)) = records else {
        return Vec::new();
    };

    records
        .iter()
        .filter_map(|record| match T::deserialize(record) {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!("skipping malformed record: {err}");
                None
            },
        })
        .collect()
}

/// Extract a single-object response, bare or wrapped in `d`.
pub fn single<T: DeserializeOwned>(body: &Value) -> Result<T> {
    let record = body.get("d").filter(|d| d.is_object()).unwrap_or(body);
    Ok(T::deserialize(record)?)
}
