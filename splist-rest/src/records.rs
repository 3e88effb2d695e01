//! Raw SharePoint records as they arrive on the wire.
//!
//! Every field is optional; a missing or `null` field never fails a
//! response.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Base template code of a generic list.
pub const BASE_TEMPLATE_GENERIC_LIST: i64 = 100;
/// Base template code of a document library.
pub const BASE_TEMPLATE_DOCUMENT_LIBRARY: i64 = 101;

/// Expanded user lookup (`Author`, `Editor`, `ModifiedBy`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UserRef {
    pub title: Option<String>,
}

/// Expanded folder lookup (`RootFolder`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FolderRef {
    pub server_relative_url: Option<String>,
}

/// Response of the list metadata request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListMetadataRecord {
    pub title: Option<String>,
    pub base_template: Option<i64>,
    pub root_folder: Option<FolderRef>,
}

impl ListMetadataRecord {
    /// Return the root folder's server-relative URL, if expanded.
    pub fn root_folder_url(&self) -> Option<&str> {
        self.root_folder
            .as_ref()
            .and_then(|folder| folder.server_relative_url.as_deref())
    }
}

/// One row of a flat list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListItemRecord {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub file_leaf_ref: Option<String>,
    pub modified: Option<String>,
    pub created: Option<String>,
    pub author: Option<UserRef>,
    pub editor: Option<UserRef>,
}

/// One child folder of a library folder.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FolderRecord {
    pub name: Option<String>,
    pub server_relative_url: Option<String>,
    pub time_created: Option<String>,
    pub time_last_modified: Option<String>,
}

/// One child file of a library folder.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FileRecord {
    pub name: Option<String>,
    pub server_relative_url: Option<String>,
    pub title: Option<String>,
    pub time_created: Option<String>,
    pub time_last_modified: Option<String>,
    pub author: Option<UserRef>,
    pub modified_by: Option<UserRef>,
}

/// One entry of the site's list catalog.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListCatalogRecord {
    pub id: Option<String>,
    pub title: Option<String>,
    pub base_template: Option<i64>,
}

/// Return the display name of an expanded user, ignoring blanks.
pub fn user_title(user: Option<&UserRef>) -> Option<String> {
    user.and_then(|user| non_empty(user.title.as_deref()))
}

/// Return an owned copy of `value` unless it is absent or blank.
pub fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(ToString::to_string)
}

/// Parse an ISO-8601 timestamp; unparseable values count as absent.
pub fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?;
    match DateTime::parse_from_rfc3339(raw) {
        Ok(timestamp) => Some(timestamp.with_timezone(&Utc)),
        Err(err) => {
            log::debug!("ignoring timestamp {raw:?}: {err}");
            None
        },
    }
}
