//! Request URL builders for the SharePoint `_api/web` endpoints.
//!
//! The query strings are reproduced exactly; servers and proxies in front
//! of SharePoint are known to cache on the literal URL.

const LIST_METADATA_QUERY: &str = "$select=Title,BaseTemplate,RootFolder/ServerRelativeUrl&$expand=RootFolder";
const LIST_ITEMS_QUERY: &str = "$top=100&$select=Id,Title,FileLeafRef,Modified,Created,Author/Title,Editor/Title&$expand=Author,Editor&$orderby=Id desc";
const FOLDER_FOLDERS_QUERY: &str =
    "$select=Name,ServerRelativeUrl,TimeCreated,TimeLastModified";
const FOLDER_FILES_QUERY: &str = "$select=Name,ServerRelativeUrl,Title,TimeCreated,TimeLastModified,Author/Title,ModifiedBy/Title&$expand=Author,ModifiedBy";
const LIST_CATALOG_QUERY: &str =
    "$filter=Hidden eq false&$select=Id,Title,BaseTemplate&$orderby=Title";

/// `GET` URL for a list's title, base template and root folder.
pub fn list_metadata_url(web_url: &str, list_id: &str) -> String {
    format!("{}?{LIST_METADATA_QUERY}", list_url(web_url, list_id))
}

/// `GET` URL for the newest 100 items of a flat list.
pub fn list_items_url(web_url: &str, list_id: &str) -> String {
    format!("{}/items?{LIST_ITEMS_QUERY}", list_url(web_url, list_id))
}

/// `GET` URL for the immediate child folders of a library folder.
pub fn folder_folders_url(web_url: &str, server_relative_url: &str) -> String {
    format!(
        "{}/Folders?{FOLDER_FOLDERS_QUERY}",
        folder_url(web_url, server_relative_url)
    )
}

/// `GET` URL for the immediate child files of a library folder.
pub fn folder_files_url(web_url: &str, server_relative_url: &str) -> String {
    format!(
        "{}/Files?{FOLDER_FILES_QUERY}",
        folder_url(web_url, server_relative_url)
    )
}

/// `GET` URL for the site's visible lists, ordered by title.
pub fn list_catalog_url(web_url: &str) -> String {
    format!("{}/_api/web/lists?{LIST_CATALOG_QUERY}", site(web_url))
}

/// Browser URL of a flat list item's display form.
pub fn item_display_url(web_url: &str, list_id: &str, item_id: i64) -> String {
    format!(
        "{}/_layouts/15/listform.aspx?PageType=4&ListId={list_id}&ID={item_id}",
        site(web_url)
    )
}

/// Resolve a server-relative URL against the site's scheme and host.
///
/// Returns `None` when `web_url` is not an absolute URL.
pub fn absolute_url(web_url: &str, server_relative_url: &str) -> Option<String> {
    let base = reqwest::Url::parse(web_url).ok()?;
    base.join(server_relative_url).ok().map(String::from)
}

/// Escape a server-relative path for use inside an OData string literal.
///
/// Single quotes are doubled first, then the result is percent-encoded with
/// the same unreserved set as JavaScript's `encodeURIComponent`.
pub fn encode_server_relative_url(path: &str) -> String {
    let literal = path.replace('\'', "''");
    let mut encoded = String::with_capacity(literal.len());
    for byte in literal.bytes() {
        if is_unreserved(byte) {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

fn site(web_url: &str) -> &str {
    web_url.trim_end_matches('/')
}

fn list_url(web_url: &str, list_id: &str) -> String {
    format!("{}/_api/web/lists(guid'{list_id}')", site(web_url))
}

fn folder_url(web_url: &str, server_relative_url: &str) -> String {
    format!(
        "{}/_api/web/GetFolderByServerRelativeUrl('{}')",
        site(web_url),
        encode_server_relative_url(server_relative_url)
    )
}
