use chrono::{DateTime, Utc};
use splist_rest::records::BASE_TEMPLATE_DOCUMENT_LIBRARY;

use super::columns::ColumnLayout;
use super::errors::ListBrowserError;
use super::sort::SortState;

/// Date format used for the Modified and Created cells.
const DATE_CELL_FORMAT: &str = "%Y-%m-%d";

/// Whether a list is a flat collection or a folder hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListKind {
    Flat,
    Hierarchical,
}

impl ListKind {
    /// Derive the kind from a base template code.
    ///
    /// Only document libraries browse as a hierarchy; every other template
    /// is treated as a flat list.
    pub(crate) fn from_base_template(code: Option<i64>) -> Self {
        match code {
            Some(BASE_TEMPLATE_DOCUMENT_LIBRARY) => Self::Hierarchical,
            _ => Self::Flat,
        }
    }
}

/// Identity of the list currently being browsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ListDescriptor {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) kind: ListKind,
    pub(crate) root_folder_url: Option<String>,
}

impl ListDescriptor {
    pub(crate) fn is_hierarchical(&self) -> bool {
        self.kind == ListKind::Hierarchical
    }
}

/// Stable identity of an entry.
///
/// Flat list items keep their native id; library folders and files are
/// identified by their parent path and name, which is unique per folder.
/// Items the server returned without an id fall back to their fetch
/// position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum EntryId {
    Item(i64),
    Row(usize),
    Path { parent: String, name: String },
}

/// One normalized row of the browsed collection.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Entry {
    pub(crate) id: EntryId,
    pub(crate) display_name: String,
    pub(crate) is_container: bool,
    pub(crate) modified: Option<DateTime<Utc>>,
    pub(crate) created: Option<DateTime<Utc>>,
    pub(crate) author: Option<String>,
    pub(crate) editor: Option<String>,
    pub(crate) resource_url: Option<String>,
}

impl Entry {
    /// Return the presentation text of one cell.
    pub(crate) fn cell_text(&self, column: Column) -> String {
        match column {
            Column::Title => self.display_name.clone(),
            Column::Modified => format_date(self.modified),
            Column::Created => format_date(self.created),
            Column::Author => self.author.clone().unwrap_or_default(),
            Column::Editor => self.editor.clone().unwrap_or_default(),
        }
    }
}

fn format_date(timestamp: Option<DateTime<Utc>>) -> String {
    timestamp
        .map(|timestamp| timestamp.format(DATE_CELL_FORMAT).to_string())
        .unwrap_or_default()
}

/// Table columns; each is sortable and resizable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Column {
    Title,
    Modified,
    Created,
    Author,
    Editor,
}

impl Column {
    /// Columns in display order.
    pub(crate) const ALL: [Column; 5] = [
        Column::Title,
        Column::Modified,
        Column::Created,
        Column::Author,
        Column::Editor,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Column::Title => "Name",
            Column::Modified => "Modified",
            Column::Created => "Created",
            Column::Author => "Created By",
            Column::Editor => "Modified By",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub(crate) fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Lifecycle of the most recent load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoadStatus {
    Loading,
    Ready,
    Error,
}

/// Where a breadcrumb item leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BreadcrumbTarget {
    /// The library root (logical index -1).
    Root,
    /// The folder at this depth of the current path.
    Segment(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BreadcrumbItem {
    pub(crate) label: String,
    pub(crate) target: BreadcrumbTarget,
}

/// Everything needed to issue one `loadList` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LoadRequest {
    /// Sequence number; completions carrying an older number are dropped.
    pub(crate) seq: u64,
    pub(crate) web_url: String,
    pub(crate) list_id: String,
    pub(crate) path: String,
}

/// Successful outcome of a `loadList` call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LoadedList {
    pub(crate) descriptor: ListDescriptor,
    pub(crate) entries: Vec<Entry>,
}

pub(crate) type LoadResult = Result<LoadedList, ListBrowserError>;

/// Read-only snapshot consumed by the list table view.
#[derive(Debug, Clone)]
pub(crate) struct ListBrowserViewModel<'a> {
    pub(crate) has_selection: bool,
    pub(crate) status: LoadStatus,
    pub(crate) error_message: Option<&'a str>,
    pub(crate) list_title: &'a str,
    pub(crate) is_hierarchical: bool,
    pub(crate) entries: Vec<&'a Entry>,
    pub(crate) breadcrumb: Vec<BreadcrumbItem>,
    pub(crate) columns: &'a ColumnLayout,
    pub(crate) sort: SortState,
    pub(crate) resizing: Option<Column>,
}
