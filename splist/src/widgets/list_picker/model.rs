use std::fmt;

use crate::widgets::list_browser::model::ListKind;

use super::errors::ListPickerError;

/// One selectable entry of the list catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ListOption {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) kind: ListKind,
}

impl fmt::Display for ListOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ListKind::Hierarchical => {
                write!(f, "{} (Document Library)", self.title)
            },
            ListKind::Flat => f.write_str(&self.title),
        }
    }
}

pub(crate) type CatalogResult = Result<Vec<ListOption>, ListPickerError>;

/// Read-only snapshot consumed by the picker bar.
#[derive(Debug, Clone)]
pub(crate) struct ListPickerViewModel<'a> {
    pub(crate) options: &'a [ListOption],
    pub(crate) selected: Option<&'a ListOption>,
    pub(crate) is_loading: bool,
    pub(crate) web_url: &'a str,
}
