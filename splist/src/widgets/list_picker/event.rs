use super::model::{CatalogResult, ListOption};

/// UI events emitted by the list picker.
#[derive(Debug, Clone)]
pub(crate) enum ListPickerEvent {
    /// Fetch the site's list catalog.
    ReloadCatalog,
    /// The catalog request finished.
    CatalogLoaded { result: CatalogResult },
    /// An entry was chosen from the dropdown.
    OptionSelected(ListOption),
}

/// Effect events produced by the list picker reducer.
#[derive(Debug, Clone)]
pub(crate) enum ListPickerEffect {
    /// Request an asynchronous catalog fetch.
    LoadCatalogRequested,
    /// The selected list changed and should be persisted and browsed.
    SelectionChanged { list_id: String },
}
