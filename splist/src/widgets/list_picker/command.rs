use super::model::{CatalogResult, ListOption};

/// Internal commands dispatched to the list picker reducer.
#[derive(Debug, Clone)]
pub(crate) enum ListPickerCommand {
    ReloadCatalog,
    CatalogLoaded { result: CatalogResult },
    OptionSelected(ListOption),
}
