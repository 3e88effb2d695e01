use super::model::ListOption;

/// Runtime state for the list picker.
#[derive(Debug, Default)]
pub(crate) struct ListPickerState {
    options: Vec<ListOption>,
    selected_id: Option<String>,
    loading: bool,
}

impl ListPickerState {
    pub(crate) fn new(selected_id: Option<String>) -> Self {
        Self {
            selected_id: selected_id.filter(|id| !id.is_empty()),
            ..Self::default()
        }
    }

    // --- Read access ---

    pub(crate) fn options(&self) -> &[ListOption] {
        &self.options
    }

    pub(crate) fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Return the selected option, if it is part of the catalog.
    pub(crate) fn selected(&self) -> Option<&ListOption> {
        let id = self.selected_id.as_deref()?;
        self.options.iter().find(|option| option.id == id)
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.loading
    }

    // --- Write access ---

    /// Mark the catalog as loading; the dropdown is disabled meanwhile.
    ///
    /// Returns `false` when a fetch is already in flight.
    pub(super) fn begin_catalog_load(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    pub(super) fn apply_catalog(&mut self, options: Vec<ListOption>) {
        self.options = options;
        self.loading = false;
    }

    /// Select `id`. Returns `false` when it is already selected.
    pub(super) fn select(&mut self, id: String) -> bool {
        if self.selected_id.as_deref() == Some(id.as_str()) {
            return false;
        }
        self.selected_id = Some(id);
        true
    }
}
