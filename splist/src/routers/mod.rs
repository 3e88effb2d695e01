pub(crate) mod list_browser;
pub(crate) mod list_picker;
