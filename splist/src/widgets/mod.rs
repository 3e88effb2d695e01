pub(crate) mod list_browser;
pub(crate) mod list_picker;

pub(crate) struct Widgets {
    pub(crate) list_picker: list_picker::ListPickerWidget,
    pub(crate) list_browser: list_browser::ListBrowserWidget,
}
