use super::model::{BreadcrumbTarget, Column, EntryId, LoadRequest, LoadResult};

/// UI events emitted by the list browser presentation layer.
#[derive(Debug, Clone)]
pub(crate) enum ListBrowserEvent {
    /// The selected list changed; the empty id clears the browser.
    SelectedListChanged { list_id: String },
    /// Reload the current folder of the current list.
    Refresh,
    /// A `loadList` call finished.
    Loaded { seq: u64, result: LoadResult },
    /// A column header was clicked.
    SortColumnClicked { column: Column },
    /// A row was activated.
    EntryActivated { id: EntryId },
    /// A breadcrumb item was clicked.
    BreadcrumbClicked { target: BreadcrumbTarget },
    /// The pointer entered a column's resize grip.
    GripEntered,
    /// The pointer left a column's resize grip.
    GripExited,
    /// A column's resize grip was pressed.
    ResizeStarted { column: Column },
    /// The pointer moved while over a grip or during a resize.
    CursorMoved { x: f32 },
    /// A frame is about to be drawn while a resize is in progress.
    ResizeFrame,
    /// The pointer was released while a resize is in progress.
    ResizeReleased,
    /// The resize was abandoned (escape or focus loss).
    ResizeCanceled,
}

/// Effect events produced by the list browser reducer.
#[derive(Debug, Clone)]
pub(crate) enum ListBrowserEffect {
    /// Request an asynchronous `loadList` call.
    LoadRequested(LoadRequest),
    /// Request opening an entry's resource in the system browser.
    OpenResource { url: String },
}
