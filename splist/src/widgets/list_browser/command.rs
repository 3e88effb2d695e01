use super::model::{BreadcrumbTarget, Column, EntryId, LoadResult};

/// Internal commands dispatched to the list browser reducer.
#[derive(Debug, Clone)]
pub(crate) enum ListBrowserCommand {
    SelectedListChanged { list_id: String },
    Refresh,
    Loaded { seq: u64, result: LoadResult },
    SortColumnClicked { column: Column },
    EntryActivated { id: EntryId },
    BreadcrumbClicked { target: BreadcrumbTarget },
    GripEntered,
    GripExited,
    ResizeStarted { column: Column },
    CursorMoved { x: f32 },
    ResizeFrame,
    ResizeReleased,
    ResizeCanceled,
}
