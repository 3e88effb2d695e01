use super::columns::{ColumnLayout, ResizeSession};
use super::model::{
    BreadcrumbItem, Column, Entry, EntryId, ListDescriptor, LoadResult,
    LoadStatus,
};
use super::navigation::NavigationState;
use super::sort::SortState;

/// Label of the breadcrumb root when the library title is not known yet.
const ROOT_FALLBACK_LABEL: &str = "Root";

/// Runtime state for the list browser.
#[derive(Debug)]
pub(crate) struct ListBrowserState {
    selected_list_id: Option<String>,
    descriptor: Option<ListDescriptor>,
    /// Entries in fetch order; sorting never reorders this vector.
    entries: Vec<Entry>,
    navigation: NavigationState,
    sort: SortState,
    columns: ColumnLayout,
    resize: Option<ResizeSession>,
    /// Pointer is over a resize grip.
    grip_hovered: bool,
    /// Last pointer x seen while tracking.
    cursor_x: Option<f32>,
    status: LoadStatus,
    error: Option<String>,
    load_seq: u64,
}

impl Default for ListBrowserState {
    fn default() -> Self {
        Self {
            selected_list_id: None,
            descriptor: None,
            entries: Vec::new(),
            navigation: NavigationState::default(),
            sort: SortState::default(),
            columns: ColumnLayout::default(),
            resize: None,
            grip_hovered: false,
            cursor_x: None,
            status: LoadStatus::Ready,
            error: None,
            load_seq: 0,
        }
    }
}

impl ListBrowserState {
    // --- Read access ---

    pub(crate) fn selected_list_id(&self) -> Option<&str> {
        self.selected_list_id.as_deref()
    }

    #[cfg(test)]
    pub(crate) fn descriptor(&self) -> Option<&ListDescriptor> {
        self.descriptor.as_ref()
    }

    /// Entries in fetch order.
    #[cfg(test)]
    pub(crate) fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entries in display order.
    pub(crate) fn sorted_entries(&self) -> Vec<&Entry> {
        self.sort.apply(&self.entries)
    }

    pub(crate) fn current_path(&self) -> &str {
        self.navigation.current_path()
    }

    #[cfg(test)]
    pub(crate) fn load_seq(&self) -> u64 {
        self.load_seq
    }

    #[cfg(test)]
    pub(crate) fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub(crate) fn sort(&self) -> SortState {
        self.sort
    }

    pub(crate) fn columns(&self) -> &ColumnLayout {
        &self.columns
    }

    pub(crate) fn resizing_column(&self) -> Option<Column> {
        self.resize.as_ref().map(ResizeSession::column)
    }

    pub(crate) fn is_resizing(&self) -> bool {
        self.resize.is_some()
    }

    /// Whether pointer positions are needed: over a grip or mid-drag.
    pub(crate) fn is_tracking_pointer(&self) -> bool {
        self.grip_hovered || self.resize.is_some()
    }

    pub(crate) fn status(&self) -> LoadStatus {
        self.status
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn list_title(&self) -> &str {
        self.descriptor
            .as_ref()
            .map(|descriptor| descriptor.title.as_str())
            .unwrap_or_default()
    }

    pub(crate) fn is_hierarchical(&self) -> bool {
        self.descriptor
            .as_ref()
            .is_some_and(ListDescriptor::is_hierarchical)
    }

    /// Breadcrumb trail; empty unless the list is a loaded library.
    pub(crate) fn breadcrumb(&self) -> Vec<BreadcrumbItem> {
        if !self.is_hierarchical() {
            return Vec::new();
        }
        let title = self.list_title();
        let root_label = if title.is_empty() {
            ROOT_FALLBACK_LABEL
        } else {
            title
        };
        self.navigation.breadcrumb(root_label)
    }

    pub(crate) fn entry(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    // --- Write access ---

    /// Switch to another list.
    ///
    /// Returns `false` when `list_id` is already selected. Selecting the
    /// empty id clears the browser and invalidates any in-flight load.
    pub(super) fn select_list(&mut self, list_id: String) -> bool {
        let list_id = Some(list_id).filter(|id| !id.is_empty());
        if self.selected_list_id == list_id {
            return false;
        }

        self.selected_list_id = list_id;
        self.descriptor = None;
        self.entries.clear();
        self.navigation = NavigationState::default();
        self.sort.reset();
        self.error = None;
        self.status = LoadStatus::Ready;
        if self.selected_list_id.is_none() {
            self.load_seq += 1;
        }
        true
    }

    /// Mark a new load as started and return its sequence number.
    pub(super) fn begin_load(&mut self) -> u64 {
        self.load_seq += 1;
        self.status = LoadStatus::Loading;
        self.error = None;
        self.load_seq
    }

    /// Apply a completed load.
    ///
    /// Returns `false` when a newer load was started in the meantime.
    pub(super) fn apply_loaded(&mut self, seq: u64, result: LoadResult) -> bool {
        if seq != self.load_seq {
            return false;
        }

        match result {
            Ok(loaded) => {
                self.descriptor = Some(loaded.descriptor);
                self.entries = loaded.entries;
                self.status = LoadStatus::Ready;
                self.error = None;
            },
            Err(err) => {
                self.entries.clear();
                self.status = LoadStatus::Error;
                self.error = Some(err.to_string());
            },
        }
        true
    }

    /// Descend into the folder entry named `name`.
    ///
    /// Returns `false` unless the list is hierarchical and `name` is one of
    /// the current folder's child folders.
    pub(super) fn enter_folder(&mut self, name: &str) -> bool {
        if !self.is_hierarchical() {
            return false;
        }
        let is_child_folder = self
            .entries
            .iter()
            .any(|entry| entry.is_container && entry.display_name == name);
        if !is_child_folder {
            return false;
        }

        self.navigation.enter(name);
        true
    }

    pub(super) fn go_to_root(&mut self) {
        self.navigation.go_to_root();
    }

    pub(super) fn go_to_segment(&mut self, index: usize) -> bool {
        self.navigation.go_to_segment(index)
    }

    pub(super) fn cycle_sort(&mut self, column: Column) {
        self.sort.cycle(column);
    }

    /// The pointer entered a resize grip. Positions seen before this are
    /// stale.
    pub(super) fn enter_grip(&mut self) {
        self.grip_hovered = true;
        self.cursor_x = None;
    }

    pub(super) fn leave_grip(&mut self) {
        self.grip_hovered = false;
    }

    /// Start dragging `column`'s right edge from the last known pointer x.
    pub(super) fn begin_resize(&mut self, column: Column) {
        let start_width = self.columns.width(column);
        self.resize =
            Some(ResizeSession::begin(column, start_width, self.cursor_x));
    }

    pub(super) fn track_pointer(&mut self, x: f32) {
        self.cursor_x = Some(x);
        if let Some(session) = self.resize.as_mut() {
            session.track(x);
        }
    }

    /// Commit the width recorded since the previous frame.
    pub(super) fn commit_resize_frame(&mut self) {
        let Some(session) = self.resize.as_mut() else {
            return;
        };
        if let Some(width) = session.take_pending() {
            let column = session.column();
            self.columns.set_width(column, width);
        }
    }

    /// Commit the final width and end the drag.
    pub(super) fn finish_resize(&mut self) {
        self.commit_resize_frame();
        self.resize = None;
    }

    /// End the drag and restore the width it started from.
    pub(super) fn cancel_resize(&mut self) {
        if let Some(session) = self.resize.take() {
            self.columns
                .set_width(session.column(), session.start_width());
        }
    }
}
