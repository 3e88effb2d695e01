use std::collections::BTreeMap;

use super::model::Column;

/// Narrowest width a column can be dragged to.
pub(crate) const MIN_COLUMN_WIDTH: f32 = 100.0;

fn default_width(column: Column) -> f32 {
    match column {
        Column::Title => 300.0,
        Column::Modified | Column::Created => 160.0,
        Column::Author | Column::Editor => 180.0,
    }
}

/// Committed width of every column.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ColumnLayout {
    widths: BTreeMap<Column, f32>,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            widths: Column::ALL
                .into_iter()
                .map(|column| (column, default_width(column)))
                .collect(),
        }
    }
}

impl ColumnLayout {
    pub(crate) fn width(&self, column: Column) -> f32 {
        self.widths
            .get(&column)
            .copied()
            .unwrap_or_else(|| default_width(column))
    }

    pub(crate) fn set_width(&mut self, column: Column, width: f32) {
        self.widths.insert(column, width.max(MIN_COLUMN_WIDTH));
    }
}

/// One in-progress column drag.
///
/// The origin is the last pointer position seen over the grip before the
/// press. Without one, the first pointer sample after the press is used.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResizeSession {
    column: Column,
    start_width: f32,
    origin_x: Option<f32>,
    pending: Option<f32>,
}

impl ResizeSession {
    pub(crate) fn begin(
        column: Column,
        start_width: f32,
        origin_x: Option<f32>,
    ) -> Self {
        Self {
            column,
            start_width,
            origin_x,
            pending: None,
        }
    }

    pub(crate) fn column(&self) -> Column {
        self.column
    }

    pub(crate) fn start_width(&self) -> f32 {
        self.start_width
    }

    /// Record a pointer sample; the candidate width waits for the next frame.
    pub(crate) fn track(&mut self, x: f32) {
        let Some(origin) = self.origin_x else {
            self.origin_x = Some(x);
            return;
        };
        let candidate = (self.start_width + (x - origin)).max(MIN_COLUMN_WIDTH);
        self.pending = Some(candidate);
    }

    /// Take the candidate width recorded since the last commit, if any.
    pub(crate) fn take_pending(&mut self) -> Option<f32> {
        self.pending.take()
    }
}
