use std::cmp::Ordering;

use super::model::{Column, Entry, SortDirection};

/// Active sort column and direction; both are set or neither is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SortState {
    active: Option<(Column, SortDirection)>,
}

impl SortState {
    pub(crate) fn column(&self) -> Option<Column> {
        self.active.map(|(column, _)| column)
    }

    pub(crate) fn direction(&self) -> Option<SortDirection> {
        self.active.map(|(_, direction)| direction)
    }

    /// Advance the three-state cycle for a header click.
    ///
    /// The active column goes Ascending → Descending → unsorted; any other
    /// column starts at Ascending.
    pub(crate) fn cycle(&mut self, column: Column) {
        self.active = match self.active {
            Some((active, SortDirection::Ascending)) if active == column => {
                Some((column, SortDirection::Descending))
            },
            Some((active, SortDirection::Descending)) if active == column => {
                None
            },
            _ => Some((column, SortDirection::Ascending)),
        };
    }

    pub(crate) fn reset(&mut self) {
        self.active = None;
    }

    /// Return `entries` in display order without touching the stored order.
    ///
    /// Unsorted means fetch order. The sort is stable in both directions.
    pub(crate) fn apply<'a>(&self, entries: &'a [Entry]) -> Vec<&'a Entry> {
        let mut view: Vec<&Entry> = entries.iter().collect();
        if let Some((column, direction)) = self.active {
            view.sort_by(|left, right| {
                let order = compare_entries(column, left, right);
                match direction {
                    SortDirection::Ascending => order,
                    SortDirection::Descending => order.reverse(),
                }
            });
        }
        view
    }
}

fn compare_entries(column: Column, left: &Entry, right: &Entry) -> Ordering {
    match column {
        Column::Title => {
            compare_text(Some(&left.display_name), Some(&right.display_name))
        },
        Column::Author => {
            compare_text(left.author.as_ref(), right.author.as_ref())
        },
        Column::Editor => {
            compare_text(left.editor.as_ref(), right.editor.as_ref())
        },
        // `None` orders before every instant.
        Column::Modified => left.modified.cmp(&right.modified),
        Column::Created => left.created.cmp(&right.created),
    }
}

/// Case-insensitive comparison; absent text sorts as empty.
fn compare_text(left: Option<&String>, right: Option<&String>) -> Ordering {
    let left = left.map(String::as_str).unwrap_or_default();
    let right = right.map(String::as_str).unwrap_or_default();
    left.chars()
        .flat_map(char::to_lowercase)
        .cmp(right.chars().flat_map(char::to_lowercase))
}
