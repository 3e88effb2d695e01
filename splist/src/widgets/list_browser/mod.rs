mod columns;
pub(crate) mod command;
mod errors;
pub(crate) mod event;
pub(crate) mod model;
mod navigation;
pub(crate) mod reducer;
pub(crate) mod services;
mod sort;
pub(crate) mod state;
pub(crate) mod view;

pub(crate) use command::ListBrowserCommand;
pub(crate) use errors::ListBrowserError;
pub(crate) use event::{ListBrowserEffect, ListBrowserEvent};
use iced::Task;
pub(crate) use reducer::ListBrowserCtx;
use state::ListBrowserState;

/// List browser widget: loads the selected list or library, keeps the
/// folder position, sort and column widths, and drops stale loads.
pub(crate) struct ListBrowserWidget {
    state: ListBrowserState,
}

impl ListBrowserWidget {
    /// Create a new widget with no list selected.
    pub(crate) fn new() -> Self {
        Self {
            state: ListBrowserState::default(),
        }
    }

    /// Reduce a command into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        command: ListBrowserCommand,
        ctx: &ListBrowserCtx<'_>,
    ) -> Task<ListBrowserEffect> {
        reducer::reduce(&mut self.state, command, ctx)
    }

    /// Return the view model for the list table.
    pub(crate) fn vm(&self) -> model::ListBrowserViewModel<'_> {
        model::ListBrowserViewModel {
            has_selection: self.state.selected_list_id().is_some(),
            status: self.state.status(),
            error_message: self.state.error(),
            list_title: self.state.list_title(),
            is_hierarchical: self.state.is_hierarchical(),
            entries: self.state.sorted_entries(),
            breadcrumb: self.state.breadcrumb(),
            columns: self.state.columns(),
            sort: self.state.sort(),
            resizing: self.state.resizing_column(),
        }
    }

    /// Return whether a column drag is in progress.
    pub(crate) fn is_resizing(&self) -> bool {
        self.state.is_resizing()
    }

    /// Return whether pointer positions are needed.
    pub(crate) fn is_tracking_pointer(&self) -> bool {
        self.state.is_tracking_pointer()
    }
}
