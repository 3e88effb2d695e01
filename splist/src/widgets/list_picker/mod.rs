pub(crate) mod command;
mod errors;
pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod reducer;
pub(crate) mod services;
pub(crate) mod state;
pub(crate) mod view;

pub(crate) use command::ListPickerCommand;
pub(crate) use errors::ListPickerError;
pub(crate) use event::{ListPickerEffect, ListPickerEvent};
use iced::Task;
use state::ListPickerState;

/// List picker widget: fetches the site's list catalog and tracks which
/// list or library is selected.
pub(crate) struct ListPickerWidget {
    state: ListPickerState,
}

impl ListPickerWidget {
    /// Create a widget preselecting the persisted list id, if any.
    pub(crate) fn new(selected_id: Option<String>) -> Self {
        Self {
            state: ListPickerState::new(selected_id),
        }
    }

    /// Reduce a command into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        command: ListPickerCommand,
    ) -> Task<ListPickerEffect> {
        reducer::reduce(&mut self.state, command)
    }

    /// Return the view model for the picker bar.
    pub(crate) fn vm<'a>(
        &'a self,
        web_url: &'a str,
    ) -> model::ListPickerViewModel<'a> {
        model::ListPickerViewModel {
            options: self.state.options(),
            selected: self.state.selected(),
            is_loading: self.state.is_loading(),
            web_url,
        }
    }
}
