use iced::Task;

use super::command::ListPickerCommand;
use super::event::ListPickerEffect;
use super::state::ListPickerState;

/// Reduce a list picker command into state updates and effects.
pub(crate) fn reduce(
    state: &mut ListPickerState,
    command: ListPickerCommand,
) -> Task<ListPickerEffect> {
    match command {
        ListPickerCommand::ReloadCatalog => {
            if !state.begin_catalog_load() {
                return Task::none();
            }
            Task::done(ListPickerEffect::LoadCatalogRequested)
        },
        ListPickerCommand::CatalogLoaded { result } => {
            let options = result.unwrap_or_else(|err| {
                log::warn!("failed to load list catalog: {err}");
                Vec::new()
            });
            state.apply_catalog(options);

            if state.selected_id().is_some() {
                return Task::none();
            }
            let first = state.options().first().map(|option| option.id.clone());
            match first {
                Some(list_id) => select(state, list_id),
                None => Task::none(),
            }
        },
        ListPickerCommand::OptionSelected(option) => select(state, option.id),
    }
}

fn select(
    state: &mut ListPickerState,
    list_id: String,
) -> Task<ListPickerEffect> {
    if !state.select(list_id.clone()) {
        return Task::none();
    }
    Task::done(ListPickerEffect::SelectionChanged { list_id })
}
