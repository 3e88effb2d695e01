use iced::Task;

use crate::app::{App, AppEvent};
use crate::routers;
use crate::widgets::list_browser::ListBrowserEvent;
use crate::widgets::list_picker::services::load_catalog;
use crate::widgets::list_picker::{
    ListPickerCommand, ListPickerEffect, ListPickerError, ListPickerEvent,
};

/// Route a list picker UI event through the widget reducer.
pub(crate) fn route_event(
    app: &mut App,
    event: ListPickerEvent,
) -> Task<AppEvent> {
    let command = map_event_to_command(event);
    route_command(app, command)
}

/// Route a list picker command directly.
pub(crate) fn route_command(
    app: &mut App,
    command: ListPickerCommand,
) -> Task<AppEvent> {
    app.widgets
        .list_picker
        .reduce(command)
        .map(AppEvent::ListPickerEffect)
}

/// Route a list picker effect event to app-level tasks.
pub(crate) fn route_effect(
    app: &mut App,
    effect: ListPickerEffect,
) -> Task<AppEvent> {
    match effect {
        ListPickerEffect::LoadCatalogRequested => load_catalog_task(app),
        ListPickerEffect::SelectionChanged { list_id } => {
            let persist = app.config.select_list(list_id.clone());
            let save = Task::perform(async move { persist() }, |result| {
                AppEvent::ConfigSaved {
                    error: result.err().map(|err| err.to_string()),
                }
            });
            let browse = routers::list_browser::route_event(
                app,
                ListBrowserEvent::SelectedListChanged { list_id },
            );
            Task::batch([save, browse])
        },
    }
}

fn load_catalog_task(app: &App) -> Task<AppEvent> {
    let Some(client) = app.client.clone() else {
        return Task::done(catalog_loaded_event(Err(
            ListPickerError::ClientUnavailable,
        )));
    };
    let web_url = app.config.web_url().to_string();

    Task::perform(
        async move { load_catalog(&client, &web_url).await },
        catalog_loaded_event,
    )
}

fn catalog_loaded_event(
    result: crate::widgets::list_picker::model::CatalogResult,
) -> AppEvent {
    AppEvent::ListPickerUi(ListPickerEvent::CatalogLoaded { result })
}

fn map_event_to_command(event: ListPickerEvent) -> ListPickerCommand {
    use {ListPickerCommand as C, ListPickerEvent as E};

    match event {
        E::ReloadCatalog => C::ReloadCatalog,
        E::CatalogLoaded { result } => C::CatalogLoaded { result },
        E::OptionSelected(option) => C::OptionSelected(option),
    }
}
