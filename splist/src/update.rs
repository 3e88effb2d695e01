use iced::Task;

use super::{App, AppEvent};
use crate::routers;
use crate::widgets::list_browser::ListBrowserEvent;
use crate::widgets::list_picker::ListPickerCommand;

/// Thin dispatch: route each event to its owning router or handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::IcedReady => start(app),
        // List picker widget
        AppEvent::ListPickerUi(event) => {
            routers::list_picker::route_event(app, event)
        },
        AppEvent::ListPickerEffect(effect) => {
            routers::list_picker::route_effect(app, effect)
        },
        // List browser widget
        AppEvent::ListBrowserUi(event) => {
            routers::list_browser::route_event(app, event)
        },
        AppEvent::ListBrowserEffect(effect) => {
            routers::list_browser::route_effect(app, effect)
        },
        // Direct operations
        AppEvent::ConfigSaved { error: None } => Task::none(),
        AppEvent::ConfigSaved { error: Some(err) } => {
            log::warn!("failed to save config: {err}");
            Task::none()
        },
    }
}

/// Fetch the list catalog and browse the persisted selection.
fn start(app: &mut App) -> Task<AppEvent> {
    if app.config.web_url().is_empty() {
        log::warn!("no site configured; set SPLIST_WEB_URL or web_url");
        return Task::none();
    }

    let catalog = routers::list_picker::route_command(
        app,
        ListPickerCommand::ReloadCatalog,
    );
    let Some(list_id) = app.config.selected_list_id().map(ToString::to_string)
    else {
        return catalog;
    };
    let browse = routers::list_browser::route_event(
        app,
        ListBrowserEvent::SelectedListChanged { list_id },
    );
    Task::batch([catalog, browse])
}
