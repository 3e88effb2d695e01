use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::list_browser::services::load_list;
use crate::widgets::list_browser::{
    ListBrowserCommand, ListBrowserCtx, ListBrowserEffect, ListBrowserError,
    ListBrowserEvent,
};

/// Route a list browser UI event through the widget reducer.
pub(crate) fn route_event(
    app: &mut App,
    event: ListBrowserEvent,
) -> Task<AppEvent> {
    let command = map_event_to_command(event);
    route_command(app, command)
}

fn route_command(
    app: &mut App,
    command: ListBrowserCommand,
) -> Task<AppEvent> {
    let ctx = ListBrowserCtx {
        web_url: app.config.web_url(),
    };
    app.widgets
        .list_browser
        .reduce(command, &ctx)
        .map(AppEvent::ListBrowserEffect)
}

/// Route a list browser effect event to app-level tasks.
pub(crate) fn route_effect(
    app: &App,
    effect: ListBrowserEffect,
) -> Task<AppEvent> {
    match effect {
        ListBrowserEffect::LoadRequested(request) => {
            let seq = request.seq;
            let Some(client) = app.client.clone() else {
                return Task::done(loaded_event(
                    seq,
                    Err(ListBrowserError::ClientUnavailable),
                ));
            };
            Task::perform(
                async move { load_list(&client, &request).await },
                move |result| loaded_event(seq, result),
            )
        },
        ListBrowserEffect::OpenResource { url } => {
            log::info!("opening {url}");
            if let Err(err) = open::that_detached(&url) {
                log::warn!("failed to open {url}: {err}");
            }
            Task::none()
        },
    }
}

fn loaded_event(
    seq: u64,
    result: crate::widgets::list_browser::model::LoadResult,
) -> AppEvent {
    AppEvent::ListBrowserUi(ListBrowserEvent::Loaded { seq, result })
}

fn map_event_to_command(event: ListBrowserEvent) -> ListBrowserCommand {
    use {ListBrowserCommand as C, ListBrowserEvent as E};

    match event {
        E::SelectedListChanged { list_id } => C::SelectedListChanged { list_id },
        E::Refresh => C::Refresh,
        E::Loaded { seq, result } => C::Loaded { seq, result },
        E::SortColumnClicked { column } => C::SortColumnClicked { column },
        E::EntryActivated { id } => C::EntryActivated { id },
        E::BreadcrumbClicked { target } => C::BreadcrumbClicked { target },
        E::GripEntered => C::GripEntered,
        E::GripExited => C::GripExited,
        E::ResizeStarted { column } => C::ResizeStarted { column },
        E::CursorMoved { x } => C::CursorMoved { x },
        E::ResizeFrame => C::ResizeFrame,
        E::ResizeReleased => C::ResizeReleased,
        E::ResizeCanceled => C::ResizeCanceled,
    }
}
