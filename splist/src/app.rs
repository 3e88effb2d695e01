#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Subscription, Task, Theme};
use splist_rest::RestClient;

use crate::config::AppConfig;
use crate::widgets::Widgets;
use crate::widgets::list_browser::{
    ListBrowserEffect, ListBrowserEvent, ListBrowserWidget,
};
use crate::widgets::list_picker::{
    ListPickerEffect, ListPickerEvent, ListPickerWidget,
};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    IcedReady,
    // List picker widget
    ListPickerUi(ListPickerEvent),
    ListPickerEffect(ListPickerEffect),
    // List browser widget
    ListBrowserUi(ListBrowserEvent),
    ListBrowserEffect(ListBrowserEffect),
    // Direct operations
    ConfigSaved { error: Option<String> },
}

/// Root application state.
pub(crate) struct App {
    pub(crate) config: AppConfig,
    /// `None` when the HTTP client could not be built.
    pub(crate) client: Option<RestClient>,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let mut config = AppConfig::load();
        let client = match RestClient::new(config.take_access_token()) {
            Ok(client) => Some(client),
            Err(err) => {
                log::error!("SharePoint client setup failed: {err}");
                None
            },
        };

        let widgets = Widgets {
            list_picker: ListPickerWidget::new(
                config.selected_list_id().map(ToString::to_string),
            ),
            list_browser: ListBrowserWidget::new(),
        };

        let app = App {
            config,
            client,
            widgets,
        };

        (app, Task::done(AppEvent::IcedReady))
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("SharePoint List Browser")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
