use iced::{Event, Subscription, event, keyboard, mouse, window};

use crate::app::{App, AppEvent};
use crate::widgets::list_browser::ListBrowserEvent;

/// Build the active subscription set from current app state.
///
/// Pointer tracking runs while the pointer is over a resize grip or a
/// column is being resized; the frame clock only during a resize.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let browser = &app.widgets.list_browser;
    if !browser.is_tracking_pointer() {
        return Subscription::none();
    }

    let pointer = event::listen_with(pointer_event);
    if !browser.is_resizing() {
        return pointer;
    }

    let frames = window::frames().map(|_| {
        AppEvent::ListBrowserUi(ListBrowserEvent::ResizeFrame)
    });
    Subscription::batch([frames, pointer])
}

/// Map raw runtime events to pointer and resize events.
fn pointer_event(
    event: Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<AppEvent> {
    let event = match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            ListBrowserEvent::CursorMoved { x: position.x }
        },
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            ListBrowserEvent::ResizeReleased
        },
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => ListBrowserEvent::ResizeCanceled,
        Event::Window(window::Event::Unfocused) => {
            ListBrowserEvent::ResizeCanceled
        },
        _ => return None,
    };
    Some(AppEvent::ListBrowserUi(event))
}
