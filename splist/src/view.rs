use iced::widget::{column, container};
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::widgets::list_browser::view::list_table::{self, ListTableProps};
use crate::widgets::list_picker::view::picker_bar::{self, PickerBarProps};

/// Render the root application view: picker bar above the list table.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let picker = picker_bar::view(PickerBarProps {
        vm: app.widgets.list_picker.vm(app.config.web_url()),
    })
    .map(AppEvent::ListPickerUi);

    let table = list_table::view(ListTableProps {
        vm: app.widgets.list_browser.vm(),
    })
    .map(AppEvent::ListBrowserUi);

    container(column![picker, table])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
