use iced::widget::text::Wrapping;
use iced::widget::{button, container, pick_list, row, text};
use iced::{Element, Length, Theme, alignment};

use crate::shared::ui::table_style;
use crate::widgets::list_picker::event::ListPickerEvent;
use crate::widgets::list_picker::model::ListPickerViewModel;

const BAR_HEIGHT: f32 = 40.0;
const BAR_PADDING_X: f32 = 10.0;
const BAR_SPACING: f32 = 8.0;
const FONT_SIZE: f32 = 13.0;
const PICK_LIST_WIDTH: f32 = 320.0;

const PICKER_LABEL: &str = "Select List or Document Library";
const PICKER_PLACEHOLDER: &str = "Choose a list";
const LOADING_LABEL: &str = "Loading lists...";
const NO_SITE_LABEL: &str = "No site configured";

/// Props for the list picker bar.
#[derive(Debug, Clone)]
pub(crate) struct PickerBarProps<'a> {
    pub(crate) vm: ListPickerViewModel<'a>,
}

/// Render the site label, the list dropdown and the reload button.
pub(crate) fn view(
    props: PickerBarProps<'_>,
) -> Element<'_, ListPickerEvent, Theme, iced::Renderer> {
    let vm = props.vm;

    let site = if vm.web_url.is_empty() {
        NO_SITE_LABEL
    } else {
        vm.web_url
    };
    let site_label = text(site)
        .size(FONT_SIZE)
        .wrapping(Wrapping::None)
        .width(Length::Fill);

    let picker: Element<'_, ListPickerEvent, Theme, iced::Renderer> =
        if vm.is_loading {
            text(LOADING_LABEL)
                .size(FONT_SIZE)
                .width(Length::Fixed(PICK_LIST_WIDTH))
                .into()
        } else {
            pick_list(
                vm.options,
                vm.selected.cloned(),
                ListPickerEvent::OptionSelected,
            )
            .placeholder(PICKER_PLACEHOLDER)
            .text_size(FONT_SIZE)
            .width(Length::Fixed(PICK_LIST_WIDTH))
            .into()
        };

    let mut reload = button(text("Reload").size(FONT_SIZE));
    if !vm.is_loading && !vm.web_url.is_empty() {
        reload = reload.on_press(ListPickerEvent::ReloadCatalog);
    }

    let content = row![
        site_label,
        text(PICKER_LABEL).size(FONT_SIZE).wrapping(Wrapping::None),
        picker,
        reload,
    ]
    .spacing(BAR_SPACING)
    .align_y(alignment::Vertical::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(BAR_HEIGHT))
        .padding([0.0, BAR_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .style(table_style::header_style)
        .into()
}
