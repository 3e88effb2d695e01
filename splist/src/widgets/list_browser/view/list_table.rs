use iced::widget::text::Wrapping;
use iced::widget::{
    Space, button, column, container, mouse_area, row, scrollable, text,
};
use iced::{Element, Length, Theme, alignment, mouse};

use crate::shared::ui::table_style;
use crate::widgets::list_browser::event::ListBrowserEvent;
use crate::widgets::list_browser::model::{
    BreadcrumbItem, BreadcrumbTarget, Column, Entry, ListBrowserViewModel,
    LoadStatus,
};

const TITLE_BAR_HEIGHT: f32 = 32.0;
const TITLE_FONT_SIZE: f32 = 15.0;

const BAR_HEIGHT: f32 = 28.0;
const BAR_PADDING_X: f32 = 10.0;
const BAR_FONT_SIZE: f32 = 12.0;

const HEADER_HEIGHT: f32 = 26.0;
const HEADER_FONT_SIZE: f32 = 12.0;
const GRIP_WIDTH: f32 = 4.0;

const ROW_HEIGHT: f32 = 24.0;
const ROW_FONT_SIZE: f32 = 12.0;
const CELL_PADDING_X: f32 = 6.0;

const MESSAGE_FONT_SIZE: f32 = 13.0;

const NO_SELECTION_MESSAGE: &str = "Please select a list or document library.";
const LOADING_MESSAGE: &str = "Loading items...";
const EMPTY_MESSAGE: &str = "No items found in this list.";

/// Props for the list table view.
#[derive(Debug, Clone)]
pub(crate) struct ListTableProps<'a> {
    pub(crate) vm: ListBrowserViewModel<'a>,
}

/// Render the browser panel: title, breadcrumb, headers and rows.
pub(crate) fn view(
    props: ListTableProps<'_>,
) -> Element<'_, ListBrowserEvent, Theme, iced::Renderer> {
    let vm = props.vm;

    if !vm.has_selection {
        return message(NO_SELECTION_MESSAGE.to_string());
    }

    let mut content = column![title_bar(vm.list_title)]
        .width(Length::Fill)
        .height(Length::Fill);

    if vm.is_hierarchical {
        content = content.push(breadcrumb_bar(&vm.breadcrumb));
    }

    let body = match vm.status {
        LoadStatus::Loading => message(LOADING_MESSAGE.to_string()),
        LoadStatus::Error => message(format!(
            "Error: {}",
            vm.error_message.unwrap_or_default()
        )),
        LoadStatus::Ready => table(&vm),
    };

    content.push(body).into()
}

fn message<'a>(
    label: String,
) -> Element<'a, ListBrowserEvent, Theme, iced::Renderer> {
    container(text(label).size(MESSAGE_FONT_SIZE))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Render the list title with a refresh action.
fn title_bar(
    title: &str,
) -> Element<'_, ListBrowserEvent, Theme, iced::Renderer> {
    let label = text(title)
        .size(TITLE_FONT_SIZE)
        .wrapping(Wrapping::None)
        .width(Length::Fill);
    let refresh = button(text("Refresh").size(BAR_FONT_SIZE))
        .padding([2.0, 8.0])
        .style(button::secondary)
        .on_press(ListBrowserEvent::Refresh);

    container(row![label, refresh].align_y(alignment::Vertical::Center))
        .width(Length::Fill)
        .height(Length::Fixed(TITLE_BAR_HEIGHT))
        .padding([0.0, BAR_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Render `Root / A / B`; every item but the last is clickable.
fn breadcrumb_bar<'a>(
    items: &[BreadcrumbItem],
) -> Element<'a, ListBrowserEvent, Theme, iced::Renderer> {
    let mut trail = row![]
        .spacing(2)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center);
    let last = items.len().saturating_sub(1);

    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            trail = trail.push(text("/").size(BAR_FONT_SIZE));
        }
        let label = text(item.label.clone())
            .size(BAR_FONT_SIZE)
            .wrapping(Wrapping::None);
        if index == last {
            trail = trail.push(label);
        } else {
            trail = trail.push(
                button(label)
                    .padding([2.0, 4.0])
                    .style(button::text)
                    .on_press(ListBrowserEvent::BreadcrumbClicked {
                        target: item.target,
                    }),
            );
        }
    }

    container(trail)
        .width(Length::Fill)
        .height(Length::Fixed(BAR_HEIGHT))
        .padding([0.0, BAR_PADDING_X])
        .style(table_style::header_style)
        .into()
}

fn table<'a>(
    vm: &ListBrowserViewModel<'a>,
) -> Element<'a, ListBrowserEvent, Theme, iced::Renderer> {
    let header = header_row(vm);

    let body: Element<'a, ListBrowserEvent, Theme, iced::Renderer> =
        if vm.entries.is_empty() {
            message(EMPTY_MESSAGE.to_string())
        } else {
            let rows = column(
                vm.entries.iter().copied().map(|entry| entry_row(entry, vm)),
            )
            .spacing(0);

            scrollable::Scrollable::new(rows)
                .width(Length::Fill)
                .height(Length::Fill)
                .direction(scrollable::Direction::Vertical(
                    scrollable::Scrollbar::new()
                        .width(4)
                        .margin(0)
                        .scroller_width(4),
                ))
                .style(table_style::thin_scroll_style)
                .into()
        };

    column![header, body]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn header_row<'a>(
    vm: &ListBrowserViewModel<'a>,
) -> Element<'a, ListBrowserEvent, Theme, iced::Renderer> {
    let cells = Column::ALL
        .into_iter()
        .map(|column| header_cell(column, vm));

    container(row(cells))
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .style(table_style::header_style)
        .into()
}

fn header_cell<'a>(
    column: Column,
    vm: &ListBrowserViewModel<'a>,
) -> Element<'a, ListBrowserEvent, Theme, iced::Renderer> {
    let width = vm.columns.width(column);
    let is_sorted = vm.sort.column() == Some(column);
    let label = match vm.sort.direction().filter(|_| is_sorted) {
        Some(direction) => {
            format!("{} {}", column.label(), direction.indicator())
        },
        None => column.label().to_string(),
    };

    let sort_button = button(
        text(label)
            .size(HEADER_FONT_SIZE)
            .wrapping(Wrapping::None)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding([0.0, CELL_PADDING_X])
    .style(move |theme, status| {
        table_style::header_button_style(theme, status, is_sorted)
    })
    .on_press(ListBrowserEvent::SortColumnClicked { column });

    let is_active = vm.resizing == Some(column);
    let grip = mouse_area(
        container(Space::new())
            .width(Length::Fixed(GRIP_WIDTH))
            .height(Length::Fill)
            .style(move |theme| table_style::grip_style(theme, is_active)),
    )
    .on_enter(ListBrowserEvent::GripEntered)
    .on_exit(ListBrowserEvent::GripExited)
    .on_press(ListBrowserEvent::ResizeStarted { column })
    .interaction(mouse::Interaction::ResizingHorizontally);

    row![sort_button, grip]
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .into()
}

fn entry_row<'a>(
    entry: &'a Entry,
    vm: &ListBrowserViewModel<'a>,
) -> Element<'a, ListBrowserEvent, Theme, iced::Renderer> {
    let cells = Column::ALL
        .into_iter()
        .map(|column| entry_cell(entry, column, vm.columns.width(column)));

    button(row(cells).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fixed(ROW_HEIGHT))
        .padding(0)
        .style(table_style::row_button_style)
        .on_press(ListBrowserEvent::EntryActivated {
            id: entry.id.clone(),
        })
        .into()
}

fn entry_cell<'a>(
    entry: &Entry,
    column: Column,
    width: f32,
) -> Element<'a, ListBrowserEvent, Theme, iced::Renderer> {
    let mut label = entry.cell_text(column);
    if column == Column::Title && entry.is_container {
        label.push('/');
    }

    container(text(label).size(ROW_FONT_SIZE).wrapping(Wrapping::None))
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .padding([0.0, CELL_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .clip(true)
        .into()
}
