use iced::widget::{button, container, scrollable};
use iced::{Background, Border, Theme};

/// Return a scrollbar style with square thin rails and reduced alpha.
pub(crate) fn thin_scroll_style(
    theme: &Theme,
    status: scrollable::Status,
) -> scrollable::Style {
    let mut style = scrollable::default(theme, status);
    let radius = iced::border::Radius::from(0.0);

    style.vertical_rail.border.radius = radius;
    style.vertical_rail.scroller.border.radius = radius;
    style.horizontal_rail.border.radius = radius;
    style.horizontal_rail.scroller.border.radius = radius;

    let mut scroller_color = match style.vertical_rail.scroller.background {
        Background::Color(color) => color,
        _ => theme.extended_palette().background.strong.color,
    };
    scroller_color.a = (scroller_color.a * 0.7).min(1.0);
    style.vertical_rail.scroller.background = Background::Color(scroller_color);
    style.horizontal_rail.scroller.background =
        Background::Color(scroller_color);

    style
}

/// Background band behind the column headers and the breadcrumb bar.
pub(crate) fn header_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// Column header label: flat, highlighted while it drives the sort.
pub(crate) fn header_button_style(
    theme: &Theme,
    status: button::Status,
    is_sorted: bool,
) -> button::Style {
    let palette = theme.extended_palette();
    let text_color = if is_sorted || status == button::Status::Hovered {
        palette.primary.strong.color
    } else {
        palette.background.weak.text
    };

    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}

/// Drag handle on a column's right edge.
pub(crate) fn grip_style(theme: &Theme, is_active: bool) -> container::Style {
    let palette = theme.extended_palette();
    let color = if is_active {
        palette.primary.base.color
    } else {
        palette.background.strong.color
    };

    container::Style {
        background: Some(color.into()),
        ..Default::default()
    }
}

/// Table row with a hover highlight.
pub(crate) fn row_button_style(
    theme: &Theme,
    status: button::Status,
) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            let mut color = palette.background.strong.color;
            color.a = 0.6;
            Some(color.into())
        },
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border::default(),
        ..Default::default()
    }
}
