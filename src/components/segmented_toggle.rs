use crate::message::Message;
use crate::model::Tab;
use iced::widget::text::Wrapping;
use iced::widget::{button, container, row, text, Container};
use iced::{Alignment, Background, Color, Length, Shadow, Theme};

/// Two-segment tab bar; exactly one segment is highlighted, matching the
/// panel shown below it.
pub fn tab_toggle(current: Tab) -> Container<'static, Message> {
    let toggle_row = row![
        tab_option(Tab::File, current, SegmentPosition::Left).width(Length::FillPortion(1)),
        tab_option(Tab::Text, current, SegmentPosition::Right).width(Length::FillPortion(1)),
    ]
    .spacing(0);

    container(toggle_row)
        .padding(3)
        .width(Length::Fill)
        .style(segmented_container_style)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentPosition {
    Left,
    Right,
}

fn tab_option(
    tab: Tab,
    current: Tab,
    position: SegmentPosition,
) -> iced::widget::Button<'static, Message> {
    let is_active = tab == current;
    let content = container(text(tab.label()).size(14).wrapping(Wrapping::None))
        .width(Length::Fill)
        .height(Length::Fixed(32.0))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .padding([6, 16]);

    button(content)
        .padding(0)
        .on_press(Message::ShowTab(tab.id()))
        .style(move |theme, status| segmented_button_style(theme, status, is_active, position))
}

fn segmented_container_style(theme: &Theme) -> iced::widget::container::Style {
    let palette = theme.extended_palette();

    iced::widget::container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: iced::border::Border {
            color: palette.primary.strong.color.scale_alpha(0.5),
            width: 1.0,
            radius: iced::border::Radius::new(8.0),
        },
        ..Default::default()
    }
}

fn segmented_button_style(
    theme: &Theme,
    status: iced::widget::button::Status,
    is_active: bool,
    position: SegmentPosition,
) -> iced::widget::button::Style {
    use iced::widget::button::Status;

    let palette = theme.extended_palette();
    let (base, text_color) = if is_active {
        (palette.primary.strong.color, palette.primary.strong.text)
    } else {
        (Color::TRANSPARENT, palette.background.weak.text)
    };

    let background_color = match (status, is_active) {
        (Status::Hovered, false) => palette.background.strong.color.scale_alpha(0.6),
        (Status::Hovered, true) => palette.primary.base.color,
        (Status::Pressed, _) => palette.primary.weak.color,
        (Status::Disabled, _) => base.scale_alpha(0.5),
        (Status::Active, _) => base,
    };

    // Inner corners stay square so the two segments read as one bar.
    let radius = match position {
        SegmentPosition::Left => iced::border::Radius {
            top_left: 6.0,
            top_right: 0.0,
            bottom_right: 0.0,
            bottom_left: 6.0,
        },
        SegmentPosition::Right => iced::border::Radius {
            top_left: 0.0,
            top_right: 6.0,
            bottom_right: 6.0,
            bottom_left: 0.0,
        },
    };

    iced::widget::button::Style {
        background: Some(Background::Color(background_color)),
        text_color,
        border: iced::border::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius,
        },
        shadow: Shadow::default(),
    }
}
