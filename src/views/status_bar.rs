use crate::message::Message;
use crate::model::ServiceState;
use iced::widget::text::Wrapping;
use iced::widget::{row, text, Space};
use iced::{Color, Element, Length};

const ONLINE: Color = Color::from_rgb(0.15, 0.68, 0.38);
const OFFLINE: Color = Color::from_rgb(0.91, 0.3, 0.24);

pub fn status_bar<'a>(service: &ServiceState, status_line: Option<&'a str>) -> Element<'a, Message> {
    let service_text = text(service.summary()).size(13);
    let service_text = match service {
        ServiceState::Online(_) => service_text.color(ONLINE),
        ServiceState::Unreachable(_) => service_text.color(OFFLINE),
        ServiceState::Checking => service_text,
    };

    row![
        service_text,
        Space::with_width(Length::Fill),
        text(status_line.unwrap_or_default())
            .size(13)
            .wrapping(Wrapping::None),
    ]
    .spacing(12)
    .into()
}
