use crate::message::Message;
use iced::widget::text::Wrapping;
use iced::widget::{button, column, row, text};
use iced::{Alignment, Element, Length};
use std::path::Path;

pub fn file_tab(selected: Option<&Path>) -> Element<'_, Message> {
    let selection = match selected {
        Some(path) => text(path.display().to_string()).wrapping(Wrapping::Word),
        None => text("No file selected"),
    };

    column![
        text("Upload a CSV or Excel file of patient records").size(16),
        row![
            button("Choose File").on_press(Message::PickFile),
            selection.width(Length::Fill),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
        button("Suggest ICD Codes").on_press(Message::SubmitFile),
    ]
    .spacing(12)
    .into()
}
