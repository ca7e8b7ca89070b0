use crate::message::Message;
use iced::widget::{button, column, text, text_editor};
use iced::{Element, Length};

pub fn text_tab(notes: &text_editor::Content) -> Element<'_, Message> {
    column![
        text("Paste patient medical record text").size(16),
        text_editor(notes)
            .on_action(Message::NotesEdited)
            .height(Length::Fixed(220.0)),
        button("Extract & Suggest Codes").on_press(Message::SubmitText),
    ]
    .spacing(12)
    .into()
}
