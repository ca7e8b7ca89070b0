use crate::error::{ApiError, SubmitError};
use crate::flow::Ticket;
use crate::model::{MatchReport, ServiceStatus};
use iced::widget::text_editor;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    ShowTab(&'static str),
    PickFile,
    FilePicked(Option<PathBuf>),
    NotesEdited(text_editor::Action),
    SubmitFile,
    SubmitText,
    Completed(Ticket, Result<MatchReport, SubmitError>),
    ExportHtml,
    Exported(Result<Option<PathBuf>, String>),
    HealthChecked(Result<ServiceStatus, ApiError>),
}
