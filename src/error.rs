use crate::flow::Flow;
use thiserror::Error;

/// Input problems caught before any request is sent. `Display` is the
/// message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a CSV or Excel file")]
    NoFileSelected,
    #[error("Please select a valid CSV or Excel file")]
    UnsupportedFileType(String),
    #[error("Please enter patient medical record text")]
    EmptyText,
}

/// Failures talking to the coding service. Payloads are flattened to strings
/// so the error can travel inside UI messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("failed to reach {url}: {message}")]
    Transport { url: String, message: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("service returned HTTP {status}")]
    Backend { status: u16, detail: Option<String> },
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SubmitError {
    /// Text for the result area. Backend `detail` is shown verbatim; any
    /// other transport or decode failure falls back to the flow's generic
    /// message.
    pub fn user_message(&self, flow: Flow) -> String {
        match self {
            SubmitError::Validation(err) => err.to_string(),
            SubmitError::Api(ApiError::Backend {
                detail: Some(detail),
                ..
            }) => detail.clone(),
            SubmitError::Api(_) => flow.generic_failure().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid API URL {url:?}: {message}")]
    InvalidApiUrl { url: String, message: String },
}
