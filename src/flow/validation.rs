use crate::error::ValidationError;
use std::path::{Path, PathBuf};

const SPREADSHEET_EXTENSIONS: [&str; 3] = ["csv", "xlsx", "xls"];

/// A selected file that passed the suffix check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadsheetUpload {
    pub path: PathBuf,
    pub file_name: String,
}

pub fn spreadsheet_extensions() -> &'static [&'static str] {
    &SPREADSHEET_EXTENSIONS
}

/// Case-insensitive `.csv` / `.xlsx` / `.xls` suffix check on the file name.
pub fn has_spreadsheet_suffix(file_name: &str) -> bool {
    let lower = file_name.to_ascii_lowercase();
    SPREADSHEET_EXTENSIONS
        .iter()
        .any(|extension| lower.ends_with(&format!(".{extension}")))
}

pub fn validate_file_selection(
    selection: Option<&Path>,
) -> Result<SpreadsheetUpload, ValidationError> {
    let path = selection.ok_or(ValidationError::NoFileSelected)?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    if !has_spreadsheet_suffix(&file_name) {
        return Err(ValidationError::UnsupportedFileType(file_name));
    }

    Ok(SpreadsheetUpload {
        path: path.to_path_buf(),
        file_name,
    })
}

/// Returns the trimmed text, rejecting input that is empty after trimming.
pub fn validate_text(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyText);
    }
    Ok(trimmed.to_string())
}
