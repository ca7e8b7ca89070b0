pub mod client;

pub use client::ApiClient;

pub const MATCH_ICD_CODES_PATH: &str = "/match-icd-codes";
pub const EXTRACT_PATH: &str = "/api/extract";
pub const HEALTH_PATH: &str = "/";

/// Multipart field carrying the uploaded spreadsheet.
pub const FILE_FIELD: &str = "file";
