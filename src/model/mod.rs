pub mod file_match;
pub mod normalize;
pub mod report;
pub mod service;
pub mod tab;
pub mod text_extraction;

pub use file_match::{Diagnosis, FileMatchResult, FileStatistics, PatientRecord};
pub use normalize::{normalize, CodeCategory, MatchedCode, TextMatchResult, TextStatistics};
pub use report::{MatchReport, ResultArea, StatLine};
pub use service::ServiceState;
pub use tab::Tab;
pub use text_extraction::{ExtractRequest, ExtractResponse, ServiceStatus, TextExtractionResult};

use serde::{Deserialize, Deserializer};

/// Treats an explicit JSON `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
