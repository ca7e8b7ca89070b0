use super::null_as_default;
use serde::Deserialize;

pub const MISSING_CODE: &str = "N/A";
pub const MISSING_DESCRIPTION: &str = "Not found";

/// Response body of `POST /match-icd-codes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileMatchResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub statistics: FileStatistics,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<PatientRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileStatistics {
    #[serde(default)]
    pub total_records: Option<u64>,
    #[serde(default)]
    pub total_icd_codes_suggested: Option<u64>,
    #[serde(default)]
    pub unique_icd_codes: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PatientRecord {
    /// Admission number identifying the visit.
    #[serde(rename = "AN", default)]
    pub an: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub principal_diagnosis: Diagnosis,
    #[serde(default, deserialize_with = "null_as_default")]
    pub secondary_diagnoses: Vec<Diagnosis>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub complications: Vec<Diagnosis>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub laboratory_findings: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Diagnosis {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl FileMatchResult {
    pub fn has_records(&self) -> bool {
        !self.results.is_empty()
    }
}

impl FileStatistics {
    pub fn total_records(&self) -> u64 {
        self.total_records.unwrap_or(0)
    }

    pub fn total_icd_codes_suggested(&self) -> u64 {
        self.total_icd_codes_suggested.unwrap_or(0)
    }

    pub fn unique_icd_codes(&self) -> u64 {
        self.unique_icd_codes.unwrap_or(0)
    }
}

impl PatientRecord {
    pub fn visit_id(&self) -> &str {
        self.an
            .as_deref()
            .filter(|an| !an.is_empty())
            .unwrap_or("Unknown")
    }
}

impl Diagnosis {
    /// The code, or `None` when missing or blank.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref().filter(|code| !code.is_empty())
    }

    /// The description, or `None` when missing or blank.
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|description| !description.is_empty())
    }

    pub fn code_or_placeholder(&self) -> &str {
        self.code().unwrap_or(MISSING_CODE)
    }

    pub fn description_or_placeholder(&self) -> &str {
        self.description().unwrap_or(MISSING_DESCRIPTION)
    }
}
