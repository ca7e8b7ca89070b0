//! Flattens a free-text extraction into the matched-code list the report
//! renders.
//!
//! Each category is numbered independently and 1-indexed, so the same input
//! always yields the same synthetic codes.

use super::TextExtractionResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeCategory {
    Primary,
    Secondary,
    Complication,
    LabFinding,
}

impl CodeCategory {
    /// Human-readable column the entry was found in.
    pub fn label(self) -> &'static str {
        match self {
            CodeCategory::Primary => "Primary Diagnosis",
            CodeCategory::Secondary => "Secondary Diagnoses",
            CodeCategory::Complication => "Complications",
            CodeCategory::LabFinding => "Laboratory Findings",
        }
    }

    /// Synthetic code for the entry at zero-based `index` in this category.
    pub fn synthetic_code(self, index: usize) -> String {
        let ordinal = index + 1;
        match self {
            CodeCategory::Primary => "PRIMARY".to_string(),
            CodeCategory::Secondary => format!("SEC-{ordinal}"),
            CodeCategory::Complication => format!("COMP-{ordinal}"),
            CodeCategory::LabFinding => format!("LAB-{ordinal}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedCode {
    pub code: String,
    pub description: String,
    pub category: CodeCategory,
}

impl MatchedCode {
    pub fn found_in_column(&self) -> &'static str {
        self.category.label()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStatistics {
    pub total_matched_codes: usize,
    pub unique_codes: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextMatchResult {
    pub statistics: TextStatistics,
    pub matched_codes: Vec<MatchedCode>,
}

impl TextMatchResult {
    pub fn has_codes(&self) -> bool {
        !self.matched_codes.is_empty()
    }
}

pub fn normalize(extraction: TextExtractionResult) -> TextMatchResult {
    let TextExtractionResult {
        primary_diagnosis,
        secondary_diagnoses,
        complications,
        lab_findings,
    } = extraction;

    let mut matched_codes = Vec::with_capacity(
        1 + secondary_diagnoses.len() + complications.len() + lab_findings.len(),
    );

    if let Some(primary) = primary_diagnosis.filter(|primary| !primary.is_empty()) {
        matched_codes.push(MatchedCode {
            code: CodeCategory::Primary.synthetic_code(0),
            description: primary,
            category: CodeCategory::Primary,
        });
    }

    let categories = [
        (CodeCategory::Secondary, secondary_diagnoses),
        (CodeCategory::Complication, complications),
        (CodeCategory::LabFinding, lab_findings),
    ];
    for (category, entries) in categories {
        matched_codes.extend(
            entries
                .into_iter()
                .enumerate()
                .map(|(index, description)| MatchedCode {
                    code: category.synthetic_code(index),
                    description,
                    category,
                }),
        );
    }

    // Synthetic codes are unique by construction.
    let count = matched_codes.len();
    TextMatchResult {
        statistics: TextStatistics {
            total_matched_codes: count,
            unique_codes: count,
        },
        matched_codes,
    }
}
