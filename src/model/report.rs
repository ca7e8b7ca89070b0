use super::{FileMatchResult, TextMatchResult};

/// A rendered-ready result from either submission flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchReport {
    File(FileMatchResult),
    Text(TextMatchResult),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatLine {
    pub label: &'static str,
    pub value: u64,
}

impl MatchReport {
    pub fn statistics(&self) -> Vec<StatLine> {
        match self {
            MatchReport::File(result) => {
                let stats = &result.statistics;
                vec![
                    StatLine {
                        label: "Total Records",
                        value: stats.total_records(),
                    },
                    StatLine {
                        label: "Total ICD Codes Suggested",
                        value: stats.total_icd_codes_suggested(),
                    },
                    StatLine {
                        label: "Unique ICD Codes",
                        value: stats.unique_icd_codes(),
                    },
                ]
            }
            MatchReport::Text(result) => vec![
                StatLine {
                    label: "Total Matched Codes",
                    value: result.statistics.total_matched_codes as u64,
                },
                StatLine {
                    label: "Unique Codes",
                    value: result.statistics.unique_codes as u64,
                },
            ],
        }
    }

    /// True when there is nothing to list beyond the statistics block.
    pub fn is_empty(&self) -> bool {
        match self {
            MatchReport::File(result) => !result.has_records(),
            MatchReport::Text(result) => !result.has_codes(),
        }
    }

    /// Number of record blocks or matched codes in the report.
    pub fn entry_count(&self) -> usize {
        match self {
            MatchReport::File(result) => result.results.len(),
            MatchReport::Text(result) => result.matched_codes.len(),
        }
    }

    pub fn no_data_message(&self) -> &'static str {
        match self {
            MatchReport::File(_) => {
                "No medical information could be extracted from the uploaded file."
            }
            MatchReport::Text(_) => {
                "No medical information could be extracted from the provided text."
            }
        }
    }
}

/// Contents of the shared result area. A new result or error replaces
/// whatever was shown before.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultArea {
    #[default]
    Empty,
    Report(MatchReport),
    Error(String),
}

impl ResultArea {
    pub fn report(&self) -> Option<&MatchReport> {
        match self {
            ResultArea::Report(report) => Some(report),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ResultArea::Error(message) => Some(message),
            _ => None,
        }
    }
}
