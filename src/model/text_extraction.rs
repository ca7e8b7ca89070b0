use super::null_as_default;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExtractRequest<'a> {
    pub text: &'a str,
}

/// Envelope returned by `POST /api/extract`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExtractResponse {
    pub data: TextExtractionResult,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TextExtractionResult {
    #[serde(default)]
    pub primary_diagnosis: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub secondary_diagnoses: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub complications: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lab_findings: Vec<String>,
}

/// Body of `GET /` on the coding service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceStatus {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_as_text_object() {
        let body = serde_json::to_value(ExtractRequest { text: "fever" }).unwrap();
        assert_eq!(body, serde_json::json!({ "text": "fever" }));
    }

    #[test]
    fn absent_categories_deserialize_empty() {
        let response: ExtractResponse =
            serde_json::from_str(r#"{"data": {"primary_diagnosis": "Sepsis", "lab_findings": null}}"#)
                .unwrap();
        assert_eq!(response.data.primary_diagnosis.as_deref(), Some("Sepsis"));
        assert!(response.data.secondary_diagnoses.is_empty());
        assert!(response.data.complications.is_empty());
        assert!(response.data.lab_findings.is_empty());
    }

    #[test]
    fn envelope_without_data_is_rejected() {
        assert!(serde_json::from_str::<ExtractResponse>(r#"{"status": "ok"}"#).is_err());
    }
}
