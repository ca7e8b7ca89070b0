//! The two submission flows: validate input, call the service, and produce a
//! [`MatchReport`] for the result area.

pub mod session;
pub mod validation;

pub use session::{Session, Ticket};
pub use validation::{
    has_spreadsheet_suffix, spreadsheet_extensions, validate_file_selection, validate_text,
    SpreadsheetUpload,
};

use crate::api::ApiClient;
use crate::error::{ApiError, SubmitError};
use crate::model::{normalize, MatchReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    File,
    Text,
}

impl Flow {
    pub fn name(self) -> &'static str {
        match self {
            Flow::File => "file",
            Flow::Text => "text",
        }
    }

    pub fn generic_failure(self) -> &'static str {
        match self {
            Flow::File => "Processing failed",
            Flow::Text => "Extraction failed",
        }
    }
}

pub async fn submit_file(
    client: ApiClient,
    upload: SpreadsheetUpload,
) -> Result<MatchReport, SubmitError> {
    log::info!("Submitting spreadsheet: {}", upload.path.display());
    let contents = tokio::fs::read(&upload.path).await.map_err(|err| {
        let err = ApiError::Io {
            path: upload.path.display().to_string(),
            message: err.to_string(),
        };
        log::error!("{err}");
        err
    })?;

    let result = client
        .match_icd_codes(&upload.file_name, contents)
        .await
        .inspect_err(|err| log::error!("{}: {err}", upload.file_name))?;

    log::info!(
        "{}: {} record(s) matched",
        upload.file_name,
        result.results.len()
    );
    Ok(MatchReport::File(result))
}

pub async fn submit_text(client: ApiClient, text: String) -> Result<MatchReport, SubmitError> {
    log::info!("Submitting {} chars of clinical text", text.chars().count());
    let extraction = client
        .extract_from_text(&text)
        .await
        .inspect_err(|err| log::error!("text extraction: {err}"))?;

    let result = normalize(extraction);
    log::info!(
        "text extraction: {} code(s) matched",
        result.statistics.total_matched_codes
    );
    Ok(MatchReport::Text(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::render::render_html;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::json;
    use std::path::PathBuf;

    async fn spawn_service(router: Router) -> ApiClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        ApiClient::new(ApiConfig::new(&format!("http://{addr}")).unwrap())
    }

    fn write_spreadsheet(name: &str) -> SpreadsheetUpload {
        let path = std::env::temp_dir().join(format!("icd-assist-{}-{name}", std::process::id()));
        std::fs::write(&path, "AN,diagnosis\n1,chest pain\n2,fever\n").unwrap();
        SpreadsheetUpload {
            path,
            file_name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn unreadable_file_fails_before_upload() {
        let client = ApiClient::new(ApiConfig::default());
        let upload = SpreadsheetUpload {
            path: PathBuf::from("/nonexistent/icd-assist/records.csv"),
            file_name: "records.csv".to_string(),
        };

        let err = submit_file(client, upload).await.unwrap_err();

        assert!(matches!(err, SubmitError::Api(ApiError::Io { .. })));
        assert_eq!(err.user_message(Flow::File), "Processing failed");
    }

    #[tokio::test]
    async fn file_flow_renders_each_record() {
        let router = Router::new().route(
            crate::api::MATCH_ICD_CODES_PATH,
            post(|| async {
                Json(json!({
                    "statistics": {"total_records": 2, "total_icd_codes_suggested": 3, "unique_icd_codes": 3},
                    "results": [
                        {
                            "AN": "AN-001",
                            "principal_diagnosis": {"code": "I21.3", "description": "STEMI"},
                            "secondary_diagnoses": [{"code": "I10", "description": "Hypertension"}],
                            "complications": [],
                            "laboratory_findings": []
                        },
                        {
                            "AN": "AN-002",
                            "principal_diagnosis": {"code": "J18.9", "description": "Pneumonia"},
                            "secondary_diagnoses": [],
                            "complications": [],
                            "laboratory_findings": []
                        }
                    ]
                }))
            }),
        );
        let client = spawn_service(router).await;
        let upload = write_spreadsheet("admissions.csv");

        let report = submit_file(client, upload.clone()).await.unwrap();
        let _ = std::fs::remove_file(&upload.path);
        let html = render_html(&report);

        assert_eq!(html.matches("Secondary Diagnoses:").count(), 1);
        let first = html.find("AN: AN-001").unwrap();
        let second = html.find("AN: AN-002").unwrap();
        let secondary = html.find("Secondary Diagnoses:").unwrap();
        assert!(first < secondary && secondary < second);
        assert!(!html.contains("No Data Found"));
    }

    #[tokio::test]
    async fn text_flow_normalizes_extraction() {
        let router = Router::new().route(
            crate::api::EXTRACT_PATH,
            post(|Json(body): Json<serde_json::Value>| async move {
                assert_eq!(body, json!({"text": "STEMI with shock"}));
                Json(json!({
                    "data": {
                        "primary_diagnosis": "STEMI",
                        "complications": ["Cardiogenic shock"]
                    }
                }))
            }),
        );
        let client = spawn_service(router).await;

        let report = submit_text(client, "STEMI with shock".to_string())
            .await
            .unwrap();

        let MatchReport::Text(result) = report else {
            panic!("expected a text report");
        };
        let codes: Vec<_> = result.matched_codes.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["PRIMARY", "COMP-1"]);
        assert_eq!(result.statistics.total_matched_codes, 2);
    }
}
