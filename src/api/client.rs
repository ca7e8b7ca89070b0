use super::{EXTRACT_PATH, FILE_FIELD, HEALTH_PATH, MATCH_ICD_CODES_PATH};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::model::{
    ExtractRequest, ExtractResponse, FileMatchResult, ServiceStatus, TextExtractionResult,
};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// HTTP client for the ICD coding service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: reqwest::Client,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Uploads a spreadsheet as multipart field `file`.
    pub async fn match_icd_codes(
        &self,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<FileMatchResult, ApiError> {
        let url = self.config.endpoint(MATCH_ICD_CODES_PATH);
        let form = Form::new().part(
            FILE_FIELD,
            Part::bytes(contents).file_name(file_name.to_string()),
        );

        log::debug!("POST {url} ({file_name})");
        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|err| transport_error(&url, err))?;

        decode(response).await
    }

    pub async fn extract_from_text(&self, text: &str) -> Result<TextExtractionResult, ApiError> {
        let url = self.config.endpoint(EXTRACT_PATH);

        log::debug!("POST {url} ({} chars)", text.chars().count());
        let response = self
            .http
            .post(&url)
            .json(&ExtractRequest { text })
            .send()
            .await
            .map_err(|err| transport_error(&url, err))?;

        let envelope: ExtractResponse = decode(response).await?;
        Ok(envelope.data)
    }

    pub async fn health(&self) -> Result<ServiceStatus, ApiError> {
        let url = self.config.endpoint(HEALTH_PATH);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| transport_error(&url, err))?;

        decode(response).await
    }
}

fn transport_error(url: &str, err: reqwest::Error) -> ApiError {
    let message = if err.is_connect() {
        "connection failed".to_string()
    } else {
        err.to_string()
    };
    ApiError::Transport {
        url: url.to_string(),
        message,
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))?;

    if !status.is_success() {
        let detail = error_detail(&body);
        log::warn!(
            "coding service returned {status}{}",
            if detail.is_some() { " with detail" } else { "" }
        );
        return Err(ApiError::Backend {
            status: status.as_u16(),
            detail,
        });
    }

    serde_json::from_slice(&body).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Pulls `detail` out of an error body. Strings are used as-is; structured
/// details (FastAPI validation errors) keep their JSON text.
fn error_detail(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    match parsed.detail? {
        Value::Null => None,
        Value::String(detail) if detail.is_empty() => None,
        Value::String(detail) => Some(detail),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Multipart;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::json;

    async fn spawn_service(router: Router) -> ApiClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        ApiClient::new(ApiConfig::new(&format!("http://{addr}")).unwrap())
    }

    async fn echo_upload(mut multipart: Multipart) -> Json<Value> {
        let field = multipart.next_field().await.unwrap().unwrap();
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or_default().to_string();
        let contents = String::from_utf8(field.bytes().await.unwrap().to_vec()).unwrap();

        Json(json!({
            "statistics": {"total_records": 1, "total_icd_codes_suggested": 1, "unique_icd_codes": 1},
            "results": [{
                "AN": format!("{name}:{file_name}"),
                "principal_diagnosis": {"code": "I10", "description": contents},
                "secondary_diagnoses": [],
                "complications": [],
                "laboratory_findings": []
            }]
        }))
    }

    async fn echo_text(Json(body): Json<Value>) -> Json<Value> {
        let text = body["text"].clone();
        Json(json!({
            "data": {
                "primary_diagnosis": text,
                "secondary_diagnoses": ["Hypertension"],
            }
        }))
    }

    #[tokio::test]
    async fn uploads_file_in_file_field() {
        let client =
            spawn_service(Router::new().route(MATCH_ICD_CODES_PATH, post(echo_upload))).await;

        let result = client
            .match_icd_codes("records.csv", b"AN,notes\n1,chest pain".to_vec())
            .await
            .unwrap();

        assert_eq!(result.statistics.total_records(), 1);
        let record = &result.results[0];
        assert_eq!(record.visit_id(), "file:records.csv");
        assert_eq!(
            record.principal_diagnosis.description(),
            Some("AN,notes\n1,chest pain")
        );
    }

    #[tokio::test]
    async fn posts_text_as_json_and_unwraps_data() {
        let client = spawn_service(Router::new().route(EXTRACT_PATH, post(echo_text))).await;

        let extraction = client.extract_from_text("Acute MI").await.unwrap();

        assert_eq!(extraction.primary_diagnosis.as_deref(), Some("Acute MI"));
        assert_eq!(extraction.secondary_diagnoses, vec!["Hypertension".to_string()]);
        assert!(extraction.lab_findings.is_empty());
    }

    #[tokio::test]
    async fn backend_detail_is_surfaced() {
        let router = Router::new().route(
            MATCH_ICD_CODES_PATH,
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"detail": "Only CSV and Excel files are supported"})),
                )
            }),
        );
        let client = spawn_service(router).await;

        let err = client
            .match_icd_codes("records.csv", Vec::new())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ApiError::Backend {
                status: 400,
                detail: Some("Only CSV and Excel files are supported".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn non_json_error_body_has_no_detail() {
        let router = Router::new().route(
            EXTRACT_PATH,
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error") }),
        );
        let client = spawn_service(router).await;

        let err = client.extract_from_text("notes").await.unwrap_err();

        assert_eq!(
            err,
            ApiError::Backend {
                status: 500,
                detail: None,
            }
        );
    }

    #[tokio::test]
    async fn success_without_data_envelope_is_a_decode_error() {
        let router = Router::new().route(
            EXTRACT_PATH,
            post(|| async { Json(json!({"status": "ok"})) }),
        );
        let client = spawn_service(router).await;

        let err = client.extract_from_text("notes").await.unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn health_reads_service_message() {
        let router = Router::new().route(
            HEALTH_PATH,
            get(|| async { Json(json!({"message": "AI Medical Coding Assistant"})) }),
        );
        let client = spawn_service(router).await;

        let status = client.health().await.unwrap();

        assert_eq!(status.message, "AI Medical Coding Assistant");
    }

    #[tokio::test]
    async fn unreachable_service_is_a_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = ApiClient::new(ApiConfig::new(&format!("http://{addr}")).unwrap());

        let err = client.health().await.unwrap_err();

        assert!(matches!(err, ApiError::Transport { .. }));
    }

    #[test]
    fn structured_detail_keeps_json_text() {
        let body = br#"{"detail": [{"loc": ["body", "text"], "msg": "field required"}]}"#;
        assert_eq!(
            error_detail(body).as_deref(),
            Some(r#"[{"loc":["body","text"],"msg":"field required"}]"#)
        );
        assert_eq!(error_detail(br#"{"detail": null}"#), None);
        assert_eq!(error_detail(br#"{"detail": ""}"#), None);
        assert_eq!(error_detail(b"<html>"), None);
    }
}
