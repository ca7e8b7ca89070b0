//! API origin resolution.
//!
//! Resolved once in `main` and handed to the client; nothing reads the
//! environment after startup.

use crate::error::ConfigError;
use reqwest::Url;

pub const API_URL_ENV: &str = "ICD_ASSIST_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let invalid = |message: String| ConfigError::InvalidApiUrl {
            url: base_url.to_string(),
            message,
        };

        let parsed = Url::parse(trimmed).map_err(|err| invalid(err.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {:?}", parsed.scheme())));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Runtime `ICD_ASSIST_API_URL`, then the value captured at build time,
    /// then `http://localhost:8000`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let runtime = std::env::var(API_URL_ENV).ok();
        Self::new(&resolve_base_url(
            runtime.as_deref(),
            option_env!("ICD_ASSIST_API_URL"),
        ))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

fn resolve_base_url(runtime: Option<&str>, build_time: Option<&str>) -> String {
    [runtime, build_time]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ApiConfig::new("https://coding.example.org/").unwrap();
        assert_eq!(config.base_url(), "https://coding.example.org");
        assert_eq!(
            config.endpoint("/api/extract"),
            "https://coding.example.org/api/extract"
        );
    }

    #[test]
    fn rejects_unparsable_and_non_http_urls() {
        assert!(matches!(
            ApiConfig::new("not a url"),
            Err(ConfigError::InvalidApiUrl { .. })
        ));
        assert!(ApiConfig::new("ftp://coding.example.org").is_err());
    }

    #[test]
    fn runtime_value_wins_over_build_time() {
        assert_eq!(
            resolve_base_url(Some("http://runtime:9000"), Some("http://build:8000")),
            "http://runtime:9000"
        );
        assert_eq!(
            resolve_base_url(Some("   "), Some("http://build:8000")),
            "http://build:8000"
        );
        assert_eq!(resolve_base_url(None, None), DEFAULT_API_URL);
    }

    #[test]
    fn default_points_at_local_service() {
        assert_eq!(ApiConfig::default().endpoint("/"), "http://localhost:8000/");
    }
}
