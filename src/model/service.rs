use super::ServiceStatus;
use crate::error::ApiError;

/// Reachability of the coding service as last probed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ServiceState {
    #[default]
    Checking,
    Online(String),
    Unreachable(String),
}

impl ServiceState {
    pub fn from_probe(result: Result<ServiceStatus, ApiError>) -> Self {
        match result {
            Ok(status) if status.message.is_empty() => ServiceState::Online("online".to_string()),
            Ok(status) => ServiceState::Online(status.message),
            Err(err) => ServiceState::Unreachable(err.to_string()),
        }
    }

    pub fn summary(&self) -> String {
        match self {
            ServiceState::Checking => "Checking coding service…".to_string(),
            ServiceState::Online(message) => format!("Connected: {message}"),
            ServiceState::Unreachable(reason) => format!("Coding service unreachable ({reason})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_result_maps_to_state() {
        let online = ServiceState::from_probe(Ok(ServiceStatus {
            message: "AI Medical Coding Assistant".to_string(),
        }));
        assert_eq!(online.summary(), "Connected: AI Medical Coding Assistant");

        let down = ServiceState::from_probe(Err(ApiError::Transport {
            url: "http://localhost:8000/".to_string(),
            message: "connection failed".to_string(),
        }));
        assert!(matches!(down, ServiceState::Unreachable(_)));
        assert!(down.summary().contains("connection failed"));
    }
}
