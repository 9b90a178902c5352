//! Error Types
//!
//! Failures surfaced by the service layer. `Display` output is what the
//! UI shows to the user.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx response; `message` comes from the backend when it sent one
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("session expired, please log in again")]
    Unauthorized,

    #[error("No authentication token found")]
    MissingToken,

    #[error("failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to upload document {name}: {message}")]
    DocumentUpload { name: String, message: String },

    #[error("failed to read file {name}")]
    FileRead { name: String },

    #[error("browser API unavailable: {0}")]
    Browser(String),
}

/// Error body returned by the backend
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiError {
    /// Build a status error from a raw response body
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|e| e.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status code {}", status));
        ApiError::Status { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_is_surfaced() {
        let body = r#"{"message":"Project name already exists","status":409,"error":"ProjectException","timestamp":1}"#;
        let err = ApiError::from_status(409, body);
        assert_eq!(err.to_string(), "Project name already exists");
        assert!(matches!(err, ApiError::Status { status: 409, .. }));
    }

    #[test]
    fn test_opaque_body_gets_generic_message() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "Request failed with status code 502");
    }

    #[test]
    fn test_upload_error_names_file() {
        let err = ApiError::DocumentUpload {
            name: "plan.pdf".into(),
            message: "Request failed with status code 413".into(),
        };
        assert_eq!(err.to_string(), "Failed to upload document plan.pdf: Request failed with status code 413");
    }
}
