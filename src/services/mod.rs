//! REST Service Layer
//!
//! `ApiClient` wraps every backend call: bearer token, request logging,
//! the 401 redirect and the task-note fallbacks. Domain services sit on top.

mod auth;
mod project;
mod task;
mod task_note;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::session;

pub use auth::*;
pub use project::*;
pub use task::*;
pub use task_note::*;

/// Level of the per-request trace lines; visible with the default config
pub const REQUEST_LOG_LEVEL: log::Level = log::Level::Info;

/// HTTP client bound to the configured backend
#[derive(Clone)]
pub struct ApiClient {
    config: AppConfig,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_config(AppConfig::from_build_env())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.fetch(Method::GET, path, |req| req).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.fetch(Method::GET, path, |req| req.query(query)).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.fetch(Method::POST, path, |req| req.json(body)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.fetch(Method::PUT, path, |req| req.json(body)).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.fetch(Method::PATCH, path, |req| req.json(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.fetch::<serde::de::IgnoredAny>(Method::DELETE, path, |req| req)
            .await
            .map(|_| ())
    }

    /// Multipart POST; the form sets its own content type
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        self.fetch(Method::POST, path, |req| req.multipart(form)).await
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<T, ApiError> {
        match self.execute(method.clone(), path, build).await {
            Ok(body) => decode(path, &body),
            Err(ApiError::Unauthorized) => Err(ApiError::Unauthorized),
            Err(err) => match fallback_stub(&method, path) {
                Some(stub) => {
                    log::info!("{} {} failed ({}), using fallback response", method, path, err);
                    serde_json::from_value(stub).map_err(|source| ApiError::Decode {
                        path: path.to_string(),
                        source,
                    })
                }
                None => Err(err),
            },
        }
    }

    /// Send the request and return the body of a 2xx response
    async fn execute(
        &self,
        method: Method,
        path: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<String, ApiError> {
        let token = session::token();
        log::log!(REQUEST_LOG_LEVEL, "API Request: {} {}", method, path);
        log::log!(REQUEST_LOG_LEVEL, "Token available: {}", token.is_some());

        let mut request = self.http.request(method.clone(), self.config.url(path));
        if let Some(token) = token.as_deref() {
            request = request.bearer_auth(token);
        }

        let response = build(request).send().await.map_err(|source| {
            log::error!("API Error: {} {}: {}", method, path, source);
            ApiError::Transport {
                path: path.to_string(),
                source,
            }
        })?;

        let status = response.status();
        log::log!(REQUEST_LOG_LEVEL, "API Response: {} {}", status.as_u16(), path);

        if status == StatusCode::UNAUTHORIZED && redirects_on_unauthorized(path) {
            log::warn!("{} {} returned 401, redirecting to login", method, path);
            session::clear_token();
            session::redirect_to_login();
            return Err(ApiError::Unauthorized);
        }

        let body = response.text().await.map_err(|source| ApiError::Transport {
            path: path.to_string(),
            source,
        })?;

        if !status.is_success() {
            let err = ApiError::from_status(status.as_u16(), &body);
            log::warn!("API Error Response: {} {}: {}", status.as_u16(), path, err);
            return Err(err);
        }
        Ok(body)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Empty bodies decode as JSON null
fn decode<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|source| ApiError::Decode {
        path: path.to_string(),
        source,
    })
}

/// A failed login must surface its own error instead of bouncing to /login
pub fn redirects_on_unauthorized(path: &str) -> bool {
    !path.starts_with("/auth/login")
}

/// Stand-in payloads for task-note endpoints that fail
pub fn fallback_stub(method: &Method, path: &str) -> Option<serde_json::Value> {
    if !path.contains("/task-notes") {
        return None;
    }
    if path.contains("/task-notes/task/") && path.ends_with("/exists") {
        return Some(serde_json::Value::Bool(false));
    }
    if *method == Method::GET && path.contains("/task-notes/") {
        let now = chrono::Utc::now().to_rfc3339();
        return Some(serde_json::json!({
            "id": null,
            "taskId": null,
            "taskTitle": null,
            "noteName": null,
            "noteContent": "",
            "reminderTags": [],
            "createdAt": now,
            "updatedAt": now,
        }));
    }
    if *method == Method::DELETE && path.contains("/task-notes/") {
        return Some(serde_json::Value::Null);
    }
    None
}

/// Encode a single path segment (search text, ids from the URL)
pub(crate) fn encode_segment(segment: &str) -> String {
    percent_encoding::utf8_percent_encode(segment, percent_encoding::NON_ALPHANUMERIC).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskNote;

    #[test]
    fn test_login_path_is_exempt_from_redirect() {
        assert!(!redirects_on_unauthorized("/auth/login"));
        assert!(redirects_on_unauthorized("/auth/me"));
        assert!(redirects_on_unauthorized("/projects"));
    }

    #[test]
    fn test_exists_check_falls_back_to_false() {
        let stub = fallback_stub(&Method::GET, "/task-notes/task/9/exists").unwrap();
        assert_eq!(stub, serde_json::Value::Bool(false));
    }

    #[test]
    fn test_note_get_falls_back_to_empty_note() {
        let stub = fallback_stub(&Method::GET, "/task-notes/task/9").unwrap();
        let note: TaskNote = serde_json::from_value(stub).unwrap();
        assert!(note.is_empty());
        assert!(note.reminder_tags.is_empty());
        assert!(!note.created_at.is_empty());
    }

    #[test]
    fn test_note_delete_falls_back_to_success() {
        assert_eq!(
            fallback_stub(&Method::DELETE, "/task-notes/task/9"),
            Some(serde_json::Value::Null)
        );
    }

    #[test]
    fn test_other_endpoints_have_no_fallback() {
        assert!(fallback_stub(&Method::GET, "/projects/1").is_none());
        assert!(fallback_stub(&Method::POST, "/task-notes").is_none());
        assert!(fallback_stub(&Method::DELETE, "/tasks/4").is_none());
    }

    #[test]
    fn test_empty_body_decodes_as_null() {
        let unit: serde::de::IgnoredAny = decode("/tasks/1", "").unwrap();
        let _ = unit;
        let maybe: Option<i64> = decode("/x", "  ").unwrap();
        assert!(maybe.is_none());
        assert!(matches!(decode::<i64>("/x", "{}"), Err(ApiError::Decode { .. })));
    }

    #[test]
    fn test_request_trace_passes_default_level() {
        assert!(REQUEST_LOG_LEVEL <= AppConfig::default().log_level);
    }

    #[test]
    fn test_segment_encoding() {
        assert_eq!(encode_segment("a b&c"), "a%20b%26c");
    }
}
