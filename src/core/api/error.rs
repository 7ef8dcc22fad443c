//! Error type shared by every backend call.
//!
//! The backend reports failures as JSON bodies shaped like `{"detail": "..."}`,
//! `{"detail": [{"msg": "..."}]}` (validation errors), `{"message": "..."}` or
//! `{"error": "..."}`. [`server_detail`] extracts the first usable string so
//! pages can show it verbatim.

use serde_json::Value;
use thiserror::Error;

/// Result alias for backend calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a backend request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, aborted)
    #[error("Network Error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("Request failed with status code {status}")]
    Status {
        status: u16,
        /// Human readable reason reported by the server, if any
        detail: Option<String>,
    },

    /// The response body did not match the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// The request could not be built or is not possible in this environment
    #[error("{0}")]
    Request(String),
}

impl ApiError {
    /// Build a status error from the raw response body
    pub fn from_status(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            detail: server_detail(body),
        }
    }

    /// Server-provided reason, when the server sent one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => Some(detail.as_str()),
            _ => None,
        }
    }

    /// Message to show the user: the server reason, else the error itself
    pub fn user_message(&self) -> String {
        self.detail()
            .map(str::to_string)
            .unwrap_or_else(|| self.to_string())
    }

    /// Server reason, else a fixed page-specific fallback
    pub fn detail_or(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }
}

/// Extract a displayable reason from a JSON error body.
///
/// Order: `detail` string, first `detail[].msg`, `message`, `error`.
pub fn server_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    match value.get("detail") {
        Some(Value::String(detail)) if !detail.trim().is_empty() => {
            return Some(detail.clone());
        }
        Some(Value::Array(items)) => {
            if let Some(msg) = items
                .iter()
                .find_map(|item| item.get("msg").and_then(Value::as_str))
            {
                return Some(msg.to_string());
            }
        }
        _ => {}
    }

    ["message", "error"].iter().find_map(|key| {
        value
            .get(*key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // server_detail
    // ========================================================================

    #[test]
    fn test_detail_string() {
        let body = r#"{"detail": "Invalid email or password"}"#;
        assert_eq!(
            server_detail(body),
            Some("Invalid email or password".to_string())
        );
    }

    #[test]
    fn test_detail_validation_list() {
        let body = r#"{"detail": [{"loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error"}]}"#;
        assert_eq!(
            server_detail(body),
            Some("value is not a valid email address".to_string())
        );
    }

    #[test]
    fn test_detail_takes_priority_over_message() {
        let body = r#"{"detail": "first", "message": "second"}"#;
        assert_eq!(server_detail(body), Some("first".to_string()));
    }

    #[test]
    fn test_message_then_error() {
        assert_eq!(
            server_detail(r#"{"message": "Email already registered"}"#),
            Some("Email already registered".to_string())
        );
        assert_eq!(
            server_detail(r#"{"error": "boom"}"#),
            Some("boom".to_string())
        );
    }

    #[test]
    fn test_empty_detail_falls_through() {
        let body = r#"{"detail": "", "message": "fallback"}"#;
        assert_eq!(server_detail(body), Some("fallback".to_string()));
    }

    #[test]
    fn test_non_json_body() {
        assert_eq!(server_detail("<html>Bad Gateway</html>"), None);
        assert_eq!(server_detail(""), None);
    }

    // ========================================================================
    // ApiError messages
    // ========================================================================

    #[test]
    fn test_user_message_prefers_detail() {
        let err = ApiError::from_status(400, r#"{"detail": "Email already registered"}"#);
        assert_eq!(err.user_message(), "Email already registered");
        assert_eq!(err.detail_or("Registration failed"), "Email already registered");
    }

    #[test]
    fn test_user_message_without_detail() {
        let err = ApiError::from_status(500, "Internal Server Error");
        assert_eq!(err.user_message(), "Request failed with status code 500");
        assert_eq!(err.detail_or("Login failed"), "Login failed");
    }

    #[test]
    fn test_network_error_uses_fallback() {
        let err = ApiError::Network("Failed to fetch".to_string());
        assert_eq!(err.detail(), None);
        assert_eq!(err.detail_or("Error adding bookmark"), "Error adding bookmark");
        assert_eq!(err.user_message(), "Network Error: Failed to fetch");
    }

    #[test]
    fn test_is_unauthorized() {
        assert!(ApiError::from_status(401, "{}").is_unauthorized());
        assert!(!ApiError::from_status(403, "{}").is_unauthorized());
        assert!(!ApiError::Decode("x".to_string()).is_unauthorized());
    }
}
