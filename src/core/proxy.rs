//! Reverse proxy for the fashion AI backend
//!
//! The browser only ever talks to this host. Every `/api/*` request is
//! forwarded to the upstream backend and its response streamed back, so the
//! client sees the backend's status codes and error bodies unchanged.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::{Body, to_bytes},
    extract::{Request, State},
    http::{HeaderMap, HeaderName, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::any,
};
use serde_json::json;

use super::config::Config;

/// Largest request body forwarded upstream (photo uploads)
pub const MAX_REQUEST_BYTES: usize = 32 * 1024 * 1024;

/// Request headers passed to the backend
static FORWARDED_REQUEST_HEADERS: [HeaderName; 3] =
    [header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT];

/// Response headers passed back to the browser
static FORWARDED_RESPONSE_HEADERS: [HeaderName; 2] =
    [header::CONTENT_TYPE, header::CONTENT_DISPOSITION];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Failed to read request body: {0}")]
    Body(String),

    #[error("Backend timed out")]
    Timeout,

    #[error("Backend unavailable: {0}")]
    Upstream(#[source] reqwest::Error),

    #[error("Invalid backend response: {0}")]
    Response(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::Client(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::Body(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ProxyError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            ProxyError::Upstream(_) | ProxyError::Response(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProxyError::Timeout
        } else {
            ProxyError::Upstream(e)
        }
    }
}

/// Error bodies use the backend's `{"detail": ...}` shape
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

// ============================================================================
// State
// ============================================================================

#[derive(Clone)]
pub struct ProxyState {
    client: reqwest::Client,
    upstream_url: String,
}

impl ProxyState {
    pub fn new(config: &Config) -> Result<Self, ProxyError> {
        let client = reqwest::Client::builder()
            .timeout(config.proxy_timeout)
            .build()
            .map_err(ProxyError::Client)?;
        Ok(Self {
            client,
            upstream_url: config.upstream_url.clone(),
        })
    }

    pub fn upstream_url(&self) -> &str {
        &self.upstream_url
    }
}

// ============================================================================
// Router
// ============================================================================

/// `ANY /api/{*path}` forwarded to `<upstream>/api/<path>`
pub fn api_proxy_router(state: ProxyState) -> Router {
    Router::new()
        .route("/api/{*path}", any(proxy_handler))
        .with_state(Arc::new(state))
}

/// Target URL for a proxied path and optional query string
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!(
        "{}/api/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    if let Some(q) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(q);
    }
    url
}

/// Path below `/api/`, still percent-encoded so escaped `/` and `?` inside a
/// segment reach the backend unchanged
pub fn upstream_path(request_path: &str) -> &str {
    request_path
        .strip_prefix("/api/")
        .unwrap_or_else(|| request_path.trim_start_matches('/'))
}

/// Keep only the allow-listed headers
pub fn filter_headers(source: &HeaderMap, allowed: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in allowed {
        for value in source.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

async fn proxy_handler(
    State(state): State<Arc<ProxyState>>,
    request: Request,
) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let path = upstream_path(parts.uri.path());
    let url = upstream_url(&state.upstream_url, path, parts.uri.query());
    let headers = filter_headers(&parts.headers, &FORWARDED_REQUEST_HEADERS);

    let body = to_bytes(body, MAX_REQUEST_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    tracing::debug!(method = %parts.method, %url, bytes = body.len(), "proxying request");

    let mut upstream = state
        .client
        .request(parts.method.clone(), &url)
        .headers(headers);
    if parts.method != Method::GET && parts.method != Method::HEAD {
        upstream = upstream.body(body);
    }

    let response = upstream.send().await.map_err(|e| {
        tracing::error!(method = %parts.method, %url, "backend request failed: {}", e);
        ProxyError::from(e)
    })?;

    let status = response.status();
    if status.is_server_error() {
        tracing::warn!(method = %parts.method, %url, %status, "backend error");
    } else {
        tracing::info!(method = %parts.method, path = %path, %status, "proxied");
    }

    let mut builder = Response::builder().status(status);
    if let Some(out) = builder.headers_mut() {
        out.extend(filter_headers(response.headers(), &FORWARDED_RESPONSE_HEADERS));
    }

    builder
        .body(Body::from_stream(response.bytes_stream()))
        .map_err(|e| ProxyError::Response(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    // ========================================================================
    // URL building
    // ========================================================================

    #[test]
    fn test_upstream_url_with_query() {
        assert_eq!(
            upstream_url(
                "http://localhost:8000",
                "auth/profile",
                Some("token=abc")
            ),
            "http://localhost:8000/api/auth/profile?token=abc"
        );
    }

    #[test]
    fn test_upstream_url_normalizes_slashes() {
        assert_eq!(
            upstream_url("http://backend/", "/bookmarks/list", None),
            "http://backend/api/bookmarks/list"
        );
        assert_eq!(
            upstream_url("http://backend", "pricing/suggest", Some("")),
            "http://backend/api/pricing/suggest"
        );
    }

    #[test]
    fn test_upstream_path_keeps_escapes() {
        assert_eq!(upstream_path("/api/bookmarks/list"), "bookmarks/list");
        assert_eq!(
            upstream_path("/api/bookmarks/delete/summer%2Fwinter%3Fdraft"),
            "bookmarks/delete/summer%2Fwinter%3Fdraft"
        );
        assert_eq!(
            upstream_url(
                "http://backend",
                upstream_path("/api/bookmarks/delete/a%2Fb"),
                Some("x=1")
            ),
            "http://backend/api/bookmarks/delete/a%2Fb?x=1"
        );
    }

    // ========================================================================
    // Header filtering
    // ========================================================================

    #[test]
    fn test_request_headers_are_allow_listed() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer t"));
        headers.insert(header::COOKIE, HeaderValue::from_static("session=1"));
        headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));

        let filtered = filter_headers(&headers, &FORWARDED_REQUEST_HEADERS);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.get(header::COOKIE).is_none());
        assert!(filtered.get(header::HOST).is_none());
        assert_eq!(filtered[header::AUTHORIZATION], "Bearer t");
    }

    #[test]
    fn test_response_headers_keep_disposition() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/pdf"));
        headers.insert(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_static("attachment; filename=report.pdf"),
        );
        headers.insert(header::SERVER, HeaderValue::from_static("uvicorn"));

        let filtered = filter_headers(&headers, &FORWARDED_RESPONSE_HEADERS);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.get(header::SERVER).is_none());
    }

    // ========================================================================
    // Errors
    // ========================================================================

    #[test]
    fn test_error_statuses() {
        assert_eq!(ProxyError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(
            ProxyError::Body("too big".into()).status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            ProxyError::Response("bad header".into()).status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[tokio::test]
    async fn test_error_body_uses_detail() {
        let response = ProxyError::Timeout.into_response();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);

        let bytes = to_bytes(response.into_body(), 1024).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["detail"], "Backend timed out");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_bad_gateway() {
        let config = Config {
            // Port 9 (discard) on loopback is closed in test environments.
            upstream_url: "http://127.0.0.1:9".to_string(),
            proxy_timeout: std::time::Duration::from_secs(5),
            log_filter: "info".to_string(),
        };
        let state = Arc::new(ProxyState::new(&config).unwrap());
        let request = axum::http::Request::builder()
            .uri("/api/bookmarks/list")
            .body(Body::empty())
            .unwrap();

        let err = proxy_handler(State(state), request)
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    // ========================================================================
    // Router
    // ========================================================================

    fn unreachable_router() -> Router {
        let config = Config {
            upstream_url: "http://127.0.0.1:9".to_string(),
            proxy_timeout: std::time::Duration::from_secs(5),
            log_filter: "info".to_string(),
        };
        api_proxy_router(ProxyState::new(&config).unwrap())
    }

    #[tokio::test]
    async fn test_router_only_claims_api_paths() {
        use tower::ServiceExt;

        let request = axum::http::Request::builder()
            .uri("/pkg/vastravaani.js")
            .body(Body::empty())
            .unwrap();
        let response = unreachable_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_router_forwards_any_method() {
        use tower::ServiceExt;

        let request = axum::http::Request::builder()
            .method(Method::DELETE)
            .uri("/api/bookmarks/delete/3")
            .body(Body::empty())
            .unwrap();
        let response = unreachable_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let bytes = to_bytes(response.into_body(), 4096).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["detail"].as_str().unwrap().starts_with("Backend unavailable"));
    }
}
