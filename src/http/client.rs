//! HTTP client for hotel API conformance checks
//!
//! Wraps outbound calls to the hotel management server and normalizes
//! transport failures into a uniform outcome, so the runner never has to
//! handle a raw network error.

#![allow(dead_code)]

use anyhow::{Context, Result};
use reqwest::{header, Client, Method};
use serde_json::Value;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// Transport-level failures, caught at the client boundary
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("Connection refused to {0}")]
    ConnectionRefused(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

/// Decoded response body
///
/// JSON arrays and objects keep their structure; everything else (including
/// non-JSON responses) is carried as raw text. Checks pattern-match on the
/// tag instead of assuming a shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    Sequence(Vec<Value>),
    Mapping(serde_json::Map<String, Value>),
    RawText(String),
}

impl Body {
    /// Decode a response body, falling back to raw text on non-JSON input
    pub fn decode(text: &str) -> Body {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Array(items)) => Body::Sequence(items),
            Ok(Value::Object(map)) => Body::Mapping(map),
            _ => Body::RawText(text.to_string()),
        }
    }

    /// Build the `{"error": message}` body used for transport failures
    pub fn error(message: impl Into<String>) -> Body {
        let mut map = serde_json::Map::new();
        map.insert("error".to_string(), Value::String(message.into()));
        Body::Mapping(map)
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Body::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Body::Sequence(_))
    }

    /// Look up a field on a mapping body
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Body::Mapping(map) => map.get(name),
            _ => None,
        }
    }

    /// Short tag name for detail strings
    pub fn kind(&self) -> &'static str {
        match self {
            Body::Sequence(_) => "list",
            Body::Mapping(_) => "object",
            Body::RawText(_) => "text",
        }
    }

    /// Compact one-line rendering for failure details
    pub fn summary(&self) -> String {
        let text = match self {
            Body::Sequence(items) => format!("list of {} items", items.len()),
            Body::Mapping(map) => Value::Object(map.clone()).to_string(),
            Body::RawText(text) => text.clone(),
        };
        truncate(&text, 120)
    }
}

/// Uniform result of one API call
///
/// `status` is 0 when the server was unreachable. `success` is true iff the
/// call completed with a status below 400.
#[derive(Clone, Debug)]
pub struct RequestOutcome {
    pub success: bool,
    pub status: u16,
    pub body: Body,
    pub duration_ms: u64,
}

impl RequestOutcome {
    fn completed(status: u16, body: Body, duration_ms: u64) -> Self {
        Self {
            success: status < 400,
            status,
            body,
            duration_ms,
        }
    }

    fn transport_failure(error: TransportError, duration_ms: u64) -> Self {
        Self {
            success: false,
            status: 0,
            body: Body::error(error.to_string()),
            duration_ms,
        }
    }

    pub fn is_unreachable(&self) -> bool {
        self.status == 0
    }
}

/// HTTP client bound to one hotel API server
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    timeout_secs: u64,
}

impl ApiClient {
    /// Create a client with the given per-call timeout
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            timeout_secs,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for an endpoint under the fixed API prefix
    fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/api/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Issue one API call
    ///
    /// Transport failures never surface as an `Err`: they come back as an
    /// outcome with status 0 and an `{"error": ...}` body.
    pub async fn call(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
        query: Option<&[(&str, String)]>,
    ) -> RequestOutcome {
        let url = self.endpoint_url(endpoint);
        debug!("Sending {} request to {}", method, url);

        let mut req = self
            .client
            .request(method, &url)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(pairs) = query {
            req = req.query(pairs);
        }
        if let Some(payload) = body {
            req = req.json(payload);
        }

        let start = Instant::now();

        let response = match req.send().await {
            Ok(response) => response,
            Err(e) => {
                let error = self.classify(&e, &url);
                debug!("Transport failure for {}: {}", url, error);
                return RequestOutcome::transport_failure(
                    error,
                    start.elapsed().as_millis() as u64,
                );
            }
        };

        let status = response.status().as_u16();

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                return RequestOutcome::transport_failure(
                    TransportError::RequestFailed(e.to_string()),
                    start.elapsed().as_millis() as u64,
                );
            }
        };

        let duration_ms = start.elapsed().as_millis() as u64;
        debug!("Response: {} in {}ms", status, duration_ms);

        RequestOutcome::completed(status, Body::decode(&text), duration_ms)
    }

    fn classify(&self, e: &reqwest::Error, url: &str) -> TransportError {
        if e.is_timeout() {
            TransportError::Timeout(self.timeout_secs)
        } else if e.is_connect() {
            TransportError::ConnectionRefused(url.to_string())
        } else {
            TransportError::RequestFailed(e.to_string())
        }
    }

    /// Convenience method for GET
    pub async fn get(&self, endpoint: &str) -> RequestOutcome {
        self.call(Method::GET, endpoint, None, None).await
    }

    /// GET with query parameters
    pub async fn get_with_query(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> RequestOutcome {
        self.call(Method::GET, endpoint, None, Some(query)).await
    }

    /// Convenience method for POST with a JSON payload
    pub async fn post(&self, endpoint: &str, payload: &Value) -> RequestOutcome {
        self.call(Method::POST, endpoint, Some(payload), None).await
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_decode_sequence() {
        let body = Body::decode(r#"[{"roomNo":"101"},{"roomNo":"102"}]"#);
        assert!(body.is_sequence());
        assert_eq!(body.as_sequence().unwrap().len(), 2);
    }

    #[test]
    fn test_body_decode_mapping() {
        let body = Body::decode(r#"{"success":true,"message":"created"}"#);
        assert_eq!(body.field("success"), Some(&json!(true)));
        assert!(!body.is_sequence());
    }

    #[test]
    fn test_body_decode_raw_text() {
        let body = Body::decode("<html>Not Found</html>");
        assert_eq!(body, Body::RawText("<html>Not Found</html>".to_string()));
        assert_eq!(body.kind(), "text");
    }

    #[test]
    fn test_body_decode_scalar_kept_as_text() {
        // A bare JSON scalar is neither a listing nor a record
        let body = Body::decode("42");
        assert_eq!(body, Body::RawText("42".to_string()));
    }

    #[test]
    fn test_error_body() {
        let body = Body::error("connection refused");
        assert_eq!(body.field("error"), Some(&json!("connection refused")));
    }

    #[test]
    fn test_outcome_success_boundary() {
        let ok = RequestOutcome::completed(399, Body::RawText(String::new()), 1);
        assert!(ok.success);

        let bad = RequestOutcome::completed(400, Body::RawText(String::new()), 1);
        assert!(!bad.success);
    }

    #[test]
    fn test_transport_failure_outcome() {
        let outcome = RequestOutcome::transport_failure(
            TransportError::ConnectionRefused("http://localhost:3000/api/rooms".into()),
            5,
        );
        assert!(!outcome.success);
        assert!(outcome.is_unreachable());
        assert!(outcome
            .body
            .field("error")
            .and_then(Value::as_str)
            .unwrap()
            .contains("Connection refused"));
    }

    #[test]
    fn test_endpoint_url() {
        let client = ApiClient::new("http://localhost:3000/", 10).unwrap();
        assert_eq!(
            client.endpoint_url("rooms"),
            "http://localhost:3000/api/rooms"
        );
        assert_eq!(
            client.endpoint_url("/book"),
            "http://localhost:3000/api/book"
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("this is a longer string", 10), "this is...");
    }
}
