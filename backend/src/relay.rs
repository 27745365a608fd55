use axum::body::Body;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::{json, Value};
use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5256";
pub const RELAY_TIMEOUT: Duration = Duration::from_secs(10);

/// Structured relay failure surfaced to the caller: the backend's status and
/// body for non-2xx responses, 504 for timeouts, 500 for transport errors.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    pub data: Option<Value>,
}

impl ApiError {
    pub fn timeout() -> Self {
        Self {
            status: 504,
            message: "Backend request timeout".to_string(),
            data: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        axum::response::Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Body::from(
                json!({
                    "error": self.message,
                    "data": self.data,
                })
                .to_string(),
            ))
            .unwrap()
    }
}

/// A successful backend response: status plus the parsed body.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RelayResponse {
    pub status: u16,
    pub data: Value,
}

/// Thin pass-through client for the external backend. Joins path suffixes
/// onto `BACKEND_URL` and forwards requests with a bounded timeout.
#[derive(Clone)]
pub struct RelayClient {
    base_url: String,
    http: reqwest::Client,
}

impl RelayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::builder()
                .timeout(RELAY_TIMEOUT)
                .build()
                .expect("Failed to build relay client"),
        }
    }

    pub fn from_env() -> Self {
        Self::new(
            std::env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string()),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URLs pass through untouched; anything else is joined onto the
    /// base URL with exactly one slash between them.
    pub fn join_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        }
    }

    pub async fn forward(
        &self,
        method: reqwest::Method,
        path: &str,
        content_type: Option<&str>,
        body: Option<String>,
    ) -> Result<RelayResponse, ApiError> {
        let url = self.join_url(path);

        let mut request = self
            .http
            .request(method, &url)
            .header("accept", "application/json");
        if let Some(content_type) = content_type {
            request = request.header("content-type", content_type);
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::timeout()
            } else {
                ApiError {
                    status: 500,
                    message: format!("Backend request failed: {}", e),
                    data: None,
                }
            }
        })?;

        let status = response.status();
        let is_json = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains("application/json"))
            .unwrap_or(false);
        let data = if is_json {
            response.json::<Value>().await.unwrap_or(Value::Null)
        } else {
            response.text().await.map(Value::String).unwrap_or(Value::Null)
        };

        if !status.is_success() {
            return Err(ApiError {
                status: status.as_u16(),
                message: format!(
                    "Backend request failed: {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("")
                ),
                data: Some(data),
            });
        }

        Ok(RelayResponse {
            status: status.as_u16(),
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_strips_duplicate_slashes() {
        let client = RelayClient::new("http://localhost:5256/");
        assert_eq!(
            client.join_url("/User/GetCurrentCoins"),
            "http://localhost:5256/User/GetCurrentCoins"
        );
        assert_eq!(
            client.join_url("User/GetCurrentCoins"),
            "http://localhost:5256/User/GetCurrentCoins"
        );
    }

    #[test]
    fn test_join_url_passes_absolute_urls_through() {
        let client = RelayClient::new("http://localhost:5256");
        assert_eq!(
            client.join_url("https://example.com/x"),
            "https://example.com/x"
        );
    }

    #[test]
    fn test_timeout_error_maps_to_504() {
        let err = ApiError::timeout();
        assert_eq!(err.status, 504);
        assert_eq!(err.message, "Backend request timeout");
        assert!(err.data.is_none());
    }
}
