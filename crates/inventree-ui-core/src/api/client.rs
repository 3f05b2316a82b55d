//! HTTP capability used to fetch and partially update records

use crate::config::AppConfig;
use crate::error::{ApiError, Error, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Minimal API surface consumed by the UI components
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// GET a server-relative path and return the decoded JSON body
    async fn get(&self, path: &str) -> Result<Value>;

    /// PATCH a server-relative path with a partial record
    async fn patch(&self, path: &str, body: Value) -> Result<Value>;
}

/// `reqwest`-backed API client authenticating with a user token
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpApiClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let base_url = Url::parse(&config.server)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &config.api_token {
            let value = HeaderValue::from_str(&format!("Token {}", token)).map_err(|e| {
                Error::Api(ApiError::Request(format!("Invalid API token: {}", e)))
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value> {
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        if !status.is_success() {
            let message = error_message(&body, status.canonical_reason().unwrap_or("Request failed"));
            warn!("API request failed with {}: {}", status, message);
            return Err(Error::Api(ApiError::Status {
                status: status.as_u16(),
                message,
            }));
        }

        Ok(body)
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn get(&self, path: &str) -> Result<Value> {
        let url = self.url(path)?;
        debug!("GET {}", url);
        self.send(self.client.get(url)).await
    }

    async fn patch(&self, path: &str, body: Value) -> Result<Value> {
        let url = self.url(path)?;
        debug!("PATCH {}", url);
        self.send(self.client.patch(url).json(&body)).await
    }
}

/// Extract a human readable message from an error response body.
///
/// Prefers the `detail` field, then a bare string body, then `fallback`.
pub fn error_message(body: &Value, fallback: &str) -> String {
    match body {
        Value::Object(map) => match map.get("detail") {
            Some(Value::String(detail)) => detail.clone(),
            Some(other) => other.to_string(),
            None => fallback.to_string(),
        },
        Value::String(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_creation() {
        let config = AppConfig {
            server: "https://demo.inventree.org".to_string(),
            api_token: Some("inv-abc123".to_string()),
            ..Default::default()
        };

        let client = HttpApiClient::new(&config).unwrap();
        assert_eq!(
            client.url("/api/part/1/").unwrap().as_str(),
            "https://demo.inventree.org/api/part/1/"
        );
    }

    #[test]
    fn test_invalid_server_url() {
        let config = AppConfig {
            server: "not a url".to_string(),
            ..Default::default()
        };

        let result = HttpApiClient::new(&config);
        assert!(matches!(result, Err(Error::Api(ApiError::InvalidUrl(_)))));
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(&json!({"detail": "Not found."}), "Not Found"),
            "Not found."
        );
        assert_eq!(error_message(&json!({"starred": ["bad"]}), "Bad Request"), "Bad Request");
        assert_eq!(error_message(&json!("Server Error"), "x"), "Server Error");
        assert_eq!(error_message(&Value::Null, "Forbidden"), "Forbidden");
    }
}
