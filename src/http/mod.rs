//! HTTP layer shared by all resource services
//!
//! `ApiClient` wraps a configured `reqwest::Client`: it joins paths onto the
//! API base URL, sets `Accept: application/json`, attaches the bearer token
//! from the shared [`TokenStore`] when one is present, and normalizes every
//! non-2xx response into [`ApiError::Api`] with the server's message and
//! per-field validation detail.
//!
//! There is no retry, caching, or request coalescing: one call is one
//! request, and failures surface to the caller through `Result`.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Settings;
use crate::state::TokenStore;
use crate::utils::errors::{ApiError, Result, ValidationErrors};
use crate::utils::helpers::{image_url, join_url};

/// Shape of a Laravel error body: `{"message": "...", "errors": {...}}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    errors: Option<ValidationErrors>,
}

/// Typed HTTP client for the hostel API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    public_path: String,
    placeholder: String,
    tokens: TokenStore,
}

impl ApiClient {
    /// Create a new ApiClient from validated settings.
    pub fn new(settings: &Settings, tokens: TokenStore) -> Result<Self> {
        settings.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.api.timeout_seconds))
            .user_agent(settings.api.user_agent.as_str())
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self {
            client,
            base_url: settings.api.base_url.trim_end_matches('/').to_string(),
            public_path: settings.storage.public_path.clone(),
            placeholder: settings.storage.placeholder.clone(),
            tokens,
        })
    }

    /// Token store shared with every service built on this client.
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// API host this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a stored attachment path against this client's host.
    pub fn file_url(&self, path: Option<&str>) -> String {
        image_url(&self.base_url, &self.public_path, &self.placeholder, path)
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T> {
        let mut request = self.client.get(self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = self.execute(path, request).await?;
        self.parse_json(path, response).await
    }

    /// POST a JSON body, expecting a JSON response.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.client.post(self.url(path)).json(body);
        let response = self.execute(path, request).await?;
        self.parse_json(path, response).await
    }

    /// PUT a JSON body, expecting a JSON response.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.client.put(self.url(path)).json(body);
        let response = self.execute(path, request).await?;
        self.parse_json(path, response).await
    }

    /// DELETE a resource. Tolerates empty 2xx bodies.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let request = self.client.delete(self.url(path));
        let response = self.execute(path, request).await?;
        if response.status().is_success() {
            return Ok(());
        }
        Err(Self::error_from_response(path, response).await)
    }

    /// POST a multipart form (create with file upload).
    pub async fn post_form<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T> {
        let request = self.client.post(self.url(path)).multipart(form);
        let response = self.execute(path, request).await?;
        self.parse_json(path, response).await
    }

    /// Multipart update. HTML forms cannot send PUT, so the API accepts a
    /// POST carrying a `_method=PUT` override field.
    pub async fn put_form<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T> {
        let form = form.text("_method", "PUT");
        self.post_form(path, form).await
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Attach common headers and send.
    async fn execute(&self, path: &str, request: RequestBuilder) -> Result<Response> {
        let mut request = request.header(ACCEPT, "application/json");
        if let Some(token) = self.tokens.get() {
            request = request.bearer_auth(token);
        }

        debug!(path = path, "Sending API request");
        let response = request.send().await.map_err(ApiError::Network)?;
        Ok(response)
    }

    /// Parse a 2xx JSON body into `T`; normalize everything else.
    async fn parse_json<T: DeserializeOwned>(&self, path: &str, response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from_response(path, response).await);
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        let body = response.text().await.map_err(ApiError::Network)?;

        if !content_type.contains("json") {
            return Err(ApiError::UnexpectedResponse(format!(
                "expected JSON from {}, got content-type '{}'",
                path, content_type
            )));
        }

        serde_json::from_str(&body).map_err(|e| {
            ApiError::UnexpectedResponse(format!("failed to decode {} response: {}", path, e))
        })
    }

    /// Read a non-2xx body and normalize it into `ApiError::Api`.
    async fn error_from_response(path: &str, response: Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let error = normalize_error(status, &body);
        warn!(path = path, status = status, error = %error, "API request failed");
        error
    }
}

/// Map a non-2xx status and raw body to `ApiError::Api`.
///
/// Laravel error bodies are JSON `{"message": ..., "errors": {...}}`; other
/// servers and proxies may answer with plain text or nothing at all.
fn normalize_error(status: u16, body: &str) -> ApiError {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if parsed.message.is_some() || parsed.errors.is_some() {
            return ApiError::Api {
                status,
                message: parsed
                    .message
                    .unwrap_or_else(|| format!("HTTP {}", status)),
                validation: parsed.errors,
            };
        }
    }

    let message = if body.trim().is_empty() {
        format!("HTTP {}", status)
    } else {
        body.to_string()
    };

    ApiError::Api {
        status,
        message,
        validation: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_error_laravel_body() {
        let body = r#"{"message": "The given data was invalid.", "errors": {"name": ["required"]}}"#;
        let err = normalize_error(422, body);
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.field_errors("name").unwrap()[0], "required");
        assert_eq!(
            err.to_string(),
            "HTTP 422: The given data was invalid."
        );
    }

    #[test]
    fn test_normalize_error_message_only() {
        let err = normalize_error(404, r#"{"message": "Not found"}"#);
        assert_eq!(err.status(), Some(404));
        assert!(err.validation().is_none());
        assert_eq!(err.to_string(), "HTTP 404: Not found");
    }

    #[test]
    fn test_normalize_error_plain_text_body() {
        let err = normalize_error(500, "upstream exploded");
        match err {
            ApiError::Api { message, validation, .. } => {
                assert_eq!(message, "upstream exploded");
                assert!(validation.is_none());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_normalize_error_empty_body() {
        let err = normalize_error(502, "");
        match err {
            ApiError::Api { message, .. } => assert_eq!(message, "HTTP 502"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_normalize_error_json_without_known_fields() {
        // A JSON body that isn't a Laravel error envelope is kept verbatim.
        let err = normalize_error(503, r#"{"status": "down"}"#);
        match err {
            ApiError::Api { message, .. } => assert_eq!(message, r#"{"status": "down"}"#),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
