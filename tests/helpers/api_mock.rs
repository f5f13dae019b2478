//! Mock hostel API server for testing
//!
//! Wraps a wiremock `MockServer` and hands out `HostelApi` instances
//! configured against it.

use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hostel_client::config::Settings;
use hostel_client::{HostelApi, TokenStore};

/// Mock API server plus client construction helpers.
pub struct HostelMock {
    pub server: MockServer,
}

impl HostelMock {
    pub async fn start() -> Self {
        Self {
            // Non-pooled server: shuts down when dropped, so tests that
            // drop the mock actually lose the listener.
            server: MockServer::builder().start().await,
        }
    }

    /// Settings pointing at the mock server, defaults elsewhere.
    pub fn settings(&self) -> Settings {
        Settings::for_base_url(self.server.uri())
    }

    /// Unauthenticated client.
    pub fn api(&self) -> HostelApi {
        HostelApi::new(&self.settings()).expect("failed to build client")
    }

    /// Client pre-loaded with a bearer token.
    pub fn api_with_token(&self, token: &str) -> HostelApi {
        HostelApi::with_tokens(&self.settings(), TokenStore::with_token(token))
            .expect("failed to build client")
    }

    /// Mount a JSON response for a method/path pair.
    pub async fn mock_json(&self, http_method: &str, route: &str, status: u16, body: Value) {
        Mock::given(method(http_method))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mount a plain-text response, for non-JSON error bodies.
    pub async fn mock_text(&self, http_method: &str, route: &str, status: u16, body: &str) {
        Mock::given(method(http_method))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }
}
