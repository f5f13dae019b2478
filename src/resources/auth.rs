//! Authentication resource
//!
//! Sanctum token flow: `login` exchanges credentials for a bearer token and
//! stores it in the shared [`TokenStore`]; `logout` revokes it server-side
//! and drops it locally. The token is replaced wholesale; there is no
//! refresh.

use serde_json::Value;
use tracing::{debug, info};

use crate::http::ApiClient;
use crate::models::{AccountUser, LoginRequest, LoginResponse};
use crate::utils::errors::{ApiError, Result};

/// Login/logout and current-account lookup.
#[derive(Debug, Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a bearer token. On success the token is
    /// stored and used by every service sharing this client.
    pub async fn login(&self, email: &str, password: &str) -> Result<AccountUser> {
        debug!(email = email, "Logging in");
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.client.post("/api/login", &request).await?;
        self.client.tokens().set(response.token);
        info!(email = email, user_id = response.user.id, "Login succeeded");
        Ok(response.user)
    }

    /// Revoke the current token. The local copy is dropped even when the
    /// server call fails, since a token the server rejects is useless to
    /// keep.
    pub async fn logout(&self) -> Result<()> {
        if !self.client.tokens().is_authenticated() {
            return Err(ApiError::MissingToken);
        }
        let result: Result<Value> = self.client.post("/api/logout", &serde_json::json!({})).await;
        self.client.tokens().clear();
        result.map(|_| ())
    }

    /// The account behind the current token.
    pub async fn me(&self) -> Result<AccountUser> {
        self.client.get("/api/user", &[]).await
    }
}
