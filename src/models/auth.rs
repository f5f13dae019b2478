//! Authentication models

use serde::{Deserialize, Serialize};

/// The account behind the current token (admin, student or staff login).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AccountUser,
}
