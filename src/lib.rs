//! Hostel-management API client
//!
//! A typed client for the hostel-management REST API. This library provides
//! per-resource services (blocks, rooms, students, staff, notices, complaints,
//! check-in/out, finances, chat) on top of a shared HTTP layer that attaches
//! bearer tokens, speaks JSON and multipart, and normalizes HTTP failures
//! into a single [`ApiError`] type with per-field validation detail.

pub mod config;
pub mod http;
pub mod models;
pub mod resources;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use http::ApiClient;
pub use state::TokenStore;
pub use utils::errors::{ApiError, Result};

// Re-export main components for easy access
pub use models::Paginated;
pub use resources::HostelApi;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
