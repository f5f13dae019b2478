//! Utility modules
//!
//! This module contains common utilities used throughout the client,
//! including error types, logging setup, and helper functions.

pub mod errors;
pub mod helpers;
pub mod logging;

pub use errors::{ApiError, Result, ValidationErrors};
pub use helpers::image_url;
