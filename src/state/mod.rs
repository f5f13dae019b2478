//! Client-side state
//!
//! The only state the client holds is the bearer token shared by all
//! resource services.

pub mod token;

pub use token::TokenStore;
