//! Paginated list envelope
//!
//! Laravel list endpoints wrap results in
//! `{ data, current_page, last_page, per_page, total }`. Callers drive a
//! page counter and re-fetch on change; the client never merges pages.

use serde::{Deserialize, Serialize};

/// One page of a paginated collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl<T> Paginated<T> {
    /// Whether a further page exists after this one.
    pub fn has_next_page(&self) -> bool {
        self.current_page < self.last_page
    }

    /// Whether this page carries no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.data.len()
    }
}
