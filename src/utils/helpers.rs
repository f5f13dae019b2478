//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the client.

/// Default path served when a record has no uploaded image.
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.png";

/// Resolve a stored attachment reference to a displayable URL.
///
/// The API stores uploads as paths relative to its public storage
/// directory (`/storage/` by default). Absolute URLs pass through
/// unchanged; a missing value resolves to the configured placeholder.
pub fn image_url(base_url: &str, public_path: &str, placeholder: &str, path: Option<&str>) -> String {
    match path {
        None => placeholder.to_string(),
        Some(p) if p.starts_with("http://") || p.starts_with("https://") => p.to_string(),
        Some(p) => format!(
            "{}/{}/{}",
            base_url.trim_end_matches('/'),
            public_path.trim_matches('/'),
            p.trim_start_matches('/')
        ),
    }
}

/// Join a base URL and an API path without doubling slashes.
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Build the query pairs shared by every list endpoint.
///
/// Search is a server-side parameter so filtering applies to the whole
/// collection, not just the page already fetched.
pub fn list_query(page: u32, search: Option<&str>) -> Vec<(String, String)> {
    let mut query = vec![("page".to_string(), page.to_string())];
    if let Some(term) = search {
        let term = term.trim();
        if !term.is_empty() {
            query.push(("search".to_string(), term.to_string()));
        }
    }
    query
}

/// Create a pagination info string
pub fn pagination_info(current_page: u32, last_page: u32, total: u64) -> String {
    if last_page <= 1 {
        format!("Total: {}", total)
    } else {
        format!("Page {} of {} (Total: {})", current_page, last_page, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url_placeholder() {
        assert_eq!(
            image_url("http://api.test", "storage", PLACEHOLDER_IMAGE, None),
            PLACEHOLDER_IMAGE
        );
        assert_eq!(
            image_url("http://api.test", "storage", "/img/none.png", None),
            "/img/none.png"
        );
    }

    #[test]
    fn test_image_url_absolute_passthrough() {
        assert_eq!(
            image_url("http://api.test", "storage", PLACEHOLDER_IMAGE, Some("http://x/y.png")),
            "http://x/y.png"
        );
        assert_eq!(
            image_url("http://api.test", "storage", PLACEHOLDER_IMAGE, Some("https://x/y.png")),
            "https://x/y.png"
        );
    }

    #[test]
    fn test_image_url_storage_prefix() {
        assert_eq!(
            image_url("http://api.test", "storage", PLACEHOLDER_IMAGE, Some("foo.png")),
            "http://api.test/storage/foo.png"
        );
        assert_eq!(
            image_url("http://api.test/", "/storage/", PLACEHOLDER_IMAGE, Some("/students/foo.png")),
            "http://api.test/storage/students/foo.png"
        );
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://api.test/", "/api/blocks"), "http://api.test/api/blocks");
        assert_eq!(join_url("http://api.test", "api/blocks"), "http://api.test/api/blocks");
    }

    #[test]
    fn test_list_query() {
        assert_eq!(list_query(2, None), vec![("page".to_string(), "2".to_string())]);
        let with_search = list_query(1, Some(" alice "));
        assert_eq!(with_search[1], ("search".to_string(), "alice".to_string()));
        assert_eq!(list_query(1, Some("   ")).len(), 1);
    }

    #[test]
    fn test_pagination_info() {
        assert_eq!(pagination_info(1, 1, 4), "Total: 4");
        assert_eq!(pagination_info(2, 5, 42), "Page 2 of 5 (Total: 42)");
    }
}
