//! API utilities for talking to the skip catalog backend

/// Build a full API URL from a base and a path
///
/// Tolerates a trailing slash on the base and a missing leading slash on the path.
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
/// let url = api_url("https://example.com/", "api/skips");
/// assert_eq!(url, "https://example.com/api/skips");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_once() {
        assert_eq!(
            api_url("https://app.wewantwaste.co.uk", "/api/skips/by-location"),
            "https://app.wewantwaste.co.uk/api/skips/by-location"
        );
        assert_eq!(api_url("http://localhost:3000/", "/api/skips"), "http://localhost:3000/api/skips");
        assert_eq!(api_url("", "/api/skips"), "/api/skips");
    }
}
