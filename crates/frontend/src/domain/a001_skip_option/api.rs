//! Catalog loader: one GET returning every skip option for the configured location

use std::collections::HashSet;

use contracts::domain::a001_skip_option::SkipOption;
use gloo_net::http::Request;
use thiserror::Error;

use crate::shared::api_utils::api_url;
use crate::shared::config::CatalogConfig;

/// Catalog load failure. The variants only feed the diagnostic log;
/// users always see [`CatalogLoadError::USER_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogLoadError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Invalid catalog payload: {0}")]
    Decode(String),
}

impl CatalogLoadError {
    pub const USER_MESSAGE: &'static str = "Failed to load skip options. Please try again later.";

    pub fn user_message(&self) -> &'static str {
        Self::USER_MESSAGE
    }
}

/// GET {api_base}{skips_path}?postcode=..&area=..
pub async fn fetch_skips(config: &CatalogConfig) -> Result<Vec<SkipOption>, CatalogLoadError> {
    let url = api_url(&config.api_base, &config.skips_path);
    log::debug!(
        "Fetching skip options from {} (postcode={}, area={})",
        url,
        config.postcode,
        config.area
    );

    let response = Request::get(&url)
        .query([
            ("postcode", config.postcode.as_str()),
            ("area", config.area.as_str()),
        ])
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| CatalogLoadError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(CatalogLoadError::Status(response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| CatalogLoadError::Network(e.to_string()))?;
    decode_skips(&text)
}

/// Decodes the JSON array. Records breaking an invariant are logged, not dropped.
pub fn decode_skips(text: &str) -> Result<Vec<SkipOption>, CatalogLoadError> {
    let items: Vec<SkipOption> =
        serde_json::from_str(text).map_err(|e| CatalogLoadError::Decode(e.to_string()))?;

    let mut seen = HashSet::new();
    for item in &items {
        if let Err(msg) = item.validate() {
            log::warn!("{}", msg);
        }
        if !seen.insert(item.id) {
            log::warn!("Duplicate skip id {} in catalog", item.id.value());
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_keeps_backend_order() {
        let json = r#"[
            {"id": 2, "size": 20, "hire_period_days": 14, "price_before_vat": 500, "vat": 20,
             "allowed_on_road": false, "allows_heavy_waste": true, "postcode": "NR32"},
            {"id": 1, "size": 4, "hire_period_days": 7, "price_before_vat": 100, "vat": 20,
             "allowed_on_road": true, "allows_heavy_waste": false}
        ]"#;
        let items = decode_skips(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id.value(), 2);
        assert_eq!(items[1].hire_period_days, 7);
    }

    #[test]
    fn test_decode_failure_is_decode_error() {
        let err = decode_skips(r#"{"error": "nope"}"#).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Decode(_)));
        assert_eq!(err.user_message(), CatalogLoadError::USER_MESSAGE);
    }

    #[test]
    fn test_every_error_collapses_to_one_message() {
        let errors = [
            CatalogLoadError::Network("offline".into()),
            CatalogLoadError::Status(500),
            CatalogLoadError::Decode("eof".into()),
        ];
        for e in errors {
            assert_eq!(
                e.user_message(),
                "Failed to load skip options. Please try again later."
            );
        }
        assert_eq!(CatalogLoadError::Status(503).to_string(), "HTTP 503");
    }
}
