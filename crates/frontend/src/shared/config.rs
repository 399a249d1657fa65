use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Where the skip catalog is fetched from
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    pub api_base: String,
    pub skips_path: String,
    pub postcode: String,
    pub area: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base: "https://app.wewantwaste.co.uk".to_string(),
            skips_path: "/api/skips/by-location".to_string(),
            postcode: "NR32".to_string(),
            area: "Lowestoft".to_string(),
        }
    }
}

/// Configuration embedded into the bundle at build time
const EMBEDDED_CONFIG: &str = include_str!("../../config.toml");

pub fn parse_config(raw: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(raw)
}

/// Load configuration from the embedded config.toml
///
/// Falls back to built-in defaults if the file does not parse.
pub fn load_config() -> AppConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            log::debug!("Catalog endpoint: {}{}", config.catalog.api_base, config.catalog.skips_path);
            config
        }
        Err(e) => {
            log::warn!("config.toml is invalid, using defaults: {}", e);
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = parse_config(EMBEDDED_CONFIG);
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config("[catalog]\npostcode = \"LS1\"\n").unwrap();
        assert_eq!(config.catalog.postcode, "LS1");
        assert_eq!(config.catalog.area, "Lowestoft");
        assert_eq!(config.catalog.skips_path, "/api/skips/by-location");
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(parse_config("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(parse_config("[catalog\napi_base = ").is_err());
    }
}
