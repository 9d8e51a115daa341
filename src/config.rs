//! Picker configuration read from the page's own query string
//!
//! The embedding page points the picker at a listing server with `?endpoint=`
//! and may open it on a given directory with `?path=`. Both are optional.

use crate::relay::query;

/// Query key naming the listing server base URL (including any path prefix)
const ENDPOINT_PARAM: &str = "endpoint";

/// Query key naming the directory to open first
const PATH_PARAM: &str = "path";

#[derive(Clone, Debug, PartialEq)]
pub struct PickerConfig {
    /// Base URL of the listing server, without a trailing slash
    pub endpoint: String,
    /// Directory shown on startup
    pub start_path: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            start_path: "/".to_string(),
        }
    }
}

impl PickerConfig {
    /// Build config from a location search string, falling back to `origin` for the endpoint
    pub fn from_search(search: &str, origin: &str) -> Self {
        let mut params = query::parse_query(search);

        let endpoint = params
            .remove(ENDPOINT_PARAM)
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| origin.to_string());

        let start_path = params
            .remove(PATH_PARAM)
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| "/".to_string());

        Self {
            endpoint: endpoint.trim().trim_end_matches('/').to_string(),
            start_path,
        }
    }

    /// Build config from `window.location`
    pub fn from_location() -> Self {
        let Some(window) = web_sys::window() else {
            log::warn!("No window available, using default picker config");
            return Self::default();
        };

        let location = window.location();
        let search = location.search().unwrap_or_default();
        let origin = location.origin().unwrap_or_default();

        Self::from_search(&search, &origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_origin() {
        let config = PickerConfig::from_search("?id=42", "https://files.example.com");
        assert_eq!(config.endpoint, "https://files.example.com");
        assert_eq!(config.start_path, "/");
    }

    #[test]
    fn test_endpoint_and_path_from_query() {
        let config = PickerConfig::from_search(
            "?id=1&endpoint=https%3A%2F%2Fcdn.example.com%2Fbrowse%2F&path=images%2F2024",
            "https://app.example.com",
        );
        assert_eq!(config.endpoint, "https://cdn.example.com/browse");
        assert_eq!(config.start_path, "images/2024");
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = PickerConfig::from_search("?endpoint=&path=%20", "https://o.example");
        assert_eq!(config, PickerConfig {
            endpoint: "https://o.example".to_string(),
            start_path: "/".to_string(),
        });
    }
}
