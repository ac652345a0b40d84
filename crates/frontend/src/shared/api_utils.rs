//! Runtime configuration and API URL helpers.
//!
//! The backend is served from the same origin as the page. A different base
//! can be set in localStorage under [`API_BASE_STORAGE_KEY`] for development.

use web_sys::window;

pub const API_BASE_STORAGE_KEY: &str = "api-base";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefix of every backend path, empty for same origin
    pub api_base: String,
}

impl AppConfig {
    /// How long a status message stays visible
    pub const STATUS_LIFETIME_MS: u32 = 5000;

    /// Pause between two justification calls of "justify all"
    pub const JUSTIFY_PAUSE_MS: u32 = 500;

    /// Delay before the progress panel of a finished operation is hidden
    pub const PROGRESS_HIDE_MS: u32 = 3000;

    /// Delay before the page reloads after a reset
    pub const RESET_RELOAD_MS: u32 = 2000;

    pub fn load() -> Self {
        let api_base = window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(API_BASE_STORAGE_KEY).ok().flatten())
            .map(|base| normalize_base(&base))
            .unwrap_or_default();
        Self { api_base }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/get_all_documents");
/// ```
pub fn api_url(path: &str) -> String {
    AppConfig::load().url(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let config = AppConfig {
            api_base: normalize_base(" http://localhost:5000/ "),
        };
        assert_eq!(config.url("/get_catalog"), "http://localhost:5000/get_catalog");

        let same_origin = AppConfig {
            api_base: String::new(),
        };
        assert_eq!(same_origin.url("/get_catalog"), "/get_catalog");
    }
}
