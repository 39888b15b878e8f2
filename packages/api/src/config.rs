//! Client configuration.

use std::sync::OnceLock;

/// Backend address used when `INVENTARIO_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

static CONFIG: OnceLock<ApiConfig> = OnceLock::new();

/// Configuration for the inventory API client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the REST backend, without trailing slash.
    pub base_url: String,
}

impl ApiConfig {
    /// Create a configuration pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build from `INVENTARIO_API_URL`, captured at compile time so the same
    /// binary works in the browser where there is no process environment.
    pub fn from_env() -> Self {
        match option_env!("INVENTARIO_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// Process-wide configuration, resolved once on first use.
    pub fn global() -> &'static ApiConfig {
        CONFIG.get_or_init(Self::from_env)
    }

    /// Join a request path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ApiConfig::new("http://api.test/");
        assert_eq!(config.base_url, "http://api.test");
        assert_eq!(config.url("/productos"), "http://api.test/productos");
        assert_eq!(config.url("productos/3"), "http://api.test/productos/3");
    }

    #[test]
    fn test_default_points_at_localhost() {
        assert_eq!(ApiConfig::default().base_url, DEFAULT_API_URL);
    }
}
