//! Compile-time configuration of the dashboard.
//!
//! Values are read with `option_env!` when the bundle is built, so changing
//! them means rebuilding.

use shared::table::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use tracing::Level;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5283/api";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// Base URL every REST path is appended to
    pub api_base_url: String,
    /// Maximum level forwarded to the browser console
    pub log_level: String,
    pub login_route: String,
    pub dashboard_route: String,
    pub page_size_options: Vec<usize>,
    pub default_page_size: usize,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self::from_values(
            option_env!("OMNIADLY_API_BASE_URL"),
            option_env!("OMNIADLY_LOG_LEVEL"),
        )
    }
}

impl AdminConfig {
    pub fn new() -> Self {
        Self::default()
    }

    fn from_values(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        let log_level = log_level
            .map(str::trim)
            .filter(|level| !level.is_empty())
            .unwrap_or(DEFAULT_LOG_LEVEL)
            .to_ascii_lowercase();

        Self {
            api_base_url,
            log_level,
            login_route: "/auth/login".to_string(),
            dashboard_route: "/".to_string(),
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Parsed log level, `INFO` when the configured value is not a level.
    pub fn level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }

    /// Routes handed to the auth gate.
    pub fn gate_routes(&self) -> shared::auth::GateRoutes {
        shared::auth::GateRoutes {
            login: self.login_route.clone(),
            dashboard: self.dashboard_route.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AdminConfig::from_values(None, None);
        assert_eq!(config.api_base_url(), "http://localhost:5283/api");
        assert_eq!(config.level(), Level::INFO);
        assert_eq!(config.login_route, "/auth/login");
        assert_eq!(config.dashboard_route, "/");
        assert_eq!(config.page_size_options, vec![5, 10, 20, 30, 40, 50]);
        assert_eq!(config.default_page_size, 10);
    }

    #[test]
    fn test_overrides_are_normalised() {
        let config = AdminConfig::from_values(Some(" https://api.omniadly.io/api/ "), Some("DEBUG"));
        assert_eq!(config.api_base_url(), "https://api.omniadly.io/api");
        assert_eq!(config.level(), Level::DEBUG);
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = AdminConfig::from_values(Some(""), Some("loud"));
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(config.level(), Level::INFO);
    }

    #[test]
    fn test_gate_routes() {
        let routes = AdminConfig::new().gate_routes();
        assert_eq!(routes.login, "/auth/login");
        assert_eq!(routes.dashboard, "/");
    }
}
