//! Application Configuration
//!
//! Build-time settings. `TASKSPHERE_API_URL` and `TASKSPHERE_LOG` override
//! the defaults when set while compiling.

use log::LevelFilter;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// localStorage key holding the bearer token
pub const TOKEN_STORAGE_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: LevelFilter,
    pub search_debounce_ms: u32,
    pub flash_timeout_ms: u32,
    pub max_document_bytes: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: LevelFilter::Info,
            search_debounce_ms: 300,
            flash_timeout_ms: 3000,
            max_document_bytes: 10 * 1024 * 1024,
        }
    }
}

impl AppConfig {
    /// Defaults overlaid with compile-time environment
    pub fn from_build_env() -> Self {
        Self::from_overrides(option_env!("TASKSPHERE_API_URL"), option_env!("TASKSPHERE_LOG"))
    }

    fn from_overrides(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(level) = log_level.and_then(|l| l.trim().parse().ok()) {
            config.log_level = level;
        }
        config
    }

    /// Join the base URL with an API path such as `/projects/3`
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_defaults() {
        let config = AppConfig::from_overrides(Some("https://api.example.com/api/"), Some("debug"));
        assert_eq!(config.api_base_url, "https://api.example.com/api");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_bad_overrides_keep_defaults() {
        let config = AppConfig::from_overrides(Some("  "), Some("loud"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_url_joins_single_slash() {
        let config = AppConfig::default();
        assert_eq!(config.url("/projects/3"), "http://localhost:8080/api/projects/3");
        assert_eq!(config.url("tasks"), "http://localhost:8080/api/tasks");
    }
}
