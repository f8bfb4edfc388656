use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote category service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme and host of the trivia service (e.g., "https://opentdb.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the category list endpoint, starting with '/'.
    #[serde(default = "default_categories_path")]
    pub categories_path: String,
    /// Connection timeout in seconds. Unset keeps the HTTP client default.
    #[serde(default)]
    pub connect_timeout_seconds: Option<u64>,
    /// Total request timeout in seconds. Unset keeps the HTTP client default.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

/// Logging settings. `RUST_LOG` takes precedence over `level`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_base_url() -> String {
    "https://opentdb.com".to_string()
}

fn default_categories_path() -> String {
    "/api_category.php".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ApiConfig {
    /// Full URL of the category list endpoint.
    pub fn categories_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.categories_path
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            categories_path: default_categories_path(),
            connect_timeout_seconds: None,
            timeout_seconds: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
