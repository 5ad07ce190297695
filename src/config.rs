//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// Every field has a default, so an empty environment is always valid. The
/// configuration is read once at startup and treated as immutable for the
/// process lifetime.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Version string surfaced by `/` and `/health` (APP_VERSION).
    #[serde(default = "default_app_version")]
    pub app_version: String,

    /// Deployment environment name surfaced by `/` (ENVIRONMENT).
    #[serde(default = "default_environment")]
    pub environment: String,

    /// HTTP server port (PORT).
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_app_version() -> String {
    "1.0.0".to_string()
}

fn default_environment() -> String {
    "production".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_version: default_app_version(),
            environment: default_environment(),
            port: default_port(),
            rust_log: default_log_level(),
        }
    }
}
