//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Report rendering configuration.
    #[serde(default)]
    pub render: RenderConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Report rendering configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Time budget for a single report render, in seconds.
    ///
    /// A render that exceeds this budget is cancelled and surfaced as a
    /// timeout to the caller, never retried silently.
    #[serde(default = "default_render_timeout")]
    pub timeout_secs: u64,
}

fn default_render_timeout() -> u64 {
    10
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_render_timeout(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("WORTHWELL").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
