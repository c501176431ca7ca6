//! Application Configuration
//!
//! Loads configuration from built-in defaults, optional files and
//! environment variables.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directives, used when `RUST_LOG` is not set
    pub filter: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from defaults, files and environment
    ///
    /// Precedence, lowest first: defaults, `config/default`,
    /// `config/{RUN_MODE}`, `APP__*` variables, then `FASTAPIPORT` (or its
    /// alias `PORT`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value has the
    /// wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            // e.g. APP__SERVER__PORT=9000
            .add_source(Environment::with_prefix("APP").separator("__"))
            .set_override_option("server.port", port_override())?
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("log.filter", "passenger_flight_api=debug,tower_http=debug")?
            .set_default("log.json", false)
    }

    /// Address the HTTP listener binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Listening port from the environment, `FASTAPIPORT` first
fn port_override() -> Option<String> {
    std::env::var("FASTAPIPORT")
        .or_else(|_| std::env::var("PORT"))
        .ok()
}
