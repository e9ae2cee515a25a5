//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `advertd.toml` in the working directory. Connection-level
//! fields have sensible defaults so the file is optional, but the notifier
//! topic must be supplied (file or `ADVERTD_TOPIC`) — it is never
//! hardcoded. Environment variables take precedence over file values.

use advert_adapter_mqtt::MqttConfig;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Notifier (MQTT) settings, including the confirmation topic.
    pub notifier: MqttConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL or file path.
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `advertd.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// validation fails (zero port, missing notifier topic).
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("advertd.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("ADVERTD_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("ADVERTD_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("ADVERTD_BIND") {
            let (host, port) = split_host_port(&val);
            self.server.host = host;
            if let Some(port) = port {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("ADVERTD_DATABASE_URL") {
            self.database.url = val;
        }
        if let Ok(val) = std::env::var("ADVERTD_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("ADVERTD_BROKER") {
            let (host, port) = split_host_port(&val);
            self.notifier.broker_host = host;
            if let Some(port) = port {
                self.notifier.broker_port = port;
            }
        }
        if let Ok(val) = std::env::var("ADVERTD_TOPIC") {
            self.notifier.topic = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.notifier.topic.is_empty() {
            return Err(ConfigError::Validation(
                "notifier topic must be configured".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:adverts.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "advertd=info,advert_app=info,advert_adapter_mqtt=info,tower_http=debug"
                .to_string(),
        }
    }
}

/// Split a `host:port` value into its parts.
///
/// IPv6 literals must be bracketed (`[::1]:3000`); an unbracketed value
/// containing more than one colon is treated as a bare host, never split at
/// its last colon. The port is `None` when absent or unparsable.
fn split_host_port(value: &str) -> (String, Option<u16>) {
    if let Some(rest) = value.strip_prefix('[') {
        if let Some((host, port)) = rest.split_once(']') {
            let port = port.strip_prefix(':').and_then(|p| p.parse().ok());
            return (host.to_string(), port);
        }
    }
    match value.rsplit_once(':') {
        Some((host, port)) if !host.contains(':') => (host.to_string(), port.parse().ok()),
        _ => (value.to_string(), None),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
