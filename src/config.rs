//! Configuration module
//!
//! Reads configuration from a TOML file (~/.config/lendhub/config.toml by
//! default, overridable via the `LENDHUB_CONFIG` environment variable).
//! Missing sections fall back to defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::PastBoundary;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSection,
    pub logging: LoggingConfig,
    pub booking: BookingConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Database settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    /// SQLite database file path
    pub path: String,
}

impl DatabaseSection {
    /// Full SeaORM connection URL for the configured SQLite file.
    pub fn connection_url(&self) -> String {
        format!("sqlite://{}?mode=rwc", self.path)
    }
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            path: "./lendhub.db".to_string(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter (overridden by RUST_LOG)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Booking domain settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    /// Which window endpoint marks a booking as elapsed for comment
    /// eligibility: "end" (default) or "start"
    pub past_boundary: PastBoundary,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

/// Default config file location: `~/.config/lendhub/config.toml`.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lendhub")
        .join("config.toml")
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.address(), "0.0.0.0:8080");
        assert_eq!(cfg.database.connection_url(), "sqlite://./lendhub.db?mode=rwc");
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.booking.past_boundary, PastBoundary::End);
    }

    #[test]
    fn partial_toml_fills_missing_sections() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            port = 3000

            [booking]
            past_boundary = "start"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.booking.past_boundary, PastBoundary::Start);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn unknown_boundary_is_rejected() {
        let parsed: Result<AppConfig, _> = toml::from_str(
            r#"
            [booking]
            past_boundary = "middle"
            "#,
        );
        assert!(parsed.is_err());
    }
}
