//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `z407d.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use z407_adapter_ble::BleConfig;

/// Default config file, relative to the working directory.
const CONFIG_FILE: &str = "z407d.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Speaker discovery and connection.
    pub ble: BleConfig,
    /// Browser panel assets.
    pub panel: PanelConfig,
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

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Browser panel configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Directory holding `index.html` and the built panel. Nothing is served
    /// besides the API when unset.
    pub static_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from `z407d.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(CONFIG_FILE)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("Z407_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("Z407_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("Z407_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("Z407_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("Z407_STATIC_DIR") {
            self.panel.static_dir = Some(PathBuf::from(val));
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.ble.scan_duration_secs == 0 {
            return Err(ConfigError::Validation(
                "ble.scan_duration_secs must be non-zero".to_string(),
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

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "z407=info,tower_http=debug".to_string(),
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn overridden(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).cloned());
        config
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.filter, "z407=info,tower_http=debug");
        assert_eq!(config.ble.scan_duration_secs, 10);
        assert!(config.panel.static_dir.is_none());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [logging]
            filter = 'debug'

            [ble]
            scan_duration_secs = 5
            connect_timeout_secs = 20
            device_address = 'C4:7C:8D:6A:12:34'

            [panel]
            static_dir = 'crates/adapters/panel_web/static'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.ble.scan_duration_secs, 5);
        assert_eq!(config.ble.connect_timeout_secs, 20);
        assert_eq!(
            config.ble.device_address.as_deref(),
            Some("C4:7C:8D:6A:12:34")
        );
        assert_eq!(
            config.panel.static_dir.as_deref(),
            Some(Path::new("crates/adapters/panel_web/static"))
        );
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [server]
            port = 8080
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.ble.connect_timeout_secs, 10);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_read_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("z407d.toml");
        std::fs::write(&path, "[server]\nport = 4000\n").unwrap();

        let config = Config::from_file(&path).unwrap();

        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("z407d.toml");
        std::fs::write(&path, "invalid {{{").unwrap();

        let result = Config::from_file(&path);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn should_override_host_and_port_from_env() {
        let config = overridden(&[("Z407_HOST", "127.0.0.1"), ("Z407_PORT", "8081")]);
        assert_eq!(config.bind_addr(), "127.0.0.1:8081");
    }

    #[test]
    fn should_ignore_unparsable_port_override() {
        let config = overridden(&[("Z407_PORT", "http")]);
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_prefer_bind_over_host_and_port() {
        let config = overridden(&[
            ("Z407_HOST", "10.0.0.1"),
            ("Z407_PORT", "8081"),
            ("Z407_BIND", "127.0.0.1:9000"),
        ]);
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn should_prefer_rust_log_over_z407_log() {
        let config = overridden(&[("Z407_LOG", "debug"), ("RUST_LOG", "trace")]);
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_override_static_dir_from_env() {
        let config = overridden(&[("Z407_STATIC_DIR", "/srv/z407")]);
        assert_eq!(
            config.panel.static_dir.as_deref(),
            Some(Path::new("/srv/z407"))
        );
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_zero_scan_duration() {
        let mut config = Config::default();
        config.ble.scan_duration_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_valid_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_format_bind_addr() {
        assert_eq!(Config::default().bind_addr(), "0.0.0.0:3000");
    }
}
