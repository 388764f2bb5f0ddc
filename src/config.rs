//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines the built-in
//! defaults. The server is intentionally zero-config: when no file exists at
//! the default path, the built-in defaults apply and the process runs on the
//! standard port. `AppConfig` is the root configuration struct.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

/// Default bind host (all interfaces).
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default listen address (compile-time string concatenation).
pub const DEFAULT_LISTEN_ADDR: &str = formatcp!("{}:{}", DEFAULT_HOST, DEFAULT_PORT);

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Environment variable that overrides the listen address.
///
/// Accepts `host:port` or the `:port` shorthand for all interfaces.
pub const ADDR_ENV_VAR: &str = "PULSED_ADDR";

/// Default log filter when RUST_LOG is not set.
pub const DEFAULT_LOG_FILTER: &str = "pulsed=debug,tower_http=debug";

/// Default log format (text or json).
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }

    /// The `host:port` string this configuration binds.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    /// Load configuration from `path`, tolerating a missing file at the
    /// default path.
    ///
    /// An explicitly configured path that does not exist is an error; the
    /// default path is allowed to be absent so the server runs with no
    /// config file at all.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() && path == Path::new(DEFAULT_CONFIG_PATH) {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self.logging.format.as_str() {
            "text" | "json" => Ok(()),
            other => Err(ConfigError::Validation(format!(
                "Unknown logging.format '{}'. Expected \"text\" or \"json\"",
                other
            ))),
        }
    }
}

/// Normalize a listen address, expanding the `:port` shorthand to bind
/// all interfaces.
pub fn normalize_listen_addr(addr: &str) -> String {
    match addr.strip_prefix(':') {
        Some(port) => format!("{}:{}", DEFAULT_HOST, port),
        None => addr.to_string(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp config");
        file.write_all(contents.as_bytes()).expect("write temp config");
        file
    }

    #[test]
    fn defaults_listen_on_standard_port() {
        let config = AppConfig::default();
        assert_eq!(config.http.listen_addr(), DEFAULT_LISTEN_ADDR);
        assert_eq!(config.http.listen_addr(), "0.0.0.0:8080");
        assert_eq!(config.logging.format, "text");
    }

    #[test]
    fn loads_full_config() {
        let file = write_config(
            r#"
            [http]
            host = "127.0.0.1"
            port = 9090

            [logging]
            format = "json"
            "#,
        );

        let config = AppConfig::load(file.path()).expect("load config");
        assert_eq!(config.http.listen_addr(), "127.0.0.1:9090");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let file = write_config("[http]\nport = 3000\n");

        let config = AppConfig::load(file.path()).expect("load config");
        assert_eq!(config.http.host, DEFAULT_HOST);
        assert_eq!(config.http.port, 3000);
        assert_eq!(config.logging.format, DEFAULT_LOG_FORMAT);
    }

    #[test]
    fn empty_config_file_is_all_defaults() {
        let file = write_config("");

        let config = AppConfig::load(file.path()).expect("load config");
        assert_eq!(config.http.listen_addr(), DEFAULT_LISTEN_ADDR);
    }

    #[test]
    fn rejects_invalid_toml() {
        let file = write_config("[http\nport = oops");

        assert!(matches!(
            AppConfig::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let file = write_config("[logging]\nformat = \"yaml\"\n");

        assert!(matches!(
            AppConfig::load(file.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        assert!(matches!(
            AppConfig::load_or_default("config/does-not-exist.toml"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn shipped_default_config_matches_builtin_defaults() {
        // Tests run from the package root, so this loads config/default.toml.
        let config = AppConfig::load_or_default(DEFAULT_CONFIG_PATH).expect("load default config");
        assert_eq!(config.http.listen_addr(), DEFAULT_LISTEN_ADDR);
        assert_eq!(config.logging.format, DEFAULT_LOG_FORMAT);
    }

    #[test]
    fn normalizes_port_only_addresses() {
        assert_eq!(normalize_listen_addr(":8080"), "0.0.0.0:8080");
        assert_eq!(normalize_listen_addr(":3000"), "0.0.0.0:3000");
        assert_eq!(normalize_listen_addr("127.0.0.1:8080"), "127.0.0.1:8080");
    }
}
