//! Configuration loading and constants.
//!
//! Loads server configuration from TOML files and defines the fixed header
//! values, default ports, and default paths. `AppConfig` is the root
//! configuration struct; every section has full serde defaults so a partial
//! (or absent) config file yields a working plain-HTTP server.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Response Headers
// =============================================================================
// Header values injected on every response when `serve.cors` is enabled.
// The combination relaxes cross-origin restrictions for local testing and
// disables client-side caching so edits to served files show up on reload.

/// Allow any origin to read responses.
pub const CORS_ALLOW_ORIGIN: &str = "*";

/// Only GET is ever served; advertise exactly that.
pub const CORS_ALLOW_METHODS: &str = "GET";

/// Disable caching entirely for served files.
pub const CACHE_CONTROL_DISABLED: &str = "no-store, no-cache, must-revalidate";

// =============================================================================
// Default Ports and Paths
// =============================================================================

/// Default listen port for plain HTTP serving.
pub const DEFAULT_HTTP_PORT: u16 = 8000;

/// Default page the browser is pointed at after startup.
pub const DEFAULT_OPEN_PATH: &str = "/test-blockchain.html";

/// Default delay before the one-shot browser launch, in seconds.
pub const DEFAULT_OPEN_DELAY_SECS: u64 = 1;

const CRATE_NAME: &str = env!("CARGO_PKG_NAME");

/// Default log filter when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = formatcp!("{}=info,tower_http=debug", CRATE_NAME);

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Listener and TLS configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// What to serve and which headers to inject
    #[serde(default)]
    pub serve: ServeConfig,
    /// One-shot browser launch after startup
    #[serde(default)]
    pub browser: BrowserConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    #[serde(default)]
    pub tls: TlsConfig,
}

impl HttpServerConfig {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            tls: TlsConfig::default(),
        }
    }
}

/// TLS mode for the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TlsMode {
    /// Plain HTTP, no TLS.
    #[default]
    None,
    /// HTTPS with user-provided certificate and key files.
    Manual,
}

/// TLS configuration. The certificate and key are loaded once at startup
/// and never reloaded.
#[derive(Debug, Clone, Deserialize)]
pub struct TlsConfig {
    #[serde(default)]
    pub mode: TlsMode,
    /// PEM certificate chain, resolved against the working directory.
    #[serde(default = "TlsConfig::default_cert_path")]
    pub cert_path: String,
    /// PEM private key matching the certificate.
    #[serde(default = "TlsConfig::default_key_path")]
    pub key_path: String,
}

impl TlsConfig {
    fn default_cert_path() -> String {
        "cert.pem".to_string()
    }

    fn default_key_path() -> String {
        "key.pem".to_string()
    }
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            mode: TlsMode::default(),
            cert_path: Self::default_cert_path(),
            key_path: Self::default_key_path(),
        }
    }
}

/// What to serve and how responses are decorated.
#[derive(Debug, Clone, Deserialize)]
pub struct ServeConfig {
    /// Directory whose files are served, resolved against the working directory.
    #[serde(default = "ServeConfig::default_root")]
    pub root: String,
    /// Inject the CORS and cache-disabling headers on every response.
    #[serde(default = "ServeConfig::default_cors")]
    pub cors: bool,
}

impl ServeConfig {
    fn default_root() -> String {
        ".".to_string()
    }

    fn default_cors() -> bool {
        true
    }
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            root: Self::default_root(),
            cors: Self::default_cors(),
        }
    }
}

/// One-shot browser launch configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BrowserConfig {
    /// Open the default browser once after startup.
    #[serde(default = "BrowserConfig::default_open")]
    pub open: bool,
    /// Request path the browser is pointed at.
    #[serde(default = "BrowserConfig::default_path")]
    pub path: String,
    /// Delay before launching, in seconds.
    #[serde(default = "BrowserConfig::default_delay_seconds")]
    pub delay_seconds: u64,
}

impl BrowserConfig {
    fn default_open() -> bool {
        true
    }

    fn default_path() -> String {
        DEFAULT_OPEN_PATH.to_string()
    }

    fn default_delay_seconds() -> u64 {
        DEFAULT_OPEN_DELAY_SECS
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            open: Self::default_open(),
            path: Self::default_path(),
            delay_seconds: Self::default_delay_seconds(),
        }
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
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.http.tls.mode == TlsMode::Manual {
            if self.http.tls.cert_path.is_empty() {
                return Err(ConfigError::Validation(
                    "tls.mode = \"manual\" requires a non-empty cert_path".to_string(),
                ));
            }
            if self.http.tls.key_path.is_empty() {
                return Err(ConfigError::Validation(
                    "tls.mode = \"manual\" requires a non-empty key_path".to_string(),
                ));
            }
        }
        if self.serve.root.is_empty() {
            return Err(ConfigError::Validation(
                "serve.root must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// URL scheme the server will answer on.
    pub fn scheme(&self) -> &'static str {
        match self.http.tls.mode {
            TlsMode::None => "http",
            TlsMode::Manual => "https",
        }
    }

    /// Localhost URL the browser is pointed at after startup.
    pub fn open_url(&self) -> String {
        format!(
            "{}://localhost:{}{}",
            self.scheme(),
            self.http.port,
            self.browser.path
        )
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
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp config");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn defaults_give_plain_server_on_8000() {
        let config = AppConfig::default();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, DEFAULT_HTTP_PORT);
        assert_eq!(config.http.tls.mode, TlsMode::None);
        assert_eq!(config.serve.root, ".");
        assert!(config.serve.cors);
        assert!(config.browser.open);
        assert_eq!(config.browser.path, DEFAULT_OPEN_PATH);
        assert_eq!(config.browser.delay_seconds, 1);
    }

    #[test]
    fn empty_file_equals_defaults() {
        let file = write_config("");
        let config = AppConfig::load(file.path()).expect("load empty config");
        assert_eq!(config.http.port, DEFAULT_HTTP_PORT);
        assert_eq!(config.http.tls.mode, TlsMode::None);
        assert!(config.serve.cors);
    }

    #[test]
    fn loads_secure_profile() {
        let file = write_config(
            r#"
            [http]
            port = 8443

            [http.tls]
            mode = "manual"
            cert_path = "cert.pem"
            key_path = "key.pem"

            [serve]
            cors = false

            [browser]
            open = false
            "#,
        );
        let config = AppConfig::load(file.path()).expect("load secure config");
        assert_eq!(config.http.port, 8443);
        assert_eq!(config.http.tls.mode, TlsMode::Manual);
        assert_eq!(config.http.tls.cert_path, "cert.pem");
        assert_eq!(config.http.tls.key_path, "key.pem");
        assert!(!config.serve.cors);
        assert!(!config.browser.open);
        assert_eq!(config.scheme(), "https");
    }

    #[test]
    fn manual_tls_requires_cert_and_key_paths() {
        let file = write_config(
            r#"
            [http.tls]
            mode = "manual"
            cert_path = ""
            "#,
        );
        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = AppConfig::load("/nonexistent/devserve.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let file = write_config("[http\nport = what");
        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn open_url_tracks_port_and_path() {
        let mut config = AppConfig::default();
        config.http.port = 9090;
        config.browser.path = "/index.html".to_string();
        assert_eq!(config.open_url(), "http://localhost:9090/index.html");
    }
}
