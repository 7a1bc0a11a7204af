//! Configuration types for the Receipt Processor server.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML server configuration file.

use serde::Deserialize;

/// Default address the server binds to.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default port the server listens on.
pub const DEFAULT_PORT: u16 = 3000;

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

/// HTTP server settings.
///
/// Every field is optional in the YAML file; missing fields take their
/// defaults.
///
/// # Example
///
/// ```
/// use receipt_processor::config::ServerConfig;
///
/// let config: ServerConfig = serde_yaml::from_str("port: 8080").unwrap();
/// assert_eq!(config.port, 8080);
/// assert_eq!(config.host, "0.0.0.0");
/// assert_eq!(config.bind_address(), "0.0.0.0:8080");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// The interface to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Filter directive used when `RUST_LOG` is not set (e.g. "info").
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_filter: default_log_filter(),
        }
    }
}

impl ServerConfig {
    /// Returns the `host:port` address to bind to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
