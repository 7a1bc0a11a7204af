//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the server
//! configuration from a YAML file and the process environment.

use std::env;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::ServerConfig;

/// Environment variable naming the YAML configuration file.
pub const CONFIG_PATH_ENV: &str = "RECEIPT_PROCESSOR_CONFIG";

/// Environment variable overriding the listening port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable overriding the bind host.
pub const HOST_ENV: &str = "HOST";

/// Loads and provides access to the server configuration.
///
/// Settings are resolved in order: built-in defaults, then the YAML file
/// (if any), then the `HOST` and `PORT` environment variables.
///
/// # Example
///
/// ```no_run
/// use receipt_processor::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/server.yaml")?;
/// println!("Listening on {}", loader.server().bind_address());
/// # Ok::<(), receipt_processor::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    server: ServerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the file cannot be read, or
    /// `ConfigParseError` if it is not valid YAML for [`ServerConfig`].
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let server = Self::load_yaml::<ServerConfig>(path.as_ref())?;
        Ok(Self { server })
    }

    /// Loads configuration the way the server binary does.
    ///
    /// Reads the file named by `RECEIPT_PROCESSOR_CONFIG` when it is set,
    /// otherwise starts from defaults, then applies environment overrides.
    pub fn from_env() -> EngineResult<Self> {
        let loader = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::load(path)?,
            Err(_) => Self::default(),
        };
        loader.with_overrides(|key| env::var(key).ok())
    }

    /// Applies `HOST` and `PORT` overrides using the given lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParseError` if `PORT` is not a valid port number.
    ///
    /// # Example
    ///
    /// ```
    /// use receipt_processor::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::default()
    ///     .with_overrides(|key| (key == "PORT").then(|| "8080".to_string()))
    ///     .unwrap();
    /// assert_eq!(loader.server().port, 8080);
    /// ```
    pub fn with_overrides<F>(mut self, lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(HOST_ENV) {
            self.server.host = host;
        }

        if let Some(port) = lookup(PORT_ENV) {
            self.server.port = port.trim().parse().map_err(|e| EngineError::ConfigParseError {
                path: PORT_ENV.to_string(),
                message: format!("'{}' is not a valid port: {}", port, e),
            })?;
        }

        Ok(self)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the server configuration.
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }
}
