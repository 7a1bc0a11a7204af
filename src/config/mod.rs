//! Configuration loading and management for the Receipt Processor.
//!
//! This module loads the HTTP server settings from an optional YAML file,
//! with `HOST` and `PORT` environment overrides.
//!
//! # Example
//!
//! ```no_run
//! use receipt_processor::config::ConfigLoader;
//!
//! let config = ConfigLoader::from_env().unwrap();
//! println!("Binding to {}", config.server().bind_address());
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_PATH_ENV, ConfigLoader, HOST_ENV, PORT_ENV};
pub use types::{DEFAULT_HOST, DEFAULT_LOG_FILTER, DEFAULT_PORT, ServerConfig};
