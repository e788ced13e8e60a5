//! Configuration management for the contacts service
//!
//! Settings are layered from:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables (highest priority)
//!
//! With no file and no environment the service behaves exactly like the
//! historical build: it listens on `0.0.0.0:8081` with a 30 second read timeout.
//!
//! # Environment Variables
//!
//! Pattern: `CONTACTBOOK__<section>__<key>`
//!
//! Examples:
//! - `CONTACTBOOK__SERVER__BIND_ADDR=127.0.0.1:9000`
//! - `CONTACTBOOK__API__STATUS_POLICY=strict`
//!
//! # Configuration File
//!
//! By default the file is `config/contactbook.toml`. Override it with the
//! `CONTACTBOOK_CONFIG` environment variable or the `--config` flag.

mod models;
mod sources;
mod validation;

pub use models::{ApiConfig, Config, ServerConfig, StatusPolicy};
pub use validation::ValidationError;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// `path` takes precedence over `CONTACTBOOK_CONFIG`.
    pub fn load(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let config = sources::load(path)?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific path, skipping `.env`
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}
