//! Keyrank configuration.
//!
//! Sources are layered with figment: built-in defaults, then a config file
//! (toml, yaml or json), then `KEYRANK_*` environment variables. Nested keys
//! in the environment are separated by `__`, as in
//! `KEYRANK_SCORING__DEFAULT_INFLECTION_POINT=60`.

mod builder;
mod loader;
mod models;
mod validation;

pub use builder::ConfigBuilder;
pub use loader::ConfigLoader;
pub use models::*;
pub use validation::validate_config;

/// Files probed, in order, when no explicit path is given
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    "keyrank.toml",
    "keyrank.yaml",
    "keyrank.yml",
    "keyrank.json",
    ".keyrank/config.toml",
    ".keyrank/config.yaml",
    ".keyrank/config.yml",
    ".keyrank/config.json",
];

pub const ENV_PREFIX: &str = "KEYRANK_";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Missing file or unsupported extension
    #[error("Failed to load configuration file: {0}")]
    FileLoadError(String),

    /// Values parsed but out of range
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// A source could not be read or did not match the config shape
    #[error("Configuration parsing error: {0}")]
    ParseError(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
