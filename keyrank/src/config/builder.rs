//! Configuration builder.
//!
//! This module provides a builder pattern API for creating configurations.

use super::{Result, models::*, validation};
use std::path::Path;

/// Builder for creating KeyrankConfig instances.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: KeyrankConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: KeyrankConfig::default(),
        }
    }

    /// Set the inflection point used when callers do not pass one.
    pub fn with_default_inflection_point(mut self, minutes: u32) -> Self {
        self.config.scoring.default_inflection_point = minutes;
        self
    }

    /// Set how observed ranks are scored.
    pub fn with_rank_scoring(mut self, rank_scoring: RankScoring) -> Self {
        self.config.scoring.rank_scoring = rank_scoring;
        self
    }

    /// Set the time and rank weights of the composite score.
    pub fn with_weights(mut self, time_weight: f64, rank_weight: f64) -> Self {
        self.config.scoring.time_weight = time_weight;
        self.config.scoring.rank_weight = rank_weight;
        self
    }

    /// Replace the whole scoring configuration.
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.config.scoring = scoring;
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    /// Log to a file instead of stdout.
    pub fn with_log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.logging.file = Some(path.as_ref().to_path_buf());
        self.config.logging.stdout = false;
        self
    }

    /// Enable or disable logging to stdout.
    pub fn with_stdout_logging(mut self, enabled: bool) -> Self {
        self.config.logging.stdout = enabled;
        self
    }

    /// Use default logging configuration
    pub fn with_default_logging(mut self) -> Self {
        self.config.logging = LoggingConfig::default();
        self
    }

    /// Build the configuration, validating it first.
    pub fn build(self) -> Result<KeyrankConfig> {
        validation::validate_config(&self.config)?;
        Ok(self.config)
    }

    /// Create a configuration with all defaults.
    pub fn defaults() -> Self {
        Self::new().with_default_logging()
    }

    /// Create a configuration suited to local development.
    pub fn development() -> Self {
        Self::new()
            .with_log_level(LogLevel::Debug)
            .with_log_format(LogFormat::Pretty)
    }

    /// Create a configuration suited to tests: quiet logging.
    pub fn testing() -> Self {
        Self::new()
            .with_log_level(LogLevel::Warn)
            .with_log_format(LogFormat::Compact)
    }

    /// Create a configuration suited to production: structured logs.
    pub fn production() -> Self {
        Self::new()
            .with_log_level(LogLevel::Info)
            .with_log_format(LogFormat::Json)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
