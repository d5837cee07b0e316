//! Configuration validation utilities.

use super::ConfigError;
use super::models::*;

/// Validate the entire configuration.
pub fn validate_config(config: &KeyrankConfig) -> Result<(), ConfigError> {
    validate_scoring_config(&config.scoring)?;
    validate_logging_config(&config.logging)?;

    Ok(())
}

/// Validate scoring configuration.
fn validate_scoring_config(config: &ScoringConfig) -> Result<(), ConfigError> {
    config.validate().map_err(ConfigError::ValidationError)
}

/// Validate logging configuration.
fn validate_logging_config(config: &LoggingConfig) -> Result<(), ConfigError> {
    if let Some(file) = &config.file
        && file.as_os_str().is_empty()
    {
        return Err(ConfigError::ValidationError(
            "Log file path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
