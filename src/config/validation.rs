//! Configuration validation utilities
//!
//! Ensures that every setting is usable before it reaches the statistics code.

use super::*;
use crate::core::error::{Error, Result};

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Validate the entire configuration
pub fn validate_config(config: &StatkitConfig) -> Result<()> {
    validate_hypothesis_config(&config.hypothesis)?;
    validate_outlier_config(&config.outliers)?;
    validate_logging_config(&config.logging)?;

    Ok(())
}

/// Validate hypothesis test defaults
pub fn validate_hypothesis_config(config: &HypothesisConfig) -> Result<()> {
    let alpha = config.significance_level;
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(Error::ConfigurationError(format!(
            "significance_level must be between 0 and 1, got {}",
            alpha
        )));
    }

    config
        .direction()
        .map_err(|e| Error::ConfigurationError(e.to_string()))?;

    Ok(())
}

/// Validate outlier removal settings
pub fn validate_outlier_config(config: &OutlierConfig) -> Result<()> {
    if !config.step.is_finite() || config.step < 0.0 {
        return Err(Error::ConfigurationError(format!(
            "outlier step must be a finite, non-negative number, got {}",
            config.step
        )));
    }

    Ok(())
}

/// Validate logging configuration
pub fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    let level = config.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(Error::ConfigurationError(format!(
            "Invalid log level '{}'. Must be one of: {}",
            config.level,
            LOG_LEVELS.join(", ")
        )));
    }

    Ok(())
}
