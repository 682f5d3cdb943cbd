//! Configuration management for statkit
//!
//! This module provides centralized configuration management with support for:
//! - Environment variables
//! - YAML/TOML configuration files
//! - Configuration validation

use crate::core::error::{Error, Result};
use crate::stats::descriptive::DEFAULT_OUTLIER_STEP;
use crate::stats::hypothesis::{TailDirection, ZTestConfig, DEFAULT_SIGNIFICANCE_LEVEL};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod loader;
pub mod validation;

/// Main configuration structure for statkit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StatkitConfig {
    /// Hypothesis test defaults
    pub hypothesis: HypothesisConfig,
    /// Outlier removal settings
    pub outliers: OutlierConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Hypothesis test defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HypothesisConfig {
    /// Significance level α
    pub significance_level: f64,
    /// Alternative hypothesis direction ("two-tailed", "left-tailed", "right-tailed")
    pub direction: String,
    /// Log the narrative report after each test
    pub report: bool,
}

/// Outlier removal settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlierConfig {
    /// IQR multiplier for the outlier fences
    pub step: f64,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error, off)
    pub level: String,
    /// Enable console logging
    pub console: bool,
}

impl Default for HypothesisConfig {
    fn default() -> Self {
        Self {
            significance_level: DEFAULT_SIGNIFICANCE_LEVEL,
            direction: TailDirection::TwoTailed.to_string(),
            report: false,
        }
    }
}

impl Default for OutlierConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_OUTLIER_STEP,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            console: true,
        }
    }
}

impl HypothesisConfig {
    /// Parsed alternative hypothesis direction
    pub fn direction(&self) -> Result<TailDirection> {
        self.direction.parse()
    }

    /// Build test parameters from these defaults
    pub fn to_z_test_config(&self) -> Result<ZTestConfig> {
        Ok(ZTestConfig {
            population_std_dev: None,
            significance_level: self.significance_level,
            direction: self.direction()?,
            report: self.report,
        })
    }
}

impl TryFrom<&HypothesisConfig> for ZTestConfig {
    type Error = Error;

    fn try_from(config: &HypothesisConfig) -> Result<Self> {
        config.to_z_test_config()
    }
}

impl StatkitConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        loader::load_from_env()
    }

    /// Load configuration from a file (YAML or TOML)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        loader::load_from_file(path.as_ref())
    }

    /// Load configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        loader::load_from_yaml(yaml)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml: &str) -> Result<Self> {
        loader::load_from_toml(toml)
    }

    /// Load configuration with precedence: defaults -> file -> env
    pub fn load_with_precedence<P: AsRef<Path>>(config_file: Option<P>) -> Result<Self> {
        loader::load_with_precedence(config_file)
    }

    /// Validate configuration and return errors if invalid
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        loader::save_to_file(self, path.as_ref())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            Error::ConfigurationError(format!("Failed to serialize config to YAML: {}", e))
        })
    }

    /// Convert to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| {
            Error::ConfigurationError(format!("Failed to serialize config to TOML: {}", e))
        })
    }

    /// Merge another configuration into this one
    ///
    /// Values in `other` that differ from the defaults win.
    pub fn merge(&mut self, other: &Self) {
        let defaults = StatkitConfig::default();

        if other.hypothesis.significance_level != defaults.hypothesis.significance_level {
            self.hypothesis.significance_level = other.hypothesis.significance_level;
        }
        if other.hypothesis.direction != defaults.hypothesis.direction {
            self.hypothesis.direction = other.hypothesis.direction.clone();
        }
        if other.hypothesis.report != defaults.hypothesis.report {
            self.hypothesis.report = other.hypothesis.report;
        }

        if other.outliers.step != defaults.outliers.step {
            self.outliers.step = other.outliers.step;
        }

        if other.logging.level != defaults.logging.level {
            self.logging.level = other.logging.level.clone();
        }
        if other.logging.console != defaults.logging.console {
            self.logging.console = other.logging.console;
        }
    }
}
