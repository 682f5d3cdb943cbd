//! Configuration loading utilities
//!
//! This module handles loading configuration from various sources with proper
//! precedence and validation.

use super::*;
use crate::core::error::{Error, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Load configuration from environment variables
pub fn load_from_env() -> Result<StatkitConfig> {
    let mut config = StatkitConfig::default();
    apply_env(&mut config)?;
    Ok(config)
}

/// Overwrite `config` with every `STATKIT_*` variable that is set
///
/// A variable set to the default value still overrides the current one.
pub fn apply_env(config: &mut StatkitConfig) -> Result<()> {
    if let Ok(alpha) = env::var("STATKIT_SIGNIFICANCE_LEVEL") {
        config.hypothesis.significance_level = alpha.parse().map_err(|e| {
            Error::ConfigurationError(format!("Invalid STATKIT_SIGNIFICANCE_LEVEL: {}", e))
        })?;
    }

    if let Ok(direction) = env::var("STATKIT_DIRECTION") {
        config.hypothesis.direction = direction;
    }

    if let Ok(report) = env::var("STATKIT_REPORT") {
        config.hypothesis.report = report
            .parse()
            .map_err(|e| Error::ConfigurationError(format!("Invalid STATKIT_REPORT: {}", e)))?;
    }

    if let Ok(step) = env::var("STATKIT_OUTLIER_STEP") {
        config.outliers.step = step.parse().map_err(|e| {
            Error::ConfigurationError(format!("Invalid STATKIT_OUTLIER_STEP: {}", e))
        })?;
    }

    if let Ok(log_level) = env::var("STATKIT_LOG_LEVEL") {
        config.logging.level = log_level;
    }

    Ok(())
}

/// Load configuration from a file (YAML or TOML based on extension)
pub fn load_from_file(path: &Path) -> Result<StatkitConfig> {
    if !path.exists() {
        return Err(Error::ConfigurationError(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        Error::ConfigurationError(format!(
            "Failed to read config file {}: {}",
            path.display(),
            e
        ))
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => load_from_yaml(&contents),
        Some("toml") => load_from_toml(&contents),
        Some(ext) => Err(Error::ConfigurationError(format!(
            "Unsupported config file format: {}",
            ext
        ))),
        None => load_from_yaml(&contents).or_else(|_| load_from_toml(&contents)),
    }
}

/// Load configuration from YAML string
pub fn load_from_yaml(yaml: &str) -> Result<StatkitConfig> {
    serde_yaml::from_str(yaml)
        .map_err(|e| Error::ConfigurationError(format!("Failed to parse YAML config: {}", e)))
}

/// Load configuration from TOML string
pub fn load_from_toml(toml: &str) -> Result<StatkitConfig> {
    toml::from_str(toml)
        .map_err(|e| Error::ConfigurationError(format!("Failed to parse TOML config: {}", e)))
}

/// Load configuration with precedence: defaults -> file -> environment
pub fn load_with_precedence<P: AsRef<Path>>(config_file: Option<P>) -> Result<StatkitConfig> {
    let mut config = StatkitConfig::default();

    if let Some(file_path) = config_file {
        let file_config = load_from_file(file_path.as_ref())?;
        config.merge(&file_config);
    }

    // Environment has the highest precedence
    apply_env(&mut config)?;

    config.validate()?;

    Ok(config)
}

/// Save configuration to a file
pub fn save_to_file(config: &StatkitConfig, path: &Path) -> Result<()> {
    let contents = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => config.to_yaml()?,
        Some("toml") => config.to_toml()?,
        Some(ext) => {
            return Err(Error::ConfigurationError(format!(
                "Unsupported config file format: {}",
                ext
            )))
        }
        None => config.to_yaml()?,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::ConfigurationError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    fs::write(path, contents).map_err(|e| {
        Error::ConfigurationError(format!(
            "Failed to write config file {}: {}",
            path.display(),
            e
        ))
    })
}

/// Get configuration file paths in order of precedence
pub fn get_config_file_paths() -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = vec![
        "statkit.yml".into(),
        "statkit.yaml".into(),
        "statkit.toml".into(),
    ];

    if let Some(config_dir) = dirs::config_dir() {
        let statkit_dir = config_dir.join("statkit");
        paths.push(statkit_dir.join("config.yml"));
        paths.push(statkit_dir.join("config.yaml"));
        paths.push(statkit_dir.join("config.toml"));
    }

    if let Ok(config_path) = env::var("STATKIT_CONFIG_FILE") {
        paths.insert(0, config_path.into());
    }

    paths
}

/// Auto-discover and load configuration file
pub fn auto_load() -> Result<StatkitConfig> {
    for path in get_config_file_paths() {
        if path.exists() {
            return load_with_precedence(Some(path));
        }
    }

    load_with_precedence::<&Path>(None)
}
