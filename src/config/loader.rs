// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{ConfigError, PrbError, Result};
use std::path::{Path, PathBuf};

use super::schema::PrbConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["prb.toml", ".prb.toml", ".config/prb.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // Try parent directory
        if !current.pop() {
            break;
        }
    }

    // Also check user's home directory
    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }
    }

    // Check XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        let prb_config = config_dir.join("prb").join("config.toml");
        if prb_config.exists() {
            return Some(prb_config);
        }
    }

    None
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<PrbConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(PrbConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<PrbConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(PrbError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        PrbError::Config(ConfigError::ParseError {
            message: format!("Failed to read {}: {}", path.display(), e),
        })
    })?;

    let config: PrbConfig = toml::from_str(&content).map_err(|e| {
        PrbError::Config(ConfigError::ParseError {
            message: e.to_string(),
        })
    })?;

    validate_config(&config)?;

    Ok(config)
}

/// Reject values the pipeline cannot work with.
fn validate_config(config: &PrbConfig) -> Result<()> {
    if config.review.provider.trim().is_empty() {
        return Err(PrbError::Config(ConfigError::InvalidValue {
            key: "review.provider".to_string(),
            message: "provider must not be empty".to_string(),
        }));
    }

    if let Some(policy) = &config.policy {
        if policy.id.trim().is_empty() {
            return Err(PrbError::Config(ConfigError::InvalidValue {
                key: "policy.id".to_string(),
                message: "policy id must not be empty".to_string(),
            }));
        }
    }

    Ok(())
}
