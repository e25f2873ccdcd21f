// SPDX-License-Identifier: MPL-2.0
//! Persisted user preferences, stored as a `settings.toml` file.
//!
//! The only preference this engine owns is the language selection. The file
//! lives in the platform config directory by default and can be redirected
//! with the `SITEKIT_CONFIG_DIR` environment variable or, for tests, with the
//! explicit-path variants.
//!
//! # Examples
//!
//! ```no_run
//! use sitekit::config;
//!
//! let mut config = config::load().unwrap_or_default();
//! config.language = Some("cn".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_DIR: &str = "sitekit";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "SITEKIT_CONFIG_DIR";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Persisted language code (`"en"` or `"cn"`). Unrecognized values are
    /// treated as absent by the preference store.
    pub language: Option<String>,
}

/// Resolves the settings file location.
///
/// 1. `SITEKIT_CONFIG_DIR` environment variable (if set)
/// 2. Platform config directory
fn get_default_config_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_DIR);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    // A corrupt settings file reads as defaults; the preference store then
    // falls back to the default locale.
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_language() {
        let config = Config {
            language: Some("cn".to_string()),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language, config.language);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
    }

    #[test]
    fn load_from_path_ignores_unknown_keys() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "language = \"en\"\nlegacy_theme = \"dark\"\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.language.as_deref(), Some("en"));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");
        let config = Config {
            language: Some("en".to_string()),
        };

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }
}
