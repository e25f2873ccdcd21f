// SPDX-License-Identifier: MPL-2.0
//! The preference store: the single persisted key of this engine.
//!
//! The language preference is read once at initialization and mutated only
//! by the user's toggle. Persistence is best-effort: a failed write keeps
//! the in-memory locale authoritative for the session and logs a warning,
//! so toggling still alternates correctly on hosts without writable config
//! storage.

use crate::config::{self, Config};
use crate::i18n::Locale;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Read/write wrapper around the persisted `language` key.
#[derive(Debug)]
pub struct PreferenceStore {
    config_path: Option<PathBuf>,
    current: Locale,
}

impl PreferenceStore {
    /// Reads the persisted preference, falling back to the default locale
    /// on missing or unrecognized data.
    pub fn load(config_path: Option<PathBuf>) -> Self {
        let stored = Self::read_config(&config_path)
            .language
            .as_deref()
            .and_then(Locale::parse);
        let current = stored.unwrap_or(Locale::DEFAULT);
        debug!(%current, persisted = stored.is_some(), "loaded language preference");
        Self {
            config_path,
            current,
        }
    }

    pub fn get(&self) -> Locale {
        self.current
    }

    /// Session-only override (CLI flag); deliberately not persisted.
    pub fn override_locale(&mut self, locale: Locale) {
        self.current = locale;
    }

    /// Flips the locale, persists the new value, and returns it.
    pub fn toggle(&mut self) -> Locale {
        self.current = self.current.toggled();
        self.persist();
        self.current
    }

    fn persist(&self) {
        let mut cfg = Self::read_config(&self.config_path);
        cfg.language = Some(self.current.as_str().to_string());
        let result = match &self.config_path {
            Some(path) => config::save_to_path(&cfg, path),
            None => config::save(&cfg),
        };
        if let Err(error) = result {
            warn!(%error, "failed to persist language preference");
        }
    }

    fn read_config(config_path: &Option<PathBuf>) -> Config {
        match config_path {
            Some(path) if path.exists() => config::load_from_path(path).unwrap_or_default(),
            Some(_) => Config::default(),
            None => config::load().unwrap_or_default(),
        }
    }
}
