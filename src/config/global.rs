//! # Global Configuration
//!
//! Handles the optional user configuration stored at `~/.config/quicknotes/config`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{cell::RefCell, fs, path::PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::constants::{DEFAULT_LOG_LEVEL, GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILENAME};

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect global config without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

/// Gets the current home directory override, if set.
fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Returns the home directory, honoring the test override.
pub fn home_dir() -> Option<PathBuf> {
    get_home_override().or_else(dirs::home_dir)
}

/// Global configuration stored at ~/.config/quicknotes/config
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlobalConfig {
    /// Location of the notes file (`~/` expanded, relative to the config directory)
    #[serde(default)]
    pub notes_file: Option<String>,

    /// Tracing filter directive (e.g. "warn", "quicknotes=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            notes_file: None,
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl GlobalConfig {
    /// Returns the path to the global config file (~/.config/quicknotes/config)
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|dir| dir.join(GLOBAL_CONFIG_FILENAME))
    }

    /// Returns the path to the global config directory (~/.config/quicknotes)
    pub fn dir() -> Option<PathBuf> {
        // $HOME/.config on every platform, not dirs::config_dir
        home_dir().map(|home| home.join(".config").join(GLOBAL_CONFIG_DIR))
    }

    /// Loads the global config. A missing file (or unknown home) yields defaults.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read global config: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse global config: {}", path.display()))
    }

    /// Parses config file content.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Resolves `notes_file` to an absolute-ish path.
    ///
    /// `~/` is expanded to the home directory; other relative paths are taken
    /// relative to the config directory.
    pub fn resolved_notes_file(&self) -> Option<PathBuf> {
        let raw = self.notes_file.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }

        if let Some(rest) = raw.strip_prefix("~/") {
            if let Some(home) = home_dir() {
                return Some(home.join(rest));
            }
        }

        let path = PathBuf::from(raw);
        if path.is_absolute() {
            return Some(path);
        }

        Some(Self::dir().map_or_else(|| path.clone(), |dir| dir.join(&path)))
    }
}
