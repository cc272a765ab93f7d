//! # Configuration
//!
//! Resolves where the notes file lives: `--file` flag, then the global config,
//! then `notes.md` next to the executable.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod global;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

pub use self::global::{set_home_override, GlobalConfig};
use crate::{constants::DEFAULT_NOTES_FILENAME, storage::NoteStore};

/// Effective configuration for one invocation
#[derive(Debug, Clone)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,

    /// Resolved notes file path
    pub notes_path: PathBuf,
}

impl Config {
    /// Resolves the notes path for a loaded global config.
    ///
    /// `file_override` (the `--file` flag) wins over everything else. Call this
    /// after logging is set up from `global.log_level` so the resolution shows up.
    pub fn resolve(global: GlobalConfig, file_override: Option<&Path>) -> Result<Self> {
        let (notes_path, source) = match file_override {
            Some(path) => (path.to_path_buf(), "flag"),
            None => match global.resolved_notes_file() {
                Some(path) => (path, "config"),
                None => (default_notes_path()?, "default"),
            },
        };

        debug!(path = %notes_path.display(), source, "resolved notes file");

        Ok(Self { global, notes_path })
    }

    /// Opens a store on the resolved notes file
    pub fn store(&self) -> NoteStore {
        NoteStore::new(&self.notes_path)
    }
}

/// Returns `notes.md` in the directory of the running executable.
pub fn default_notes_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Cannot determine executable location")?;
    let dir = exe
        .parent()
        .ok_or_else(|| anyhow::anyhow!("Executable has no parent directory"))?;
    Ok(dir.join(DEFAULT_NOTES_FILENAME))
}
