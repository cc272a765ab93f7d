//! # Test Harness
//!
//! Provides utilities for integration testing quicknotes without affecting user
//! configuration. Uses a thread-local home override instead of environment
//! variables, and a fixed clock so timestamps are exact.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{NaiveDate, NaiveDateTime};
use tempfile::TempDir;

use quicknotes::{set_home_override, FixedClock, NoteStore};

/// Test environment with a temporary home directory (for the global config)
/// and a temporary directory holding the notes file.
pub struct TestEnv {
    /// Temporary directory simulating the user's home
    pub home_dir: TempDir,
    /// Temporary directory for the notes file
    pub notes_dir: TempDir,
}

impl TestEnv {
    /// Creates a new test environment and redirects config lookup into it.
    pub fn new() -> Self {
        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        let notes_dir = TempDir::new().expect("Failed to create temp notes dir");

        set_home_override(Some(home_dir.path().to_path_buf()));

        Self {
            home_dir,
            notes_dir,
        }
    }

    /// Returns the path of the notes file used by this environment.
    pub fn notes_path(&self) -> PathBuf {
        self.notes_dir.path().join("notes.md")
    }

    /// Returns a store whose clock is fixed at `timestamp`.
    pub fn store_at(&self, timestamp: NaiveDateTime) -> NoteStore {
        NoteStore::with_clock(self.notes_path(), FixedClock(timestamp))
    }

    /// Returns a store whose clock is fixed at 2024-01-15 09:30:00.
    pub fn store(&self) -> NoteStore {
        self.store_at(at(2024, 1, 15, 9, 30, 0))
    }

    /// Returns the path where the global config would be stored.
    pub fn global_config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("quicknotes")
            .join("config")
    }

    /// Creates a global config file with the given content.
    pub fn write_global_config(&self, content: &str) {
        let path = self.global_config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create global config directory");
        }
        fs::write(path, content).expect("Failed to write global config");
    }

    /// Writes raw content to the notes file.
    pub fn write_notes(&self, content: &str) {
        fs::write(self.notes_path(), content).expect("Failed to write notes file");
    }

    /// Reads the notes file, or an empty string if it does not exist.
    pub fn read_notes_file(&self) -> String {
        read_or_empty(&self.notes_path())
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        set_home_override(None);
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Builds a local date-time; panics on invalid input.
pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, s))
        .expect("valid test timestamp")
}

/// Converts string literals into owned argument tokens.
pub fn tokens(parts: &[&str]) -> Vec<String> {
    parts.iter().map(ToString::to_string).collect()
}

fn read_or_empty(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_default()
}
