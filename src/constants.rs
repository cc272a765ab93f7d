//! # Constants
//!
//! Centralized constants for magic values used throughout quicknotes.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Note File Format
// =============================================================================

/// Header written verbatim when the notes file is first created.
pub const NOTES_HEADER: &str = "# Quick Notes\n\nA lightweight, timestamped notes file.\n\n";

/// Prefix marking header lines, which are never treated as notes.
pub const HEADER_MARKER: &str = "#";

/// Prefix of every note line, directly followed by the timestamp.
pub const NOTE_LINE_PREFIX: &str = "- [";

/// `chrono` format string for note timestamps (`YYYY-MM-DD HH:MM:SS`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// UI Display
// =============================================================================

/// Minimum width of the right-aligned index column in list and search output.
pub const UI_INDEX_WIDTH: usize = 3;

// =============================================================================
// File System
// =============================================================================

/// Default notes file name, placed next to the executable.
pub const DEFAULT_NOTES_FILENAME: &str = "notes.md";

/// Global configuration directory name (inside `~/.config`).
pub const GLOBAL_CONFIG_DIR: &str = "quicknotes";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";

/// Default tracing filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
