//! # Note
//!
//! A single timestamped note and its one-line Markdown representation:
//! `- [YYYY-MM-DD HH:MM:SS] text`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod clock;
pub mod parser;

use std::fmt;

use chrono::NaiveDateTime;

use crate::constants::{NOTE_LINE_PREFIX, TIMESTAMP_FORMAT};

pub use self::{
    clock::{Clock, FixedClock, SystemClock},
    parser::{day_key, is_note_line},
};

/// A note as written by `add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Local wall-clock time of insertion (second resolution)
    pub timestamp: NaiveDateTime,

    /// Trimmed, non-empty note text
    pub text: String,
}

impl Note {
    /// Creates a note from a timestamp and text.
    ///
    /// The text is stored as given; trimming and emptiness checks belong to the caller.
    pub fn new(timestamp: NaiveDateTime, text: impl Into<String>) -> Self {
        Self {
            timestamp,
            text: text.into(),
        }
    }

    /// Returns the timestamp rendered as `YYYY-MM-DD HH:MM:SS`.
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{NOTE_LINE_PREFIX}{}] {}",
            self.formatted_timestamp(),
            self.text
        )
    }
}
