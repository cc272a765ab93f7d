//! # Note Line Parser
//!
//! Classifies lines of the notes file and extracts the day key used by `stats`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::constants::HEADER_MARKER;

/// Returns true if a raw file line counts as a note.
///
/// Blank lines (after trimming) and header lines starting with `#` are not notes.
/// Anything else is, including lines that don't follow the `- [timestamp] text` shape.
pub fn is_note_line(line: &str) -> bool {
    !line.trim().is_empty() && !line.starts_with(HEADER_MARKER)
}

/// Extracts the `YYYY-MM-DD` day key from a note line.
///
/// Takes the text between the first `[` and the first `]` after it, then the part
/// before the first space. Returns `None` for lines without a bracketed timestamp.
///
/// # Example
/// ```
/// use quicknotes::note::day_key;
/// assert_eq!(day_key("- [2024-01-15 09:30:00] first note"), Some("2024-01-15"));
/// assert_eq!(day_key("hand-written line"), None);
/// ```
pub fn day_key(line: &str) -> Option<&str> {
    let (_, after_open) = line.split_once('[')?;
    let (timestamp, _) = after_open.split_once(']')?;
    let day = timestamp.split(' ').next()?;

    if day.is_empty() {
        return None;
    }

    Some(day)
}
