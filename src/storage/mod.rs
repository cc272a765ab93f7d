//! # Storage
//!
//! The notes file: an append-only, human-readable Markdown log with one note per line.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fmt,
    fs::{self, File, OpenOptions},
    io::{Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::debug;

use crate::{
    constants::{NOTES_HEADER, TIMESTAMP_FORMAT},
    note::{is_note_line, Clock, Note, SystemClock},
};

/// Owns the location of the notes file and the clock used to stamp new notes.
///
/// Holds no file handle and caches nothing: every operation opens the file,
/// does its work, and closes it again.
pub struct NoteStore {
    path: PathBuf,
    clock: Box<dyn Clock>,
}

impl fmt::Debug for NoteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoteStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl NoteStore {
    /// Creates a store for the given file, stamping notes with the system clock.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_clock(path, SystemClock)
    }

    /// Creates a store with an explicit clock.
    pub fn with_clock(path: impl Into<PathBuf>, clock: impl Clock + 'static) -> Self {
        Self {
            path: path.into(),
            clock: Box::new(clock),
        }
    }

    /// Returns the path of the notes file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the notes file with its header if it does not exist yet.
    ///
    /// Missing parent directories are created too. Calling this on an existing
    /// file is a no-op.
    pub fn ensure_initialized(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&self.path, NOTES_HEADER).with_context(|| {
            format!("Failed to create notes file: {}", self.path.display())
        })?;

        debug!(path = %self.path.display(), "created notes file");
        Ok(())
    }

    /// Returns the current local time as `YYYY-MM-DD HH:MM:SS`.
    pub fn current_timestamp(&self) -> String {
        self.clock.now().format(TIMESTAMP_FORMAT).to_string()
    }

    /// Appends a note stamped with the current time and returns it.
    ///
    /// The text is written as given. After this returns, the note is the last
    /// line of the file, even if a hand edit left the file without a final newline.
    pub fn append_note(&self, text: &str) -> Result<Note> {
        let note = Note::new(self.clock.now(), text);

        self.ensure_initialized()?;

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open notes file: {}", self.path.display()))?;

        let unterminated = lacks_final_newline(&mut file)
            .with_context(|| format!("Failed to read notes file: {}", self.path.display()))?;

        let line = if unterminated {
            format!("\n{note}\n")
        } else {
            format!("{note}\n")
        };

        file.write_all(line.as_bytes())
            .with_context(|| format!("Failed to write notes file: {}", self.path.display()))?;

        debug!(path = %self.path.display(), timestamp = %note.formatted_timestamp(), "appended note");
        Ok(note)
    }

    /// Reads every note line in on-disk order (oldest first).
    ///
    /// The header written by [`Self::ensure_initialized`], blank lines, and `#` lines
    /// are skipped; every other line is returned verbatim, whether or not it has a
    /// timestamp. A missing file yields no notes.
    pub fn read_notes(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "notes file does not exist yet");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read notes file: {}", self.path.display()))?;

        // The description line of our own header is not a note
        let body = content.strip_prefix(NOTES_HEADER).unwrap_or(&content);

        let notes: Vec<String> = body
            .lines()
            .filter(|line| is_note_line(line))
            .map(String::from)
            .collect();

        debug!(path = %self.path.display(), count = notes.len(), "read notes");
        Ok(notes)
    }
}

/// Returns true if the file is non-empty and its last byte is not `\n`.
fn lacks_final_newline(file: &mut File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }

    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
