//! # Stats Command
//!
//! Prints the total number of notes and a per-day breakdown.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::collections::BTreeMap;

use anyhow::Result;

use crate::{note::day_key, storage::NoteStore, ui};

/// Note counts: overall and per day key (`YYYY-MM-DD`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteStats {
    /// All note lines, parseable or not
    pub total: usize,

    /// Count per day, sorted ascending; lines without a day key are left out
    pub by_day: BTreeMap<String, usize>,
}

impl NoteStats {
    /// Computes stats over note lines.
    pub fn collect<S: AsRef<str>>(notes: &[S]) -> Self {
        let by_day = ui::count_by(notes, |line: &S| day_key(line.as_ref()).map(String::from));

        Self {
            total: notes.len(),
            by_day,
        }
    }

    /// Renders the report, one output line per entry.
    pub fn report(&self) -> Vec<String> {
        let mut lines = vec![format!("Total notes: {}", self.total)];

        if !self.by_day.is_empty() {
            lines.push("By day:".to_string());
            lines.extend(
                self.by_day
                    .iter()
                    .map(|(day, count)| format!("  {day}: {count}")),
            );
        }

        lines
    }
}

/// Executes the stats command.
pub fn execute(store: &NoteStore) -> Result<()> {
    let notes = store.read_notes()?;
    let stats = NoteStats::collect(&notes);

    for line in stats.report() {
        println!("{line}");
    }

    Ok(())
}
