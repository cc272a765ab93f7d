//! # List Command
//!
//! Prints every note, numbered, in insertion order.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{storage::NoteStore, ui};

/// Shown when there is nothing to list.
pub const EMPTY_HINT: &str = "No notes yet. Add one with: qn add \"your note\"";

/// Executes the list command.
pub fn execute(store: &NoteStore) -> Result<()> {
    let notes = store.read_notes()?;

    if notes.is_empty() {
        ui::print_hint(EMPTY_HINT);
        return Ok(());
    }

    ui::print_indexed(&notes);

    Ok(())
}
