//! # Add Command
//!
//! Appends a timestamped note to the notes file.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use tracing::info;

use super::join_args;
use crate::{error::NoteError, storage::NoteStore, ui};

/// Arguments for the add command
pub struct AddArgs {
    /// Remainder tokens, joined with spaces to form the note text
    pub text: Vec<String>,
}

/// Executes the add command.
///
/// Empty or whitespace-only text fails with [`NoteError::EmptyInput`] before
/// the notes file is touched.
pub fn execute(store: &NoteStore, args: &AddArgs) -> Result<()> {
    let text = join_args(&args.text);
    if text.is_empty() {
        return Err(NoteError::EmptyInput.into());
    }

    let note = store.append_note(&text)?;
    info!(timestamp = %note.formatted_timestamp(), "saved note");

    ui::print_success("Saved.");

    Ok(())
}
