//! # Search Command
//!
//! Case-insensitive substring search over note lines.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use super::join_args;
use crate::{error::NoteError, storage::NoteStore, ui};

/// Arguments for the search command
pub struct SearchArgs {
    /// Remainder tokens, joined with spaces to form the query
    pub query: Vec<String>,
}

/// Executes the search command.
///
/// Matches are numbered from 1 over the filtered set, not by their position
/// in the full list.
pub fn execute(store: &NoteStore, args: &SearchArgs) -> Result<()> {
    let query = join_args(&args.query).to_lowercase();
    if query.is_empty() {
        return Err(NoteError::EmptyQuery.into());
    }

    let notes = store.read_notes()?;
    let matches = filter_matches(&notes, &query);

    if matches.is_empty() {
        println!("No matches.");
        return Ok(());
    }

    ui::print_indexed(&matches);

    Ok(())
}

/// Keeps the lines containing `query`, ignoring case, in their original order.
///
/// `query` must already be lower-cased.
pub fn filter_matches<'a>(notes: &'a [String], query: &str) -> Vec<&'a str> {
    notes
        .iter()
        .filter(|line| line.to_lowercase().contains(query))
        .map(String::as_str)
        .collect()
}
