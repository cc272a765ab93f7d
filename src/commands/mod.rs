//! # Commands
//!
//! CLI command implementations for quicknotes.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod add;
pub mod completions;
pub mod list;
pub mod search;
pub mod stats;

pub use self::{
    add::{execute as add, AddArgs},
    completions::execute as completions,
    list::execute as list,
    search::{execute as search, SearchArgs},
    stats::{execute as stats, NoteStats},
};

/// Joins remainder tokens with single spaces and trims the result.
///
/// Trimming happens on the joined string, so several whitespace-only tokens
/// collapse to an empty string.
pub fn join_args(tokens: &[String]) -> String {
    tokens.join(" ").trim().to_string()
}
