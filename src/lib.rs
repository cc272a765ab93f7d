//! # quicknotes
//!
//! A tiny note-taking tool that appends timestamped lines to a Markdown file.
//!
//! Notes are stored one per line as `- [YYYY-MM-DD HH:MM:SS] text` below a short
//! header, so the file stays readable, greppable, and safe to edit by hand.
//!
//! ## Features
//!
//! - **Append-only log**: notes are never rewritten or reordered
//! - **Search**: case-insensitive substring matching
//! - **Stats**: total count plus a per-day breakdown
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod note;
pub mod storage;
pub mod ui;

pub use config::{set_home_override, Config};
pub use error::NoteError;
pub use note::{Clock, FixedClock, Note, SystemClock};
pub use storage::NoteStore;
