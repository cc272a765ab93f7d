//! # Errors
//!
//! Input validation errors reported by the command layer.
//!
//! Filesystem and configuration failures travel as `anyhow::Error` with path
//! context; only user-input rejections get a dedicated type so callers (and
//! tests) can tell them apart.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use thiserror::Error;

/// User input rejected before any file is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NoteError {
    /// `add` was called with no text (or whitespace only).
    #[error("Nothing to add. Usage: qn add \"your note here\"")]
    EmptyInput,

    /// `search` was called with no query (or whitespace only).
    #[error("Provide a search term. Example: qn search focus")]
    EmptyQuery,
}
