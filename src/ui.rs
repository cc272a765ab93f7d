//! # UI Utilities
//!
//! Shared output helpers: numbered note listings, success and hint messages,
//! and counting used by `stats`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::collections::BTreeMap;

use owo_colors::OwoColorize;

use crate::constants::UI_INDEX_WIDTH;

// =============================================================================
// Aggregation Utilities
// =============================================================================

/// Counts occurrences by a key extracted from each item, skipping items without one.
///
/// Keys come back sorted ascending.
pub fn count_by<'a, T, K, F>(items: &'a [T], key_fn: F) -> BTreeMap<K, usize>
where
    K: Ord,
    F: Fn(&'a T) -> Option<K>,
{
    let mut counts = BTreeMap::new();
    for key in items.iter().filter_map(key_fn) {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

// =============================================================================
// Note Listings
// =============================================================================

/// Formats one listing row: 1-based index right-aligned to at least three columns.
///
/// Format: `  1. {line}`
pub fn format_indexed(index: usize, line: &str) -> String {
    format!("{index:>width$}. {line}", width = UI_INDEX_WIDTH)
}

/// Prints lines numbered from 1.
pub fn print_indexed<S: AsRef<str>>(lines: &[S]) {
    for (i, line) in lines.iter().enumerate() {
        println!("{}", format_indexed(i + 1, line.as_ref()));
    }
}

// =============================================================================
// Messages
// =============================================================================

/// Prints a success message.
///
/// Format: `✓ {message}`
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints an informational hint (dimmed).
pub fn print_hint(message: &str) {
    println!("{}", message.dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_indexed_pads_to_three() {
        assert_eq!(format_indexed(1, "a"), "  1. a");
        assert_eq!(format_indexed(42, "b"), " 42. b");
        assert_eq!(format_indexed(999, "c"), "999. c");
    }

    #[test]
    fn test_format_indexed_grows_past_width() {
        assert_eq!(format_indexed(1000, "d"), "1000. d");
    }

    #[test]
    fn test_count_by_sorts_and_skips() {
        let items = ["b", "a", "", "b"];
        let counts = count_by(&items, |s: &&str| (!s.is_empty()).then_some(*s));

        let pairs: Vec<_> = counts.into_iter().collect();
        assert_eq!(pairs, vec![("a", 1), ("b", 2)]);
    }
}
