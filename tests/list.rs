//! # List Command Tests
//!
//! Tests for `qn list` and for the add/list round trip.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use common::{at, tokens, TestEnv};
use quicknotes::{
    commands::{self, AddArgs},
    constants::TIMESTAMP_FORMAT,
    NoteStore,
};

#[test]
fn test_list_missing_file_succeeds() {
    let env = TestEnv::new();

    commands::list(&env.store()).expect("list should succeed on a missing file");
    assert!(!env.notes_path().exists());
}

#[test]
fn test_list_header_only_file_has_no_notes() {
    let env = TestEnv::new();
    let store = env.store();
    store.ensure_initialized().unwrap();

    assert!(store.read_notes().unwrap().is_empty());
    commands::list(&store).expect("list should succeed");
}

#[test]
fn test_round_trip_preserves_text_and_order() {
    let env = TestEnv::new();
    let texts = ["buy milk", "Ship the MVP", "call Ana re: [budget]"];

    for (i, text) in texts.into_iter().enumerate() {
        let minute = u32::try_from(i).unwrap();
        let store = env.store_at(at(2024, 2, 1, 8, minute, 0));
        commands::add(&store, &AddArgs { text: tokens(&[text]) }).unwrap();
    }

    let notes = env.store().read_notes().unwrap();
    assert_eq!(notes.len(), texts.len());

    for (line, text) in notes.iter().zip(texts) {
        let (stamp, rest) = line
            .strip_prefix("- [")
            .and_then(|l| l.split_once("] "))
            .expect("note line shape");
        assert!(chrono::NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(rest, text);
    }

    commands::list(&env.store()).expect("list should succeed");
}

#[test]
fn test_system_clock_timestamp_format() {
    let env = TestEnv::new();
    let store = NoteStore::new(env.notes_path());

    commands::add(&store, &AddArgs { text: tokens(&["now"]) }).unwrap();

    let notes = store.read_notes().unwrap();
    let line = notes.last().expect("one note");
    let stamp = &line[3..22];
    assert_eq!(&line[22..], "] now");
    assert!(chrono::NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).is_ok());
    assert_eq!(stamp.len(), "YYYY-MM-DD HH:MM:SS".len());
}

#[test]
fn test_list_includes_malformed_lines() {
    let env = TestEnv::new();
    env.write_notes("# Quick Notes\n\n- [2024-01-15 09:30:00] ok\nhand typed line\n\n");

    assert_eq!(
        env.store().read_notes().unwrap(),
        vec!["- [2024-01-15 09:30:00] ok", "hand typed line"]
    );
}
