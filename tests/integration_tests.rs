// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for fretnoter
//!
//! These tests exercise the public API across the engine, the fretboard
//! layout and the persisted state.

use std::collections::HashSet;

use fretnoter::fretboard::{parse_tuning, Board, BoardKind, NoteRole};
use fretnoter::music::catalog::{CHORDS, SCALES};
use fretnoter::music::note::NOTE_NAMES;
use fretnoter::music::{
    build_chord, build_scale, chords_in_scale, detect_chord, MusicError, Note,
};
use fretnoter::state::{BoardState, State};

/// Every scale realizes to one note per step, starting at the root
#[test]
fn test_scale_length_and_root() {
    for root in NOTE_NAMES {
        for (name, steps) in SCALES {
            let notes = build_scale(root, name).unwrap();
            assert_eq!(notes.len(), steps.len(), "{} {}", root, name);
            assert_eq!(notes[0].name(), root);
        }
    }
}

/// Every chord realizes to one note per offset, all inside the alphabet
#[test]
fn test_chord_size_and_alphabet() {
    for root in NOTE_NAMES {
        for (name, offsets) in CHORDS {
            let notes = build_chord(root, name).unwrap();
            assert_eq!(notes.len(), offsets.len(), "{}{}", root, name);
            assert!(notes.iter().all(|n| NOTE_NAMES.contains(&n.name())));
        }
    }
}

/// Builders are pure: repeated calls give identical, ordered output
#[test]
fn test_builders_are_repeatable() {
    assert_eq!(
        build_scale("F#", "Hungarian Minor").unwrap(),
        build_scale("F#", "Hungarian Minor").unwrap()
    );
    assert_eq!(build_chord("D#", "m11").unwrap(), build_chord("D#", "m11").unwrap());
    assert_eq!(
        chords_in_scale("E", "Phrygian").unwrap(),
        chords_in_scale("E", "Phrygian").unwrap()
    );
    assert_eq!(detect_chord(&["A", "C"]).unwrap(), detect_chord(&["A", "C"]).unwrap());
}

/// C major contains the C major triad and nothing outside its notes
#[test]
fn test_c_major_membership() {
    let map = chords_in_scale("C", "Major (Ionian)").unwrap();
    assert!(map[&Note::C].contains(&"Major"));

    let scale: HashSet<Note> = build_scale("C", "Major (Ionian)").unwrap().into_iter().collect();
    for (root, names) in &map {
        for name in names {
            let notes = build_chord(root.name(), name).unwrap();
            assert!(notes.iter().all(|n| scale.contains(n)), "{}{}", root, name);
        }
    }
}

/// Chord detection over a fully specified triad
#[test]
fn test_detect_c_major_triad() {
    let found = detect_chord(&["C", "E", "G"]).unwrap();
    assert!(found.contains(&"CMajor".to_string()));
    assert!(found.contains(&"Cmaj7 (partial C E G B)".to_string()));

    let sorted = {
        let mut s = found.clone();
        s.sort();
        s
    };
    assert_eq!(found, sorted);
}

/// Detection failures surface the matching error kind
#[test]
fn test_detect_errors() {
    let empty: Vec<String> = Vec::new();
    assert_eq!(detect_chord(&empty[..]), Err(MusicError::EmptyInput));
    assert_eq!(
        detect_chord(&["H"]),
        Err(MusicError::UnknownNote("H".to_string()))
    );
}

/// Feeding a built chord back into detection finds that chord
#[test]
fn test_build_detect_round_trip() {
    for root in NOTE_NAMES {
        for (name, _) in CHORDS {
            let notes: Vec<&str> = build_chord(root, name)
                .unwrap()
                .iter()
                .map(|n| n.name())
                .collect();
            let found = detect_chord(&notes).unwrap();
            let prefix = format!("{}{}", root, name);
            assert!(
                found.iter().any(|s| s == &prefix || s.starts_with(&format!("{} (", prefix))),
                "{} not found in {:?}",
                prefix,
                found
            );
        }
    }
}

/// Saved boards survive a trip through the state file
#[test]
fn test_state_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("state.yaml");

    let tuning = parse_tuning("DADGAD").unwrap();
    let mut state = State::default();
    state.columns = 3;
    state.add_board(&Board::scale(&tuning, Note::D, "Mixolydian").unwrap());
    state.add_board(&Board::chord_list(&tuning, Note::A, "Natural Minor (Aeolian)").unwrap());
    state.boards.push(BoardState {
        name: "Nope".to_string(),
        kind: BoardKind::Chord,
        root: "C".to_string(),
        tuning: "DADGAD".to_string(),
    });
    state.save(&path).unwrap();

    let loaded = State::load(&path).unwrap();
    assert_eq!(loaded, state);

    let boards = loaded.restore_boards();
    assert_eq!(boards.len(), 2);
    assert_eq!(boards[0].title().lines().nth(1), Some("Tuning: DADGAD"));
    assert_eq!(
        boards[0].fretboard().unwrap().marker_at(0, 0).unwrap().role,
        NoteRole::Root
    );
    assert_eq!(boards[1].kind(), BoardKind::List);
    assert!(!boards[1].rows().is_empty());
}

#[test]
fn test_load_missing_state_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = State::load(dir.path().join("missing.yaml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read state file"));
}

/// Saving onto a missing file starts from defaults, later saves append
#[test]
fn test_save_board_into_state_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fretnoter").join("state.yaml");
    let tuning = parse_tuning("EADGBE").unwrap();

    let mut state = State::load_or_default(&path).unwrap();
    assert_eq!(state, State::default());
    state.open_board(&Board::scale(&tuning, Note::A, "Dorian").unwrap());
    state.save(&path).unwrap();

    let mut state = State::load_or_default(&path).unwrap();
    state.open_board(&Board::chord(&tuning, Note::C, "maj7").unwrap());
    state.save(&path).unwrap();

    let loaded = State::load(&path).unwrap();
    assert_eq!(loaded.boards.len(), 2);
    assert_eq!(loaded.selection(), Some("Cmaj7 chord".to_string()));
    assert_eq!(loaded.restore_boards()[0].notes()[0], Note::A);
}
