// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord realization and reverse chord lookup.
//!
//! Realized chords keep catalog offset order for display, but callers should
//! treat them as note sets. Compound offsets wrap into the octave and are not
//! deduplicated.

use std::fmt;

use super::catalog::{find_chord, CHORDS};
use super::error::{MusicError, MusicResult};
use super::note::{join_notes, Note, PITCH_CLASSES};

/// A named chord realized from a root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    root: Note,
    name: &'static str,
    notes: Vec<Note>,
}

impl Chord {
    /// Realize a catalog chord from a root
    pub fn new(root: Note, name: &str) -> MusicResult<Self> {
        let (catalog_name, offsets) = find_chord(name)?;
        let notes = offsets
            .iter()
            .map(|&offset| root.transpose(offset as i64))
            .collect();

        Ok(Self {
            root,
            name: catalog_name,
            notes,
        })
    }

    /// Get the root note
    pub fn root(&self) -> Note {
        self.root
    }

    /// Get the catalog name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Notes in catalog offset order, root first
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Notes after the root
    pub fn upper_notes(&self) -> &[Note] {
        &self.notes[1..]
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}: {}", self.root, self.name, join_notes(&self.notes))
    }
}

/// Notes of a catalog chord on a root
pub fn realize_chord(root: Note, name: &str) -> MusicResult<Vec<Note>> {
    Chord::new(root, name).map(|chord| chord.notes)
}

/// Realize a named chord from a root symbol
pub fn build_chord(root: &str, chord_name: &str) -> MusicResult<Vec<Note>> {
    let root = Note::parse(root)?;
    realize_chord(root, chord_name)
}

/// Find every catalog chord consistent with the given notes.
///
/// The first note is taken as the root. A chord matches when every other
/// note lies in it and it has at least as many offsets as there are other
/// notes. When the input covers fewer distinct tones than the chord, the
/// full chord is appended in parentheses, marked "partial" if the chord is
/// longer than the input itself.
pub fn detect_chord<S: AsRef<str>>(notes: &[S]) -> MusicResult<Vec<String>> {
    if notes.is_empty() {
        return Err(MusicError::EmptyInput);
    }

    let parsed = notes
        .iter()
        .map(|n| Note::parse(n.as_ref()))
        .collect::<MusicResult<Vec<Note>>>()?;

    let root = parsed[0];
    let offsets: Vec<usize> = parsed[1..].iter().map(|&n| root.interval_to(n)).collect();

    let mut distinct: Vec<usize> = offsets.iter().copied().filter(|&o| o != 0).collect();
    distinct.sort_unstable();
    distinct.dedup();
    let used = distinct.len() + 1;

    let mut found = Vec::new();
    for &(name, chord_offsets) in CHORDS {
        if offsets.len() > chord_offsets.len() {
            continue;
        }

        let matches = offsets.iter().all(|&offset| {
            chord_offsets
                .iter()
                .any(|&c| c as usize % PITCH_CLASSES == offset)
        });
        if !matches {
            continue;
        }

        let mut label = format!("{}{}", root, name);
        if used < chord_offsets.len() {
            let full = realize_chord(root, name)?;
            let qualifier = if chord_offsets.len() > notes.len() {
                "partial "
            } else {
                ""
            };
            label.push_str(&format!(" ({}{})", qualifier, join_notes(&full)));
        }
        found.push(label);
    }

    found.sort();
    Ok(found)
}

/// Detect chords from a whitespace-separated note list ("C E G")
pub fn detect_chord_text(text: &str) -> MusicResult<Vec<String>> {
    let notes: Vec<&str> = text.split_whitespace().collect();
    detect_chord(&notes)
}
