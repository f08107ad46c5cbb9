// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch-class space.
//!
//! Twelve note names in a fixed cyclic order starting at A, with modular
//! arithmetic over their positions. Only sharp spellings exist; there is
//! no enharmonic normalization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{MusicError, MusicResult};

/// Number of pitch classes in the octave
pub const PITCH_CLASSES: usize = 12;

/// Note names in position order
pub const NOTE_NAMES: [&str; PITCH_CLASSES] = [
    "A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#",
];

/// Note names (pitch classes), ordered by position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Note {
    A,
    As, // A#
    B,
    C,
    Cs, // C#
    D,
    Ds, // D#
    E,
    F,
    Fs, // F#
    G,
    Gs, // G#
}

impl Note {
    /// All notes in position order
    pub const ALL: [Note; PITCH_CLASSES] = [
        Note::A,
        Note::As,
        Note::B,
        Note::C,
        Note::Cs,
        Note::D,
        Note::Ds,
        Note::E,
        Note::F,
        Note::Fs,
        Note::G,
        Note::Gs,
    ];

    /// Position of this note (0-11)
    pub fn position(self) -> usize {
        self as usize
    }

    /// Note at an arbitrary position, wrapped into the octave
    pub fn from_position(index: i64) -> Self {
        Note::ALL[index.rem_euclid(PITCH_CLASSES as i64) as usize]
    }

    /// Parse an exact, case-sensitive note name ("C", "F#")
    pub fn parse(symbol: &str) -> MusicResult<Self> {
        NOTE_NAMES
            .iter()
            .position(|&name| name == symbol)
            .map(|i| Note::ALL[i])
            .ok_or_else(|| MusicError::UnknownNote(symbol.to_string()))
    }

    /// Canonical name of this note
    pub fn name(self) -> &'static str {
        NOTE_NAMES[self.position()]
    }

    /// Transpose by semitones, wrapping around the octave
    pub fn transpose(self, semitones: i64) -> Self {
        Note::from_position(self.position() as i64 + semitones.rem_euclid(PITCH_CLASSES as i64))
    }

    /// Ascending interval in semitones from this note to another
    pub fn interval_to(self, other: Note) -> usize {
        (other.position() + PITCH_CLASSES - self.position()) % PITCH_CLASSES
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Note {
    type Err = MusicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Note::parse(s)
    }
}

impl TryFrom<String> for Note {
    type Error = MusicError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Note::parse(&value)
    }
}

impl From<Note> for String {
    fn from(note: Note) -> Self {
        note.name().to_string()
    }
}

/// Position (0-11) of a note symbol
pub fn position_of(note: &str) -> MusicResult<usize> {
    Note::parse(note).map(Note::position)
}

/// Note symbol at an arbitrary index, wrapped into [0, 12)
pub fn note_at(index: i64) -> &'static str {
    Note::from_position(index).name()
}

/// Join note names with single spaces ("C E G")
pub fn join_notes(notes: &[Note]) -> String {
    notes.iter().map(|n| n.name()).collect::<Vec<_>>().join(" ")
}
