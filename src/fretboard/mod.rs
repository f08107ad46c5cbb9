// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Fretboard note layout.
//!
//! This module maps realized scales and chords onto the strings and frets
//! of a fretted instrument. It produces plain position data tagged with a
//! role; drawing it is left to the caller (the CLI renders it as text).

pub mod board;
pub mod tuning;

pub use board::{Board, BoardKind};
pub use tuning::{format_tuning, parse_tuning, STANDARD_TUNING};

use crate::music::Note;

/// Default number of frets shown below the nut
pub const DEFAULT_FRETS: usize = 11;

/// How a marked note should be highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteRole {
    /// Shown without emphasis
    Unvoiced,
    /// Root of the scale or chord
    Root,
    /// Non-root scale member
    ScaleTone,
    /// Non-root chord member
    ChordTone,
}

/// A note placed on a string at a fret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FretMarker {
    /// String index, 0 = lowest string of the tuning
    pub string: usize,
    /// Absolute fret number, 0 = open string
    pub fret: usize,
    pub note: Note,
    pub role: NoteRole,
}

/// Strings and frets with the notes marked on them
#[derive(Debug, Clone, PartialEq)]
pub struct Fretboard {
    tuning: Vec<Note>,
    frets: usize,
    starting_fret: usize,
    markers: Vec<FretMarker>,
}

impl Fretboard {
    /// Create an empty fretboard for a tuning
    pub fn new(tuning: Vec<Note>) -> Self {
        Self {
            tuning,
            frets: DEFAULT_FRETS,
            starting_fret: 0,
            markers: Vec::new(),
        }
    }

    /// Set how many frets are shown and where the window starts
    pub fn with_window(mut self, starting_fret: usize, frets: usize) -> Self {
        self.starting_fret = starting_fret;
        self.frets = frets;
        self
    }

    pub fn tuning(&self) -> &[Note] {
        &self.tuning
    }

    pub fn strings(&self) -> usize {
        self.tuning.len()
    }

    pub fn frets(&self) -> usize {
        self.frets
    }

    pub fn starting_fret(&self) -> usize {
        self.starting_fret
    }

    /// Fret numbers covered by this board
    pub fn fret_range(&self) -> std::ops::RangeInclusive<usize> {
        self.starting_fret..=self.starting_fret.saturating_add(self.frets)
    }

    pub fn markers(&self) -> &[FretMarker] {
        &self.markers
    }

    /// Note sounding on a string at a fret
    pub fn note_at(&self, string: usize, fret: usize) -> Option<Note> {
        self.tuning
            .get(string)
            .map(|open| open.transpose(fret as i64))
    }

    /// Marker at a position, if any
    pub fn marker_at(&self, string: usize, fret: usize) -> Option<&FretMarker> {
        self.markers
            .iter()
            .find(|m| m.string == string && m.fret == fret)
    }

    /// Mark every position that sounds one of `notes`.
    ///
    /// An existing marker at the same position is replaced.
    pub fn set_notes(&mut self, notes: &[Note], role: NoteRole) {
        for string in 0..self.tuning.len() {
            for fret in self.fret_range() {
                let note = self.tuning[string].transpose(fret as i64);
                if !notes.contains(&note) {
                    continue;
                }

                let marker = FretMarker {
                    string,
                    fret,
                    note,
                    role,
                };
                match self
                    .markers
                    .iter_mut()
                    .find(|m| m.string == string && m.fret == fret)
                {
                    Some(existing) => *existing = marker,
                    None => self.markers.push(marker),
                }
            }
        }
    }

    /// Plain-text diagram: one row per fret, one column per string.
    ///
    /// Roots are bracketed, other tones shown bare, unvoiced notes in
    /// parentheses and empty positions as `|`.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        out.push_str("    ");
        for open in &self.tuning {
            out.push_str(&format!("{:^5}", open.name()));
        }
        out.push('\n');

        for fret in self.fret_range() {
            out.push_str(&format!("{:>2}  ", fret));
            for string in 0..self.strings() {
                let cell = match self.marker_at(string, fret) {
                    Some(m) => match m.role {
                        NoteRole::Root => format!("[{}]", m.note),
                        NoteRole::ScaleTone | NoteRole::ChordTone => m.note.to_string(),
                        NoteRole::Unvoiced => format!("({})", m.note),
                    },
                    None => "|".to_string(),
                };
                out.push_str(&format!("{:^5}", cell));
            }
            // Trim the padding after the last string
            let trimmed = out.trim_end_matches(' ').len();
            out.truncate(trimmed);
            out.push('\n');
        }

        out
    }
}
