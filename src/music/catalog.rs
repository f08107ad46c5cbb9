// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interval catalogs for scales and chords.
//!
//! Scales are stored as steps from the previous degree, chords as offsets
//! from the root. Both tables are constant data and are never mutated.
//! Chord offsets above 11 are compound intervals (9ths, 11ths) and are
//! reduced modulo 12 wherever they meet the pitch-class space.

use std::fmt;

use regex::RegexBuilder;

use super::error::{MusicError, MusicResult};

/// Scale definitions: name and steps between consecutive degrees
pub const SCALES: &[(&str, &[u8])] = &[
    // Diatonic modes
    ("Major (Ionian)", &[2, 2, 1, 2, 2, 2, 1]),
    ("Dorian", &[2, 1, 2, 2, 2, 1, 2]),
    ("Phrygian", &[1, 2, 2, 2, 1, 2, 2]),
    ("Lydian", &[2, 2, 2, 1, 2, 2, 1]),
    ("Mixolydian", &[2, 2, 1, 2, 2, 1, 2]),
    ("Natural Minor (Aeolian)", &[2, 1, 2, 2, 1, 2, 2]),
    ("Locrian", &[1, 2, 2, 1, 2, 2, 2]),
    // Altered and synthetic heptatonic scales
    ("Harmonic Minor", &[2, 1, 2, 2, 1, 3, 1]),
    ("Melodic Minor", &[2, 1, 2, 2, 2, 2, 1]),
    ("Phrygian Dominant", &[1, 3, 1, 2, 1, 2, 2]),
    ("Hungarian Minor", &[2, 1, 3, 1, 1, 3, 1]),
    ("Double Harmonic", &[1, 3, 1, 2, 1, 3, 1]),
    ("Neapolitan Minor", &[1, 2, 2, 2, 1, 3, 1]),
    // Octatonic
    ("Diminished (Half-Whole)", &[1, 2, 1, 2, 1, 2, 1, 2]),
    ("Diminished (Whole-Half)", &[2, 1, 2, 1, 2, 1, 2, 1]),
    // Pentatonic
    ("Pentatonic Major", &[2, 2, 3, 2, 3]),
    ("Pentatonic Minor", &[3, 2, 2, 3, 2]),
    ("Metallica", &[1, 1, 1, 2, 1, 1, 1, 2, 2]),
];

/// Chord definitions: name and offsets from the root
///
/// "7" and "dom7" share offsets on purpose; both stay listed.
pub const CHORDS: &[(&str, &[u8])] = &[
    // Triads and dyads
    ("Major", &[0, 4, 7]),
    ("Minor", &[0, 3, 7]),
    ("Augmented", &[0, 4, 8]),
    ("Diminished", &[0, 4, 6]),
    ("sus2", &[0, 2, 7]),
    ("sus4", &[0, 5, 7]),
    ("Power", &[0, 7]),
    // Sevenths
    ("7", &[0, 4, 7, 10]),
    ("m7", &[0, 3, 7, 10]),
    ("maj7", &[0, 4, 7, 11]),
    ("dom7", &[0, 4, 7, 10]),
    ("dim7", &[0, 3, 6, 9]),
    ("dom7f5", &[0, 4, 6, 10]),
    ("halfdim7", &[0, 3, 6, 10]),
    ("majdim7", &[0, 3, 6, 11]),
    ("minmaj7", &[0, 3, 7, 11]),
    ("augmaj7", &[0, 4, 8, 11]),
    ("aug7", &[0, 4, 8, 10]),
    ("7sus2", &[0, 2, 7, 10]),
    // Extended
    ("9", &[0, 4, 7, 10, 14]),
    ("m9", &[0, 3, 7, 10, 14]),
    ("maj9", &[0, 4, 7, 11, 14]),
    ("11", &[0, 4, 7, 10, 14, 17]),
    ("m11", &[0, 3, 7, 10, 14, 17]),
];

/// Catalog entry for a scale, with its static name
pub fn find_scale(name: &str) -> MusicResult<(&'static str, &'static [u8])> {
    SCALES
        .iter()
        .find(|(n, _)| *n == name)
        .copied()
        .ok_or_else(|| MusicError::UnknownScale(name.to_string()))
}

/// Catalog entry for a chord, with its static name
pub fn find_chord(name: &str) -> MusicResult<(&'static str, &'static [u8])> {
    CHORDS
        .iter()
        .find(|(n, _)| *n == name)
        .copied()
        .ok_or_else(|| MusicError::UnknownChord(name.to_string()))
}

/// Steps of a named scale
pub fn scale_steps(name: &str) -> MusicResult<&'static [u8]> {
    find_scale(name).map(|(_, steps)| steps)
}

/// Offsets of a named chord
pub fn chord_offsets(name: &str) -> MusicResult<&'static [u8]> {
    find_chord(name).map(|(_, offsets)| offsets)
}

/// Scale names in catalog order
pub fn scale_names() -> impl Iterator<Item = &'static str> {
    SCALES.iter().map(|(name, _)| *name)
}

/// Chord names in catalog order
pub fn chord_names() -> impl Iterator<Item = &'static str> {
    CHORDS.iter().map(|(name, _)| *name)
}

/// Check whether a scale with this name exists
pub fn is_scale(name: &str) -> bool {
    scale_steps(name).is_ok()
}

/// Check whether a chord with this name exists
pub fn is_chord(name: &str) -> bool {
    chord_offsets(name).is_ok()
}

/// A selectable catalog item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogEntry {
    Scale(&'static str),
    Chord(&'static str),
}

impl CatalogEntry {
    /// Catalog name without the kind prefix
    pub fn name(self) -> &'static str {
        match self {
            CatalogEntry::Scale(name) | CatalogEntry::Chord(name) => name,
        }
    }

    pub fn is_scale(self) -> bool {
        matches!(self, CatalogEntry::Scale(_))
    }
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogEntry::Scale(name) => write!(f, "Scale: {}", name),
            CatalogEntry::Chord(name) => write!(f, "Chord: {}", name),
        }
    }
}

/// All scales followed by all chords
pub fn entries() -> Vec<CatalogEntry> {
    scale_names()
        .map(CatalogEntry::Scale)
        .chain(chord_names().map(CatalogEntry::Chord))
        .collect()
}

/// Filter catalog entries by a case-insensitive pattern on their labels.
///
/// An empty filter or one that is not a valid pattern yields every entry.
pub fn search(filter: &str) -> Vec<CatalogEntry> {
    let all = entries();
    if filter.is_empty() {
        return all;
    }

    let re = match RegexBuilder::new(filter).case_insensitive(true).build() {
        Ok(re) => re,
        Err(_) => return all,
    };

    all.into_iter()
        .filter(|entry| re.is_match(&entry.to_string()))
        .collect()
}
