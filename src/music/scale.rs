// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale realization and scale/chord membership.
//!
//! A realized scale keeps degree order: index 0 is the root and callers
//! slice it off when they only want the other tones.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use super::catalog::{find_scale, CHORDS};
use super::error::MusicResult;
use super::note::{join_notes, Note};

/// Chord names playable on each root using only scale notes
pub type ChordMap = BTreeMap<Note, Vec<&'static str>>;

/// A named scale realized from a root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    root: Note,
    name: &'static str,
    notes: Vec<Note>,
}

impl Scale {
    /// Realize a catalog scale from a root
    pub fn new(root: Note, name: &str) -> MusicResult<Self> {
        let (catalog_name, steps) = find_scale(name)?;

        let mut notes = Vec::with_capacity(steps.len());
        let mut position = root.position() as i64;
        for &step in steps {
            notes.push(Note::from_position(position));
            position += step as i64;
        }

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

    /// Notes in degree order, root first
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Notes after the root
    pub fn upper_notes(&self) -> &[Note] {
        &self.notes[1..]
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Check if a note is in this scale
    pub fn contains(&self, note: Note) -> bool {
        self.notes.contains(&note)
    }

    /// Every catalog chord, on any root, whose notes all lie in this scale.
    ///
    /// Membership is tested note by note; the candidate root is not checked
    /// on its own.
    pub fn chords(&self) -> ChordMap {
        let members: HashSet<Note> = self.notes.iter().copied().collect();
        let mut map = ChordMap::new();

        for root in Note::ALL {
            let mut names: Vec<&'static str> = CHORDS
                .iter()
                .filter(|(_, offsets)| {
                    offsets
                        .iter()
                        .all(|&offset| members.contains(&root.transpose(offset as i64)))
                })
                .map(|(name, _)| *name)
                .collect();

            if names.is_empty() {
                continue;
            }
            names.sort_unstable();
            map.insert(root, names);
        }

        map
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.root, self.name, join_notes(&self.notes))
    }
}

/// Realize a named scale from a root symbol, in degree order
pub fn build_scale(root: &str, scale_name: &str) -> MusicResult<Vec<Note>> {
    let root = Note::parse(root)?;
    Ok(Scale::new(root, scale_name)?.notes)
}

/// Chords of every root whose notes all lie in the given scale
pub fn chords_in_scale(root: &str, scale_name: &str) -> MusicResult<ChordMap> {
    let root = Note::parse(root)?;
    Ok(Scale::new(root, scale_name)?.chords())
}
