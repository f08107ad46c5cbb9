// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Boards: a scale, chord or scale-chord list ready for display.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{format_tuning, Fretboard, NoteRole};
use crate::music::note::join_notes;
use crate::music::{Chord, ChordMap, MusicResult, Note, Scale};

/// What a board shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardKind {
    /// Scale notes on the fretboard
    Scale,
    /// Chord notes on the fretboard
    Chord,
    /// Chords available within a scale
    List,
}

impl fmt::Display for BoardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BoardKind::Scale => "scale",
            BoardKind::Chord => "chord",
            BoardKind::List => "chords",
        };
        f.write_str(label)
    }
}

/// Board contents
#[derive(Debug, Clone, PartialEq)]
enum BoardView {
    Diagram(Fretboard),
    ChordList(ChordMap),
}

/// A scale or chord laid out for display
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    kind: BoardKind,
    root: Note,
    name: &'static str,
    tuning: Vec<Note>,
    notes: Vec<Note>,
    view: BoardView,
}

impl Board {
    /// Scale tones on the fretboard, root highlighted
    pub fn scale(tuning: &[Note], root: Note, name: &str) -> MusicResult<Self> {
        let scale = Scale::new(root, name)?;
        let fretboard = Self::diagram(tuning, root, scale.upper_notes(), NoteRole::ScaleTone);

        Ok(Self {
            kind: BoardKind::Scale,
            root,
            name: scale.name(),
            tuning: tuning.to_vec(),
            notes: scale.notes().to_vec(),
            view: BoardView::Diagram(fretboard),
        })
    }

    /// Chord tones on the fretboard, root highlighted
    pub fn chord(tuning: &[Note], root: Note, name: &str) -> MusicResult<Self> {
        let chord = Chord::new(root, name)?;
        let fretboard = Self::diagram(tuning, root, chord.upper_notes(), NoteRole::ChordTone);

        Ok(Self {
            kind: BoardKind::Chord,
            root,
            name: chord.name(),
            tuning: tuning.to_vec(),
            notes: chord.notes().to_vec(),
            view: BoardView::Diagram(fretboard),
        })
    }

    /// Chords playable within a scale
    pub fn chord_list(tuning: &[Note], root: Note, name: &str) -> MusicResult<Self> {
        let scale = Scale::new(root, name)?;
        let chords = scale.chords();

        Ok(Self {
            kind: BoardKind::List,
            root,
            name: scale.name(),
            tuning: tuning.to_vec(),
            notes: scale.notes().to_vec(),
            view: BoardView::ChordList(chords),
        })
    }

    /// Build a board of the given kind
    pub fn build(kind: BoardKind, tuning: &[Note], root: Note, name: &str) -> MusicResult<Self> {
        match kind {
            BoardKind::Scale => Self::scale(tuning, root, name),
            BoardKind::Chord => Self::chord(tuning, root, name),
            BoardKind::List => Self::chord_list(tuning, root, name),
        }
    }

    fn diagram(tuning: &[Note], root: Note, tones: &[Note], role: NoteRole) -> Fretboard {
        let mut fretboard = Fretboard::new(tuning.to_vec());
        fretboard.set_notes(tones, role);
        fretboard.set_notes(&[root], NoteRole::Root);
        fretboard
    }

    pub fn kind(&self) -> BoardKind {
        self.kind
    }

    pub fn root(&self) -> Note {
        self.root
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn tuning(&self) -> &[Note] {
        &self.tuning
    }

    /// Realized notes, root first
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Fretboard diagram for scale and chord boards
    pub fn fretboard(&self) -> Option<&Fretboard> {
        match &self.view {
            BoardView::Diagram(fretboard) => Some(fretboard),
            BoardView::ChordList(_) => None,
        }
    }

    /// Chord names per scale note, in scale-degree order.
    ///
    /// Scale notes without any chord are left out. Empty for diagram boards.
    pub fn rows(&self) -> Vec<(Note, &[&'static str])> {
        let chords = match &self.view {
            BoardView::ChordList(chords) => chords,
            BoardView::Diagram(_) => return Vec::new(),
        };

        self.notes
            .iter()
            .filter_map(|note| chords.get(note).map(|names| (*note, names.as_slice())))
            .collect()
    }

    /// Three-line heading: what, tuning and notes
    pub fn title(&self) -> String {
        format!(
            "{} {} {}\nTuning: {}\nNotes: {}",
            self.root,
            self.name,
            self.kind,
            format_tuning(&self.tuning),
            join_notes(&self.notes)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fretboard::{parse_tuning, STANDARD_TUNING};
    use crate::music::MusicError;

    fn standard() -> Vec<Note> {
        parse_tuning(STANDARD_TUNING).unwrap()
    }

    #[test]
    fn test_scale_board() {
        let board = Board::scale(&standard(), Note::A, "Pentatonic Minor").unwrap();
        assert_eq!(board.kind(), BoardKind::Scale);
        assert_eq!(
            board.title(),
            "A Pentatonic Minor scale\nTuning: EADGBE\nNotes: A C D E G"
        );

        let fretboard = board.fretboard().unwrap();
        assert_eq!(fretboard.marker_at(0, 5).unwrap().role, NoteRole::Root);
        assert_eq!(fretboard.marker_at(0, 0).unwrap().role, NoteRole::ScaleTone);
        assert!(fretboard.marker_at(0, 1).is_none());
        assert!(fretboard
            .markers()
            .iter()
            .all(|m| board.notes().contains(&m.note)));
    }

    #[test]
    fn test_chord_board() {
        let board = Board::chord(&standard(), Note::C, "Major").unwrap();
        assert_eq!(board.title(), "C Major chord\nTuning: EADGBE\nNotes: C E G");

        let fretboard = board.fretboard().unwrap();
        let roots = fretboard
            .markers()
            .iter()
            .filter(|m| m.role == NoteRole::Root)
            .count();
        assert!(roots > 0);
        assert!(fretboard
            .markers()
            .iter()
            .filter(|m| m.role == NoteRole::ChordTone)
            .all(|m| m.note == Note::E || m.note == Note::G));
        assert!(board.rows().is_empty());
    }

    #[test]
    fn test_chord_list_board() {
        let board = Board::chord_list(&standard(), Note::C, "Major (Ionian)").unwrap();
        assert!(board.fretboard().is_none());
        assert!(board.title().starts_with("C Major (Ionian) chords\n"));

        let rows = board.rows();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].0, Note::C);
        assert!(rows[0].1.contains(&"Major"));
        assert_eq!(rows[6].0, Note::B);
    }

    #[test]
    fn test_build_dispatch() {
        let tuning = standard();
        let board = Board::build(BoardKind::Chord, &tuning, Note::D, "m7").unwrap();
        assert_eq!(board.kind(), BoardKind::Chord);
        assert_eq!(board.name(), "m7");

        assert_eq!(
            Board::build(BoardKind::Scale, &tuning, Note::D, "m7"),
            Err(MusicError::UnknownScale("m7".to_string()))
        );
        assert_eq!(
            Board::build(BoardKind::List, &tuning, Note::D, "Major"),
            Err(MusicError::UnknownScale("Major".to_string()))
        );
    }
}
