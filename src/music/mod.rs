// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory engine for fretnoter.
//!
//! This module provides the twelve-tone pitch-class space, the scale and
//! chord catalogs, scale/chord realization, scale membership analysis and
//! reverse chord lookup. Everything here is pure and allocation-local.

pub mod catalog;
pub mod chord;
pub mod error;
pub mod note;
pub mod scale;

pub use catalog::{chord_offsets, scale_steps, CatalogEntry};
pub use chord::{build_chord, detect_chord, detect_chord_text, Chord};
pub use error::{MusicError, MusicResult};
pub use note::{note_at, position_of, Note};
pub use scale::{build_scale, chords_in_scale, ChordMap, Scale};
