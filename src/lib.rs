// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! fretnoter: scales, chords and chord detection over the twelve-tone
//! pitch-class space, with fretboard layout and persisted board state.

pub mod fretboard;
pub mod music;
pub mod state;
