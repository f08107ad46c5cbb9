// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! String tuning parsing.

use std::sync::OnceLock;

use regex::Regex;

use crate::music::{MusicError, MusicResult, Note};

/// Standard six-string guitar tuning, low to high
pub const STANDARD_TUNING: &str = "EADGBE";

fn note_token() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| Regex::new(r"[A-Ga-g]#?").expect("note token pattern is valid"))
}

/// Parse a tuning such as "EADGBE", "D A D G A D" or "eadgbe".
///
/// Anything that is not a note letter (with optional sharp) is ignored.
/// Text without a single note letter is rejected.
pub fn parse_tuning(text: &str) -> MusicResult<Vec<Note>> {
    let tokens: Vec<String> = note_token()
        .find_iter(text)
        .map(|m| m.as_str().to_uppercase())
        .collect();

    if tokens.is_empty() {
        return Err(MusicError::InvalidTuning(text.to_string()));
    }

    tokens.iter().map(|t| Note::parse(t)).collect()
}

/// Tuning rendered back to compact text ("EADGBE")
pub fn format_tuning(tuning: &[Note]) -> String {
    tuning.iter().map(|n| n.name()).collect()
}
