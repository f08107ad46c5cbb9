// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error kinds for the music engine.
//!
//! Every failure is an input-validation failure; none of them leave any
//! shared state behind.

use thiserror::Error;

/// Errors raised by note, scale and chord operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MusicError {
    /// Symbol is not one of the twelve canonical note names
    #[error("note '{0}' doesn't exist")]
    UnknownNote(String),

    /// No scale with this name in the catalog
    #[error("scale '{0}' doesn't exist")]
    UnknownScale(String),

    /// No chord with this name in the catalog
    #[error("chord '{0}' doesn't exist")]
    UnknownChord(String),

    /// Chord detection was given no notes
    #[error("no notes given")]
    EmptyInput,

    /// Tuning text contained no note names
    #[error("invalid tuning '{0}'")]
    InvalidTuning(String),
}

/// Result alias for engine operations
pub type MusicResult<T> = Result<T, MusicError>;
