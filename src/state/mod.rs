// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Persisted application state.
//!
//! This module stores the current selection, the window layout and the list
//! of open boards as YAML, and rebuilds the boards on load.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::fretboard::{parse_tuning, Board, BoardKind, STANDARD_TUNING};
use crate::music::{catalog, Note};

/// Directory name under the user data directory
const APP_DIR: &str = "fretnoter";

/// State file name
const STATE_FILE: &str = "state.yaml";

/// Root of the persisted state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct State {
    /// Number of board columns
    #[serde(default = "default_columns")]
    pub columns: usize,
    /// Tuning used for new boards (e.g., "EADGBE")
    #[serde(default = "default_tuning")]
    pub tuning: String,
    /// Selected root note
    #[serde(default = "default_root")]
    pub root: String,
    /// Selected scale or chord name
    #[serde(default = "default_scale_chord")]
    pub scale_chord: String,
    /// Window width in pixels
    #[serde(default = "default_width")]
    pub width: u32,
    /// Window height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
    /// Open boards, in display order
    #[serde(default)]
    pub boards: Vec<BoardState>,
}

fn default_columns() -> usize {
    4
}
fn default_tuning() -> String {
    STANDARD_TUNING.to_string()
}
fn default_root() -> String {
    "E".to_string()
}
fn default_scale_chord() -> String {
    "Major (Ionian)".to_string()
}
fn default_width() -> u32 {
    700
}
fn default_height() -> u32 {
    830
}

impl Default for State {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            tuning: default_tuning(),
            root: default_root(),
            scale_chord: default_scale_chord(),
            width: default_width(),
            height: default_height(),
            boards: Vec::new(),
        }
    }
}

/// What is needed to rebuild one board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardState {
    /// Scale or chord name
    pub name: String,
    #[serde(rename = "type")]
    pub kind: BoardKind,
    pub root: String,
    pub tuning: String,
}

impl BoardState {
    /// Rebuild the board this entry describes
    pub fn restore(&self) -> Result<Board> {
        let tuning = parse_tuning(&self.tuning)?;
        let root = Note::parse(&self.root)?;
        Board::build(self.kind, &tuning, root, &self.name)
            .with_context(|| format!("Failed to rebuild {} board '{}'", self.kind, self.name))
    }
}

impl From<&Board> for BoardState {
    fn from(board: &Board) -> Self {
        Self {
            name: board.name().to_string(),
            kind: board.kind(),
            root: board.root().to_string(),
            tuning: crate::fretboard::format_tuning(board.tuning()),
        }
    }
}

impl State {
    /// Default location of the state file.
    ///
    /// `$XDG_DATA_HOME/fretnoter/state.yaml`, falling back to
    /// `$HOME/.local/share/fretnoter/state.yaml`.
    pub fn default_path() -> Result<PathBuf> {
        let data_home = match env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => {
                let home = env::var_os("HOME")
                    .ok_or_else(|| anyhow!("Neither XDG_DATA_HOME nor HOME is set"))?;
                PathBuf::from(home).join(".local").join("share")
            }
        };
        Ok(data_home.join(APP_DIR).join(STATE_FILE))
    }

    /// Load state from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read state file: {:?}", path.as_ref()))?;
        let state = Self::from_yaml(&contents)?;
        info!("Loaded configuration from {:?}", path.as_ref());
        Ok(state)
    }

    /// Load state from a YAML file, or start fresh when it does not exist yet
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            info!("No state file at {:?}, using defaults", path.as_ref());
            Ok(Self::default())
        }
    }

    /// Parse state from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML state")
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize state to YAML")
    }

    /// Save state to a YAML file, creating parent directories
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create state directory: {:?}", parent))?;
        }

        let yaml = self.to_yaml()?;
        fs::write(path, yaml).with_context(|| format!("Failed to write state file: {:?}", path))?;
        info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Whether the selection names a catalog scale
    pub fn is_scale(&self) -> bool {
        catalog::is_scale(&self.scale_chord)
    }

    /// Whether the selection names a catalog chord
    pub fn is_chord(&self) -> bool {
        catalog::is_chord(&self.scale_chord)
    }

    /// Describe the selected root and scale or chord.
    ///
    /// `None` when the selection names nothing in the catalog.
    pub fn selection(&self) -> Option<String> {
        if self.is_scale() {
            Some(format!("{} {} scale", self.root, self.scale_chord))
        } else if self.is_chord() {
            Some(format!("{}{} chord", self.root, self.scale_chord))
        } else {
            None
        }
    }

    /// Make a board the current selection and append it to the open list
    pub fn open_board(&mut self, board: &Board) {
        self.root = board.root().to_string();
        self.scale_chord = board.name().to_string();
        self.tuning = crate::fretboard::format_tuning(board.tuning());
        self.add_board(board);
    }

    /// Append a board to the open list
    pub fn add_board(&mut self, board: &Board) {
        self.boards.push(BoardState::from(board));
    }

    /// Rebuild all persisted boards.
    ///
    /// Boards that can no longer be built are skipped.
    pub fn restore_boards(&self) -> Vec<Board> {
        self.boards
            .iter()
            .filter_map(|entry| match entry.restore() {
                Ok(board) => Some(board),
                Err(e) => {
                    warn!("Skipping saved board {:?}: {:#}", entry, e);
                    None
                }
            })
            .collect()
    }
}
