use std::path::PathBuf;

use crate::core::Color;

/// Errors that can occur when loading a rule set.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read rules file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("rules validation error: {0}")]
    Validation(String),
}

/// Errors from values that do not describe a reachable board or match.
///
/// Returned when deserializing snapshots and by the checked constructors
/// of board coordinates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("cell {0} is not on the ring (1..=52)")]
    Cell(u8),

    #[error("lane slot {0} is out of range (0..5)")]
    LaneSlot(u8),

    #[error("turn index {0} is out of range (0..4)")]
    TurnIndex(usize),

    #[error("turn order must list every color exactly once")]
    TurnOrder,

    #[error("{0} player data is stored under another color")]
    Misplaced(Color),

    #[error("ranking does not match the colors that have finished")]
    Ranking,
}
