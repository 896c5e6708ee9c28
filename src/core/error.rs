//! Error types.
//!
//! Only configuration and deck-building problems are errors. Stale or unknown
//! card ids are ignored by the engine instead of being reported.

use thiserror::Error;

use crate::themes::ThemeId;

/// Errors reported by deck building and configuration.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("theme {theme} has {available} content tokens, {requested} pairs requested")]
    InsufficientContent {
        theme: ThemeId,
        requested: usize,
        available: usize,
    },

    #[error("a deck needs at least one pair")]
    InvalidPairCount,

    #[error("campaign has no levels")]
    EmptyCampaign,

    #[error("level at index {index} is numbered {found}, expected {expected}")]
    LevelNumbering {
        index: usize,
        expected: u32,
        found: u32,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MatchError>;
