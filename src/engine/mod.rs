//! The matching state machine for a single round.
//!
//! ## Key Types
//!
//! - `MatchEngine`: Owns the round's cards, score and mismatch count
//! - `ChooseOutcome`: What a single `choose` did
//! - `MatchEvent`: Drainable record of every state change

pub mod event;
pub mod match_engine;

pub use event::{ChooseOutcome, MatchEvent};
pub use match_engine::MatchEngine;
