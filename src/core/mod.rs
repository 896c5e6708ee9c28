//! Core building blocks: RNG, clocks, configuration, errors.
//!
//! Everything here is independent of card-matching rules.

pub mod clock;
pub mod config;
pub mod error;
pub mod rng;

pub use clock::{Clock, ManualClock, SharedClock, SystemClock};
pub use config::{GameConfig, DEFAULT_MATCH_FLIP_DELAY};
pub use error::{MatchError, Result};
pub use rng::GameRng;
