//! Level progression.
//!
//! ## Key Types
//!
//! - `LevelConfig`: Theme, bonus budget and rule tags for one level
//! - `SessionController`: Owns the campaign and the progress record
//! - `Advance`: Whether `advance` moved to a new level
//!
//! Levels form a linear sequence. The only transitions are `advance`
//! (index + 1, clamped at the last level) and `restart_journey` (index 0).

pub mod controller;
pub mod level;

pub use controller::{star_rating, Advance, SessionController, SessionState};
pub use level::{default_campaign, validate_campaign, LevelConfig, SpecialRule};
