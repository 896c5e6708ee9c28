//! # memory-match
//!
//! A matching-card puzzle engine: reveal pairs of face-down cards, match
//! identical pairs for score, and work through a campaign of levels.
//!
//! ## Design Principles
//!
//! 1. **Synchronous core**: Every mutator returns immediately. Timed
//!    transitions (matched pairs flipping down, bonus timeouts) are deferred
//!    tasks issued through a `Scheduler`, never timers inside the engine.
//!
//! 2. **Explicit collaborators**: Themes, device limits, clocks and
//!    schedulers are injected, so a game is deterministic under test.
//!
//! 3. **Stale ids are harmless**: Card ids are never reused, and operations
//!    on unknown ids do nothing.
//!
//! ## Modules
//!
//! - `core`: RNG, clocks, configuration, errors
//! - `cards`: Cards and bonus-time bookkeeping
//! - `themes`: Content sources for decks
//! - `density`: Device pair limits and the pair-count policy
//! - `deck`: Deck building
//! - `engine`: The per-round matching state machine
//! - `session`: Levels, stars and campaign progress
//! - `schedule`: Deferred tasks and a polled task queue
//! - `game`: Facade combining all of the above

pub mod cards;
pub mod core;
pub mod deck;
pub mod density;
pub mod engine;
pub mod game;
pub mod schedule;
pub mod session;
pub mod themes;

// Re-export commonly used types
pub use crate::core::{
    Clock, GameConfig, GameRng, ManualClock, MatchError, Result, SharedClock, SystemClock,
};

pub use crate::cards::{Card, CardId};

pub use crate::themes::{ContentKind, Difficulty, Theme, ThemeId, ThemeLibrary, ThemePalette, ThemeProvider};

pub use crate::density::{
    admissible_pair_count, DeviceCapability, DeviceIdiom, DisplayProfile, FixedPairLimit,
};

pub use crate::deck::DeckBuilder;

pub use crate::engine::{ChooseOutcome, MatchEngine, MatchEvent};

pub use crate::session::{
    default_campaign, star_rating, Advance, LevelConfig, SessionController, SessionState, SpecialRule,
};

pub use crate::schedule::{DeferredTask, Scheduler, TaskQueue};

pub use crate::game::{MemoryGame, MemoryGameBuilder};
