//! Campaign progress: current level, stars, advance and restart.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::level::{default_campaign, validate_campaign, LevelConfig};
use crate::core::error::Result;

/// Stars for a finished round.
///
/// `0..=1` mismatches earn 3 stars, `2..=3` earn 2, anything more earns 1.
#[must_use]
pub const fn star_rating(mismatches: u32) -> u32 {
    match mismatches {
        0..=1 => 3,
        2..=3 => 2,
        _ => 1,
    }
}

/// Result of `SessionController::advance`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next level.
    Moved,
    /// Already on the final level; index unchanged.
    DidNotMove,
}

impl Advance {
    #[must_use]
    pub fn moved(self) -> bool {
        matches!(self, Advance::Moved)
    }
}

/// Progress record for one play-through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub current_level_index: usize,
    pub earned_stars: u32,
}

/// Sequences a linear campaign of levels.
///
/// ```
/// use memory_match::session::{Advance, SessionController};
///
/// let mut session = SessionController::with_default_campaign();
/// assert_eq!(session.current_level().level_number(), 1);
/// assert_eq!(session.advance(0), Advance::Moved);
/// assert_eq!(session.earned_stars(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct SessionController {
    levels: Vec<LevelConfig>,
    state: SessionState,
}

impl SessionController {
    /// Start a session at the first level with no stars.
    ///
    /// Fails if the campaign is empty or misnumbered.
    pub fn new(levels: Vec<LevelConfig>) -> Result<Self> {
        validate_campaign(&levels)?;
        Ok(Self {
            levels,
            state: SessionState::default(),
        })
    }

    #[must_use]
    pub fn with_default_campaign() -> Self {
        Self {
            levels: default_campaign(),
            state: SessionState::default(),
        }
    }

    #[must_use]
    pub fn current_level(&self) -> &LevelConfig {
        &self.levels[self.state.current_level_index]
    }

    #[must_use]
    pub fn current_level_index(&self) -> usize {
        self.state.current_level_index
    }

    #[must_use]
    pub fn earned_stars(&self) -> u32 {
        self.state.earned_stars
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn levels(&self) -> &[LevelConfig] {
        &self.levels
    }

    #[must_use]
    pub fn total_levels(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_on_final_level(&self) -> bool {
        self.state.current_level_index + 1 >= self.levels.len()
    }

    /// Share of the campaign already completed, `index / total`.
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        if self.levels.is_empty() {
            return 0.0;
        }
        self.state.current_level_index as f64 / self.levels.len() as f64
    }

    #[must_use]
    pub fn star_rating(&self, mismatches: u32) -> u32 {
        star_rating(mismatches)
    }

    /// Bank the stars for a finished round and move on if possible.
    ///
    /// Stars are banked even on the final level.
    pub fn advance(&mut self, mismatches: u32) -> Advance {
        let stars = star_rating(mismatches);
        self.state.earned_stars += stars;

        if self.is_on_final_level() {
            info!(
                level = self.current_level().level_number(),
                stars,
                total_stars = self.state.earned_stars,
                "final level finished"
            );
            return Advance::DidNotMove;
        }

        self.state.current_level_index += 1;
        info!(
            level = self.current_level().level_number(),
            stars,
            total_stars = self.state.earned_stars,
            "advanced to next level"
        );
        Advance::Moved
    }

    /// Back to the first level with no stars.
    pub fn restart_journey(&mut self) {
        info!(
            from_level = self.current_level().level_number(),
            "restarting journey"
        );
        self.state = SessionState::default();
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::with_default_campaign()
    }
}
