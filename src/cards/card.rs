//! Card state and bonus-time bookkeeping.
//!
//! A card earns bonus time only while it is face-up and unmatched. The clock
//! rules are:
//!
//! - Turning face-up while unmatched with time left starts the clock.
//! - Becoming matched freezes the consumed time and stops the clock.
//! - Turning face-down while unmatched forgets all consumed time, so the next
//!   reveal starts from a full window.
//!
//! Card state is mutated only by the `MatchEngine` that owns the round.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Identifier for a card, unique across every deck a builder deals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// One face of a pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    id: CardId,
    content: String,
    is_face_up: bool,
    is_matched: bool,
    bonus_time_limit: Duration,
    /// Set while the card is consuming bonus time.
    clock_started_at: Option<Instant>,
    /// Bonus time already consumed, excluding the running interval.
    accumulated_face_up_time: Duration,
}

impl Card {
    /// A face-down, unmatched card with a full bonus window.
    #[must_use]
    pub fn new(id: CardId, content: impl Into<String>, bonus_time_limit: Duration) -> Self {
        Self {
            id,
            content: content.into(),
            is_face_up: false,
            is_matched: false,
            bonus_time_limit,
            clock_started_at: None,
            accumulated_face_up_time: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.is_face_up
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.is_matched
    }

    #[must_use]
    pub fn bonus_time_limit(&self) -> Duration {
        self.bonus_time_limit
    }

    /// Whether the bonus clock is currently running.
    #[must_use]
    pub fn is_clock_running(&self) -> bool {
        self.clock_started_at.is_some()
    }

    /// Consumed bonus time as of `now`.
    #[must_use]
    pub fn total_face_up_time(&self, now: Instant) -> Duration {
        let running = self
            .clock_started_at
            .map(|started| now.saturating_duration_since(started))
            .unwrap_or_default();
        self.accumulated_face_up_time + running
    }

    #[must_use]
    pub fn bonus_time_remaining(&self, now: Instant) -> Duration {
        self.bonus_time_limit.saturating_sub(self.total_face_up_time(now))
    }

    /// Remaining bonus as a fraction of the limit, in `0.0..=1.0`.
    #[must_use]
    pub fn bonus_remaining_fraction(&self, now: Instant) -> f64 {
        if self.bonus_time_limit.is_zero() {
            return 0.0;
        }
        self.bonus_time_remaining(now).as_secs_f64() / self.bonus_time_limit.as_secs_f64()
    }

    /// Matched before the bonus window ran out.
    #[must_use]
    pub fn has_earned_bonus(&self, now: Instant) -> bool {
        self.is_matched && !self.bonus_time_remaining(now).is_zero()
    }

    #[must_use]
    pub fn is_consuming_bonus_time(&self, now: Instant) -> bool {
        self.is_face_up && !self.is_matched && !self.bonus_time_remaining(now).is_zero()
    }

    /// Face-up, unmatched, and out of bonus time.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.is_face_up && !self.is_matched && self.bonus_time_remaining(now).is_zero()
    }

    pub(crate) fn turn_face_up(&mut self, now: Instant) {
        self.is_face_up = true;
        if !self.is_matched
            && self.clock_started_at.is_none()
            && !self.bonus_time_remaining(now).is_zero()
        {
            self.clock_started_at = Some(now);
        }
    }

    pub(crate) fn turn_face_down(&mut self) {
        self.is_face_up = false;
        if !self.is_matched {
            self.accumulated_face_up_time = Duration::ZERO;
            self.clock_started_at = None;
        }
    }

    pub(crate) fn mark_matched(&mut self, now: Instant) {
        self.accumulated_face_up_time = self.total_face_up_time(now);
        self.clock_started_at = None;
        self.is_matched = true;
    }
}
