//! Round outcomes and change notifications.
//!
//! `choose` returns a `ChooseOutcome` directly. Every state change is also
//! recorded as a `MatchEvent` that hosts drain with
//! `MatchEngine::drain_events`, instead of observing engine state. Events
//! serialize to tagged JSON for hosts that forward them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;

/// Result of a single `choose` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChooseOutcome {
    /// Unknown id, or the card was already face-up or matched.
    Ignored,
    /// The card is now face-up and waiting for a partner.
    Pending { card: CardId },
    /// The card matched the pending card.
    Matched { pair: [CardId; 2] },
    /// The card did not match the pending card. Both stay face-up.
    Mismatched { pair: [CardId; 2] },
}

impl ChooseOutcome {
    /// Whether the call changed any state.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, ChooseOutcome::Ignored)
    }
}

/// A state change inside a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchEvent {
    Revealed { card: CardId },
    Matched { pair: [CardId; 2], score: u32 },
    Mismatched { pair: [CardId; 2], mismatches: u32 },
    FlippedDown { cards: SmallVec<[CardId; 2]> },
    Shuffled,
    RoundComplete { score: u32, mismatches: u32 },
}
