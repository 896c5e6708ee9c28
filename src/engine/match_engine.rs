//! The per-round matching state machine.
//!
//! ## Choosing
//!
//! `choose` ignores unknown, face-up and matched cards. Otherwise the pending
//! card is found by scanning for face-up unmatched cards:
//! - none: the chosen card becomes pending
//! - exactly one: that card is pending and is compared with the chosen card
//! - two or more (left over from a mismatch): they are all flipped down and
//!   the chosen card becomes pending
//!
//! A comparison is plain content equality. A match marks both cards matched
//! and bumps `score`; a mismatch bumps `mismatch_count` and leaves both cards
//! face-up until the host flips them back or the next choice clears them.
//!
//! ## Time
//!
//! The engine reads its `Clock` only for bonus-time bookkeeping. Flipping
//! matched pairs down after a display window, and flipping cards back when
//! their bonus runs out, are driven by the host through `flip_cards_down`
//! and `flip_card_back`.
//!
//! ## Events
//!
//! Every state change is appended to an event log that only `drain_events`
//! empties. A new round starts with an empty log.

use std::time::{Duration, Instant};

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::event::{ChooseOutcome, MatchEvent};
use crate::cards::{Card, CardId};
use crate::core::clock::SharedClock;
use crate::core::rng::GameRng;

/// State of one round: the dealt cards, score and mismatches.
#[derive(Debug)]
pub struct MatchEngine {
    cards: Vec<Card>,
    score: u32,
    mismatch_count: u32,
    clock: SharedClock,
    events: Vec<MatchEvent>,
}

impl MatchEngine {
    /// Start a round with `cards` in display order.
    #[must_use]
    pub fn new(cards: Vec<Card>, clock: SharedClock) -> Self {
        Self {
            cards,
            score: 0,
            mismatch_count: 0,
            clock,
            events: Vec::new(),
        }
    }

    /// Cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id() == id)
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn mismatch_count(&self) -> u32 {
        self.mismatch_count
    }

    #[must_use]
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Every card is matched.
    #[must_use]
    pub fn is_round_complete(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    /// The card the next choice will be compared against, if any.
    #[must_use]
    pub fn pending_card(&self) -> Option<CardId> {
        match self.face_up_unmatched().as_slice() {
            [only] => Some(self.cards[*only].id()),
            _ => None,
        }
    }

    /// Face-up unmatched cards, in display order.
    #[must_use]
    pub fn face_up_unmatched_cards(&self) -> SmallVec<[CardId; 2]> {
        self.face_up_unmatched()
            .into_iter()
            .map(|i| self.cards[i].id())
            .collect()
    }

    /// Matched cards that are still face-up.
    #[must_use]
    pub fn matched_face_up_cards(&self) -> SmallVec<[CardId; 2]> {
        self.cards
            .iter()
            .filter(|c| c.is_matched() && c.is_face_up())
            .map(Card::id)
            .collect()
    }

    /// Face-up unmatched cards whose bonus window has run out.
    #[must_use]
    pub fn expired_cards(&self) -> SmallVec<[CardId; 2]> {
        let now = self.clock.now();
        self.cards
            .iter()
            .filter(|c| c.is_expired(now))
            .map(Card::id)
            .collect()
    }

    #[must_use]
    pub fn bonus_time_remaining(&self, id: CardId) -> Option<Duration> {
        let now = self.clock.now();
        self.card(id).map(|c| c.bonus_time_remaining(now))
    }

    /// Reveal a card and resolve it against the pending card.
    pub fn choose(&mut self, id: CardId) -> ChooseOutcome {
        let Some(chosen) = self.index_of(id) else {
            debug!(card = %id, "choose ignored: unknown card");
            return ChooseOutcome::Ignored;
        };
        if self.cards[chosen].is_face_up() || self.cards[chosen].is_matched() {
            trace!(card = %id, "choose ignored: card already up");
            return ChooseOutcome::Ignored;
        }

        let now = self.clock.now();
        let face_up = self.face_up_unmatched();
        let pending = match face_up.as_slice() {
            [] => None,
            [only] => Some(*only),
            leftovers => {
                let mut flipped = SmallVec::new();
                for &i in leftovers {
                    self.cards[i].turn_face_down();
                    flipped.push(self.cards[i].id());
                }
                self.events.push(MatchEvent::FlippedDown { cards: flipped });
                None
            }
        };

        self.cards[chosen].turn_face_up(now);
        self.events.push(MatchEvent::Revealed { card: id });

        let Some(anchor) = pending else {
            trace!(card = %id, "card pending");
            return ChooseOutcome::Pending { card: id };
        };

        let pair = [self.cards[anchor].id(), id];
        if self.cards[anchor].content() == self.cards[chosen].content() {
            self.cards[anchor].mark_matched(now);
            self.cards[chosen].mark_matched(now);
            self.score += 1;
            trace!(first = %pair[0], second = %pair[1], score = self.score, "matched");
            self.events.push(MatchEvent::Matched {
                pair,
                score: self.score,
            });
            if self.is_round_complete() {
                debug!(
                    score = self.score,
                    mismatches = self.mismatch_count,
                    "round complete"
                );
                self.events.push(MatchEvent::RoundComplete {
                    score: self.score,
                    mismatches: self.mismatch_count,
                });
            }
            ChooseOutcome::Matched { pair }
        } else {
            self.mismatch_count += 1;
            trace!(
                first = %pair[0],
                second = %pair[1],
                mismatches = self.mismatch_count,
                "mismatched"
            );
            self.events.push(MatchEvent::Mismatched {
                pair,
                mismatches: self.mismatch_count,
            });
            ChooseOutcome::Mismatched { pair }
        }
    }

    /// Turn a face-up unmatched card back down, resetting its bonus.
    ///
    /// Returns whether the card changed.
    pub fn flip_card_back(&mut self, id: CardId) -> bool {
        let Some(index) = self.index_of(id) else {
            debug!(card = %id, "flip back ignored: unknown card");
            return false;
        };
        let card = &mut self.cards[index];
        if !card.is_face_up() || card.is_matched() {
            return false;
        }
        card.turn_face_down();
        self.events.push(MatchEvent::FlippedDown {
            cards: SmallVec::from_slice(&[id]),
        });
        true
    }

    /// Force every listed card face-down, matched or not.
    ///
    /// Unknown ids are skipped. Returns how many cards changed.
    pub fn flip_cards_down(&mut self, ids: &[CardId]) -> usize {
        let mut flipped: SmallVec<[CardId; 2]> = SmallVec::new();
        for card in self.cards.iter_mut() {
            if card.is_face_up() && ids.contains(&card.id()) {
                card.turn_face_down();
                flipped.push(card.id());
            }
        }
        let count = flipped.len();
        if count > 0 {
            self.events.push(MatchEvent::FlippedDown { cards: flipped });
        }
        count
    }

    /// Reorder the cards. Face-up, matched and score state is untouched.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
        self.events.push(MatchEvent::Shuffled);
    }

    /// Take the events recorded since the last drain.
    ///
    /// The engine never discards events on its own; a host that ignores them
    /// should still drain periodically.
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }

    fn index_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id() == id)
    }

    fn face_up_unmatched(&self) -> SmallVec<[usize; 2]> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_face_up() && !c.is_matched())
            .map(|(i, _)| i)
            .collect()
    }
}
