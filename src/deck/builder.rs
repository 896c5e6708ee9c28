//! Deck construction.
//!
//! A deck for `n` pairs is built in two independent shuffles:
//! 1. Selection: shuffle the theme's tokens and keep the first `n`.
//! 2. Position: two cards per token, then shuffle the whole deck.
//!
//! Every build forks the caller's RNG, so replaying a level deals a new deck.

use tracing::info;

use crate::cards::{Card, CardId};
use crate::core::error::{MatchError, Result};
use crate::core::rng::GameRng;
use crate::session::LevelConfig;

/// Deals decks and hands out card ids.
///
/// Ids keep increasing across builds, so an id from an earlier round never
/// names a card in a later one.
#[derive(Clone, Debug, Default)]
pub struct DeckBuilder {
    next_id: u32,
}

impl DeckBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id this builder will assign.
    #[must_use]
    pub fn next_id(&self) -> CardId {
        CardId::new(self.next_id)
    }

    fn alloc_id(&mut self) -> CardId {
        let id = CardId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Build `2 * pair_count` face-down cards for `level` from `content`.
    ///
    /// Fails when `pair_count` is zero or `content` holds fewer than
    /// `pair_count` tokens.
    pub fn build_deck(
        &mut self,
        level: &LevelConfig,
        pair_count: usize,
        content: &[String],
        rng: &mut GameRng,
    ) -> Result<Vec<Card>> {
        if pair_count == 0 {
            return Err(MatchError::InvalidPairCount);
        }
        if content.len() < pair_count {
            return Err(MatchError::InsufficientContent {
                theme: level.theme_id(),
                requested: pair_count,
                available: content.len(),
            });
        }

        let deal = rng.fork();
        let mut selection = deal.for_context("selection");
        let mut position = deal.for_context("position");

        let mut tokens: Vec<&String> = content.iter().collect();
        selection.shuffle(&mut tokens);

        let mut cards = Vec::with_capacity(pair_count * 2);
        for token in tokens.into_iter().take(pair_count) {
            for _ in 0..2 {
                let id = self.alloc_id();
                cards.push(Card::new(id, token.as_str(), level.bonus_time_limit()));
            }
        }
        position.shuffle(&mut cards);

        info!(
            level = level.level_number(),
            theme = %level.theme_id(),
            pairs = pair_count,
            "dealt deck"
        );
        Ok(cards)
    }
}
