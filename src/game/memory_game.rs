//! The game facade: session, deck building and the active round together.

use std::sync::Arc;

use tracing::{debug, info};

use crate::cards::{Card, CardId};
use crate::core::clock::{SharedClock, SystemClock};
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::rng::GameRng;
use crate::deck::DeckBuilder;
use crate::density::{admissible_pair_count, DeviceCapability, DisplayProfile, FixedPairLimit};
use crate::engine::{ChooseOutcome, MatchEngine, MatchEvent};
use crate::schedule::{DeferredTask, Scheduler, TaskQueue};
use crate::session::{star_rating, Advance, LevelConfig, SessionController, SpecialRule};
use crate::themes::{Theme, ThemeLibrary, ThemeProvider};

/// A playable game: campaign progress plus the round being played.
///
/// Built with `MemoryGameBuilder`. Every mutator is synchronous; timed
/// transitions are handed to the scheduler `S` as `DeferredTask`s and come
/// back through `run_task`.
pub struct MemoryGame<S: Scheduler = TaskQueue> {
    config: GameConfig,
    session: SessionController,
    themes: Box<dyn ThemeProvider>,
    /// Theme of the current round, resolved when it was dealt.
    theme: Theme,
    device_limit: usize,
    deck_builder: DeckBuilder,
    rng: GameRng,
    clock: SharedClock,
    engine: MatchEngine,
    scheduler: S,
}

/// Builder for creating a `MemoryGame`.
pub struct MemoryGameBuilder {
    config: GameConfig,
    themes: Option<Box<dyn ThemeProvider>>,
    device: Option<Box<dyn DeviceCapability>>,
    clock: Option<SharedClock>,
}

impl Default for MemoryGameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            themes: None,
            device: None,
            clock: None,
        }
    }
}

impl MemoryGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Pin the device pair limit, overriding any device capability.
    pub fn device_limit(mut self, limit: usize) -> Self {
        self.config.device_limit = Some(limit);
        self
    }

    pub fn campaign(mut self, levels: Vec<LevelConfig>) -> Self {
        self.config.campaign = Some(levels);
        self
    }

    pub fn themes(mut self, themes: impl ThemeProvider + 'static) -> Self {
        self.themes = Some(Box::new(themes));
        self
    }

    pub fn device(mut self, device: impl DeviceCapability + 'static) -> Self {
        self.device = Some(Box::new(device));
        self
    }

    pub fn clock(mut self, clock: SharedClock) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build with a `TaskQueue` scheduler sharing the game's clock.
    pub fn build(mut self) -> Result<MemoryGame<TaskQueue>> {
        let clock = self
            .clock
            .get_or_insert_with(|| Arc::new(SystemClock) as SharedClock)
            .clone();
        self.build_with_scheduler(TaskQueue::new(clock))
    }

    /// Build with a host-provided scheduler.
    pub fn build_with_scheduler<S: Scheduler>(self, scheduler: S) -> Result<MemoryGame<S>> {
        self.config.validate()?;

        let clock = self
            .clock
            .unwrap_or_else(|| Arc::new(SystemClock) as SharedClock);
        let session = match &self.config.campaign {
            Some(levels) => SessionController::new(levels.clone())?,
            None => SessionController::with_default_campaign(),
        };
        let themes = self
            .themes
            .unwrap_or_else(|| Box::new(ThemeLibrary::new()) as Box<dyn ThemeProvider>);
        let device_limit = match (self.config.device_limit, &self.device) {
            (Some(limit), _) => FixedPairLimit(limit).pair_limit(),
            (None, Some(device)) => device.pair_limit(),
            (None, None) => DisplayProfile::desktop().pair_limit(),
        };
        let mut rng = self
            .config
            .seed
            .map_or_else(GameRng::from_entropy, GameRng::new);

        let mut deck_builder = DeckBuilder::new();
        let (theme, cards) = deal(
            &mut deck_builder,
            session.current_level(),
            themes.as_ref(),
            device_limit,
            &mut rng,
        )?;
        let engine = MatchEngine::new(cards, clock.clone());

        info!(
            seed = rng.seed(),
            device_limit,
            levels = session.total_levels(),
            "game created"
        );

        Ok(MemoryGame {
            config: self.config,
            session,
            themes,
            theme,
            device_limit,
            deck_builder,
            rng,
            clock,
            engine,
            scheduler,
        })
    }
}

/// Resolve the level's theme and deal its deck.
///
/// A failed deal leaves `builder` and `rng` untouched.
fn deal(
    builder: &mut DeckBuilder,
    level: &LevelConfig,
    themes: &dyn ThemeProvider,
    device_limit: usize,
    rng: &mut GameRng,
) -> Result<(Theme, Vec<Card>)> {
    let theme = themes.content_for(level.theme_id());
    let pairs = admissible_pair_count(device_limit, theme.len());
    let cards = builder.build_deck(level, pairs, &theme.content, rng)?;
    Ok((theme.clone(), cards))
}

impl<S: Scheduler> MemoryGame<S> {
    // === Round state ===

    /// Cards in display order.
    pub fn cards(&self) -> &[Card] {
        self.engine.cards()
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.engine.card(id)
    }

    pub fn score(&self) -> u32 {
        self.engine.score()
    }

    pub fn mismatch_count(&self) -> u32 {
        self.engine.mismatch_count()
    }

    pub fn pending_card(&self) -> Option<CardId> {
        self.engine.pending_card()
    }

    /// The round is finished when every card is matched.
    pub fn is_game_over(&self) -> bool {
        self.engine.is_round_complete()
    }

    /// Stars the round would earn if it ended now.
    pub fn projected_stars(&self) -> u32 {
        star_rating(self.engine.mismatch_count())
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Take the round's events. The log grows until drained, so hosts
    /// should drain it on every update.
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        self.engine.drain_events()
    }

    // === Campaign state ===

    pub fn level(&self) -> &LevelConfig {
        self.session.current_level()
    }

    pub fn level_title(&self) -> &str {
        self.level().title()
    }

    pub fn level_number(&self) -> u32 {
        self.level().level_number()
    }

    pub fn has_rule(&self, rule: SpecialRule) -> bool {
        self.level().has_rule(rule)
    }

    /// Theme of the current round (after fallback).
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn total_levels(&self) -> usize {
        self.session.total_levels()
    }

    pub fn is_on_final_level(&self) -> bool {
        self.session.is_on_final_level()
    }

    pub fn earned_stars(&self) -> u32 {
        self.session.earned_stars()
    }

    /// Position of the current level in the campaign, counting it as reached.
    pub fn progress_fraction(&self) -> f64 {
        let total = self.total_levels();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.level_number()) / total as f64
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    pub fn device_limit(&self) -> usize {
        self.device_limit
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn clock(&self) -> &SharedClock {
        &self.clock
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    // === Actions ===

    /// Choose a card, scheduling its bonus timeout or the matched pair's
    /// flip-down.
    pub fn choose(&mut self, id: CardId) -> ChooseOutcome {
        let outcome = self.engine.choose(id);
        match outcome {
            ChooseOutcome::Ignored => {}
            ChooseOutcome::Pending { card } => self.schedule_timeout(card),
            ChooseOutcome::Mismatched { pair } => self.schedule_timeout(pair[1]),
            ChooseOutcome::Matched { .. } => self.schedule_matched_flip_down(),
        }
        outcome
    }

    pub fn flip_card_back(&mut self, id: CardId) -> bool {
        self.engine.flip_card_back(id)
    }

    pub fn shuffle(&mut self) {
        self.engine.shuffle(&mut self.rng);
    }

    /// Apply a deferred task if it still applies.
    ///
    /// Bonus timeouts act only on cards that are still face-up, unmatched and
    /// out of time. Returns whether anything changed.
    pub fn run_task(&mut self, task: DeferredTask) -> bool {
        match task {
            DeferredTask::FlipCardsDown(ids) => self.engine.flip_cards_down(&ids) > 0,
            DeferredTask::FlipCardBack(id) => {
                let now = self.engine.now();
                let expired = self.engine.card(id).is_some_and(|c| c.is_expired(now));
                if expired {
                    self.engine.flip_card_back(id)
                } else {
                    debug!(card = %id, "stale bonus timeout skipped");
                    false
                }
            }
        }
    }

    /// Flip back every card whose bonus ran out, for hosts that poll instead
    /// of scheduling. Returns how many cards were flipped.
    pub fn flip_back_expired(&mut self) -> usize {
        let expired = self.engine.expired_cards();
        expired
            .into_iter()
            .filter(|&id| self.engine.flip_card_back(id))
            .count()
    }

    /// Deal a fresh deck for the current level.
    pub fn restart_level(&mut self) -> Result<()> {
        self.commit_level(self.session.clone())
    }

    /// Back to level 1 with no stars, on a fresh deck.
    ///
    /// If the deal fails the game is left as it was.
    pub fn restart_journey(&mut self) -> Result<()> {
        let mut session = self.session.clone();
        session.restart_journey();
        self.commit_level(session)
    }

    /// Bank this round's stars and deal the next level if there is one.
    ///
    /// If the next deal fails, no stars are banked and the current round is
    /// kept, so the call can be retried.
    pub fn advance_level(&mut self) -> Result<Advance> {
        let mut session = self.session.clone();
        let advance = session.advance(self.engine.mismatch_count());
        if advance.moved() {
            self.commit_level(session)?;
        } else {
            self.session = session;
        }
        Ok(advance)
    }

    /// Deal for `session`'s current level, then install the session and the
    /// new round together.
    fn commit_level(&mut self, session: SessionController) -> Result<()> {
        let (theme, cards) = deal(
            &mut self.deck_builder,
            session.current_level(),
            self.themes.as_ref(),
            self.device_limit,
            &mut self.rng,
        )?;
        self.session = session;
        self.theme = theme;
        self.engine = MatchEngine::new(cards, self.clock.clone());
        Ok(())
    }

    fn schedule_timeout(&mut self, id: CardId) {
        if let Some(remaining) = self.engine.bonus_time_remaining(id) {
            self.scheduler.after(remaining, DeferredTask::FlipCardBack(id));
        }
    }

    fn schedule_matched_flip_down(&mut self) {
        let ids = self.engine.matched_face_up_cards();
        if ids.is_empty() {
            return;
        }
        self.scheduler
            .after(self.config.match_flip_delay, DeferredTask::FlipCardsDown(ids.to_vec()));
    }
}

impl MemoryGame<TaskQueue> {
    /// Run every task that has fallen due. Returns how many changed state.
    pub fn run_due_tasks(&mut self) -> usize {
        let due = self.scheduler.drain_due();
        due.into_iter()
            .map(|task| self.run_task(task))
            .filter(|&changed| changed)
            .count()
    }
}
