//! Match engine integration tests.
//!
//! These tests verify the round state machine:
//! - Choosing, matching and mismatching
//! - Leftover face-up cards after a mismatch
//! - Bonus-time freezing and resetting
//! - Explicit flip-down paths

use std::time::Duration;

use memory_match::cards::{Card, CardId};
use memory_match::core::{GameRng, ManualClock};
use memory_match::engine::{ChooseOutcome, MatchEngine, MatchEvent};

fn id(n: u32) -> CardId {
    CardId::new(n)
}

/// Cards with ids 0.. in the given order.
fn round(contents: &[&str], clock: &ManualClock) -> MatchEngine {
    let cards = contents
        .iter()
        .enumerate()
        .map(|(i, c)| Card::new(id(i as u32), *c, Duration::from_secs(8)))
        .collect();
    MatchEngine::new(cards, clock.shared())
}

fn face_up(engine: &MatchEngine, n: u32) -> bool {
    engine.card(id(n)).unwrap().is_face_up()
}

/// The car/rocket walkthrough.
#[test]
fn test_car_rocket_scenario() {
    let clock = ManualClock::new();
    let mut engine = round(&["car", "car", "rocket", "rocket"], &clock);

    assert_eq!(engine.choose(id(0)), ChooseOutcome::Pending { card: id(0) });
    assert!(face_up(&engine, 0));
    assert_eq!(engine.mismatch_count(), 0);

    assert_eq!(engine.choose(id(2)), ChooseOutcome::Mismatched { pair: [id(0), id(2)] });
    assert_eq!(engine.mismatch_count(), 1);
    assert!(face_up(&engine, 0));
    assert!(face_up(&engine, 2));
    assert_eq!(engine.pending_card(), None);

    // Two leftovers are up: they go down and card 1 becomes pending.
    assert_eq!(engine.choose(id(1)), ChooseOutcome::Pending { card: id(1) });
    assert!(!face_up(&engine, 0));
    assert!(!face_up(&engine, 2));
    assert_eq!(engine.pending_card(), Some(id(1)));

    assert_eq!(engine.choose(id(0)), ChooseOutcome::Matched { pair: [id(1), id(0)] });
    assert_eq!(engine.score(), 1);
    assert_eq!(engine.mismatch_count(), 1);
}

/// After a mismatch, flipping one card back leaves the other as pending.
#[test]
fn test_single_leftover_becomes_pending() {
    let clock = ManualClock::new();
    let mut engine = round(&["car", "car", "rocket", "rocket"], &clock);

    engine.choose(id(0));
    engine.choose(id(2));
    assert!(engine.flip_card_back(id(2)));
    assert_eq!(engine.pending_card(), Some(id(0)));

    assert_eq!(engine.choose(id(1)), ChooseOutcome::Matched { pair: [id(0), id(1)] });
}

#[test]
fn test_choose_is_idempotent_on_face_up_card() {
    let clock = ManualClock::new();
    let mut engine = round(&["car", "car", "rocket", "rocket"], &clock);

    engine.choose(id(0));
    let before: Vec<Card> = engine.cards().to_vec();
    engine.drain_events();

    assert!(engine.choose(id(0)).is_ignored());
    assert_eq!(engine.cards(), before.as_slice());
    assert!(engine.drain_events().is_empty());
}

#[test]
fn test_choose_is_idempotent_on_matched_card() {
    let clock = ManualClock::new();
    let mut engine = round(&["car", "car", "rocket", "rocket"], &clock);

    engine.choose(id(0));
    engine.choose(id(1));
    engine.flip_cards_down(&[id(0), id(1)]);

    assert!(engine.choose(id(0)).is_ignored());
    assert!(!face_up(&engine, 0));
    assert_eq!(engine.score(), 1);
}

#[test]
fn test_round_completes_and_stays_complete() {
    let clock = ManualClock::new();
    let mut engine = round(&["car", "rocket", "car", "rocket"], &clock);

    engine.choose(id(0));
    engine.choose(id(2));
    assert!(!engine.is_round_complete());
    engine.choose(id(1));
    engine.choose(id(3));
    assert!(engine.is_round_complete());

    engine.flip_cards_down(&[id(0), id(1), id(2), id(3)]);
    let mut rng = GameRng::new(5);
    engine.shuffle(&mut rng);
    assert!(engine.is_round_complete());

    let events = engine.drain_events();
    assert!(events.contains(&MatchEvent::RoundComplete { score: 2, mismatches: 0 }));
}

#[test]
fn test_matched_bonus_is_frozen() {
    let clock = ManualClock::new();
    let mut engine = round(&["car", "car"], &clock);

    engine.choose(id(0));
    clock.advance(Duration::from_secs(3));
    engine.choose(id(1));

    clock.advance(Duration::from_secs(30));
    assert_eq!(engine.bonus_time_remaining(id(0)), Some(Duration::from_secs(5)));
    assert_eq!(engine.bonus_time_remaining(id(1)), Some(Duration::from_secs(8)));

    let now = engine.now();
    assert!(engine.card(id(0)).unwrap().has_earned_bonus(now));
}

#[test]
fn test_flip_back_resets_bonus() {
    let clock = ManualClock::new();
    let mut engine = round(&["car", "car", "rocket", "rocket"], &clock);

    engine.choose(id(0));
    clock.advance(Duration::from_secs(6));
    assert_eq!(engine.bonus_time_remaining(id(0)), Some(Duration::from_secs(2)));

    assert!(engine.flip_card_back(id(0)));
    assert_eq!(engine.bonus_time_remaining(id(0)), Some(Duration::from_secs(8)));

    // The next reveal starts from a full window.
    engine.choose(id(0));
    clock.advance(Duration::from_secs(1));
    assert_eq!(engine.bonus_time_remaining(id(0)), Some(Duration::from_secs(7)));
}

#[test]
fn test_flip_card_back_ignores_matched_and_face_down() {
    let clock = ManualClock::new();
    let mut engine = round(&["car", "car", "rocket", "rocket"], &clock);

    assert!(!engine.flip_card_back(id(2)));

    engine.choose(id(0));
    engine.choose(id(1));
    assert!(!engine.flip_card_back(id(0)));
    assert!(face_up(&engine, 0));
}

#[test]
fn test_flip_cards_down_forces_matched_cards() {
    let clock = ManualClock::new();
    let mut engine = round(&["car", "car", "rocket", "rocket"], &clock);

    engine.choose(id(0));
    engine.choose(id(1));
    assert_eq!(engine.matched_face_up_cards().as_slice(), &[id(0), id(1)]);

    assert_eq!(engine.flip_cards_down(&[id(0), id(1), id(42)]), 2);
    assert!(!face_up(&engine, 0));
    assert!(engine.card(id(0)).unwrap().is_matched());
    assert!(engine.matched_face_up_cards().is_empty());

    // Already down: nothing changes.
    assert_eq!(engine.flip_cards_down(&[id(0), id(1)]), 0);
}

#[test]
fn test_flip_cards_down_resets_unmatched_bonus() {
    let clock = ManualClock::new();
    let mut engine = round(&["car", "car"], &clock);

    engine.choose(id(0));
    clock.advance(Duration::from_secs(4));
    engine.flip_cards_down(&[id(0)]);

    assert_eq!(engine.bonus_time_remaining(id(0)), Some(Duration::from_secs(8)));
}

#[test]
fn test_shuffle_preserves_state() {
    let clock = ManualClock::new();
    let contents = ["a", "b", "c", "d", "e", "f", "a", "b", "c", "d", "e", "f"];
    let mut engine = round(&contents, &clock);

    engine.choose(id(0));
    engine.choose(id(6));
    engine.choose(id(1));
    let mut before: Vec<Card> = engine.cards().to_vec();

    let mut rng = GameRng::new(11);
    engine.shuffle(&mut rng);

    let order_before: Vec<CardId> = before.iter().map(Card::id).collect();
    let order_after: Vec<CardId> = engine.cards().iter().map(Card::id).collect();
    assert_ne!(order_before, order_after);

    let mut after: Vec<Card> = engine.cards().to_vec();
    before.sort_by_key(Card::id);
    after.sort_by_key(Card::id);
    assert_eq!(before, after);
    assert_eq!(engine.score(), 1);
    assert_eq!(engine.pending_card(), Some(id(1)));
}

#[test]
fn test_stale_ids_are_ignored() {
    let clock = ManualClock::new();
    let mut engine = round(&["car", "car"], &clock);

    assert!(engine.choose(id(7)).is_ignored());
    assert!(engine.card(id(7)).is_none());
    assert_eq!(engine.bonus_time_remaining(id(7)), None);
    assert!(engine.cards().iter().all(|c| !c.is_face_up()));
}

#[test]
fn test_mismatch_events() {
    let clock = ManualClock::new();
    let mut engine = round(&["car", "rocket", "car", "rocket"], &clock);

    engine.choose(id(0));
    engine.choose(id(1));
    engine.choose(id(2));

    assert_eq!(
        engine.drain_events(),
        vec![
            MatchEvent::Revealed { card: id(0) },
            MatchEvent::Revealed { card: id(1) },
            MatchEvent::Mismatched { pair: [id(0), id(1)], mismatches: 1 },
            MatchEvent::FlippedDown { cards: [id(0), id(1)].into_iter().collect() },
            MatchEvent::Revealed { card: id(2) },
        ]
    );
}
