//! Deferred tasks: the timed half of the game.
//!
//! Two transitions happen after a delay: a matched pair is flipped down once
//! its display window ends, and an unmatched card is flipped back when its
//! bonus runs out. The engine never waits for either. `MemoryGame` hands a
//! `DeferredTask` to a `Scheduler`, and the host feeds due tasks back through
//! `MemoryGame::run_task`, which re-checks card state before acting.
//!
//! `TaskQueue` is an in-memory scheduler for hosts that poll (a render loop,
//! a terminal UI, tests).

use std::time::{Duration, Instant};

use tracing::trace;

use crate::cards::CardId;
use crate::core::clock::SharedClock;

/// Work to apply to the game later.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeferredTask {
    /// End of a matched pair's display window.
    FlipCardsDown(Vec<CardId>),
    /// End of a card's bonus window.
    FlipCardBack(CardId),
}

/// One-shot, fire-and-forget delayed delivery.
pub trait Scheduler {
    fn after(&mut self, delay: Duration, task: DeferredTask);
}

#[derive(Clone, Debug)]
struct Scheduled {
    due: Instant,
    seq: u64,
    task: DeferredTask,
}

/// Polled scheduler backed by a `Clock`.
///
/// ```
/// use std::time::Duration;
/// use memory_match::cards::CardId;
/// use memory_match::core::ManualClock;
/// use memory_match::schedule::{DeferredTask, Scheduler, TaskQueue};
///
/// let clock = ManualClock::new();
/// let mut queue = TaskQueue::new(clock.shared());
/// queue.after(Duration::from_secs(2), DeferredTask::FlipCardBack(CardId::new(3)));
///
/// assert!(queue.drain_due().is_empty());
/// clock.advance(Duration::from_secs(2));
/// assert_eq!(queue.drain_due(), vec![DeferredTask::FlipCardBack(CardId::new(3))]);
/// ```
#[derive(Debug)]
pub struct TaskQueue {
    clock: SharedClock,
    pending: Vec<Scheduled>,
    next_seq: u64,
}

impl TaskQueue {
    #[must_use]
    pub fn new(clock: SharedClock) -> Self {
        Self {
            clock,
            pending: Vec::new(),
            next_seq: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// When the earliest task falls due.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|s| s.due).min()
    }

    /// Remove and return every task that is due, earliest first.
    ///
    /// Tasks with the same due time come out in scheduling order.
    pub fn drain_due(&mut self) -> Vec<DeferredTask> {
        let now = self.clock.now();
        let (mut due, rest): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.pending).into_iter().partition(|s| s.due <= now);
        self.pending = rest;
        due.sort_by_key(|s| (s.due, s.seq));
        due.into_iter().map(|s| s.task).collect()
    }

    /// Drop every pending task.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl Scheduler for TaskQueue {
    fn after(&mut self, delay: Duration, task: DeferredTask) {
        let due = self.clock.now() + delay;
        trace!(?task, ?delay, "scheduled");
        self.pending.push(Scheduled {
            due,
            seq: self.next_seq,
            task,
        });
        self.next_seq += 1;
    }
}
