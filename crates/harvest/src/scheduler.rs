//! # Tick Scheduler
//!
//! Cooperative, single-threaded task queue driven by the host's tick.
//!
//! ## Design
//!
//! Tasks are plain values, not closures, so what is pending can be
//! inspected and tested. Two queues:
//! - **next turn**: runs on the very next tick
//! - **timers**: one-shot, due `delay` ticks from now, never cancelled
//!
//! `advance` moves to the next tick and hands back everything that is due,
//! next-turn tasks first, then timers in due order. Tasks queued while the
//! returned batch is being processed wait for the following tick.

use std::collections::BTreeMap;

/// Tick-driven queue of deferred tasks.
#[derive(Clone, Debug)]
pub struct TickScheduler<T> {
    /// Ticks executed so far.
    tick: u64,
    /// Tasks for the next tick.
    next_turn: Vec<T>,
    /// One-shot timers by due tick.
    timers: BTreeMap<u64, Vec<T>>,
}

impl<T> TickScheduler<T> {
    /// Creates a scheduler at tick zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick: 0,
            next_turn: Vec::new(),
            timers: BTreeMap::new(),
        }
    }

    /// Current tick.
    #[must_use]
    pub const fn now(&self) -> u64 {
        self.tick
    }

    /// Queues a task for the next tick.
    pub fn run_next_turn(&mut self, task: T) {
        self.next_turn.push(task);
    }

    /// Queues a task `delay` ticks from now. A zero delay means next tick.
    ///
    /// Returns the tick the task is due on.
    pub fn run_timeout(&mut self, delay: u64, task: T) -> u64 {
        let due = self.tick.saturating_add(delay.max(1));
        self.timers.entry(due).or_default().push(task);
        due
    }

    /// Number of tasks not yet handed out.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.next_turn.len() + self.timers.values().map(Vec::len).sum::<usize>()
    }

    /// Advances one tick and returns every task now due.
    pub fn advance(&mut self) -> Vec<T> {
        self.tick += 1;

        let mut due = std::mem::take(&mut self.next_turn);
        let later = self.timers.split_off(&(self.tick + 1));
        let ready = std::mem::replace(&mut self.timers, later);
        for (_, tasks) in ready {
            due.extend(tasks);
        }
        due
    }
}

impl<T> Default for TickScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
