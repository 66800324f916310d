//! Ordered collection of actors that are not yet due.

use std::collections::BTreeMap;

use super::Actor;

/// Ordering key: fatigue first, then arrival order within a rung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct RungKey {
    fatigue: i64,
    arrival: u64,
}

/// Actors sorted ascending by fatigue, FIFO within equal fatigue.
///
/// Every insertion takes a fresh arrival number, so an actor always lands
/// last on its rung. This is what keeps equal-speed actors round-robin.
#[derive(Debug, Default)]
pub struct PendingQueue {
    rungs: BTreeMap<RungKey, Actor>,
    next_arrival: u64,
}

impl PendingQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `actor` at the back of the rung matching its fatigue.
    pub fn insert(&mut self, actor: Actor) {
        let key = RungKey {
            fatigue: actor.fatigue(),
            arrival: self.next_arrival,
        };
        self.next_arrival += 1;
        self.rungs.insert(key, actor);
    }

    /// Fatigue at the front, if any.
    pub fn front_fatigue(&self) -> Option<i64> {
        self.rungs.first_key_value().map(|(key, _)| key.fatigue)
    }

    /// Remove and return the front actor if it is due (fatigue at or below 0).
    pub fn pop_due(&mut self) -> Option<Actor> {
        if self.front_fatigue()? > 0 {
            return None;
        }
        self.rungs.pop_first().map(|(_, actor)| actor)
    }

    /// Subtract `delta` from every actor's fatigue. Relative order is kept.
    pub fn shift(&mut self, delta: i64) {
        if delta == 0 {
            return;
        }
        self.rungs = std::mem::take(&mut self.rungs)
            .into_iter()
            .map(|(key, actor)| {
                let fatigue = key.fatigue - delta;
                actor.set_fatigue(fatigue);
                (RungKey { fatigue, ..key }, actor)
            })
            .collect();
    }

    /// Shift time so the front actor sits at fatigue 0; returns the shift.
    pub fn rebase_to_zero(&mut self) -> i64 {
        let shift = self.front_fatigue().unwrap_or(0);
        self.shift(shift);
        shift
    }

    /// Number of actors held.
    pub fn len(&self) -> usize {
        self.rungs.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.rungs.is_empty()
    }

    /// Actors in scheduling order.
    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.rungs.values()
    }
}
