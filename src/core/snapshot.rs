//! Serializable views of scheduler state.

use serde::{Deserialize, Serialize};

use super::ActorSnapshot;

/// Running counters kept by the scheduler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitiativeStats {
    /// Rounds started (selection passes).
    pub rounds: u64,
    /// Turns applied.
    pub turns: u64,
    /// Times a round suspended on a mind that was not ready.
    pub suspensions: u64,
    /// Dead actors reclaimed.
    pub reaped: u64,
    /// Due actors found without a live mind.
    pub orphaned: u64,
    /// Successful registrations.
    pub added: u64,
}

/// Contents of every scheduler container, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitiativeSnapshot {
    /// Current round number.
    pub round: u64,
    /// Not-yet-due actors, ascending by fatigue.
    pub pending: Vec<ActorSnapshot>,
    /// Actors selected for the current round but not yet dispatched.
    pub due: Vec<ActorSnapshot>,
    /// Actors that acted this round and await re-insertion.
    pub processed: Vec<ActorSnapshot>,
    /// Counters at the time of the snapshot.
    pub stats: InitiativeStats,
}
