//! Decision-source capability consumed by the scheduler.

use super::Actor;

/// Decides whether and how an actor takes its turn.
///
/// Implementations come from the surrounding simulation: a human player
/// waiting on keyboard input, a scripted AI, a test stub. The scheduler polls
/// [`ready`](Mind::ready) and, when it returns `true`, calls
/// [`apply_turn`](Mind::apply_turn) exactly once for that turn.
///
/// Minds are shared between actors and their owners, so both methods take
/// `&self`; stateful minds keep their state behind a lock.
pub trait Mind: Send + Sync {
    /// Whether a decision can be produced right now.
    ///
    /// Must be free of side effects: polling repeatedly without an
    /// intervening `apply_turn` returns the same answer.
    fn ready(&self) -> bool;

    /// Consume one decision and apply its effects for `actor`.
    ///
    /// May mutate arbitrary simulation state, including killing other actors
    /// or `actor` itself. Must not call back into the scheduler.
    fn apply_turn(&self, actor: &Actor);
}
