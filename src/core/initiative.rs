//! Fatigue-based turn scheduler.
//!
//! Each actor carries a fatigue (turns until due) and an overhead (fatigue
//! charged after acting). A round selects every actor at fatigue 0, lets each
//! of them act in order, counts everyone else one step closer to their next
//! turn, and re-inserts the actors that acted at the back of their new rung.
//! Fast actors therefore act proportionally more often and equal-speed actors
//! alternate fairly.
//!
//! A round can suspend: if the next due actor's mind is not ready, `advance`
//! returns early and the following call resumes with that same actor.

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::time::Duration;

use tracing::{debug, info, trace, warn};

use super::{
    build_audit_event, Actor, AuditAction, AuditSink, InitiativeSnapshot, InitiativeStats,
    Pacing, PendingQueue, SchedulerError, Sleeper, ThreadSleeper,
};
use crate::config::OrphanPolicy;
use crate::util::ids::ActorId;

/// Turn scheduler over a set of actors.
///
/// Between calls to [`advance`](Self::advance) every registered actor lives in
/// exactly one of three containers: `pending` (sorted by fatigue), `due`
/// (selected for the current round) or `processed` (acted this round, awaiting
/// re-insertion). `due` and `processed` are only non-empty while a round is
/// suspended.
pub struct Initiative<S = ThreadSleeper> {
    pacing: Pacing,
    orphan_policy: OrphanPolicy,
    sleeper: S,
    pending: PendingQueue,
    due: VecDeque<Actor>,
    processed: VecDeque<Actor>,
    members: HashSet<ActorId>,
    round: u64,
    stats: InitiativeStats,
    audit: Option<Box<dyn AuditSink>>,
}

impl Initiative<ThreadSleeper> {
    /// Create a scheduler that sleeps on the current thread when paced.
    pub fn new(pacing: Pacing) -> Self {
        Self::with_sleeper(pacing, ThreadSleeper)
    }

    /// Turn-based scheduler: time skips straight to the next due actor.
    pub fn instant() -> Self {
        Self::new(Pacing::Instant)
    }

    /// Scheduler sleeping `millis` per round; 0 selects instant pacing.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::InvalidPace`] for a negative value.
    pub fn from_millis(millis: i64) -> Result<Self, SchedulerError> {
        Ok(Self::new(Pacing::from_millis(millis)?))
    }
}

impl<S: Sleeper> Initiative<S> {
    /// Create a scheduler with a custom real-time wait primitive.
    pub fn with_sleeper(pacing: Pacing, sleeper: S) -> Self {
        Self {
            pacing,
            orphan_policy: OrphanPolicy::default(),
            sleeper,
            pending: PendingQueue::new(),
            due: VecDeque::new(),
            processed: VecDeque::new(),
            members: HashSet::new(),
            round: 0,
            stats: InitiativeStats::default(),
            audit: None,
        }
    }

    /// Set the handling of due actors without a mind.
    #[must_use]
    pub fn with_orphan_policy(mut self, policy: OrphanPolicy) -> Self {
        self.orphan_policy = policy;
        self
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Register `actor`. It goes last on the rung matching its fatigue.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::DuplicateActor`] if the actor is already held
    /// anywhere in the scheduler.
    pub fn add(&mut self, actor: Actor) -> Result<(), SchedulerError> {
        if !self.members.insert(actor.id()) {
            return Err(SchedulerError::DuplicateActor(actor.id()));
        }
        info!(
            actor = %actor.id(),
            label = actor.label(),
            fatigue = actor.fatigue(),
            overhead = actor.overhead(),
            "actor added"
        );
        self.stats.added += 1;
        self.record(&actor, AuditAction::Added);
        self.pending.insert(actor);
        Ok(())
    }

    /// Run one scheduling round, or resume a suspended one.
    ///
    /// Returns `true` if at least one actor acted during this call. Returns
    /// `false` without touching any state once no actors remain.
    ///
    /// Under [`Pacing::Paced`] a new round blocks the calling thread on the
    /// sleeper. Async callers should wait on their own clock and use
    /// [`Initiative::advance_waited`] instead.
    pub fn advance(&mut self) -> bool {
        self.step(true)
    }

    /// Like [`Initiative::advance`], but the real-time wait of a paced round
    /// has already elapsed on the caller's clock, so the sleeper is skipped.
    pub fn advance_waited(&mut self) -> bool {
        self.step(false)
    }

    fn step(&mut self, wait: bool) -> bool {
        if self.pending.is_empty() && self.due.is_empty() {
            return false;
        }

        if self.due.is_empty() {
            self.round += 1;
            self.stats.rounds += 1;
            let sleeper = wait.then_some(&self.sleeper);
            let shift = self.pacing.synchronise(&mut self.pending, sleeper);
            while let Some(actor) = self.pending.pop_due() {
                self.due.push_back(actor);
            }
            debug!(round = self.round, shift, due = self.due.len(), "round selected");
        }

        let mut activity = false;
        while let Some(actor) = self.due.pop_front() {
            if actor.has_died() {
                self.reap(&actor);
                continue;
            }
            let Some(mind) = actor.mind() else {
                self.orphan(actor);
                continue;
            };
            if !mind.ready() {
                trace!(round = self.round, label = actor.label(), "waiting on mind");
                self.stats.suspensions += 1;
                self.record(&actor, AuditAction::Suspended);
                self.due.push_front(actor);
                return activity;
            }
            mind.apply_turn(&actor);
            activity = true;
            let fatigue = actor.charge_overhead();
            trace!(round = self.round, label = actor.label(), fatigue, "turn applied");
            self.stats.turns += 1;
            self.record(&actor, AuditAction::Acted);
            self.processed.push_back(actor);
        }

        self.pending.shift(1);

        while let Some(actor) = self.processed.pop_front() {
            if actor.has_died() {
                self.reap(&actor);
                continue;
            }
            self.pending.insert(actor);
        }
        activity
    }

    /// Whether no actors remain to schedule.
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty() && self.due.is_empty() && self.processed.is_empty()
    }

    /// Number of actors held across all containers.
    pub fn len(&self) -> usize {
        self.pending.len() + self.due.len() + self.processed.len()
    }

    /// Whether the scheduler holds no actors.
    pub fn is_empty(&self) -> bool {
        self.is_idle()
    }

    /// Whether `actor` is held anywhere in the scheduler.
    pub fn contains(&self, actor: &Actor) -> bool {
        self.members.contains(&actor.id())
    }

    /// Whether the current round is suspended on a mind that was not ready.
    pub fn is_suspended(&self) -> bool {
        !self.due.is_empty()
    }

    /// Current round number (0 before the first round).
    pub const fn round(&self) -> u64 {
        self.round
    }

    /// Clock strategy in use.
    pub const fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// Real-time wait the next [`Initiative::advance`] spends before it
    /// selects a new round. `None` when instant, idle, or resuming a
    /// suspended round.
    pub fn round_wait(&self) -> Option<Duration> {
        if self.due.is_empty() && !self.pending.is_empty() {
            self.pacing.wait()
        } else {
            None
        }
    }

    /// Running counters.
    pub const fn stats(&self) -> InitiativeStats {
        self.stats
    }

    /// Number of not-yet-due actors.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Number of actors selected but not yet dispatched.
    pub fn due_len(&self) -> usize {
        self.due.len()
    }

    /// Number of actors awaiting re-insertion.
    pub fn processed_len(&self) -> usize {
        self.processed.len()
    }

    /// Not-yet-due actors in scheduling order.
    pub fn pending(&self) -> impl Iterator<Item = &Actor> {
        self.pending.iter()
    }

    /// Actors selected for the current round, next to act first.
    pub fn due(&self) -> impl Iterator<Item = &Actor> {
        self.due.iter()
    }

    /// Actors that acted this round and await re-insertion.
    pub fn processed(&self) -> impl Iterator<Item = &Actor> {
        self.processed.iter()
    }

    /// Copy of every container's contents.
    pub fn snapshot(&self) -> InitiativeSnapshot {
        InitiativeSnapshot {
            round: self.round,
            pending: self.pending.iter().map(Actor::snapshot).collect(),
            due: self.due.iter().map(Actor::snapshot).collect(),
            processed: self.processed.iter().map(Actor::snapshot).collect(),
            stats: self.stats,
        }
    }

    fn reap(&mut self, actor: &Actor) {
        trace!(round = self.round, label = actor.label(), "reaping dead actor");
        self.members.remove(&actor.id());
        self.stats.reaped += 1;
        self.record(actor, AuditAction::Reaped);
    }

    fn orphan(&mut self, actor: Actor) {
        warn!(
            round = self.round,
            actor = %actor.id(),
            label = actor.label(),
            policy = ?self.orphan_policy,
            "due actor has no mind"
        );
        self.stats.orphaned += 1;
        self.record(&actor, AuditAction::Orphaned);
        match self.orphan_policy {
            OrphanPolicy::Drop => {
                self.members.remove(&actor.id());
            }
            OrphanPolicy::Requeue => {
                actor.charge_overhead();
                self.processed.push_back(actor);
            }
        }
    }

    fn record(&mut self, actor: &Actor, action: AuditAction) {
        if let Some(sink) = self.audit.as_mut() {
            sink.record(build_audit_event(self.round, actor, action));
        }
    }
}

impl<S> fmt::Display for Initiative<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  meep   fatigue")?;
        writeln!(f, "  ==============")?;
        if self.pending.is_empty() {
            writeln!(f, "  [none]")?;
        }
        for actor in self.pending.iter() {
            writeln!(
                f,
                "  {}({:>2})  {}",
                actor.label(),
                actor.overhead(),
                actor.fatigue()
            )?;
        }
        writeln!(f, "  ==============")?;
        write!(f, ".")
    }
}

impl<S> fmt::Debug for Initiative<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Initiative")
            .field("pacing", &self.pacing)
            .field("orphan_policy", &self.orphan_policy)
            .field("round", &self.round)
            .field("pending", &self.pending)
            .field("due", &self.due)
            .field("processed", &self.processed)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
