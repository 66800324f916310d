//! Actor records ("meeps") shared between the scheduler and game logic.

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::Mind;
use crate::util::ids::ActorId;

/// Mutable part of an actor.
struct ActorState {
    fatigue: i64,
    overhead: u32,
    has_died: bool,
    mind: Option<Weak<dyn Mind>>,
}

struct ActorCell {
    id: ActorId,
    label: String,
    state: Mutex<ActorState>,
}

/// Shared handle to a schedulable entity.
///
/// Cloning is cheap and every clone refers to the same record, so the
/// scheduler and any game logic that may kill the actor can each hold one.
/// Locks are held only for the duration of a single accessor, never across a
/// call into a [`Mind`].
#[derive(Clone)]
pub struct Actor {
    inner: Arc<ActorCell>,
}

impl Actor {
    /// Create a live actor at fatigue 0 with no mind attached.
    ///
    /// `overhead` is the fatigue charged after each turn; lower overhead means
    /// more frequent turns.
    pub fn new(label: impl Into<String>, overhead: u32) -> Self {
        Self::new_with_fatigue(label, overhead, 0)
    }

    /// Create a live actor that starts `fatigue` turns away from its first
    /// turn.
    ///
    /// Starting fatigue can only be chosen here: once an actor is registered
    /// its fatigue belongs to the scheduler.
    pub fn new_with_fatigue(label: impl Into<String>, overhead: u32, fatigue: i64) -> Self {
        Self {
            inner: Arc::new(ActorCell {
                id: ActorId::new(),
                label: label.into(),
                state: Mutex::new(ActorState {
                    fatigue,
                    overhead,
                    has_died: false,
                    mind: None,
                }),
            }),
        }
    }

    /// Attach `mind` and return the actor.
    #[must_use]
    pub fn with_mind<M: Mind + 'static>(self, mind: &Arc<M>) -> Self {
        self.attach_mind(mind);
        self
    }

    /// Stable identifier.
    pub fn id(&self) -> ActorId {
        self.inner.id
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.inner.label
    }

    /// Turns until due; 0 means due now.
    pub fn fatigue(&self) -> i64 {
        self.inner.state.lock().fatigue
    }

    /// Fatigue charged after each turn.
    pub fn overhead(&self) -> u32 {
        self.inner.state.lock().overhead
    }

    /// Change the overhead charged from the next turn on.
    pub fn set_overhead(&self, overhead: u32) {
        self.inner.state.lock().overhead = overhead;
    }

    /// Whether game logic has marked this actor dead.
    pub fn has_died(&self) -> bool {
        self.inner.state.lock().has_died
    }

    /// Mark the actor dead. The scheduler reclaims it the next time it is
    /// encountered.
    pub fn kill(&self) {
        self.inner.state.lock().has_died = true;
    }

    /// Clear the death flag. A reclaimed actor must be re-added to be
    /// scheduled again.
    pub fn revive(&self) {
        self.inner.state.lock().has_died = false;
    }

    /// Attach a mind without taking ownership of it.
    ///
    /// Only a weak reference is kept: once every strong `Arc` to the mind is
    /// dropped the actor behaves as if no mind were attached.
    pub fn attach_mind<M: Mind + 'static>(&self, mind: &Arc<M>) {
        let weak: Weak<M> = Arc::downgrade(mind);
        let weak: Weak<dyn Mind> = weak;
        self.inner.state.lock().mind = Some(weak);
    }

    /// Attach an already type-erased mind.
    pub fn attach_dyn_mind(&self, mind: &Arc<dyn Mind>) {
        self.inner.state.lock().mind = Some(Arc::downgrade(mind));
    }

    /// Detach the current mind, if any.
    pub fn detach_mind(&self) {
        self.inner.state.lock().mind = None;
    }

    /// The attached mind, if one is attached and still alive.
    pub fn mind(&self) -> Option<Arc<dyn Mind>> {
        self.inner.state.lock().mind.as_ref().and_then(Weak::upgrade)
    }

    /// Whether `self` and `other` are handles to the same record.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Point-in-time copy of the actor's fields.
    pub fn snapshot(&self) -> ActorSnapshot {
        let state = self.inner.state.lock();
        ActorSnapshot {
            id: self.inner.id,
            label: self.inner.label.clone(),
            fatigue: state.fatigue,
            overhead: state.overhead,
            has_died: state.has_died,
            has_mind: state.mind.as_ref().is_some_and(|m| m.strong_count() > 0),
        }
    }

    pub(crate) fn set_fatigue(&self, fatigue: i64) {
        self.inner.state.lock().fatigue = fatigue;
    }

    /// Add the overhead to fatigue after a turn; returns the new fatigue.
    pub(crate) fn charge_overhead(&self) -> i64 {
        let mut state = self.inner.state.lock();
        state.fatigue += i64::from(state.overhead);
        state.fatigue
    }
}

impl fmt::Debug for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("Actor")
            .field("id", &self.inner.id)
            .field("label", &self.inner.label)
            .field("fatigue", &state.fatigue)
            .field("overhead", &state.overhead)
            .field("has_died", &state.has_died)
            .field("has_mind", &state.mind.is_some())
            .finish()
    }
}

/// Serializable view of an actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorSnapshot {
    /// Actor identifier.
    pub id: ActorId,
    /// Display label.
    pub label: String,
    /// Fatigue at the time of the snapshot.
    pub fatigue: i64,
    /// Overhead charged per turn.
    pub overhead: u32,
    /// Death flag.
    pub has_died: bool,
    /// Whether a live mind is attached.
    pub has_mind: bool,
}
