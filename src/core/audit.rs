//! Audit sink implementations.
//!
//! Every registration, turn, suspension and reclamation can be recorded as an
//! [`AuditEvent`]. Sinks are optional; the scheduler works without one.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::core::Actor;
use crate::util::clock::now_ms;
use crate::util::ids::ActorId;

/// What happened to an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// Registered via `add`.
    Added,
    /// Took a turn.
    Acted,
    /// Its mind was not ready; the round is suspended on it.
    Suspended,
    /// Found dead and dropped from the scheduler.
    Reaped,
    /// Became due with no live mind attached.
    Orphaned,
}

/// Audit event structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Round in which the event happened (0 before the first round).
    pub round: u64,
    /// Actor concerned.
    pub actor_id: ActorId,
    /// Actor label at the time of the event.
    pub label: String,
    /// Action taken.
    pub action: AuditAction,
    /// Timestamp milliseconds.
    pub created_at_ms: u128,
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event.
    fn record(&mut self, event: AuditEvent);
}

/// In-memory audit sink for testing and dev. Oldest events are evicted once
/// `max_events` is reached.
#[derive(Debug)]
pub struct InMemoryAuditSink {
    events: VecDeque<AuditEvent>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events.min(1024)),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.iter().cloned().collect()
    }

    /// Stored events with the given action.
    pub fn events_with(&self, action: AuditAction) -> Vec<AuditEvent> {
        self.events
            .iter()
            .filter(|e| e.action == action)
            .cloned()
            .collect()
    }

    /// Drop all stored events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: AuditEvent) {
        if self.max_events == 0 {
            return;
        }
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

/// In-memory sink that stays readable after being handed to a scheduler.
pub type SharedAuditSink = Arc<Mutex<InMemoryAuditSink>>;

impl AuditSink for SharedAuditSink {
    fn record(&mut self, event: AuditEvent) {
        self.lock().record(event);
    }
}

/// Emits each event as a `tracing` event instead of storing it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&mut self, event: AuditEvent) {
        tracing::info!(
            round = event.round,
            actor = %event.actor_id,
            label = %event.label,
            action = ?event.action,
            "initiative audit"
        );
    }
}

/// Helper to build an audit event for `actor`.
pub fn build_audit_event(round: u64, actor: &Actor, action: AuditAction) -> AuditEvent {
    AuditEvent {
        round,
        actor_id: actor.id(),
        label: actor.label().to_string(),
        action,
        created_at_ms: now_ms(),
    }
}
