//! Core scheduling abstractions: actors, minds, clock strategies and the
//! initiative scheduler.

pub mod actor;
pub mod audit;
pub mod clock;
pub mod error;
pub mod initiative;
pub mod mind;
pub mod pending;
pub mod snapshot;

pub use actor::{Actor, ActorSnapshot};
pub use audit::{
    build_audit_event, AuditAction, AuditEvent, AuditSink, InMemoryAuditSink, SharedAuditSink,
    TracingAuditSink,
};
pub use clock::{Pacing, Sleeper, ThreadSleeper};
pub use error::{AppResult, SchedulerError};
pub use initiative::Initiative;
pub use mind::Mind;
pub use pending::PendingQueue;
pub use snapshot::{InitiativeSnapshot, InitiativeStats};
