//! Error types for scheduler operations.

use thiserror::Error;

use crate::util::ids::ActorId;

/// Errors produced by scheduler components.
///
/// Only protocol misuse is reported here. Dead actors and actors without a
/// mind are part of normal operation and never surface as errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// The actor is already held by the scheduler.
    #[error("actor already scheduled: {0}")]
    DuplicateActor(ActorId),
    /// A paced clock was configured with an unusable duration.
    #[error("invalid pace: {0}")]
    InvalidPace(String),
    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
