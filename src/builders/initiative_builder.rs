//! Builder turning an [`InitiativeConfig`] into a ready scheduler.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::InitiativeConfig;
use crate::core::{
    AuditSink, InMemoryAuditSink, Initiative, SchedulerError, SharedAuditSink, Sleeper,
    ThreadSleeper,
};

/// Builds an [`Initiative`] from configuration.
///
/// When `audit_capacity` is non-zero and no explicit sink is supplied, the
/// builder creates a [`SharedAuditSink`] of that capacity; a handle to it is
/// available from [`audit_log`](Self::audit_log) before building.
pub struct InitiativeBuilder<S = ThreadSleeper> {
    config: InitiativeConfig,
    sleeper: S,
    audit: Option<Box<dyn AuditSink>>,
    audit_log: Option<SharedAuditSink>,
}

impl InitiativeBuilder<ThreadSleeper> {
    /// Start from `config` with the thread sleeper.
    pub fn new(config: InitiativeConfig) -> Self {
        let audit_log = (config.audit_capacity > 0)
            .then(|| Arc::new(Mutex::new(InMemoryAuditSink::new(config.audit_capacity))));
        Self {
            config,
            sleeper: ThreadSleeper,
            audit: None,
            audit_log,
        }
    }
}

impl<S: Sleeper> InitiativeBuilder<S> {
    /// Replace the real-time wait primitive.
    pub fn with_sleeper<T: Sleeper>(self, sleeper: T) -> InitiativeBuilder<T> {
        InitiativeBuilder {
            config: self.config,
            sleeper,
            audit: self.audit,
            audit_log: self.audit_log,
        }
    }

    /// Use `audit` instead of the configured in-memory log.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(audit);
        self.audit_log = None;
        self
    }

    /// Configuration being built from.
    pub const fn config(&self) -> &InitiativeConfig {
        &self.config
    }

    /// Handle to the in-memory audit log the built scheduler will write to.
    pub fn audit_log(&self) -> Option<SharedAuditSink> {
        self.audit_log.clone()
    }

    /// Validate the configuration and build the scheduler.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::InvalidPace`] for a negative sleep and
    /// [`SchedulerError::InvalidConfig`] for any other invalid field.
    pub fn build(self) -> Result<Initiative<S>, SchedulerError> {
        let pacing = self.config.pacing()?;
        self.config
            .validate()
            .map_err(SchedulerError::InvalidConfig)?;

        let mut initiative =
            Initiative::with_sleeper(pacing, self.sleeper).with_orphan_policy(self.config.orphan_policy);
        let audit = self
            .audit
            .or_else(|| self.audit_log.map(|log| Box::new(log) as Box<dyn AuditSink>));
        if let Some(audit) = audit {
            initiative = initiative.with_audit(audit);
        }
        tracing::debug!(pacing = ?initiative.pacing(), "initiative built");
        Ok(initiative)
    }
}
