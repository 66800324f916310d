//! Scheduler configuration structures.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{Pacing, SchedulerError};

/// Environment variable holding the paced sleep per round in milliseconds.
pub const ENV_SLEEP_PER_TICK_MS: &str = "MEEP_SLEEP_PER_TICK_MS";
/// Environment variable selecting the [`OrphanPolicy`].
pub const ENV_ORPHAN_POLICY: &str = "MEEP_ORPHAN_POLICY";
/// Environment variable holding the in-memory audit capacity.
pub const ENV_AUDIT_CAPACITY: &str = "MEEP_AUDIT_CAPACITY";

/// What to do with an actor that becomes due with no live mind attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrphanPolicy {
    /// Drop it from the scheduler. It is only scheduled again if re-added.
    #[default]
    Drop,
    /// Skip its turn, charge its overhead and keep it scheduled.
    Requeue,
}

impl FromStr for OrphanPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drop" => Ok(Self::Drop),
            "requeue" => Ok(Self::Requeue),
            other => Err(format!("unknown orphan policy `{other}`")),
        }
    }
}

/// Scheduler configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitiativeConfig {
    /// Real-time sleep per round in milliseconds; 0 skips straight to the
    /// next due actor.
    #[serde(default)]
    pub sleep_per_tick_ms: i64,
    /// Handling of actors without a mind.
    #[serde(default)]
    pub orphan_policy: OrphanPolicy,
    /// Capacity of the in-memory audit log; 0 disables it.
    #[serde(default)]
    pub audit_capacity: usize,
}

impl InitiativeConfig {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.sleep_per_tick_ms < 0 {
            return Err(format!(
                "sleep_per_tick_ms must not be negative, got {}",
                self.sleep_per_tick_ms
            ));
        }
        Ok(())
    }

    /// Clock strategy selected by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::InvalidPace`] for a negative sleep.
    pub fn pacing(&self) -> Result<Pacing, SchedulerError> {
        Pacing::from_millis(self.sleep_per_tick_ms)
    }

    /// Parse configuration from a JSON string and validate.
    ///
    /// # Errors
    ///
    /// Returns a description of the parse or validation failure.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read configuration from the environment, loading a `.env` file first
    /// if one is present. Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns a description of the first malformed variable.
    pub fn from_env() -> Result<Self, String> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its
    /// value. Used by [`InitiativeConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns a description of the first malformed variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(raw) = lookup(ENV_SLEEP_PER_TICK_MS) {
            cfg.sleep_per_tick_ms = raw
                .trim()
                .parse()
                .map_err(|e| format!("{ENV_SLEEP_PER_TICK_MS}: {e}"))?;
        }
        if let Some(raw) = lookup(ENV_ORPHAN_POLICY) {
            cfg.orphan_policy = raw
                .parse()
                .map_err(|e| format!("{ENV_ORPHAN_POLICY}: {e}"))?;
        }
        if let Some(raw) = lookup(ENV_AUDIT_CAPACITY) {
            cfg.audit_capacity = raw
                .trim()
                .parse()
                .map_err(|e| format!("{ENV_AUDIT_CAPACITY}: {e}"))?;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}
