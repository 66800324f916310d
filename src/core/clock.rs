//! Clock strategies: skip straight to the next due actor, or wait a fixed
//! real-time interval per round.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{PendingQueue, SchedulerError};

/// How virtual time advances between rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pacing {
    /// Rebase `pending` so its front sits at fatigue 0. No wall-clock cost;
    /// suited to strict turn-based play.
    #[default]
    Instant,
    /// Sleep for the given duration each round and let fatigue count down by
    /// one per round. Suited to arcade-style play.
    Paced(Duration),
}

impl Pacing {
    /// Build from a millisecond count. Zero selects [`Pacing::Instant`].
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::InvalidPace`] for a negative count.
    pub fn from_millis(millis: i64) -> Result<Self, SchedulerError> {
        match u64::try_from(millis) {
            Ok(0) => Ok(Self::Instant),
            Ok(ms) => Ok(Self::Paced(Duration::from_millis(ms))),
            Err(_) => Err(SchedulerError::InvalidPace(format!(
                "sleep per tick must not be negative, got {millis}ms"
            ))),
        }
    }

    /// Bring the clock to the start of the next round.
    ///
    /// Returns how far `pending` was rebased (always 0 when paced). A paced
    /// round with no `sleeper` assumes the caller already waited.
    pub(crate) fn synchronise<S: Sleeper>(
        &self,
        pending: &mut PendingQueue,
        sleeper: Option<&S>,
    ) -> i64 {
        match self {
            Self::Instant => pending.rebase_to_zero(),
            Self::Paced(duration) => {
                if let Some(sleeper) = sleeper {
                    sleeper.sleep(*duration);
                }
                0
            }
        }
    }

    /// Real-time wait per round, if any.
    pub const fn wait(&self) -> Option<Duration> {
        match self {
            Self::Instant => None,
            Self::Paced(duration) => Some(*duration),
        }
    }
}

/// Real-time wait primitive used by [`Pacing::Paced`].
pub trait Sleeper {
    /// Block the calling thread for `duration`.
    fn sleep(&self, duration: Duration);
}

/// Sleeps on the current OS thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        tracing::trace!(?duration, "pacing sleep");
        std::thread::sleep(duration);
    }
}

impl<S: Sleeper + ?Sized> Sleeper for Arc<S> {
    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration);
    }
}
