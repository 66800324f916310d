//! Tokio driver calling [`Initiative::advance`] once per tick.
//!
//! A suspended round (a mind that is not ready yet) is simply retried on the
//! next tick, so a human player's input can arrive between ticks without the
//! driver ever blocking on it.
//!
//! Paced rounds wait on the tokio clock, never on the scheduler's sleeper,
//! so the worker thread stays free for other tasks.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use crate::core::{Initiative, Sleeper};

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// No actors remain.
    Idle,
    /// The configured tick limit was reached.
    MaxTicks,
    /// The shutdown flag was raised or its sender dropped.
    Shutdown,
}

/// Outcome of a [`TurnLoop`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopReport {
    /// Ticks on which `advance` was called.
    pub ticks: u64,
    /// Ticks on which at least one actor acted.
    pub active_ticks: u64,
    /// Why the loop stopped.
    pub stop: StopReason,
}

/// Fixed-cadence driver for an [`Initiative`].
#[derive(Debug, Clone, Copy)]
pub struct TurnLoop {
    tick: Duration,
    max_ticks: Option<u64>,
}

impl TurnLoop {
    /// Driver advancing the scheduler every `tick`.
    pub const fn new(tick: Duration) -> Self {
        Self {
            tick,
            max_ticks: None,
        }
    }

    /// Stop after `max_ticks` calls to `advance`.
    #[must_use]
    pub const fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    /// Run until the scheduler is idle or the tick limit is hit.
    pub async fn run<S: Sleeper>(&self, initiative: &mut Initiative<S>) -> LoopReport {
        let (_keep_open, shutdown) = watch::channel(false);
        self.run_with_shutdown(initiative, shutdown).await
    }

    /// Run until idle, the tick limit, or `shutdown` turns `true`.
    pub async fn run_with_shutdown<S: Sleeper>(
        &self,
        initiative: &mut Initiative<S>,
        mut shutdown: watch::Receiver<bool>,
    ) -> LoopReport {
        let mut interval = tokio::time::interval(self.tick);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut ticks = 0;
        let mut active_ticks = 0;

        let stop = loop {
            if initiative.is_idle() {
                break StopReason::Idle;
            }
            if self.max_ticks.is_some_and(|max| ticks >= max) {
                break StopReason::MaxTicks;
            }
            if *shutdown.borrow() {
                break StopReason::Shutdown;
            }

            tokio::select! {
                _ = interval.tick() => {}
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break StopReason::Shutdown;
                    }
                    continue;
                }
            }

            if let Some(wait) = initiative.round_wait() {
                tokio::select! {
                    () = tokio::time::sleep(wait) => {}
                    changed = shutdown.changed() => {
                        if changed.is_err() {
                            break StopReason::Shutdown;
                        }
                        continue;
                    }
                }
            }

            ticks += 1;
            if initiative.advance_waited() {
                active_ticks += 1;
            }
        };

        tracing::debug!(ticks, active_ticks, ?stop, "turn loop stopped");
        LoopReport {
            ticks,
            active_ticks,
            stop,
        }
    }
}
