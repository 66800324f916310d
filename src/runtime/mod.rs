//! Event-loop adapters that re-invoke the scheduler on a fixed cadence.

#[cfg(feature = "tokio-runtime")]
pub mod turn_loop;

#[cfg(feature = "tokio-runtime")]
pub use turn_loop::{LoopReport, StopReason, TurnLoop};
