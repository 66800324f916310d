//! # Meep Initiative
//!
//! A fatigue-based turn scheduler for actor-driven simulations.
//!
//! Every actor ("meep") carries a *fatigue*, the number of turns until it is
//! due, and an *overhead*, the fatigue it is charged after acting. Each round
//! the scheduler lets every actor at fatigue 0 act, counts everyone else one
//! step closer to their next turn, and puts the actors that acted back at the
//! end of their new rung. Fast actors act proportionally more often and slow
//! actors never starve.
//!
//! ## Key Features
//!
//! - **Rung fairness**: equal-speed actors alternate instead of one always
//!   winning ties
//! - **Cooperative suspension**: a mind that is not ready (a human player
//!   waiting on input) pauses the round without blocking the caller
//! - **Mid-round death**: actors killed during another actor's turn are
//!   reclaimed the next time the scheduler meets them
//! - **Two clocks**: skip straight to the next due actor, or pace rounds in
//!   real time
//!
//! ```rust
//! use std::sync::Arc;
//! use meep_initiative::core::{Actor, Initiative};
//! use meep_initiative::infra::ScriptedMind;
//!
//! let mind = Arc::new(ScriptedMind::idle());
//! let mut initiative = Initiative::instant();
//! initiative.add(Actor::new("a", 2).with_mind(&mind)).unwrap();
//! initiative.add(Actor::new("b", 3).with_mind(&mind)).unwrap();
//!
//! assert!(initiative.advance());
//! let order: Vec<_> = initiative.pending().map(|a| a.label().to_string()).collect();
//! assert_eq!(order, ["a", "b"]);
//! ```
//!
//! For complete scenarios, see `tests/initiative_algorithm_test.rs`.

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Actors, minds, clock strategies and the scheduler itself.
pub mod core;
/// Configuration models for the scheduler.
pub mod config;
/// Builders to construct schedulers from configuration.
pub mod builders;
/// Decision-source adapters (scripted and input-driven minds).
pub mod infra;
/// Event-loop drivers.
pub mod runtime;
/// Shared utilities.
pub mod util;

pub use crate::core::{Actor, Initiative, Mind, Pacing, SchedulerError};
