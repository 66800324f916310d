//! Configuration models for the scheduler.

pub mod initiative;

pub use initiative::{InitiativeConfig, OrphanPolicy};
