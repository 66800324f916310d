//! Builders to construct schedulers from configuration.

pub mod initiative_builder;

pub use initiative_builder::InitiativeBuilder;
