//! Decision-source adapters for common kinds of actor.

pub mod mind;

pub use mind::{ChannelMind, ScriptedMind};
