//! Mind implementations.

pub mod channel;
pub mod scripted;

pub use channel::ChannelMind;
pub use scripted::ScriptedMind;
