//! Input-driven mind fed through a channel.
//!
//! Models a human player: the actor can only act once an input event (a key
//! press, a command) has arrived. Until then the scheduler suspends the round
//! on this actor.

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use parking_lot::Mutex;

use crate::core::{Actor, Mind};

type InputFn<K> = Box<dyn FnMut(&Actor, K) + Send>;

/// Mind that consumes one queued input event per turn.
pub struct ChannelMind<K> {
    inputs: Receiver<K>,
    handler: Mutex<InputFn<K>>,
}

impl<K: Send + 'static> ChannelMind<K> {
    /// Create a mind reading from `inputs`.
    pub fn new(inputs: Receiver<K>, handler: impl FnMut(&Actor, K) + Send + 'static) -> Self {
        let handler: InputFn<K> = Box::new(handler);
        Self {
            inputs,
            handler: Mutex::new(handler),
        }
    }

    /// Create a mind with its own unbounded channel; returns the sender used
    /// to feed it.
    pub fn channel(handler: impl FnMut(&Actor, K) + Send + 'static) -> (Self, Sender<K>) {
        let (tx, rx) = unbounded();
        (Self::new(rx, handler), tx)
    }

    /// Number of input events waiting.
    pub fn queued(&self) -> usize {
        self.inputs.len()
    }
}

impl<K: Send + 'static> Mind for ChannelMind<K> {
    fn ready(&self) -> bool {
        !self.inputs.is_empty()
    }

    fn apply_turn(&self, actor: &Actor) {
        match self.inputs.try_recv() {
            Ok(input) => {
                let mut handler = self.handler.lock();
                (*handler)(actor, input);
            }
            Err(TryRecvError::Empty) => {
                tracing::warn!(label = actor.label(), "turn applied with no input queued");
            }
            Err(TryRecvError::Disconnected) => {
                tracing::warn!(label = actor.label(), "input channel disconnected");
            }
        }
    }
}
