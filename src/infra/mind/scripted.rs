//! Always-ready mind driven by a closure.

use parking_lot::Mutex;

use crate::core::{Actor, Mind};

type TurnFn = Box<dyn FnMut(&Actor) + Send>;

/// Mind for AI or scripted actors: always ready, runs `handler` each turn.
pub struct ScriptedMind {
    handler: Mutex<TurnFn>,
}

impl ScriptedMind {
    /// Create a mind that calls `handler` on every turn.
    pub fn new(handler: impl FnMut(&Actor) + Send + 'static) -> Self {
        let handler: TurnFn = Box::new(handler);
        Self {
            handler: Mutex::new(handler),
        }
    }

    /// Mind whose turns have no effect.
    pub fn idle() -> Self {
        Self::new(|_| {})
    }
}

impl Mind for ScriptedMind {
    fn ready(&self) -> bool {
        true
    }

    fn apply_turn(&self, actor: &Actor) {
        let mut handler = self.handler.lock();
        (*handler)(actor);
    }
}
