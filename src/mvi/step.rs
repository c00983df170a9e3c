//! The result of handling one action.

use super::effect::Effect;

/// Everything one dispatch produces: the next state (replaced wholesale),
/// UI events in emission order, and asynchronous effects to spawn.
#[derive(Debug)]
pub struct Step<S, A, E> {
    pub state: S,
    pub events: Vec<E>,
    pub effects: Vec<Effect<A>>,
}

impl<S, A, E> Step<S, A, E> {
    /// A step that only replaces the state.
    pub fn next(state: S) -> Self {
        Self {
            state,
            events: Vec::new(),
            effects: Vec::new(),
        }
    }

    /// Append a one-shot event, preserving emission order.
    pub fn with_event(mut self, event: E) -> Self {
        self.events.push(event);
        self
    }

    /// Append an asynchronous effect.
    pub fn with_effect(mut self, effect: Effect<A>) -> Self {
        self.effects.push(effect);
        self
    }
}
