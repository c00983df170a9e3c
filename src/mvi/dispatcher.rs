//! Dispatcher trait for MVI architecture.

use super::action::Action;
use super::args::{AttachError, ScreenArgs};
use super::event::UiEvent;
use super::state::UiState;
use super::step::Step;

/// Shorthand for the step type a dispatcher produces.
pub type DispatchStep<D> = Step<
    <D as Dispatcher>::State,
    <D as Dispatcher>::Action,
    <D as Dispatcher>::Event,
>;

/// Dispatcher transforms state based on actions.
///
/// The dispatcher is the only place where state transitions happen. The
/// transition itself must be free of I/O and await points: anything that
/// waits is returned as an [`Effect`] and reports back as a new action.
///
/// [`Effect`]: super::Effect
pub trait Dispatcher: Send + 'static {
    /// The state type this dispatcher operates on.
    type State: UiState;

    /// The action type this dispatcher handles.
    type Action: Action;

    /// The one-shot event type this dispatcher emits.
    type Event: UiEvent;

    /// Load-on-attach hook: read the seed key once and produce the initial
    /// step. A missing required key aborts screen construction.
    ///
    /// The default implementation takes no seed and starts from the default
    /// state with no effects.
    fn attach(&mut self, args: &ScreenArgs) -> Result<DispatchStep<Self>, AttachError> {
        let _ = args;
        Ok(Step::next(Self::State::default()))
    }

    /// Process an action and return the next state, events, and effects.
    ///
    /// Must be exhaustive over the action set and total: every action yields
    /// a step, even if it is just the unchanged state.
    fn dispatch(&mut self, state: Self::State, action: Self::Action) -> DispatchStep<Self>;
}
