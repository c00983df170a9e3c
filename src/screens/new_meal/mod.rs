//! New-meal screen: composes a meal from scratch and creates it on save.

mod action;
mod dispatcher;
mod event;
mod state;

pub use action::NewMealAction;
pub use dispatcher::NewMealDispatcher;
pub use event::NewMealUiEvent;
pub use state::NewMealState;
