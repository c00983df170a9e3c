//! Edit-meal screen: loads an existing meal by id and saves edits back.

mod action;
mod dispatcher;
mod event;
mod state;

pub use action::MealAction;
pub use dispatcher::{MealDispatcher, MEAL_ID_ARG};
pub use event::MealUiEvent;
pub use state::MealState;
