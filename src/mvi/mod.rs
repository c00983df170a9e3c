//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the base traits and value types for implementing
//! unidirectional data flow in the screen layer.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Dispatcher ──→ State ──→ View
//!    ↑           │                     │
//!    │           ├──→ UiEvent (one-shot, consumed once)
//!    └── Effect ─┘    (async work feeds results back as Actions)
//! ```
//!
//! - **State**: immutable snapshot of everything the screen renders
//! - **Action**: user intents and system feedback, exhaustively matched
//! - **UiEvent**: one-shot effects that must never be re-delivered
//! - **Effect**: deferred asynchronous work resolving to follow-up Actions

mod action;
mod args;
mod dispatcher;
mod effect;
mod event;
mod state;
mod step;

pub use action::Action;
pub use args::{ArgValue, AttachError, ScreenArgs};
pub use dispatcher::{DispatchStep, Dispatcher};
pub use effect::Effect;
pub use event::UiEvent;
pub use state::UiState;
pub use step::Step;
