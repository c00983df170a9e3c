//! Unidirectional state/event view-models for calorie tracking screens.
//!
//! Every screen is a small state machine: an immutable [`mvi::UiState`]
//! snapshot, a closed set of [`mvi::Action`]s fed through a single dispatch
//! entry point, and one-shot [`mvi::UiEvent`]s for effects that must never
//! replay (navigation, transient messages). The [`runtime::ScreenHandle`]
//! binds one dispatcher to one screen lifetime: it publishes state through a
//! watch channel, queues events until a consumer drains them, and cancels
//! outstanding asynchronous work when the screen detaches.
//!
//! [`screens`] contains the meal-editing screens built on this pattern;
//! [`domain`] holds the models, use-case seams, and an in-memory store.

pub mod domain;
pub mod mvi;
pub mod runtime;
pub mod screens;
