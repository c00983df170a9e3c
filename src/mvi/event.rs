//! Base trait for one-shot UI events in MVI architecture.

use std::fmt::Debug;

/// Marker trait for one-shot UI events.
///
/// Events are non-idempotent effects: navigation, transient messages,
/// navigate-with-result. Unlike state, an event is delivered at most once
/// and is never replayed to a consumer that attaches later — replaying a
/// stale navigation would re-fire it.
pub trait UiEvent: Debug + Send + 'static {}
