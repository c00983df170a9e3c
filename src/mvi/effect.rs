//! Asynchronous effects spawned by a dispatch step.

use futures::future::BoxFuture;
use futures::stream::BoxStream;
use futures::{Future, FutureExt, Stream, StreamExt};

/// Deferred asynchronous work owned by a screen.
///
/// Effects are where I/O lives: the dispatch step itself is synchronous and
/// atomic, and anything that must wait (a save, a reactive subscription) is
/// returned as an effect. Each effect resolves to follow-up actions that are
/// fed back through the same dispatch entry point. Effects are scoped to the
/// screen lifetime and cancelled when it detaches.
pub enum Effect<A> {
    /// One-shot task resolving to a single follow-up action.
    Task(BoxFuture<'static, A>),
    /// Reactive subscription yielding a follow-up action per snapshot.
    Subscription(BoxStream<'static, A>),
}

impl<A> Effect<A> {
    /// Wrap a future as a one-shot effect.
    pub fn task<F>(future: F) -> Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        Effect::Task(future.boxed())
    }

    /// Wrap a stream as a subscription effect.
    pub fn subscription<S>(stream: S) -> Self
    where
        S: Stream<Item = A> + Send + 'static,
    {
        Effect::Subscription(stream.boxed())
    }
}

impl<A> std::fmt::Debug for Effect<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::Task(_) => f.write_str("Effect::Task"),
            Effect::Subscription(_) => f.write_str("Effect::Subscription"),
        }
    }
}
