//! One-shot event delivery between a screen and its single consumer.

use std::collections::VecDeque;

use parking_lot::Mutex;
use tokio::sync::Notify;

/// Single-consumer ordered queue with attach-time draining.
///
/// Guarantees:
/// - events are delivered in emission order;
/// - an event is delivered at most once;
/// - events emitted while no consumer is waiting stay queued and are drained
///   by the next consumer that attaches.
///
/// The consumer side is cooperative: the contract is one active consumer at
/// a time (screen reattachment after a rotation/resume is the only
/// re-subscription scenario). This is deliberately not a broadcast channel —
/// replaying a consumed navigation event to a late subscriber would re-fire
/// it.
pub struct EventChannel<E> {
    queue: Mutex<VecDeque<E>>,
    notify: Notify,
}

impl<E> EventChannel<E> {
    pub fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            notify: Notify::new(),
        }
    }

    /// Queue an event. Never blocks; never drops.
    pub fn emit(&self, event: E) {
        self.queue.lock().push_back(event);
        self.notify.notify_one();
    }

    /// Await the next event in emission order.
    pub async fn recv(&self) -> E {
        loop {
            if let Some(event) = self.queue.lock().pop_front() {
                return event;
            }
            self.notify.notified().await;
        }
    }

    /// Pop the next event without waiting.
    pub fn try_recv(&self) -> Option<E> {
        self.queue.lock().pop_front()
    }

    /// Number of events currently queued.
    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }
}

impl<E> Default for EventChannel<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delivers_in_emission_order() {
        let channel = EventChannel::new();
        channel.emit(1);
        channel.emit(2);
        channel.emit(3);
        assert_eq!(channel.recv().await, 1);
        assert_eq!(channel.recv().await, 2);
        assert_eq!(channel.recv().await, 3);
    }

    #[tokio::test]
    async fn buffers_until_consumer_attaches() {
        let channel = EventChannel::new();
        channel.emit("navigate-back");
        assert_eq!(channel.len(), 1);

        // The "late" consumer drains what was queued while detached.
        assert_eq!(channel.recv().await, "navigate-back");
        assert!(channel.is_empty());
    }

    #[tokio::test]
    async fn event_is_delivered_at_most_once() {
        let channel = EventChannel::new();
        channel.emit(7);
        assert_eq!(channel.try_recv(), Some(7));
        assert_eq!(channel.try_recv(), None);
    }

    #[tokio::test]
    async fn recv_wakes_on_emit() {
        let channel = std::sync::Arc::new(EventChannel::new());
        let consumer = {
            let channel = std::sync::Arc::clone(&channel);
            tokio::spawn(async move { channel.recv().await })
        };
        tokio::task::yield_now().await;
        channel.emit(42);
        assert_eq!(consumer.await.unwrap(), 42);
    }
}
