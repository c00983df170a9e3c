//! Per-screen driver: sequential dispatch, scoped effects, cancellation.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::{JoinHandle, JoinSet};

use crate::mvi::{Action, AttachError, Dispatcher, Effect, ScreenArgs};
use crate::runtime::events::EventChannel;

/// Handle to one attached screen instance.
///
/// The handle is what the rendering layer holds: it reads state
/// synchronously, feeds actions through the single entry point, and drains
/// one-shot events. Internally a driver task owns the dispatcher and
/// processes actions strictly sequentially, so the state transition for one
/// action is atomic from the observer's point of view — no intermediate
/// state is ever published mid-dispatch.
///
/// Dropping the handle (or calling [`detach`](Self::detach)) aborts the
/// driver together with every outstanding effect; nothing is published
/// after that point.
pub struct ScreenHandle<D: Dispatcher> {
    actions: mpsc::UnboundedSender<D::Action>,
    state: watch::Receiver<D::State>,
    events: Arc<EventChannel<D::Event>>,
    driver: JoinHandle<()>,
}

impl<D: Dispatcher> ScreenHandle<D> {
    /// Attach a screen: run the dispatcher's seed hook and start the driver.
    ///
    /// Fails when a required navigation argument is missing; no task is
    /// spawned in that case.
    pub fn attach(mut dispatcher: D, args: ScreenArgs) -> Result<Self, AttachError> {
        let step = dispatcher.attach(&args)?;
        tracing::debug!(screen = std::any::type_name::<D>(), "screen attached");

        let (action_tx, mut action_rx) = mpsc::unbounded_channel::<D::Action>();
        let (state_tx, state_rx) = watch::channel(step.state);
        let events = Arc::new(EventChannel::new());
        for event in step.events {
            events.emit(event);
        }

        let driver_events = Arc::clone(&events);
        let feedback = action_tx.clone();
        let initial_effects = step.effects;

        let driver = tokio::spawn(async move {
            let mut effects = JoinSet::new();
            for effect in initial_effects {
                spawn_effect(&mut effects, effect, feedback.clone());
            }

            loop {
                tokio::select! {
                    action = action_rx.recv() => {
                        let Some(action) = action else { break };
                        tracing::trace!(?action, "dispatching");
                        let current = state_tx.borrow().clone();
                        let step = dispatcher.dispatch(current, action);
                        // Whole-object replacement: observers only ever see
                        // the state before or after an action, never between.
                        state_tx.send_replace(step.state);
                        for event in step.events {
                            driver_events.emit(event);
                        }
                        for effect in step.effects {
                            spawn_effect(&mut effects, effect, feedback.clone());
                        }
                    }
                    Some(_) = effects.join_next(), if !effects.is_empty() => {}
                }
            }
        });

        Ok(Self {
            actions: action_tx,
            state: state_rx,
            events,
            driver,
        })
    }

    /// Synchronous snapshot of the current state.
    pub fn state(&self) -> D::State {
        self.state.borrow().clone()
    }

    /// Hot state subscription; always yields the most recent value.
    pub fn watch_state(&self) -> watch::Receiver<D::State> {
        self.state.clone()
    }

    /// The single entry point: feed an action to the dispatcher.
    ///
    /// Actions sent after detach are dropped.
    pub fn on_action(&self, action: D::Action) {
        if self.actions.send(action).is_err() {
            tracing::debug!("action dropped, screen already detached");
        }
    }

    /// One-shot event queue. Contract: one active consumer at a time.
    pub fn events(&self) -> Arc<EventChannel<D::Event>> {
        Arc::clone(&self.events)
    }

    /// Detach the screen, cancelling the driver and all pending effects.
    pub fn detach(self) {}
}

impl<D: Dispatcher> Drop for ScreenHandle<D> {
    fn drop(&mut self) {
        self.driver.abort();
        tracing::debug!(screen = std::any::type_name::<D>(), "screen detached");
    }
}

/// Spawn one effect into the screen-scoped task set. Resulting actions go
/// back through the same dispatch channel; when the driver is aborted the
/// set is dropped and every effect with it.
fn spawn_effect<A: Action>(
    tasks: &mut JoinSet<()>,
    effect: Effect<A>,
    feedback: mpsc::UnboundedSender<A>,
) {
    match effect {
        Effect::Task(future) => {
            tasks.spawn(async move {
                let action = future.await;
                let _ = feedback.send(action);
            });
        }
        Effect::Subscription(mut stream) => {
            tasks.spawn(async move {
                while let Some(action) = futures::StreamExt::next(&mut stream).await {
                    if feedback.send(action).is_err() {
                        break;
                    }
                }
            });
        }
    }
}
