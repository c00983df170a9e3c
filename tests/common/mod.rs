//! Shared test fakes and helpers.

#![allow(dead_code, unused_imports)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::stream::BoxStream;
use futures::StreamExt;
use parking_lot::Mutex;
use tokio::sync::{watch, Notify};

use mealtrack::domain::{
    ConsumedFood, CreateMeal, CreateMealUseCase, DomainError, DomainResult, Food,
    GetMealByIdUseCase, Meal, UpdateMeal, UpdateMealUseCase,
};
use mealtrack::runtime::EventChannel;

pub fn food(id: i64, name: &str, calories: i32, proteins: i32, fats: i32, carbs: i32) -> Food {
    Food {
        id,
        name: name.to_string(),
        calories_per_100g: calories,
        proteins_per_100g: proteins,
        fats_per_100g: fats,
        carbs_per_100g: carbs,
    }
}

pub fn consumed(food: Food, grams: i32) -> ConsumedFood {
    ConsumedFood { food, grams }
}

/// Watch-backed meal source the test can push snapshots into.
pub struct FakeMealSource {
    sender: watch::Sender<Option<Meal>>,
}

impl FakeMealSource {
    pub fn new(initial: Option<Meal>) -> Arc<Self> {
        let (sender, _) = watch::channel(initial);
        Arc::new(Self { sender })
    }

    pub fn push(&self, meal: Meal) {
        self.sender.send_replace(Some(meal));
    }
}

impl GetMealByIdUseCase for FakeMealSource {
    fn observe(&self, _meal_id: i64) -> BoxStream<'static, Option<Meal>> {
        let receiver = self.sender.subscribe();
        futures::stream::unfold((receiver, true), |(mut receiver, first)| async move {
            if first {
                let current = receiver.borrow_and_update().clone();
                return Some((current, (receiver, false)));
            }
            match receiver.changed().await {
                Ok(()) => {
                    let current = receiver.borrow_and_update().clone();
                    Some((current, (receiver, false)))
                }
                Err(_) => None,
            }
        })
        .boxed()
    }
}

/// Update use-case with a programmable result and an optional gate the test
/// controls, for holding a save in flight.
pub struct FakeUpdateMeal {
    pub started: AtomicUsize,
    pub completed: AtomicUsize,
    result: Mutex<DomainResult<()>>,
    gate: Option<Arc<Notify>>,
}

impl FakeUpdateMeal {
    pub fn ok() -> Arc<Self> {
        Arc::new(Self {
            started: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
            result: Mutex::new(Ok(())),
            gate: None,
        })
    }

    pub fn failing(error: DomainError) -> Arc<Self> {
        Arc::new(Self {
            started: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
            result: Mutex::new(Err(error)),
            gate: None,
        })
    }

    /// The update call blocks until the returned gate is notified.
    pub fn gated() -> (Arc<Self>, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let fake = Arc::new(Self {
            started: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
            result: Mutex::new(Ok(())),
            gate: Some(Arc::clone(&gate)),
        });
        (fake, gate)
    }
}

#[async_trait]
impl UpdateMealUseCase for FakeUpdateMeal {
    async fn update(&self, _meal_id: i64, _update: UpdateMeal) -> DomainResult<()> {
        self.started.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.completed.fetch_add(1, Ordering::SeqCst);
        self.result.lock().clone()
    }
}

/// Create use-case with a programmable result.
pub struct FakeCreateMeal {
    pub started: AtomicUsize,
    result: Mutex<DomainResult<Meal>>,
}

impl FakeCreateMeal {
    pub fn ok(meal: Meal) -> Arc<Self> {
        Arc::new(Self {
            started: AtomicUsize::new(0),
            result: Mutex::new(Ok(meal)),
        })
    }

    pub fn failing(error: DomainError) -> Arc<Self> {
        Arc::new(Self {
            started: AtomicUsize::new(0),
            result: Mutex::new(Err(error)),
        })
    }
}

#[async_trait]
impl CreateMealUseCase for FakeCreateMeal {
    async fn create(&self, _meal: CreateMeal) -> DomainResult<Meal> {
        self.started.fetch_add(1, Ordering::SeqCst);
        self.result.lock().clone()
    }
}

/// Await a state snapshot matching the predicate, bounded by a timeout.
pub async fn wait_for<S, F>(receiver: &mut watch::Receiver<S>, mut predicate: F) -> S
where
    S: Clone,
    F: FnMut(&S) -> bool,
{
    tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            {
                let current = receiver.borrow_and_update();
                if predicate(&current) {
                    return current.clone();
                }
            }
            receiver
                .changed()
                .await
                .expect("state channel closed before condition was met");
        }
    })
    .await
    .expect("condition not met in time")
}

/// Await the next one-shot event, bounded by a timeout.
pub async fn next_event<E>(events: &EventChannel<E>) -> E {
    tokio::time::timeout(Duration::from_secs(2), events.recv())
        .await
        .expect("no event arrived in time")
}
