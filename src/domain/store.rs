//! In-memory meal store with reactive per-meal subscriptions.
//!
//! Uses a read-write lock: concurrent readers, exclusive writes. Each meal
//! that has ever been observed keeps a watch channel so subscribers see
//! every update without polling.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::BoxStream;
use futures::StreamExt;
use parking_lot::RwLock;
use tokio::sync::watch;

use super::error::{DomainError, DomainResult};
use super::model::{ConsumedFood, CreateConsumedFood, CreateMeal, Food, Meal, UpdateMeal};
use super::use_case::{CreateMealUseCase, GetMealByIdUseCase, UpdateMealUseCase};

/// Thread-safe in-memory store implementing all three meal use-cases.
#[derive(Clone)]
pub struct MealStore {
    inner: Arc<RwLock<MealStoreInner>>,
}

struct MealStoreInner {
    foods: HashMap<i64, Food>,
    meals: HashMap<i64, Meal>,
    next_meal_id: i64,
    /// One watch channel per observed meal; kept alive for late subscribers.
    watchers: HashMap<i64, watch::Sender<Option<Meal>>>,
}

impl MealStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MealStoreInner {
                foods: HashMap::new(),
                meals: HashMap::new(),
                next_meal_id: 1,
                watchers: HashMap::new(),
            })),
        }
    }

    /// Store seeded with a food catalog.
    pub fn with_foods(foods: Vec<Food>) -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.write();
            for food in foods {
                inner.foods.insert(food.id, food);
            }
        }
        store
    }

    pub fn add_food(&self, food: Food) {
        self.inner.write().foods.insert(food.id, food);
    }

    /// Insert a meal directly (seeding), bypassing request validation.
    pub fn insert_meal(&self, name: impl Into<String>, consumed_foods: Vec<ConsumedFood>) -> Meal {
        let mut inner = self.inner.write();
        let id = inner.next_meal_id;
        inner.next_meal_id += 1;
        let meal = Meal {
            id,
            name: name.into(),
            consumed_foods,
        };
        inner.meals.insert(id, meal.clone());
        inner.notify(id);
        meal
    }

    /// Snapshot read of one meal.
    pub fn meal(&self, meal_id: i64) -> Option<Meal> {
        self.inner.read().meals.get(&meal_id).cloned()
    }

    fn subscribe(&self, meal_id: i64) -> watch::Receiver<Option<Meal>> {
        let mut inner = self.inner.write();
        let current = inner.meals.get(&meal_id).cloned();
        inner
            .watchers
            .entry(meal_id)
            .or_insert_with(|| watch::channel(current).0)
            .subscribe()
    }
}

impl Default for MealStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MealStoreInner {
    fn notify(&self, meal_id: i64) {
        if let Some(sender) = self.watchers.get(&meal_id) {
            sender.send_replace(self.meals.get(&meal_id).cloned());
        }
    }

    fn resolve(&self, requested: &[CreateConsumedFood]) -> DomainResult<Vec<ConsumedFood>> {
        requested
            .iter()
            .map(|request| {
                let food = self
                    .foods
                    .get(&request.food_id)
                    .cloned()
                    .ok_or(DomainError::UnknownFood(request.food_id))?;
                Ok(ConsumedFood {
                    food,
                    grams: request.grams,
                })
            })
            .collect()
    }
}

impl GetMealByIdUseCase for MealStore {
    fn observe(&self, meal_id: i64) -> BoxStream<'static, Option<Meal>> {
        let receiver = self.subscribe(meal_id);
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

#[async_trait]
impl UpdateMealUseCase for MealStore {
    async fn update(&self, meal_id: i64, update: UpdateMeal) -> DomainResult<()> {
        if update.name.trim().is_empty() {
            return Err(DomainError::EmptyMealName);
        }
        let mut inner = self.inner.write();
        let consumed_foods = inner.resolve(&update.consumed_foods)?;
        let meal = inner
            .meals
            .get_mut(&meal_id)
            .ok_or_else(|| DomainError::Unexpected(format!("meal {meal_id} not found")))?;
        meal.name = update.name;
        meal.consumed_foods = consumed_foods;
        inner.notify(meal_id);
        tracing::debug!(meal_id, "meal updated");
        Ok(())
    }
}

#[async_trait]
impl CreateMealUseCase for MealStore {
    async fn create(&self, meal: CreateMeal) -> DomainResult<Meal> {
        if meal.name.trim().is_empty() {
            return Err(DomainError::EmptyMealName);
        }
        let mut inner = self.inner.write();
        let consumed_foods = inner.resolve(&meal.consumed_foods)?;
        let id = inner.next_meal_id;
        inner.next_meal_id += 1;
        let meal = Meal {
            id,
            name: meal.name,
            consumed_foods,
        };
        inner.meals.insert(id, meal.clone());
        inner.notify(id);
        tracing::debug!(meal_id = id, "meal created");
        Ok(meal)
    }
}
