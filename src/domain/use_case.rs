//! Use-case seams between screens and the data layer.
//!
//! Dispatchers hold these as `Arc<dyn _>` so tests can substitute fakes and
//! the application can wire real repositories behind them.

use async_trait::async_trait;
use futures::stream::BoxStream;

use super::error::DomainResult;
use super::model::{CreateMeal, Meal, UpdateMeal};

/// Reactive read of one meal.
pub trait GetMealByIdUseCase: Send + Sync {
    /// Subscribe to a meal's snapshots: yields the current value first, then
    /// every subsequent change, so external edits show up without a manual
    /// refresh. `None` means the meal does not exist (yet).
    fn observe(&self, meal_id: i64) -> BoxStream<'static, Option<Meal>>;
}

/// Replace a stored meal's name and contents.
#[async_trait]
pub trait UpdateMealUseCase: Send + Sync {
    async fn update(&self, meal_id: i64, update: UpdateMeal) -> DomainResult<()>;
}

/// Create a new meal and return it with its assigned id.
#[async_trait]
pub trait CreateMealUseCase: Send + Sync {
    async fn create(&self, meal: CreateMeal) -> DomainResult<Meal>;
}
