//! Domain layer: models, typed failures, use-case seams, and the store.

mod error;
mod model;
mod nutrition;
mod store;
mod use_case;

pub use error::{DomainError, DomainResult};
pub use model::{ConsumedFood, CreateConsumedFood, CreateMeal, Food, Meal, UpdateMeal};
pub use nutrition::NutrientTotals;
pub use store::MealStore;
pub use use_case::{CreateMealUseCase, GetMealByIdUseCase, UpdateMealUseCase};
