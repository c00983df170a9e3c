//! Meal-editing screens built on the MVI primitives.

mod consumed_foods;
mod message;

pub mod meal;
pub mod new_meal;

pub use message::MessageKind;
