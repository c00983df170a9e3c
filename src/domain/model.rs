use serde::{Deserialize, Serialize};

/// A catalog food with nutrient density per 100 grams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: i64,
    pub name: String,
    pub calories_per_100g: i32,
    pub proteins_per_100g: i32,
    pub fats_per_100g: i32,
    pub carbs_per_100g: i32,
}

/// A food attached to a meal with the consumed weight.
///
/// Within one screen a consumed food is identified by its position in the
/// meal's list; it carries no identity of its own beyond the food id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumedFood {
    pub food: Food,
    pub grams: i32,
}

/// A stored meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: i64,
    pub name: String,
    pub consumed_foods: Vec<ConsumedFood>,
}

/// Request value: attach a catalog food to a meal by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateConsumedFood {
    pub food_id: i64,
    pub grams: i32,
}

/// Request value for creating a meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMeal {
    pub name: String,
    pub consumed_foods: Vec<CreateConsumedFood>,
}

/// Request value for replacing a meal's name and contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateMeal {
    pub name: String,
    pub consumed_foods: Vec<CreateConsumedFood>,
}
