//! Nutrient totals derived from a consumed-food list.

use super::model::ConsumedFood;

/// Macro-nutrient totals for a list of consumed foods.
///
/// Derived values are never stored in screen state: they are recomputed from
/// the current list on every render. The computation is linear in the number
/// of items and deterministic — each item contributes
/// `round(grams / 100 * per-100-gram value)` per nutrient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NutrientTotals {
    pub calories: i32,
    pub proteins: i32,
    pub fats: i32,
    pub carbs: i32,
}

impl NutrientTotals {
    pub fn of(consumed_foods: &[ConsumedFood]) -> Self {
        consumed_foods.iter().fold(Self::default(), |totals, item| Self {
            calories: totals.calories + portion(item.grams, item.food.calories_per_100g),
            proteins: totals.proteins + portion(item.grams, item.food.proteins_per_100g),
            fats: totals.fats + portion(item.grams, item.food.fats_per_100g),
            carbs: totals.carbs + portion(item.grams, item.food.carbs_per_100g),
        })
    }
}

fn portion(grams: i32, per_100_grams: i32) -> i32 {
    (grams as f32 / 100.0 * per_100_grams as f32).round() as i32
}
