//! List edits shared by the meal screens.
//!
//! Entries are identified by position for the screen's lifetime, so every
//! edit is index-based. Out-of-range indices are no-ops rather than panics:
//! the rendering layer can race a delete against a stale index.

use crate::domain::ConsumedFood;

pub(crate) fn append(mut foods: Vec<ConsumedFood>, food: ConsumedFood) -> Vec<ConsumedFood> {
    foods.push(food);
    foods
}

/// Replace only the weight of the entry at `index`, if it exists.
pub(crate) fn replace_grams(
    mut foods: Vec<ConsumedFood>,
    index: usize,
    grams: i32,
) -> Vec<ConsumedFood> {
    if let Some(entry) = foods.get_mut(index) {
        entry.grams = grams;
    }
    foods
}

/// Remove the entry at `index`, preserving the order of the rest.
pub(crate) fn remove(mut foods: Vec<ConsumedFood>, index: usize) -> Vec<ConsumedFood> {
    if index < foods.len() {
        foods.remove(index);
    }
    foods
}
