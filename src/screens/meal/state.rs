use crate::domain::ConsumedFood;
use crate::mvi::UiState;

/// Everything the edit-meal screen renders.
///
/// Nutrient totals are deliberately absent: they are derived from
/// `consumed_foods` on render via [`NutrientTotals::of`].
///
/// [`NutrientTotals::of`]: crate::domain::NutrientTotals::of
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MealState {
    pub meal_name: String,
    pub consumed_foods: Vec<ConsumedFood>,
    /// Entry currently opened in the weight-edit dialog.
    pub selected_consumed_food_index: Option<usize>,
    pub show_exit_dialog: bool,
    pub is_loading: bool,
}

impl UiState for MealState {}
