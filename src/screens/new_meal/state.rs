use crate::domain::ConsumedFood;
use crate::mvi::UiState;

/// Everything the new-meal screen renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewMealState {
    pub meal_name: String,
    pub consumed_foods: Vec<ConsumedFood>,
    pub selected_consumed_food_index: Option<usize>,
    pub show_exit_dialog: bool,
    pub is_loading: bool,
}

impl UiState for NewMealState {}
