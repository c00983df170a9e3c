use crate::domain::{ConsumedFood, DomainResult, Meal};
use crate::mvi::Action;

/// User intents and system feedback for the new-meal screen.
#[derive(Debug)]
pub enum NewMealAction {
    MealNameChange(String),
    /// Result of the search-food screen, forwarded by the navigation layer.
    AddConsumedFood(ConsumedFood),
    SelectConsumedFood(Option<usize>),
    UpdateConsumedFood { index: usize, weight_grams: i32 },
    DeleteConsumedFood { index: usize },
    SaveMealClick,
    AddFoodIconClick,
    NavigateBackClick,
    NavigateBackConfirmClick,
    NavigateBackDenyClick,

    /// The create effect completed, successfully or not.
    SaveFinished(DomainResult<Meal>),
}

impl Action for NewMealAction {}
