use crate::domain::{ConsumedFood, DomainResult, Meal};
use crate::mvi::Action;

/// User intents and system feedback for the edit-meal screen.
#[derive(Debug)]
pub enum MealAction {
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

    /// Snapshot from the meal subscription started at attach.
    MealLoaded(Option<Meal>),
    /// The save effect completed, successfully or not.
    SaveFinished(DomainResult<()>),
}

impl Action for MealAction {}
