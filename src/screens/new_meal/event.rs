use crate::mvi::UiEvent;
use crate::screens::MessageKind;

/// One-shot effects of the new-meal screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewMealUiEvent {
    MealSaved,
    NavigateBack,
    NavigateToSearchFood,
    ShowMessage(MessageKind),
}

impl UiEvent for NewMealUiEvent {}
