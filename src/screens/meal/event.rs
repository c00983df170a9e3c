use crate::mvi::UiEvent;
use crate::screens::MessageKind;

/// One-shot effects of the edit-meal screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MealUiEvent {
    MealSaved,
    NavigateBack,
    NavigateToSearchFood,
    ShowMessage(MessageKind),
}

impl UiEvent for MealUiEvent {}
