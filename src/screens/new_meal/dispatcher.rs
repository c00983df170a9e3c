use std::sync::Arc;

use crate::domain::{CreateConsumedFood, CreateMeal, CreateMealUseCase};
use crate::mvi::{DispatchStep, Dispatcher, Effect, Step};
use crate::screens::consumed_foods;
use crate::screens::new_meal::action::NewMealAction;
use crate::screens::new_meal::event::NewMealUiEvent;
use crate::screens::new_meal::state::NewMealState;
use crate::screens::MessageKind;

/// Dispatcher for the new-meal screen.
///
/// Takes no seed key: the screen starts empty and the meal only exists in
/// the store after a successful save.
pub struct NewMealDispatcher {
    create_meal: Arc<dyn CreateMealUseCase>,
}

impl NewMealDispatcher {
    pub fn new(create_meal: Arc<dyn CreateMealUseCase>) -> Self {
        Self { create_meal }
    }
}

impl Dispatcher for NewMealDispatcher {
    type State = NewMealState;
    type Action = NewMealAction;
    type Event = NewMealUiEvent;

    fn dispatch(&mut self, state: NewMealState, action: NewMealAction) -> DispatchStep<Self> {
        match action {
            NewMealAction::MealNameChange(meal_name) => {
                Step::next(NewMealState { meal_name, ..state })
            }

            NewMealAction::AddConsumedFood(food) => {
                let mut next = state;
                next.consumed_foods = consumed_foods::append(next.consumed_foods, food);
                Step::next(next)
            }

            NewMealAction::SelectConsumedFood(index) => {
                let mut next = state;
                next.selected_consumed_food_index = index;
                Step::next(next)
            }

            NewMealAction::UpdateConsumedFood { index, weight_grams } => {
                let mut next = state;
                next.consumed_foods =
                    consumed_foods::replace_grams(next.consumed_foods, index, weight_grams);
                next.selected_consumed_food_index = None;
                Step::next(next)
            }

            NewMealAction::DeleteConsumedFood { index } => {
                let mut next = state;
                next.consumed_foods = consumed_foods::remove(next.consumed_foods, index);
                Step::next(next)
            }

            NewMealAction::SaveMealClick => {
                let request = CreateMeal {
                    name: state.meal_name.clone(),
                    consumed_foods: state
                        .consumed_foods
                        .iter()
                        .map(|item| CreateConsumedFood {
                            food_id: item.food.id,
                            grams: item.grams,
                        })
                        .collect(),
                };
                let create_meal = Arc::clone(&self.create_meal);
                let mut next = state;
                next.is_loading = true;
                Step::next(next).with_effect(Effect::task(async move {
                    NewMealAction::SaveFinished(create_meal.create(request).await)
                }))
            }

            NewMealAction::SaveFinished(result) => {
                let mut next = state;
                next.is_loading = false;
                match result {
                    Ok(_meal) => Step::next(next).with_event(NewMealUiEvent::MealSaved),
                    Err(error) => {
                        tracing::debug!(%error, "meal create failed");
                        let kind = MessageKind::from(&error);
                        Step::next(next).with_event(NewMealUiEvent::ShowMessage(kind))
                    }
                }
            }

            NewMealAction::AddFoodIconClick => {
                Step::next(state).with_event(NewMealUiEvent::NavigateToSearchFood)
            }

            NewMealAction::NavigateBackClick => {
                let mut next = state;
                next.show_exit_dialog = true;
                Step::next(next)
            }

            NewMealAction::NavigateBackConfirmClick => {
                let mut next = state;
                next.show_exit_dialog = false;
                Step::next(next).with_event(NewMealUiEvent::NavigateBack)
            }

            NewMealAction::NavigateBackDenyClick => {
                let mut next = state;
                next.show_exit_dialog = false;
                Step::next(next)
            }
        }
    }
}
