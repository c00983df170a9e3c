use std::sync::Arc;

use futures::StreamExt;

use crate::domain::{CreateConsumedFood, GetMealByIdUseCase, UpdateMeal, UpdateMealUseCase};
use crate::mvi::{AttachError, DispatchStep, Dispatcher, Effect, ScreenArgs, Step};
use crate::screens::consumed_foods;
use crate::screens::meal::action::MealAction;
use crate::screens::meal::event::MealUiEvent;
use crate::screens::meal::state::MealState;
use crate::screens::MessageKind;

/// Seed key: id of the meal to edit, supplied by the navigation layer.
pub const MEAL_ID_ARG: &str = "meal_id";

const UNKNOWN_ID: i64 = -1;

/// Dispatcher for the edit-meal screen.
///
/// Attach requires [`MEAL_ID_ARG`] and subscribes to that meal's snapshots;
/// every snapshot overwrites the name and consumed foods, so external edits
/// to the record show up without a refresh action.
pub struct MealDispatcher {
    get_meal: Arc<dyn GetMealByIdUseCase>,
    update_meal: Arc<dyn UpdateMealUseCase>,
    meal_id: i64,
}

impl MealDispatcher {
    pub fn new(
        get_meal: Arc<dyn GetMealByIdUseCase>,
        update_meal: Arc<dyn UpdateMealUseCase>,
    ) -> Self {
        Self {
            get_meal,
            update_meal,
            meal_id: UNKNOWN_ID,
        }
    }
}

impl Dispatcher for MealDispatcher {
    type State = MealState;
    type Action = MealAction;
    type Event = MealUiEvent;

    fn attach(&mut self, args: &ScreenArgs) -> Result<DispatchStep<Self>, AttachError> {
        let meal_id = args.require_int(MEAL_ID_ARG)?;
        self.meal_id = meal_id;
        let snapshots = self.get_meal.observe(meal_id).map(MealAction::MealLoaded);
        Ok(Step::next(MealState::default()).with_effect(Effect::subscription(snapshots)))
    }

    fn dispatch(&mut self, state: MealState, action: MealAction) -> DispatchStep<Self> {
        match action {
            MealAction::MealNameChange(meal_name) => Step::next(MealState { meal_name, ..state }),

            MealAction::AddConsumedFood(food) => {
                let mut next = state;
                next.consumed_foods = consumed_foods::append(next.consumed_foods, food);
                Step::next(next)
            }

            MealAction::SelectConsumedFood(index) => {
                let mut next = state;
                next.selected_consumed_food_index = index;
                Step::next(next)
            }

            MealAction::UpdateConsumedFood { index, weight_grams } => {
                let mut next = state;
                next.consumed_foods =
                    consumed_foods::replace_grams(next.consumed_foods, index, weight_grams);
                next.selected_consumed_food_index = None;
                Step::next(next)
            }

            MealAction::DeleteConsumedFood { index } => {
                let mut next = state;
                next.consumed_foods = consumed_foods::remove(next.consumed_foods, index);
                Step::next(next)
            }

            MealAction::SaveMealClick => {
                let request = UpdateMeal {
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
                let update_meal = Arc::clone(&self.update_meal);
                let meal_id = self.meal_id;
                let mut next = state;
                next.is_loading = true;
                Step::next(next).with_effect(Effect::task(async move {
                    MealAction::SaveFinished(update_meal.update(meal_id, request).await)
                }))
            }

            MealAction::SaveFinished(result) => {
                let mut next = state;
                next.is_loading = false;
                match result {
                    Ok(()) => Step::next(next).with_event(MealUiEvent::MealSaved),
                    Err(error) => {
                        tracing::debug!(%error, "meal save failed");
                        let kind = MessageKind::from(&error);
                        Step::next(next).with_event(MealUiEvent::ShowMessage(kind))
                    }
                }
            }

            MealAction::AddFoodIconClick => {
                Step::next(state).with_event(MealUiEvent::NavigateToSearchFood)
            }

            MealAction::NavigateBackClick => {
                let mut next = state;
                next.show_exit_dialog = true;
                Step::next(next)
            }

            MealAction::NavigateBackConfirmClick => {
                let mut next = state;
                next.show_exit_dialog = false;
                Step::next(next).with_event(MealUiEvent::NavigateBack)
            }

            MealAction::NavigateBackDenyClick => {
                let mut next = state;
                next.show_exit_dialog = false;
                Step::next(next)
            }

            MealAction::MealLoaded(Some(meal)) => {
                let mut next = state;
                next.meal_name = meal.name;
                next.consumed_foods = meal.consumed_foods;
                Step::next(next)
            }

            // The record does not exist (yet); keep whatever is on screen.
            MealAction::MealLoaded(None) => Step::next(state),
        }
    }
}
