mod common;

use std::time::Duration;

use common::{consumed, food, next_event, wait_for};
use futures::StreamExt;
use mealtrack::domain::{
    CreateConsumedFood, CreateMeal, CreateMealUseCase, DomainError, GetMealByIdUseCase, MealStore,
    UpdateMeal, UpdateMealUseCase,
};
use mealtrack::mvi::ScreenArgs;
use mealtrack::runtime::ScreenHandle;
use mealtrack::screens::meal::{MealAction, MealDispatcher, MealUiEvent, MEAL_ID_ARG};
use std::sync::Arc;

fn seeded_store() -> MealStore {
    MealStore::with_foods(vec![
        food(1, "Oats", 389, 17, 7, 66),
        food(2, "Milk", 42, 3, 1, 5),
    ])
}

#[tokio::test]
async fn create_assigns_sequential_ids() {
    let store = seeded_store();
    let first = store
        .create(CreateMeal {
            name: "Breakfast".to_string(),
            consumed_foods: vec![CreateConsumedFood { food_id: 1, grams: 50 }],
        })
        .await
        .expect("create");
    let second = store
        .create(CreateMeal {
            name: "Lunch".to_string(),
            consumed_foods: Vec::new(),
        })
        .await
        .expect("create");

    assert_eq!(second.id, first.id + 1);
    assert_eq!(first.consumed_foods[0].food.name, "Oats");
    assert_eq!(store.meal(first.id).unwrap().name, "Breakfast");
}

#[tokio::test]
async fn create_rejects_blank_name() {
    let store = seeded_store();
    let result = store
        .create(CreateMeal {
            name: "   ".to_string(),
            consumed_foods: Vec::new(),
        })
        .await;
    assert_eq!(result, Err(DomainError::EmptyMealName));
}

#[tokio::test]
async fn update_rejects_unknown_food() {
    let store = seeded_store();
    let meal = store.insert_meal("Dinner", Vec::new());
    let result = store
        .update(
            meal.id,
            UpdateMeal {
                name: "Dinner".to_string(),
                consumed_foods: vec![CreateConsumedFood {
                    food_id: 99,
                    grams: 100,
                }],
            },
        )
        .await;
    assert_eq!(result, Err(DomainError::UnknownFood(99)));
}

#[tokio::test]
async fn update_of_missing_meal_is_unclassified() {
    let store = seeded_store();
    let result = store
        .update(
            404,
            UpdateMeal {
                name: "Ghost".to_string(),
                consumed_foods: Vec::new(),
            },
        )
        .await;
    assert!(matches!(result, Err(DomainError::Unexpected(_))));
}

#[tokio::test]
async fn observe_yields_current_snapshot_then_updates() {
    let store = seeded_store();
    let meal = store.insert_meal("Dinner", vec![consumed(food(1, "Oats", 389, 17, 7, 66), 40)]);

    let mut snapshots = store.observe(meal.id);
    let first = snapshots.next().await.flatten().expect("initial snapshot");
    assert_eq!(first.name, "Dinner");

    store
        .update(
            meal.id,
            UpdateMeal {
                name: "Supper".to_string(),
                consumed_foods: vec![CreateConsumedFood { food_id: 2, grams: 250 }],
            },
        )
        .await
        .expect("update");

    let second = tokio::time::timeout(Duration::from_secs(2), snapshots.next())
        .await
        .expect("snapshot in time")
        .flatten()
        .expect("updated snapshot");
    assert_eq!(second.name, "Supper");
    assert_eq!(second.consumed_foods[0].food.name, "Milk");
}

#[tokio::test]
async fn observe_before_meal_exists_starts_with_none() {
    let store = seeded_store();
    let mut snapshots = store.observe(12);
    assert_eq!(snapshots.next().await, Some(None));
}

// End-to-end: the edit screen saves through the store and the store's
// subscription feeds the saved record back into screen state.
#[tokio::test]
async fn edit_screen_roundtrip_through_store() {
    let store = seeded_store();
    let meal = store.insert_meal("Dinner", vec![consumed(food(1, "Oats", 389, 17, 7, 66), 40)]);

    let shared: Arc<MealStore> = Arc::new(store.clone());
    let dispatcher = MealDispatcher::new(shared.clone(), shared);
    let handle = ScreenHandle::attach(
        dispatcher,
        ScreenArgs::new().with_int(MEAL_ID_ARG, meal.id),
    )
    .expect("attach");

    let mut state = handle.watch_state();
    wait_for(&mut state, |s| s.meal_name == "Dinner").await;

    handle.on_action(MealAction::MealNameChange("Supper".to_string()));
    handle.on_action(MealAction::SaveMealClick);

    let events = handle.events();
    assert_eq!(next_event(&events).await, MealUiEvent::MealSaved);
    let settled = wait_for(&mut state, |s| !s.is_loading).await;
    assert_eq!(settled.meal_name, "Supper");

    // The store record was replaced through the use-case.
    assert_eq!(store.meal(meal.id).unwrap().name, "Supper");
}
