//! Food lookups.

use macrolog_core::api::ApiClient;

use crate::events::UiEvent;

pub async fn search_foods(api: ApiClient, query: String) -> UiEvent {
    match api.search_foods(&query).await {
        Ok(foods) => UiEvent::SearchLoaded { query, foods },
        Err(err) => UiEvent::SearchFailed {
            query,
            error: err.to_string(),
        },
    }
}

/// Fetches the food behind a log entry so the entry can be edited.
pub async fn load_food(api: ApiClient, food_id: i64, log_id: i64, grams: f64) -> UiEvent {
    match api.get_food(food_id).await {
        Ok(food) => UiEvent::FoodLoaded {
            food,
            log_id,
            grams,
        },
        Err(err) => UiEvent::FoodLoadFailed {
            error: err.to_string(),
        },
    }
}
