//! Food detail key handling and the add-or-update log controller.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use macrolog_core::models::{Food, LogRequest};

use super::state::FoodDetailState;
use crate::common::{TaskKind, format_number};
use crate::effects::UiEffect;
use crate::features::KeyResult;
use crate::navigation::{Page, go_to_page};
use crate::state::TuiState;

/// Shows `food` for a new entry with the grams reset to 100.
pub fn open_for_add(tui: &mut TuiState, food: Food) {
    tui.selection.log_id = None;
    tui.foods.insert(food.clone());
    tui.food_detail = FoodDetailState {
        food: Some(food),
        grams: "100".to_string(),
    };
    go_to_page(tui, Page::FoodDetail);
    tui.refresh_food_detail();
}

/// Selects entry `log_id` and shows `food` pre-filled with its grams.
pub fn open_for_edit(tui: &mut TuiState, food: Food, log_id: i64, grams: f64) {
    tui.selection.log_id = Some(log_id);
    tui.food_detail = FoodDetailState {
        food: Some(food),
        grams: format_number(grams),
    };
    go_to_page(tui, Page::FoodDetail);
    tui.refresh_food_detail();
}

/// A food fetched for editing arrived. Ignored if the user moved on.
pub fn on_food_loaded(tui: &mut TuiState, food: Food, log_id: i64, grams: f64) {
    tui.foods.insert(food.clone());
    if tui.nav.page() != Page::Log {
        tracing::debug!(log_id, "food loaded after leaving the log page");
        return;
    }
    open_for_edit(tui, food, log_id, grams);
}

pub fn handle_key(tui: &mut TuiState, key: KeyEvent) -> KeyResult {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyResult::Ignored;
    }
    match key.code {
        KeyCode::Enter => KeyResult::Handled(submit(tui)),
        KeyCode::Backspace => {
            tui.food_detail.grams.pop();
            tui.refresh_food_detail();
            KeyResult::handled()
        }
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
            let grams = &mut tui.food_detail.grams;
            let accepts = grams.len() < FoodDetailState::MAX_GRAMS_LEN
                && (c != '.' || !grams.contains('.'));
            if accepts {
                grams.push(c);
                tui.refresh_food_detail();
            }
            KeyResult::handled()
        }
        _ => KeyResult::Ignored,
    }
}

/// Creates an entry when nothing is selected, otherwise updates the selected
/// one.
pub fn submit(tui: &mut TuiState) -> Vec<UiEffect> {
    let Some(food) = tui.food_detail.food.as_ref() else {
        return vec![];
    };
    if tui.tasks.is_mutating() {
        tracing::debug!("write in flight, ignoring submit");
        return vec![];
    }
    let grams = tui
        .food_detail
        .grams
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|grams| grams.is_finite() && *grams > 0.0);
    let Some(grams) = grams else {
        tui.notice = Some("Enter an amount in grams above 0".to_string());
        return vec![];
    };

    let request = LogRequest {
        food_id: food.id,
        grams,
    };
    let log_id = tui.selection.log_id;
    tracing::info!(food_id = food.id, grams, ?log_id, "submitting log");
    let task = tui.begin_task(TaskKind::LogSubmit);
    vec![UiEffect::SubmitLog {
        task,
        log_id,
        request,
    }]
}
