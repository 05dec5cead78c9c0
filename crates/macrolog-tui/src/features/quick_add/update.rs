//! Quick add key handling and the debounced search controller.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use macrolog_core::models::Food;

use super::view::SearchResultsView;
use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::features::{KeyResult, food_detail};
use crate::state::TuiState;

pub fn handle_key(tui: &mut TuiState, key: KeyEvent) -> KeyResult {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Up => {
            tui.quick_add.select_prev();
            KeyResult::handled()
        }
        KeyCode::Down => {
            tui.quick_add.select_next();
            KeyResult::handled()
        }
        KeyCode::Enter => {
            if let Some(food) = tui.quick_add.selected_food().cloned() {
                food_detail::open_for_add(tui, food);
            }
            KeyResult::handled()
        }
        KeyCode::Backspace => {
            tui.quick_add.query.pop();
            on_query_changed(tui);
            KeyResult::handled()
        }
        KeyCode::Char('u') if ctrl => {
            tui.quick_add.query.clear();
            on_query_changed(tui);
            KeyResult::handled()
        }
        KeyCode::Char(c) if !ctrl => {
            tui.quick_add.query.push(c);
            on_query_changed(tui);
            KeyResult::handled()
        }
        _ => KeyResult::Ignored,
    }
}

/// Reacts to an edit of the query.
///
/// A query below the minimum clears the results at once and drops both the
/// pending and the in-flight search. Anything longer restarts the quiet
/// period.
pub fn on_query_changed(tui: &mut TuiState) {
    let query = tui.quick_add.query.trim().to_string();
    if !tui.quick_add.is_searchable(&query) {
        tui.quick_add.debouncer.cancel();
        tui.quick_add.results.clear();
        tui.quick_add.selected = 0;
        tui.tasks.search.clear();
        tui.regions.search_results = SearchResultsView::Cleared;
        return;
    }
    tui.quick_add.debouncer.schedule(query, tui.clock);
}

/// Fires the pending search once the quiet period is over.
pub fn on_tick(tui: &mut TuiState) -> Vec<UiEffect> {
    let Some(query) = tui.quick_add.debouncer.poll(tui.clock) else {
        return vec![];
    };
    tracing::debug!(%query, "search");
    let task = tui.begin_task(TaskKind::Search);
    vec![UiEffect::SearchFoods { task, query }]
}

pub fn on_search_loaded(tui: &mut TuiState, query: &str, foods: Vec<Food>) {
    tracing::debug!(query, count = foods.len(), "search results");
    tui.quick_add.results = foods;
    tui.quick_add.selected = 0;
    tui.refresh_search_results();
}

/// Keeps whatever was shown before.
pub fn on_search_failed(query: &str, error: &str) {
    tracing::warn!(query, error, "food search failed");
}
