//! Log page key handling: pick an entry to edit or delete.

use crossterm::event::{KeyCode, KeyEvent};

use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::features::{KeyResult, food_detail};
use crate::overlays::OverlayRequest;
use crate::state::TuiState;

pub fn handle_key(tui: &mut TuiState, key: KeyEvent) -> KeyResult {
    let rows = tui.regions.history_log.rows();
    let selected = rows.get(tui.log_cursor).map(|row| (row.id, row.name.clone()));
    let len = rows.len();

    match key.code {
        KeyCode::Up => {
            tui.log_cursor = tui.log_cursor.saturating_sub(1);
            KeyResult::handled()
        }
        KeyCode::Down => {
            if len > 0 {
                tui.log_cursor = (tui.log_cursor + 1).min(len - 1);
            }
            KeyResult::handled()
        }
        KeyCode::Enter => match selected {
            Some((log_id, _)) => KeyResult::Handled(start_edit(tui, log_id)),
            None => KeyResult::handled(),
        },
        KeyCode::Char('d') | KeyCode::Delete => match selected {
            Some((log_id, name)) => KeyResult::Open(OverlayRequest::DeleteLog { log_id, name }),
            None => KeyResult::handled(),
        },
        _ => KeyResult::Ignored,
    }
}

/// Selects entry `log_id` for editing. Uses the cached food when there is
/// one, otherwise fetches it first.
pub fn start_edit(tui: &mut TuiState, log_id: i64) -> Vec<UiEffect> {
    let Some(entry) = tui
        .session
        .daily_log
        .as_ref()
        .and_then(|bundle| bundle.entry(log_id))
        .cloned()
    else {
        return vec![];
    };

    if let Some(food) = tui.foods.get(entry.food_id).cloned() {
        food_detail::open_for_edit(tui, food, log_id, entry.grams);
        return vec![];
    }

    let task = tui.begin_task(TaskKind::FoodLoad);
    vec![UiEffect::LoadFood {
        task,
        food_id: entry.food_id,
        log_id,
        grams: entry.grams,
    }]
}
