//! Profile page controllers: sub-view switching, goal preview and save,
//! info update.

use crossterm::event::{KeyCode, KeyEvent};

use super::form::FormKey;
use crate::common::TaskKind;
use crate::effects::{InitReason, UiEffect};
use crate::features::KeyResult;
use crate::navigation::{ProfileView, go_to_profile_view};
use crate::overlays::OverlayRequest;
use crate::state::TuiState;

pub fn handle_key(tui: &mut TuiState, key: KeyEvent) -> KeyResult {
    match tui.nav.profile_view() {
        ProfileView::Main => handle_main_key(tui, key),
        ProfileView::UpdateGoals => handle_goals_key(tui, key),
        ProfileView::UpdateInfo => handle_info_key(tui, key),
    }
}

fn handle_main_key(tui: &mut TuiState, key: KeyEvent) -> KeyResult {
    if tui.session.profile.is_none() {
        return KeyResult::Ignored;
    }
    match key.code {
        KeyCode::Char('g') => {
            if let Some(profile) = &tui.session.profile {
                tui.selection.goal = profile.goal;
            }
            tui.refresh_goal_chips();
            go_to_profile_view(tui, ProfileView::UpdateGoals);
            KeyResult::handled()
        }
        KeyCode::Char('i') => {
            if let Some(profile) = &tui.session.profile {
                tui.info_form.prefill(profile);
            }
            go_to_profile_view(tui, ProfileView::UpdateInfo);
            KeyResult::handled()
        }
        KeyCode::Char('x') => KeyResult::Open(OverlayRequest::DeleteAccount),
        _ => KeyResult::Ignored,
    }
}

fn handle_goals_key(tui: &mut TuiState, key: KeyEvent) -> KeyResult {
    match key.code {
        KeyCode::Left | KeyCode::Up => {
            preview_goal(tui, false);
            KeyResult::handled()
        }
        KeyCode::Right | KeyCode::Down => {
            preview_goal(tui, true);
            KeyResult::handled()
        }
        KeyCode::Enter => KeyResult::Handled(save_goal(tui)),
        _ => KeyResult::Ignored,
    }
}

/// Moves the highlighted goal chip. Nothing is sent.
fn preview_goal(tui: &mut TuiState, forward: bool) {
    let goals = macrolog_core::models::Goal::all();
    let current = goals
        .iter()
        .position(|goal| *goal == tui.selection.goal)
        .unwrap_or(0);
    let next = if forward {
        (current + 1) % goals.len()
    } else {
        (current + goals.len() - 1) % goals.len()
    };
    tui.selection.goal = goals[next];
    tui.refresh_goal_chips();
}

/// Sends the full profile with the previewed goal.
pub fn save_goal(tui: &mut TuiState) -> Vec<UiEffect> {
    let Some(profile) = &tui.session.profile else {
        return vec![];
    };
    if tui.tasks.profile_save.is_running() {
        return vec![];
    }
    let input = profile.with_goal(tui.selection.goal);
    tracing::info!(goal = input.goal.as_str(), "saving goal");
    let task = tui.begin_task(TaskKind::ProfileSave);
    vec![UiEffect::SaveProfile {
        task,
        profile: input,
        reason: InitReason::ProfileChanged,
    }]
}

fn handle_info_key(tui: &mut TuiState, key: KeyEvent) -> KeyResult {
    match tui.info_form.handle_key(key) {
        FormKey::Ignored => KeyResult::Ignored,
        FormKey::Consumed => KeyResult::handled(),
        FormKey::Submit => KeyResult::Handled(save_info(tui)),
    }
}

/// Merges the edited metrics onto the cached profile, keeping its goal.
pub fn save_info(tui: &mut TuiState) -> Vec<UiEffect> {
    let Some(goal) = tui.session.profile.as_ref().map(|profile| profile.goal) else {
        return vec![];
    };
    if tui.tasks.profile_save.is_running() {
        return vec![];
    }
    match tui.info_form.to_input(goal) {
        Ok(input) => {
            tracing::info!("saving profile info");
            let task = tui.begin_task(TaskKind::ProfileSave);
            vec![UiEffect::SaveProfile {
                task,
                profile: input,
                reason: InitReason::ProfileChanged,
            }]
        }
        Err(error) => {
            tui.info_form.error = Some(error);
            vec![]
        }
    }
}
