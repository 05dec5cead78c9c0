//! First-time setup: the pre-setup view shown until a profile exists.

use crossterm::event::KeyEvent;
use macrolog_core::models::Goal;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::TaskKind;
use crate::effects::{InitReason, UiEffect};
use crate::features::KeyResult;
use crate::features::profile::{FormKey, ProfileForm, render_form};
use crate::state::TuiState;

pub fn handle_key(tui: &mut TuiState, key: KeyEvent) -> KeyResult {
    match tui.setup_form.handle_key(key) {
        FormKey::Ignored => KeyResult::Ignored,
        FormKey::Consumed => KeyResult::handled(),
        FormKey::Submit => KeyResult::Handled(submit(tui)),
    }
}

/// Creates the profile from the form.
fn submit(tui: &mut TuiState) -> Vec<UiEffect> {
    if tui.tasks.profile_save.is_running() {
        return vec![];
    }
    match tui.setup_form.to_input(Goal::default()) {
        Ok(profile) => {
            tracing::info!("creating profile");
            let task = tui.begin_task(TaskKind::ProfileSave);
            vec![UiEffect::SaveProfile {
                task,
                profile,
                reason: InitReason::SetupCompleted,
            }]
        }
        Err(error) => {
            tui.setup_form.error = Some(error);
            vec![]
        }
    }
}

pub fn render_setup(frame: &mut Frame, form: &ProfileForm, saving: bool, area: Rect) {
    let [intro_area, form_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(area);

    let intro = vec![
        Line::from(Span::styled(
            "Welcome! Set up your profile",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Your daily calorie and protein targets are calculated from these.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(intro), intro_area);
    render_form(frame, form, saving, form_area);
}
