//! Yes/no confirmation before a destructive request.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::OverlayUpdate;
use super::render_utils::{InputHint, OverlayConfig, render_overlay};
use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::state::TuiState;

/// What confirming does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteLog { log_id: i64, name: String },
    DeleteAccount,
}

#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub action: ConfirmAction,
    /// Focused button; starts on "No".
    pub yes_focused: bool,
}

impl ConfirmState {
    pub fn open(action: ConfirmAction) -> Self {
        Self {
            action,
            yes_focused: false,
        }
    }

    fn title(&self) -> &'static str {
        match self.action {
            ConfirmAction::DeleteLog { .. } => "Delete Entry",
            ConfirmAction::DeleteAccount => "Delete Account",
        }
    }

    fn question(&self) -> String {
        match &self.action {
            ConfirmAction::DeleteLog { name, .. } => format!("Delete \"{name}\" from today's log?"),
            ConfirmAction::DeleteAccount => {
                "Delete your account? Your profile and logs will be removed.".to_string()
            }
        }
    }

    pub fn handle_key(&mut self, tui: &mut TuiState, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc | KeyCode::Char('n' | 'N') => OverlayUpdate::close(),
            KeyCode::Char('c') if ctrl => OverlayUpdate::close(),
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.yes_focused = !self.yes_focused;
                OverlayUpdate::stay()
            }
            KeyCode::Char('y' | 'Y') => self.confirm(tui),
            KeyCode::Enter if self.yes_focused => self.confirm(tui),
            KeyCode::Enter => OverlayUpdate::close(),
            _ => OverlayUpdate::stay(),
        }
    }

    fn confirm(&self, tui: &mut TuiState) -> OverlayUpdate {
        if tui.tasks.is_mutating() {
            tracing::debug!("write in flight, ignoring confirmation");
            tui.notice = Some("Still saving, try again in a moment".to_string());
            return OverlayUpdate::close();
        }
        let effect = match &self.action {
            ConfirmAction::DeleteLog { log_id, .. } => {
                tracing::info!(log_id, "deleting log entry");
                UiEffect::DeleteLog {
                    task: tui.begin_task(TaskKind::LogDelete),
                    log_id: *log_id,
                }
            }
            ConfirmAction::DeleteAccount => {
                tracing::info!("deleting account");
                UiEffect::DeleteAccount {
                    task: tui.begin_task(TaskKind::AccountDelete),
                }
            }
        };
        OverlayUpdate::close().with_ui_effects(vec![effect])
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let hints = [
            InputHint::new("y", "yes"),
            InputHint::new("n", "no"),
            InputHint::new("←/→", "choose"),
        ];
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: self.title(),
                border_color: Color::Red,
                width: 52,
                height: 8,
                hints: &hints,
            },
        );

        let question_area = Rect::new(
            layout.body.x,
            layout.body.y,
            layout.body.width,
            layout.body.height.saturating_sub(2),
        );
        frame.render_widget(
            Paragraph::new(self.question())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            question_area,
        );

        let button = |label: &'static str, focused: bool| {
            if focused {
                Span::styled(
                    format!(" {label} "),
                    Style::default()
                        .bg(Color::Red)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(format!(" {label} "), Style::default().fg(Color::Gray))
            }
        };
        let buttons = Line::from(vec![
            button("Yes", self.yes_focused),
            Span::raw("   "),
            button("No", !self.yes_focused),
        ]);
        let buttons_area = Rect::new(
            layout.body.x,
            layout.body.y + layout.body.height.saturating_sub(1),
            layout.body.width,
            1,
        );
        frame.render_widget(
            Paragraph::new(buttons).alignment(Alignment::Center),
            buttons_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use macrolog_core::config::Config;

    use super::*;
    use crate::overlays::OverlayTransition;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_declining_sends_nothing() {
        let mut tui = TuiState::new(Config::default());
        let mut confirm = ConfirmState::open(ConfirmAction::DeleteAccount);

        let update = confirm.handle_key(&mut tui, key(KeyCode::Enter));
        assert!(matches!(update.transition, OverlayTransition::Close));
        assert!(update.effects.is_empty());

        let update = confirm.handle_key(&mut tui, key(KeyCode::Char('n')));
        assert!(update.effects.is_empty());
        assert!(!tui.tasks.account_delete.is_running());
    }

    #[test]
    fn test_confirming_deletes_the_entry() {
        let mut tui = TuiState::new(Config::default());
        let mut confirm = ConfirmState::open(ConfirmAction::DeleteLog {
            log_id: 12,
            name: "Toast".to_string(),
        });

        confirm.handle_key(&mut tui, key(KeyCode::Right));
        let update = confirm.handle_key(&mut tui, key(KeyCode::Enter));

        assert!(matches!(
            update.effects.as_slice(),
            [UiEffect::DeleteLog { log_id: 12, .. }]
        ));
        assert!(tui.tasks.log_delete.is_running());
    }

    #[test]
    fn test_confirming_during_a_write_sends_nothing() {
        let mut tui = TuiState::new(Config::default());
        tui.begin_task(TaskKind::LogSubmit);
        let mut confirm = ConfirmState::open(ConfirmAction::DeleteAccount);

        let update = confirm.handle_key(&mut tui, key(KeyCode::Char('y')));

        assert!(matches!(update.transition, OverlayTransition::Close));
        assert!(update.effects.is_empty());
        assert!(!tui.tasks.account_delete.is_running());
        assert!(tui.notice.is_some());
    }
}
