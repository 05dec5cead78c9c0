//! Menu scan view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::view::MenuScanView;
use crate::overlays::render_utils::{InputLine, render_input_line, render_separator};

pub fn render_menu_scan(
    frame: &mut Frame,
    path: &str,
    view: &MenuScanView,
    spinner: &str,
    area: Rect,
) {
    let [input_area, _, body_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .areas(area);

    render_input_line(
        frame,
        input_area,
        &InputLine {
            value: path,
            placeholder: Some("Path to a menu photo, then Enter"),
            prompt: "> ",
            prompt_color: Color::DarkGray,
            text_color: Color::Yellow,
            placeholder_color: Color::DarkGray,
            cursor_color: Color::Yellow,
        },
    );
    render_separator(frame, area, 1);

    let dim = Style::default().fg(Color::DarkGray);
    let lines = match view {
        MenuScanView::Idle => vec![Line::from(Span::styled(
            "Snap a restaurant menu and get picks that fit your goal.",
            dim,
        ))],
        MenuScanView::Loading => vec![Line::from(Span::styled(
            format!("{spinner} Analyzing menu…"),
            dim,
        ))],
        MenuScanView::Empty(message) => vec![Line::from(Span::styled(*message, dim))],
        MenuScanView::Failed(message) => vec![Line::from(Span::styled(
            *message,
            Style::default().fg(Color::Red),
        ))],
        MenuScanView::Results(cards) => {
            let mut lines = Vec::new();
            for card in cards {
                lines.push(Line::from(Span::styled(
                    card.name.clone(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(card.reasoning.clone()));
                for context in &card.context {
                    lines.push(Line::from(Span::styled(format!("  • {context}"), dim)));
                }
                lines.push(Line::default());
            }
            lines
        }
    };
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        body_area,
    );
}
