//! Quick add view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use super::state::QuickAddState;
use super::view::SearchResultsView;
use crate::common::truncate_with_ellipsis;
use crate::overlays::render_utils::{InputLine, render_input_line, render_separator};

pub fn render_quick_add(
    frame: &mut Frame,
    state: &QuickAddState,
    view: &SearchResultsView,
    searching: Option<&str>,
    area: Rect,
) {
    let [input_area, _, results_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .areas(area);

    render_input_line(
        frame,
        input_area,
        &InputLine {
            value: &state.query,
            placeholder: Some("Search foods…"),
            prompt: "> ",
            prompt_color: Color::DarkGray,
            text_color: Color::Yellow,
            placeholder_color: Color::DarkGray,
            cursor_color: Color::Yellow,
        },
    );
    render_separator(frame, area, 1);

    let dim = Style::default().fg(Color::DarkGray);
    match view {
        SearchResultsView::Cleared => {
            let hint = if let Some(spinner) = searching {
                format!("{spinner} Searching…")
            } else {
                format!("Type at least {} characters to search", state.min_chars)
            };
            frame.render_widget(Paragraph::new(Span::styled(hint, dim)), results_area);
        }
        SearchResultsView::Empty(message) => {
            frame.render_widget(Paragraph::new(Span::styled(*message, dim)), results_area);
        }
        SearchResultsView::Rows(rows) => {
            let width = results_area.width.saturating_sub(2) as usize;
            let items: Vec<ListItem> = rows
                .iter()
                .map(|row| ListItem::new(truncate_with_ellipsis(&row.name, width)))
                .collect();
            let list = List::new(items)
                .highlight_style(
                    Style::default()
                        .bg(Color::Green)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("▶ ");
            let mut list_state = ListState::default();
            list_state.select(Some(state.selected.min(rows.len().saturating_sub(1))));
            frame.render_stateful_widget(list, results_area, &mut list_state);
        }
    }
}
