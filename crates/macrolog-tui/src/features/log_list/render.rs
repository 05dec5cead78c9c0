//! Log list view.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::view::{LogListView, LogRow};
use crate::common::truncate_with_ellipsis;

/// Draws a log list. `selected` highlights a row when the list is interactive.
pub fn render_log_list(
    frame: &mut Frame,
    view: &LogListView,
    selected: Option<usize>,
    area: Rect,
) {
    let rows = match view {
        LogListView::Empty(message) => {
            frame.render_widget(
                Paragraph::new(Span::styled(*message, Style::default().fg(Color::DarkGray)))
                    .alignment(Alignment::Center),
                area,
            );
            return;
        }
        LogListView::Rows(rows) => rows,
    };

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| build_log_item(row, area.width))
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::Green)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(selected.map(|i| i.min(rows.len().saturating_sub(1))));
    frame.render_stateful_widget(list, area, &mut state);
}

fn build_log_item(row: &LogRow, width: u16) -> ListItem<'static> {
    let right = format!("{}  {}", row.calories, row.protein);
    let left_budget = (width as usize)
        .saturating_sub(right.width() + 4)
        .max(8);
    let left = truncate_with_ellipsis(&format!("{} · {}", row.name, row.grams), left_budget);
    let pad = (width as usize)
        .saturating_sub(left.width() + right.width() + 2)
        .max(1);

    ListItem::new(Line::from(vec![
        Span::raw(left),
        Span::raw(" ".repeat(pad)),
        Span::styled(right, Style::default().fg(Color::Green)),
    ]))
}
