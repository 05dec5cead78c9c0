//! Food detail view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::view::{DetailMode, NutritionPanel};

pub fn render_food_detail(
    frame: &mut Frame,
    panel: Option<&NutritionPanel>,
    grams_input: &str,
    submitting: bool,
    area: Rect,
) {
    let Some(panel) = panel else {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No food selected.",
                Style::default().fg(Color::DarkGray),
            )),
            area,
        );
        return;
    };

    let [name_area, grams_area, macros_area, action_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(6),
        Constraint::Min(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            panel.name.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        name_area,
    );

    let grams = Line::from(vec![
        Span::styled("Amount: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(grams_input.to_string(), Style::default().fg(Color::Yellow)),
        Span::styled("█", Style::default().fg(Color::Yellow)),
        Span::raw(" g"),
    ]);
    frame.render_widget(Paragraph::new(grams), grams_area);

    let macros = vec![
        macro_line("Calories", panel.calories, "kcal", Color::Green),
        macro_line("Protein", panel.protein, "g", Color::Cyan),
        macro_line("Carbs", panel.carbs, "g", Color::Blue),
        macro_line("Fat", panel.fat, "g", Color::Magenta),
    ];
    frame.render_widget(
        Paragraph::new(macros).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Nutrition "),
        ),
        macros_area,
    );

    let action = match (submitting, panel.mode) {
        (true, _) => "Saving…",
        (false, DetailMode::Add) => "Enter to add to today's log",
        (false, DetailMode::Edit) => "Enter to update this entry",
    };
    frame.render_widget(
        Paragraph::new(Span::styled(action, Style::default().fg(Color::DarkGray))),
        action_area,
    );
}

fn macro_line(label: &str, value: i64, unit: &str, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label:<9}"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{value} {unit}"), Style::default().fg(color)),
    ])
}
