//! Plan page: what is left of today's targets.

use macrolog_core::models::{DailyLogBundle, UserProfile};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::round_display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanView {
    pub goal: String,
    pub calorie_target: i64,
    pub protein_target: i64,
    pub calories_remaining: i64,
    pub protein_remaining: i64,
}

/// Remaining = `max(0, round(target) - round(tracked))`.
pub fn project_plan(
    profile: Option<&UserProfile>,
    bundle: Option<&DailyLogBundle>,
) -> Option<PlanView> {
    let profile = profile?;
    let totals = bundle.map(|b| b.totals).unwrap_or_default();
    let calorie_target = round_display(profile.calorie_target);
    let protein_target = round_display(profile.protein_target);
    Some(PlanView {
        goal: profile.goal.label(),
        calorie_target,
        protein_target,
        calories_remaining: (calorie_target - round_display(totals.calories)).max(0),
        protein_remaining: (protein_target - round_display(totals.protein)).max(0),
    })
}

pub fn render_plan(frame: &mut Frame, view: Option<&PlanView>, area: Rect) {
    let Some(view) = view else {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No plan yet.",
                Style::default().fg(Color::DarkGray),
            )),
            area,
        );
        return;
    };

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(vec![
            Span::styled("Goal: ", bold),
            Span::styled(view.goal.clone(), Style::default().fg(Color::Yellow)),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("Calories left: ", bold),
            Span::styled(
                format!("{} of {} kcal", view.calories_remaining, view.calorie_target),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled("Protein left:  ", bold),
            Span::styled(
                format!("{}g of {}g", view.protein_remaining, view.protein_target),
                Style::default().fg(Color::Cyan),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
