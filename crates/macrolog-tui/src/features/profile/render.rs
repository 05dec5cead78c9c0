//! Profile page views and the shared body metrics form.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::form::ProfileForm;
use super::view::{GoalChip, ProfileCard};
use crate::navigation::ProfileView;

pub struct ProfileRender<'a> {
    pub view: ProfileView,
    pub card: Option<&'a ProfileCard>,
    pub chips: &'a [GoalChip],
    pub info_form: &'a ProfileForm,
    pub saving: bool,
}

pub fn render_profile(frame: &mut Frame, profile: &ProfileRender<'_>, area: Rect) {
    match profile.view {
        ProfileView::Main => render_card(frame, profile.card, area),
        ProfileView::UpdateGoals => render_goal_chips(frame, profile.chips, profile.saving, area),
        ProfileView::UpdateInfo => render_form(frame, profile.info_form, profile.saving, area),
    }
}

fn render_card(frame: &mut Frame, card: Option<&ProfileCard>, area: Rect) {
    let Some(card) = card else {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No profile loaded.",
                Style::default().fg(Color::DarkGray),
            )),
            area,
        );
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            card.name.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        field_line("Age", &card.age),
        field_line("Height", &card.height),
        field_line("Weight", &card.weight),
        field_line("Sex", &card.sex),
        field_line("Goal", &card.goal),
        Line::default(),
        field_line("Calories", &format!("{} kcal / day", card.calorie_target)),
        field_line("Protein", &format!("{} g / day", card.protein_target)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn field_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label:<10}"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value.to_string()),
    ])
}

fn render_goal_chips(frame: &mut Frame, chips: &[GoalChip], saving: bool, area: Rect) {
    let mut spans = Vec::new();
    for chip in chips {
        let style = if chip.selected {
            Style::default()
                .bg(Color::Green)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", chip.label), style));
        spans.push(Span::raw("  "));
    }

    let status = if saving {
        "Saving…"
    } else {
        "←/→ to preview a goal, Enter to save"
    };
    let lines = vec![
        Line::from(spans),
        Line::default(),
        Line::from(Span::styled(status, Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Draws a labelled form with the focused field marked.
pub fn render_form(frame: &mut Frame, form: &ProfileForm, saving: bool, area: Rect) {
    let mut lines = Vec::with_capacity(form.fields.len() + 2);
    for (i, field) in form.fields.iter().enumerate() {
        let focused = i == form.focus;
        let marker = if focused { "▶ " } else { "  " };
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let mut spans = vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(format!("{:<13}", field.label), label_style),
        ];
        if field.is_choice() {
            spans.push(Span::styled(
                format!("‹ {} ›", field.display()),
                Style::default().fg(Color::Cyan),
            ));
        } else {
            spans.push(Span::raw(field.display()));
            if focused {
                spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
            }
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    } else if saving {
        lines.push(Line::from(Span::styled(
            "Saving…",
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(Paragraph::new(lines), area);
}
