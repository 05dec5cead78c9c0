//! Dashboard view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph};

use super::view::{DashboardView, Meter};

/// Height needed to draw both meters.
pub const DASHBOARD_HEIGHT: u16 = 4;

pub fn render_dashboard(frame: &mut Frame, view: Option<&DashboardView>, area: Rect) {
    let Some(view) = view else {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Loading today's totals…",
                Style::default().fg(Color::DarkGray),
            )),
            area,
        );
        return;
    };

    let rows = Layout::vertical([Constraint::Length(2), Constraint::Length(2)]).split(area);
    render_meter(frame, "Calories", "kcal", &view.calories, Color::Green, rows[0]);
    render_meter(frame, "Protein", "g", &view.protein, Color::Cyan, rows[1]);
}

fn render_meter(
    frame: &mut Frame,
    label: &str,
    unit: &str,
    meter: &Meter,
    color: Color,
    area: Rect,
) {
    let [label_area, gauge_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    let line = Line::from(vec![
        Span::styled(
            format!("{label} "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} / {} {unit}", meter.tracked, meter.target),
            Style::default().fg(color),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), label_area);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio((meter.percent / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.0}%", meter.percent));
    frame.render_widget(gauge, gauge_area);
}
