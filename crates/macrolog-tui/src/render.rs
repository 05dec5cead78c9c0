//! Pure view/render functions for the TUI.
//!
//! This module contains all rendering logic. Functions here:
//! - Take `&AppState` by immutable reference
//! - Draw to a ratatui Frame
//! - Never mutate state or return effects
//!
//! Everything drawn comes from `Navigation` or `Regions`; nothing here
//! computes nutrition numbers or decides what a page shows.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::{TaskKind, truncate_with_ellipsis};
use crate::features::ai_overview::render_ai_overview;
use crate::features::dashboard::{DASHBOARD_HEIGHT, render_dashboard};
use crate::features::food_detail::render_food_detail;
use crate::features::log_list::render_log_list;
use crate::features::menu_scan::render_menu_scan;
use crate::features::plan::render_plan;
use crate::features::profile::{ProfileRender, render_profile};
use crate::features::quick_add::render_quick_add;
use crate::features::setup::render_setup;
use crate::navigation::{Page, ProfileView};
use crate::overlays::OverlayExt;
use crate::overlays::render_utils::{InputHint, hint_spans};
use crate::state::{AppState, Shell, TuiState};

const HEADER_HEIGHT: u16 = 1;
const NAV_HEIGHT: u16 = 1;
const FOOTER_HEIGHT: u16 = 1;

/// Height of the AI overview panel on the diary page.
const AI_OVERVIEW_HEIGHT: u16 = 8;

/// Spinner frames for loading indicators.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Ticks per spinner frame.
pub const SPINNER_SPEED_DIVISOR: usize = 6;

/// Renders the entire TUI to the frame.
///
/// This is a pure render function - it only reads state and draws to frame.
/// No mutations, no side effects.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;

    let [header_area, body_area, nav_area, footer_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(NAV_HEIGHT),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);
    let body_area = inset(body_area);

    render_header(frame, state, header_area);

    match state.shell {
        Shell::Loading => render_loading(frame, state, body_area),
        Shell::Setup => render_setup(
            frame,
            &state.setup_form,
            state.tasks.profile_save.is_running(),
            body_area,
        ),
        Shell::Main => {
            render_page(frame, state, body_area);
            render_nav_bar(frame, state, nav_area);
        }
    }

    render_footer(frame, state, footer_area);

    // Overlay last so it draws on top
    app.overlay.render(frame, area);
}

fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        width: area.width.saturating_sub(2),
        ..area
    }
}

fn spinner(state: &TuiState) -> &'static str {
    SPINNER_FRAMES[(state.spinner_frame / SPINNER_SPEED_DIVISOR) % SPINNER_FRAMES.len()]
}

// ============================================================================
// Chrome
// ============================================================================

fn render_header(frame: &mut Frame, state: &TuiState, area: Rect) {
    let title = match state.shell {
        Shell::Loading => "macrolog",
        Shell::Setup => "Welcome",
        Shell::Main => state.nav.title(),
    };

    let mut spans = Vec::new();
    if state.shell == Shell::Main && state.nav.back_visible() {
        spans.push(Span::styled("← Esc  ", Style::default().fg(Color::DarkGray)));
    }
    spans.push(Span::styled(
        title,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ));

    let header = Paragraph::new(Line::from(spans)).alignment(Alignment::Left);
    frame.render_widget(header, inset(area));
}

fn render_nav_bar(frame: &mut Frame, state: &TuiState, area: Rect) {
    let mut spans = Vec::with_capacity(Page::NAV_BAR.len() * 3);
    for (i, page) in Page::NAV_BAR.iter().enumerate() {
        let style = if state.nav.is_active(*page) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(
            format!("F{}", i + 1),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::styled(format!(" {} ", page.nav_label()), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inset(area));
}

fn render_footer(frame: &mut Frame, state: &TuiState, area: Rect) {
    let area = inset(area);
    if let Some(notice) = &state.notice {
        let text = truncate_with_ellipsis(notice, area.width as usize);
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(Color::Red))),
            area,
        );
        return;
    }

    let hints = footer_hints(state);
    frame.render_widget(
        Paragraph::new(Line::from(hint_spans(&hints, Color::Cyan))),
        area,
    );
}

fn footer_hints(state: &TuiState) -> Vec<InputHint<'static>> {
    let mut hints = match state.shell {
        Shell::Loading => Vec::new(),
        Shell::Setup => vec![
            InputHint::new("Tab", "next"),
            InputHint::new("←→", "choose"),
            InputHint::new("Enter", "save"),
        ],
        Shell::Main => match state.nav.page() {
            Page::Diary => vec![InputHint::new("r", "refresh overview")],
            Page::QuickAdd => vec![
                InputHint::new("↑↓", "select"),
                InputHint::new("Enter", "open"),
            ],
            Page::Log => vec![
                InputHint::new("Enter", "edit"),
                InputHint::new("d", "delete"),
            ],
            Page::Scan => vec![InputHint::new("Enter", "analyze")],
            Page::Plan => Vec::new(),
            Page::Profile => match state.nav.profile_view() {
                ProfileView::Main => vec![
                    InputHint::new("g", "goals"),
                    InputHint::new("i", "info"),
                    InputHint::new("x", "delete account"),
                ],
                ProfileView::UpdateGoals => vec![
                    InputHint::new("←→", "preview"),
                    InputHint::new("Enter", "save"),
                ],
                ProfileView::UpdateInfo => vec![
                    InputHint::new("Tab", "next"),
                    InputHint::new("Enter", "save"),
                ],
            },
            Page::FoodDetail => vec![InputHint::new("Enter", "save")],
        },
    };
    if state.shell == Shell::Main && state.nav.back_visible() {
        hints.push(InputHint::new("Esc", "back"));
    }
    hints.push(InputHint::new("Ctrl+C", "quit"));
    hints
}

// ============================================================================
// Body
// ============================================================================

fn render_loading(frame: &mut Frame, state: &TuiState, area: Rect) {
    let line = Line::from(vec![
        Span::styled(spinner(state), Style::default().fg(Color::Yellow)),
        Span::raw(" Loading…"),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_page(frame: &mut Frame, state: &TuiState, area: Rect) {
    let regions = &state.regions;
    match state.nav.page() {
        Page::Diary => {
            let [dashboard_area, log_area, overview_area] = Layout::vertical([
                Constraint::Length(DASHBOARD_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(AI_OVERVIEW_HEIGHT),
            ])
            .areas(area);
            render_dashboard(frame, regions.dashboard.as_ref(), dashboard_area);
            render_log_list(frame, &regions.diary_log, None, log_area);
            render_ai_overview(frame, &regions.ai_overview, spinner(state), overview_area);
        }
        Page::QuickAdd => {
            let searching = state
                .tasks
                .state(TaskKind::Search)
                .is_running()
                .then_some(spinner(state));
            render_quick_add(
                frame,
                &state.quick_add,
                &regions.search_results,
                searching,
                area,
            );
        }
        Page::Log => {
            render_log_list(frame, &regions.history_log, Some(state.log_cursor), area);
        }
        Page::Scan => {
            render_menu_scan(
                frame,
                &state.menu_scan_path,
                &regions.menu_scan,
                spinner(state),
                area,
            );
        }
        Page::Plan => render_plan(frame, regions.plan.as_ref(), area),
        Page::Profile => {
            let profile = ProfileRender {
                view: state.nav.profile_view(),
                card: regions.profile.as_ref(),
                chips: &regions.goal_chips,
                info_form: &state.info_form,
                saving: state.tasks.profile_save.is_running(),
            };
            render_profile(frame, &profile, area);
        }
        Page::FoodDetail => render_food_detail(
            frame,
            regions.food_detail.as_ref(),
            &state.food_detail.grams,
            state.tasks.log_submit.is_running(),
            area,
        ),
    }
}
