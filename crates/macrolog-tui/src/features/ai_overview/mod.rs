//! AI overview panel on the diary page.

use chrono::NaiveDate;
use macrolog_core::overview::{AiOverviewResult, START_LOGGING};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::state::TuiState;

pub const GENERATING: &str = "Generating…";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiOverviewView {
    Message(String),
    Loading,
    Ai {
        progress: String,
        improvement: String,
        encouragement: String,
    },
}

impl Default for AiOverviewView {
    fn default() -> Self {
        AiOverviewView::Message(START_LOGGING.to_string())
    }
}

pub fn project_ai_overview(result: &AiOverviewResult) -> AiOverviewView {
    match result {
        AiOverviewResult::Empty { message } => AiOverviewView::Message(message.clone()),
        AiOverviewResult::Ai(payload) => AiOverviewView::Ai {
            progress: payload.progress.clone(),
            improvement: payload.improvement.clone(),
            encouragement: payload.encouragement.clone(),
        },
    }
}

/// Shows the loading state and asks for the overview of today's latest entry.
pub fn request(tui: &mut TuiState, force: bool) -> UiEffect {
    tui.regions.ai_overview = AiOverviewView::Loading;
    let latest = tui
        .session
        .daily_log
        .as_ref()
        .and_then(|bundle| bundle.latest())
        .cloned();
    let task = tui.begin_task(TaskKind::AiOverview);
    UiEffect::LoadAiOverview {
        task,
        latest,
        force,
    }
}

/// Shows the overview and asks for an AI answer to be cached for `day`.
pub fn on_loaded(
    tui: &mut TuiState,
    result: AiOverviewResult,
    day: NaiveDate,
) -> Vec<UiEffect> {
    tui.regions.ai_overview = project_ai_overview(&result);
    match result {
        AiOverviewResult::Ai(payload) => vec![UiEffect::CacheAiOverview { day, payload }],
        AiOverviewResult::Empty { .. } => vec![],
    }
}

pub fn render_ai_overview(frame: &mut Frame, view: &AiOverviewView, spinner: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " AI overview ",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ));

    let dim = Style::default().fg(Color::DarkGray);
    let lines = match view {
        AiOverviewView::Message(message) => {
            vec![Line::from(Span::styled(message.clone(), dim)).alignment(Alignment::Center)]
        }
        AiOverviewView::Loading => vec![
            Line::from(Span::styled(format!("{spinner} {GENERATING}"), dim))
                .alignment(Alignment::Center),
        ],
        AiOverviewView::Ai {
            progress,
            improvement,
            encouragement,
        } => vec![
            labelled("Progress", progress),
            labelled("Improvement", improvement),
            labelled("Encouragement", encouragement),
        ],
    };

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn labelled(label: &str, text: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(text.to_string()),
    ])
}
