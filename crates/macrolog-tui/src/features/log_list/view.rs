//! Log list projection.

use macrolog_core::models::LogEntry;

use crate::common::{format_number, round_display};

pub const EMPTY_LOG: &str = "No food logged yet.";

/// One displayed entry, addressed by the entry id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    pub id: i64,
    pub name: String,
    pub grams: String,
    pub calories: String,
    pub protein: String,
}

impl LogRow {
    fn from_entry(entry: &LogEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
            grams: format!("{}g", format_number(entry.grams)),
            calories: format!("{} kcal", round_display(entry.calories)),
            protein: format!("{}g", round_display(entry.protein)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogListView {
    Empty(&'static str),
    Rows(Vec<LogRow>),
}

impl Default for LogListView {
    fn default() -> Self {
        LogListView::Empty(EMPTY_LOG)
    }
}

impl LogListView {
    pub fn rows(&self) -> &[LogRow] {
        match self {
            LogListView::Empty(_) => &[],
            LogListView::Rows(rows) => rows,
        }
    }
}

/// Rows in the order given. No bundle and an empty bundle look the same.
pub fn project_log_list(logs: Option<&[LogEntry]>) -> LogListView {
    match logs {
        Some(logs) if !logs.is_empty() => {
            LogListView::Rows(logs.iter().map(LogRow::from_entry).collect())
        }
        _ => LogListView::Empty(EMPTY_LOG),
    }
}
