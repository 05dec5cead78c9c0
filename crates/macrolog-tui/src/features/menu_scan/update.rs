//! Menu scan key handling.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use macrolog_core::models::MenuAnalysis;

use super::view::{MenuScanView, project_menu_analysis, project_scan_failure};
use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::features::KeyResult;
use crate::state::TuiState;

pub fn handle_key(tui: &mut TuiState, key: KeyEvent) -> KeyResult {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => KeyResult::Handled(scan(tui)),
        KeyCode::Backspace => {
            tui.menu_scan_path.pop();
            KeyResult::handled()
        }
        KeyCode::Char('u') if ctrl => {
            tui.menu_scan_path.clear();
            KeyResult::handled()
        }
        KeyCode::Char(c) if !ctrl => {
            tui.menu_scan_path.push(c);
            KeyResult::handled()
        }
        _ => KeyResult::Ignored,
    }
}

/// Paths dragged into a terminal often arrive quoted.
pub fn clean_path(raw: &str) -> &str {
    raw.trim().trim_matches(|c| c == '"' || c == '\'').trim()
}

fn scan(tui: &mut TuiState) -> Vec<UiEffect> {
    if tui.tasks.menu_scan.is_running() {
        return vec![];
    }
    let path = clean_path(&tui.menu_scan_path);
    if path.is_empty() {
        tui.notice = Some("Enter the path to a menu photo".to_string());
        return vec![];
    }
    let path = PathBuf::from(path);
    tracing::info!(path = %path.display(), "scanning menu");
    tui.regions.menu_scan = MenuScanView::Loading;
    let task = tui.begin_task(TaskKind::MenuScan);
    vec![UiEffect::ScanMenu { task, path }]
}

pub fn on_scanned(tui: &mut TuiState, analysis: &MenuAnalysis) {
    tui.regions.menu_scan = project_menu_analysis(analysis);
}

pub fn on_scan_failed(tui: &mut TuiState, error: &str) {
    tracing::warn!(error, "menu scan failed");
    tui.regions.menu_scan = project_scan_failure();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_path_strips_quotes() {
        assert_eq!(clean_path("  '/tmp/menu photo.jpg' "), "/tmp/menu photo.jpg");
        assert_eq!(clean_path("\"a.png\""), "a.png");
        assert_eq!(clean_path("   "), "");
    }
}
