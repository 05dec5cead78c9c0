//! AI overview and menu scan.

use std::path::PathBuf;

use chrono::Local;
use macrolog_core::api::ApiClient;
use macrolog_core::menu::analyze_menu_image;
use macrolog_core::models::LogEntry;
use macrolog_core::overview::{OverviewCache, get_ai_overview};

use crate::events::UiEvent;

pub async fn ai_overview(
    api: ApiClient,
    cache: OverviewCache,
    latest: Option<LogEntry>,
    force: bool,
) -> UiEvent {
    let day = Local::now().date_naive();
    let result = get_ai_overview(&api, &cache, latest.as_ref(), force, day).await;
    UiEvent::AiOverviewLoaded { result, day }
}

pub async fn scan_menu(api: ApiClient, path: PathBuf) -> UiEvent {
    match analyze_menu_image(&api, &path).await {
        Ok(analysis) => UiEvent::MenuScanned { analysis },
        Err(err) => UiEvent::MenuScanFailed {
            error: err.to_string(),
        },
    }
}
