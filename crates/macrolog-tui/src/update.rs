//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::common::TaskKind;
use crate::effects::{InitReason, Landing, UiEffect};
use crate::events::{InitOutcome, UiEvent};
use crate::features::{
    KeyResult, ai_overview, food_detail, log_list, menu_scan, profile, quick_add, setup,
};
use crate::navigation::{Page, go_back, go_to_page};
use crate::overlays::{self, Overlay};
use crate::state::{AppState, Shell, TuiState};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Startup => vec![start_init(&mut app.tui, InitReason::Startup)],
        UiEvent::Tick { at } => {
            app.tui.clock = at;
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            quick_add::on_tick(&mut app.tui)
        }
        UiEvent::Frame { at } => {
            app.tui.clock = at;
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),

        UiEvent::TaskStarted { kind, started } => {
            tracing::trace!(?kind, id = started.id.0, "task started");
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            if !app.tui.tasks.state_mut(kind).finish_if_active(completed.id) {
                tracing::debug!(?kind, id = completed.id.0, "dropping superseded result");
                return vec![];
            }
            update(app, *completed.result)
        }

        UiEvent::Initialized { reason, outcome } => on_initialized(&mut app.tui, reason, outcome),
        UiEvent::ProfileSaved { reason, profile } => {
            app.tui.session.profile = Some(profile);
            app.tui.refresh_profile();
            vec![start_init(&mut app.tui, reason)]
        }
        UiEvent::ProfileSaveFailed { error } => {
            tracing::warn!(%error, "saving profile failed");
            app.tui.notice = Some(format!("Could not save profile: {error}"));
            vec![]
        }
        UiEvent::AccountDeleted => {
            tracing::info!("account deleted");
            app.overlay = None;
            app.tui.enter_setup();
            vec![]
        }
        UiEvent::AccountDeleteFailed { error } => {
            tracing::warn!(%error, "deleting account failed");
            app.tui.notice = Some(format!("Could not delete account: {error}"));
            vec![]
        }
        UiEvent::LogSubmitted { log_id } => {
            tracing::info!(?log_id, "log saved");
            app.tui.selection.log_id = None;
            go_to_page(&mut app.tui, Page::Diary);
            vec![start_init(&mut app.tui, InitReason::LogChanged)]
        }
        UiEvent::LogSubmitFailed { error } => {
            tracing::warn!(%error, "saving log failed");
            app.tui.notice = Some(format!("Could not save entry: {error}"));
            vec![]
        }
        UiEvent::LogDeleted { log_id } => {
            tracing::info!(log_id, "log deleted");
            if app.tui.selection.log_id == Some(log_id) {
                app.tui.selection.log_id = None;
            }
            vec![start_init(&mut app.tui, InitReason::LogChanged)]
        }
        UiEvent::LogDeleteFailed { error } => {
            tracing::warn!(%error, "deleting log failed");
            app.tui.notice = Some(format!("Could not delete entry: {error}"));
            vec![]
        }
        UiEvent::SearchLoaded { query, foods } => {
            quick_add::on_search_loaded(&mut app.tui, &query, foods);
            vec![]
        }
        UiEvent::SearchFailed { query, error } => {
            quick_add::on_search_failed(&query, &error);
            vec![]
        }
        UiEvent::FoodLoaded {
            food,
            log_id,
            grams,
        } => {
            food_detail::on_food_loaded(&mut app.tui, food, log_id, grams);
            vec![]
        }
        UiEvent::FoodLoadFailed { error } => {
            tracing::warn!(%error, "loading food failed");
            app.tui.selection.log_id = None;
            app.tui.notice = Some(format!("Could not load food: {error}"));
            vec![]
        }
        UiEvent::AiOverviewLoaded { result, day } => {
            ai_overview::on_loaded(&mut app.tui, result, day)
        }
        UiEvent::MenuScanned { analysis } => {
            menu_scan::on_scanned(&mut app.tui, &analysis);
            vec![]
        }
        UiEvent::MenuScanFailed { error } => {
            menu_scan::on_scan_failed(&mut app.tui, &error);
            vec![]
        }
    }
}

// ============================================================================
// Initialization
// ============================================================================

/// Reloads the profile and today's log; `reason` decides where it lands.
fn start_init(tui: &mut TuiState, reason: InitReason) -> UiEffect {
    tracing::debug!(?reason, "initializing");
    let task = tui.begin_task(TaskKind::Init);
    UiEffect::Initialize { task, reason }
}

fn on_initialized(tui: &mut TuiState, reason: InitReason, outcome: InitOutcome) -> Vec<UiEffect> {
    match outcome {
        InitOutcome::Ready { profile, daily_log } => {
            tui.session.profile = Some(profile);
            tui.session.daily_log = Some(daily_log);
            tui.shell = Shell::Main;
            tui.refresh_profile();
            tui.refresh_log();
            match reason.landing() {
                Landing::Diary => go_to_page(tui, Page::Diary),
                Landing::ProfileMain => go_to_page(tui, Page::Profile),
            }
            vec![ai_overview::request(tui, reason.forces_ai_overview())]
        }
        InitOutcome::NoProfile => {
            tracing::info!("no profile yet");
            tui.enter_setup();
            vec![]
        }
        InitOutcome::Failed { error } => {
            tracing::error!(?reason, %error, "initialization failed");
            tui.enter_setup();
            tui.notice = Some(format!("Could not load your data: {error}"));
            vec![]
        }
    }
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Paste(text) => {
            handle_paste(&mut app.tui, &text);
            vec![]
        }
        _ => vec![],
    }
}

/// Pasted text goes to the visible text input, if any.
fn handle_paste(tui: &mut TuiState, text: &str) {
    if tui.shell != Shell::Main {
        return;
    }
    let text = text.trim();
    match tui.nav.page() {
        Page::QuickAdd => {
            tui.quick_add.query.push_str(text);
            quick_add::on_query_changed(tui);
        }
        Page::Scan => tui.menu_scan_path.push_str(text),
        _ => {}
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    app.tui.notice = None;

    if let Some(effects) = overlays::handle_overlay_key(&mut app.tui, &mut app.overlay, key) {
        return effects;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    let result = match app.tui.shell {
        Shell::Loading => KeyResult::Ignored,
        Shell::Setup => setup::handle_key(&mut app.tui, key),
        Shell::Main => {
            if let KeyCode::F(slot) = key.code
                && let Some(page) = Page::from_nav_slot(usize::from(slot))
            {
                go_to_page(&mut app.tui, page);
                return vec![];
            }
            if key.code == KeyCode::Esc {
                go_back(&mut app.tui);
                return vec![];
            }
            handle_page_key(&mut app.tui, key)
        }
    };

    match result {
        KeyResult::Handled(effects) => effects,
        KeyResult::Open(request) => {
            app.overlay = Some(Overlay::open(request));
            vec![]
        }
        KeyResult::Ignored => handle_global_key(&mut app.tui, key),
    }
}

fn handle_page_key(tui: &mut TuiState, key: KeyEvent) -> KeyResult {
    match tui.nav.page() {
        Page::Diary => handle_diary_key(tui, key),
        Page::QuickAdd => quick_add::handle_key(tui, key),
        Page::Log => log_list::handle_key(tui, key),
        Page::Scan => menu_scan::handle_key(tui, key),
        Page::Plan => KeyResult::Ignored,
        Page::Profile => profile::handle_key(tui, key),
        Page::FoodDetail => food_detail::handle_key(tui, key),
    }
}

fn handle_diary_key(tui: &mut TuiState, key: KeyEvent) -> KeyResult {
    match key.code {
        KeyCode::Char('r') => {
            if tui.tasks.ai_overview.is_running() {
                return KeyResult::handled();
            }
            KeyResult::Handled(vec![ai_overview::request(tui, true)])
        }
        _ => KeyResult::Ignored,
    }
}

/// Keys no page consumed: digits switch pages.
fn handle_global_key(tui: &mut TuiState, key: KeyEvent) -> Vec<UiEffect> {
    if tui.shell != Shell::Main || !key.modifiers.is_empty() {
        return vec![];
    }
    if let KeyCode::Char(c) = key.code
        && let Some(page) = c
            .to_digit(10)
            .and_then(|slot| Page::from_nav_slot(slot as usize))
    {
        go_to_page(tui, page);
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use chrono::NaiveDate;
    use macrolog_core::config::Config;
    use macrolog_core::models::{
        AiOverviewPayload, DailyLogBundle, Food, Goal, LogEntry, LogRequest, Sex, Totals,
        UserProfile,
    };
    use macrolog_core::overview::{AiOverviewResult, LOAD_FAILED};

    use super::*;
    use crate::common::{TaskCompleted, TaskId};
    use crate::features::ai_overview::AiOverviewView;
    use crate::features::quick_add::SearchResultsView;
    use crate::navigation::ProfileView;

    fn profile() -> UserProfile {
        UserProfile {
            id: Some(1),
            name: "Ana".to_string(),
            age: 28,
            height_cm: 165.0,
            weight_kg: 60.0,
            sex: Sex::Female,
            goal: Goal::Maintain,
            calorie_target: 2000.0,
            protein_target: 120.0,
        }
    }

    fn food(id: i64, name: &str) -> Food {
        Food {
            id,
            name: name.to_string(),
            calories_per_100g: 250.0,
            protein_per_100g: 10.0,
            carbs_per_100g: 30.0,
            fat_per_100g: 5.0,
        }
    }

    fn bundle() -> DailyLogBundle {
        DailyLogBundle {
            logs: vec![LogEntry {
                id: 5,
                food_id: 42,
                grams: 150.0,
                name: "Granola".to_string(),
                calories: 375.0,
                protein: 15.0,
                carbs: None,
                fat: None,
                datetime: "2025-03-01T08:00:00".to_string(),
            }],
            totals: Totals {
                calories: 375.0,
                protein: 15.0,
                ..Default::default()
            },
        }
    }

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn type_text(app: &mut AppState, text: &str) -> Vec<UiEffect> {
        text.chars()
            .flat_map(|c| update(app, key(KeyCode::Char(c))))
            .collect()
    }

    fn complete(app: &mut AppState, kind: TaskKind, id: TaskId, result: UiEvent) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::TaskCompleted {
                kind,
                completed: TaskCompleted {
                    id,
                    result: Box::new(result),
                },
            },
        )
    }

    /// A signed-in app on the diary page.
    fn ready_app() -> AppState {
        let mut app = AppState::new(Config::default());
        let effects = update(&mut app, UiEvent::Startup);
        let [UiEffect::Initialize { task, .. }] = effects.as_slice() else {
            panic!("expected initialize, got {effects:?}");
        };
        complete(
            &mut app,
            TaskKind::Init,
            *task,
            UiEvent::Initialized {
                reason: InitReason::Startup,
                outcome: InitOutcome::Ready {
                    profile: profile(),
                    daily_log: bundle(),
                },
            },
        );
        app
    }

    fn submitted(effects: &[UiEffect]) -> (TaskId, Option<i64>, LogRequest) {
        match effects {
            [UiEffect::SubmitLog {
                task,
                log_id,
                request,
            }] => (*task, *log_id, *request),
            other => panic!("expected submit, got {other:?}"),
        }
    }

    #[test]
    fn test_startup_lands_on_diary_and_loads_overview() {
        let mut app = AppState::new(Config::default());
        let effects = update(&mut app, UiEvent::Startup);
        let [UiEffect::Initialize { task, reason }] = effects.as_slice() else {
            panic!("expected initialize");
        };
        assert_eq!(*reason, InitReason::Startup);

        let effects = complete(
            &mut app,
            TaskKind::Init,
            *task,
            UiEvent::Initialized {
                reason: InitReason::Startup,
                outcome: InitOutcome::Ready {
                    profile: profile(),
                    daily_log: bundle(),
                },
            },
        );

        assert_eq!(app.tui.shell, Shell::Main);
        assert_eq!(app.tui.nav.page(), Page::Diary);
        assert!(app.tui.regions.dashboard.is_some());
        assert_eq!(app.tui.regions.ai_overview, AiOverviewView::Loading);
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::LoadAiOverview { force: false, latest: Some(entry), .. }] if entry.id == 5
        ));
    }

    #[test]
    fn test_missing_profile_shows_setup() {
        let mut app = AppState::new(Config::default());
        let effects = update(&mut app, UiEvent::Startup);
        let [UiEffect::Initialize { task, .. }] = effects.as_slice() else {
            panic!("expected initialize");
        };
        let effects = complete(
            &mut app,
            TaskKind::Init,
            *task,
            UiEvent::Initialized {
                reason: InitReason::Startup,
                outcome: InitOutcome::NoProfile,
            },
        );
        assert!(effects.is_empty());
        assert_eq!(app.tui.shell, Shell::Setup);
    }

    #[test]
    fn test_failed_init_collapses_to_setup() {
        let mut app = ready_app();
        let task = app.tui.begin_task(TaskKind::Init);
        complete(
            &mut app,
            TaskKind::Init,
            task,
            UiEvent::Initialized {
                reason: InitReason::LogChanged,
                outcome: InitOutcome::Failed {
                    error: "connection refused".to_string(),
                },
            },
        );
        assert_eq!(app.tui.shell, Shell::Setup);
        assert!(app.tui.session.profile.is_none());
        assert!(app.tui.notice.is_some());
    }

    #[test]
    fn test_debounced_search_fires_once_for_last_query() {
        let mut app = ready_app();
        update(&mut app, key(KeyCode::F(2)));
        assert_eq!(app.tui.nav.page(), Page::QuickAdd);

        let t0 = Instant::now();
        let mut effects = Vec::new();
        for (offset, c) in [(0, 'a'), (100, 'b'), (200, 'c')] {
            let at = t0 + Duration::from_millis(offset);
            update(&mut app, UiEvent::Frame { at });
            effects.extend(update(&mut app, key(KeyCode::Char(c))));
            effects.extend(update(&mut app, UiEvent::Tick { at }));
        }
        assert!(effects.is_empty());

        let early = update(
            &mut app,
            UiEvent::Tick {
                at: t0 + Duration::from_millis(499),
            },
        );
        assert!(early.is_empty());

        let fired = update(
            &mut app,
            UiEvent::Tick {
                at: t0 + Duration::from_millis(500),
            },
        );
        assert!(matches!(
            fired.as_slice(),
            [UiEffect::SearchFoods { query, .. }] if query == "abc"
        ));

        let again = update(
            &mut app,
            UiEvent::Tick {
                at: t0 + Duration::from_secs(2),
            },
        );
        assert!(again.is_empty());
    }

    #[test]
    fn test_short_query_clears_results_and_drops_inflight_search() {
        let mut app = ready_app();
        update(&mut app, key(KeyCode::F(2)));
        type_text(&mut app, "ri");
        let at = app.tui.clock + Duration::from_secs(1);
        let fired = update(&mut app, UiEvent::Tick { at });
        let [UiEffect::SearchFoods { task, .. }] = fired.as_slice() else {
            panic!("expected search");
        };
        let task = *task;

        update(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.tui.regions.search_results, SearchResultsView::Cleared);

        complete(
            &mut app,
            TaskKind::Search,
            task,
            UiEvent::SearchLoaded {
                query: "ri".to_string(),
                foods: vec![food(1, "Rice")],
            },
        );
        assert!(app.tui.quick_add.results.is_empty());
        assert_eq!(app.tui.regions.search_results, SearchResultsView::Cleared);
    }

    #[test]
    fn test_superseded_search_result_is_dropped() {
        let mut app = ready_app();
        let first = app.tui.begin_task(TaskKind::Search);
        let second = app.tui.begin_task(TaskKind::Search);

        complete(
            &mut app,
            TaskKind::Search,
            second,
            UiEvent::SearchLoaded {
                query: "rice".to_string(),
                foods: vec![food(1, "Rice")],
            },
        );
        complete(
            &mut app,
            TaskKind::Search,
            first,
            UiEvent::SearchLoaded {
                query: "ri".to_string(),
                foods: vec![food(2, "Ricotta"), food(3, "Risotto")],
            },
        );

        let SearchResultsView::Rows(rows) = &app.tui.regions.search_results else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Rice");
    }

    #[test]
    fn test_digits_are_typed_in_search_but_switch_pages_elsewhere() {
        let mut app = ready_app();
        update(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.tui.nav.page(), Page::Log);

        update(&mut app, key(KeyCode::Char('2')));
        assert_eq!(app.tui.nav.page(), Page::QuickAdd);
        update(&mut app, key(KeyCode::Char('1')));
        assert_eq!(app.tui.nav.page(), Page::QuickAdd);
        assert_eq!(app.tui.quick_add.query, "1");
    }

    #[test]
    fn test_add_from_search_creates_entry() {
        let mut app = ready_app();
        update(&mut app, key(KeyCode::F(2)));
        app.tui.quick_add.results = vec![food(42, "Granola")];
        app.tui.refresh_search_results();

        update(&mut app, key(KeyCode::Enter));
        assert_eq!(app.tui.nav.page(), Page::FoodDetail);
        assert_eq!(app.tui.food_detail.grams, "100");

        update(&mut app, key(KeyCode::Backspace));
        update(&mut app, key(KeyCode::Backspace));
        update(&mut app, key(KeyCode::Backspace));
        type_text(&mut app, "150");
        assert_eq!(app.tui.regions.food_detail.as_ref().map(|p| p.calories), Some(375));

        let effects = update(&mut app, key(KeyCode::Enter));
        let (task, log_id, request) = submitted(&effects);
        assert_eq!(log_id, None);
        assert_eq!(request.food_id, 42);
        assert!((request.grams - 150.0).abs() < f64::EPSILON);

        let effects = complete(
            &mut app,
            TaskKind::LogSubmit,
            task,
            UiEvent::LogSubmitted { log_id: None },
        );
        assert_eq!(app.tui.nav.page(), Page::Diary);
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::Initialize {
                reason: InitReason::LogChanged,
                ..
            }]
        ));
    }

    #[test]
    fn test_edit_from_log_updates_selected_entry() {
        let mut app = ready_app();
        app.tui.foods.insert(food(42, "Granola"));
        update(&mut app, key(KeyCode::F(3)));

        let effects = update(&mut app, key(KeyCode::Enter));
        assert!(effects.is_empty());
        assert_eq!(app.tui.nav.page(), Page::FoodDetail);
        assert_eq!(app.tui.selection.log_id, Some(5));
        assert_eq!(app.tui.food_detail.grams, "150");

        let effects = update(&mut app, key(KeyCode::Enter));
        let (task, log_id, _) = submitted(&effects);
        assert_eq!(log_id, Some(5));

        complete(
            &mut app,
            TaskKind::LogSubmit,
            task,
            UiEvent::LogSubmitted { log_id: Some(5) },
        );
        assert_eq!(app.tui.selection.log_id, None);
    }

    #[test]
    fn test_uncached_food_is_fetched_before_editing() {
        let mut app = ready_app();
        update(&mut app, key(KeyCode::F(3)));

        let effects = update(&mut app, key(KeyCode::Enter));
        let [UiEffect::LoadFood {
            task,
            food_id: 42,
            log_id: 5,
            ..
        }] = effects.as_slice()
        else {
            panic!("expected food load, got {effects:?}");
        };
        assert_eq!(app.tui.nav.page(), Page::Log);
        assert_eq!(app.tui.selection.log_id, None);

        complete(
            &mut app,
            TaskKind::FoodLoad,
            *task,
            UiEvent::FoodLoaded {
                food: food(42, "Granola"),
                log_id: 5,
                grams: 150.0,
            },
        );
        assert_eq!(app.tui.nav.page(), Page::FoodDetail);
        assert_eq!(app.tui.selection.log_id, Some(5));
        assert!(app.tui.foods.get(42).is_some());
    }

    #[test]
    fn test_food_loaded_after_leaving_is_ignored() {
        let mut app = ready_app();
        update(&mut app, key(KeyCode::F(3)));
        let effects = update(&mut app, key(KeyCode::Enter));
        let [UiEffect::LoadFood { task, .. }] = effects.as_slice() else {
            panic!("expected food load");
        };
        let task = *task;
        update(&mut app, key(KeyCode::Esc));
        assert_eq!(app.tui.selection.log_id, None);

        complete(
            &mut app,
            TaskKind::FoodLoad,
            task,
            UiEvent::FoodLoaded {
                food: food(42, "Granola"),
                log_id: 5,
                grams: 150.0,
            },
        );
        assert_eq!(app.tui.nav.page(), Page::Diary);
        assert_eq!(app.tui.selection.log_id, None);
    }

    #[test]
    fn test_food_loaded_after_leaving_and_returning_stays_on_log() {
        let mut app = ready_app();
        update(&mut app, key(KeyCode::F(3)));
        let effects = update(&mut app, key(KeyCode::Enter));
        let [UiEffect::LoadFood { task, .. }] = effects.as_slice() else {
            panic!("expected food load");
        };
        let task = *task;
        update(&mut app, key(KeyCode::Esc));
        update(&mut app, key(KeyCode::F(3)));

        complete(
            &mut app,
            TaskKind::FoodLoad,
            task,
            UiEvent::FoodLoaded {
                food: food(42, "Granola"),
                log_id: 5,
                grams: 150.0,
            },
        );
        assert_eq!(app.tui.nav.page(), Page::Log);
        assert_eq!(app.tui.selection.log_id, None);
    }

    #[test]
    fn test_back_from_edit_clears_selection() {
        let mut app = ready_app();
        app.tui.foods.insert(food(42, "Granola"));
        update(&mut app, key(KeyCode::F(3)));
        update(&mut app, key(KeyCode::Enter));
        assert_eq!(app.tui.nav.page(), Page::FoodDetail);

        update(&mut app, key(KeyCode::Esc));
        assert_eq!(app.tui.nav.page(), Page::Diary);
        assert_eq!(app.tui.selection.log_id, None);
    }

    #[test]
    fn test_delete_log_needs_confirmation() {
        let mut app = ready_app();
        update(&mut app, key(KeyCode::F(3)));

        let effects = update(&mut app, key(KeyCode::Char('d')));
        assert!(effects.is_empty());
        assert!(app.overlay.is_some());

        let effects = update(&mut app, key(KeyCode::Char('n')));
        assert!(effects.is_empty());
        assert!(app.overlay.is_none());

        update(&mut app, key(KeyCode::Delete));
        let effects = update(&mut app, key(KeyCode::Char('y')));
        let [UiEffect::DeleteLog { task, log_id: 5 }] = effects.as_slice() else {
            panic!("expected delete, got {effects:?}");
        };

        let effects = complete(
            &mut app,
            TaskKind::LogDelete,
            *task,
            UiEvent::LogDeleted { log_id: 5 },
        );
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::Initialize {
                reason: InitReason::LogChanged,
                ..
            }]
        ));
    }

    #[test]
    fn test_account_deletion_returns_to_setup() {
        let mut app = ready_app();
        update(&mut app, key(KeyCode::F(6)));
        update(&mut app, key(KeyCode::Char('x')));
        let effects = update(&mut app, key(KeyCode::Char('y')));
        let [UiEffect::DeleteAccount { task }] = effects.as_slice() else {
            panic!("expected account delete");
        };

        complete(&mut app, TaskKind::AccountDelete, *task, UiEvent::AccountDeleted);

        assert_eq!(app.tui.shell, Shell::Setup);
        assert!(app.tui.session.profile.is_none());
        assert!(app.tui.session.daily_log.is_none());
        assert!(app.tui.regions.dashboard.is_none());
    }

    #[test]
    fn test_reload_started_before_account_deletion_is_dropped() {
        let mut app = ready_app();
        let reload = app.tui.begin_task(TaskKind::Init);
        update(&mut app, key(KeyCode::F(6)));
        update(&mut app, key(KeyCode::Char('x')));
        let effects = update(&mut app, key(KeyCode::Char('y')));
        let [UiEffect::DeleteAccount { task }] = effects.as_slice() else {
            panic!("expected account delete");
        };
        complete(&mut app, TaskKind::AccountDelete, *task, UiEvent::AccountDeleted);

        let effects = complete(
            &mut app,
            TaskKind::Init,
            reload,
            UiEvent::Initialized {
                reason: InitReason::LogChanged,
                outcome: InitOutcome::Ready {
                    profile: profile(),
                    daily_log: bundle(),
                },
            },
        );
        assert!(effects.is_empty());
        assert_eq!(app.tui.shell, Shell::Setup);
        assert!(app.tui.session.profile.is_none());
        assert!(app.tui.regions.dashboard.is_none());
    }

    #[test]
    fn test_goal_preview_sends_nothing_until_saved() {
        let mut app = ready_app();
        update(&mut app, key(KeyCode::F(6)));
        update(&mut app, key(KeyCode::Char('g')));
        assert_eq!(app.tui.nav.profile_view(), ProfileView::UpdateGoals);

        let effects = update(&mut app, key(KeyCode::Right));
        assert!(effects.is_empty());
        assert_eq!(app.tui.selection.goal, Goal::BuildMuscle);
        assert_eq!(
            app.tui.session.profile.as_ref().map(|p| p.goal),
            Some(Goal::Maintain)
        );

        let effects = update(&mut app, key(KeyCode::Enter));
        let [UiEffect::SaveProfile {
            profile: input,
            reason: InitReason::ProfileChanged,
            ..
        }] = effects.as_slice()
        else {
            panic!("expected profile save, got {effects:?}");
        };
        assert_eq!(input.goal, Goal::BuildMuscle);
        assert_eq!(input.name, "Ana");
    }

    #[test]
    fn test_profile_change_lands_on_profile_main() {
        let mut app = ready_app();
        update(&mut app, key(KeyCode::F(6)));
        update(&mut app, key(KeyCode::Char('i')));
        assert_eq!(app.tui.nav.profile_view(), ProfileView::UpdateInfo);

        let task = app.tui.begin_task(TaskKind::Init);
        let effects = complete(
            &mut app,
            TaskKind::Init,
            task,
            UiEvent::Initialized {
                reason: InitReason::ProfileChanged,
                outcome: InitOutcome::Ready {
                    profile: profile(),
                    daily_log: bundle(),
                },
            },
        );
        assert_eq!(app.tui.nav.page(), Page::Profile);
        assert_eq!(app.tui.nav.profile_view(), ProfileView::Main);
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::LoadAiOverview { force: false, .. }]
        ));
    }

    #[test]
    fn test_log_change_forces_overview_refresh() {
        let mut app = ready_app();
        let task = app.tui.begin_task(TaskKind::Init);
        let effects = complete(
            &mut app,
            TaskKind::Init,
            task,
            UiEvent::Initialized {
                reason: InitReason::LogChanged,
                outcome: InitOutcome::Ready {
                    profile: profile(),
                    daily_log: bundle(),
                },
            },
        );
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::LoadAiOverview { force: true, .. }]
        ));
    }

    fn overview_payload() -> AiOverviewPayload {
        AiOverviewPayload {
            progress: "On track".to_string(),
            improvement: "More fiber".to_string(),
            encouragement: "Keep going".to_string(),
        }
    }

    fn overview_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    #[test]
    fn test_overview_result_replaces_loading_and_is_cached() {
        let mut app = ready_app();
        let task = app.tui.tasks.ai_overview.active.expect("overview task");
        let effects = complete(
            &mut app,
            TaskKind::AiOverview,
            task,
            UiEvent::AiOverviewLoaded {
                result: AiOverviewResult::Ai(overview_payload()),
                day: overview_day(),
            },
        );
        assert!(matches!(
            &app.tui.regions.ai_overview,
            AiOverviewView::Ai { progress, .. } if progress == "On track"
        ));
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::CacheAiOverview { day, payload }]
                if *day == overview_day() && *payload == overview_payload()
        ));
    }

    #[test]
    fn test_empty_overview_is_not_cached() {
        let mut app = ready_app();
        let task = app.tui.tasks.ai_overview.active.expect("overview task");
        let effects = complete(
            &mut app,
            TaskKind::AiOverview,
            task,
            UiEvent::AiOverviewLoaded {
                result: AiOverviewResult::empty(LOAD_FAILED),
                day: overview_day(),
            },
        );
        assert!(effects.is_empty());
        assert_eq!(
            app.tui.regions.ai_overview,
            AiOverviewView::Message(LOAD_FAILED.to_string())
        );
    }

    #[test]
    fn test_overview_finishing_after_account_deletion_is_not_cached() {
        let mut app = ready_app();
        let overview = app.tui.tasks.ai_overview.active.expect("overview task");
        app.tui.enter_setup();

        let effects = complete(
            &mut app,
            TaskKind::AiOverview,
            overview,
            UiEvent::AiOverviewLoaded {
                result: AiOverviewResult::Ai(overview_payload()),
                day: overview_day(),
            },
        );
        assert!(effects.is_empty());
        assert_eq!(app.tui.regions.ai_overview, AiOverviewView::default());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = ready_app();
        let effects = update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert!(matches!(effects.as_slice(), [UiEffect::Quit]));
    }
}
