//! Application state composition.
//!
//! ## State Hierarchy
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── shell: Shell            (loading / setup / main)
//! │   ├── nav: Navigation         (page, profile sub-view, header)
//! │   ├── session: Session        (server data: profile, today's log)
//! │   ├── selection: Selection    (previewed goal, log entry being edited)
//! │   ├── foods: FoodCache        (foods seen in search or fetched for editing)
//! │   ├── regions: Regions        (view models written by the projections)
//! │   ├── page inputs             (search, grams, forms, scan path)
//! │   ├── task_seq / tasks        (async task ids and lifecycle)
//! │   └── clock                   (last instant seen by the reducer)
//! └── overlay: Option<Overlay>    (confirmation modal)
//! ```
//!
//! Server data is only ever replaced wholesale. Every `refresh_*` method
//! re-runs the projections that depend on one slice of it, so the draw layer
//! only paints `regions`.

use std::collections::HashMap;
use std::time::Instant;

use macrolog_core::config::Config;
use macrolog_core::models::{DailyLogBundle, Food, Goal, UserProfile};

use crate::common::{TaskId, TaskKind, TaskSeq, Tasks};
use crate::features::ai_overview::AiOverviewView;
use crate::features::dashboard::{DashboardView, project_dashboard};
use crate::features::food_detail::{
    DetailMode, FoodDetailState, NutritionPanel, project_food_detail,
};
use crate::features::log_list::{LogListView, project_log_list};
use crate::features::menu_scan::MenuScanView;
use crate::features::plan::{PlanView, project_plan};
use crate::features::profile::{
    GoalChip, ProfileCard, ProfileForm, project_goal_chips, project_profile,
};
use crate::features::quick_add::{QuickAddState, SearchResultsView, project_search_results};
use crate::navigation::Navigation;
use crate::overlays::Overlay;

// ============================================================================
// AppState (Combined State)
// ============================================================================

/// Combines `TuiState` with `Option<Overlay>` so overlay handlers can borrow
/// both at once.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            tui: TuiState::new(config),
            overlay: None,
        }
    }
}

// ============================================================================
// Session data
// ============================================================================

/// Which top-level view is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shell {
    /// Waiting for the first initialization.
    #[default]
    Loading,
    /// No profile: the setup form.
    Setup,
    /// Pages with the nav bar.
    Main,
}

/// Cached server data.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub profile: Option<UserProfile>,
    pub daily_log: Option<DailyLogBundle>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Selection {
    /// Goal chip being previewed on the goals view.
    pub goal: Goal,
    /// Entry being edited; `None` means food detail creates a new entry.
    pub log_id: Option<i64>,
}

/// Foods by id.
#[derive(Debug, Clone, Default)]
pub struct FoodCache {
    foods: HashMap<i64, Food>,
}

impl FoodCache {
    pub fn get(&self, id: i64) -> Option<&Food> {
        self.foods.get(&id)
    }

    pub fn insert(&mut self, food: Food) {
        self.foods.insert(food.id, food);
    }
}

/// View models for every region of the screen.
#[derive(Debug, Clone, Default)]
pub struct Regions {
    pub dashboard: Option<DashboardView>,
    pub diary_log: LogListView,
    pub history_log: LogListView,
    pub plan: Option<PlanView>,
    pub profile: Option<ProfileCard>,
    pub goal_chips: Vec<GoalChip>,
    pub search_results: SearchResultsView,
    pub food_detail: Option<NutritionPanel>,
    pub ai_overview: AiOverviewView,
    pub menu_scan: MenuScanView,
}

// ============================================================================
// TuiState
// ============================================================================

pub struct TuiState {
    pub config: Config,
    pub should_quit: bool,
    pub shell: Shell,
    pub nav: Navigation,
    pub session: Session,
    pub selection: Selection,
    pub foods: FoodCache,
    pub regions: Regions,

    pub quick_add: QuickAddState,
    pub food_detail: FoodDetailState,
    /// Highlighted row on the log page.
    pub log_cursor: usize,
    pub setup_form: ProfileForm,
    pub info_form: ProfileForm,
    pub menu_scan_path: String,

    pub task_seq: TaskSeq,
    pub tasks: Tasks,

    /// Instant of the last `Tick` or `Frame`; the debounce clock.
    pub clock: Instant,
    pub spinner_frame: usize,
    /// One-line message for the footer, cleared on the next key.
    pub notice: Option<String>,
}

impl TuiState {
    pub fn new(config: Config) -> Self {
        let quick_add = QuickAddState::new(config.search_debounce(), config.min_search_chars);
        Self {
            config,
            should_quit: false,
            shell: Shell::Loading,
            nav: Navigation::default(),
            session: Session::default(),
            selection: Selection::default(),
            foods: FoodCache::default(),
            regions: Regions {
                goal_chips: project_goal_chips(Goal::default()),
                ..Regions::default()
            },
            quick_add,
            food_detail: FoodDetailState::default(),
            log_cursor: 0,
            setup_form: ProfileForm::setup(),
            info_form: ProfileForm::update_info(),
            menu_scan_path: String::new(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            clock: Instant::now(),
            spinner_frame: 0,
            notice: None,
        }
    }

    /// Allocates a task id for `kind` and makes it the active one.
    pub fn begin_task(&mut self, kind: TaskKind) -> TaskId {
        self.tasks.begin(kind, &mut self.task_seq)
    }

    /// Drops everything tied to the account and shows the setup form.
    pub fn enter_setup(&mut self) {
        tracing::debug!("entering setup");
        self.shell = Shell::Setup;
        self.nav = Navigation::default();
        self.session = Session::default();
        self.selection = Selection::default();
        self.food_detail = FoodDetailState::default();
        self.quick_add.reset();
        self.log_cursor = 0;
        self.setup_form = ProfileForm::setup();
        self.menu_scan_path.clear();
        // Results of anything started for the old account are dropped.
        self.tasks = Tasks::default();
        self.regions = Regions {
            goal_chips: project_goal_chips(Goal::default()),
            ..Regions::default()
        };
    }

    // ------------------------------------------------------------------------
    // Refresh operations
    // ------------------------------------------------------------------------

    /// Re-projects everything derived from today's log.
    pub fn refresh_log(&mut self) {
        let logs = self.session.daily_log.as_ref().map(|b| b.logs.as_slice());
        self.regions.diary_log = project_log_list(logs);
        self.refresh_log_page();
        self.refresh_targets();
    }

    /// Re-projects the log page list.
    pub fn refresh_log_page(&mut self) {
        let logs = self.session.daily_log.as_ref().map(|b| b.logs.as_slice());
        self.regions.history_log = project_log_list(logs);
        let len = self.regions.history_log.rows().len();
        self.log_cursor = self.log_cursor.min(len.saturating_sub(1));
    }

    /// Re-projects the profile card, re-derives the selected goal from the
    /// profile and pre-fills the info form.
    pub fn refresh_profile(&mut self) {
        self.regions.profile = self.session.profile.as_ref().map(project_profile);
        if let Some(profile) = &self.session.profile {
            self.selection.goal = profile.goal;
            self.info_form.prefill(profile);
        }
        self.refresh_goal_chips();
        self.refresh_targets();
    }

    pub fn refresh_goal_chips(&mut self) {
        self.regions.goal_chips = project_goal_chips(self.selection.goal);
    }

    pub fn refresh_search_results(&mut self) {
        self.regions.search_results = project_search_results(&self.quick_add.results);
    }

    /// Recomputes the nutrition panel for the current grams input.
    pub fn refresh_food_detail(&mut self) {
        let mode = if self.selection.log_id.is_some() {
            DetailMode::Edit
        } else {
            DetailMode::Add
        };
        self.regions.food_detail = self
            .food_detail
            .food
            .as_ref()
            .map(|food| project_food_detail(food, &self.food_detail.grams, mode));
    }

    /// Dashboard and plan depend on both the profile and the log.
    fn refresh_targets(&mut self) {
        let profile = self.session.profile.as_ref();
        let bundle = self.session.daily_log.as_ref();
        self.regions.dashboard = project_dashboard(profile, bundle);
        self.regions.plan = project_plan(profile, bundle);
    }
}
