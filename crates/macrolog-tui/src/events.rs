//! UI events consumed by the reducer.
//!
//! Terminal input, clock ticks, task lifecycle and the results of every
//! spawned request all arrive as `UiEvent`. Handlers never hand raw errors to
//! the reducer: failures are already rendered to a display string.

use std::time::Instant;

use chrono::NaiveDate;
use crossterm::event::Event;
use macrolog_core::models::{DailyLogBundle, Food, MenuAnalysis, UserProfile};
use macrolog_core::overview::AiOverviewResult;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};
use crate::effects::InitReason;

/// Outcome of the initialization sequence.
#[derive(Debug, Clone)]
pub enum InitOutcome {
    Ready {
        profile: UserProfile,
        daily_log: DailyLogBundle,
    },
    /// The server has no profile: show setup.
    NoProfile,
    Failed {
        error: String,
    },
}

#[derive(Debug)]
pub enum UiEvent {
    /// First event of a run; kicks off initialization.
    Startup,
    /// Emitted periodically by the runtime.
    Tick { at: Instant },
    /// Emitted first in every batch so the clock is current for input.
    Frame { at: Instant },
    Terminal(Event),

    TaskStarted {
        kind: TaskKind,
        started: TaskStarted,
    },
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },

    Initialized {
        reason: InitReason,
        outcome: InitOutcome,
    },
    ProfileSaved {
        reason: InitReason,
        profile: UserProfile,
    },
    ProfileSaveFailed {
        error: String,
    },
    AccountDeleted,
    AccountDeleteFailed {
        error: String,
    },
    LogSubmitted {
        log_id: Option<i64>,
    },
    LogSubmitFailed {
        error: String,
    },
    LogDeleted {
        log_id: i64,
    },
    LogDeleteFailed {
        error: String,
    },
    SearchLoaded {
        query: String,
        foods: Vec<Food>,
    },
    SearchFailed {
        query: String,
        error: String,
    },
    FoodLoaded {
        food: Food,
        log_id: i64,
        grams: f64,
    },
    FoodLoadFailed {
        error: String,
    },
    AiOverviewLoaded {
        result: AiOverviewResult,
        /// Local date the overview was resolved for.
        day: NaiveDate,
    },
    MenuScanned {
        analysis: MenuAnalysis,
    },
    MenuScanFailed {
        error: String,
    },
}
