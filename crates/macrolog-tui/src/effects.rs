//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).
//!
//! This keeps the reducer pure: it only mutates state and returns effects,
//! never performs I/O or spawns tasks directly. Every network effect carries
//! the task id the reducer allocated for it, so a superseded result can be
//! recognized when it lands.

use std::path::PathBuf;

use chrono::NaiveDate;
use macrolog_core::models::{AiOverviewPayload, LogEntry, LogRequest, ProfileInput};

use crate::common::TaskId;

/// Why the session is being (re)loaded, which decides where it lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitReason {
    Startup,
    SetupCompleted,
    LogChanged,
    ProfileChanged,
}

/// Where a successful (re)load leaves the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    Diary,
    ProfileMain,
}

impl InitReason {
    pub fn landing(self) -> Landing {
        match self {
            InitReason::ProfileChanged => Landing::ProfileMain,
            InitReason::Startup | InitReason::SetupCompleted | InitReason::LogChanged => {
                Landing::Diary
            }
        }
    }

    /// Whether the AI overview must skip its same-day cache.
    pub fn forces_ai_overview(self) -> bool {
        matches!(self, InitReason::LogChanged)
    }
}

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Fetch the profile and, when present, today's log.
    Initialize { task: TaskId, reason: InitReason },

    /// Create or replace the profile, then re-initialize for `reason`.
    SaveProfile {
        task: TaskId,
        profile: ProfileInput,
        reason: InitReason,
    },

    /// Delete the account.
    DeleteAccount { task: TaskId },

    /// Create a log entry (`log_id: None`) or update an existing one.
    SubmitLog {
        task: TaskId,
        log_id: Option<i64>,
        request: LogRequest,
    },

    DeleteLog { task: TaskId, log_id: i64 },

    SearchFoods { task: TaskId, query: String },

    /// Fetch a food that is not cached yet, to edit `log_id` with it.
    LoadFood {
        task: TaskId,
        food_id: i64,
        log_id: i64,
        grams: f64,
    },

    /// Resolve the AI overview for today's latest entry.
    LoadAiOverview {
        task: TaskId,
        latest: Option<LogEntry>,
        force: bool,
    },

    /// Remember an accepted AI answer for the rest of `day`.
    CacheAiOverview {
        day: NaiveDate,
        payload: AiOverviewPayload,
    },

    /// Upload a menu photo for recommendations.
    ScanMenu { task: TaskId, path: PathBuf },
}
