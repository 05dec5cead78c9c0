//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! The runtime uses an "inbox" pattern for async event collection:
//! - Handlers return a `UiEvent`; `spawn_task` sends it to `inbox_tx`
//! - Runtime drains `inbox_rx` each frame to collect results
//! - Every request shares one channel, so there are no per-operation receivers
//!
//! Structure:
//! - `mod.rs`: Core runtime (TuiRuntime, event loop, effect dispatch)
//! - `inbox.rs`: Inbox channel types
//! - `handlers/`: Effect handler implementations (network, disk)

mod handlers;
mod inbox;

use std::future::Future;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use inbox::{UiEventReceiver, UiEventSender};
use macrolog_core::api::ApiClient;
use macrolog_core::config::Config;
use macrolog_core::overview::OverviewCache;
use macrolog_core::storage::LocalStore;
use tokio::sync::mpsc;

use crate::common::{TaskCompleted, TaskId, TaskKind, TaskStarted};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::terminal::{self, TerminalSession};
use crate::{render, update};

/// Tick cadence while something is in flight (~60fps).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle (no task running, no pending search).
/// Longer timeout reduces CPU usage when nothing is happening.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal, the state and the API client. Runs the event loop and
/// executes effects. The terminal is restored when the runtime is dropped
/// and on panic.
pub struct TuiRuntime {
    terminal: TerminalSession,
    /// Application state (split: tui + overlay).
    pub state: AppState,
    api: ApiClient,
    cache: OverviewCache,
    /// Inbox sender - spawned tasks send their results here.
    inbox_tx: UiEventSender,
    /// Inbox receiver - runtime drains this each frame.
    inbox_rx: UiEventReceiver,
    /// Last time a Tick event was emitted.
    last_tick: Instant,
    /// Last time a terminal event was received (for fast tick during interaction).
    last_terminal_event: Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime and takes over the terminal.
    pub fn new(config: Config) -> Result<Self> {
        let api = ApiClient::from_config(&config).context("Failed to create API client")?;
        let cache = OverviewCache::new(LocalStore::open_default());

        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        let terminal = TerminalSession::enter()?;

        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        let now = Instant::now();
        Ok(Self {
            terminal,
            state: AppState::new(config),
            api,
            cache,
            inbox_tx,
            inbox_rx,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Runs the main event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render
        self.dispatch_event(UiEvent::Startup);

        while !self.state.tui.should_quit {
            let mut events = self.collect_events()?;

            // Frame goes first so the reducer's clock is current for input
            events.insert(0, UiEvent::Frame { at: Instant::now() });

            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }

                // Only Tick triggers render - this caps frame rate at tick cadence
                let marks_dirty = matches!(&event, UiEvent::Tick { .. });

                let effects = update::update(&mut self.state, event);
                if marks_dirty {
                    dirty = true;
                }
                self.execute_effects(effects);

                if self.state.tui.should_quit {
                    break;
                }
            }

            if dirty && !self.state.tui.should_quit {
                let state = &self.state;
                self.terminal.draw(|frame| render::render(state, frame))?;
                dirty = false;
            }
        }

        tracing::info!("exiting event loop");
        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    /// Collects events from the terminal and the inbox, then a Tick when due.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Fast polling keeps spinners moving and lets the search debounce
        // fire on time. Otherwise use slow polling to save CPU.
        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let needs_fast_poll = self.state.tui.tasks.is_any_running()
            || self.state.tui.quick_add.debouncer.is_pending()
            || recent_terminal_activity;

        let tick_interval = if needs_fast_poll {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        self.collect_inbox_events(&mut events);

        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());

        // Don't delay rendering when results are already waiting
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            let at = Instant::now();
            events.push(UiEvent::Tick { at });
            self.last_tick = at;
        }

        Ok(events)
    }

    fn collect_inbox_events(&mut self, events: &mut Vec<UiEvent>) {
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn dispatch_event(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        if !effects.is_empty() {
            self.execute_effects(effects);
        }
    }

    /// Spawns an async task with a uniform TaskStarted/TaskCompleted lifecycle.
    fn spawn_task<F, Fut>(&self, kind: TaskKind, id: TaskId, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        let _ = tx.send(UiEvent::TaskStarted {
            kind,
            started: TaskStarted { id },
        });
        tokio::spawn(async move {
            let inner = f().await;
            let completed = TaskCompleted {
                id,
                result: Box::new(inner),
            };
            let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
        });
    }

    /// Executes a single effect by dispatching to the appropriate handler.
    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }

            // Session effects
            UiEffect::Initialize { task, reason } => {
                let api = self.api.clone();
                self.spawn_task(TaskKind::Init, task, move || {
                    handlers::initialize(api, reason)
                });
            }
            UiEffect::SaveProfile {
                task,
                profile,
                reason,
            } => {
                let api = self.api.clone();
                self.spawn_task(TaskKind::ProfileSave, task, move || {
                    handlers::save_profile(api, profile, reason)
                });
            }
            UiEffect::DeleteAccount { task } => {
                let api = self.api.clone();
                let cache = self.cache.clone();
                self.spawn_task(TaskKind::AccountDelete, task, move || {
                    handlers::delete_account(api, cache)
                });
            }

            // Log effects
            UiEffect::SubmitLog {
                task,
                log_id,
                request,
            } => {
                let api = self.api.clone();
                self.spawn_task(TaskKind::LogSubmit, task, move || {
                    handlers::submit_log(api, log_id, request)
                });
            }
            UiEffect::DeleteLog { task, log_id } => {
                let api = self.api.clone();
                self.spawn_task(TaskKind::LogDelete, task, move || {
                    handlers::delete_log(api, log_id)
                });
            }

            // Food effects
            UiEffect::SearchFoods { task, query } => {
                let api = self.api.clone();
                self.spawn_task(TaskKind::Search, task, move || {
                    handlers::search_foods(api, query)
                });
            }
            UiEffect::LoadFood {
                task,
                food_id,
                log_id,
                grams,
            } => {
                let api = self.api.clone();
                self.spawn_task(TaskKind::FoodLoad, task, move || {
                    handlers::load_food(api, food_id, log_id, grams)
                });
            }

            // Enrichment effects
            UiEffect::LoadAiOverview {
                task,
                latest,
                force,
            } => {
                let api = self.api.clone();
                let cache = self.cache.clone();
                self.spawn_task(TaskKind::AiOverview, task, move || {
                    handlers::ai_overview(api, cache, latest, force)
                });
            }
            UiEffect::CacheAiOverview { day, payload } => {
                self.cache.save(day, &payload);
            }
            UiEffect::ScanMenu { task, path } => {
                let api = self.api.clone();
                self.spawn_task(TaskKind::MenuScan, task, move || {
                    handlers::scan_menu(api, path)
                });
            }
        }
    }
}
