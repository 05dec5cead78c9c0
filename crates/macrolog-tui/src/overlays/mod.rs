//! Overlay modules for the TUI.
//!
//! Overlays are modal UI components that temporarily take over keyboard input.
//! Each overlay is self-contained: it owns its state, key handler, and render
//! function.
//!
//! - `confirm.rs`: yes/no confirmation for deleting a log entry or the account
//! - `render_utils.rs`: shared rendering utilities

pub mod confirm;
pub mod render_utils;

pub use confirm::{ConfirmAction, ConfirmState};
use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::effects::UiEffect;
use crate::state::TuiState;

// ============================================================================
// OverlayRequest / OverlayTransition / OverlayUpdate
// ============================================================================

/// Requests to open a new overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayRequest {
    DeleteLog { log_id: i64, name: String },
    DeleteAccount,
}

/// Transition returned by overlay key handlers.
#[derive(Debug)]
pub enum OverlayTransition {
    Stay,
    Close,
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub effects: Vec<UiEffect>,
}

impl OverlayUpdate {
    fn new(transition: OverlayTransition) -> Self {
        Self {
            transition,
            effects: Vec::new(),
        }
    }

    pub fn stay() -> Self {
        Self::new(OverlayTransition::Stay)
    }

    pub fn close() -> Self {
        Self::new(OverlayTransition::Close)
    }

    #[must_use]
    pub fn with_ui_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}

// ============================================================================
// Overlay
// ============================================================================

#[derive(Debug)]
pub enum Overlay {
    Confirm(ConfirmState),
}

impl Overlay {
    pub fn open(request: OverlayRequest) -> Self {
        match request {
            OverlayRequest::DeleteLog { log_id, name } => {
                Overlay::Confirm(ConfirmState::open(ConfirmAction::DeleteLog { log_id, name }))
            }
            OverlayRequest::DeleteAccount => {
                Overlay::Confirm(ConfirmState::open(ConfirmAction::DeleteAccount))
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self {
            Overlay::Confirm(c) => c.render(frame, area),
        }
    }

    pub fn handle_key(&mut self, tui: &mut TuiState, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::Confirm(c) => c.handle_key(tui, key),
        }
    }
}

/// Routes a key to the active overlay and applies its transition.
///
/// Returns `None` when no overlay is open.
pub fn handle_overlay_key(
    tui: &mut TuiState,
    overlay: &mut Option<Overlay>,
    key: KeyEvent,
) -> Option<Vec<UiEffect>> {
    let active = overlay.as_mut()?;
    let update = active.handle_key(tui, key);
    if matches!(update.transition, OverlayTransition::Close) {
        *overlay = None;
    }
    Some(update.effects)
}

// ============================================================================
// OverlayExt - Extension trait for Option<Overlay>
// ============================================================================

pub trait OverlayExt {
    /// Renders the overlay if one is active.
    fn render(&self, frame: &mut Frame, area: Rect);
}

impl OverlayExt for Option<Overlay> {
    fn render(&self, frame: &mut Frame, area: Rect) {
        if let Some(overlay) = self {
            overlay.render(frame, area);
        }
    }
}
