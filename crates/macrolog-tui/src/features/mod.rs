//! Feature slices. Each owns its projection (view model), key handling and
//! drawing for one page or region.

pub mod ai_overview;
pub mod dashboard;
pub mod food_detail;
pub mod log_list;
pub mod menu_scan;
pub mod plan;
pub mod profile;
pub mod quick_add;
pub mod setup;

use crate::effects::UiEffect;
use crate::overlays::OverlayRequest;

/// What a page did with a key.
#[derive(Debug)]
pub enum KeyResult {
    /// Not for this page; global keys get a chance.
    Ignored,
    Handled(Vec<UiEffect>),
    Open(OverlayRequest),
}

impl KeyResult {
    pub fn handled() -> Self {
        KeyResult::Handled(Vec::new())
    }
}
