//! Dashboard projection: today's totals against the profile targets.

use macrolog_core::models::{DailyLogBundle, UserProfile};

use crate::common::round_display;

/// One tracked-vs-target meter.
#[derive(Debug, Clone, PartialEq)]
pub struct Meter {
    pub tracked: i64,
    pub target: i64,
    /// Bar fill in percent, from the raw values, capped at 100.
    pub percent: f64,
}

impl Meter {
    pub fn new(tracked: f64, target: f64) -> Self {
        Self {
            tracked: round_display(tracked),
            target: round_display(target),
            percent: progress_percent(tracked, target),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub calories: Meter,
    pub protein: Meter,
}

/// `min(100, 100 * value / target)`. A non-positive target shows an empty bar.
pub fn progress_percent(value: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (value / target * 100.0).min(100.0)
}

/// Needs both a profile and a bundle; otherwise nothing is shown.
pub fn project_dashboard(
    profile: Option<&UserProfile>,
    bundle: Option<&DailyLogBundle>,
) -> Option<DashboardView> {
    let (profile, bundle) = (profile?, bundle?);
    Some(DashboardView {
        calories: Meter::new(bundle.totals.calories, profile.calorie_target),
        protein: Meter::new(bundle.totals.protein, profile.protein_target),
    })
}
