//! Dashboard feature slice (calorie and protein meters).

mod render;
mod view;

pub use render::{DASHBOARD_HEIGHT, render_dashboard};
pub use view::{DashboardView, Meter, progress_percent, project_dashboard};
