//! Menu scan feature slice: upload a menu photo, list recommendations.

mod render;
mod update;
mod view;

pub use render::render_menu_scan;
pub use update::{clean_path, handle_key, on_scan_failed, on_scanned};
pub use view::{MenuScanView, RecommendationCard, project_menu_analysis};
