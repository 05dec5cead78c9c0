//! Quick add feature slice: debounced food search.

mod debounce;
mod render;
mod state;
mod update;
mod view;

pub use debounce::Debouncer;
pub use render::render_quick_add;
pub use state::QuickAddState;
pub use update::{handle_key, on_query_changed, on_search_failed, on_search_loaded, on_tick};
pub use view::{FoodRow, NO_RESULTS, SearchResultsView, project_search_results};
