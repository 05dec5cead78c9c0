//! Food detail feature slice: live nutrition preview and the add/update
//! log submit.

mod render;
mod state;
mod update;
mod view;

pub use render::render_food_detail;
pub use state::FoodDetailState;
pub use update::{handle_key, on_food_loaded, open_for_add, open_for_edit, submit};
pub use view::{DetailMode, NutritionPanel, effective_grams, project_food_detail};
