//! Profile feature slice: the profile card, goal selection and the body
//! metrics form (also used by first-time setup).

mod form;
mod render;
mod update;
mod view;

pub use form::{FieldKind, FormField, FormKey, ProfileForm};
pub use render::{ProfileRender, render_form, render_profile};
pub use update::{handle_key, save_goal, save_info};
pub use view::{GoalChip, ProfileCard, project_goal_chips, project_profile};
