//! Log list feature slice. The same projection feeds the diary summary and
//! the full log page, where entries can be edited or deleted.

mod render;
mod update;
mod view;

pub use render::render_log_list;
pub use update::{handle_key, start_edit};
pub use view::{EMPTY_LOG, LogListView, LogRow, project_log_list};
