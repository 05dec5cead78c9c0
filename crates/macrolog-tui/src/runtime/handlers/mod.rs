//! Effect handlers for the TUI runtime.
//!
//! These functions perform the network and disk I/O requested by the reducer.
//! They do NOT mutate state directly.
//!
//! ## Pure Async Pattern
//!
//! Handlers are pure async functions that return `UiEvent`. The runtime spawns
//! them through `spawn_task`, which wraps the result in `TaskCompleted` and
//! sends it to the inbox.
//!
//! ```ignore
//! // Handler: pure async, returns UiEvent
//! pub async fn search_foods(api: ApiClient, query: String) -> UiEvent { ... }
//!
//! // Runtime: spawns and sends to inbox
//! self.spawn_task(TaskKind::Search, task, move || handlers::search_foods(api, query));
//! ```
//!
//! Errors never cross into the reducer as values: each failure becomes a
//! `*Failed` event carrying the error's display string.

pub mod enrich;
pub mod food;
pub mod log;
pub mod session;

pub use enrich::*;
pub use food::*;
pub use log::*;
pub use session::*;
