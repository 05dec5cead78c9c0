//! Shared building blocks for the TUI (task lifecycle, text helpers).

pub mod task;
pub mod text;

pub use task::*;
pub use text::*;
