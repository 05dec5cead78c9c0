//! Full-screen terminal client for macrolog.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod navigation;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
use macrolog_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the interactive client until the user quits.
///
/// Must be called from within a tokio runtime; requests run as spawned tasks.
pub fn run_interactive(config: &Config) -> Result<()> {
    // The client draws to the terminal, so it needs one
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The interactive client requires a terminal.\n\
             Use `macrolog today` for a plain-text report."
        );
    }

    tracing::info!(api = %config.api_base_url, "starting interactive client");
    // The runtime is dropped here, which hands the terminal back
    TuiRuntime::new(config.clone())?.run()?;

    writeln!(stderr(), "Goodbye!")?;
    Ok(())
}
