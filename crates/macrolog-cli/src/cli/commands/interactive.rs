//! Default mode: the full-screen client.

use anyhow::{Context, Result};
use macrolog_core::config::Config;

pub fn run(config: &Config) -> Result<()> {
    macrolog_tui::run_interactive(config).context("interactive client failed")
}
