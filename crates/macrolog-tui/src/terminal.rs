//! Terminal session for the interactive client.
//!
//! `TerminalSession` owns the ratatui terminal. Creating it switches to raw
//! mode, the alternate screen and bracketed paste; dropping it undoes all
//! three. The panic hook runs the same teardown so a crash leaves a usable
//! shell. Ctrl+C arrives as a key event in raw mode and goes through the
//! reducer like any other key.

use std::io::{self, Stdout};
use std::panic;

use anyhow::{Context, Result};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};

pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    /// Takes over the terminal. Anything already switched on is switched
    /// back off if a later step fails.
    ///
    /// Call `install_panic_hook()` first.
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();

        // Bracketed paste makes a dropped menu photo path one `Paste` event.
        if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableBracketedPaste) {
            teardown();
            return Err(err).context("Failed to enter alternate screen");
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(err) => {
                teardown();
                return Err(err).context("Failed to create terminal");
            }
        };
        tracing::debug!("terminal session started");
        Ok(Self { terminal })
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame<'_>)) -> Result<()> {
        self.terminal.draw(render).context("Failed to draw frame")?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown();
        tracing::debug!("terminal session ended");
    }
}

/// Puts the terminal back into cooked mode. Safe to call more than once.
fn teardown() {
    // Paste mode goes first, while still in raw mode.
    let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Installs a panic hook that restores the terminal before printing the panic.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        teardown();
        original_hook(panic_info);
    }));
}
