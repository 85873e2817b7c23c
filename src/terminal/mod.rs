//! Terminal lifecycle with RAII cleanup.
//!
//! `TerminalManager` puts the terminal into raw mode and the alternate
//! screen when created and restores it when dropped, so the user's shell is
//! left usable on every exit path. The panic hook covers unwinding.
//!
//! ```no_run
//! use drawerdemo::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> drawerdemo::error::ShellResult<()> {
//!     setup_panic_hook();
//!     let mut manager = TerminalManager::new(true)?;
//!     let terminal = manager.terminal();
//!     // ... draw ...
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

use crate::error::ShellResult;

/// Restores the terminal on drop.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Restore now. Later calls, including the one from `Drop`, are no-ops.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal and its cleanup guard.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen and clear it.
    pub fn new(mouse_capture: bool) -> ShellResult<Self> {
        enable_raw_mode()?;
        // From here on the guard undoes raw mode even if a later step fails.
        let guard = TerminalGuard::new();

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout, mouse_capture)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Current terminal size as (width, height).
    pub fn size(&self) -> ShellResult<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }

    /// Restore the terminal before dropping the manager.
    pub fn restore(&mut self) {
        self.guard.cleanup();
    }
}
