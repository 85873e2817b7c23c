//! Terminal setup and teardown.
//!
//! Low-level functions used by `TerminalManager` and by the panic hook.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter the alternate screen, optionally capturing the mouse.
pub fn enter_tui_mode<W: Write>(writer: &mut W, mouse_capture: bool) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen)?;
    if mouse_capture {
        execute!(writer, EnableMouseCapture)?;
    }
    Ok(())
}

/// Restore the terminal to its normal state.
///
/// Safe to call more than once; errors are ignored.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Best-effort restore on stdout, used when unwinding from a panic.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_tui_mode_writes_escape_sequences() {
        let mut without_mouse = Vec::new();
        enter_tui_mode(&mut without_mouse, false).unwrap();
        assert!(!without_mouse.is_empty());

        let mut with_mouse = Vec::new();
        enter_tui_mode(&mut with_mouse, true).unwrap();
        assert!(with_mouse.len() > without_mouse.len());
    }

    #[test]
    fn test_leave_tui_mode_does_not_panic() {
        let mut buffer = Vec::new();
        leave_tui_mode(&mut buffer);
        leave_tui_mode(&mut buffer);
    }
}
