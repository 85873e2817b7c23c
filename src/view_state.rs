//! Read-only snapshot of the shell for rendering.
//!
//! UI code imports this instead of [`App`](crate::app::App), so renderers
//! cannot mutate navigation state.

use crate::routes::{label_for, Route};

/// Everything the renderers need for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellViewState {
    /// Route whose content is displayed
    pub active_route: Route,
    /// Logical drawer flag
    pub drawer_open: bool,
    /// Keyboard highlight inside the drawer
    pub drawer_cursor: usize,
    /// Drawn portion of the drawer, in percent
    pub drawer_reveal: u8,
    pub terminal_width: u16,
    pub terminal_height: u16,
}

impl ShellViewState {
    /// Title shown in the top bar.
    pub fn title(&self) -> &'static str {
        label_for(self.active_route.id())
    }

    /// Whether any part of the drawer should be drawn.
    pub fn drawer_visible(&self) -> bool {
        self.drawer_open || self.drawer_reveal > 0
    }
}
