//! View state construction for UI rendering.

use super::App;
use crate::view_state::ShellViewState;

impl App {
    /// Snapshot the state the renderers need.
    pub fn view_state(&self) -> ShellViewState {
        ShellViewState {
            active_route: self.nav.active_route,
            drawer_open: self.nav.drawer_open,
            drawer_cursor: self.drawer_cursor,
            drawer_reveal: self.drawer_animation.reveal(),
            terminal_width: self.terminal_width,
            terminal_height: self.terminal_height,
        }
    }
}
