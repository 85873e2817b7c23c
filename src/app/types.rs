//! Type definitions for the shell state.
//!
//! - [`NavigationState`] - Active route and drawer visibility
//! - [`DrawerAnimation`] - Visual slide progress of the drawer

use crate::routes::Route;

/// Which route is showing and whether the drawer is open.
///
/// Owned by [`App`](super::App); renderers only ever see a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub active_route: Route,
    pub drawer_open: bool,
}

impl NavigationState {
    /// Id of the active route.
    pub fn active_route_id(&self) -> &'static str {
        self.active_route.id()
    }
}

/// Slide-in progress of the drawer, in percent of its full width.
///
/// The logical open/closed flag changes immediately; this only tracks how
/// much of the panel is drawn while it catches up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawerAnimation {
    reveal: u8,
}

impl DrawerAnimation {
    /// Percent added or removed per tick.
    pub const STEP: u8 = 25;

    /// Current reveal percentage (0..=100).
    pub fn reveal(&self) -> u8 {
        self.reveal
    }

    /// Move one step toward fully open or fully closed.
    ///
    /// Returns true if the reveal changed.
    pub fn step_toward(&mut self, open: bool) -> bool {
        let next = if open {
            self.reveal.saturating_add(Self::STEP).min(100)
        } else {
            self.reveal.saturating_sub(Self::STEP)
        };
        let changed = next != self.reveal;
        self.reveal = next;
        changed
    }

    /// Whether the reveal has not reached the target yet.
    pub fn is_settling(&self, open: bool) -> bool {
        if open {
            self.reveal < 100
        } else {
            self.reveal > 0
        }
    }
}
