//! Navigation methods for the App.
//!
//! These are the only writers of [`NavigationState`](super::NavigationState).

use super::{App, NavOptions};
use crate::error::{ShellError, ShellResult};
use crate::routes::Route;

impl App {
    /// Open the drawer. Idempotent.
    ///
    /// The keyboard cursor starts on the active entry each time the drawer
    /// opens.
    pub fn open_drawer(&mut self) {
        if !self.nav.drawer_open {
            self.drawer_cursor = self.nav.active_route.index();
            tracing::debug!(route = self.nav.active_route_id(), "drawer opened");
        }
        self.nav.drawer_open = true;
        self.mark_dirty();
    }

    /// Close the drawer. Idempotent.
    pub fn close_drawer(&mut self) {
        if self.nav.drawer_open {
            tracing::debug!("drawer closed");
        }
        self.nav.drawer_open = false;
        self.mark_dirty();
    }

    /// Open the drawer if closed, close it if open.
    pub fn toggle_drawer(&mut self) {
        if self.nav.drawer_open {
            self.close_drawer();
        } else {
            self.open_drawer();
        }
    }

    /// Make `route` active and close the drawer.
    pub fn select_route(&mut self, route: Route) {
        let from = self.nav.active_route;
        let top = self.back_stack.navigate(route, NavOptions::DRAWER);
        debug_assert_eq!(top, route);

        self.nav.active_route = route;
        self.nav.drawer_open = false;
        self.drawer_cursor = route.index();
        self.mark_dirty();

        tracing::debug!(
            from = from.id(),
            to = route.id(),
            depth = self.back_stack.len(),
            "route selected"
        );
    }

    /// String-keyed variant of [`select_route`](Self::select_route).
    ///
    /// An unregistered id leaves the state untouched.
    pub fn select_route_id(&mut self, route_id: &str) -> ShellResult<()> {
        let route = Route::from_id(route_id).ok_or_else(|| {
            tracing::warn!(route_id, "ignoring unknown route");
            ShellError::UnknownRoute(route_id.to_string())
        })?;
        self.select_route(route);
        Ok(())
    }

    /// Handle a back request.
    ///
    /// Closes an open drawer first, then pops the back stack. Returns false
    /// when there is nothing left to go back to, meaning the app should exit.
    pub fn navigate_back(&mut self) -> bool {
        if self.nav.drawer_open {
            self.close_drawer();
            return true;
        }

        match self.back_stack.pop() {
            Some(route) => {
                tracing::debug!(to = route.id(), "navigated back");
                self.nav.active_route = route;
                self.drawer_cursor = route.index();
                self.mark_dirty();
                true
            }
            None => false,
        }
    }

    /// Move the drawer cursor up one entry.
    pub fn drawer_cursor_up(&mut self) {
        if self.drawer_cursor > 0 {
            self.drawer_cursor -= 1;
            self.mark_dirty();
        }
    }

    /// Move the drawer cursor down one entry.
    pub fn drawer_cursor_down(&mut self) {
        if self.drawer_cursor + 1 < Route::ALL.len() {
            self.drawer_cursor += 1;
            self.mark_dirty();
        }
    }

    /// Select the entry under the drawer cursor.
    pub fn confirm_drawer_cursor(&mut self) {
        if let Some(route) = Route::from_index(self.drawer_cursor) {
            self.select_route(route);
        }
    }

    /// Mark the app to quit
    pub fn quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }
}
