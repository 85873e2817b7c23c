//! Navigation history.
//!
//! Mirrors the usual drawer navigation options: every navigation first pops
//! back to the start destination, and navigating to the route already on
//! top does not push a duplicate.

use crate::routes::Route;

/// Options applied when navigating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavOptions {
    /// Pop everything above the start destination before pushing
    pub pop_up_to_start: bool,
    /// Skip the push when the target is already on top
    pub single_top: bool,
}

impl NavOptions {
    /// Options used for drawer selections.
    pub const DRAWER: NavOptions = NavOptions {
        pop_up_to_start: true,
        single_top: true,
    };
}

impl Default for NavOptions {
    fn default() -> Self {
        Self::DRAWER
    }
}

/// Stack of visited routes. The start destination is never popped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackStack {
    entries: Vec<Route>,
}

impl BackStack {
    pub fn new(start: Route) -> Self {
        Self {
            entries: vec![start],
        }
    }

    /// The route on top of the stack.
    pub fn current(&self) -> Route {
        // entries always holds the start destination
        self.entries[self.entries.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: the start destination is always present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Route] {
        &self.entries
    }

    /// Navigate to `route` and return the new top.
    pub fn navigate(&mut self, route: Route, options: NavOptions) -> Route {
        if options.pop_up_to_start {
            self.entries.truncate(1);
        }
        if !(options.single_top && self.current() == route) {
            self.entries.push(route);
        }
        self.current()
    }

    /// Pop the top entry. Returns the new top, or `None` when only the start
    /// destination is left.
    pub fn pop(&mut self) -> Option<Route> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.pop();
        Some(self.current())
    }
}

impl Default for BackStack {
    fn default() -> Self {
        Self::new(Route::START)
    }
}
