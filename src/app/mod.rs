//! Application state for the drawer shell.
//!
//! [`App`] is the root shell: it owns the [`NavigationState`] and the
//! [`BackStack`], and every write to either goes through the methods in
//! [`navigation`]. Rendering reads a [`ShellViewState`](crate::view_state::ShellViewState)
//! snapshot built in [`view`].

mod back_stack;
mod handlers;
mod navigation;
mod types;
mod view;

pub use back_stack::{BackStack, NavOptions};
pub use types::{DrawerAnimation, NavigationState};

use crate::routes::Route;
use crate::ui::interaction::HitAreaRegistry;

/// Root shell state.
#[derive(Debug)]
pub struct App {
    /// Active route and drawer flag
    nav: NavigationState,
    /// Visited routes; top always equals `nav.active_route`
    back_stack: BackStack,
    /// Keyboard highlight inside the open drawer
    drawer_cursor: usize,
    /// Slide-in progress of the drawer panel
    drawer_animation: DrawerAnimation,
    /// Clickable regions registered during the last render
    pub hit_registry: HitAreaRegistry,
    /// Set when state changed and the next loop iteration must redraw
    pub needs_redraw: bool,
    /// Set to leave the event loop
    pub should_quit: bool,
    pub terminal_width: u16,
    pub terminal_height: u16,
}

impl App {
    /// Create the shell with default navigation state.
    pub fn new() -> Self {
        Self {
            nav: NavigationState::default(),
            back_stack: BackStack::new(Route::START),
            drawer_cursor: Route::START.index(),
            drawer_animation: DrawerAnimation::default(),
            hit_registry: HitAreaRegistry::new(),
            needs_redraw: true,
            should_quit: false,
            terminal_width: 80,
            terminal_height: 24,
        }
    }

    pub fn active_route(&self) -> Route {
        self.nav.active_route
    }

    pub fn active_route_id(&self) -> &'static str {
        self.nav.active_route_id()
    }

    pub fn is_drawer_open(&self) -> bool {
        self.nav.drawer_open
    }

    pub fn back_stack(&self) -> &BackStack {
        &self.back_stack
    }

    pub fn drawer_cursor(&self) -> usize {
        self.drawer_cursor
    }

    pub fn drawer_reveal(&self) -> u8 {
        self.drawer_animation.reveal()
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance animations by one frame.
    pub fn tick(&mut self) {
        if self.drawer_animation.step_toward(self.nav.drawer_open) {
            self.mark_dirty();
        }
    }

    /// Whether the drawer is still sliding.
    pub fn is_animating(&self) -> bool {
        self.drawer_animation.is_settling(self.nav.drawer_open)
    }

    /// Record new terminal dimensions after a resize.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_app_defaults() {
        let app = App::new();
        assert_eq!(app.active_route_id(), "folder");
        assert!(!app.is_drawer_open());
        assert_eq!(app.back_stack().entries(), &[Route::Folder]);
        assert_eq!(app.drawer_reveal(), 0);
        assert!(app.needs_redraw, "first frame must draw");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_tick_drives_drawer_animation() {
        let mut app = App::new();
        app.open_drawer();
        assert!(app.is_animating());

        app.needs_redraw = false;
        app.tick();
        assert_eq!(app.drawer_reveal(), DrawerAnimation::STEP);
        assert!(app.needs_redraw);

        for _ in 0..10 {
            app.tick();
        }
        assert_eq!(app.drawer_reveal(), 100);
        assert!(!app.is_animating());

        app.needs_redraw = false;
        app.tick();
        assert!(!app.needs_redraw, "settled animation should not redraw");
    }

    #[test]
    fn test_update_terminal_dimensions() {
        let mut app = App::new();
        app.needs_redraw = false;
        app.update_terminal_dimensions(120, 40);
        assert_eq!(app.terminal_width, 120);
        assert_eq!(app.terminal_height, 40);
        assert!(app.needs_redraw);
    }
}
