//! UI rendering for the drawer shell
//!
//! The screen is composed of:
//! - Top bar: menu control and the active route's title
//! - Content: the active route's placeholder, centered
//! - Drawer: slides in over everything, with a dimmed scrim beside it
//!
//! Renderers only read a [`ShellViewState`] and register click targets into
//! a [`HitAreaRegistry`]; all state changes happen in [`App`].

pub mod content;
pub mod drawer;
pub mod interaction;
mod layout;
pub mod theme;
pub mod top_bar;

pub use layout::{
    drawer_content_width, LayoutContext, DRAWER_MAX_WIDTH, DRAWER_MIN_SCRIM, TOP_BAR_HEIGHT,
};

use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::app::App;
use crate::view_state::ShellViewState;
use content::{content_for, render_content};
use drawer::render_drawer;
use interaction::HitAreaRegistry;
use top_bar::render_top_bar;

/// Render one frame of the shell.
///
/// Hit areas from the previous frame are discarded and re-registered.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_registry.clear();
    let view = app.view_state();
    render_shell(frame, &view, &mut app.hit_registry);
}

/// Render the shell from a view snapshot.
pub fn render_shell(frame: &mut Frame, view: &ShellViewState, registry: &mut HitAreaRegistry) {
    let area = frame.area();
    let [bar, body] =
        Layout::vertical([Constraint::Length(TOP_BAR_HEIGHT), Constraint::Fill(1)]).areas(area);

    render_top_bar(frame, bar, view, registry);
    render_content(frame, body, Some(content_for(view.active_route)));
    render_drawer(frame, area, view, registry);
}
