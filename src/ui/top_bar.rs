//! Top bar: menu control and the active route's title.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme;
use crate::routes::Icon;
use crate::view_state::ShellViewState;

/// Columns covered by the menu control (" ≡ ").
pub const MENU_BUTTON_WIDTH: u16 = 3;

/// Render the top bar into `area`.
///
/// The menu control is only clickable while the drawer is closed; an open
/// drawer is drawn over it.
pub fn render_top_bar(
    frame: &mut Frame,
    area: Rect,
    view: &ShellViewState,
    registry: &mut HitAreaRegistry,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let line = Line::from(vec![
        Span::styled(format!(" {} ", Icon::Menu.glyph()), theme::top_bar_style()),
        Span::styled(" ", theme::top_bar_style()),
        Span::styled(view.title(), theme::title_style()),
    ]);
    frame.render_widget(Paragraph::new(line).style(theme::top_bar_style()), area);

    if !view.drawer_open {
        let button = Rect {
            x: area.x,
            y: area.y,
            width: MENU_BUTTON_WIDTH.min(area.width),
            height: 1,
        };
        registry.register(button, ClickAction::OpenDrawer, None);
    }
}
