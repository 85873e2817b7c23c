//! Navigation drawer panel.
//!
//! Draws a "Demo" header, a divider and one row per registered route over
//! the left edge of the screen. While the drawer is open the uncovered part
//! of the screen is dimmed and acts as a click target that closes it.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::interaction::{ClickAction, HitAreaRegistry};
use super::layout::LayoutContext;
use super::theme;
use crate::routes::{Route, ROUTES};
use crate::view_state::ShellViewState;

/// Text of the drawer header.
pub const DRAWER_HEADER: &str = "Demo";

/// Render the drawer over `area` (the whole frame).
pub fn render_drawer(
    frame: &mut Frame,
    area: Rect,
    view: &ShellViewState,
    registry: &mut HitAreaRegistry,
) {
    if !view.drawer_visible() {
        return;
    }

    let ctx = LayoutContext::new(area.width, area.height);
    let width = ctx.revealed_drawer_width(view.drawer_reveal);

    if view.drawer_open {
        let scrim = Rect {
            x: area.x + width,
            y: area.y,
            width: area.width - width,
            height: area.height,
        };
        if scrim.width > 0 {
            frame.buffer_mut().set_style(scrim, theme::scrim_style());
            registry.register(scrim, ClickAction::CloseDrawer, None);
        }
    }

    if width == 0 {
        return;
    }

    let panel = Rect { width, ..area };
    frame.render_widget(Clear, panel);

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(theme::COLOR_BORDER));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let [_, header, _, divider, items] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(DRAWER_HEADER)
            .style(theme::drawer_header_style())
            .alignment(Alignment::Center),
        header,
    );
    frame.render_widget(
        Paragraph::new("─".repeat(divider.width as usize))
            .style(Style::default().fg(theme::COLOR_BORDER)),
        divider,
    );

    for (index, descriptor) in ROUTES.iter().enumerate() {
        let row = Rect {
            x: items.x,
            y: items.y + index as u16,
            width: items.width,
            height: 1,
        };
        if row.y >= items.bottom() {
            break;
        }

        let active = index == view.active_route.index();
        let marker = if view.drawer_open && index == view.drawer_cursor {
            Span::styled("▶ ", theme::cursor_marker_style())
        } else {
            Span::raw("  ")
        };

        let mut style = theme::drawer_item_style(active);
        if view.drawer_open {
            if let Some(route) = Route::from_index(index) {
                registry.register(
                    row,
                    ClickAction::SelectRoute(route),
                    Some(theme::drawer_hover_style()),
                );
            }
            if let Some(hover) = registry.hover_style_for(row) {
                style = style.patch(hover);
            }
        }

        let line = Line::from(vec![
            marker,
            Span::raw(descriptor.icon.glyph()),
            Span::raw("  "),
            Span::raw(descriptor.label),
        ]);
        frame.render_widget(Paragraph::new(line).style(style), row);
    }
}
