//! Color and text style tokens for the shell.
//!
//! A purple/teal palette with bold titles. Renderers read these
//! tokens and never define colors of their own.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Palette
// ============================================================================

/// Top bar background and selected drawer entry (#6200EE)
pub const COLOR_PRIMARY: Color = Color::Rgb(98, 0, 238);

/// Hovered drawer entry background (#3700B3)
pub const COLOR_PRIMARY_VARIANT: Color = Color::Rgb(55, 0, 179);

/// Keyboard cursor marker (#03DAC5)
pub const COLOR_SECONDARY: Color = Color::Rgb(3, 218, 197);

/// Text drawn on primary surfaces
pub const COLOR_ON_PRIMARY: Color = Color::White;

/// Drawer divider and border
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Unselected drawer entries
pub const COLOR_DIM: Color = Color::Gray;

// ============================================================================
// Typography
// ============================================================================

/// Top bar: title text on the primary color.
pub fn top_bar_style() -> Style {
    Style::default().fg(COLOR_ON_PRIMARY).bg(COLOR_PRIMARY)
}

pub fn title_style() -> Style {
    top_bar_style().add_modifier(Modifier::BOLD)
}

/// Drawer header ("Demo").
pub fn drawer_header_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Drawer entry, highlighted when it is the active route.
pub fn drawer_item_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(COLOR_PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    }
}

pub fn drawer_hover_style() -> Style {
    Style::default().fg(COLOR_ON_PRIMARY).bg(COLOR_PRIMARY_VARIANT)
}

pub fn cursor_marker_style() -> Style {
    Style::default()
        .fg(COLOR_SECONDARY)
        .add_modifier(Modifier::BOLD)
}

/// Content behind an open drawer.
pub fn scrim_style() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

/// Placeholder label in the content area.
pub fn placeholder_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}
