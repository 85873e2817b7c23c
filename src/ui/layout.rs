//! Responsive layout for the shell.
//!
//! `LayoutContext` wraps the terminal dimensions and answers the drawer's
//! sizing questions: how wide it is and how much of it is drawn mid-slide.

use unicode_width::UnicodeWidthStr;

use crate::routes::ROUTES;

/// Rows taken by the top bar.
pub const TOP_BAR_HEIGHT: u16 = 1;

/// Upper bound for the drawer width in columns.
pub const DRAWER_MAX_WIDTH: u16 = 36;

/// Columns of content left uncovered by an open drawer, so the scrim can be
/// clicked to close it.
pub const DRAWER_MIN_SCRIM: u16 = 4;

/// Columns used by a drawer row besides the label: cursor marker (2),
/// icon (1), gap (2), border (1) and one trailing space.
const DRAWER_ROW_CHROME: u16 = 7;

/// Terminal dimensions with sizing helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Width as a percentage of the terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Percentage width clamped to `[min, max]`.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    /// Full width of the open drawer.
    pub fn drawer_width(&self) -> u16 {
        let preferred = self.bounded_width(40, drawer_content_width(), DRAWER_MAX_WIDTH);
        preferred.min(self.width.saturating_sub(DRAWER_MIN_SCRIM))
    }

    /// Columns drawn for a drawer at `reveal` percent.
    pub fn revealed_drawer_width(&self, reveal: u8) -> u16 {
        let full = self.drawer_width() as u32;
        (full * reveal.min(100) as u32 / 100) as u16
    }
}

/// Columns needed to show the widest drawer entry without clipping.
pub fn drawer_content_width() -> u16 {
    let widest = ROUTES
        .iter()
        .map(|descriptor| descriptor.label.width())
        .max()
        .unwrap_or(0) as u16;
    widest + DRAWER_ROW_CHROME
}
