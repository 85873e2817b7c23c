//! Hit area registry for mouse interaction.
//!
//! Components register clickable regions while they render. The event loop
//! asks the registry which action sits under a click, and the last known
//! pointer position drives hover styling on the next frame.

use ratatui::layout::{Position, Rect};
use ratatui::style::Style;

use crate::routes::Route;

/// Action triggered by clicking a hit area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Menu glyph in the top bar
    OpenDrawer,
    /// Scrim over the content while the drawer is open
    CloseDrawer,
    /// A drawer entry
    SelectRoute(Route),
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
    /// Style applied while the pointer is over the area
    pub hover_style: Option<Style>,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self {
            rect,
            action,
            hover_style: None,
        }
    }

    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.rect.contains(Position::new(x, y))
    }
}

/// Hit areas for the current frame, in z-order (later = on top).
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
    /// Last pointer position reported by a mouse move
    pointer: Option<(u16, u16)>,
    /// Index of the area under the pointer
    hovered: Option<usize>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all areas. Call at the start of each render.
    ///
    /// The pointer position survives so hover styling can be recomputed as
    /// areas are registered again.
    pub fn clear(&mut self) {
        self.areas.clear();
        self.hovered = None;
    }

    /// Register a hit area on top of the existing ones.
    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        self.register_area(HitArea {
            rect,
            action,
            hover_style,
        });
    }

    pub fn register_area(&mut self, area: HitArea) {
        self.areas.push(area);
        self.hovered = self.find_index_at_pointer();
    }

    /// Action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.find_index(x, y).map(|i| self.areas[i].action)
    }

    /// Record the pointer position. Returns true if the hovered area changed.
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        self.pointer = Some((x, y));
        let new_hovered = self.find_index(x, y);
        let changed = new_hovered != self.hovered;
        self.hovered = new_hovered;
        changed
    }

    /// Hover style for `rect` if it is the area under the pointer.
    pub fn hover_style_for(&self, rect: Rect) -> Option<Style> {
        let area = self.get_hovered()?;
        if area.rect == rect {
            area.hover_style
        } else {
            None
        }
    }

    pub fn is_hovering(&self) -> bool {
        self.hovered.is_some()
    }

    pub fn get_hovered(&self) -> Option<&HitArea> {
        self.hovered.and_then(|i| self.areas.get(i))
    }

    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    fn find_index(&self, x: u16, y: u16) -> Option<usize> {
        self.areas.iter().rposition(|area| area.contains(x, y))
    }

    fn find_index_at_pointer(&self) -> Option<usize> {
        let (x, y) = self.pointer?;
        self.find_index(x, y)
    }
}
