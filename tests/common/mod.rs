//! Common test utilities for integration tests.
//!
//! Helpers to render the shell into a `TestBackend`, read the resulting
//! buffer as text and click on registered hit areas.

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use drawerdemo::app::App;
use drawerdemo::ui;
use drawerdemo::ui::interaction::ClickAction;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;
use unicode_width::UnicodeWidthStr;

/// Render one frame of `app` at the given size and return the buffer.
pub fn draw(app: &mut App, width: u16, height: u16) -> Buffer {
    app.update_terminal_dimensions(width, height);
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    app.needs_redraw = false;
    terminal.backend().buffer().clone()
}

/// Text of row `y`, skipping the cells hidden behind double-width glyphs.
pub fn row_text(buffer: &Buffer, y: u16) -> String {
    let mut text = String::new();
    let mut x = buffer.area.x;
    while x < buffer.area.right() {
        let symbol = buffer[(x, y)].symbol();
        text.push_str(symbol);
        x += symbol.width().max(1) as u16;
    }
    text
}

/// All rows joined with newlines.
pub fn screen_text(buffer: &Buffer) -> String {
    (buffer.area.top()..buffer.area.bottom())
        .map(|y| row_text(buffer, y))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rows (by index) whose text contains `needle`.
pub fn rows_containing(buffer: &Buffer, needle: &str) -> Vec<u16> {
    (buffer.area.top()..buffer.area.bottom())
        .filter(|y| row_text(buffer, *y).contains(needle))
        .collect()
}

/// Rect of the hit area registered for `action` in the last frame.
pub fn hit_rect(app: &App, action: ClickAction) -> Option<Rect> {
    app.hit_registry
        .areas()
        .iter()
        .find(|area| area.action == action)
        .map(|area| area.rect)
}

/// Left-click at a position.
pub fn click_at(app: &mut App, column: u16, row: u16) {
    app.handle_event(Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }));
}

/// Move the pointer to a position.
pub fn move_to(app: &mut App, column: u16, row: u16) {
    app.handle_event(Event::Mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }));
}

/// Click the top-left cell of the area registered for `action`.
///
/// Panics if the last frame did not register that action.
pub fn click(app: &mut App, action: ClickAction) {
    let rect = hit_rect(app, action)
        .unwrap_or_else(|| panic!("no hit area registered for {:?}", action));
    click_at(app, rect.x, rect.y);
}

pub fn press(app: &mut App, code: KeyCode) {
    app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

/// Tick until the drawer animation has finished.
pub fn settle(app: &mut App) {
    for _ in 0..100 {
        if !app.is_animating() {
            return;
        }
        app.tick();
    }
    panic!("drawer animation did not settle");
}
