//! Input event handling.
//!
//! Translates crossterm events into shell operations. Mouse clicks are
//! resolved through the hit areas registered during the last render.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;
use crate::routes::Route;
use crate::ui::interaction::handle_click_action;

impl App {
    /// Dispatch one terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Resize(width, height) => self.update_terminal_dimensions(width, height),
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    /// Handle a key press.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Global keybinds (always active)
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
                return;
            }
            KeyCode::Char('q') => {
                self.quit();
                return;
            }
            KeyCode::Esc | KeyCode::Backspace => {
                if !self.navigate_back() {
                    self.quit();
                }
                return;
            }
            KeyCode::Char('m') | KeyCode::Tab => {
                self.toggle_drawer();
                return;
            }
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                if let Some(route) = Route::from_index(index) {
                    self.select_route(route);
                }
                return;
            }
            _ => {}
        }

        if !self.is_drawer_open() {
            return;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.drawer_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.drawer_cursor_down(),
            KeyCode::Enter => self.confirm_drawer_cursor(),
            _ => {}
        }
    }

    /// Handle a mouse event: left click dispatches, movement updates hover.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.hit_registry.hit_test(mouse.column, mouse.row) {
                    handle_click_action(self, action);
                }
            }
            MouseEventKind::Moved => {
                if self.hit_registry.update_hover(mouse.column, mouse.row) {
                    self.mark_dirty();
                }
            }
            _ => {}
        }
    }
}
