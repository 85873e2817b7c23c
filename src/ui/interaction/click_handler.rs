//! Click action handler.
//!
//! Translates actions from the hit area registry into shell operations.

use super::hit_area::ClickAction;
use crate::app::App;

/// Apply a click action to the shell.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    match action {
        ClickAction::OpenDrawer => app.open_drawer(),
        ClickAction::CloseDrawer => app.close_drawer(),
        ClickAction::SelectRoute(route) => app.select_route(route),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::Route;

    #[test]
    fn test_click_actions_map_to_shell_operations() {
        let mut app = App::new();

        handle_click_action(&mut app, ClickAction::OpenDrawer);
        assert!(app.is_drawer_open());

        handle_click_action(&mut app, ClickAction::CloseDrawer);
        assert!(!app.is_drawer_open());

        handle_click_action(&mut app, ClickAction::OpenDrawer);
        handle_click_action(&mut app, ClickAction::SelectRoute(Route::Favorite));
        assert_eq!(app.active_route(), Route::Favorite);
        assert!(!app.is_drawer_open());
    }
}
