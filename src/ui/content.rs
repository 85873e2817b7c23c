//! Content router: one static placeholder view per route.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use super::theme;
use crate::routes::Route;

/// The four placeholder views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Folder,
    Favorite,
    History,
    Setting,
}

impl Placeholder {
    /// Text shown in the middle of the content area.
    pub fn text(self) -> &'static str {
        match self {
            Placeholder::Folder => "フォルダ",
            Placeholder::Favorite => "お気に入り",
            Placeholder::History => "履歴",
            Placeholder::Setting => "設定",
        }
    }
}

/// Placeholder view for a route.
pub fn content_for(route: Route) -> Placeholder {
    match route {
        Route::Folder => Placeholder::Folder,
        Route::Favorite => Placeholder::Favorite,
        Route::History => Placeholder::History,
        Route::Setting => Placeholder::Setting,
    }
}

/// Placeholder view for a raw route id; `None` renders nothing.
pub fn content_for_id(route_id: &str) -> Option<Placeholder> {
    Route::from_id(route_id).map(content_for)
}

/// Render `placeholder` centered in `area`.
pub fn render_content(frame: &mut Frame, area: Rect, placeholder: Option<Placeholder>) {
    let Some(placeholder) = placeholder else {
        return;
    };

    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    let label = Paragraph::new(placeholder.text())
        .style(theme::placeholder_style())
        .alignment(Alignment::Center);
    frame.render_widget(label, middle);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_is_one_to_one() {
        let views: Vec<_> = Route::ALL.iter().map(|r| content_for(*r)).collect();
        assert_eq!(
            views,
            vec![
                Placeholder::Folder,
                Placeholder::Favorite,
                Placeholder::History,
                Placeholder::Setting
            ]
        );
    }

    #[test]
    fn test_placeholder_text_matches_route_label() {
        for route in Route::ALL {
            assert_eq!(content_for(route).text(), route.label());
        }
    }

    #[test]
    fn test_content_for_id() {
        assert_eq!(content_for_id("history"), Some(Placeholder::History));
        assert_eq!(content_for_id("unknown"), None);
    }
}
