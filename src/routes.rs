//! Route registry.
//!
//! The four navigable destinations form a closed set. [`ROUTES`] is the
//! single ordered table that both the drawer and the content router read
//! from, and [`Route`] is the typed handle into it.

use std::fmt;
use std::str::FromStr;

use crate::error::ShellError;

/// Icons drawn next to drawer items and in the top bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Menu,
    Folder,
    FavoriteBorder,
    History,
    Settings,
}

impl Icon {
    /// Terminal glyph for the icon (always a single narrow cell).
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Menu => "≡",
            Icon::Folder => "▭",
            Icon::FavoriteBorder => "♡",
            Icon::History => "↺",
            Icon::Settings => "⚙",
        }
    }
}

/// Static description of one destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Stable unique identifier
    pub id: &'static str,
    /// Icon shown in the drawer
    pub icon: Icon,
    /// Label shown in the drawer and the top bar
    pub label: &'static str,
}

/// All destinations, in drawer order. The first entry is the start destination.
pub static ROUTES: [RouteDescriptor; 4] = [
    RouteDescriptor {
        id: "folder",
        icon: Icon::Folder,
        label: "フォルダ",
    },
    RouteDescriptor {
        id: "favorite",
        icon: Icon::FavoriteBorder,
        label: "お気に入り",
    },
    RouteDescriptor {
        id: "history",
        icon: Icon::History,
        label: "履歴",
    },
    RouteDescriptor {
        id: "setting",
        icon: Icon::Settings,
        label: "設定",
    },
];

/// Typed handle for a registered destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Folder,
    Favorite,
    History,
    Setting,
}

impl Route {
    /// Every route in registry order.
    pub const ALL: [Route; 4] = [Route::Folder, Route::Favorite, Route::History, Route::Setting];

    /// The route the app starts on.
    pub const START: Route = Route::Folder;

    /// Position of this route in [`ROUTES`].
    pub fn index(self) -> usize {
        match self {
            Route::Folder => 0,
            Route::Favorite => 1,
            Route::History => 2,
            Route::Setting => 3,
        }
    }

    /// Route at `index` in registry order.
    pub fn from_index(index: usize) -> Option<Route> {
        Route::ALL.get(index).copied()
    }

    pub fn descriptor(self) -> &'static RouteDescriptor {
        &ROUTES[self.index()]
    }

    pub fn id(self) -> &'static str {
        self.descriptor().id
    }

    pub fn label(self) -> &'static str {
        self.descriptor().label
    }

    pub fn icon(self) -> Icon {
        self.descriptor().icon
    }

    /// Look up a route by its id.
    pub fn from_id(id: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.id() == id)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Route {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::from_id(s).ok_or_else(|| ShellError::UnknownRoute(s.to_string()))
    }
}

/// Label for a route id, or `""` when the id is not registered.
pub fn label_for(route_id: &str) -> &'static str {
    ROUTES
        .iter()
        .find(|descriptor| descriptor.id == route_id)
        .map(|descriptor| descriptor.label)
        .unwrap_or("")
}
