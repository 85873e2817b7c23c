//! drawerdemo - a terminal app shell with a navigation drawer
//!
//! A top bar, a slide-out drawer and four placeholder panes. The library
//! exposes the modules for the binary and for integration tests.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod routes;
pub mod terminal;
pub mod ui;
pub mod view_state;
