//! # TUI Module
//!
//! Full-screen terminal interface for the bill splitter, built with ratatui.

pub mod app;
pub mod components;
pub mod event;
pub mod theme;
pub mod ui;

#[cfg(test)]
mod ui_tests;

pub use app::App;
pub use event::handle_events;
pub use ui::ui;
