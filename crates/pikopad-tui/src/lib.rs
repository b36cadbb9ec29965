//! pikopad-tui - Terminal UI for Pikopad
//!
//! Hosts the [`pikopad_app::Engine`] in a ratatui terminal: converts crossterm
//! key events into messages, draws the header, view tabs, the active view and
//! the status bar, and restores the terminal on exit or panic.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
