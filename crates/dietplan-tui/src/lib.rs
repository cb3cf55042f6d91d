//! dietplan-tui - Terminal UI for Diet Planner
//!
//! This crate provides the ratatui-based terminal interface. It renders the
//! [`dietplan_app::AppState`] owned by the event loop, converts crossterm
//! events into app messages and drives the TEA loop against a backend client.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
