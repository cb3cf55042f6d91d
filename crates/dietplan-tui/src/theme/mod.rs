//! Centralized theme for the Diet Planner TUI.
//!
//! - `palette`: Raw color constants
//! - `styles`: Semantic style builders and opacity blending

pub mod palette;
pub mod styles;
