//! Configuration file parsing for Diet Planner
//!
//! Settings are read from `<config_dir>/diet-planner/config.toml`, or from a
//! path given on the command line.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, read_settings};
pub use types::*;
