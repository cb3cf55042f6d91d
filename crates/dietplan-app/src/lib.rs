//! dietplan-app - Application state and orchestration for Diet Planner
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: key input and API completions arrive as [`Message`]s, the
//! [`handler::update`] function applies them to [`AppState`], and any
//! [`UpdateAction`] it returns is turned into a background request task by
//! [`actions::handle_action`].

pub mod actions;
pub mod animation;
pub mod config;
pub mod form_state;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod navigator;
pub mod nutrition_state;
pub mod plan_view_state;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use actions::{RequestKind, RequestTasks};
pub use handler::{UpdateAction, UpdateResult};
pub use message::Message;
pub use navigator::{Navigator, Route, RouteName};
pub use state::{AlertState, AppPhase, AppState, RequestId, RequestStatus};
