//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per route
//! - `form`: Profile form and diet-plan request handlers
//! - `plan`: Plan view selection and press handlers
//! - `nutrition`: Nutrition editor, request and popup handlers

pub(crate) mod form;
pub(crate) mod keys;
pub(crate) mod nutrition;
pub(crate) mod plan;
pub(crate) mod update;


use dietplan_core::{FoodLine, UserProfile};

use crate::actions::RequestKind;
use crate::message::Message;
use crate::state::RequestId;

// Re-export main entry points
pub use keys::{handle_key, handle_key_release};
pub use update::{update, update_at};

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// POST the profile to the diet-plan endpoint
    FetchDietPlan {
        request_id: RequestId,
        profile: UserProfile,
    },

    /// POST the food lines to the nutrition endpoint
    AnalyzeNutrition {
        request_id: RequestId,
        foods: Vec<FoodLine>,
    },

    /// Abort the in-flight request of this kind, if any
    CancelRequest(RequestKind),
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
