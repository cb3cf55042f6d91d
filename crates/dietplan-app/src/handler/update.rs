//! Main update function - handles state transitions (TEA pattern)
//!
//! Handler implementations live in:
//! - `form`: Profile form editing and diet-plan responses
//! - `plan`: Plan card selection and press feedback
//! - `nutrition`: Nutrition editor, analysis responses and popup

use std::time::Instant;

use dietplan_core::prelude::*;

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{form, keys, nutrition, plan, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    update_at(state, message, Instant::now())
}

/// [`update`] with an explicit clock, used for animation timing
pub fn update_at(state: &mut AppState, message: Message, now: Instant) -> UpdateResult {
    match message {
        Message::Quit => {
            info!("Quit requested");
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match keys::handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::KeyReleased(key) => match keys::handle_key_release(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            plan::tick(state, now);
            nutrition::tick(state, now);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::OpenNutrition => nutrition::handle_open(state),
        Message::NavigateBack => nutrition::handle_navigate_back(state),
        Message::DismissAlert => {
            state.dismiss_alert();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Profile Form
        // ─────────────────────────────────────────────────────────
        Message::FormFocusNext => form::handle_focus_next(state),
        Message::FormFocusPrev => form::handle_focus_prev(state),
        Message::FormInput(c) => form::handle_input(state, c),
        Message::FormBackspace => form::handle_backspace(state),
        Message::FormClearField => form::handle_clear_field(state),
        Message::SubmitProfile => form::handle_submit(state),
        Message::DietPlanReceived { request_id, plan } => {
            form::handle_plan_received(state, request_id, plan)
        }
        Message::DietPlanFailed { request_id, error } => {
            form::handle_plan_failed(state, request_id, error)
        }

        // ─────────────────────────────────────────────────────────
        // Plan View
        // ─────────────────────────────────────────────────────────
        Message::PlanSelectNext => plan::handle_select_next(state, now),
        Message::PlanSelectPrev => plan::handle_select_prev(state, now),
        Message::PlanSelectFirst => plan::handle_select_first(state, now),
        Message::PlanSelectLast => plan::handle_select_last(state, now),
        Message::PressCard => plan::handle_press(state, now),
        Message::ReleaseCard => plan::handle_release(state, now),

        // ─────────────────────────────────────────────────────────
        // Nutrition
        // ─────────────────────────────────────────────────────────
        Message::NutritionToggleFocus => nutrition::handle_toggle_focus(state),
        Message::NutritionInput(c) => nutrition::handle_input(state, c),
        Message::NutritionNewline => nutrition::handle_newline(state),
        Message::NutritionBackspace => nutrition::handle_backspace(state),
        Message::NutritionClear => nutrition::handle_clear(state),
        Message::AnalyzeNutrition => nutrition::handle_analyze(state),
        Message::NutritionReceived { request_id, result } => {
            nutrition::handle_received(state, request_id, result, now)
        }
        Message::NutritionFailed { request_id, error } => {
            nutrition::handle_failed(state, request_id, error)
        }
        Message::PopupScrollUp => nutrition::handle_popup_scroll_up(state),
        Message::PopupScrollDown => nutrition::handle_popup_scroll_down(state),
        Message::ClosePopup => nutrition::handle_close_popup(state, now),
    }
}
