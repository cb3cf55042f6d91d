//! Profile form and diet-plan request handlers

use dietplan_core::prelude::*;
use dietplan_core::DailyPlan;

use crate::actions::RequestKind;
use crate::navigator::Route;
use crate::plan_view_state::PlanViewState;
use crate::state::{AlertState, AppState, RequestId, RequestStatus};

use super::{UpdateAction, UpdateResult};

/// Alert text for any diet-plan failure
pub const BACKEND_UNREACHABLE: &str =
    "Unable to connect to backend. Check your Wi-Fi or backend status.";

pub fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    state.form.focus = state.form.focus.next();
    UpdateResult::none()
}

pub fn handle_focus_prev(state: &mut AppState) -> UpdateResult {
    state.form.focus = state.form.focus.prev();
    UpdateResult::none()
}

pub fn handle_input(state: &mut AppState, c: char) -> UpdateResult {
    state.form.insert_char(c);
    UpdateResult::none()
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    state.form.backspace();
    UpdateResult::none()
}

pub fn handle_clear_field(state: &mut AppState) -> UpdateResult {
    state.form.clear_field();
    UpdateResult::none()
}

/// Start a diet-plan request from the current field values
///
/// Submitting again while a request is in flight supersedes it: the new id
/// becomes current and the older response will be discarded.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if !state.navigator.is_at_root() {
        return UpdateResult::none();
    }

    let profile = state.form.fields.to_profile();
    let request_id = state.next_request_id();
    if let Some(previous) = state.form.status.in_flight() {
        debug!("Diet plan request {} superseded by {}", previous, request_id);
    }
    state.form.status = RequestStatus::Submitting { request_id };
    info!("Requesting diet plan {}", request_id);

    UpdateResult::action(UpdateAction::FetchDietPlan {
        request_id,
        profile,
    })
}

pub fn handle_plan_received(
    state: &mut AppState,
    request_id: RequestId,
    plan: DailyPlan,
) -> UpdateResult {
    if !state.form.status.is_current(request_id) {
        debug!("Discarding stale diet plan response {}", request_id);
        return UpdateResult::none();
    }

    info!("Diet plan {} received with {} days", request_id, plan.len());
    state.form.status = RequestStatus::Succeeded;
    state
        .navigator
        .push(Route::DietResult(PlanViewState::new(plan)));
    UpdateResult::none()
}

pub fn handle_plan_failed(state: &mut AppState, request_id: RequestId, error: String) -> UpdateResult {
    if !state.form.status.is_current(request_id) {
        debug!("Discarding stale diet plan failure {}: {}", request_id, error);
        return UpdateResult::none();
    }

    warn!("Diet plan request {} failed: {}", request_id, error);
    state.form.status = RequestStatus::Failed { message: error };
    state.show_alert(AlertState::error(BACKEND_UNREACHABLE));
    UpdateResult::none()
}

/// Drop the in-flight diet-plan request when leaving the form
pub fn invalidate_request(state: &mut AppState) -> Option<UpdateAction> {
    let request_id = state.form.status.in_flight()?;
    debug!("Leaving form, cancelling diet plan request {}", request_id);
    state.form.status = RequestStatus::Idle;
    Some(UpdateAction::CancelRequest(RequestKind::DietPlan))
}
