//! Nutrition screen handlers: navigation, editor, request and popup

use std::time::Instant;

use dietplan_core::prelude::*;
use dietplan_core::NutritionResult;

use crate::actions::RequestKind;
use crate::animation::{POPUP_FADE_IN, POPUP_FADE_OUT};
use crate::navigator::{Route, RouteName};
use crate::nutrition_state::NutritionState;
use crate::state::{AlertState, AppState, RequestId, RequestStatus};

use super::{form, UpdateAction, UpdateResult};

/// Prefix of the alert shown when an analysis fails
pub const API_ERROR_PREFIX: &str = "API error: ";

/// Push the nutrition screen with fresh state
pub fn handle_open(state: &mut AppState) -> UpdateResult {
    if state.navigator.current().name() == RouteName::Nutrition {
        return UpdateResult::none();
    }

    let cancel = if state.navigator.is_at_root() {
        form::invalidate_request(state)
    } else {
        None
    };
    state
        .navigator
        .push(Route::Nutrition(NutritionState::new()));

    UpdateResult {
        message: None,
        action: cancel,
    }
}

/// Pop the current route, cancelling a nutrition request it owns
pub fn handle_navigate_back(state: &mut AppState) -> UpdateResult {
    let in_flight = state
        .navigator
        .nutrition()
        .and_then(|n| n.status.in_flight());

    if !state.navigator.pop() {
        return UpdateResult::none();
    }

    match in_flight {
        Some(request_id) => {
            debug!("Leaving nutrition, cancelling request {}", request_id);
            UpdateResult::action(UpdateAction::CancelRequest(RequestKind::Nutrition))
        }
        None => UpdateResult::none(),
    }
}

fn edit(state: &mut AppState, f: impl FnOnce(&mut NutritionState)) -> UpdateResult {
    if let Some(nutrition) = state.navigator.nutrition_mut() {
        f(nutrition);
    }
    UpdateResult::none()
}

pub fn handle_toggle_focus(state: &mut AppState) -> UpdateResult {
    edit(state, |n| n.focus = n.focus.toggle())
}

pub fn handle_input(state: &mut AppState, c: char) -> UpdateResult {
    edit(state, |n| n.insert_char(c))
}

pub fn handle_newline(state: &mut AppState) -> UpdateResult {
    edit(state, NutritionState::insert_newline)
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    edit(state, NutritionState::backspace)
}

pub fn handle_clear(state: &mut AppState) -> UpdateResult {
    edit(state, NutritionState::clear)
}

/// Parse the editor text and start an analysis
pub fn handle_analyze(state: &mut AppState) -> UpdateResult {
    if state.navigator.nutrition().is_none() {
        return UpdateResult::none();
    }
    let request_id = state.next_request_id();

    let Some(nutrition) = state.navigator.nutrition_mut() else {
        return UpdateResult::none();
    };
    let foods = nutrition.foods();
    nutrition.status = RequestStatus::Submitting { request_id };
    info!(
        "Requesting nutrition analysis {} for {} lines",
        request_id,
        foods.len()
    );

    UpdateResult::action(UpdateAction::AnalyzeNutrition { request_id, foods })
}

pub fn handle_received(
    state: &mut AppState,
    request_id: RequestId,
    result: NutritionResult,
    now: Instant,
) -> UpdateResult {
    let fade_in = state.anim(POPUP_FADE_IN);
    match state.navigator.nutrition_mut() {
        Some(nutrition) if nutrition.status.is_current(request_id) => {
            info!(
                "Nutrition analysis {} received: {} items",
                request_id,
                result.breakdown.len()
            );
            nutrition.status = RequestStatus::Succeeded;
            nutrition.show_result(result, now, fade_in);
        }
        _ => debug!("Discarding stale nutrition response {}", request_id),
    }
    UpdateResult::none()
}

pub fn handle_failed(state: &mut AppState, request_id: RequestId, error: String) -> UpdateResult {
    let Some(nutrition) = state
        .navigator
        .nutrition_mut()
        .filter(|n| n.status.is_current(request_id))
    else {
        debug!("Discarding stale nutrition failure {}: {}", request_id, error);
        return UpdateResult::none();
    };

    warn!("Nutrition analysis {} failed: {}", request_id, error);
    let message = format!("{}{}", API_ERROR_PREFIX, error);
    nutrition.status = RequestStatus::Failed { message: error };
    state.show_alert(AlertState::error(message));
    UpdateResult::none()
}

pub fn handle_close_popup(state: &mut AppState, now: Instant) -> UpdateResult {
    let fade_out = state.anim(POPUP_FADE_OUT);
    edit(state, |n| n.popup.close(now, fade_out))
}

pub fn handle_popup_scroll_up(state: &mut AppState) -> UpdateResult {
    edit(state, |n| n.popup.scroll_up())
}

pub fn handle_popup_scroll_down(state: &mut AppState) -> UpdateResult {
    edit(state, |n| {
        // Totals and macros, then a spacer, name and values row per item
        let rows = n.result.as_ref().map_or(0, |r| 4 + 3 * r.breakdown.len());
        if usize::from(n.popup.scroll) + 1 < rows {
            n.popup.scroll_down();
        }
    })
}

pub fn tick(state: &mut AppState, now: Instant) {
    if let Some(nutrition) = state.navigator.nutrition_mut() {
        nutrition.popup.tick(now);
    }
}
