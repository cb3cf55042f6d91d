//! Plan view handlers

use std::time::Instant;

use crate::animation::PRESS_TRANSITION;
use crate::plan_view_state::PlanViewState;
use crate::state::AppState;

use super::UpdateResult;

/// Apply `f` to the plan view when it is the current route
fn with_plan_view(
    state: &mut AppState,
    now: Instant,
    f: impl FnOnce(&mut PlanViewState, Instant, std::time::Duration),
) -> UpdateResult {
    let transition = state.anim(PRESS_TRANSITION);
    if let Some(view) = state.navigator.plan_view_mut() {
        f(view, now, transition);
    }
    UpdateResult::none()
}

pub fn handle_select_next(state: &mut AppState, now: Instant) -> UpdateResult {
    with_plan_view(state, now, |view, now, t| view.select_next(now, t))
}

pub fn handle_select_prev(state: &mut AppState, now: Instant) -> UpdateResult {
    with_plan_view(state, now, |view, now, t| view.select_prev(now, t))
}

pub fn handle_select_first(state: &mut AppState, now: Instant) -> UpdateResult {
    with_plan_view(state, now, |view, now, t| view.select(0, now, t))
}

pub fn handle_select_last(state: &mut AppState, now: Instant) -> UpdateResult {
    with_plan_view(state, now, |view, now, t| {
        view.select(view.card_count().saturating_sub(1), now, t)
    })
}

pub fn handle_press(state: &mut AppState, now: Instant) -> UpdateResult {
    let hold = state.press_hold();
    with_plan_view(state, now, |view, now, t| view.press(now, t, hold))
}

pub fn handle_release(state: &mut AppState, now: Instant) -> UpdateResult {
    with_plan_view(state, now, |view, now, t| view.release(now, t))
}

pub fn tick(state: &mut AppState, now: Instant) {
    let transition = state.anim(PRESS_TRANSITION);
    if let Some(view) = state.navigator.plan_view_mut() {
        view.tick(now, transition);
    }
}
