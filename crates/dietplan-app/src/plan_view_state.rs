//! Plan view state: card selection and press feedback

use std::time::{Duration, Instant};

use dietplan_core::DailyPlan;

use crate::animation::{Tween, PRESS_SCALE};

/// Press feedback on one card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPress {
    /// Index of the pressed card
    pub card: usize,
    pub pressed: bool,
    pub scale: Tween,
    /// Automatic release time while pressed
    pub release_at: Option<Instant>,
}

impl CardPress {
    pub fn scale_at(&self, now: Instant) -> f32 {
        self.scale.value_at(now)
    }

    /// Released and back at rest
    pub fn is_settled(&self, now: Instant) -> bool {
        !self.pressed && self.scale.is_finished(now)
    }
}

/// State of the DietResult route
///
/// Holds the plan exactly as received; nothing here rewrites plan data.
#[derive(Debug, Clone)]
pub struct PlanViewState {
    pub plan: DailyPlan,
    pub selected: usize,
    pub press: Option<CardPress>,
}

impl PlanViewState {
    pub fn new(plan: DailyPlan) -> Self {
        Self {
            plan,
            selected: 0,
            press: None,
        }
    }

    pub fn card_count(&self) -> usize {
        self.plan.len()
    }

    /// Scale of card `index` at `now`
    pub fn card_scale(&self, index: usize, now: Instant) -> f32 {
        match &self.press {
            Some(press) if press.card == index => press.scale_at(now),
            _ => 1.0,
        }
    }

    pub fn select(&mut self, index: usize, now: Instant, transition: Duration) {
        if self.plan.is_empty() {
            return;
        }
        let index = index.min(self.plan.len() - 1);
        if index != self.selected {
            self.release(now, transition);
            self.selected = index;
        }
    }

    pub fn select_next(&mut self, now: Instant, transition: Duration) {
        self.select(self.selected.saturating_add(1), now, transition);
    }

    pub fn select_prev(&mut self, now: Instant, transition: Duration) {
        self.select(self.selected.saturating_sub(1), now, transition);
    }

    /// Press the selected card: scale up and schedule the automatic release
    pub fn press(&mut self, now: Instant, transition: Duration, hold: Duration) {
        if self.plan.is_empty() {
            return;
        }
        let current = self.card_scale(self.selected, now);
        self.press = Some(CardPress {
            card: self.selected,
            pressed: true,
            scale: Tween::new(current, PRESS_SCALE, transition, now),
            release_at: Some(now + hold),
        });
    }

    /// Release the pressed card, scaling back to rest
    pub fn release(&mut self, now: Instant, transition: Duration) {
        if let Some(press) = self.press.as_mut() {
            if press.pressed {
                press.pressed = false;
                press.release_at = None;
                press.scale = press.scale.retarget(1.0, transition, now);
            }
        }
    }

    /// Advance press feedback: auto-release and drop settled presses
    pub fn tick(&mut self, now: Instant, transition: Duration) {
        let due = matches!(
            self.press,
            Some(CardPress { pressed: true, release_at: Some(at), .. }) if now >= at
        );
        if due {
            self.release(now, transition);
        }
        if self.press.is_some_and(|p| p.is_settled(now)) {
            self.press = None;
        }
    }
}
