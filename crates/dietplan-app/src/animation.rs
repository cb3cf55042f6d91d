//! Time-based tweens
//!
//! Animations are declarative: state flips a flag (`pressed`, `visible`) and
//! starts a [`Tween`] toward the matching target. Views sample the tween at
//! render time; nothing is stepped frame by frame.

use std::time::{Duration, Instant};

/// Popup fade-in duration
pub const POPUP_FADE_IN: Duration = Duration::from_millis(250);

/// Popup fade-out duration
pub const POPUP_FADE_OUT: Duration = Duration::from_millis(200);

/// Duration of a card press/release scale transition
pub const PRESS_TRANSITION: Duration = Duration::from_millis(120);

/// Scale of a pressed card
pub const PRESS_SCALE: f32 = 1.05;

/// Interpolation from one value to another over a fixed duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: Duration, start: Instant) -> Self {
        Self {
            from,
            to,
            start,
            duration,
        }
    }

    /// A tween already at rest on `value`
    pub fn settled(value: f32, now: Instant) -> Self {
        Self::new(value, value, Duration::ZERO, now)
    }

    /// Start a new tween toward `to` from wherever this one is at `now`
    pub fn retarget(&self, to: f32, duration: Duration, now: Instant) -> Self {
        Self::new(self.value_at(now), to, duration, now)
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Linear progress in `0.0..=1.0`
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Eased value at `now`
    pub fn value_at(&self, now: Instant) -> f32 {
        let t = ease_out_quad(self.progress(now));
        self.from + (self.to - self.from) * t
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}
