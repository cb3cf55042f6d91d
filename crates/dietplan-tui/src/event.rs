//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use dietplan_app::input_key::InputKey;
use dietplan_app::message::Message;
use dietplan_core::prelude::*;
use std::time::{Duration, Instant};

/// Animation tick interval (20 FPS)
pub const TICK_RATE: Duration = Duration::from_millis(50);

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c.to_ascii_lowercase()))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None, // Unsupported keys ignored
    }
}

/// Convert a terminal event into a message, if it maps to one
pub fn event_to_message(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) => {
            let input_key = key_event_to_input(key)?;
            match key.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => Some(Message::Key(input_key)),
                KeyEventKind::Release => Some(Message::KeyReleased(input_key)),
            }
        }
        _ => None,
    }
}

/// Fixed-interval tick schedule, independent of input traffic
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    last_tick: Instant,
}

impl TickClock {
    pub fn new(now: Instant) -> Self {
        Self { last_tick: now }
    }

    /// Time left until the next tick is due
    pub fn timeout(&self, now: Instant) -> Duration {
        TICK_RATE.saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    /// Returns `true` (and restarts the interval) once a tick is due
    pub fn take_tick(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_tick) >= TICK_RATE {
            self.last_tick = now;
            true
        } else {
            false
        }
    }
}

/// Wait for terminal input until the next tick, returning what is ready
///
/// A steady key stream (auto-repeat) still yields a `Tick` every
/// [`TICK_RATE`], so tween completion is never postponed by input.
pub fn poll(clock: &mut TickClock) -> Result<Vec<Message>> {
    let mut messages = Vec::with_capacity(2);

    if event::poll(clock.timeout(Instant::now()))? {
        if let Some(message) = event_to_message(event::read()?) {
            messages.push(message);
        }
    }

    if clock.take_tick(Instant::now()) {
        messages.push(Message::Tick);
    }

    Ok(messages)
}
