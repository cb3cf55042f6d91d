//! Terminal setup and restoration

use std::io::stdout;

use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use dietplan_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Ask the terminal to report key releases
///
/// Returns whether the flags were pushed. Terminals without the keyboard
/// enhancement protocol never report releases; cards then release after
/// the hold window instead.
pub fn enable_key_release_events() -> bool {
    match crossterm::terminal::supports_keyboard_enhancement() {
        Ok(true) => {
            let flags = KeyboardEnhancementFlags::REPORT_EVENT_TYPES;
            match execute!(stdout(), PushKeyboardEnhancementFlags(flags)) {
                Ok(()) => {
                    debug!("Key release reporting enabled");
                    true
                }
                Err(e) => {
                    warn!("Failed to enable key release reporting: {}", e);
                    false
                }
            }
        }
        Ok(false) => false,
        Err(e) => {
            debug!("Keyboard enhancement query failed: {}", e);
            false
        }
    }
}

/// Undo [`enable_key_release_events`]
pub fn disable_key_release_events() {
    if let Err(e) = execute!(stdout(), PopKeyboardEnhancementFlags) {
        warn!("Failed to restore keyboard flags: {}", e);
    }
}
