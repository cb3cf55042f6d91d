//! Keybinding hint bar

use dietplan_app::{AppState, Route};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

/// (key, action) pairs shown in the bottom row
pub type Hint = (&'static str, &'static str);

const ALERT_HINTS: &[Hint] = &[("Enter", "dismiss"), ("Ctrl+C", "quit")];

const FORM_HINTS: &[Hint] = &[
    ("Tab", "next"),
    ("Ctrl+S", "generate"),
    ("Ctrl+N", "nutrition"),
    ("Ctrl+U", "clear"),
    ("Esc", "quit"),
];

const PLAN_HINTS: &[Hint] = &[
    ("↑↓", "select"),
    ("Space", "press"),
    ("Esc", "back"),
    ("Ctrl+C", "quit"),
];

const NUTRITION_HINTS: &[Hint] = &[
    ("Tab", "focus"),
    ("Ctrl+S", "analyze"),
    ("Ctrl+U", "clear"),
    ("Esc", "back"),
];

const POPUP_HINTS: &[Hint] = &[("↑↓", "scroll"), ("Esc", "close"), ("Ctrl+C", "quit")];

/// Hints for whatever currently receives input
pub fn hints_for(state: &AppState) -> &'static [Hint] {
    if state.alert.is_some() {
        return ALERT_HINTS;
    }
    match state.navigator.current() {
        Route::Home => FORM_HINTS,
        Route::DietResult(_) => PLAN_HINTS,
        Route::Nutrition(nutrition) if nutrition.popup.is_interactive() => POPUP_HINTS,
        Route::Nutrition(_) => NUTRITION_HINTS,
    }
}

pub struct KeyHints {
    hints: &'static [Hint],
}

impl KeyHints {
    pub fn new(hints: &'static [Hint]) -> Self {
        Self { hints }
    }

    pub fn for_state(state: &AppState) -> Self {
        Self::new(hints_for(state))
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_style(area, Style::default().bg(palette::DEEPEST_BG));

        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", styles::text_muted()));
            }
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*action, styles::text_secondary()));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
