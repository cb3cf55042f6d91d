//! Nutrition screen state: the food editor and the breakdown popup

use std::time::{Duration, Instant};

use dietplan_core::{parse_food_lines, FoodLine, NutritionResult};

use crate::animation::Tween;
use crate::state::RequestStatus;

/// Editor content when the screen opens
pub const DEFAULT_FOODS: &str = "Chapathi: 4 pieces\nPotato Kuruma: 200 g";

/// Focusable element of the nutrition screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NutritionFocus {
    #[default]
    Editor,
    /// "Analyze Nutrition"
    AnalyzeButton,
}

impl NutritionFocus {
    pub fn toggle(self) -> Self {
        match self {
            NutritionFocus::Editor => NutritionFocus::AnalyzeButton,
            NutritionFocus::AnalyzeButton => NutritionFocus::Editor,
        }
    }
}

/// Breakdown overlay
///
/// `visible` gates rendering. Closing starts a fade-out and leaves `visible`
/// set until the fade completes, so the popup stays on screen while it fades.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupState {
    pub visible: bool,
    pub closing: bool,
    pub opacity: Tween,
    pub scroll: u16,
}

impl PopupState {
    pub fn hidden(now: Instant) -> Self {
        Self {
            visible: false,
            closing: false,
            opacity: Tween::settled(0.0, now),
            scroll: 0,
        }
    }

    pub fn open(&mut self, now: Instant, fade_in: Duration) {
        self.visible = true;
        self.closing = false;
        self.scroll = 0;
        self.opacity = self.opacity.retarget(1.0, fade_in, now);
    }

    pub fn close(&mut self, now: Instant, fade_out: Duration) {
        if !self.visible || self.closing {
            return;
        }
        self.closing = true;
        self.opacity = self.opacity.retarget(0.0, fade_out, now);
    }

    /// Unmount once the fade-out has finished
    pub fn tick(&mut self, now: Instant) {
        if self.closing && self.opacity.is_finished(now) {
            self.visible = false;
            self.closing = false;
        }
    }

    pub fn opacity_at(&self, now: Instant) -> f32 {
        if self.visible {
            self.opacity.value_at(now)
        } else {
            0.0
        }
    }

    /// Accepting input: visible and not fading out
    pub fn is_interactive(&self) -> bool {
        self.visible && !self.closing
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }
}

/// State of the Nutrition route
#[derive(Debug, Clone)]
pub struct NutritionState {
    pub text: String,
    pub focus: NutritionFocus,
    pub status: RequestStatus,
    /// Latest successful analysis
    pub result: Option<NutritionResult>,
    pub popup: PopupState,
}

impl Default for NutritionState {
    fn default() -> Self {
        Self::new()
    }
}

impl NutritionState {
    pub fn new() -> Self {
        Self {
            text: DEFAULT_FOODS.to_string(),
            focus: NutritionFocus::Editor,
            status: RequestStatus::Idle,
            result: None,
            popup: PopupState::hidden(Instant::now()),
        }
    }

    /// Food lines parsed from the editor text
    pub fn foods(&self) -> Vec<FoodLine> {
        parse_food_lines(&self.text)
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn insert_newline(&mut self) {
        self.text.push('\n');
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Store a successful analysis and open the popup
    pub fn show_result(&mut self, result: NutritionResult, now: Instant, fade_in: Duration) {
        self.result = Some(result);
        self.popup.open(now, fade_in);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{POPUP_FADE_IN, POPUP_FADE_OUT};
    use dietplan_core::Macros;

    fn result() -> NutritionResult {
        NutritionResult {
            total_calories: 620.0,
            macros: Macros {
                protein: 18.0,
                carbs: 90.0,
                fat: 20.0,
            },
            breakdown: vec![],
        }
    }

    #[test]
    fn test_default_text_parses_to_two_foods() {
        let state = NutritionState::new();
        assert_eq!(
            state.foods(),
            vec![
                FoodLine::new("Chapathi", "4 pieces"),
                FoodLine::new("Potato Kuruma", "200 g"),
            ]
        );
    }

    #[test]
    fn test_editing() {
        let mut state = NutritionState::new();
        state.clear();
        for c in "Egg".chars() {
            state.insert_char(c);
        }
        state.insert_newline();
        state.insert_char('X');
        state.backspace();
        assert_eq!(state.text, "Egg\n");
        assert_eq!(state.foods().len(), 2);
    }

    #[test]
    fn test_focus_toggle() {
        assert_eq!(
            NutritionFocus::Editor.toggle(),
            NutritionFocus::AnalyzeButton
        );
        assert_eq!(
            NutritionFocus::AnalyzeButton.toggle(),
            NutritionFocus::Editor
        );
    }

    #[test]
    fn test_popup_fades_in() {
        let start = Instant::now();
        let mut state = NutritionState::new();
        state.show_result(result(), start, POPUP_FADE_IN);

        assert!(state.popup.visible);
        assert!(state.popup.is_interactive());
        assert_eq!(state.popup.opacity_at(start), 0.0);
        assert_eq!(state.popup.opacity_at(start + POPUP_FADE_IN), 1.0);
    }

    #[test]
    fn test_popup_stays_visible_until_fade_out_completes() {
        let start = Instant::now();
        let mut popup = PopupState::hidden(start);
        popup.open(start, POPUP_FADE_IN);

        let close_at = start + POPUP_FADE_IN;
        popup.close(close_at, POPUP_FADE_OUT);
        assert!(popup.visible);
        assert!(!popup.is_interactive());

        popup.tick(close_at + Duration::from_millis(150));
        assert!(popup.visible);
        assert!(popup.opacity_at(close_at + Duration::from_millis(150)) > 0.0);

        popup.tick(close_at + POPUP_FADE_OUT);
        assert!(!popup.visible);
        assert!(!popup.closing);
    }

    #[test]
    fn test_close_when_hidden_is_noop() {
        let now = Instant::now();
        let mut popup = PopupState::hidden(now);
        popup.close(now, POPUP_FADE_OUT);
        assert!(!popup.closing);
        assert!(!popup.visible);
    }

    #[test]
    fn test_reopen_resets_scroll() {
        let now = Instant::now();
        let mut popup = PopupState::hidden(now);
        popup.open(now, POPUP_FADE_IN);
        popup.scroll_down();
        popup.scroll_down();
        popup.scroll_up();
        assert_eq!(popup.scroll, 1);

        popup.open(now, POPUP_FADE_IN);
        assert_eq!(popup.scroll, 0);
    }
}
