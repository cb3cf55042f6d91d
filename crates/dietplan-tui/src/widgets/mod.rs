//! Custom widgets for the Diet Planner TUI

mod alert_dialog;
mod header;
mod key_hints;
pub mod modal_overlay;
mod nutrition_popup;
mod nutrition_view;
mod plan_cards;
mod profile_form;
pub mod text_fit;

pub use alert_dialog::AlertDialog;
pub use header::{MainHeader, APP_TITLE};
pub use key_hints::{hints_for, Hint, KeyHints};
pub use nutrition_popup::NutritionPopup;
pub use nutrition_view::NutritionView;
pub use plan_cards::PlanCards;
pub use profile_form::ProfileFormView;

use ratatui::text::Span;

use crate::theme::styles;

/// Text cursor drawn after the focused input's content
pub const CURSOR: &str = "▏";

/// Bracketed button label, highlighted when focused
pub fn button(label: &str, focused: bool) -> Span<'static> {
    Span::styled(format!("  {}  ", label), styles::button(focused))
}
