//! Key event handlers for each route

use crate::form_state::{FormFocus, FormState};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::navigator::Route;
use crate::nutrition_state::{NutritionFocus, NutritionState};
use crate::state::AppState;

/// Convert key events to messages based on the alert and current route
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit works everywhere, alert included
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if state.alert.is_some() {
        return handle_key_alert(key);
    }

    match state.navigator.current() {
        Route::Home => handle_key_form(&state.form, key),
        Route::DietResult(_) => handle_key_plan(key),
        Route::Nutrition(nutrition) => handle_key_nutrition(nutrition, key),
    }
}

/// Convert key releases to messages
pub fn handle_key_release(state: &AppState, key: InputKey) -> Option<Message> {
    match state.navigator.current() {
        Route::DietResult(_) if state.alert.is_none() && key.is_press() => {
            Some(Message::ReleaseCard)
        }
        _ => None,
    }
}

/// Alerts are modal: only dismissal is accepted
fn handle_key_alert(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ') => Some(Message::DismissAlert),
        _ => None,
    }
}

fn handle_key_form(form: &FormState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('s') => Some(Message::SubmitProfile),
        InputKey::CharCtrl('n') => Some(Message::OpenNutrition),
        InputKey::CharCtrl('u') => Some(Message::FormClearField),

        InputKey::Tab | InputKey::Down => Some(Message::FormFocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::FormFocusPrev),

        InputKey::Enter => match form.focus {
            FormFocus::Field(_) => Some(Message::FormFocusNext),
            FormFocus::GenerateButton => Some(Message::SubmitProfile),
            FormFocus::NutritionButton => Some(Message::OpenNutrition),
        },

        // Root route: Esc leaves the application
        InputKey::Esc => Some(Message::Quit),

        InputKey::Backspace => Some(Message::FormBackspace),
        key => key.printable().map(Message::FormInput),
    }
}

fn handle_key_plan(key: InputKey) -> Option<Message> {
    match key {
        k if k.is_press() => Some(Message::PressCard),
        InputKey::Up | InputKey::Char('k') => Some(Message::PlanSelectPrev),
        InputKey::Down | InputKey::Char('j') => Some(Message::PlanSelectNext),
        InputKey::Home | InputKey::Char('g') => Some(Message::PlanSelectFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::PlanSelectLast),
        InputKey::Esc | InputKey::Backspace | InputKey::Char('q') => Some(Message::NavigateBack),
        _ => None,
    }
}

fn handle_key_nutrition(nutrition: &NutritionState, key: InputKey) -> Option<Message> {
    if nutrition.popup.visible {
        return handle_key_popup(nutrition, key);
    }

    match key {
        InputKey::CharCtrl('s') => Some(Message::AnalyzeNutrition),
        InputKey::CharCtrl('u') => Some(Message::NutritionClear),
        InputKey::Tab | InputKey::BackTab => Some(Message::NutritionToggleFocus),
        InputKey::Esc => Some(Message::NavigateBack),
        key => match nutrition.focus {
            NutritionFocus::Editor => match key {
                InputKey::Enter => Some(Message::NutritionNewline),
                InputKey::Backspace => Some(Message::NutritionBackspace),
                key => key.printable().map(Message::NutritionInput),
            },
            NutritionFocus::AnalyzeButton => match key {
                InputKey::Enter | InputKey::Char(' ') => Some(Message::AnalyzeNutrition),
                InputKey::Backspace => Some(Message::NavigateBack),
                _ => None,
            },
        },
    }
}

fn handle_key_popup(nutrition: &NutritionState, key: InputKey) -> Option<Message> {
    // Ignore input while fading out
    if !nutrition.popup.is_interactive() {
        return None;
    }
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::PopupScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::PopupScrollDown),
        InputKey::Esc | InputKey::Enter | InputKey::Char('q') => Some(Message::ClosePopup),
        _ => None,
    }
}
