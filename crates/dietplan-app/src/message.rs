//! Message types for the application (TEA pattern)

use dietplan_core::{DailyPlan, NutritionResult};

use crate::input_key::InputKey;
use crate::state::RequestId;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Key release, only reported by terminals with enhanced keyboard support
    KeyReleased(InputKey),

    /// Tick event for animations
    Tick,

    /// Quit immediately (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Open the nutrition analyzer
    OpenNutrition,

    /// Pop the current route
    NavigateBack,

    /// Close the alert dialog
    DismissAlert,

    // ─────────────────────────────────────────────────────────
    // Profile Form
    // ─────────────────────────────────────────────────────────
    FormFocusNext,
    FormFocusPrev,
    FormInput(char),
    FormBackspace,
    FormClearField,

    /// Build the profile payload and request a plan
    SubmitProfile,

    DietPlanReceived {
        request_id: RequestId,
        plan: DailyPlan,
    },

    DietPlanFailed {
        request_id: RequestId,
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // Plan View
    // ─────────────────────────────────────────────────────────
    PlanSelectNext,
    PlanSelectPrev,
    PlanSelectFirst,
    PlanSelectLast,
    PressCard,
    ReleaseCard,

    // ─────────────────────────────────────────────────────────
    // Nutrition
    // ─────────────────────────────────────────────────────────
    NutritionToggleFocus,
    NutritionInput(char),
    NutritionNewline,
    NutritionBackspace,
    NutritionClear,

    /// Parse the editor text and request an analysis
    AnalyzeNutrition,

    NutritionReceived {
        request_id: RequestId,
        result: NutritionResult,
    },

    NutritionFailed {
        request_id: RequestId,
        error: String,
    },

    PopupScrollUp,
    PopupScrollDown,
    ClosePopup,
}
