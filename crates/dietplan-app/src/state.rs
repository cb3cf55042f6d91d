//! Application state (Model in TEA pattern)

use std::fmt;
use std::time::Duration;

use crate::config::{Settings, UiSettings};
use crate::form_state::FormState;
use crate::navigator::Navigator;

/// Title shared by every error alert
pub const ALERT_TITLE_ERROR: &str = "Error";

/// Lifecycle of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Identifier of one submitted request
///
/// Ids are allocated from a single counter on [`AppState`], so a later
/// request always has a larger id than an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Status of a screen's backend request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Submitting {
        request_id: RequestId,
    },
    Succeeded,
    Failed {
        message: String,
    },
}

impl RequestStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, RequestStatus::Submitting { .. })
    }

    /// Whether a response for `id` should be applied
    pub fn is_current(&self, id: RequestId) -> bool {
        matches!(self, RequestStatus::Submitting { request_id } if *request_id == id)
    }

    /// Id of the in-flight request, if any
    pub fn in_flight(&self) -> Option<RequestId> {
        match self {
            RequestStatus::Submitting { request_id } => Some(*request_id),
            _ => None,
        }
    }
}

/// A blocking alert with a single dismiss button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertState {
    pub title: String,
    pub message: String,
}

impl AlertState {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ALERT_TITLE_ERROR, message)
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Route stack; the root is always the profile form
    pub navigator: Navigator,

    /// Profile form, owned by the root route for the whole session
    pub form: FormState,

    /// Alert shown above every route, at most one at a time
    pub alert: Option<AlertState>,

    /// Animation and interaction preferences
    pub ui: UiSettings,

    /// Backend base URL, shown in the header
    pub backend_url: String,

    next_request_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }

    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            navigator: Navigator::new(),
            form: FormState::default(),
            alert: None,
            ui: settings.ui.clone(),
            backend_url: settings.api.base_url.clone(),
            next_request_id: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Allocate a fresh request id
    pub fn next_request_id(&mut self) -> RequestId {
        self.next_request_id += 1;
        RequestId(self.next_request_id)
    }

    /// Show an alert, replacing any alert already on screen
    pub fn show_alert(&mut self, alert: AlertState) {
        self.alert = Some(alert);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Animation duration, collapsed to zero when animations are disabled
    pub fn anim(&self, duration: Duration) -> Duration {
        if self.ui.animations {
            duration
        } else {
            Duration::ZERO
        }
    }

    /// How long a card stays pressed without an explicit release
    pub fn press_hold(&self) -> Duration {
        Duration::from_millis(self.ui.press_hold_ms)
    }
}
