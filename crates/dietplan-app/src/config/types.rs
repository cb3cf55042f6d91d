//! Configuration types for Diet Planner
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `ApiSettings` - Backend location and timeouts
//! - `UiSettings` - Animation and interaction preferences

use std::time::Duration;

use dietplan_api::endpoints::{
    DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS,
};
use dietplan_api::ApiConfig;
use serde::{Deserialize, Serialize};

/// Global settings from config.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Backend base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout; 0 waits indefinitely
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl ApiSettings {
    /// Client configuration for these settings
    pub fn to_api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.clone(),
            timeout: (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs)),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// When false, every tween jumps straight to its end value
    #[serde(default = "default_true")]
    pub animations: bool,

    /// How long a card stays pressed when the terminal reports no key release
    #[serde(default = "default_press_hold_ms")]
    pub press_hold_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            animations: true,
            press_hold_ms: default_press_hold_ms(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

fn default_press_hold_ms() -> u64 {
    150
}

fn default_true() -> bool {
    true
}
