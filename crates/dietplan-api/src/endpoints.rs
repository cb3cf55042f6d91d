//! Backend location and endpoint paths

/// Hosted backend used when no override is configured
pub const DEFAULT_BASE_URL: &str = "https://ai-dietplan-92ld.onrender.com";

/// `POST` a [`dietplan_core::UserProfile`], receive `{ "daily_plan": ... }`
pub const DIET_PLAN_PATH: &str = "/diet-plan";

/// `POST` `{ "foods": [...] }`, receive `{ "meal_nutrition": ... }`
pub const NUTRITION_PATH: &str = "/nutrition";

/// Default whole-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connect timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
