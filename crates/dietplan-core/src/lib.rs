//! # dietplan-core - Core Domain Types
//!
//! Foundation crate for Diet Planner. Provides the request/response domain
//! types, the food-line parser, lenient numeric parsing, error handling and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`UserProfile`] - Payload for the `/diet-plan` endpoint
//! - [`DailyPlan`], [`DayPlan`], [`MealEntry`] - The returned 7-day plan
//! - [`FoodLine`] - One `item: quantity` pair for the `/nutrition` endpoint
//! - [`NutritionResult`], [`Macros`], [`BreakdownItem`] - Nutrition breakdown
//!
//! ### Ordered Maps (`ordered_map`)
//! - [`OrderedMap`] - JSON object that keeps document key order
//!
//! ### Parsing (`numeric`, `food_lines`)
//! - [`parse_int_prefix()`], [`parse_float_prefix()`] - Lenient numeric parsing
//! - [`format_number()`] - Display numbers without a spurious `.0`
//! - [`parse_food_lines()`] - Split free text into [`FoodLine`]s
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use dietplan_core::prelude::*;
//! ```

pub mod error;
pub mod food_lines;
pub mod logging;
pub mod numeric;
pub mod ordered_map;
pub mod types;

/// Prelude for common imports used throughout all Diet Planner crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use food_lines::{parse_food_line, parse_food_lines, DEFAULT_QUANTITY};
pub use numeric::{format_number, parse_float_prefix, parse_int_prefix};
pub use ordered_map::OrderedMap;
pub use types::{
    BreakdownItem, DailyPlan, DayPlan, FoodLine, Macros, MealEntry, NutritionRequest,
    NutritionResult, UserProfile,
};
