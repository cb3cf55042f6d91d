//! Request and response types exchanged with the diet-plan backend

use serde::{Deserialize, Serialize};

use crate::ordered_map::OrderedMap;

// ─────────────────────────────────────────────────────────────────
// Diet plan
// ─────────────────────────────────────────────────────────────────

/// Payload for `POST /diet-plan`
///
/// Built fresh from the form on every submit. Numeric fields that failed to
/// parse are kept as invalid values (`None` / `NaN`), which serialize as JSON
/// `null`.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub name: String,
    pub age: Option<i64>,
    pub goal: String,
    pub height_cm: f64,
    pub current_weight_kg: f64,
    pub region: String,
    pub cuisine_preference: String,
}

/// Meals for one day of the plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub total_calories: f64,
    pub meals: OrderedMap<MealEntry>,
}

/// One meal of a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    pub items: Vec<String>,
    pub calories: f64,
}

impl MealEntry {
    /// Items as shown to the user
    pub fn items_label(&self) -> String {
        self.items.join(", ")
    }
}

/// Day key → day plan, in the order the backend sent them
pub type DailyPlan = OrderedMap<DayPlan>;

// ─────────────────────────────────────────────────────────────────
// Nutrition
// ─────────────────────────────────────────────────────────────────

/// One `item: quantity` entry of a nutrition request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodLine {
    pub item: String,
    pub quantity: String,
}

impl FoodLine {
    pub fn new(item: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            quantity: quantity.into(),
        }
    }
}

/// Payload for `POST /nutrition`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionRequest<'a> {
    pub foods: &'a [FoodLine],
}

/// Nutrition analysis of a meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionResult {
    pub total_calories: f64,
    pub macros: Macros,
    pub breakdown: Vec<BreakdownItem>,
}

/// Macronutrient totals in grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Per-item row of a nutrition analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownItem {
    pub item: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}
