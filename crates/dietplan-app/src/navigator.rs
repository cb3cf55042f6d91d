//! Route stack
//!
//! Each route owns its screen state, so popping a route drops that state.
//! The root [`Route::Home`] is pushed on construction and can never be popped.

use crate::nutrition_state::NutritionState;
use crate::plan_view_state::PlanViewState;

/// A navigable screen with its parameters and transient state
#[derive(Debug, Clone)]
pub enum Route {
    /// Profile form (root)
    Home,
    /// Rendered 7-day plan; the plan travels with the route
    DietResult(PlanViewState),
    /// Free-text nutrition analyzer
    Nutrition(NutritionState),
}

/// Route names without their state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteName {
    Home,
    DietResult,
    Nutrition,
}

impl RouteName {
    /// Screen title
    pub fn title(&self) -> &'static str {
        match self {
            RouteName::Home => "Diet Plan Generator",
            RouteName::DietResult => "7-Day Plan",
            RouteName::Nutrition => "Nutrition Analyzer",
        }
    }
}

impl Route {
    pub fn name(&self) -> RouteName {
        match self {
            Route::Home => RouteName::Home,
            Route::DietResult(_) => RouteName::DietResult,
            Route::Nutrition(_) => RouteName::Nutrition,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Home],
        }
    }

    pub fn current(&self) -> &Route {
        // The root is never popped
        &self.stack[self.stack.len() - 1]
    }

    pub fn current_mut(&mut self) -> &mut Route {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    pub fn push(&mut self, route: Route) {
        tracing::debug!("Navigate to {:?}", route.name());
        self.stack.push(route);
    }

    /// Pop the current route. Returns `false` on the root.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        if let Some(route) = self.stack.pop() {
            tracing::debug!("Leave {:?}", route.name());
        }
        true
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_at_root(&self) -> bool {
        self.stack.len() == 1
    }

    /// The plan view, when it is the current route
    pub fn plan_view_mut(&mut self) -> Option<&mut PlanViewState> {
        match self.current_mut() {
            Route::DietResult(view) => Some(view),
            _ => None,
        }
    }

    /// The nutrition screen, when it is the current route
    pub fn nutrition(&self) -> Option<&NutritionState> {
        match self.current() {
            Route::Nutrition(nutrition) => Some(nutrition),
            _ => None,
        }
    }

    pub fn nutrition_mut(&mut self) -> Option<&mut NutritionState> {
        match self.current_mut() {
            Route::Nutrition(nutrition) => Some(nutrition),
            _ => None,
        }
    }
}
