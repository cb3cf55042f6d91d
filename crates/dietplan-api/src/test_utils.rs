//! In-memory [`DietApi`] for tests
//!
//! Responses are queued per endpoint; every request is recorded so tests can
//! assert on what the application sent.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use dietplan_core::prelude::*;
use dietplan_core::{DailyPlan, FoodLine, NutritionResult, UserProfile};

use crate::client::DietApi;

#[derive(Debug, Default)]
struct StubInner {
    plan_responses: VecDeque<Result<DailyPlan>>,
    nutrition_responses: VecDeque<Result<NutritionResult>>,
    profiles: Vec<UserProfile>,
    food_requests: Vec<Vec<FoodLine>>,
    delay: Option<Duration>,
}

/// Scriptable [`DietApi`] implementation
///
/// Clones share the same queues and request log.
#[derive(Debug, Clone, Default)]
pub struct StubDietApi {
    inner: Arc<Mutex<StubInner>>,
}

impl StubDietApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StubInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Queue a response for the next `diet_plan` call
    pub fn push_plan(&self, response: Result<DailyPlan>) -> &Self {
        self.lock().plan_responses.push_back(response);
        self
    }

    /// Queue a response for the next `analyze_nutrition` call
    pub fn push_nutrition(&self, response: Result<NutritionResult>) -> &Self {
        self.lock().nutrition_responses.push_back(response);
        self
    }

    /// Sleep before answering each request
    pub fn set_delay(&self, delay: Duration) {
        self.lock().delay = Some(delay);
    }

    pub fn profiles(&self) -> Vec<UserProfile> {
        self.lock().profiles.clone()
    }

    pub fn food_requests(&self) -> Vec<Vec<FoodLine>> {
        self.lock().food_requests.clone()
    }

    fn delay(&self) -> Option<Duration> {
        self.lock().delay
    }
}

impl DietApi for StubDietApi {
    async fn diet_plan(&self, profile: &UserProfile) -> Result<DailyPlan> {
        let response = {
            let mut inner = self.lock();
            inner.profiles.push(profile.clone());
            inner.plan_responses.pop_front()
        };
        if let Some(delay) = self.delay() {
            tokio::time::sleep(delay).await;
        }
        response.unwrap_or_else(|| Err(Error::http("no stubbed diet plan response")))
    }

    async fn analyze_nutrition(&self, foods: &[FoodLine]) -> Result<NutritionResult> {
        let response = {
            let mut inner = self.lock();
            inner.food_requests.push(foods.to_vec());
            inner.nutrition_responses.pop_front()
        };
        if let Some(delay) = self.delay() {
            tokio::time::sleep(delay).await;
        }
        response.unwrap_or_else(|| Err(Error::http("no stubbed nutrition response")))
    }
}
