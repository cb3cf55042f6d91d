//! HTTP client for the diet-plan backend

use std::time::{Duration, Instant};

use dietplan_core::prelude::*;
use dietplan_core::{DailyPlan, FoodLine, NutritionRequest, NutritionResult, UserProfile};
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::endpoints::{
    DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS, DIET_PLAN_PATH,
    NUTRITION_PATH,
};

/// Diet-plan backend operations
///
/// The application layer is generic over this trait so tests can swap the
/// HTTP client for an in-memory stub.
#[trait_variant::make(DietApi: Send)]
pub trait LocalDietApi {
    /// Request a 7-day plan for a profile
    async fn diet_plan(&self, profile: &UserProfile) -> Result<DailyPlan>;

    /// Request a nutrition breakdown for a list of foods
    async fn analyze_nutrition(&self, foods: &[FoodLine]) -> Result<NutritionResult>;
}

/// Connection settings for [`HttpDietApi`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme and host of the backend, optionally with a path prefix
    pub base_url: String,
    /// Whole-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// TCP/TLS connect timeout
    pub connect_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DietPlanResponse {
    daily_plan: DailyPlan,
}

#[derive(Debug, Deserialize)]
struct NutritionResponse {
    meal_nutrition: NutritionResult,
}

/// reqwest-backed [`DietApi`]
///
/// Cheap to clone: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct HttpDietApi {
    client: Client,
    base_url: Url,
}

impl HttpDietApi {
    /// Build a client, validating the base URL up front
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;

        let mut builder = ClientBuilder::new().connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::http(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL of an endpoint, appended to the base URL's path
    pub fn endpoint_url(&self, path: &str) -> Result<Url> {
        let joined = format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path);
        Url::parse(&joined).map_err(|e| Error::invalid_base_url(joined, e.to_string()))
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.endpoint_url(path)?;
        let started = Instant::now();
        debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| transport_error(path, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                "POST {} -> {} in {}ms",
                path,
                status.as_u16(),
                started.elapsed().as_millis()
            );
            return Err(Error::status(status.as_u16(), body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| transport_error(path, e))?;
        info!(
            "POST {} -> {} in {}ms ({} bytes)",
            path,
            status.as_u16(),
            started.elapsed().as_millis(),
            bytes.len()
        );

        serde_json::from_slice(&bytes).map_err(|e| {
            warn!("Undecodable response from {}: {}", path, e);
            Error::decode(e.to_string())
        })
    }
}

impl DietApi for HttpDietApi {
    async fn diet_plan(&self, profile: &UserProfile) -> Result<DailyPlan> {
        let response: DietPlanResponse = self.post_json(DIET_PLAN_PATH, profile).await?;
        Ok(response.daily_plan)
    }

    async fn analyze_nutrition(&self, foods: &[FoodLine]) -> Result<NutritionResult> {
        let request = NutritionRequest { foods };
        let response: NutritionResponse = self.post_json(NUTRITION_PATH, &request).await?;
        Ok(response.meal_nutrition)
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| Error::invalid_base_url(raw, e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::invalid_base_url(
            raw,
            format!("unsupported scheme '{}'", other),
        )),
    }
}

fn transport_error(path: &str, e: reqwest::Error) -> Error {
    if e.is_timeout() {
        warn!("POST {} timed out", path);
        Error::timeout(path)
    } else {
        warn!("POST {} failed: {}", path, e);
        Error::http(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use dietplan_core::{Error, FoodLine, UserProfile};
    use httpmock::prelude::*;
    use serde_json::json;

    // Only the Send variant is imported; the blanket `LocalDietApi` impl
    // would make method calls ambiguous.
    use super::{ApiConfig, DietApi, HttpDietApi};
    use crate::endpoints::{DIET_PLAN_PATH, NUTRITION_PATH};

    fn api_for(server: &MockServer) -> HttpDietApi {
        HttpDietApi::new(&ApiConfig {
            base_url: server.base_url(),
            ..ApiConfig::default()
        })
        .unwrap()
    }

    fn profile() -> UserProfile {
        UserProfile {
            name: String::new(),
            age: Some(30),
            goal: "Weight Loss".to_string(),
            height_cm: 175.0,
            current_weight_kg: 78.0,
            region: "South India".to_string(),
            cuisine_preference: "Vegetarian".to_string(),
        }
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let config = ApiConfig {
            base_url: "not a url".to_string(),
            ..ApiConfig::default()
        };
        let err = HttpDietApi::new(&config).unwrap_err();
        assert!(matches!(err, Error::InvalidBaseUrl { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let config = ApiConfig {
            base_url: "ftp://example.com".to_string(),
            ..ApiConfig::default()
        };
        assert!(HttpDietApi::new(&config).is_err());
    }

    #[test]
    fn test_endpoint_url_appends_to_path_prefix() {
        let api = HttpDietApi::new(&ApiConfig {
            base_url: "https://example.com/api/".to_string(),
            ..ApiConfig::default()
        })
        .unwrap();
        assert_eq!(
            api.endpoint_url(DIET_PLAN_PATH).unwrap().as_str(),
            "https://example.com/api/diet-plan"
        );

        let api = HttpDietApi::new(&ApiConfig::default()).unwrap();
        assert_eq!(
            api.endpoint_url(NUTRITION_PATH).unwrap().as_str(),
            "https://ai-dietplan-92ld.onrender.com/nutrition"
        );
    }

    #[tokio::test]
    async fn test_diet_plan_posts_profile_and_returns_daily_plan() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/diet-plan").json_body(json!({
                    "name": "",
                    "age": 30,
                    "goal": "Weight Loss",
                    "height_cm": 175.0,
                    "current_weight_kg": 78.0,
                    "region": "South India",
                    "cuisine_preference": "Vegetarian"
                }));
                then.status(200).json_body(json!({
                    "daily_plan": {
                        "day_1": {
                            "total_calories": 1800,
                            "meals": {
                                "breakfast": {"items": ["Idli", "Sambar"], "calories": 400}
                            }
                        }
                    },
                    "notes": "ignored"
                }));
            })
            .await;

        let plan = api_for(&server).diet_plan(&profile()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(plan.len(), 1);
        let day = plan.get("day_1").unwrap();
        assert_eq!(day.total_calories, 1800.0);
        assert_eq!(day.meals.get("breakfast").unwrap().items_label(), "Idli, Sambar");
    }

    #[tokio::test]
    async fn test_invalid_age_is_sent_as_null() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/diet-plan")
                    .body_includes(r#""age":null"#);
                then.status(200).json_body(json!({"daily_plan": {}}));
            })
            .await;

        let mut profile = profile();
        profile.age = None;
        let plan = api_for(&server).diet_plan(&profile).await.unwrap();

        mock.assert_async().await;
        assert!(plan.is_empty());
    }

    #[tokio::test]
    async fn test_analyze_nutrition_posts_foods() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/nutrition").json_body(json!({
                    "foods": [
                        {"item": "Chapathi", "quantity": "4 pieces"},
                        {"item": "Potato Kuruma", "quantity": "200 g"}
                    ]
                }));
                then.status(200).json_body(json!({
                    "meal_nutrition": {
                        "total_calories": 620,
                        "macros": {"protein": 18, "carbs": 90, "fat": 20},
                        "breakdown": [
                            {"item": "Chapathi", "calories": 400, "protein": 12, "carbs": 70, "fat": 8},
                            {"item": "Potato Kuruma", "calories": 220, "protein": 6, "carbs": 20, "fat": 12}
                        ]
                    }
                }));
            })
            .await;

        let foods = vec![
            FoodLine::new("Chapathi", "4 pieces"),
            FoodLine::new("Potato Kuruma", "200 g"),
        ];
        let result = api_for(&server).analyze_nutrition(&foods).await.unwrap();

        mock.assert_async().await;
        assert_eq!(result.total_calories, 620.0);
        assert_eq!(result.breakdown.len(), 2);
        assert_eq!(result.breakdown[1].item, "Potato Kuruma");
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/nutrition");
                then.status(500).body("internal error");
            })
            .await;

        let err = api_for(&server)
            .analyze_nutrition(&[FoodLine::new("Egg", "1 unit")])
            .await
            .unwrap_err();

        match err {
            Error::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "internal error");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_response_field_is_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/diet-plan");
                then.status(200).json_body(json!({"plan": {}}));
            })
            .await;

        let err = api_for(&server).diet_plan(&profile()).await.unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[tokio::test]
    async fn test_malformed_json_is_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/diet-plan");
                then.status(200).body("<html>oops</html>");
            })
            .await;

        let err = api_for(&server).diet_plan(&profile()).await.unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[tokio::test]
    async fn test_slow_backend_times_out() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/diet-plan");
                then.status(200)
                    .delay(Duration::from_secs(2))
                    .json_body(json!({"daily_plan": {}}));
            })
            .await;

        let api = HttpDietApi::new(&ApiConfig {
            base_url: server.base_url(),
            timeout: Some(Duration::from_millis(100)),
            ..ApiConfig::default()
        })
        .unwrap();

        let err = api.diet_plan(&profile()).await.unwrap_err();
        assert!(matches!(err, Error::Timeout { .. }), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_http_error() {
        // Port 9 (discard) is not expected to accept HTTP connections
        let api = HttpDietApi::new(&ApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            connect_timeout: Duration::from_millis(500),
            ..ApiConfig::default()
        })
        .unwrap();

        let err = api.diet_plan(&profile()).await.unwrap_err();
        assert!(
            matches!(err, Error::Http { .. } | Error::Timeout { .. }),
            "got {:?}",
            err
        );
    }
}
