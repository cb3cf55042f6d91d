//! # dietplan-api - Backend Client
//!
//! Talks to the remote diet-planning service. The backend is an opaque
//! collaborator: this crate only knows its two endpoints, the JSON shapes it
//! accepts, and the single response field consumed from each.
//!
//! ## Public API
//!
//! - [`DietApi`] - Send-able async trait used by the application layer
//! - [`HttpDietApi`] - reqwest implementation of [`DietApi`]
//! - [`ApiConfig`] - Base URL and timeouts
//! - [`endpoints`] - Default base URL and endpoint paths
//!
//! With the `test-helpers` feature, [`test_utils::StubDietApi`] provides an
//! in-memory implementation that records requests.

pub mod client;
pub mod endpoints;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{ApiConfig, DietApi, HttpDietApi, LocalDietApi};
pub use endpoints::{DEFAULT_BASE_URL, DIET_PLAN_PATH, NUTRITION_PATH};
