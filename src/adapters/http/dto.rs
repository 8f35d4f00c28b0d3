//! HTTP DTOs for the REST endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::ports::CurrentWeather;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to register an alert subscription.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAlertRequest {
    pub email: String,
    pub city: String,
    pub temperature_threshold: f64,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Live weather for a city, shaped for the frontend.
#[derive(Debug, Clone, Serialize)]
pub struct LiveWeatherResponse {
    /// Main condition label, e.g. "Clear"
    pub main: String,
    pub temp: f64,
    pub feels_like: f64,
    /// Observation time, unix seconds
    pub dt: i64,
}

impl From<CurrentWeather> for LiveWeatherResponse {
    fn from(current: CurrentWeather) -> Self {
        Self {
            main: current.condition,
            temp: current.temp,
            feels_like: current.feels_like,
            dt: current.observed_at.timestamp(),
        }
    }
}

/// Plain confirmation message.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new("DUPLICATE_SUBSCRIPTION", message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}
