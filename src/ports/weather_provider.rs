//! WeatherProvider port for upstream weather API access.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Errors from the upstream weather API.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// Upstream unreachable, timed out, or answered with a non-success status.
    #[error("network error: {0}")]
    Network(String),

    /// The city (or its coordinates) could not be resolved upstream.
    #[error("city not found: {city}")]
    CityNotFound { city: String },

    /// The upstream payload was malformed or missing expected fields.
    #[error("weather data unavailable: {0}")]
    DataUnavailable(String),
}

impl ProviderError {
    /// Creates a network error from any displayable cause.
    pub fn network(message: impl Into<String>) -> Self {
        ProviderError::Network(message.into())
    }

    /// Creates a city-not-found error.
    pub fn city_not_found(city: impl Into<String>) -> Self {
        ProviderError::CityNotFound { city: city.into() }
    }

    /// Creates a data-unavailable error.
    pub fn data_unavailable(message: impl Into<String>) -> Self {
        ProviderError::DataUnavailable(message.into())
    }
}

/// Current conditions for a city, in Celsius.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentWeather {
    /// Main condition label, e.g. "Clear" or "Rain"
    pub condition: String,
    pub temp: f64,
    pub feels_like: f64,
    /// Observation time reported upstream
    pub observed_at: DateTime<Utc>,
}

/// A latitude/longitude pair resolved from a city name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Aggregated statistics for one calendar day at a location.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalAggregate {
    pub mean_temp: f64,
    pub record_min_temp: f64,
    pub record_max_temp: f64,
    pub mean_pressure: Option<f64>,
    pub mean_humidity: Option<f64>,
    pub mean_wind_speed: Option<f64>,
    pub mean_precipitation: Option<f64>,
    pub mean_cloud_cover: Option<f64>,
}

/// Port for the third-party weather API.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch current conditions for a city by name.
    async fn fetch_current(&self, city: &str) -> Result<CurrentWeather, ProviderError>;

    /// Resolve a city name to coordinates.
    async fn fetch_coordinates(&self, city: &str) -> Result<Coordinates, ProviderError>;

    /// Fetch the aggregated statistics for a calendar day (month 1-12, day 1-31)
    /// at the given coordinates.
    async fn fetch_historical_aggregate(
        &self,
        lat: f64,
        lon: f64,
        month: u32,
        day: u32,
    ) -> Result<HistoricalAggregate, ProviderError>;
}
