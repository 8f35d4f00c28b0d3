//! OpenWeatherMap client - Implementation of WeatherProvider.
//!
//! Consumes three endpoints as plain GET requests with query parameters:
//! current weather (`/data/2.5/weather`), geocoding (`/geo/1.0/direct`) and
//! the daily aggregation service (`/data/2.5/aggregated/day`, served from a
//! separate history host).
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenWeatherConfig::new(api_key)
//!     .with_base_url("https://api.openweathermap.org")
//!     .with_history_base_url("https://history.openweathermap.org");
//!
//! let client = OpenWeatherClient::new(config);
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

use crate::ports::{
    Coordinates, CurrentWeather, HistoricalAggregate, ProviderError, WeatherProvider,
};

use super::dto::{AggregateResponse, CurrentWeatherResponse, GeocodeEntry};

/// Configuration for the OpenWeatherMap client.
#[derive(Debug, Clone)]
pub struct OpenWeatherConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Base URL for current weather and geocoding (default: https://api.openweathermap.org).
    pub base_url: String,
    /// Base URL for the daily aggregation endpoint (default: https://history.openweathermap.org).
    pub history_base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenWeatherConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://api.openweathermap.org".to_string(),
            history_base_url: "https://history.openweathermap.org".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the base URL for current weather and geocoding.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the base URL for the daily aggregation endpoint.
    pub fn with_history_base_url(mut self, url: impl Into<String>) -> Self {
        self.history_base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for building request URLs).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenWeatherMap implementation of the WeatherProvider port.
pub struct OpenWeatherClient {
    config: OpenWeatherConfig,
    client: Client,
}

impl OpenWeatherClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: OpenWeatherConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn current_weather_url(&self) -> String {
        format!("{}/data/2.5/weather", self.config.base_url)
    }

    fn geocoding_url(&self) -> String {
        format!("{}/geo/1.0/direct", self.config.base_url)
    }

    fn aggregate_url(&self) -> String {
        format!("{}/data/2.5/aggregated/day", self.config.history_base_url)
    }

    async fn get(
        &self,
        url: String,
        query: &[(&str, String)],
    ) -> Result<reqwest::Response, ProviderError> {
        self.client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::network("request timed out")
                } else if e.is_connect() {
                    ProviderError::network(format!("connection failed: {}", e))
                } else {
                    ProviderError::network(e.to_string())
                }
            })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn fetch_current(&self, city: &str) -> Result<CurrentWeather, ProviderError> {
        let query = [
            ("q", city.to_string()),
            ("units", "metric".to_string()),
            ("appid", self.config.api_key().to_string()),
        ];

        let response = self.get(self.current_weather_url(), &query).await?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(ProviderError::city_not_found(city)),
            status if !status.is_success() => {
                return Err(ProviderError::network(format!(
                    "current weather request failed with status {}",
                    status
                )))
            }
            _ => {}
        }

        let payload: CurrentWeatherResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::network(format!("invalid response body: {}", e)))?;

        let condition = payload
            .weather
            .first()
            .map(|w| w.main.clone())
            .unwrap_or_else(|| "Unknown".to_string());

        let observed_at = DateTime::<Utc>::from_timestamp(payload.dt, 0)
            .unwrap_or_else(Utc::now);

        Ok(CurrentWeather {
            condition,
            temp: payload.main.temp,
            feels_like: payload.main.feels_like,
            observed_at,
        })
    }

    async fn fetch_coordinates(&self, city: &str) -> Result<Coordinates, ProviderError> {
        let query = [
            ("q", city.to_string()),
            ("limit", "1".to_string()),
            ("appid", self.config.api_key().to_string()),
        ];

        let response = self.get(self.geocoding_url(), &query).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::network(format!(
                "geocoding request failed with status {}",
                status
            )));
        }

        let matches: Vec<GeocodeEntry> = response
            .json()
            .await
            .map_err(|e| ProviderError::network(format!("invalid response body: {}", e)))?;

        match matches.first() {
            Some(entry) => Ok(Coordinates {
                lat: entry.lat,
                lon: entry.lon,
            }),
            None => Err(ProviderError::city_not_found(city)),
        }
    }

    async fn fetch_historical_aggregate(
        &self,
        lat: f64,
        lon: f64,
        month: u32,
        day: u32,
    ) -> Result<HistoricalAggregate, ProviderError> {
        let query = [
            ("lat", lat.to_string()),
            ("lon", lon.to_string()),
            ("month", month.to_string()),
            ("day", day.to_string()),
            ("appid", self.config.api_key().to_string()),
        ];

        let response = self.get(self.aggregate_url(), &query).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::network(format!(
                "aggregation request failed with status {}",
                status
            )));
        }

        let payload: AggregateResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::data_unavailable(format!("malformed payload: {}", e)))?;

        let temp = payload
            .temp
            .ok_or_else(|| ProviderError::data_unavailable("missing temperature block"))?;

        let (mean, record_min, record_max) = match (temp.mean, temp.record_min, temp.record_max) {
            (Some(mean), Some(min), Some(max)) => (mean, min, max),
            _ => {
                return Err(ProviderError::data_unavailable(
                    "incomplete temperature block",
                ))
            }
        };

        Ok(HistoricalAggregate {
            mean_temp: mean,
            record_min_temp: record_min,
            record_max_temp: record_max,
            mean_pressure: payload.pressure.and_then(|s| s.mean),
            mean_humidity: payload.humidity.and_then(|s| s.mean),
            mean_wind_speed: payload.wind.and_then(|s| s.mean),
            mean_precipitation: payload.precipitation.and_then(|s| s.mean),
            mean_cloud_cover: payload.clouds.and_then(|s| s.mean),
        })
    }
}
