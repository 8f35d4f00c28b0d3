//! Weather API configuration (OpenWeatherMap)

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Weather API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key
    pub api_key: String,

    /// Base URL for current weather and geocoding endpoints
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Base URL for the historical aggregation endpoint
    #[serde(default = "default_history_base_url")]
    pub history_base_url: String,

    /// Upstream request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Cities collected into daily summaries
    #[serde(default = "default_cities")]
    pub cities: Vec<String>,
}

impl WeatherConfig {
    /// Get the upstream request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate weather API configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key.is_empty() {
            return Err(ValidationError::MissingRequired("WEATHER_API_KEY"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidWeatherBaseUrl);
        }
        if !self.history_base_url.starts_with("http://")
            && !self.history_base_url.starts_with("https://")
        {
            return Err(ValidationError::InvalidWeatherBaseUrl);
        }
        if self.cities.is_empty() {
            return Err(ValidationError::EmptyCityList);
        }
        Ok(())
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            history_base_url: default_history_base_url(),
            request_timeout_secs: default_request_timeout(),
            cities: default_cities(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_history_base_url() -> String {
    "https://history.openweathermap.org".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

fn default_cities() -> Vec<String> {
    ["Delhi", "Mumbai", "Chennai", "Bangalore", "Kolkata", "Hyderabad"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_config_defaults() {
        let config = WeatherConfig::default();
        assert_eq!(config.base_url, "https://api.openweathermap.org");
        assert_eq!(config.cities.len(), 6);
        assert_eq!(config.cities[0], "Delhi");
    }

    #[test]
    fn test_validation_missing_api_key() {
        let config = WeatherConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_base_url() {
        let config = WeatherConfig {
            api_key: "abc123".to_string(),
            base_url: "ftp://weather.example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_city_list() {
        let config = WeatherConfig {
            api_key: "abc123".to_string(),
            cities: vec![],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_valid_config() {
        let config = WeatherConfig {
            api_key: "abc123".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
