//! Response payloads for the OpenWeatherMap endpoints we consume.
//!
//! Only the fields this service reads are modelled; everything else in the
//! upstream payloads is ignored.

use serde::Deserialize;

/// Payload of `GET /data/2.5/weather`.
#[derive(Debug, Deserialize)]
pub struct CurrentWeatherResponse {
    #[serde(default)]
    pub weather: Vec<ConditionEntry>,
    pub main: MainReadings,
    /// Observation time, unix seconds
    pub dt: i64,
}

#[derive(Debug, Deserialize)]
pub struct ConditionEntry {
    /// Condition group, e.g. "Clear", "Rain"
    pub main: String,
}

#[derive(Debug, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
}

/// One entry of the `GET /geo/1.0/direct` array.
#[derive(Debug, Deserialize)]
pub struct GeocodeEntry {
    pub lat: f64,
    pub lon: f64,
}

/// Payload of `GET /data/2.5/aggregated/day`.
///
/// Every block is optional upstream; the client decides which absences are
/// fatal.
#[derive(Debug, Deserialize)]
pub struct AggregateResponse {
    pub temp: Option<AggregateTemp>,
    pub pressure: Option<AggregateStat>,
    pub humidity: Option<AggregateStat>,
    pub wind: Option<AggregateStat>,
    pub precipitation: Option<AggregateStat>,
    pub clouds: Option<AggregateStat>,
}

#[derive(Debug, Deserialize)]
pub struct AggregateTemp {
    pub mean: Option<f64>,
    pub record_min: Option<f64>,
    pub record_max: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct AggregateStat {
    pub mean: Option<f64>,
}
