//! Daily weather summary entity.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One aggregated weather record for a city on a given date.
///
/// One row is intended per city per day, written by the collector. No
/// uniqueness constraint is enforced at the store level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyWeatherSummary {
    pub id: i32,
    pub city_name: String,
    pub date: NaiveDate,
    pub average_temp: f64,
    pub min_temp: f64,
    pub max_temp: f64,
    pub dominant_cloud_cover: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// A summary row about to be inserted (no id or creation timestamp yet).
#[derive(Debug, Clone, PartialEq)]
pub struct NewDailySummary {
    pub city_name: String,
    pub date: NaiveDate,
    pub average_temp: f64,
    pub min_temp: f64,
    pub max_temp: f64,
    pub dominant_cloud_cover: Option<f64>,
}
