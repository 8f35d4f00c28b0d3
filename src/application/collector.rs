//! SummaryCollector - stores one aggregated weather row per city per run.

use std::sync::Arc;

use chrono::{Datelike, Utc};
use tracing::{info, warn};

use crate::domain::NewDailySummary;
use crate::ports::{SummaryStore, WeatherProvider};

/// Collects daily weather summaries for a fixed city list.
///
/// Cities are processed sequentially. A failure for one city is logged and
/// skipped; it does not abort the remaining cities. No retry.
pub struct SummaryCollector {
    provider: Arc<dyn WeatherProvider>,
    store: Arc<dyn SummaryStore>,
    cities: Vec<String>,
}

impl SummaryCollector {
    pub fn new(
        provider: Arc<dyn WeatherProvider>,
        store: Arc<dyn SummaryStore>,
        cities: Vec<String>,
    ) -> Self {
        Self {
            provider,
            store,
            cities,
        }
    }

    /// One collection pass over the city list. Returns the number of rows
    /// inserted.
    pub async fn run_once(&self) -> usize {
        let today = Utc::now().date_naive();

        let mut inserted = 0;

        for city in &self.cities {
            match self.collect_city(city, today).await {
                Ok(()) => {
                    info!(city = %city, date = %today, "stored daily summary");
                    inserted += 1;
                }
                Err(reason) => {
                    warn!(city = %city, error = %reason, "skipping city in collection run");
                }
            }
        }

        inserted
    }

    async fn collect_city(
        &self,
        city: &str,
        date: chrono::NaiveDate,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let coords = self.provider.fetch_coordinates(city).await?;

        let aggregate = self
            .provider
            .fetch_historical_aggregate(coords.lat, coords.lon, date.month(), date.day())
            .await?;

        let summary = NewDailySummary {
            city_name: city.to_string(),
            date,
            average_temp: aggregate.mean_temp,
            min_temp: aggregate.record_min_temp,
            max_temp: aggregate.record_max_temp,
            dominant_cloud_cover: aggregate.mean_cloud_cover,
        };

        self.store.insert(&summary).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    use crate::domain::DailyWeatherSummary;
    use crate::ports::{
        Coordinates, CurrentWeather, HistoricalAggregate, ProviderError, StoreError,
    };

    /// Mock provider that fails coordinate resolution for one configured city.
    struct MockProvider {
        failing_city: Option<String>,
    }

    #[async_trait]
    impl WeatherProvider for MockProvider {
        async fn fetch_current(&self, _city: &str) -> Result<CurrentWeather, ProviderError> {
            unimplemented!("collector never fetches current weather")
        }

        async fn fetch_coordinates(&self, city: &str) -> Result<Coordinates, ProviderError> {
            if self.failing_city.as_deref() == Some(city) {
                return Err(ProviderError::city_not_found(city));
            }
            Ok(Coordinates { lat: 28.6, lon: 77.2 })
        }

        async fn fetch_historical_aggregate(
            &self,
            _lat: f64,
            _lon: f64,
            _month: u32,
            _day: u32,
        ) -> Result<HistoricalAggregate, ProviderError> {
            Ok(HistoricalAggregate {
                mean_temp: 30.0,
                record_min_temp: 22.0,
                record_max_temp: 39.0,
                mean_pressure: Some(1008.0),
                mean_humidity: Some(55.0),
                mean_wind_speed: Some(3.2),
                mean_precipitation: Some(0.1),
                mean_cloud_cover: Some(18.0),
            })
        }
    }

    struct MockSummaryStore {
        rows: Mutex<Vec<NewDailySummary>>,
    }

    impl MockSummaryStore {
        fn new() -> Self {
            Self {
                rows: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl SummaryStore for MockSummaryStore {
        async fn insert(
            &self,
            summary: &NewDailySummary,
        ) -> Result<DailyWeatherSummary, StoreError> {
            let mut rows = self.rows.lock().unwrap();
            rows.push(summary.clone());
            Ok(DailyWeatherSummary {
                id: rows.len() as i32,
                city_name: summary.city_name.clone(),
                date: summary.date,
                average_temp: summary.average_temp,
                min_temp: summary.min_temp,
                max_temp: summary.max_temp,
                dominant_cloud_cover: summary.dominant_cloud_cover,
                created_at: Utc::now(),
            })
        }

        async fn find_by_city_and_date(
            &self,
            _city: &str,
            _date: NaiveDate,
        ) -> Result<Option<DailyWeatherSummary>, StoreError> {
            Ok(None)
        }

        async fn list_all(&self) -> Result<Vec<DailyWeatherSummary>, StoreError> {
            Ok(Vec::new())
        }

        async fn delete(&self, id: i32) -> Result<(), StoreError> {
            Err(StoreError::SummaryNotFound { id })
        }
    }

    fn cities() -> Vec<String> {
        vec![
            "Delhi".to_string(),
            "Mumbai".to_string(),
            "Chennai".to_string(),
        ]
    }

    #[tokio::test]
    async fn inserts_one_row_per_city() {
        let provider = Arc::new(MockProvider { failing_city: None });
        let store = Arc::new(MockSummaryStore::new());
        let collector = SummaryCollector::new(provider, store.clone(), cities());

        let inserted = collector.run_once().await;

        assert_eq!(inserted, 3);
        let rows = store.rows.lock().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].city_name, "Delhi");
        assert_eq!(rows[0].average_temp, 30.0);
        assert_eq!(rows[0].min_temp, 22.0);
        assert_eq!(rows[0].max_temp, 39.0);
        assert_eq!(rows[0].dominant_cloud_cover, Some(18.0));
    }

    #[tokio::test]
    async fn one_failing_city_does_not_abort_the_rest() {
        let provider = Arc::new(MockProvider {
            failing_city: Some("Mumbai".to_string()),
        });
        let store = Arc::new(MockSummaryStore::new());
        let collector = SummaryCollector::new(provider, store.clone(), cities());

        let inserted = collector.run_once().await;

        assert_eq!(inserted, 2);
        let rows = store.rows.lock().unwrap();
        let stored: Vec<_> = rows.iter().map(|r| r.city_name.as_str()).collect();
        assert_eq!(stored, vec!["Delhi", "Chennai"]);
    }

    #[tokio::test]
    async fn summary_rows_carry_todays_date() {
        let provider = Arc::new(MockProvider { failing_city: None });
        let store = Arc::new(MockSummaryStore::new());
        let collector = SummaryCollector::new(provider, store.clone(), cities());

        collector.run_once().await;

        let rows = store.rows.lock().unwrap();
        let today = Utc::now().date_naive();
        assert!(rows.iter().all(|r| r.date == today));
    }
}
