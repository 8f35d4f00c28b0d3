//! Persistence ports for summaries and alert subscriptions.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{AlertSubscription, DailyWeatherSummary, NewAlertSubscription, NewDailySummary};

/// Errors from the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying query failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An identical (email, city, threshold) subscription already exists.
    #[error("subscription already exists for {email} / {city}")]
    DuplicateSubscription { email: String, city: String },

    /// No summary row with the given id.
    #[error("summary not found: {id}")]
    SummaryNotFound { id: i32 },
}

/// Port for daily weather summary persistence.
#[async_trait]
pub trait SummaryStore: Send + Sync {
    /// Insert one summary row, returning the stored row.
    async fn insert(&self, summary: &NewDailySummary) -> Result<DailyWeatherSummary, StoreError>;

    /// The stored summary for a city on a date, if any. When several rows
    /// exist for the pair, the most recently created wins.
    async fn find_by_city_and_date(
        &self,
        city: &str,
        date: NaiveDate,
    ) -> Result<Option<DailyWeatherSummary>, StoreError>;

    /// All stored summaries, newest date first.
    async fn list_all(&self) -> Result<Vec<DailyWeatherSummary>, StoreError>;

    /// Delete a summary row by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::SummaryNotFound`] if no row has that id.
    async fn delete(&self, id: i32) -> Result<(), StoreError>;
}

/// Port for alert subscription persistence.
#[async_trait]
pub trait AlertStore: Send + Sync {
    /// Insert a subscription, returning the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateSubscription`] when an identical
    /// (email, city, threshold) triple is already stored.
    async fn insert(
        &self,
        subscription: &NewAlertSubscription,
    ) -> Result<AlertSubscription, StoreError>;

    /// All stored subscriptions.
    async fn list_all(&self) -> Result<Vec<AlertSubscription>, StoreError>;
}
