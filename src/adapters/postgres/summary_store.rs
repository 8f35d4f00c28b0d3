//! PostgreSQL implementation of SummaryStore.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Row};

use crate::domain::{DailyWeatherSummary, NewDailySummary};
use crate::ports::{StoreError, SummaryStore};

/// PostgreSQL implementation of SummaryStore.
#[derive(Clone)]
pub struct PostgresSummaryStore {
    pool: PgPool,
}

impl PostgresSummaryStore {
    /// Creates a new PostgresSummaryStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SummaryStore for PostgresSummaryStore {
    async fn insert(&self, summary: &NewDailySummary) -> Result<DailyWeatherSummary, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO daily_weather_summary
                (city_name, date, average_temp, min_temp, max_temp, dominant_cloud_cover)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, city_name, date, average_temp, min_temp, max_temp,
                      dominant_cloud_cover, created_at
            "#,
        )
        .bind(&summary.city_name)
        .bind(summary.date)
        .bind(summary.average_temp)
        .bind(summary.min_temp)
        .bind(summary.max_temp)
        .bind(summary.dominant_cloud_cover)
        .fetch_one(&self.pool)
        .await?;

        row_to_summary(row)
    }

    async fn find_by_city_and_date(
        &self,
        city: &str,
        date: NaiveDate,
    ) -> Result<Option<DailyWeatherSummary>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, city_name, date, average_temp, min_temp, max_temp,
                   dominant_cloud_cover, created_at
            FROM daily_weather_summary
            WHERE city_name = $1 AND date = $2
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(city)
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_summary).transpose()
    }

    async fn list_all(&self) -> Result<Vec<DailyWeatherSummary>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, city_name, date, average_temp, min_temp, max_temp,
                   dominant_cloud_cover, created_at
            FROM daily_weather_summary
            ORDER BY date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_summary).collect()
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM daily_weather_summary WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::SummaryNotFound { id });
        }

        Ok(())
    }
}

fn row_to_summary(row: sqlx::postgres::PgRow) -> Result<DailyWeatherSummary, StoreError> {
    Ok(DailyWeatherSummary {
        id: row.try_get("id")?,
        city_name: row.try_get("city_name")?,
        date: row.try_get("date")?,
        average_temp: row.try_get("average_temp")?,
        min_temp: row.try_get("min_temp")?,
        max_temp: row.try_get("max_temp")?,
        dominant_cloud_cover: row.try_get("dominant_cloud_cover")?,
        created_at: row.try_get("created_at")?,
    })
}
