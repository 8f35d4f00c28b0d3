//! Startup schema creation.
//!
//! Both tables are created with `IF NOT EXISTS` so repeated startups are
//! harmless. No migration tooling; the schema is small and append-only.

use sqlx::PgPool;
use tracing::info;

use crate::ports::StoreError;

const CREATE_DAILY_WEATHER_SUMMARY: &str = r#"
CREATE TABLE IF NOT EXISTS daily_weather_summary (
    id SERIAL PRIMARY KEY,
    city_name VARCHAR(255) NOT NULL,
    date DATE NOT NULL,
    average_temp DOUBLE PRECISION NOT NULL,
    min_temp DOUBLE PRECISION NOT NULL,
    max_temp DOUBLE PRECISION NOT NULL,
    dominant_cloud_cover DOUBLE PRECISION,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

const CREATE_ALERTS: &str = r#"
CREATE TABLE IF NOT EXISTS alerts (
    id SERIAL PRIMARY KEY,
    email VARCHAR(255) NOT NULL,
    city VARCHAR(100) NOT NULL,
    temperature_threshold DOUBLE PRECISION NOT NULL
)
"#;

/// Create both tables if they are absent.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::query(CREATE_DAILY_WEATHER_SUMMARY).execute(pool).await?;
    info!("table 'daily_weather_summary' is ready");

    sqlx::query(CREATE_ALERTS).execute(pool).await?;
    info!("table 'alerts' is ready");

    Ok(())
}
