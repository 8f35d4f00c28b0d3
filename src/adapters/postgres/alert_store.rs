//! PostgreSQL implementation of AlertStore.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::{AlertSubscription, NewAlertSubscription};
use crate::ports::{AlertStore, StoreError};

/// PostgreSQL implementation of AlertStore.
#[derive(Clone)]
pub struct PostgresAlertStore {
    pool: PgPool,
}

impl PostgresAlertStore {
    /// Creates a new PostgresAlertStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlertStore for PostgresAlertStore {
    async fn insert(
        &self,
        subscription: &NewAlertSubscription,
    ) -> Result<AlertSubscription, StoreError> {
        // Duplicate check and insert are separate statements with no unique
        // constraint behind them; racing identical registrations can both
        // land.
        let existing: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM alerts
            WHERE email = $1 AND city = $2 AND temperature_threshold = $3
            "#,
        )
        .bind(&subscription.email)
        .bind(&subscription.city)
        .bind(subscription.temperature_threshold)
        .fetch_one(&self.pool)
        .await?;

        if existing.0 > 0 {
            return Err(StoreError::DuplicateSubscription {
                email: subscription.email.clone(),
                city: subscription.city.clone(),
            });
        }

        let row = sqlx::query(
            r#"
            INSERT INTO alerts (email, city, temperature_threshold)
            VALUES ($1, $2, $3)
            RETURNING id, email, city, temperature_threshold
            "#,
        )
        .bind(&subscription.email)
        .bind(&subscription.city)
        .bind(subscription.temperature_threshold)
        .fetch_one(&self.pool)
        .await?;

        row_to_subscription(row)
    }

    async fn list_all(&self) -> Result<Vec<AlertSubscription>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, email, city, temperature_threshold
            FROM alerts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_subscription).collect()
    }
}

fn row_to_subscription(row: sqlx::postgres::PgRow) -> Result<AlertSubscription, StoreError> {
    Ok(AlertSubscription {
        id: row.try_get("id")?,
        email: row.try_get("email")?,
        city: row.try_get("city")?,
        temperature_threshold: row.try_get("temperature_threshold")?,
    })
}
