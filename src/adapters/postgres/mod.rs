//! PostgreSQL adapter - implements the persistence ports with sqlx.

mod alert_store;
mod schema;
mod summary_store;

pub use alert_store::PostgresAlertStore;
pub use schema::ensure_schema;
pub use summary_store::PostgresSummaryStore;
