//! Weatherdeck entry point.
//!
//! Startup order: configuration, tracing, database pool + schema, adapters,
//! background tasks, HTTP server. Nothing is fatal after startup; the two
//! background loops log their failures and keep running.

use std::error::Error;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use weatherdeck::adapters::http::{api_routes, ApiState};
use weatherdeck::adapters::openweather::{OpenWeatherClient, OpenWeatherConfig};
use weatherdeck::adapters::postgres::{ensure_schema, PostgresAlertStore, PostgresSummaryStore};
use weatherdeck::adapters::smtp::SmtpMailer;
use weatherdeck::application::{AlertEvaluator, PeriodicTask, SummaryCollector};
use weatherdeck::config::AppConfig;
use weatherdeck::ports::{AlertMailer, AlertStore, SummaryStore, WeatherProvider};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    // Database pool, shared by the API handlers and both background loops.
    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    ensure_schema(&pool).await?;

    // Adapters, injected as process-scoped dependencies.
    let provider: Arc<dyn WeatherProvider> = Arc::new(OpenWeatherClient::new(
        OpenWeatherConfig::new(config.weather.api_key.clone())
            .with_base_url(config.weather.base_url.clone())
            .with_history_base_url(config.weather.history_base_url.clone())
            .with_timeout(config.weather.request_timeout()),
    ));
    let summaries: Arc<dyn SummaryStore> = Arc::new(PostgresSummaryStore::new(pool.clone()));
    let alerts: Arc<dyn AlertStore> = Arc::new(PostgresAlertStore::new(pool.clone()));
    let mailer: Arc<dyn AlertMailer> = Arc::new(SmtpMailer::new(&config.smtp)?);

    // Background loops: daily collection and five-minute alert evaluation,
    // both with an immediate first run.
    let collector = Arc::new(SummaryCollector::new(
        provider.clone(),
        summaries.clone(),
        config.weather.cities.clone(),
    ));
    PeriodicTask::new(
        "summary-collection",
        config.scheduler.collection_interval(),
        config.scheduler.overlap_policy,
    )
    .spawn(move || {
        let collector = collector.clone();
        async move {
            collector.run_once().await;
        }
    });

    let evaluator = Arc::new(AlertEvaluator::new(
        provider.clone(),
        alerts.clone(),
        mailer,
    ));
    PeriodicTask::new(
        "alert-evaluation",
        config.scheduler.evaluation_interval(),
        config.scheduler.overlap_policy,
    )
    .spawn(move || {
        let evaluator = evaluator.clone();
        async move {
            evaluator.run_once().await;
        }
    });

    // HTTP server. CORS stays permissive for the companion frontend; there
    // is no authentication.
    let app = api_routes(ApiState::new(provider, summaries, alerts))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(
            std::time::Duration::from_secs(config.server.request_timeout_secs),
        ));

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
