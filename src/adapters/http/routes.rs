//! HTTP routes for the REST endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_alert, delete_summary, get_live_weather, get_summary, list_summaries, ApiState,
};

/// Creates the API router with all endpoints.
///
/// `GET /api/weather/:city` and `DELETE /api/weather/:id` share a path
/// pattern; the parameter is dispatched by method and parsed inside the
/// delete handler.
pub fn api_routes(state: ApiState) -> Router {
    Router::new()
        .route("/api/alerts", post(create_alert))
        .route("/api/weather", get(list_summaries))
        .route(
            "/api/weather/:key",
            get(get_live_weather).delete(delete_summary),
        )
        .route("/api/weather_summary/:city", get(get_summary))
        .with_state(state)
}
