//! HTTP handlers for the REST endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use tracing::error;

use crate::domain::NewAlertSubscription;
use crate::ports::{AlertStore, ProviderError, StoreError, SummaryStore, WeatherProvider};

use super::dto::{CreateAlertRequest, ErrorResponse, LiveWeatherResponse, MessageResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ApiState {
    pub provider: Arc<dyn WeatherProvider>,
    pub summaries: Arc<dyn SummaryStore>,
    pub alerts: Arc<dyn AlertStore>,
}

impl ApiState {
    pub fn new(
        provider: Arc<dyn WeatherProvider>,
        summaries: Arc<dyn SummaryStore>,
        alerts: Arc<dyn AlertStore>,
    ) -> Self {
        Self {
            provider,
            summaries,
            alerts,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/alerts - Register an alert subscription
pub async fn create_alert(
    State(state): State<ApiState>,
    Json(req): Json<CreateAlertRequest>,
) -> Response {
    let subscription = NewAlertSubscription {
        email: req.email,
        city: req.city,
        temperature_threshold: req.temperature_threshold,
    };

    match state.alerts.insert(&subscription).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => store_error_response(e),
    }
}

/// GET /api/weather/:city - Live weather for a city
pub async fn get_live_weather(State(state): State<ApiState>, Path(city): Path<String>) -> Response {
    match state.provider.fetch_current(&city).await {
        Ok(current) => {
            let response: LiveWeatherResponse = current.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => provider_error_response(e),
    }
}

/// GET /api/weather_summary/:city - Today's stored summary for a city
pub async fn get_summary(State(state): State<ApiState>, Path(city): Path<String>) -> Response {
    let today = Utc::now().date_naive();

    match state.summaries.find_by_city_and_date(&city, today).await {
        Ok(Some(summary)) => (StatusCode::OK, Json(summary)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(format!(
                "No summary for {} today",
                city
            ))),
        )
            .into_response(),
        Err(e) => store_error_response(e),
    }
}

/// GET /api/weather - All stored summaries, newest date first
pub async fn list_summaries(State(state): State<ApiState>) -> Response {
    match state.summaries.list_all().await {
        Ok(summaries) => (StatusCode::OK, Json(summaries)).into_response(),
        Err(e) => store_error_response(e),
    }
}

/// DELETE /api/weather/:id - Delete a summary row by id
pub async fn delete_summary(State(state): State<ApiState>, Path(raw_id): Path<String>) -> Response {
    let id: i32 = match raw_id.parse() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid summary id")),
            )
                .into_response()
        }
    };

    match state.summaries.delete(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse::new("Weather record deleted successfully")),
        )
            .into_response(),
        Err(e) => store_error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn store_error_response(error: StoreError) -> Response {
    match error {
        StoreError::DuplicateSubscription { email, city } => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::conflict(format!(
                "Alert already exists for {} in {}",
                email, city
            ))),
        )
            .into_response(),
        StoreError::SummaryNotFound { id } => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(format!(
                "Weather record not found: {}",
                id
            ))),
        )
            .into_response(),
        StoreError::Database(e) => {
            error!(error = %e, "storage failure in request handler");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Storage failure")),
            )
                .into_response()
        }
    }
}

fn provider_error_response(error: ProviderError) -> Response {
    match error {
        ProviderError::CityNotFound { city } => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(format!("City not found: {}", city))),
        )
            .into_response(),
        other => {
            error!(error = %other, "upstream weather failure in request handler");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Failed to fetch weather data")),
            )
                .into_response()
        }
    }
}
