//! HTTP adapter - REST API exposed to the frontend.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateAlertRequest, ErrorResponse, LiveWeatherResponse, MessageResponse};
pub use handlers::ApiState;
pub use routes::api_routes;
