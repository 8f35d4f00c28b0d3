//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `WeatherProvider` - Port for the upstream weather API
//! - `SummaryStore` / `AlertStore` - Ports for the persistence layer
//! - `AlertMailer` - Port for outbound alert emails

mod mailer;
mod storage;
mod weather_provider;

pub use mailer::{AlertMailer, MailError};
pub use storage::{AlertStore, StoreError, SummaryStore};
pub use weather_provider::{
    Coordinates, CurrentWeather, HistoricalAggregate, ProviderError, WeatherProvider,
};
