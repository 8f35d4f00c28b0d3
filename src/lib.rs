//! Weatherdeck - Weather monitoring backend.
//!
//! Polls OpenWeatherMap for a fixed set of cities, persists daily weather
//! summaries to PostgreSQL, and emails subscribers when a city's current
//! temperature exceeds their stored threshold.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
