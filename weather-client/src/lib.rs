//! Client library for the weather search app.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeatherMap HTTP client and its fetch abstraction
//! - Shared domain models (forecast responses) and the error taxonomy
//!
//! It is used by `weather-search`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::{WeatherClient, WeatherFetch};
pub use config::Config;
pub use error::WeatherError;
pub use model::{Condition, CurrentWeatherResponse, ForecastSlot, WeeklyForecastResponse};
