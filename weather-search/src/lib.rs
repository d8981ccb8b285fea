//! Search-driven fetch pipeline for the weather search app.
//!
//! This crate defines:
//! - The display-row projection of forecast slots (with duplicate removal)
//! - [`SearchController`]: debounces city-name edits, fetches the weekly
//!   forecast through a [`weather_client::WeatherFetch`], and publishes
//!   display rows over a watch channel
//!
//! The presentation layer subscribes to the controller; it lives elsewhere.

pub mod controller;
pub mod row;

pub use controller::{CurrentWeatherRequest, SearchController};
pub use row::{DailyWeatherRow, dedup_rows};
