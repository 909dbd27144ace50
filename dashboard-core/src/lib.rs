//! Core library for the `weather-dashboard` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The WeatherAPI.com forecast client
//! - The typed response model and the derived view-model
//!
//! It is used by `dashboard-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod model;
pub mod view;

pub use client::{ForecastClient, ForecastProvider, FetchError};
pub use config::Config;
pub use model::ForecastResponse;
pub use view::Dashboard;
