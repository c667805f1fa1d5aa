//! Weather data access for Météo
//!
//! Fetches OpenWeatherMap responses by city name and reshapes them into
//! display-ready view models: hourly cards, daily summaries, extrapolated
//! chart series, and map-overlay colors.

pub mod client;
pub mod error;
pub mod extrapolate;
pub mod overlay;
pub mod types;
pub mod view;

pub use client::{ClientOptions, WeatherClient};
pub use error::WeatherError;
pub use extrapolate::{extrapolate, SeriesPoint};
pub use overlay::Overlay;
pub use types::*;
