//! Weather lookup via Open-Meteo
//!
//! Thin client over the public geocoding and forecast endpoints plus the WMO
//! weather-code table. No API key required.

pub mod client;
pub mod codes;

pub use client::{WeatherClient, WeatherData, WeatherError};
pub use codes::{WeatherInfo, weather_info};
