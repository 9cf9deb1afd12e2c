//! Open-Meteo weather client
//!
//! Two-step lookup: geocode a city name to coordinates, then fetch the
//! current weather for those coordinates. Open-Meteo needs no API key.

use crate::weather::codes::weather_info;
use serde::{Deserialize, Serialize};
use tracing::debug;

const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Current weather for one location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherData {
    pub city: String,
    /// Degrees Celsius, rounded
    pub temperature: i32,
    pub description: String,
    pub icon: String,
    /// Always 0: not available in the free current-weather feed
    pub humidity: u8,
    /// km/h, rounded
    pub wind_speed: i32,
}

/// Error types for weather lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherError {
    /// The city could not be geocoded
    LocationNotFound(String),
    /// The forecast endpoint failed for the given coordinates
    Unavailable,
    /// Transport-level failure
    Network(String),
}

impl std::fmt::Display for WeatherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherError::LocationNotFound(city) => {
                write!(f, "Location not found for {}", city)
            }
            WeatherError::Unavailable => {
                write!(f, "Weather data not available for your location")
            }
            WeatherError::Network(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for WeatherError {}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: CurrentWeather,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    weathercode: u8,
    windspeed: f64,
}

/// HTTP client for the Open-Meteo geocoding and forecast endpoints
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: reqwest::Client,
    geocoding_url: String,
    forecast_url: String,
}

impl WeatherClient {
    pub fn new() -> Result<Self, WeatherError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| WeatherError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            geocoding_url: GEOCODING_URL.to_string(),
            forecast_url: FORECAST_URL.to_string(),
        })
    }

    /// Look up current weather by city name
    pub async fn fetch_by_city(&self, city: &str) -> Result<WeatherData, WeatherError> {
        debug!(city, "geocoding");
        let response = self
            .client
            .get(&self.geocoding_url)
            .query(&[
                ("name", city),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(WeatherError::LocationNotFound(city.to_string()));
        }

        let body: GeocodingResponse = response
            .json()
            .await
            .map_err(|_| WeatherError::LocationNotFound(city.to_string()))?;

        let location = body
            .results
            .and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.remove(0))
                }
            })
            .ok_or_else(|| WeatherError::LocationNotFound(city.to_string()))?;

        self.fetch_by_coordinates(location.latitude, location.longitude, Some(&location.name))
            .await
    }

    /// Look up current weather by coordinates. When no `city_name` is given
    /// the location label is the rounded coordinate pair.
    pub async fn fetch_by_coordinates(
        &self,
        lat: f64,
        lon: f64,
        city_name: Option<&str>,
    ) -> Result<WeatherData, WeatherError> {
        debug!(lat, lon, "fetching current weather");
        let response = self
            .client
            .get(&self.forecast_url)
            .query(&[
                ("latitude", lat.to_string().as_str()),
                ("longitude", lon.to_string().as_str()),
                ("current_weather", "true"),
                ("temperature_unit", "celsius"),
                ("windspeed_unit", "kmh"),
                ("timezone", "auto"),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(WeatherError::Unavailable);
        }

        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|_| WeatherError::Unavailable)?;

        Ok(Self::build_weather_data(
            &body.current_weather,
            lat,
            lon,
            city_name,
        ))
    }

    fn build_weather_data(
        current: &CurrentWeather,
        lat: f64,
        lon: f64,
        city_name: Option<&str>,
    ) -> WeatherData {
        let info = weather_info(current.weathercode);
        let city = city_name
            .map(|name| name.to_string())
            .unwrap_or_else(|| format!("{:.2}, {:.2}", lat, lon));

        WeatherData {
            city,
            temperature: current.temperature.round() as i32,
            description: info.description.to_string(),
            icon: info.icon.to_string(),
            humidity: 0,
            wind_speed: current.windspeed.round() as i32,
        }
    }
}
