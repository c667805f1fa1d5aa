//! Raw OpenWeatherMap payload types.
//!
//! These mirror the JSON shapes of the three endpoints the app consumes:
//! `/weather` (current conditions), `/forecast` (3-hourly list) and
//! `/forecast/daily`. Fields the provider sometimes omits are defaulted so
//! that response-shape drift in optional data does not fail the whole fetch;
//! required fields missing surface as a malformed-payload error.

use serde::{Deserialize, Serialize};

/// One entry of the `weather` array (condition group, text, icon code).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherDesc {
    pub main: String,
    pub description: String,
    pub icon: String,
}

/// The `main` block shared by current and 3-hourly entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainData {
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u8,
    #[serde(default)]
    pub sea_level: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
    #[serde(default)]
    pub deg: f64,
}

/// Accumulated rain volume; the provider omits the block entirely when dry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rain {
    #[serde(rename = "1h", default)]
    pub one_hour: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sys {
    pub sunrise: i64,
    pub sunset: i64,
}

/// Response of `/weather`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentResponse {
    pub name: String,
    pub dt: i64,
    /// Shift from UTC in seconds for the queried city.
    #[serde(default)]
    pub timezone: i32,
    pub main: MainData,
    pub wind: Wind,
    pub weather: Vec<WeatherDesc>,
    #[serde(default)]
    pub rain: Option<Rain>,
    pub sys: Sys,
}

impl CurrentResponse {
    /// Rain volume over the last hour, 0 when the provider reports none.
    pub fn rain_1h(&self) -> f64 {
        self.rain
            .as_ref()
            .and_then(|r| r.one_hour)
            .unwrap_or(0.0)
    }
}

/// One 3-hourly bucket of `/forecast`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub dt: i64,
    pub main: MainData,
    pub weather: Vec<WeatherDesc>,
    pub wind: Wind,
    /// Precipitation probability in `[0, 1]`.
    #[serde(default)]
    pub pop: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastCity {
    pub name: String,
    #[serde(default)]
    pub timezone: i32,
}

/// Response of `/forecast`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
    pub city: ForecastCity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyTemp {
    pub day: f64,
    pub min: f64,
    pub max: f64,
}

/// One day of `/forecast/daily`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyEntry {
    pub dt: i64,
    pub temp: DailyTemp,
    pub weather: Vec<WeatherDesc>,
    #[serde(default)]
    pub pop: f64,
    /// Wind speed; the daily endpoint names it `speed` rather than `wind.speed`.
    #[serde(default)]
    pub speed: f64,
}

/// Response of `/forecast/daily`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecastResponse {
    pub list: Vec<DailyEntry>,
    pub city: ForecastCity,
}

/// URL of the provider-hosted condition icon.
pub fn icon_url(icon: &str) -> String {
    format!("http://openweathermap.org/img/wn/{}@2x.png", icon)
}
