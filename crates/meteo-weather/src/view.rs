//! View-model mappers.
//!
//! Pure functions from raw provider payloads to display-ready records.
//! Mapping is deterministic (same payload, same output) and fails with
//! `MalformedPayload` instead of producing partial records when a payload
//! lacks the expected shape. Time labels are rendered in the queried city's
//! local time using the timezone offset the provider carries, so output does
//! not depend on the machine's timezone.

use chrono::{DateTime, FixedOffset, Locale, NaiveDate, Utc};

use crate::error::WeatherError;
use crate::types::{
    CurrentResponse, DailyForecastResponse, ForecastResponse, WeatherDesc,
};

/// m/s to km/h. The only unit conversion performed in the mapper layer.
pub const MS_TO_KMH: f64 = 3.6;

/// Standard sea-level pressure, used when the provider omits `sea_level`.
const DEFAULT_SEA_LEVEL: f64 = 1013.0;

/// One hourly forecast card.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyPoint {
    pub timestamp: i64,
    /// `%H:%M` in city-local time.
    pub label: String,
    pub temperature: f64,
    /// Lowercased condition group (`clear`, `rain`, ...).
    pub condition: String,
    pub description: String,
    pub icon: String,
    /// Percentage derived from the provider's `pop` probability.
    pub precipitation_chance: u8,
    /// Sea-level pressure scaled down, displayed as a wave height.
    /// Kept from the mobile app; not a real marine measurement.
    pub wave_height: f64,
    /// m/s, copied verbatim.
    pub wind_speed: f64,
    pub wind_direction: f64,
}

/// One day of the weekly list.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub date: NaiveDate,
    /// Locale weekday name (`lundi`, `mardi`, ...).
    pub day: String,
    pub temp: i64,
    pub min_temp: i64,
    pub max_temp: i64,
    pub condition: String,
    pub icon: String,
}

/// Current conditions for the dashboard card.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub name: String,
    pub temperature: f64,
    pub description: String,
    pub icon: String,
    pub max_temp: f64,
    pub min_temp: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub sunrise: String,
    pub sunset: String,
}

/// Map the 3-hourly list to at most `limit` hourly cards, in payload order.
pub fn to_hourly_points(
    payload: &ForecastResponse,
    limit: usize,
) -> Result<Vec<HourlyPoint>, WeatherError> {
    payload
        .list
        .iter()
        .take(limit)
        .map(|entry| {
            let weather = first_weather(&entry.weather)?;
            let local = city_local(entry.dt, payload.city.timezone)?;
            Ok(HourlyPoint {
                timestamp: entry.dt,
                label: local.format("%H:%M").to_string(),
                temperature: entry.main.temp,
                condition: weather.main.to_lowercase(),
                description: weather.description.clone(),
                icon: weather.icon.clone(),
                precipitation_chance: pop_percent(entry.pop),
                wave_height: entry.main.sea_level.unwrap_or(DEFAULT_SEA_LEVEL) / 1000.0,
                wind_speed: entry.wind.speed,
                wind_direction: entry.wind.deg,
            })
        })
        .collect()
}

/// Map the daily list to weekday summaries with rounded temperatures.
pub fn to_daily_summaries(
    payload: &DailyForecastResponse,
) -> Result<Vec<DailySummary>, WeatherError> {
    payload
        .list
        .iter()
        .map(|entry| {
            let weather = first_weather(&entry.weather)?;
            let local = city_local(entry.dt, payload.city.timezone)?;
            let date = local.date_naive();
            Ok(DailySummary {
                date,
                day: date.format_localized("%A", Locale::fr_FR).to_string(),
                temp: entry.temp.day.round() as i64,
                min_temp: entry.temp.min.round() as i64,
                max_temp: entry.temp.max.round() as i64,
                condition: weather.description.clone(),
                icon: weather.icon.clone(),
            })
        })
        .collect()
}

/// Map the current-conditions response for the dashboard card.
pub fn to_current_conditions(
    payload: &CurrentResponse,
) -> Result<CurrentConditions, WeatherError> {
    let weather = first_weather(&payload.weather)?;
    let sunrise = city_local(payload.sys.sunrise, payload.timezone)?;
    let sunset = city_local(payload.sys.sunset, payload.timezone)?;
    Ok(CurrentConditions {
        name: payload.name.clone(),
        temperature: payload.main.temp,
        description: weather.description.clone(),
        icon: weather.icon.clone(),
        max_temp: payload.main.temp_max,
        min_temp: payload.main.temp_min,
        humidity: payload.main.humidity,
        wind_speed: payload.wind.speed,
        wind_direction: payload.wind.deg,
        sunrise: sunrise.format("%H:%M:%S").to_string(),
        sunset: sunset.format("%H:%M:%S").to_string(),
    })
}

/// Wind speed in km/h, rounded the way the charts display it.
pub fn wind_kmh(ms: f64) -> i64 {
    (ms * MS_TO_KMH).round() as i64
}

fn first_weather(list: &[WeatherDesc]) -> Result<&WeatherDesc, WeatherError> {
    list.first()
        .ok_or_else(|| WeatherError::MalformedPayload("weather list is empty".to_string()))
}

fn pop_percent(pop: f64) -> u8 {
    (pop * 100.0).round().clamp(0.0, 100.0) as u8
}

fn city_local(dt: i64, offset_secs: i32) -> Result<DateTime<FixedOffset>, WeatherError> {
    let offset = FixedOffset::east_opt(offset_secs)
        .ok_or_else(|| WeatherError::MalformedPayload("timezone offset out of range".to_string()))?;
    let utc = DateTime::<Utc>::from_timestamp(dt, 0)
        .ok_or_else(|| WeatherError::MalformedPayload("timestamp out of range".to_string()))?;
    Ok(utc.with_timezone(&offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DailyEntry, DailyTemp, ForecastCity, ForecastEntry, MainData, Wind};

    fn desc(main: &str, description: &str, icon: &str) -> WeatherDesc {
        WeatherDesc {
            main: main.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
        }
    }

    fn entry(dt: i64, temp: f64, pop: f64) -> ForecastEntry {
        ForecastEntry {
            dt,
            main: MainData {
                temp,
                temp_min: temp - 2.0,
                temp_max: temp + 2.0,
                humidity: 50,
                sea_level: Some(1015.0),
            },
            weather: vec![desc("Clouds", "nuageux", "03d")],
            wind: Wind { speed: 3.5, deg: 180.0 },
            pop,
        }
    }

    fn forecast(entries: Vec<ForecastEntry>, timezone: i32) -> ForecastResponse {
        ForecastResponse {
            list: entries,
            city: ForecastCity {
                name: "Casablanca".to_string(),
                timezone,
            },
        }
    }

    #[test]
    fn hourly_points_truncate_to_limit_in_order() {
        let payload = forecast(
            (0..10).map(|i| entry(1_700_000_000 + i * 10_800, 20.0 + i as f64, 0.1)).collect(),
            0,
        );
        let points = to_hourly_points(&payload, 4).unwrap();
        assert_eq!(points.len(), 4);
        for (i, p) in points.iter().enumerate() {
            assert_eq!(p.temperature, 20.0 + i as f64);
        }
    }

    #[test]
    fn hourly_points_return_full_list_when_limit_exceeds_len() {
        let payload = forecast(vec![entry(1_700_000_000, 18.0, 0.0)], 0);
        let points = to_hourly_points(&payload, 24).unwrap();
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn hourly_label_uses_city_local_time() {
        // 1700000000 = 2023-11-14 22:13:20 UTC; +1h offset -> 23:13
        let payload = forecast(vec![entry(1_700_000_000, 18.0, 0.0)], 3600);
        let points = to_hourly_points(&payload, 24).unwrap();
        assert_eq!(points[0].label, "23:13");
    }

    #[test]
    fn hourly_pop_becomes_percentage() {
        let payload = forecast(vec![entry(1_700_000_000, 18.0, 0.35)], 0);
        let points = to_hourly_points(&payload, 24).unwrap();
        assert_eq!(points[0].precipitation_chance, 35);
    }

    #[test]
    fn hourly_mapping_is_deterministic() {
        let payload = forecast(
            (0..5).map(|i| entry(1_700_000_000 + i * 10_800, 20.0, 0.2)).collect(),
            3600,
        );
        assert_eq!(
            to_hourly_points(&payload, 24).unwrap(),
            to_hourly_points(&payload, 24).unwrap()
        );
    }

    #[test]
    fn empty_weather_list_is_malformed() {
        let mut bad = entry(1_700_000_000, 18.0, 0.0);
        bad.weather.clear();
        let payload = forecast(vec![bad], 0);
        assert!(matches!(
            to_hourly_points(&payload, 24),
            Err(WeatherError::MalformedPayload(_))
        ));
    }

    fn daily(dt: i64, day: f64, min: f64, max: f64) -> DailyEntry {
        DailyEntry {
            dt,
            temp: DailyTemp { day, min, max },
            weather: vec![desc("Clear", "ciel dégagé", "01d")],
            pop: 0.4,
            speed: 5.0,
        }
    }

    #[test]
    fn daily_summaries_round_and_localize() {
        let payload = DailyForecastResponse {
            // 1700000000 is a Tuesday (mardi) in UTC
            list: vec![daily(1_700_000_000, 19.6, 14.4, 23.5)],
            city: ForecastCity {
                name: "Rabat".to_string(),
                timezone: 0,
            },
        };
        let summaries = to_daily_summaries(&payload).unwrap();
        assert_eq!(summaries[0].temp, 20);
        assert_eq!(summaries[0].min_temp, 14);
        assert_eq!(summaries[0].max_temp, 24);
        assert_eq!(summaries[0].day, "mardi");
    }

    #[test]
    fn daily_summaries_are_idempotent() {
        let payload = DailyForecastResponse {
            list: (0..7).map(|i| daily(1_700_000_000 + i * 86_400, 20.0, 15.0, 25.0)).collect(),
            city: ForecastCity {
                name: "Rabat".to_string(),
                timezone: 0,
            },
        };
        assert_eq!(
            to_daily_summaries(&payload).unwrap(),
            to_daily_summaries(&payload).unwrap()
        );
    }

    #[test]
    fn wind_kmh_rounds() {
        assert_eq!(wind_kmh(5.0), 18);
        assert_eq!(wind_kmh(7.0), 25); // 25.2 rounds down
        assert_eq!(wind_kmh(0.0), 0);
    }
}
