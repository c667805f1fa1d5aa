//! Synthetic forecast-series generation.
//!
//! The provider's free tier only covers ~5 days of 3-hourly data, but the
//! charts show a fixed 15-day horizon. The series is fabricated by cycling
//! over a short base sample with reassigned consecutive dates. This is a
//! placeholder data generator, not a forecast model; the scaling constants
//! are display calibration inherited from the mobile app, with no
//! meteorological derivation behind them.

use chrono::{Days, NaiveDate};

use crate::error::WeatherError;
use crate::types::{ForecastEntry, ForecastResponse};

/// Precipitation probability (0-1) scaled to a pseudo-mm value.
pub const PRECIP_MM_SCALE: f64 = 3.2;

/// 3-hour buckets per calendar day in the `/forecast` list.
const DAILY_SAMPLE_STRIDE: usize = 8;

/// Days of real data the base sample may carry.
const MAX_BASE_DAYS: usize = 7;

/// One synthetic chart point.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Pick one entry per day from the 3-hourly list (every 8th, at most 7).
pub fn daily_samples(payload: &ForecastResponse) -> Vec<&ForecastEntry> {
    payload
        .list
        .iter()
        .step_by(DAILY_SAMPLE_STRIDE)
        .take(MAX_BASE_DAYS)
        .collect()
}

/// Expand a short base sample into exactly `horizon` points.
///
/// `value[i] = scale * base[i mod len]`, dated `start + i` days. An empty
/// base sample is rejected rather than producing an empty or crashing
/// series.
pub fn extrapolate(
    base: &[f64],
    horizon: usize,
    scale: f64,
    start: NaiveDate,
) -> Result<Vec<SeriesPoint>, WeatherError> {
    if base.is_empty() {
        return Err(WeatherError::InsufficientData(
            "base sample is empty".to_string(),
        ));
    }

    Ok((0..horizon)
        .map(|i| SeriesPoint {
            date: start + Days::new(i as u64),
            value: scale * base[i % base.len()],
        })
        .collect())
}
