//! Wind speed chart over the extrapolated horizon.

use std::sync::Arc;

use chrono::{Local, Locale, NaiveDate};
use meteo_weather::extrapolate::{daily_samples, extrapolate};
use meteo_weather::view::wind_kmh;
use meteo_weather::WeatherClient;

use crate::screen::{fetch_into, ScreenController, ScreenState};

/// One labeled chart value.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

pub struct WindChartScreen {
    client: Arc<WeatherClient>,
    horizon: usize,
    controller: ScreenController<Vec<ChartPoint>>,
}

impl WindChartScreen {
    pub fn new(client: Arc<WeatherClient>, horizon: usize) -> Self {
        Self {
            client,
            horizon,
            controller: ScreenController::new(),
        }
    }

    pub async fn refresh(&self, city: &str) -> ScreenState<Vec<ChartPoint>> {
        self.refresh_from(city, Local::now().date_naive()).await
    }

    /// Same as `refresh` but with an explicit series start date.
    pub async fn refresh_from(&self, city: &str, start: NaiveDate) -> ScreenState<Vec<ChartPoint>> {
        let client = Arc::clone(&self.client);
        let horizon = self.horizon;
        let city = city.to_string();

        fetch_into(&self.controller, || async move {
            let payload = client.forecast(&city).await?;
            let base: Vec<f64> = daily_samples(&payload)
                .iter()
                .map(|entry| entry.wind.speed)
                .collect();
            let series = extrapolate(&base, horizon, 1.0, start)?;

            Ok(series
                .into_iter()
                .map(|point| ChartPoint {
                    label: point
                        .date
                        .format_localized("%d %b", Locale::fr_FR)
                        .to_string(),
                    value: wind_kmh(point.value) as f64,
                })
                .collect())
        })
        .await
    }

    pub fn state(&self) -> ScreenState<Vec<ChartPoint>> {
        self.controller.state()
    }
}
