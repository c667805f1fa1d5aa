//! Precipitation chart over the extrapolated horizon.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use meteo_weather::extrapolate::{daily_samples, extrapolate, PRECIP_MM_SCALE};
use meteo_weather::WeatherClient;

use crate::screen::{fetch_into, ScreenController, ScreenState};
use crate::screens::wind::ChartPoint;

pub struct PrecipitationScreen {
    client: Arc<WeatherClient>,
    horizon: usize,
    controller: ScreenController<Vec<ChartPoint>>,
}

impl PrecipitationScreen {
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
                .map(|entry| entry.pop)
                .collect();
            let series = extrapolate(&base, horizon, PRECIP_MM_SCALE, start)?;

            Ok(series
                .into_iter()
                .map(|point| ChartPoint {
                    label: point.date.format("%d/%m").to_string(),
                    value: (point.value * 10.0).round() / 10.0,
                })
                .collect())
        })
        .await
    }

    pub fn state(&self) -> ScreenState<Vec<ChartPoint>> {
        self.controller.state()
    }
}
