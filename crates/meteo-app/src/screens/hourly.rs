//! Hourly forecast cards (3-hourly buckets, truncated to a display limit).

use std::sync::Arc;

use meteo_weather::view::{to_hourly_points, HourlyPoint};
use meteo_weather::WeatherClient;

use crate::screen::{fetch_into, ScreenController, ScreenState};

pub struct HourlyScreen {
    client: Arc<WeatherClient>,
    limit: usize,
    controller: ScreenController<Vec<HourlyPoint>>,
}

impl HourlyScreen {
    pub fn new(client: Arc<WeatherClient>, limit: usize) -> Self {
        Self {
            client,
            limit,
            controller: ScreenController::new(),
        }
    }

    pub async fn refresh(&self, city: &str) -> ScreenState<Vec<HourlyPoint>> {
        let client = Arc::clone(&self.client);
        let limit = self.limit;
        let city = city.to_string();

        fetch_into(&self.controller, || async move {
            let payload = client.forecast(&city).await?;
            to_hourly_points(&payload, limit)
        })
        .await
    }

    pub fn state(&self) -> ScreenState<Vec<HourlyPoint>> {
        self.controller.state()
    }
}
