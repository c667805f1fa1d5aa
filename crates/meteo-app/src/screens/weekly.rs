//! Weekly forecast list (7 daily summaries).

use std::sync::Arc;

use meteo_weather::view::{to_daily_summaries, DailySummary};
use meteo_weather::WeatherClient;

use crate::screen::{fetch_into, ScreenController, ScreenState};

const WEEK_DAYS: u32 = 7;

pub struct WeeklyScreen {
    client: Arc<WeatherClient>,
    controller: ScreenController<Vec<DailySummary>>,
}

impl WeeklyScreen {
    pub fn new(client: Arc<WeatherClient>) -> Self {
        Self {
            client,
            controller: ScreenController::new(),
        }
    }

    pub async fn refresh(&self, city: &str) -> ScreenState<Vec<DailySummary>> {
        let client = Arc::clone(&self.client);
        let city = city.to_string();

        fetch_into(&self.controller, || async move {
            let payload = client.daily_forecast(&city, WEEK_DAYS).await?;
            to_daily_summaries(&payload)
        })
        .await
    }

    pub fn state(&self) -> ScreenState<Vec<DailySummary>> {
        self.controller.state()
    }
}
