//! Dashboard weather card: today, tomorrow and the 15-day range chart.

use std::sync::Arc;

use chrono::Locale;
use meteo_weather::view::{
    to_current_conditions, to_daily_summaries, CurrentConditions, DailySummary,
};
use meteo_weather::WeatherClient;

use crate::screen::{fetch_into, ScreenController, ScreenState};

/// One bar of the min/max temperature chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRange {
    /// Short weekday + day of month, e.g. `sam. 15`.
    pub label: String,
    pub min: f64,
    pub max: f64,
}

/// Everything the weather card renders across its three tabs.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherCardView {
    pub current: CurrentConditions,
    pub tomorrow: Option<DailySummary>,
    pub range_chart: Vec<DailyRange>,
}

pub struct DashboardScreen {
    client: Arc<WeatherClient>,
    horizon: usize,
    controller: ScreenController<WeatherCardView>,
}

impl DashboardScreen {
    pub fn new(client: Arc<WeatherClient>, horizon: usize) -> Self {
        Self {
            client,
            horizon,
            controller: ScreenController::new(),
        }
    }

    /// Fetch current conditions and the daily forecast concurrently.
    /// Both legs must succeed; a failure on either fails the card.
    pub async fn refresh(&self, city: &str) -> ScreenState<WeatherCardView> {
        let client = Arc::clone(&self.client);
        let horizon = self.horizon;
        let city = city.to_string();

        fetch_into(&self.controller, || async move {
            let (current, daily) = tokio::try_join!(
                client.current(&city),
                client.daily_forecast(&city, horizon as u32)
            )?;

            let summaries = to_daily_summaries(&daily)?;
            let range_chart = summaries
                .iter()
                .zip(daily.list.iter())
                .map(|(summary, entry)| DailyRange {
                    label: summary
                        .date
                        .format_localized("%a %-d", Locale::fr_FR)
                        .to_string(),
                    min: entry.temp.min,
                    max: entry.temp.max,
                })
                .collect();

            Ok(WeatherCardView {
                current: to_current_conditions(&current)?,
                tomorrow: summaries.get(1).cloned(),
                range_chart,
            })
        })
        .await
    }

    pub fn state(&self) -> ScreenState<WeatherCardView> {
        self.controller.state()
    }
}
