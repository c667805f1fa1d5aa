//! OpenWeatherMap API client.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::instrument;

use crate::error::WeatherError;
use crate::types::{CurrentResponse, DailyForecastResponse, ForecastResponse};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Client construction parameters.
///
/// `base_url` is overridable so tests can point the client at a mock server.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub api_key: String,
    pub base_url: String,
    pub units: String,
    pub lang: String,
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            units: "metric".to_string(),
            lang: "fr".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Error body the provider returns alongside non-success statuses,
/// e.g. `{"cod": "404", "message": "city not found"}`.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    options: ClientOptions,
}

impl WeatherClient {
    pub fn new(options: ClientOptions) -> Result<Self, WeatherError> {
        let client = Client::builder().timeout(options.timeout).build()?;

        Ok(Self { client, options })
    }

    /// Current conditions for a city.
    #[instrument(skip(self), level = "info")]
    pub async fn current(&self, city: &str) -> Result<CurrentResponse, WeatherError> {
        self.get_json("weather", city, &[]).await
    }

    /// 3-hourly forecast list (up to 5 days / 40 entries).
    #[instrument(skip(self), level = "info")]
    pub async fn forecast(&self, city: &str) -> Result<ForecastResponse, WeatherError> {
        self.get_json("forecast", city, &[]).await
    }

    /// Daily forecast list with `cnt` days.
    #[instrument(skip(self), level = "info")]
    pub async fn daily_forecast(
        &self,
        city: &str,
        cnt: u32,
    ) -> Result<DailyForecastResponse, WeatherError> {
        self.get_json("forecast/daily", city, &[("cnt", cnt.to_string())])
            .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        city: &str,
        extra: &[(&str, String)],
    ) -> Result<T, WeatherError> {
        let url = format!("{}/{}", self.options.base_url, path);

        let mut request = self.client.get(&url).query(&[
            ("q", city),
            ("appid", self.options.api_key.as_str()),
            ("units", self.options.units.as_str()),
            ("lang", self.options.lang.as_str()),
        ]);
        for (key, value) in extra {
            request = request.query(&[(key, value.as_str())]);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| status.to_string());
            tracing::warn!("Provider returned {} for {}: {}", status, path, message);
            return Err(WeatherError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| WeatherError::MalformedPayload(e.to_string()))
    }
}
