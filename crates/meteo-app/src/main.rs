use std::sync::Arc;

use anyhow::Result;
use meteo_app::screens::DashboardScreen;
use meteo_app::{client_options, ScreenState, Shell};
use meteo_core::{Config, ThemeStore};
use meteo_weather::WeatherClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize core
    meteo_core::init()?;

    let (config, _validation) = Config::load_validated()?;
    let theme = ThemeStore::load(&config.config_dir);
    let client = Arc::new(WeatherClient::new(client_options(&config.weather))?);

    let shell = Shell::new(theme);
    tracing::info!(
        "Météo started on \"{}\" (dark mode: {})",
        shell.current().title(),
        shell.theme().is_dark
    );

    let dashboard = DashboardScreen::new(Arc::clone(&client), config.ui.forecast_horizon);
    match dashboard.refresh(&config.ui.default_city).await {
        ScreenState::Ready(view) => {
            tracing::info!(
                "{}: {}°C, {} (min {}°C / max {}°C)",
                view.current.name,
                view.current.temperature,
                view.current.description,
                view.current.min_temp,
                view.current.max_temp
            );
        }
        ScreenState::Error(msg) => tracing::error!("Dashboard fetch failed: {}", msg),
        ScreenState::Loading => {}
    }

    Ok(())
}
