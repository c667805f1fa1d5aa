//! Headless screen layer for Météo.
//!
//! Owns the navigation shell, the generic data-bound screen controller and
//! one module per feature screen. Screens terminate in cloneable view-model
//! values; rendering is a separate concern.

pub mod screen;
pub mod screens;
pub mod shell;

pub use screen::{fetch_into, RequestToken, ScreenController, ScreenState};
pub use shell::{ScreenId, Shell};

use meteo_core::WeatherConfig;
use meteo_weather::ClientOptions;

/// Build client options from the application config.
pub fn client_options(config: &WeatherConfig) -> ClientOptions {
    ClientOptions {
        api_key: config.api_key.clone(),
        base_url: config.base_url.clone(),
        units: config.units.clone(),
        lang: config.lang.clone(),
        timeout: std::time::Duration::from_secs(config.timeout_secs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_options_follow_the_config() {
        let config = WeatherConfig::default();
        let options = client_options(&config);
        assert_eq!(options.api_key, config.api_key);
        assert_eq!(options.units, "metric");
        assert_eq!(options.timeout, std::time::Duration::from_secs(10));
    }
}
