//! Weather map: fixed city markers with overlay-driven colors.

use std::sync::Arc;

use meteo_weather::{Overlay, WeatherClient};
use parking_lot::Mutex;

use crate::screen::{fetch_into, ScreenController, ScreenState};

/// A marker on the map.
#[derive(Debug, Clone, Copy)]
pub struct City {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

/// The cities shown on the map.
pub const CITIES: [City; 3] = [
    City {
        name: "Casablanca",
        latitude: 33.5731,
        longitude: -7.5898,
    },
    City {
        name: "Rabat",
        latitude: 34.0209,
        longitude: -6.8416,
    },
    City {
        name: "Marrakech",
        latitude: 31.6295,
        longitude: -7.9811,
    },
];

/// Per-city scalars the overlays select from.
#[derive(Debug, Clone, PartialEq)]
pub struct CityConditions {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub temperature: f64,
    /// m/s, as the provider reports it.
    pub wind_speed: f64,
    /// Rain volume over the last hour in mm, 0 when dry.
    pub rain_1h: f64,
}

pub struct MapScreen {
    client: Arc<WeatherClient>,
    overlay: Mutex<Overlay>,
    controller: ScreenController<Vec<CityConditions>>,
}

impl MapScreen {
    pub fn new(client: Arc<WeatherClient>) -> Self {
        Self {
            client,
            overlay: Mutex::new(Overlay::Wind),
            controller: ScreenController::new(),
        }
    }

    pub fn overlay(&self) -> Overlay {
        *self.overlay.lock()
    }

    pub fn set_overlay(&self, overlay: Overlay) {
        tracing::debug!("Changing overlay to {:?}", overlay);
        *self.overlay.lock() = overlay;
    }

    /// Fetch current conditions for every city concurrently.
    /// All legs must succeed; one failed city fails the whole screen.
    pub async fn refresh(&self) -> ScreenState<Vec<CityConditions>> {
        let client = Arc::clone(&self.client);

        fetch_into(&self.controller, || async move {
            let fetches = CITIES.iter().map(|city| {
                let client = Arc::clone(&client);
                async move {
                    let resp = client.current(city.name).await?;
                    Ok(CityConditions {
                        name: city.name.to_string(),
                        latitude: city.latitude,
                        longitude: city.longitude,
                        temperature: resp.main.temp,
                        wind_speed: resp.wind.speed,
                        rain_1h: resp.rain_1h(),
                    })
                }
            });
            futures::future::try_join_all(fetches).await
        })
        .await
    }

    /// Fill color for one marker under the active overlay.
    pub fn marker_fill(&self, conditions: &CityConditions) -> &'static str {
        let overlay = self.overlay();
        let value = match overlay {
            Overlay::Wind => conditions.wind_speed,
            Overlay::Temperature => conditions.temperature,
            Overlay::Precipitation => conditions.rain_1h,
        };
        overlay.fill_color(value)
    }

    pub fn state(&self) -> ScreenState<Vec<CityConditions>> {
        self.controller.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conditions(temp: f64, wind: f64, rain: f64) -> CityConditions {
        CityConditions {
            name: "Casablanca".to_string(),
            latitude: 33.5731,
            longitude: -7.5898,
            temperature: temp,
            wind_speed: wind,
            rain_1h: rain,
        }
    }

    #[test]
    fn marker_color_follows_the_active_overlay() {
        let client = WeatherClient::new(meteo_weather::ClientOptions::default()).unwrap();
        let screen = MapScreen::new(Arc::new(client));
        let c = conditions(25.0, 7.0, 0.2);

        // default overlay is wind; 7 m/s is the yellow bucket
        assert_eq!(screen.overlay(), Overlay::Wind);
        assert_eq!(screen.marker_fill(&c), "rgba(255, 255, 0, 0.2)");

        screen.set_overlay(Overlay::Temperature);
        assert_eq!(screen.marker_fill(&c), "rgba(255, 0, 0, 0.2)");

        screen.set_overlay(Overlay::Precipitation);
        assert_eq!(screen.marker_fill(&c), "rgba(0, 0, 255, 0.1)");
    }
}
