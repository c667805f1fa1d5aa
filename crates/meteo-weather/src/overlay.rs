//! Map overlay modes and their marker colors.
//!
//! The map screen draws a circle per city; the fill color is a threshold
//! function of the overlay's scalar (temperature in °C, wind speed in m/s,
//! rain volume in mm). Thresholds and rgba values come straight from the
//! mobile app's map screen.

use std::str::FromStr;

/// Which scalar drives the marker/circle color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Wind,
    Temperature,
    Precipitation,
}

impl Overlay {
    pub const ALL: [Overlay; 3] = [Overlay::Wind, Overlay::Temperature, Overlay::Precipitation];

    /// Button label shown in the overlay selector.
    pub fn label(&self) -> &'static str {
        match self {
            Overlay::Wind => "Vent",
            Overlay::Temperature => "Température",
            Overlay::Precipitation => "Pluie",
        }
    }

    /// Circle outline color.
    pub fn stroke_color(&self) -> &'static str {
        match self {
            Overlay::Wind => "rgba(0, 0, 255, 0.5)",
            Overlay::Temperature => "rgba(255, 0, 0, 0.5)",
            Overlay::Precipitation => "rgba(0, 0, 255, 0.5)",
        }
    }

    /// Circle fill color for a scalar value.
    pub fn fill_color(&self, value: f64) -> &'static str {
        match self {
            Overlay::Temperature => {
                if value < 10.0 {
                    "rgba(0, 0, 255, 0.2)"
                } else if value < 20.0 {
                    "rgba(0, 255, 255, 0.2)"
                } else {
                    "rgba(255, 0, 0, 0.2)"
                }
            }
            Overlay::Precipitation => {
                if value < 1.0 {
                    "rgba(0, 0, 255, 0.1)"
                } else if value < 5.0 {
                    "rgba(0, 0, 255, 0.3)"
                } else {
                    "rgba(0, 0, 255, 0.5)"
                }
            }
            Overlay::Wind => {
                if value < 5.0 {
                    "rgba(0, 255, 0, 0.2)"
                } else if value < 10.0 {
                    "rgba(255, 255, 0, 0.2)"
                } else {
                    "rgba(128, 0, 128, 0.2)"
                }
            }
        }
    }
}

impl FromStr for Overlay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wind" => Ok(Overlay::Wind),
            "temp" | "temperature" => Ok(Overlay::Temperature),
            "precipitation" | "rain" => Ok(Overlay::Precipitation),
            other => Err(format!("unknown overlay: {}", other)),
        }
    }
}
