//! Two-city max-temperature comparison chart.
//!
//! This screen never calls the provider: it renders a fixed five-day sample
//! and only swaps the legend to the entered city names.

/// Five days of simulated max temperatures per city.
const SAMPLE_CITY_A: [f64; 5] = [18.0, 20.0, 17.0, 22.0, 19.0];
const SAMPLE_CITY_B: [f64; 5] = [16.0, 19.0, 15.0, 20.0, 18.0];
const SAMPLE_LABELS: [&str; 5] = ["13/03", "14/03", "15/03", "16/03", "17/03"];

/// Chart-ready comparison data.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonView {
    pub labels: Vec<String>,
    pub series_a: Vec<f64>,
    pub series_b: Vec<f64>,
    pub legend: [String; 2],
}

#[derive(Debug, Clone)]
pub struct ComparisonChart {
    city_a: String,
    city_b: String,
}

impl ComparisonChart {
    pub fn new(city_a: impl Into<String>, city_b: impl Into<String>) -> Self {
        Self {
            city_a: city_a.into(),
            city_b: city_b.into(),
        }
    }

    pub fn compare(&self) -> ComparisonView {
        ComparisonView {
            labels: SAMPLE_LABELS.iter().map(|l| l.to_string()).collect(),
            series_a: SAMPLE_CITY_A.to_vec(),
            series_b: SAMPLE_CITY_B.to_vec(),
            legend: [
                format!("{} - Température maximale (°C)", self.city_a),
                format!("{} - Température maximale (°C)", self.city_b),
            ],
        }
    }
}

impl Default for ComparisonChart {
    fn default() -> Self {
        Self::new("Fès", "Rabat")
    }
}
