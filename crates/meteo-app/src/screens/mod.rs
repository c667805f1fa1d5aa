//! One module per data-bound screen.

pub mod comparison;
pub mod dashboard;
pub mod hourly;
pub mod map;
pub mod precipitation;
pub mod weekly;
pub mod wind;

pub use comparison::{ComparisonChart, ComparisonView};
pub use dashboard::{DailyRange, DashboardScreen, WeatherCardView};
pub use hourly::HourlyScreen;
pub use map::{CityConditions, MapScreen, CITIES};
pub use precipitation::PrecipitationScreen;
pub use weekly::WeeklyScreen;
pub use wind::{ChartPoint, WindChartScreen};
