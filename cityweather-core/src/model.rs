use serde::{Deserialize, Serialize};

/// Current conditions for one location, as reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub location_name: String,
    pub location_country: String,
    pub temperature_c: f64,
    pub condition: String,
    pub humidity_pct: u8,
    pub wind_kph: f64,
}

/// Background bucket selected from the condition text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayCategory {
    Foggy,
    Rainy,
    Cloudy,
    Sunny,
    #[default]
    Default,
}

impl DisplayCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayCategory::Foggy => "foggy",
            DisplayCategory::Rainy => "rainy",
            DisplayCategory::Cloudy => "cloudy",
            DisplayCategory::Sunny => "sunny",
            DisplayCategory::Default => "default",
        }
    }

    /// File name of the background image for this category.
    pub fn image_asset(&self) -> &'static str {
        match self {
            DisplayCategory::Foggy => "foggy.png",
            DisplayCategory::Rainy => "rainy.png",
            DisplayCategory::Cloudy => "cloudy.png",
            DisplayCategory::Sunny => "sunny.png",
            DisplayCategory::Default => "default.png",
        }
    }

    pub const fn all() -> &'static [DisplayCategory] {
        &[
            DisplayCategory::Foggy,
            DisplayCategory::Rainy,
            DisplayCategory::Cloudy,
            DisplayCategory::Sunny,
            DisplayCategory::Default,
        ]
    }
}

impl std::fmt::Display for DisplayCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
