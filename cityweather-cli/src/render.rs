use cityweather_core::{DisplayCategory, ScreenState};
use serde_json::{Value, json};

/// Human-readable view of the screen: message or result block, then background.
pub fn text(state: &ScreenState, background: DisplayCategory) -> String {
    let mut out = String::new();

    match state {
        ScreenState::Idle => {}
        ScreenState::Error(err) => {
            out.push_str(&format!("{err}\n"));
        }
        ScreenState::Success(w) => {
            out.push_str(&format!("{}, {}\n", w.location_name, w.location_country));
            out.push_str(&format!("{}°C\n", w.temperature_c));
            out.push_str(&format!("{}\n", w.condition));
            out.push_str(&format!("Humidity: {}%\n", w.humidity_pct));
            out.push_str(&format!("Wind: {} km/h\n", w.wind_kph));
        }
    }

    out.push_str(&format!("Background: {}", background.image_asset()));
    out
}

pub fn json(state: &ScreenState, background: DisplayCategory) -> Value {
    let mut body = match state {
        ScreenState::Idle => json!({ "state": "idle" }),
        ScreenState::Error(err) => json!({ "state": "error", "message": err.to_string() }),
        ScreenState::Success(w) => json!({ "state": "success", "weather": w }),
    };

    body["background"] = json!(background.image_asset());
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use cityweather_core::{ScreenError, WeatherResult, classify};

    fn london() -> WeatherResult {
        WeatherResult {
            location_name: "London".into(),
            location_country: "UK".into(),
            temperature_c: 15.0,
            condition: "Patchy rain nearby".into(),
            humidity_pct: 60,
            wind_kph: 10.8,
        }
    }

    #[test]
    fn success_block_lists_every_field() {
        let w = london();
        let category = classify(&w.condition);
        let out = text(&ScreenState::Success(w), category);

        assert_eq!(
            out,
            "London, UK\n15°C\nPatchy rain nearby\nHumidity: 60%\nWind: 10.8 km/h\nBackground: rainy.png"
        );
    }

    #[test]
    fn error_shows_single_message_line() {
        let out = text(&ScreenState::Error(ScreenError::EmptyInput), DisplayCategory::Default);
        assert_eq!(out, "Enter a city\nBackground: default.png");
    }

    #[test]
    fn json_success_carries_weather_and_background() {
        let value = json(&ScreenState::Success(london()), DisplayCategory::Rainy);

        assert_eq!(value["state"], "success");
        assert_eq!(value["weather"]["location_name"], "London");
        assert_eq!(value["weather"]["humidity_pct"], 60);
        assert_eq!(value["background"], "rainy.png");
    }

    #[test]
    fn json_error_carries_message() {
        let value = json(&ScreenState::Error(ScreenError::CityNotFound), DisplayCategory::Default);

        assert_eq!(value["state"], "error");
        assert_eq!(value["message"], "City not found");
    }
}
