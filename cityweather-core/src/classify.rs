use crate::model::DisplayCategory;

/// Pick the background category for a provider condition description.
///
/// Matching is case-insensitive and checked in a fixed order, so a text that
/// mentions both fog and rain is Foggy.
pub fn classify(condition: &str) -> DisplayCategory {
    let lower = condition.to_lowercase();

    if lower.contains("fog") || lower.contains("mist") {
        DisplayCategory::Foggy
    } else if lower.contains("rain") {
        DisplayCategory::Rainy
    } else if lower.contains("cloud") {
        DisplayCategory::Cloudy
    } else if lower.contains("sun") || lower.contains("clear") {
        DisplayCategory::Sunny
    } else {
        DisplayCategory::Default
    }
}
