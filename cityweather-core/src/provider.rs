use crate::{Config, FetchError, WeatherResult, provider::weatherapi::WeatherClient};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

/// Source of current conditions for a city name.
///
/// Callers pass an already trimmed, non-empty query.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_weather(&self, query: &str) -> Result<WeatherResult, FetchError>;
}

/// Construct the WeatherAPI.com client from config.
pub fn client_from_config(config: &Config) -> anyhow::Result<WeatherClient> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No WeatherAPI.com API key configured.\n\
                 Hint: run `cityweather configure` or set {}.",
            crate::config::API_KEY_ENV
        )
    })?;

    Ok(WeatherClient::new(api_key.to_owned(), config.base_url()))
}
