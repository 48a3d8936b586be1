use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::{error::FetchError, model::WeatherResult};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Client for the WeatherAPI.com `current.json` endpoint.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherClient {
    pub fn new(api_key: String, base_url: impl Into<String>) -> Self {
        Self { api_key, base_url: base_url.into(), http: Client::new() }
    }

    fn current_url(&self) -> String {
        format!("{}/current.json", self.base_url.trim_end_matches('/'))
    }

    async fn fetch_current(&self, query: &str) -> Result<WeatherResult, FetchError> {
        let url = self.current_url();
        tracing::debug!(%url, q = query, "requesting current weather");

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", query)])
            .send()
            .await
            .map_err(|err| transport("send request to WeatherAPI.com", &err))?;

        // Status is not inspected; the body decides the outcome.
        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|err| transport("read WeatherAPI current response body", &err))?;
        tracing::debug!(%status, bytes = body.len(), "WeatherAPI responded");

        decode_current(&body)
    }
}

#[async_trait]
impl WeatherProvider for WeatherClient {
    async fn fetch_weather(&self, query: &str) -> Result<WeatherResult, FetchError> {
        self.fetch_current(query).await
    }
}

/// Turn a `current.json` body into a result or a classified failure.
pub(crate) fn decode_current(body: &str) -> Result<WeatherResult, FetchError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|err| transport("parse WeatherAPI current JSON", &err))?;

    if let Some(error) = value.get("error").filter(|v| is_truthy(v)) {
        let message = error.get("message").and_then(Value::as_str).unwrap_or("");
        tracing::debug!(provider_message = message, "WeatherAPI reported an error");
        return Err(FetchError::CityNotFound);
    }

    let parsed: WaResponse = serde_json::from_value(value)
        .map_err(|err| transport("decode WeatherAPI current response", &err))?;

    Ok(WeatherResult {
        location_name: parsed.location.name,
        location_country: parsed.location.country,
        temperature_c: parsed.current.temp_c,
        condition: parsed.current.condition.text,
        humidity_pct: parsed.current.humidity,
        wind_kph: parsed.current.wind_kph,
    })
}

/// JSON truthiness: `null`, `false`, `0` and `""` are the only falsy values.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn transport(action: &str, err: &dyn std::error::Error) -> FetchError {
    tracing::warn!(error = %err, "failed to {action}");
    FetchError::TransportFailure
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    humidity: u8,
    wind_kph: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}
