//! Open-Meteo API client

use std::error::Error;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::lookup::LookupError;

pub const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Language place names are resolved in
pub const DEFAULT_LANGUAGE: &str = "pt";

// ============================================================================
// Response shapes
// ============================================================================

/// Geocoding API response. `results` is absent when nothing matched.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub admin1: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Forecast API response, reduced to the current conditions block
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ForecastResponse {
    pub current_weather: CurrentWeather,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub weathercode: i32,
    pub windspeed: f64,
}

// ============================================================================
// Client
// ============================================================================

/// The two remote lookups the app depends on
#[async_trait]
pub trait WeatherApi: Send + Sync {
    async fn geocode(&self, name: &str, language: &str) -> Result<GeocodingResponse, LookupError>;

    async fn current_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastResponse, LookupError>;
}

/// `WeatherApi` backed by the public Open-Meteo endpoints
pub struct OpenMeteoClient {
    client: reqwest::Client,
    geocoding_url: String,
    forecast_url: String,
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new(GEOCODING_URL.to_string(), FORECAST_URL.to_string())
    }
}

impl OpenMeteoClient {
    pub fn new(geocoding_url: String, forecast_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            geocoding_url,
            forecast_url,
        }
    }

    /// Geocoding request for a single best match
    pub fn geocoding_request_url(&self, name: &str, language: &str) -> String {
        format!(
            "{}?name={}&count=1&language={}&format=json",
            self.geocoding_url.trim_end_matches('/'),
            urlencoding::encode(name),
            urlencoding::encode(language),
        )
    }

    pub fn forecast_request_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}?latitude={}&longitude={}&current_weather=true",
            self.forecast_url.trim_end_matches('/'),
            latitude,
            longitude
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, LookupError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Request(error_chain(&e)))?;

        response
            .json::<T>()
            .await
            .map_err(|e| LookupError::Decode(error_chain(&e)))
    }
}

/// Render an error with its sources, e.g. "error decoding response body: missing field `x`".
///
/// reqwest keeps the useful detail (serde or connection cause) in `source()`.
fn error_chain(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[async_trait]
impl WeatherApi for OpenMeteoClient {
    async fn geocode(&self, name: &str, language: &str) -> Result<GeocodingResponse, LookupError> {
        let url = self.geocoding_request_url(name, language);
        tracing::debug!(%url, "geocoding request");
        self.get_json(&url).await
    }

    async fn current_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastResponse, LookupError> {
        let url = self.forecast_request_url(latitude, longitude);
        tracing::debug!(%url, "forecast request");
        self.get_json(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_geocoding_url_escapes_name() {
        let client = OpenMeteoClient::default();
        assert_eq!(
            client.geocoding_request_url("São Paulo", "pt"),
            "https://geocoding-api.open-meteo.com/v1/search?name=S%C3%A3o%20Paulo&count=1&language=pt&format=json"
        );
    }

    #[test]
    fn test_forecast_url_uses_coordinates() {
        let client = OpenMeteoClient::new(
            "http://localhost/geo/".into(),
            "http://localhost/forecast/".into(),
        );
        assert_eq!(
            client.forecast_request_url(-22.9, -42.5),
            "http://localhost/forecast?latitude=-22.9&longitude=-42.5&current_weather=true"
        );
    }

    #[derive(Debug, thiserror::Error)]
    #[error("error decoding response body")]
    struct BodyError(#[source] serde_json::Error);

    #[test]
    fn test_error_chain_keeps_decode_cause() {
        let cause = serde_json::from_str::<ForecastResponse>("{}").unwrap_err();
        let error = BodyError(cause);

        let message = error_chain(&error);

        assert!(
            message.starts_with("error decoding response body: "),
            "message: {message}"
        );
        assert!(message.contains("current_weather"), "message: {message}");
    }

    #[test]
    fn test_error_chain_without_source() {
        let error = std::io::Error::other("offline");
        assert_eq!(error_chain(&error), "offline");
    }

    #[test]
    fn test_geocoding_without_results_decodes() {
        let data: GeocodingResponse = serde_json::from_str(r#"{"generationtime_ms":0.5}"#).unwrap();
        assert_eq!(data.results, None);
    }

    #[test]
    fn test_geocoding_result_missing_region() {
        let data: GeocodingResponse = serde_json::from_str(
            r#"{"results":[{"name":"Vaduz","latitude":47.14,"longitude":9.52,"country":"Liechtenstein"}]}"#,
        )
        .unwrap();
        let first = &data.results.unwrap()[0];
        assert_eq!(first.admin1, None);
        assert_eq!(first.country.as_deref(), Some("Liechtenstein"));
    }

    #[test]
    fn test_forecast_decodes_current_weather() {
        let data: ForecastResponse = serde_json::from_str(
            r#"{"latitude":-22.9,"current_weather":{"temperature":27.0,"weathercode":0,"windspeed":12.0,"time":"2024-01-01T12:00"}}"#,
        )
        .unwrap();
        assert_eq!(
            data.current_weather,
            CurrentWeather {
                temperature: 27.0,
                weathercode: 0,
                windspeed: 12.0,
            }
        );
    }
}
