//! Two-stage weather lookup: city name → coordinates → current conditions.

use tracing::{info, warn};

use crate::action::{Action, LookupFailure, LookupSuccess};
use crate::api::WeatherApi;
use crate::state::WeatherReading;

pub const NOT_FOUND_MESSAGE: &str = "City not found! Check the spelling.";
pub const GENERIC_ERROR_MESSAGE: &str = "Oops! Something unexpected happened.";

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    /// Geocoding returned no matches
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,
    /// Transport failure in either stage
    #[error("{0}")]
    Request(String),
    /// Response body did not have the expected shape
    #[error("{0}")]
    Decode(String),
}

impl LookupError {
    /// Text shown in the error banner. Faults without a message of their own
    /// get the generic fallback.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// Resolve `query` to a place and fetch its current conditions.
///
/// The forecast endpoint is only called once geocoding produced a match.
pub async fn lookup_weather<A>(
    api: &A,
    query: &str,
    language: &str,
) -> Result<WeatherReading, LookupError>
where
    A: WeatherApi + ?Sized,
{
    let place = api
        .geocode(query, language)
        .await?
        .results
        .and_then(|results| results.into_iter().next())
        .ok_or(LookupError::NotFound)?;

    let conditions = api
        .current_conditions(place.latitude, place.longitude)
        .await?
        .current_weather;

    Ok(WeatherReading {
        city: place.name,
        region: place.admin1.unwrap_or_default(),
        country: place.country.unwrap_or_default(),
        temperature: conditions.temperature,
        weather_code: conditions.weathercode,
        wind_speed: conditions.windspeed,
    })
}

/// Run a lookup and turn its outcome into the action that settles it.
pub async fn lookup_action<A>(api: &A, generation: u64, query: String, language: &str) -> Action
where
    A: WeatherApi + ?Sized,
{
    info!(generation, %query, "weather lookup started");
    match lookup_weather(api, &query, language).await {
        Ok(reading) => {
            info!(
                generation,
                city = %reading.city,
                code = reading.weather_code,
                "weather lookup succeeded"
            );
            Action::WeatherDidLoad(LookupSuccess {
                generation,
                query,
                reading,
            })
        }
        Err(err) => {
            warn!(generation, %query, error = ?err, "weather lookup failed");
            Action::WeatherDidError(LookupFailure {
                generation,
                message: err.user_message(),
            })
        }
    }
}
