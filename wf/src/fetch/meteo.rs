//! Open-Meteo API client implementation
//!
//! Performs one GET against the forecast endpoint per city and validates
//! that the decoded payload actually carries current conditions.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use super::{FetchError, Fetcher};
use crate::config::{FetchConfig, UnitsConfig};
use crate::domain::{City, CurrentConditions};

/// Fields requested from the current-conditions block
const CURRENT_FIELDS: &str = "temperature_2m,weather_code,wind_speed_10m,wind_direction_10m";

/// Open-Meteo forecast API client
pub struct OpenMeteoClient {
    http: Client,
    base_url: String,
    units: UnitsConfig,
}

/// Top-level response envelope
///
/// The API returns more (latitude echo, timezone, unit labels); only the
/// `current` block matters for the report and the rest is ignored.
#[derive(Debug, Deserialize)]
struct MeteoResponse {
    #[serde(default)]
    current: Option<CurrentConditions>,
}

impl OpenMeteoClient {
    /// Build a client from configuration
    ///
    /// The per-request timeout bounds a stalled transport independently of
    /// the batch deadline.
    pub fn from_config(fetch: &FetchConfig, units: UnitsConfig) -> Result<Self, FetchError> {
        debug!(base_url = %fetch.base_url, timeout_ms = fetch.timeout_ms, "OpenMeteoClient::from_config: called");
        let http = Client::builder()
            .timeout(Duration::from_millis(fetch.timeout_ms))
            .user_agent(fetch.user_agent.clone())
            .build()?;

        Ok(Self {
            http,
            base_url: fetch.base_url.clone(),
            units,
        })
    }

    /// Validate the decoded envelope and extract the conditions block
    fn extract(decoded: MeteoResponse) -> Result<CurrentConditions, FetchError> {
        // An empty timestamp means the payload has no usable conditions
        // even though the decode itself succeeded.
        decoded
            .current
            .filter(|c| !c.time.is_empty())
            .ok_or(FetchError::MissingTimestamp)
    }
}

#[async_trait]
impl Fetcher for OpenMeteoClient {
    async fn fetch(&self, city: &City) -> Result<CurrentConditions, FetchError> {
        debug!(state = %city.state, name = %city.name, "OpenMeteoClient::fetch: called");
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("latitude", city.lat.to_string()),
                ("longitude", city.lon.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("temperature_unit", self.units.temperature.api_value().to_string()),
                ("wind_speed_unit", self.units.wind.api_value().to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!(state = %city.state, %status, "OpenMeteoClient::fetch: unexpected status");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let decoded: MeteoResponse = serde_json::from_str(&body)?;
        let current = Self::extract(decoded)?;

        debug!(state = %city.state, time = %current.time, "OpenMeteoClient::fetch: decoded conditions");
        Ok(current)
    }
}
