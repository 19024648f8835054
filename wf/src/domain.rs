//! Core domain types
//!
//! Work items, decoded conditions, and the per-city outcome each task
//! records exactly once.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// One unit of work: a state capital to query
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    /// State name, used as the report sort key
    pub state: String,

    /// Capital name for display
    pub name: String,

    /// Latitude in decimal degrees
    pub lat: f64,

    /// Longitude in decimal degrees
    pub lon: f64,
}

impl City {
    /// Create a new city descriptor
    pub fn new(state: &str, name: &str, lat: f64, lon: f64) -> Self {
        Self {
            state: state.to_string(),
            name: name.to_string(),
            lat,
            lon,
        }
    }
}

/// Decoded current conditions for one city
///
/// Field renames match the wire names on the current-conditions block.
/// Every field defaults so a sparse payload decodes; an empty `time` is
/// rejected later as a missing-timestamp error rather than a decode error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CurrentConditions {
    /// Observation timestamp as reported by the API
    #[serde(default)]
    pub time: String,

    /// Temperature in the requested unit
    #[serde(default, rename = "temperature_2m")]
    pub temperature: f64,

    /// Wind speed in the requested unit
    #[serde(default, rename = "wind_speed_10m")]
    pub wind_speed: f64,

    /// Wind direction in degrees
    #[serde(default, rename = "wind_direction_10m")]
    pub wind_direction: f64,

    /// WMO weather interpretation code
    #[serde(default, rename = "weather_code")]
    pub weather_code: i64,
}

/// Why a city's task produced no conditions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TaskError {
    /// The shared deadline expired before this task got a response
    #[error("timed out")]
    Timeout,

    /// The fetch itself failed (transport, status, decode, or validation)
    #[error("{0}")]
    Execution(String),
}

/// Terminal result for one city
///
/// Exactly one outcome exists per dispatched city; it is created once,
/// when the task finishes or is abandoned at the deadline, and never
/// mutated afterward.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub city: City,
    pub result: Result<CurrentConditions, TaskError>,
}

impl Outcome {
    /// Record a decoded response for a city
    pub fn success(city: City, current: CurrentConditions) -> Self {
        debug!(state = %city.state, "Outcome::success: called");
        Self {
            city,
            result: Ok(current),
        }
    }

    /// Record a typed failure for a city
    pub fn failure(city: City, error: TaskError) -> Self {
        debug!(state = %city.state, %error, "Outcome::failure: called");
        Self {
            city,
            result: Err(error),
        }
    }

    /// Record a deadline expiry for a city
    pub fn timeout(city: City) -> Self {
        Self::failure(city, TaskError::Timeout)
    }
}
