//! Fetching current conditions from the remote weather API
//!
//! Defines the `Fetcher` seam the runner calls through, the typed failure
//! taxonomy for one round trip, and the Open-Meteo implementation.

mod client;
mod meteo;

pub use client::Fetcher;
#[cfg(test)]
pub use client::mock;
pub use meteo::OpenMeteoClient;

use thiserror::Error;

/// Errors from a single fetch round trip
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connect, TLS, client timeout)
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with something other than 200
    #[error("unexpected status {0}")]
    Status(u16),

    /// The body was not the JSON shape we expect
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Decode succeeded but the payload carries no usable conditions
    #[error("missing current conditions in response")]
    MissingTimestamp,
}
