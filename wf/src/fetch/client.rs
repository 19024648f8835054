//! Fetcher trait definition

use async_trait::async_trait;

use super::FetchError;
use crate::domain::{City, CurrentConditions};

/// One request/response round trip against the weather service
///
/// The runner wraps every call in the shared batch deadline and drops the
/// future when it expires, so implementations must be cancel-safe and must
/// carry their own transport timeout rather than blocking indefinitely.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch current conditions for one city
    async fn fetch(&self, city: &City) -> Result<CurrentConditions, FetchError>;
}
