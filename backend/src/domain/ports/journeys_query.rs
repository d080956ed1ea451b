//! Driving port for journey reads.

use async_trait::async_trait;

use crate::domain::{Error, Journey, JourneyId};

#[async_trait]
pub trait JourneysQuery: Send + Sync {
    /// Fetch one journey. Fails with not found when `id` is unknown.
    async fn get(&self, id: &JourneyId) -> Result<Journey, Error>;

    /// Journeys logged by `username`.
    async fn list_for_user(&self, username: &str) -> Result<Vec<Journey>, Error>;
}
