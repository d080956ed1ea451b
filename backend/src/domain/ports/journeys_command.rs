//! Driving port for journey mutations.

use async_trait::async_trait;

use crate::domain::{Error, Journey, JourneyDraft, JourneyId, JourneyPatch};

#[async_trait]
pub trait JourneysCommand: Send + Sync {
    /// Store a new journey, assigning its id and creation timestamp.
    async fn create(&self, draft: JourneyDraft) -> Result<Journey, Error>;

    /// Apply a partial update. Fails with not found when `id` is unknown.
    async fn update(&self, id: &JourneyId, patch: JourneyPatch) -> Result<(), Error>;

    /// Delete a journey. Fails with not found when `id` is unknown.
    async fn delete(&self, id: &JourneyId) -> Result<(), Error>;
}
