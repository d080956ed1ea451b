//! Port for journey persistence.

use async_trait::async_trait;

use crate::domain::{Journey, JourneyId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by journey repository adapters.
    pub enum JourneyRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "journey repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "journey repository query failed: {message}",
    }
}

/// Port for reading and writing journey documents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JourneyRepository: Send + Sync {
    /// Persist a new journey.
    async fn insert(&self, journey: &Journey) -> Result<(), JourneyRepositoryError>;

    /// Find a journey by id.
    async fn find_by_id(&self, id: &JourneyId) -> Result<Option<Journey>, JourneyRepositoryError>;

    /// Journeys whose `loggedInUserName` equals `owner`, oldest first.
    async fn list_by_owner(&self, owner: &str) -> Result<Vec<Journey>, JourneyRepositoryError>;

    /// Number of journeys owned by `owner`.
    async fn count_by_owner(&self, owner: &str) -> Result<u64, JourneyRepositoryError>;

    /// Replace the stored content of `journey`.
    ///
    /// Returns `false` when no journey with that id exists.
    async fn update(&self, journey: &Journey) -> Result<bool, JourneyRepositoryError>;

    /// Remove a journey. Returns `false` when nothing was deleted.
    async fn delete(&self, id: &JourneyId) -> Result<bool, JourneyRepositoryError>;
}
