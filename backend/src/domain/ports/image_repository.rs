//! Port for journey image persistence.

use async_trait::async_trait;

use crate::domain::Image;

use super::define_port_error;

define_port_error! {
    /// Errors raised by image repository adapters.
    pub enum ImageRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "image repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "image repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// Persist a new image record.
    async fn insert(&self, image: &Image) -> Result<(), ImageRepositoryError>;

    /// Images whose `journeyId` equals `journey_id`, oldest first.
    async fn list_by_journey(&self, journey_id: &str) -> Result<Vec<Image>, ImageRepositoryError>;
}
