//! Driving port for image reads.

use async_trait::async_trait;

use crate::domain::{Error, Image};

#[async_trait]
pub trait ImagesQuery: Send + Sync {
    /// Images recorded against `journey_id`.
    async fn list_for_journey(&self, journey_id: &str) -> Result<Vec<Image>, Error>;
}
