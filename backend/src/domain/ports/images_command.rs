//! Driving port for attaching images to journeys.

use async_trait::async_trait;

use crate::domain::{Error, Image, ImageDraft};

#[async_trait]
pub trait ImagesCommand: Send + Sync {
    /// Store an image record and return it with its generated id.
    async fn add(&self, draft: ImageDraft) -> Result<Image, Error>;
}
