//! Journey image service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{ImageRepository, ImageRepositoryError, ImagesCommand, ImagesQuery};
use crate::domain::{Error, Image, ImageDraft, ImageId};

fn map_repository_error(error: ImageRepositoryError) -> Error {
    match error {
        ImageRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("image repository unavailable: {message}"))
        }
        ImageRepositoryError::Query { message } => {
            Error::internal(format!("image repository error: {message}"))
        }
    }
}

/// Image service implementing the image driving ports.
#[derive(Clone)]
pub struct ImageService<R> {
    image_repo: Arc<R>,
}

impl<R> ImageService<R> {
    pub fn new(image_repo: Arc<R>) -> Self {
        Self { image_repo }
    }
}

#[async_trait]
impl<R> ImagesCommand for ImageService<R>
where
    R: ImageRepository,
{
    async fn add(&self, draft: ImageDraft) -> Result<Image, Error> {
        let image = Image::new(ImageId::random(), draft);
        self.image_repo
            .insert(&image)
            .await
            .map_err(map_repository_error)?;
        Ok(image)
    }
}

#[async_trait]
impl<R> ImagesQuery for ImageService<R>
where
    R: ImageRepository,
{
    async fn list_for_journey(&self, journey_id: &str) -> Result<Vec<Image>, Error> {
        self.image_repo
            .list_by_journey(journey_id)
            .await
            .map_err(map_repository_error)
    }
}
