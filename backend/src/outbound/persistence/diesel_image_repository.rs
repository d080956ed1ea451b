//! PostgreSQL-backed `ImageRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ImageRepository, ImageRepositoryError};
use crate::domain::{Image, ImageDraft, ImageFields, ImageId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ImageRow, NewImageRow};
use super::pool::{DbPool, PoolError};
use super::schema::images;

/// Diesel-backed implementation of the image repository port.
#[derive(Clone)]
pub struct DieselImageRepository {
    pool: DbPool,
}

impl DieselImageRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ImageRepositoryError {
    map_basic_pool_error(error, ImageRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ImageRepositoryError {
    map_basic_diesel_error(
        error,
        ImageRepositoryError::query,
        ImageRepositoryError::connection,
    )
}

fn row_to_image(row: ImageRow) -> Result<Image, ImageRepositoryError> {
    let ImageRow {
        id,
        journey_id,
        img_address,
        username,
        journey_title,
    } = row;
    let draft = ImageDraft::try_from(ImageFields {
        journey_id,
        img_address,
        username,
        journey_title,
    })
    .map_err(|err| ImageRepositoryError::query(format!("invalid image row {id}: {err}")))?;
    Ok(Image::new(ImageId::from_uuid(id), draft))
}

#[async_trait]
impl ImageRepository for DieselImageRepository {
    async fn insert(&self, image: &Image) -> Result<(), ImageRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewImageRow {
            id: *image.id().as_uuid(),
            journey_id: image.journey_id(),
            img_address: image.img_address(),
            username: image.username().as_ref(),
            journey_title: image.journey_title(),
        };

        diesel::insert_into(images::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn list_by_journey(&self, journey_id: &str) -> Result<Vec<Image>, ImageRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ImageRow> = images::table
            .filter(images::journey_id.eq(journey_id))
            .order((images::created_at.asc(), images::id.asc()))
            .select(ImageRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_image).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use uuid::Uuid;

    #[rstest]
    fn row_converts_to_image() {
        let image = row_to_image(ImageRow {
            id: Uuid::nil(),
            journey_id: "abc123".to_owned(),
            img_address: "http://x/y.png".to_owned(),
            username: "elenaG".to_owned(),
            journey_title: "Trip".to_owned(),
        })
        .expect("valid row");
        assert_eq!(image.id(), &ImageId::from_uuid(Uuid::nil()));
        assert_eq!(image.img_address(), "http://x/y.png");
    }

    #[rstest]
    fn connection_failures_map_to_connection_errors() {
        let err = map_pool_error(PoolError::build("no route to host"));
        assert!(matches!(err, ImageRepositoryError::Connection { .. }));
    }
}
