//! PostgreSQL-backed `JourneyRepository` implementation using Diesel ORM.
//!
//! Rows are re-validated through [`JourneyDraft`] on the way out, so a row
//! edited by hand into an invalid state surfaces as a query error instead of
//! an inconsistent domain value.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{JourneyRepository, JourneyRepositoryError};
use crate::domain::{Journey, JourneyDraft, JourneyFields, JourneyId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{JourneyRow, JourneyUpdate, NewJourneyRow};
use super::pool::{DbPool, PoolError};
use super::schema::journeys;

/// Diesel-backed implementation of the journey repository port.
#[derive(Clone)]
pub struct DieselJourneyRepository {
    pool: DbPool,
}

impl DieselJourneyRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> JourneyRepositoryError {
    map_basic_pool_error(error, JourneyRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> JourneyRepositoryError {
    map_basic_diesel_error(
        error,
        JourneyRepositoryError::query,
        JourneyRepositoryError::connection,
    )
}

fn row_to_journey(row: JourneyRow) -> Result<Journey, JourneyRepositoryError> {
    let JourneyRow {
        id,
        title,
        location,
        start_date,
        end_date,
        description,
        created_at,
        logged_in_user_name,
    } = row;

    let draft = JourneyDraft::try_from(JourneyFields {
        title,
        location,
        start_date,
        end_date,
        description,
        logged_in_user_name,
    })
    .map_err(|err| JourneyRepositoryError::query(format!("invalid journey row {id}: {err}")))?;
    Ok(Journey::new(JourneyId::from_uuid(id), draft, created_at))
}

fn update_row(journey: &Journey) -> JourneyUpdate<'_> {
    JourneyUpdate {
        title: journey.title(),
        location: journey.location(),
        start_date: journey.start_date(),
        end_date: journey.end_date(),
        description: journey.description(),
        logged_in_user_name: journey.logged_in_user_name().as_ref(),
    }
}

#[async_trait]
impl JourneyRepository for DieselJourneyRepository {
    async fn insert(&self, journey: &Journey) -> Result<(), JourneyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewJourneyRow {
            id: *journey.id().as_uuid(),
            title: journey.title(),
            location: journey.location(),
            start_date: journey.start_date(),
            end_date: journey.end_date(),
            description: journey.description(),
            created_at: journey.created(),
            logged_in_user_name: journey.logged_in_user_name().as_ref(),
        };

        diesel::insert_into(journeys::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, id: &JourneyId) -> Result<Option<Journey>, JourneyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = journeys::table
            .filter(journeys::id.eq(id.as_uuid()))
            .select(JourneyRow::as_select())
            .first::<JourneyRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_journey).transpose()
    }

    async fn list_by_owner(&self, owner: &str) -> Result<Vec<Journey>, JourneyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<JourneyRow> = journeys::table
            .filter(journeys::logged_in_user_name.eq(owner))
            .order((journeys::created_at.asc(), journeys::id.asc()))
            .select(JourneyRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_journey).collect()
    }

    async fn count_by_owner(&self, owner: &str) -> Result<u64, JourneyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let count: i64 = journeys::table
            .filter(journeys::logged_in_user_name.eq(owner))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        u64::try_from(count).map_err(|_| JourneyRepositoryError::query("negative row count"))
    }

    async fn update(&self, journey: &Journey) -> Result<bool, JourneyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changes = update_row(journey);
        let updated = diesel::update(journeys::table.filter(journeys::id.eq(journey.id().as_uuid())))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(updated > 0)
    }

    async fn delete(&self, id: &JourneyId) -> Result<bool, JourneyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(journeys::table.filter(journeys::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use rstest::{fixture, rstest};
    use uuid::Uuid;

    #[fixture]
    fn row() -> JourneyRow {
        let start = Utc
            .with_ymd_and_hms(2024, 4, 1, 0, 0, 0)
            .single()
            .expect("valid timestamp");
        JourneyRow {
            id: Uuid::nil(),
            title: "Trip".to_owned(),
            location: "Japan".to_owned(),
            start_date: start,
            end_date: start + Duration::days(2),
            description: String::new(),
            created_at: start - Duration::days(1),
            logged_in_user_name: "elenaG".to_owned(),
        }
    }

    #[rstest]
    fn row_converts_to_journey(row: JourneyRow) {
        let created = row.created_at;
        let journey = row_to_journey(row).expect("valid row");
        assert_eq!(journey.id(), &JourneyId::from_uuid(Uuid::nil()));
        assert_eq!(journey.created(), created);
        assert_eq!(journey.logged_in_user_name().as_ref(), "elenaG");
    }

    #[rstest]
    fn update_row_mirrors_journey_content(row: JourneyRow) {
        let journey = row_to_journey(row).expect("valid row");
        let changes = update_row(&journey);
        assert_eq!(changes.title, "Trip");
        assert_eq!(changes.end_date, journey.end_date());
        assert_eq!(changes.logged_in_user_name, "elenaG");
    }

    #[rstest]
    fn invalid_row_is_a_query_error(mut row: JourneyRow) {
        row.title.clear();
        let err = row_to_journey(row).expect_err("empty title");
        assert!(matches!(err, JourneyRepositoryError::Query { .. }));
    }
}
