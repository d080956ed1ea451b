//! Journey domain service.
//!
//! Implements the journey driving ports on top of a [`JourneyRepository`].
//! Creation stamps the journey with the injected clock; updates read the
//! current document, apply the patch and write the whole journey back.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::{
    JourneyRepository, JourneyRepositoryError, JourneysCommand, JourneysQuery,
};
use crate::domain::{Error, Journey, JourneyDraft, JourneyId, JourneyPatch};

fn map_repository_error(error: JourneyRepositoryError) -> Error {
    match error {
        JourneyRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("journey repository unavailable: {message}"))
        }
        JourneyRepositoryError::Query { message } => {
            Error::internal(format!("journey repository error: {message}"))
        }
    }
}

fn not_found(id: &JourneyId) -> Error {
    Error::not_found(format!("journey {id} not found"))
}

/// Journey service implementing command and query driving ports.
#[derive(Clone)]
pub struct JourneyService<R> {
    journey_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> JourneyService<R> {
    pub fn new(journey_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            journey_repo,
            clock,
        }
    }
}

#[async_trait]
impl<R> JourneysCommand for JourneyService<R>
where
    R: JourneyRepository,
{
    async fn create(&self, draft: JourneyDraft) -> Result<Journey, Error> {
        let journey = Journey::new(JourneyId::random(), draft, self.clock.utc());
        self.journey_repo
            .insert(&journey)
            .await
            .map_err(map_repository_error)?;
        Ok(journey)
    }

    async fn update(&self, id: &JourneyId, patch: JourneyPatch) -> Result<(), Error> {
        let current = self
            .journey_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))?;
        if patch.is_empty() {
            return Ok(());
        }

        let updated = current.apply(&patch)?;
        let matched = self
            .journey_repo
            .update(&updated)
            .await
            .map_err(map_repository_error)?;
        if matched { Ok(()) } else { Err(not_found(id)) }
    }

    async fn delete(&self, id: &JourneyId) -> Result<(), Error> {
        let deleted = self
            .journey_repo
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        if deleted { Ok(()) } else { Err(not_found(id)) }
    }
}

#[async_trait]
impl<R> JourneysQuery for JourneyService<R>
where
    R: JourneyRepository,
{
    async fn get(&self, id: &JourneyId) -> Result<Journey, Error> {
        self.journey_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))
    }

    async fn list_for_user(&self, username: &str) -> Result<Vec<Journey>, Error> {
        self.journey_repo
            .list_by_owner(username)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "journey_service_tests.rs"]
mod tests;
