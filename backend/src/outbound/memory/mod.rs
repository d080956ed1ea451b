//! In-process document store.
//!
//! Backs every repository port with vectors behind a single [`RwLock`]. Used
//! when no database URL is configured and by the HTTP handler tests. Listings
//! keep insertion order, matching the `created_at` ordering of the Diesel
//! adapters.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    ImageRepository, ImageRepositoryError, JourneyRepository, JourneyRepositoryError,
    UserPersistenceError, UserRepository,
};
use crate::domain::{Image, Journey, JourneyId, User, UserAccount, Username};

#[derive(Debug, Default)]
struct Collections {
    users: Vec<UserAccount>,
    journeys: Vec<Journey>,
    images: Vec<Image>,
}

/// Cheaply cloneable handle to a shared in-memory store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    collections: Arc<RwLock<Collections>>,
}

fn poisoned<T>(_: PoisonError<T>) -> String {
    "in-memory store lock poisoned".to_owned()
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Collections>, String> {
        self.collections.read().map_err(poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Collections>, String> {
        self.collections.write().map_err(poisoned)
    }
}

#[async_trait]
impl UserRepository for InMemoryDocumentStore {
    async fn insert(&self, account: &UserAccount) -> Result<(), UserPersistenceError> {
        let mut collections = self.write().map_err(UserPersistenceError::query)?;
        let username = account.user.username();
        if collections
            .users
            .iter()
            .any(|existing| existing.user.username() == username)
        {
            return Err(UserPersistenceError::duplicate_username(
                username.to_string(),
            ));
        }
        collections.users.push(account.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let collections = self.read().map_err(UserPersistenceError::query)?;
        Ok(collections
            .users
            .iter()
            .map(|account| account.user.clone())
            .collect())
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserAccount>, UserPersistenceError> {
        let collections = self.read().map_err(UserPersistenceError::query)?;
        Ok(collections
            .users
            .iter()
            .find(|account| account.user.username() == username)
            .cloned())
    }
}

#[async_trait]
impl JourneyRepository for InMemoryDocumentStore {
    async fn insert(&self, journey: &Journey) -> Result<(), JourneyRepositoryError> {
        let mut collections = self.write().map_err(JourneyRepositoryError::query)?;
        collections.journeys.push(journey.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &JourneyId) -> Result<Option<Journey>, JourneyRepositoryError> {
        let collections = self.read().map_err(JourneyRepositoryError::query)?;
        Ok(collections
            .journeys
            .iter()
            .find(|journey| journey.id() == id)
            .cloned())
    }

    async fn list_by_owner(&self, owner: &str) -> Result<Vec<Journey>, JourneyRepositoryError> {
        let collections = self.read().map_err(JourneyRepositoryError::query)?;
        Ok(collections
            .journeys
            .iter()
            .filter(|journey| journey.logged_in_user_name().as_ref() == owner)
            .cloned()
            .collect())
    }

    async fn count_by_owner(&self, owner: &str) -> Result<u64, JourneyRepositoryError> {
        let collections = self.read().map_err(JourneyRepositoryError::query)?;
        let count = collections
            .journeys
            .iter()
            .filter(|journey| journey.logged_in_user_name().as_ref() == owner)
            .count();
        Ok(count as u64)
    }

    async fn update(&self, journey: &Journey) -> Result<bool, JourneyRepositoryError> {
        let mut collections = self.write().map_err(JourneyRepositoryError::query)?;
        match collections
            .journeys
            .iter_mut()
            .find(|stored| stored.id() == journey.id())
        {
            Some(stored) => {
                *stored = journey.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &JourneyId) -> Result<bool, JourneyRepositoryError> {
        let mut collections = self.write().map_err(JourneyRepositoryError::query)?;
        let before = collections.journeys.len();
        collections.journeys.retain(|journey| journey.id() != id);
        Ok(collections.journeys.len() != before)
    }
}

#[async_trait]
impl ImageRepository for InMemoryDocumentStore {
    async fn insert(&self, image: &Image) -> Result<(), ImageRepositoryError> {
        let mut collections = self.write().map_err(ImageRepositoryError::query)?;
        collections.images.push(image.clone());
        Ok(())
    }

    async fn list_by_journey(&self, journey_id: &str) -> Result<Vec<Image>, ImageRepositoryError> {
        let collections = self.read().map_err(ImageRepositoryError::query)?;
        Ok(collections
            .images
            .iter()
            .filter(|image| image.journey_id() == journey_id)
            .cloned()
            .collect())
    }
}
