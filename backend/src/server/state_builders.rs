//! Builders wiring repositories into domain services and HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::info;

use journal_backend::domain::ports::{ImageRepository, JourneyRepository, UserRepository};
use journal_backend::domain::{ImageService, JourneyService, UserService};
use journal_backend::inbound::http::state::HttpState;
use journal_backend::outbound::memory::InMemoryDocumentStore;
use journal_backend::outbound::persistence::{
    DbPool, DieselImageRepository, DieselJourneyRepository, DieselUserRepository,
};

use super::ServerConfig;

fn services_over<U, J, I>(
    users: Arc<U>,
    journeys: Arc<J>,
    images: Arc<I>,
    clock: Arc<dyn Clock>,
) -> HttpState
where
    U: UserRepository + 'static,
    J: JourneyRepository + 'static,
    I: ImageRepository + 'static,
{
    HttpState::from_services(
        Arc::new(UserService::new(users)),
        Arc::new(JourneyService::new(journeys, clock)),
        Arc::new(ImageService::new(images)),
    )
}

fn diesel_state(pool: &DbPool, clock: Arc<dyn Clock>) -> HttpState {
    services_over(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DieselJourneyRepository::new(pool.clone())),
        Arc::new(DieselImageRepository::new(pool.clone())),
        clock,
    )
}

fn memory_state(clock: Arc<dyn Clock>) -> HttpState {
    let store = Arc::new(InMemoryDocumentStore::new());
    services_over(store.clone(), store.clone(), store, clock)
}

/// Build the HTTP state, backed by PostgreSQL when a pool is configured and
/// by a process-local store otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let state = match &config.db_pool {
        Some(pool) => diesel_state(pool, clock),
        None => {
            info!("no database configured; serving from the in-memory store");
            memory_state(clock)
        }
    };
    web::Data::new(state)
}
