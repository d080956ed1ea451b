//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use mockable::DefaultClock;

use crate::Trace;
use crate::domain::{Error, ImageService, JourneyService, UserService};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryDocumentStore;

/// Handler state backed by a fresh in-memory store.
pub fn memory_state() -> HttpState {
    let store = Arc::new(InMemoryDocumentStore::new());
    HttpState::from_services(
        Arc::new(UserService::new(store.clone())),
        Arc::new(JourneyService::new(store.clone(), Arc::new(DefaultClock))),
        Arc::new(ImageService::new(store)),
    )
}

/// Application with every resource route, the trace middleware and the JSON
/// error handler, mirroring the production wiring.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(super::configure_api)
}

/// Split an error response into its status and decoded envelope.
pub async fn read_error(res: ServiceResponse) -> (StatusCode, Error) {
    let status = res.status();
    let error: Error = test::read_body_json(res).await;
    (status, error)
}
