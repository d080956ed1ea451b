//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    ImagesCommand, ImagesQuery, JourneysCommand, JourneysQuery, UsersCommand, UsersQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
    pub journeys: Arc<dyn JourneysCommand>,
    pub journeys_query: Arc<dyn JourneysQuery>,
    pub images: Arc<dyn ImagesCommand>,
    pub images_query: Arc<dyn ImagesQuery>,
}

impl HttpState {
    /// Build state where each resource's service backs both its command and
    /// query ports.
    pub fn from_services<U, J, I>(users: Arc<U>, journeys: Arc<J>, images: Arc<I>) -> Self
    where
        U: UsersCommand + UsersQuery + 'static,
        J: JourneysCommand + JourneysQuery + 'static,
        I: ImagesCommand + ImagesQuery + 'static,
    {
        Self {
            users: users.clone(),
            users_query: users,
            journeys: journeys.clone(),
            journeys_query: journeys,
            images: images.clone(),
            images_query: images,
        }
    }
}
