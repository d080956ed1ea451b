//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters; driving
//! ports (`*Command`, `*Query`) are implemented by domain services and
//! consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod image_repository;
mod images_command;
mod images_query;
mod journey_repository;
mod journeys_command;
mod journeys_query;
mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use image_repository::MockImageRepository;
pub use image_repository::{ImageRepository, ImageRepositoryError};
pub use images_command::ImagesCommand;
pub use images_query::ImagesQuery;
#[cfg(test)]
pub use journey_repository::MockJourneyRepository;
pub use journey_repository::{JourneyRepository, JourneyRepositoryError};
pub use journeys_command::JourneysCommand;
pub use journeys_query::JourneysQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
pub use users_command::UsersCommand;
pub use users_query::UsersQuery;
