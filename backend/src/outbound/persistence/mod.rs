//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the journal repository ports backed by
//! PostgreSQL through `diesel-async` and a `bb8` pool.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and the table definitions
//!   (`schema.rs`) never leave this module.
//! - **Typed errors**: pool and Diesel failures become the port's
//!   `Connection` or `Query` variants; driver messages are logged at `debug`.
//!
//! # Example
//!
//! ```ignore
//! use journal_backend::outbound::persistence::{DbPool, DieselJourneyRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/journal")).await?;
//! let journeys = DieselJourneyRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_image_repository;
mod diesel_journey_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_image_repository::DieselImageRepository;
pub use diesel_journey_repository::DieselJourneyRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
