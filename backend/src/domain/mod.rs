//! Domain primitives, aggregates and services.
//!
//! Purpose: define strongly typed journal entities (users, journeys and
//! images), the ports that connect them to adapters, and the services that
//! implement the driving ports. Nothing here depends on HTTP or Diesel.
//!
//! Public surface:
//! - Error / ErrorCode: transport agnostic failure payload.
//! - TraceId: per-request correlation identifier.
//! - User, Journey, Image with their validated drafts.
//! - UserService, JourneyService, ImageService.

pub mod error;
pub mod ids;
pub mod image;
pub mod image_service;
pub mod journey;
pub mod journey_service;
pub mod password;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;
pub mod validation;

pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::ids::{IdParseError, ImageId, JourneyId, UserId};
pub use self::image::{Image, ImageDraft, ImageFields};
pub use self::image_service::ImageService;
pub use self::journey::{Journey, JourneyDraft, JourneyFields, JourneyPatch};
pub use self::journey_service::JourneyService;
pub use self::password::{PasswordHash, PasswordHashError, PlainPassword};
pub use self::trace_id::TraceId;
pub use self::user::{NewUser, PersonName, User, UserAccount, Username};
pub use self::user_service::UserService;
pub use self::validation::{Field, FieldViolation};
