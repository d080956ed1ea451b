//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the request and response DTOs and the error envelope wrappers from
//! [`crate::inbound::http::schemas`]. The document backs Swagger UI in debug
//! builds and is exported by `cargo run --bin openapi-dump`.

use crate::inbound::http::images::{ImageRequest, ImageResponse};
use crate::inbound::http::journeys::{JourneyListResponse, JourneyRequest, JourneyResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::{CreateUserRequest, UserResponse};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Journal backend API",
        description = "Users, travel journeys and journey images.",
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::home::home,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::journeys::list_journeys_by_user,
        crate::inbound::http::journeys::get_journey,
        crate::inbound::http::journeys::create_journey,
        crate::inbound::http::journeys::update_journey,
        crate::inbound::http::journeys::delete_journey,
        crate::inbound::http::images::add_image,
        crate::inbound::http::images::list_journey_images,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateUserRequest,
        UserResponse,
        JourneyRequest,
        JourneyResponse,
        JourneyListResponse,
        ImageRequest,
        ImageResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "users", description = "User registration and listing"),
        (name = "journeys", description = "Travel journeys"),
        (name = "images", description = "Images attached to journeys"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
