//! Users API handlers.
//!
//! ```text
//! GET /users
//! POST /users/create {"username":"elenaG","firstName":"Elena","lastName":"G","password":"..."}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Field, NewUser, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::require;

/// Registration body for `POST /users/create`.
///
/// Fields are optional at the serde level so an absent field is reported as
/// `missing_field` rather than a generic JSON error.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[schema(required, example = "elenaG")]
    pub username: Option<String>,
    #[schema(required, example = "Elena")]
    pub first_name: Option<String>,
    #[schema(required, example = "Garcia")]
    pub last_name: Option<String>,
    #[schema(required, format = Password)]
    pub password: Option<String>,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = crate::domain::Error;

    fn try_from(body: CreateUserRequest) -> Result<Self, Self::Error> {
        let username = require(body.username, Field::Username)?;
        let first_name = require(body.first_name, Field::FirstName)?;
        let last_name = require(body.last_name, Field::LastName)?;
        let password = require(body.password, Field::Password)?;
        Ok(NewUser::try_from_parts(
            &username,
            &first_name,
            &last_name,
            &password,
        )?)
    }
}

/// Public user representation. Never includes the password.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(format = "uuid")]
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
            first_name: user.first_name().to_string(),
            last_name: user.last_name().to_string(),
        }
    }
}

/// List every registered user, oldest first.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [UserResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users.iter().map(UserResponse::from).collect()))
}

/// Register a user.
///
/// # Examples
/// ```no_run
/// use actix_web::web;
/// use journal_backend::inbound::http::state::HttpState;
/// use journal_backend::inbound::http::users::{CreateUserRequest, create_user};
///
/// async fn call_handler(state: web::Data<HttpState>) {
///     let body = web::Json(CreateUserRequest {
///         username: Some("elenaG".into()),
///         first_name: Some("Elena".into()),
///         last_name: Some("Garcia".into()),
///         password: Some("s3cret".into()),
///     });
///     let _ = create_user(state, body).await;
/// }
/// ```
#[utoipa::path(
    post,
    path = "/users/create",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Username already taken", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users/create")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let new_user = NewUser::try_from(payload.into_inner())?;
    let user = state.users.register(new_user).await?;
    Ok(HttpResponse::Created().json(UserResponse::from(&user)))
}
