//! Journeys API handlers.
//!
//! ```text
//! GET /journeys/{username}
//! GET /journeys/id/{id}
//! POST /journeys/create
//! PUT /journeys/update/{id}
//! DELETE /journeys/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Field, Journey, JourneyDraft, JourneyFields, JourneyId, JourneyPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    id_mismatch_error, parse_id, parse_optional_rfc3339_timestamp, parse_rfc3339_timestamp,
    require,
};

/// Journey body shared by create and update.
///
/// Create requires every field except `description` and `id`; update applies
/// only the fields present.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JourneyRequest {
    /// Optional on update; must match the path id when supplied.
    #[schema(format = "uuid")]
    pub id: Option<String>,
    #[schema(example = "Trip")]
    pub title: Option<String>,
    #[schema(example = "Japan")]
    pub location: Option<String>,
    #[schema(format = DateTime, example = "2024-04-01T00:00:00Z")]
    pub start_date: Option<String>,
    #[schema(format = DateTime, example = "2024-04-10T00:00:00Z")]
    pub end_date: Option<String>,
    pub description: Option<String>,
    #[schema(example = "elenaG")]
    pub logged_in_user_name: Option<String>,
}

impl JourneyRequest {
    fn into_draft(self) -> Result<JourneyDraft, Error> {
        let title = require(self.title, Field::Title)?;
        let location = require(self.location, Field::Location)?;
        let start_date = require(self.start_date, Field::StartDate)?;
        let end_date = require(self.end_date, Field::EndDate)?;
        let logged_in_user_name = require(self.logged_in_user_name, Field::LoggedInUserName)?;

        let fields = JourneyFields {
            title,
            location,
            start_date: parse_rfc3339_timestamp(&start_date, Field::StartDate)?,
            end_date: parse_rfc3339_timestamp(&end_date, Field::EndDate)?,
            description: self.description.unwrap_or_default(),
            logged_in_user_name,
        };
        Ok(JourneyDraft::try_from(fields)?)
    }

    fn into_patch(self, path_id: &str, id: &JourneyId) -> Result<JourneyPatch, Error> {
        if let Some(body_id) = self.id.as_deref() {
            let parsed: JourneyId = parse_id(body_id, "id")?;
            if &parsed != id {
                return Err(id_mismatch_error(path_id, body_id));
            }
        }

        Ok(JourneyPatch {
            title: self.title,
            location: self.location,
            start_date: parse_optional_rfc3339_timestamp(
                self.start_date.as_deref(),
                Field::StartDate,
            )?,
            end_date: parse_optional_rfc3339_timestamp(self.end_date.as_deref(), Field::EndDate)?,
            description: self.description,
            logged_in_user_name: self.logged_in_user_name,
        })
    }
}

/// Journey representation returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JourneyResponse {
    #[schema(format = "uuid")]
    pub id: String,
    pub title: String,
    pub location: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub description: String,
    pub created: DateTime<Utc>,
    pub logged_in_user_name: String,
}

impl From<&Journey> for JourneyResponse {
    fn from(journey: &Journey) -> Self {
        Self {
            id: journey.id().to_string(),
            title: journey.title().to_owned(),
            location: journey.location().to_owned(),
            start_date: journey.start_date(),
            end_date: journey.end_date(),
            description: journey.description().to_owned(),
            created: journey.created(),
            logged_in_user_name: journey.logged_in_user_name().to_string(),
        }
    }
}

/// Wrapper returned by the per-user listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct JourneyListResponse {
    pub journeys: Vec<JourneyResponse>,
}

/// List journeys owned by `username`, oldest first.
#[utoipa::path(
    get,
    path = "/journeys/{username}",
    params(("username" = String, Path, description = "Owner username")),
    responses(
        (status = 200, description = "Journeys for the user", body = JourneyListResponse),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["journeys"],
    operation_id = "listJourneysByUser"
)]
#[get("/journeys/{username}")]
pub async fn list_journeys_by_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<JourneyListResponse>> {
    let username = path.into_inner();
    let journeys = state.journeys_query.list_for_user(&username).await?;
    Ok(web::Json(JourneyListResponse {
        journeys: journeys.iter().map(JourneyResponse::from).collect(),
    }))
}

/// Fetch a single journey.
#[utoipa::path(
    get,
    path = "/journeys/id/{id}",
    params(("id" = String, Path, format = "uuid", description = "Journey id")),
    responses(
        (status = 200, description = "Journey", body = JourneyResponse),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "Journey not found", body = ErrorSchema)
    ),
    tags = ["journeys"],
    operation_id = "getJourney"
)]
#[get("/journeys/id/{id}")]
pub async fn get_journey(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<JourneyResponse>> {
    let id: JourneyId = parse_id(&path.into_inner(), "id")?;
    let journey = state.journeys_query.get(&id).await?;
    Ok(web::Json(JourneyResponse::from(&journey)))
}

/// Create a journey stamped with the server time.
#[utoipa::path(
    post,
    path = "/journeys/create",
    request_body = JourneyRequest,
    responses(
        (status = 201, description = "Journey created", body = JourneyResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["journeys"],
    operation_id = "createJourney"
)]
#[post("/journeys/create")]
pub async fn create_journey(
    state: web::Data<HttpState>,
    payload: web::Json<JourneyRequest>,
) -> ApiResult<HttpResponse> {
    let draft = payload.into_inner().into_draft()?;
    let journey = state.journeys.create(draft).await?;
    Ok(HttpResponse::Created().json(JourneyResponse::from(&journey)))
}

/// Apply the fields present in the body to an existing journey.
#[utoipa::path(
    put,
    path = "/journeys/update/{id}",
    params(("id" = String, Path, format = "uuid", description = "Journey id")),
    request_body = JourneyRequest,
    responses(
        (status = 204, description = "Journey updated"),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Journey not found", body = ErrorSchema)
    ),
    tags = ["journeys"],
    operation_id = "updateJourney"
)]
#[put("/journeys/update/{id}")]
pub async fn update_journey(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<JourneyRequest>,
) -> ApiResult<HttpResponse> {
    let raw_id = path.into_inner();
    let id: JourneyId = parse_id(&raw_id, "id")?;
    let patch = payload.into_inner().into_patch(&raw_id, &id)?;
    state.journeys.update(&id, patch).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Delete a journey. Images referencing it are left in place.
#[utoipa::path(
    delete,
    path = "/journeys/{id}",
    params(("id" = String, Path, format = "uuid", description = "Journey id")),
    responses(
        (status = 204, description = "Journey deleted"),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "Journey not found", body = ErrorSchema)
    ),
    tags = ["journeys"],
    operation_id = "deleteJourney"
)]
#[delete("/journeys/{id}")]
pub async fn delete_journey(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id: JourneyId = parse_id(&path.into_inner(), "id")?;
    state.journeys.delete(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "journeys_tests.rs"]
mod tests;
