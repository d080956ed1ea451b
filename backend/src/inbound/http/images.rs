//! Journey image API handlers.
//!
//! ```text
//! POST /journeys/add-img {"journeyId":"...","imgAddress":"https://...","username":"...","journeyTitle":"..."}
//! GET /journeys/img/{journeyId}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Field, Image, ImageDraft, ImageFields};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::require;

/// Body for `POST /journeys/add-img`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageRequest {
    #[schema(required, example = "abc123")]
    pub journey_id: Option<String>,
    #[schema(required, format = Uri, example = "http://x/y.png")]
    pub img_address: Option<String>,
    #[schema(required, example = "elenaG")]
    pub username: Option<String>,
    #[schema(required, example = "Trip")]
    pub journey_title: Option<String>,
}

impl TryFrom<ImageRequest> for ImageDraft {
    type Error = Error;

    fn try_from(body: ImageRequest) -> Result<Self, Self::Error> {
        let fields = ImageFields {
            journey_id: require(body.journey_id, Field::JourneyId)?,
            img_address: require(body.img_address, Field::ImgAddress)?,
            username: require(body.username, Field::Username)?,
            journey_title: require(body.journey_title, Field::JourneyTitle)?,
        };
        Ok(ImageDraft::try_from(fields)?)
    }
}

/// Image representation returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    #[schema(format = "uuid")]
    pub id: String,
    pub journey_id: String,
    pub img_address: String,
    pub username: String,
    pub journey_title: String,
}

impl From<&Image> for ImageResponse {
    fn from(image: &Image) -> Self {
        Self {
            id: image.id().to_string(),
            journey_id: image.journey_id().to_owned(),
            img_address: image.img_address().to_owned(),
            username: image.username().to_string(),
            journey_title: image.journey_title().to_owned(),
        }
    }
}

/// Attach an image to a journey.
#[utoipa::path(
    post,
    path = "/journeys/add-img",
    request_body = ImageRequest,
    responses(
        (status = 201, description = "Image recorded", body = ImageResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["images"],
    operation_id = "addImage"
)]
#[post("/journeys/add-img")]
pub async fn add_image(
    state: web::Data<HttpState>,
    payload: web::Json<ImageRequest>,
) -> ApiResult<HttpResponse> {
    let draft = ImageDraft::try_from(payload.into_inner())?;
    let image = state.images.add(draft).await?;
    Ok(HttpResponse::Created().json(ImageResponse::from(&image)))
}

/// List images recorded against `journey_id`.
#[utoipa::path(
    get,
    path = "/journeys/img/{journey_id}",
    params(("journey_id" = String, Path, description = "Journey reference")),
    responses(
        (status = 200, description = "Images", body = [ImageResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["images"],
    operation_id = "listJourneyImages"
)]
#[get("/journeys/img/{journey_id}")]
pub async fn list_journey_images(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<ImageResponse>>> {
    let journey_id = path.into_inner();
    let images = state.images_query.list_for_journey(&journey_id).await?;
    Ok(web::Json(images.iter().map(ImageResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{memory_state, read_error, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::{Value, json};

    fn image_body(journey_id: &str) -> Value {
        json!({
            "journeyId": journey_id,
            "imgAddress": "http://x/y.png",
            "username": "elenaG",
            "journeyTitle": "Trip"
        })
    }

    #[actix_web::test]
    async fn add_echoes_fields_verbatim() {
        let app = actix_test::init_service(test_app(memory_state())).await;
        let req = actix_test::TestRequest::post()
            .uri("/journeys/add-img")
            .set_json(image_body("abc123"))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let image: ImageResponse = actix_test::read_body_json(res).await;
        assert_eq!(image.journey_id, "abc123");
        assert_eq!(image.img_address, "http://x/y.png");
        assert_eq!(image.username, "elenaG");
        assert_eq!(image.journey_title, "Trip");
    }

    #[actix_web::test]
    async fn list_returns_bare_array_filtered_by_journey() {
        let app = actix_test::init_service(test_app(memory_state())).await;
        for journey in ["abc123", "abc123", "other"] {
            let req = actix_test::TestRequest::post()
                .uri("/journeys/add-img")
                .set_json(image_body(journey))
                .to_request();
            actix_test::call_service(&app, req).await;
        }

        let req = actix_test::TestRequest::get()
            .uri("/journeys/img/abc123")
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        let images = body.as_array().expect("bare array");
        assert_eq!(images.len(), 2);
        assert!(
            images
                .iter()
                .all(|image| image.get("journeyId") == Some(&json!("abc123")))
        );
    }

    #[actix_web::test]
    async fn relative_address_is_rejected() {
        let app = actix_test::init_service(test_app(memory_state())).await;
        let mut body = image_body("abc123");
        body["imgAddress"] = json!("/y.png");
        let req = actix_test::TestRequest::post()
            .uri("/journeys/add-img")
            .set_json(body)
            .to_request();
        let (status, error) = read_error(actix_test::call_service(&app, req).await).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            error.details(),
            Some(&json!({"field": "imgAddress", "code": "invalid_url"}))
        );
    }
}
