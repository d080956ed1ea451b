//! Static landing page served at `/`.

use actix_web::{HttpResponse, get, http::header};

const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Travel Journal API</title>
  </head>
  <body>
    <h1>Travel Journal API</h1>
    <p>Record journeys, attach photos and share them with fellow travellers.</p>
    <ul>
      <li><code>GET /users</code> and <code>POST /users/create</code></li>
      <li><code>GET /journeys/{username}</code>, <code>GET /journeys/id/{id}</code></li>
      <li><code>POST /journeys/create</code>, <code>PUT /journeys/update/{id}</code>,
        <code>DELETE /journeys/{id}</code></li>
      <li><code>POST /journeys/add-img</code>, <code>GET /journeys/img/{journeyId}</code></li>
    </ul>
  </body>
</html>
"#;

/// Serve the landing page.
#[utoipa::path(
    get,
    path = "/",
    tags = ["home"],
    responses((status = 200, description = "Landing page", content_type = "text/html"))
)]
#[get("/")]
pub async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "text/html; charset=UTF-8"))
        .body(HOME_PAGE)
}
