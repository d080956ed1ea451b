//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod error;
pub mod health;
pub mod home;
pub mod images;
pub mod journeys;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;

/// Register the resource routes and the JSON extractor error handler.
///
/// Journey routes share the `/journeys` prefix and are told apart by segment
/// count and method, so registration order does not matter.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(home::home)
        .service(users::list_users)
        .service(users::create_user)
        .service(journeys::create_journey)
        .service(journeys::get_journey)
        .service(journeys::update_journey)
        .service(journeys::list_journeys_by_user)
        .service(journeys::delete_journey)
        .service(images::add_image)
        .service(images::list_journey_images);
}
