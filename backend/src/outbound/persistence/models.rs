//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and are
//! never exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{images, journeys, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
}

/// Insertable struct for creating user records. `created_at` defaults to
/// `now()`.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub username: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub password_hash: &'a str,
}

// ---------------------------------------------------------------------------
// Journey models
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = journeys)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct JourneyRow {
    pub id: Uuid,
    pub title: String,
    pub location: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub logged_in_user_name: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = journeys)]
pub(crate) struct NewJourneyRow<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub location: &'a str,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub description: &'a str,
    pub created_at: DateTime<Utc>,
    pub logged_in_user_name: &'a str,
}

/// Changeset replacing a journey's mutable content. Identity and
/// `created_at` are never rewritten.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = journeys)]
pub(crate) struct JourneyUpdate<'a> {
    pub title: &'a str,
    pub location: &'a str,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub description: &'a str,
    pub logged_in_user_name: &'a str,
}

// ---------------------------------------------------------------------------
// Image models
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = images)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ImageRow {
    pub id: Uuid,
    pub journey_id: String,
    pub img_address: String,
    pub username: String,
    pub journey_title: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = images)]
pub(crate) struct NewImageRow<'a> {
    pub id: Uuid,
    pub journey_id: &'a str,
    pub img_address: &'a str,
    pub username: &'a str,
    pub journey_title: &'a str,
}
