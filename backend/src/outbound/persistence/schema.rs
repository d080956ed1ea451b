//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered accounts. `username` carries the unique index
    /// `users_username_key`.
    users (id) {
        id -> Uuid,
        username -> Varchar,
        first_name -> Varchar,
        last_name -> Varchar,
        /// Argon2id PHC string.
        password_hash -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Journal entries. `logged_in_user_name` is a plain copy of the owner's
    /// username, not a foreign key.
    journeys (id) {
        id -> Uuid,
        title -> Varchar,
        location -> Varchar,
        start_date -> Timestamptz,
        end_date -> Timestamptz,
        description -> Text,
        /// Server-side creation time, set by the domain clock.
        created_at -> Timestamptz,
        logged_in_user_name -> Varchar,
    }
}

diesel::table! {
    /// Images attached to journeys by free-form reference.
    images (id) {
        id -> Uuid,
        journey_id -> Varchar,
        img_address -> Text,
        username -> Varchar,
        journey_title -> Varchar,
        created_at -> Timestamptz,
    }
}
