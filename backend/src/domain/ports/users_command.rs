//! Driving port for account registration.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User};

/// Domain use-case port for creating users.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Register a validated user, returning the stored public view.
    ///
    /// Fails with a conflict when the username is taken.
    async fn register(&self, new_user: NewUser) -> Result<User, Error>;
}
