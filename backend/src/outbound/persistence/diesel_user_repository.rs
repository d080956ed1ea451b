//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{
    Field, PasswordHash, PersonName, User, UserAccount, UserId, Username,
};

use super::diesel_basic_error_mapping::{
    is_unique_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

const USERNAME_INDEX: &str = "users_username_key";

/// Diesel-backed implementation of the user repository port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    map_basic_pool_error(error, UserPersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    map_basic_diesel_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

fn corrupt_row(err: impl std::fmt::Display) -> UserPersistenceError {
    UserPersistenceError::query(format!("invalid user row: {err}"))
}

fn row_to_account(row: UserRow) -> Result<UserAccount, UserPersistenceError> {
    let user = User::new(
        UserId::from_uuid(row.id),
        Username::new(&row.username).map_err(corrupt_row)?,
        PersonName::parse(Field::FirstName, &row.first_name).map_err(corrupt_row)?,
        PersonName::parse(Field::LastName, &row.last_name).map_err(corrupt_row)?,
    );
    Ok(UserAccount {
        user,
        password_hash: PasswordHash::from_phc(row.password_hash),
    })
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, account: &UserAccount) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let user = &account.user;
        let row = NewUserRow {
            id: *user.id().as_uuid(),
            username: user.username().as_ref(),
            first_name: user.first_name().as_ref(),
            last_name: user.last_name().as_ref(),
            password_hash: account.password_hash.as_str(),
        };

        diesel::insert_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| {
                if is_unique_violation(&err, USERNAME_INDEX) {
                    UserPersistenceError::duplicate_username(user.username().to_string())
                } else {
                    map_diesel_error(err)
                }
            })
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<UserRow> = users::table
            .order((users::created_at.asc(), users::id.asc()))
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter()
            .map(|row| row_to_account(row).map(|account| account.user))
            .collect()
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserAccount>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = users::table
            .filter(users::username.eq(username.as_ref()))
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_account).transpose()
    }
}

#[cfg(test)]
mod tests {
    //! Row conversion coverage; database behaviour lives in
    //! `tests/diesel_user_repository.rs`.
    use super::*;
    use rstest::rstest;
    use uuid::Uuid;

    fn row(username: &str) -> UserRow {
        UserRow {
            id: Uuid::nil(),
            username: username.to_owned(),
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            password_hash: "$argon2id$stub".to_owned(),
        }
    }

    #[rstest]
    fn row_converts_to_account() {
        let account = row_to_account(row("ada")).expect("valid row");
        assert_eq!(account.user.id(), &UserId::from_uuid(Uuid::nil()));
        assert_eq!(account.user.username().as_ref(), "ada");
        assert_eq!(account.password_hash.as_str(), "$argon2id$stub");
    }

    #[rstest]
    fn corrupt_row_is_a_query_error() {
        let err = row_to_account(row("not valid")).expect_err("invalid username");
        assert!(matches!(err, UserPersistenceError::Query { .. }));
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let err = map_pool_error(PoolError::checkout("connection refused"));
        assert_eq!(err, UserPersistenceError::connection("connection refused"));
    }
}
