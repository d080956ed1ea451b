//! User data model.
//!
//! Purpose: define strongly typed user documents and the registration
//! payload after validation. Names are trimmed; the password is kept verbatim
//! and only ever leaves the domain as an Argon2 hash.

use std::fmt;

use super::ids::UserId;
use super::password::{PasswordHash, PlainPassword};
use super::validation::{Field, FieldViolation, required_text};

/// Longest accepted username, in characters.
pub const USERNAME_MAX: usize = 64;
/// Longest accepted first or last name, in characters.
pub const PERSON_NAME_MAX: usize = 128;

/// Login handle: ASCII letters, digits, `.`, `_` or `-`.
///
/// ```
/// use journal_backend::domain::Username;
///
/// let name = Username::new("  ada_l ").expect("valid username");
/// assert_eq!(name.as_ref(), "ada_l");
/// assert!(Username::new("ada lovelace").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Validate a value submitted as `username`.
    pub fn new(value: &str) -> Result<Self, FieldViolation> {
        Self::parse(Field::Username, value)
    }

    /// Validate a username submitted under another field name, such as a
    /// journey's `loggedInUserName`.
    pub fn parse(field: Field, value: &str) -> Result<Self, FieldViolation> {
        let value = required_text(field, value, USERNAME_MAX)?;
        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        {
            return Err(FieldViolation::InvalidCharacters { field });
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

/// A first or last name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    pub fn parse(field: Field, value: &str) -> Result<Self, FieldViolation> {
        required_text(field, value, PERSON_NAME_MAX).map(Self)
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Public view of a stored user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: Username,
    first_name: PersonName,
    last_name: PersonName,
}

impl User {
    pub fn new(
        id: UserId,
        username: Username,
        first_name: PersonName,
        last_name: PersonName,
    ) -> Self {
        Self {
            id,
            username,
            first_name,
            last_name,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    pub fn last_name(&self) -> &PersonName {
        &self.last_name
    }
}

/// User document as persisted, including the password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub user: User,
    pub password_hash: PasswordHash,
}

/// Validated registration request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    username: Username,
    first_name: PersonName,
    last_name: PersonName,
    password: PlainPassword,
}

impl NewUser {
    /// Validate raw registration fields in wire order, reporting the first
    /// violation.
    ///
    /// ```
    /// use journal_backend::domain::NewUser;
    ///
    /// let draft = NewUser::try_from_parts("ada", "Ada", "Lovelace", "pw").expect("valid");
    /// assert_eq!(draft.username().as_ref(), "ada");
    /// assert!(NewUser::try_from_parts("ada", " ", "Lovelace", "pw").is_err());
    /// ```
    pub fn try_from_parts(
        username: &str,
        first_name: &str,
        last_name: &str,
        password: &str,
    ) -> Result<Self, FieldViolation> {
        Ok(Self {
            username: Username::new(username)?,
            first_name: PersonName::parse(Field::FirstName, first_name)?,
            last_name: PersonName::parse(Field::LastName, last_name)?,
            password: PlainPassword::new(password)?,
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &PlainPassword {
        &self.password
    }

    /// Assign an identity and attach the derived hash.
    pub fn into_account(self, id: UserId, password_hash: PasswordHash) -> UserAccount {
        UserAccount {
            user: User::new(id, self.username, self.first_name, self.last_name),
            password_hash,
        }
    }
}
