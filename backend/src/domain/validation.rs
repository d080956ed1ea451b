//! Field-level validation shared by the journal entities.
//!
//! Every constructor that accepts caller-supplied text reports failures as a
//! [`FieldViolation`], naming the offending [`Field`] with the same camelCase
//! spelling clients use on the wire.

use std::fmt;

use serde_json::json;

use super::Error;

/// Resource fields subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    FirstName,
    LastName,
    Password,
    Title,
    Location,
    StartDate,
    EndDate,
    Description,
    LoggedInUserName,
    JourneyId,
    ImgAddress,
    JourneyTitle,
}

impl Field {
    /// Wire name of the field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Password => "password",
            Self::Title => "title",
            Self::Location => "location",
            Self::StartDate => "startDate",
            Self::EndDate => "endDate",
            Self::Description => "description",
            Self::LoggedInUserName => "loggedInUserName",
            Self::JourneyId => "journeyId",
            Self::ImgAddress => "imgAddress",
            Self::JourneyTitle => "journeyTitle",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rejected field value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldViolation {
    /// Value was empty once trimmed.
    #[error("{field} must not be empty")]
    Empty { field: Field },
    /// Value exceeded the storage limit.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: Field, max: usize },
    /// Value contained characters outside the permitted set.
    #[error("{field} may only contain letters, digits, '.', '_' or '-'")]
    InvalidCharacters { field: Field },
    /// Value was not an absolute `http` or `https` URL.
    #[error("{field} must be an absolute http or https URL")]
    InvalidUrl { field: Field },
    /// `endDate` preceded `startDate`.
    #[error("endDate must not be before startDate")]
    EndBeforeStart,
}

impl FieldViolation {
    /// Field the violation refers to.
    pub fn field(&self) -> Field {
        match self {
            Self::Empty { field }
            | Self::TooLong { field, .. }
            | Self::InvalidCharacters { field }
            | Self::InvalidUrl { field } => *field,
            Self::EndBeforeStart => Field::EndDate,
        }
    }

    /// Stable machine-readable reason.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Empty { .. } => "empty_field",
            Self::TooLong { .. } => "too_long",
            Self::InvalidCharacters { .. } => "invalid_characters",
            Self::InvalidUrl { .. } => "invalid_url",
            Self::EndBeforeStart => "invalid_date_range",
        }
    }
}

impl From<FieldViolation> for Error {
    fn from(violation: FieldViolation) -> Self {
        let details = json!({
            "field": violation.field().as_str(),
            "code": violation.code(),
        });
        Error::invalid_request(violation.to_string()).with_details(details)
    }
}

/// Trim `value` and enforce that it is non-empty and at most `max` characters.
pub(crate) fn required_text(
    field: Field,
    value: &str,
    max: usize,
) -> Result<String, FieldViolation> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldViolation::Empty { field });
    }
    bounded_text(field, trimmed, max)
}

/// Trim `value` and enforce the length limit; empty values are accepted.
pub(crate) fn bounded_text(
    field: Field,
    value: &str,
    max: usize,
) -> Result<String, FieldViolation> {
    let trimmed = value.trim();
    if trimmed.chars().count() > max {
        return Err(FieldViolation::TooLong { field, max });
    }
    Ok(trimmed.to_owned())
}
