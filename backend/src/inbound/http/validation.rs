//! Shared validation helpers for inbound HTTP adapters.
//!
//! Wire-level failures (absent fields, unparseable ids or timestamps) are
//! reported here; content rules live in the domain and arrive as
//! [`crate::domain::FieldViolation`].

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::{Error, Field};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidUuid,
    InvalidTimestamp,
    IdMismatch,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::InvalidTimestamp => "invalid_timestamp",
            ErrorCode::IdMismatch => "id_mismatch",
        }
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: &'static str,
    message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: Field) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

/// Unwrap a required body field.
pub(crate) fn require<T>(value: Option<T>, field: Field) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

pub(crate) fn invalid_uuid_error(field: &'static str, value: &str) -> Error {
    ValidationError::new(field, format!("{field} must be a valid UUID"))
        .with_value(ErrorCode::InvalidUuid, value)
}

/// Parse a path or body identifier into one of the domain id types.
pub(crate) fn parse_id<T: FromStr>(value: &str, field: &'static str) -> Result<T, Error> {
    value
        .parse::<T>()
        .map_err(|_| invalid_uuid_error(field, value))
}

pub(crate) fn id_mismatch_error(path_id: &str, body_id: &str) -> Error {
    ValidationError::new("id", "body id does not match the id in the path")
        .with_value(ErrorCode::IdMismatch, format!("{body_id} != {path_id}"))
}

pub(crate) fn invalid_timestamp_error(field: Field, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be an RFC 3339 timestamp"))
        .with_value(ErrorCode::InvalidTimestamp, value)
}

pub(crate) fn parse_rfc3339_timestamp(value: &str, field: Field) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|_| invalid_timestamp_error(field, value))
}

pub(crate) fn parse_optional_rfc3339_timestamp(
    value: Option<&str>,
    field: Field,
) -> Result<Option<DateTime<Utc>>, Error> {
    value
        .map(|raw| parse_rfc3339_timestamp(raw, field))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::JourneyId;
    use rstest::rstest;

    #[rstest]
    fn missing_field_reports_wire_name() {
        let err = require::<String>(None, Field::LoggedInUserName).expect_err("missing");
        assert_eq!(err.message(), "missing required field: loggedInUserName");
        assert_eq!(
            err.details(),
            Some(&json!({"field": "loggedInUserName", "code": "missing_field"}))
        );
    }

    #[rstest]
    fn parse_id_reports_invalid_uuid() {
        let err = parse_id::<JourneyId>("abc123", "id").expect_err("invalid");
        assert_eq!(
            err.details(),
            Some(&json!({"field": "id", "value": "abc123", "code": "invalid_uuid"}))
        );
    }

    #[rstest]
    #[case("2024-04-01T09:00:00Z")]
    #[case("2024-04-01T18:00:00+09:00")]
    fn parses_rfc3339_in_any_offset(#[case] raw: &str) {
        let parsed = parse_rfc3339_timestamp(raw, Field::StartDate).expect("timestamp");
        assert_eq!(parsed.to_rfc3339(), "2024-04-01T09:00:00+00:00");
    }

    #[rstest]
    #[case("2024-04-01")]
    #[case("yesterday")]
    fn rejects_non_rfc3339(#[case] raw: &str) {
        let err = parse_rfc3339_timestamp(raw, Field::EndDate).expect_err("invalid");
        assert_eq!(
            err.details().and_then(|d| d.get("code")),
            Some(&json!("invalid_timestamp"))
        );
    }

    #[rstest]
    fn optional_timestamp_passes_through_absence() {
        assert_eq!(
            parse_optional_rfc3339_timestamp(None, Field::StartDate).expect("absent"),
            None
        );
    }
}
