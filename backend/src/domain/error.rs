//! Domain-level error type shared by services and adapters.
//!
//! The error is transport agnostic: it carries a stable [`ErrorCode`], a
//! human-readable message, the ambient trace identifier and optional
//! structured details. Inbound adapters decide how each code maps onto their
//! protocol (see `inbound::http::error`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::TraceId;

/// Response header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The requested document does not exist.
    NotFound,
    /// The request collides with existing state, e.g. a taken username.
    Conflict,
    /// A dependency such as the document store is unreachable.
    ServiceUnavailable,
    /// An unexpected failure occurred while serving the request.
    InternalError,
}

/// Error payload returned by domain services.
///
/// Construction captures [`TraceId::current`] so errors raised while a
/// request is in flight are correlated without explicit plumbing.
///
/// # Examples
/// ```
/// use journal_backend::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("journey missing");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.message(), "journey missing");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    code: ErrorCode,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(alias = "trace_id")]
    trace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    /// Create a new error, capturing the trace identifier in scope.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier, when one was in scope at construction.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Supplementary structured details.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach or replace the trace identifier.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use journal_backend::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::invalid_request("bad").with_details(json!({ "field": "title" }));
    /// assert!(err.details().is_some());
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    //! Regression coverage for error construction and serialisation.
    use super::*;
    use rstest::rstest;
    use serde_json::json;
    use uuid::Uuid;

    #[rstest]
    #[case(Error::invalid_request("x"), ErrorCode::InvalidRequest, "invalid_request")]
    #[case(Error::not_found("x"), ErrorCode::NotFound, "not_found")]
    #[case(Error::conflict("x"), ErrorCode::Conflict, "conflict")]
    #[case(
        Error::service_unavailable("x"),
        ErrorCode::ServiceUnavailable,
        "service_unavailable"
    )]
    #[case(Error::internal("x"), ErrorCode::InternalError, "internal_error")]
    fn constructors_set_code(
        #[case] error: Error,
        #[case] expected: ErrorCode,
        #[case] wire: &str,
    ) {
        assert_eq!(error.code(), expected);
        let value = serde_json::to_value(&error).expect("serialise error");
        assert_eq!(value.get("code").and_then(|v| v.as_str()), Some(wire));
    }

    #[rstest]
    fn optional_fields_are_omitted_when_absent() {
        let value = serde_json::to_value(Error::not_found("missing")).expect("serialise error");
        assert_eq!(value, json!({ "code": "not_found", "message": "missing" }));
    }

    #[tokio::test]
    async fn new_captures_scoped_trace_id() {
        let trace_id = TraceId::from_uuid(Uuid::nil());
        let error = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
        assert_eq!(error.trace_id(), Some(Uuid::nil().to_string().as_str()));
    }

    #[rstest]
    fn deserialises_snake_case_trace_id_alias() {
        let error: Error = serde_json::from_value(json!({
            "code": "conflict",
            "message": "taken",
            "trace_id": "abc"
        }))
        .expect("deserialise error");
        assert_eq!(error.trace_id(), Some("abc"));
    }
}
