//! Remote error envelope mapping
//!
//! The service reports failures as `{"error": {"code": "...", "message": "..."}}`.
//! String codes are translated to numeric codes through a static table; new
//! codes only need a new table entry.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::domain::DomainError;

static REMOTE_ERROR_CODES: Lazy<HashMap<&'static str, u16>> = Lazy::new(|| {
    HashMap::from([
        ("BadArgument", 400),
        ("Unauthorized", 401),
        ("Forbidden", 403),
        ("QuotaExceeded", 403),
        ("NotFound", 404),
        ("KbNotFound", 404),
        ("OperationNotFound", 404),
        ("Conflict", 409),
        ("ExtractionFailed", 422),
        ("ValidationFailure", 422),
        ("TooManyRequests", 429),
        ("RateLimitExceeded", 429),
        ("Unspecified", 500),
        ("InternalServerError", 500),
        ("ServiceError", 500),
        ("ServiceUnavailable", 503),
    ])
});

/// Numeric code for a remote string error code, if known
pub fn remote_error_code(code: &str) -> Option<u16> {
    REMOTE_ERROR_CODES.get(code).copied()
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: RemoteErrorBody,
}

#[derive(Debug, Deserialize)]
struct RemoteErrorBody {
    code: String,
    message: String,
}

/// Build the error for a non-success response
///
/// An `error` envelope yields the table code (or `status` for unknown codes)
/// and `"{code}: {message}"`. Anything else keeps `status` and the raw body.
pub fn map_error_response(status: u16, body: &str) -> DomainError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope { error }) => {
            let code = remote_error_code(&error.code).unwrap_or(status);
            DomainError::remote(code, format!("{}: {}", error.code, error.message))
        }
        Err(_) => DomainError::remote(status, body),
    }
}
