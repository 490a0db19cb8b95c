/*
[INPUT]:  HTTP status code and raw response body
[OUTPUT]: Decoded payload or normalized PlatformError
[POS]:    HTTP layer - response interpretation shared by all endpoints
[UPDATE]: When status classification or error body handling changes
*/

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::error;

use crate::http::{PlatformError, Result};

/// Reason used when a failed response carries no body
pub const EMPTY_BODY_REASON: &str = "Response Body Empty";

/// Reason used when a failed response body could not be read
pub const MALFORMED_BODY_REASON: &str = "Response Body Malformed";

/// Structured failure body: `{"error": "<reason>"}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Statuses below 200 or from 400 up are failures; 3xx counts as success.
pub fn is_failure(status: u16) -> bool {
    !(200..400).contains(&status)
}

/// Extract the reason from a failed response body.
///
/// Priority: structured `{"error": ...}` JSON, then the empty-body
/// sentinel, then the raw body text.
pub fn error_reason(body: &[u8]) -> String {
    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        return parsed.error;
    }
    if body.is_empty() {
        return EMPTY_BODY_REASON.to_string();
    }
    String::from_utf8_lossy(body).into_owned()
}

/// Error for a response whose body could not be read.
///
/// A failure status still yields its `Error <status>` message with the
/// malformed-body reason; `None` means the status was a success and the
/// read error belongs to the transport.
pub fn unreadable_body(status: u16) -> Option<PlatformError> {
    is_failure(status).then(|| PlatformError::remote(status, MALFORMED_BODY_REASON))
}

/// Classify a response that has no destination payload.
pub fn check_status(status: u16, body: &[u8]) -> Result<()> {
    if is_failure(status) {
        let err = PlatformError::remote(status, error_reason(body));
        error!(status, error = %err, "request rejected");
        return Err(err);
    }
    Ok(())
}

/// Classify a response and decode its payload into `T`.
pub fn interpret<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T> {
    check_status(status, body)?;
    serde_json::from_slice(body).map_err(|source| {
        error!(status, error = %source, "response body did not match expected shape");
        PlatformError::Decode {
            source,
            body: String::from_utf8_lossy(body).into_owned(),
        }
    })
}
