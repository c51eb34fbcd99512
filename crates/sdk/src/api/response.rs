use hyper::ext::ReasonPhrase;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::api::types::{ApiResult, ApiSdkError};

/// The reason phrase from the server's status line. hyper only keeps the
/// phrase when it differs from the canonical one, so the canonical phrase is
/// used when none was recorded.
pub(crate) fn reason_phrase(status: StatusCode, phrase: Option<&ReasonPhrase>) -> String {
    match phrase {
        Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
        None => status.canonical_reason().unwrap_or_default().to_string(),
    }
}

/// Turns a completed response into either the decoded JSON body or an
/// [`ApiSdkError::ApiError`].
///
/// Only statuses in `200..300` are accepted. The body of a successful response
/// must be JSON; a body that fails to decode is returned as a serialization
/// error rather than being swallowed.
pub(crate) fn decode_response<T>(status: StatusCode, reason: String, body: String) -> ApiResult<T>
where
    T: DeserializeOwned,
{
    if status.is_success() {
        return Ok(serde_json::from_str(&body)?);
    }

    warn!("API call rejected with {} {}", status.as_u16(), reason);

    Err(ApiSdkError::ApiError { status: status.as_u16(), reason, body })
}
