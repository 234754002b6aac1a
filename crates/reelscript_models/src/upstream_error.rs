//! Mapping provider SDK errors onto upstream error kinds.

use reelscript_error::{UpstreamError, UpstreamErrorKind};

/// Convert a provider error message into a structured [`UpstreamError`].
///
/// SDK errors arrive as display strings. A status code is extracted when the
/// message carries one (`"bad response from server; code 503; ..."`); decode
/// failures become [`UpstreamErrorKind::MalformedResponse`]; everything else
/// is a plain request failure.
///
/// # Examples
///
/// ```
/// use reelscript_error::UpstreamErrorKind;
/// use reelscript_models::classify_upstream_error;
///
/// let err = classify_upstream_error("bad response from server; code 401; description: API key not valid");
/// assert!(matches!(err.kind, UpstreamErrorKind::HttpError { status_code: 401, .. }));
/// assert!(err.kind.is_auth());
/// ```
#[track_caller]
pub fn classify_upstream_error(err: impl std::fmt::Display) -> UpstreamError {
    let message = err.to_string();

    if let Some(status_code) = extract_status_code(&message) {
        return UpstreamError::new(UpstreamErrorKind::HttpError {
            status_code,
            message,
        });
    }

    let lowered = message.to_lowercase();
    if lowered.contains("decode") || lowered.contains("deserializ") {
        UpstreamError::new(UpstreamErrorKind::MalformedResponse(message))
    } else {
        UpstreamError::new(UpstreamErrorKind::ApiRequest(message))
    }
}

/// Extract an HTTP status code from an error message string.
fn extract_status_code(message: &str) -> Option<u16> {
    let start = message.find("code ")? + "code ".len();
    let digits: String = message[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
