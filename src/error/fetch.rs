//! Errors produced while fetching a reading from the sensor.

use thiserror::Error;

use crate::traits::HttpError;

/// Failure of a single temperature fetch.
///
/// All variants are non-fatal: the coordinator keeps the last good reading
/// and shows the error text to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The sensor rejected the token (HTTP 401)
    #[error("Invalid token!")]
    InvalidToken,

    /// Network or transport failure, timeout, bad address or unexpected status
    #[error("Sensor unreachable: {0}")]
    Unreachable(String),

    /// The sensor answered but the body was not the expected JSON
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl FetchError {
    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::InvalidToken => "E_FETCH_TOKEN",
            FetchError::Unreachable(_) => "E_FETCH_UNREACHABLE",
            FetchError::MalformedResponse(_) => "E_FETCH_MALFORMED",
        }
    }

    /// Text shown in the transient notification.
    pub fn notification_text(&self) -> String {
        format!("Error: {}", self)
    }
}

impl From<HttpError> for FetchError {
    fn from(err: HttpError) -> Self {
        FetchError::Unreachable(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::MalformedResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(FetchError::InvalidToken.to_string(), "Invalid token!");
        assert_eq!(
            FetchError::Unreachable("connection refused".to_string()).to_string(),
            "Sensor unreachable: connection refused"
        );
        assert_eq!(
            FetchError::MalformedResponse("missing field `temp`".to_string()).to_string(),
            "Malformed response: missing field `temp`"
        );
    }

    #[test]
    fn test_notification_text_contains_error() {
        let text = FetchError::InvalidToken.notification_text();
        assert_eq!(text, "Error: Invalid token!");
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let codes = [
            FetchError::InvalidToken.error_code(),
            FetchError::Unreachable(String::new()).error_code(),
            FetchError::MalformedResponse(String::new()).error_code(),
        ];
        assert_ne!(codes[0], codes[1]);
        assert_ne!(codes[1], codes[2]);
        assert_ne!(codes[0], codes[2]);
    }

    #[test]
    fn test_from_http_error_is_unreachable() {
        let err: FetchError = HttpError::ConnectionFailed("refused".to_string()).into();
        assert!(matches!(err, FetchError::Unreachable(msg) if msg.contains("refused")));
    }

    #[test]
    fn test_from_json_error_is_malformed() {
        let json_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err: FetchError = json_err.into();
        assert!(matches!(err, FetchError::MalformedResponse(_)));
    }
}
