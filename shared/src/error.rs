//! Error types for the air quality Lambda.

use reqwest::StatusCode;
use serde_json::{json, Value};
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while proxying an air quality request.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP method other than GET or OPTIONS
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// `lat` or `lon` missing or empty
    #[error("Missing required parameters: lat and lon")]
    MissingCoordinates,

    /// OpenWeatherMap API key not configured
    #[error("Server configuration error: API key not set")]
    MissingApiKey,

    /// Upstream answered with a non-success status
    #[error("OpenWeatherMap API error: {}", reason_phrase(.0))]
    Upstream(StatusCode),

    /// Upstream body did not have the expected shape
    #[error("Unexpected upstream response: {0}")]
    UpstreamShape(String),

    /// Transport error talking to the upstream
    #[error("Upstream request failed: {0}")]
    Http(#[source] reqwest::Error),
}

impl From<reqwest::Error> for Error {
    /// Drops the request URL, which carries the API key in its query.
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.without_url())
    }
}

impl Error {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::MethodNotAllowed => 405,
            Error::MissingCoordinates => 400,
            Error::Upstream(status) => status.as_u16(),
            _ => 500,
        }
    }

    /// Whether this error is an unexpected failure rather than a known condition.
    pub fn is_internal(&self) -> bool {
        matches!(self, Error::UpstreamShape(_) | Error::Http(_))
    }

    /// JSON body returned to the caller.
    pub fn body(&self) -> Value {
        if self.is_internal() {
            json!({
                "error": "Internal server error",
                "message": self.to_string(),
            })
        } else {
            json!({ "error": self.to_string() })
        }
    }
}

/// Reason phrase for a status code, empty when the code has none.
pub fn reason_phrase(status: &StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("")
}
