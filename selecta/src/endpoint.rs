//! # Request Boundary
//!
//! Transport-agnostic adapter between a JSON request body and a dispatch
//! entry point. It deserializes the body into a payload, calls the entry
//! point, and turns the outcome into a status code and a JSON body.
//!
//! | Outcome | Status | Body |
//! |---------|--------|------|
//! | handler result | 200 | the result as a JSON string |
//! | malformed body or unknown kind name | 400 | `{"error": "bad_request", ...}` |
//! | kind has no handler | 400 | `{"error": "unsupported_kind", ...}` |

use selecta_core::ResolveError;
use serde::de::DeserializeOwned;
use std::convert::Infallible;
use thiserror::Error;

/// Errors surfaced at the request boundary.
#[derive(Error, Debug)]
pub enum EndpointError {
    /// The body could not be deserialized into the payload.
    #[error("malformed request: {0}")]
    BadRequest(#[from] serde_json::Error),

    /// The payload named a kind without a handler.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

impl EndpointError {
    /// Stable machine-readable category.
    pub fn category(&self) -> &'static str {
        match self {
            EndpointError::BadRequest(_) => "bad_request",
            EndpointError::Resolve(ResolveError::UnsupportedKind { .. }) => "unsupported_kind",
        }
    }

    /// HTTP-equivalent status code.
    pub fn status_code(&self) -> u16 {
        match self {
            EndpointError::BadRequest(_) | EndpointError::Resolve(_) => 400,
        }
    }
}

impl From<Infallible> for EndpointError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// A serialized response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// HTTP-equivalent status code.
    pub status: u16,
    /// JSON body.
    pub body: String,
}

impl Response {
    /// A 200 response carrying `result` as a JSON string.
    pub fn ok(result: String) -> Self {
        Self {
            status: 200,
            body: serde_json::Value::String(result).to_string(),
        }
    }

    /// An error response with the error's status and category.
    pub fn error(err: &EndpointError) -> Self {
        Self {
            status: err.status_code(),
            body: serde_json::json!({
                "error": err.category(),
                "message": err.to_string(),
            })
            .to_string(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Deserialize `body`, run `call` on the payload and serialize the outcome.
pub fn respond<P, E, F>(body: &str, call: F) -> Response
where
    P: DeserializeOwned,
    E: Into<EndpointError>,
    F: FnOnce(P) -> Result<String, E>,
{
    let outcome = serde_json::from_str::<P>(body)
        .map_err(EndpointError::from)
        .and_then(|payload| call(payload).map_err(Into::into));

    match outcome {
        Ok(result) => Response::ok(result),
        Err(err) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(category = err.category(), error = %err, "request rejected");
            Response::error(&err)
        }
    }
}
