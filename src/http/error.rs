//! Error types for outbound HTTP calls.
//!
//! [`HttpError`] merges the two independent failure sources a call can hit:
//! transport-level failures and error lists embedded in otherwise successful
//! response bodies.

use thiserror::Error;

use super::types::ErrorEntry;

#[derive(Debug, Error)]
pub enum HttpError {
    /// Network or connection failure (refused, timeout, DNS, TLS).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Joining the base URL with a request path produced an invalid URL.
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// A configured header key is not a valid header name.
    #[error("Invalid header name: {0}")]
    HeaderName(#[from] reqwest::header::InvalidHeaderName),

    /// A configured header value cannot be encoded.
    #[error("Invalid header value: {0}")]
    HeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    /// The server answered with a non-success status code.
    #[error("Server error {status}: {body}")]
    Server {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body could not be decoded into the requested type.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The transport succeeded but the body carried a non-empty error list.
    ///
    /// `message` is the first entry's `error` field and is what `Display`
    /// shows; the full list is retained for callers that want more than the
    /// first message.
    #[error("{message}")]
    Upstream {
        message: String,
        errors: Vec<ErrorEntry>,
    },
}
