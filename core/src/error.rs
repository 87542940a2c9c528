//! Error types for the employee directory client.
//!
//! # Design
//! `RateLimited` gets a dedicated variant because the upstream API throttles
//! aggressively and callers show it as-is; it is detected by a substring
//! match on the raw body, applied only after JSON decoding has failed.
//! `ServerReported` carries the envelope's `message` field verbatim — that
//! string is the user-facing error whenever the server answers without data.
//! Every variant displays as a string suitable for direct presentation.

use std::fmt;

/// Errors from loading the endpoint configuration resource.
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration resource is missing or malformed. Terminal: no
    /// fetch can proceed without a readable configuration.
    Unreadable(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Unreadable(detail) => {
                write!(f, "unable to read API configuration: {detail}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors returned by the fetch pipeline. All are terminal for the
/// triggering fetch; the client never retries on its own.
#[derive(Debug)]
pub enum FetchError {
    /// The request URL built from the configuration did not parse.
    InvalidUrl(String),

    /// The transport failed before a response body could be interpreted.
    /// `body` carries whatever raw text the transport captured, if any.
    Transport {
        message: String,
        body: Option<String>,
    },

    /// The response body failed to decode and contained the literal
    /// substring `Too Many Requests`.
    RateLimited,

    /// The response body failed to decode as an envelope; carries the
    /// decoder's message and the raw body text.
    DecodeFailed { message: String, body: String },

    /// The envelope decoded but carried no data; the server's `message`
    /// field is the authoritative error.
    ServerReported(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::InvalidUrl(url) => write!(f, "invalid URL: {url}"),
            FetchError::Transport { message, body } => match body {
                Some(body) => write!(f, "transport error: {message}, body: {body}"),
                None => write!(f, "transport error: {message}"),
            },
            FetchError::RateLimited => write!(f, "Too Many Requests"),
            FetchError::DecodeFailed { message, body } => {
                write!(f, "error decoding response: {message}, body: {body}")
            }
            FetchError::ServerReported(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<crate::http::TransportError> for FetchError {
    fn from(err: crate::http::TransportError) -> Self {
        FetchError::Transport {
            message: err.message,
            body: err.body,
        }
    }
}
