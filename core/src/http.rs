//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. The core builds `HttpRequest`
//! values and parses `HttpResponse` values without touching the network;
//! whoever executes the round-trip (the fetch layer's `Transport`, a test
//! harness, or a C host) sits between the two. The employee API is
//! read-only, so every request is a GET and requests carry only a URL.
//!
//! All fields use owned types (`String`) so values can cross the FFI
//! boundary without lifetime concerns.

use std::fmt;

/// An HTTP GET request described as plain data.
///
/// Built by `EmployeeClient::build_*` methods; the URL has already been
/// validated when a value of this type exists.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
}

/// An HTTP response described as plain data.
///
/// Constructed by the executing side after the round-trip, then passed to
/// `EmployeeClient::parse_*`. The status code is carried for diagnostics
/// only; outcome classification reads the body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Failure reported by the side executing a request: connection refused,
/// DNS failure, timeout. `body` carries any raw text that made it back
/// before the failure.
#[derive(Debug, Clone)]
pub struct TransportError {
    pub message: String,
    pub body: Option<String>,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.body {
            Some(body) => write!(f, "{}, body: {body}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for TransportError {}
