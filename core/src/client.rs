//! Stateless HTTP request builder and response parser for the employee API.
//!
//! # Design
//! `EmployeeClient` holds only the immutable endpoint configuration and
//! carries no mutable state between calls. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`; whoever executes the round-trip sits
//! between the two, keeping this module deterministic and free of I/O.
//!
//! Classification order on parse: decode the envelope; if decoding fails
//! and the raw body contains `Too Many Requests`, report rate limiting,
//! otherwise report the decode failure with the raw body attached; if
//! decoding succeeds without data, the envelope's message is the error.
//! The HTTP status code is never consulted — the upstream API reports
//! failures inside the envelope or as non-JSON bodies.

use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Employee, Envelope, Payload};

/// Marker the upstream API embeds in throttled (non-JSON) response bodies.
const RATE_LIMIT_MARKER: &str = "Too Many Requests";

/// Stateless client for the employee directory API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`; the `fetch` module does this
/// on a background worker for Rust callers.
#[derive(Debug, Clone)]
pub struct EmployeeClient {
    config: ApiConfig,
}

impl EmployeeClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Build the request for the employee collection endpoint.
    pub fn build_list_employees(&self) -> Result<HttpRequest, FetchError> {
        let url = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.employees_list
        );
        validated(url)
    }

    /// Build the request for a single employee's details.
    pub fn build_employee_details(&self, id: u64) -> Result<HttpRequest, FetchError> {
        let url = format!(
            "{}/{}/{id}",
            self.config.base_url.trim_end_matches('/'),
            self.config.employee_details
        );
        validated(url)
    }

    /// Parse a response from the employee collection endpoint.
    pub fn parse_list_employees(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<Employee>, FetchError> {
        let envelope: Envelope<Vec<Employee>> = decode_envelope(&response.body)?;
        into_result(envelope)
    }

    /// Parse a response from the employee details endpoint.
    pub fn parse_employee_details(&self, response: HttpResponse) -> Result<Employee, FetchError> {
        let envelope: Envelope<Employee> = decode_envelope(&response.body)?;
        into_result(envelope)
    }
}

fn validated(url: String) -> Result<HttpRequest, FetchError> {
    match Url::parse(&url) {
        Ok(_) => Ok(HttpRequest { url }),
        Err(_) => Err(FetchError::InvalidUrl(url)),
    }
}

/// Decode an envelope body, classifying failures.
///
/// The rate-limit check runs only when decoding has already failed: a
/// well-formed envelope whose message happens to contain the marker still
/// decodes normally.
fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<Envelope<T>, FetchError> {
    serde_json::from_str(body).map_err(|err| {
        if body.contains(RATE_LIMIT_MARKER) {
            FetchError::RateLimited
        } else {
            FetchError::DecodeFailed {
                message: err.to_string(),
                body: body.to_string(),
            }
        }
    })
}

fn into_result<T>(envelope: Envelope<T>) -> Result<T, FetchError> {
    match envelope.payload {
        Payload::Data(data) => Ok(data),
        Payload::Error(message) => Err(FetchError::ServerReported(message)),
    }
}
