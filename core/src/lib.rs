//! Client core for the employee directory REST API.
//!
//! # Overview
//! Builds `HttpRequest` values and classifies `HttpResponse` values for the
//! two employee endpoints (collection and single-record) without touching
//! the network itself. Real I/O plugs in behind the `fetch::Transport`
//! seam, and the `fetch` module runs one background worker per call with a
//! channel handoff, so the embedding host's context is never blocked.
//!
//! # Design
//! - `EmployeeClient` is stateless — it holds only the immutable
//!   `ApiConfig` loaded once at startup.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Response envelopes decode into a sum type: either the data or the
//!   server's message, never two nullable fields.
//! - Types use owned `String` / `Vec` fields to simplify FFI mapping.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod http;
pub mod types;

pub use client::EmployeeClient;
pub use config::ApiConfig;
pub use error::{ConfigError, FetchError};
pub use fetch::{fetch_employee_details, fetch_list_employees, FetchHandle, FetchState, Transport};
pub use http::{HttpRequest, HttpResponse, TransportError};
pub use types::{Employee, Envelope, Payload};
