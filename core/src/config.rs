//! Endpoint configuration for the employee directory API.
//!
//! The configuration is a small JSON map bundled with the embedding
//! application (base URL plus the two path segments). It is loaded once at
//! startup and held immutable for the session; fetchers receive it
//! explicitly rather than reading ambient global state. Load failure is
//! terminal — there is no fallback configuration and no retry.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Base URL and path templates for the employee endpoints.
///
/// Key names match the bundled resource format of the original host
/// application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    #[serde(rename = "baseURL")]
    pub base_url: String,
    #[serde(rename = "apiEmployeesList")]
    pub employees_list: String,
    #[serde(rename = "apiEmployeeDetails")]
    pub employee_details: String,
}

impl ApiConfig {
    /// Parse a configuration resource the host has already read into memory.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigError> {
        serde_json::from_slice(bytes).map_err(|e| ConfigError::Unreadable(e.to_string()))
    }

    /// Read and parse the configuration resource at `path`.
    ///
    /// A missing file and a malformed file fail the same way: the resource
    /// is unreadable and no fetch can proceed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let bytes = fs::read(path)
            .map_err(|e| ConfigError::Unreadable(format!("{}: {e}", path.display())))?;
        Self::from_json(&bytes)
    }
}
