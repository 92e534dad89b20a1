#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the hazard map server.
//!
//! These types are serialized to JSON for the REST API. Proxy endpoints
//! re-serve upstream payloads mostly as-is, so only the envelope types
//! live here.

use serde::{Deserialize, Serialize};

/// Query parameters for endpoints that require a state.
#[derive(Debug, Clone, Deserialize)]
pub struct StateQuery {
    /// Two-letter state abbreviation. Required; its absence is a 400.
    pub state: Option<String>,
}

/// Query parameters for the diagnostic endpoints, where the state defaults
/// to California.
#[derive(Debug, Clone, Deserialize)]
pub struct TestQuery {
    /// Two-letter state abbreviation, defaulting to `"CA"`.
    pub state: Option<String>,
}

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}
