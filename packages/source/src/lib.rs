#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Upstream government API clients and response normalization.
//!
//! Each data provider (NOAA, FEMA, USGS, CMS, Census, NCES) gets a module
//! with a thin `fetch_*` HTTP wrapper and a pure normalizer that maps the
//! provider's JSON shape onto the canonical records in
//! [`hazard_map_domain_models`]. Normalizers never fail on missing fields —
//! absence becomes a default — so errors only propagate from the HTTP and
//! parse layer, where the caller's fallback generator catches them.

pub mod census;
pub mod cms;
pub mod fema;
pub mod nces;
pub mod noaa;
pub mod nri;
pub mod parsing;
pub mod probe;
pub mod usgs;

use std::time::Duration;

/// User-Agent sent on every upstream request. The NWS API rejects requests
/// without one.
pub const USER_AGENT: &str = "hazard-map/1.0 (ops@hazard-map.dev)";

/// Per-request timeout applied to every upstream call.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

/// Errors that can occur while fetching upstream data.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response parsed but did not have the expected shape.
    #[error("Unexpected response shape: {message}")]
    Shape {
        /// Description of what was missing.
        message: String,
    },
}

/// Builds the shared HTTP client used for all upstream calls.
///
/// # Errors
///
/// Returns [`SourceError`] if the TLS backend fails to initialize.
pub fn build_http_client() -> Result<reqwest::Client, SourceError> {
    Ok(reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(HTTP_TIMEOUT)
        .build()?)
}
