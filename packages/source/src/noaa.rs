//! National Weather Service (NOAA) alerts and point metadata.
//!
//! Active alerts: <https://api.weather.gov/alerts/active/area/{state}>.
//! The NWS requires a User-Agent header on every request; the shared client
//! from [`crate::build_http_client`] sets one.

use hazard_map_domain_models::{AlertSeverity, WeatherAlert};
use serde_json::Value;

use crate::probe::{probe_str, probe_string};
use crate::SourceError;

/// Base URL for the NWS API.
pub const NOAA_API_URL: &str = "https://api.weather.gov";

/// Fetches the raw active-alerts payload for a state.
///
/// # Errors
///
/// Returns [`SourceError`] if the HTTP request or JSON decoding fails.
pub async fn fetch_active_alerts(
    client: &reqwest::Client,
    base_url: &str,
    state: &str,
) -> Result<Value, SourceError> {
    let url = format!("{base_url}/alerts/active/area/{state}");
    log::info!("Fetching NWS active alerts for {state}");
    let response = client.get(&url).send().await?;
    Ok(response.json().await?)
}

/// Fetches NWS gridpoint metadata for a coordinate.
///
/// Used by the diagnostics endpoint to confirm the points API responds;
/// the interesting fields are `properties.gridId`, `properties.cwa`, and
/// `properties.forecast`.
///
/// # Errors
///
/// Returns [`SourceError`] if the HTTP request or JSON decoding fails.
pub async fn fetch_point_metadata(
    client: &reqwest::Client,
    base_url: &str,
    lat: f64,
    lon: f64,
) -> Result<Value, SourceError> {
    let url = format!("{base_url}/points/{lat},{lon}");
    let response = client.get(&url).send().await?;
    Ok(response.json().await?)
}

/// Maps an active-alerts payload onto canonical [`WeatherAlert`] records.
///
/// A payload without a `features` array yields an empty list. Severities
/// outside the documented NWS set become `Moderate`, and the `areaDesc`
/// string is split on semicolons into an ordered area list.
#[must_use]
pub fn normalize_alerts(body: &Value) -> Vec<WeatherAlert> {
    let Some(features) = body.get("features").and_then(Value::as_array) else {
        return Vec::new();
    };

    features
        .iter()
        .map(|feature| {
            let props = &feature["properties"];
            WeatherAlert {
                id: probe_string(feature, &["id"], ""),
                event: probe_string(props, &["event"], ""),
                severity: AlertSeverity::from_upstream(probe_str(props, &["severity"]).unwrap_or("")),
                headline: probe_string(props, &["headline"], ""),
                description: probe_string(props, &["description"], ""),
                onset: probe_string(props, &["onset"], ""),
                expires: probe_string(props, &["expires"], ""),
                areas: probe_str(props, &["areaDesc"])
                    .map(|desc| desc.split(';').map(|area| area.trim().to_string()).collect())
                    .unwrap_or_default(),
            }
        })
        .collect()
}
