//! USGS earthquake catalog (FDSN event service).
//!
//! Queries the last 30 days of events within a radius of the dashboard
//! location, filtered to magnitude 2.5 and above.
//! See <https://earthquake.usgs.gov/fdsnws/event/1/>.

use chrono::{DateTime, TimeDelta, Utc};
use hazard_map_domain_models::EarthquakeEvent;
use serde_json::Value;

use crate::probe::{probe_f64, probe_string, probe_u64};
use crate::SourceError;

/// Base URL for the FDSN event query endpoint.
pub const USGS_API_URL: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query";

/// Minimum magnitude requested upstream.
pub const MIN_MAGNITUDE: f64 = 2.5;

/// How far back the event query reaches.
const LOOKBACK_DAYS: i64 = 30;

/// Maximum events requested per query.
const MAX_RESULTS: u32 = 100;

/// Fetches recent earthquakes within `radius_km` of a coordinate.
///
/// # Errors
///
/// Returns [`SourceError`] if the HTTP request or JSON decoding fails.
pub async fn fetch_earthquakes(
    client: &reqwest::Client,
    base_url: &str,
    lat: f64,
    lon: f64,
    radius_km: f64,
    now: DateTime<Utc>,
) -> Result<Value, SourceError> {
    let starttime = (now - TimeDelta::days(LOOKBACK_DAYS))
        .format("%Y-%m-%d")
        .to_string();
    log::info!("Fetching USGS earthquakes within {radius_km}km of {lat},{lon}");
    let response = client
        .get(base_url)
        .query(&[
            ("format", "geojson".to_string()),
            ("starttime", starttime),
            ("latitude", lat.to_string()),
            ("longitude", lon.to_string()),
            ("maxradiuskm", radius_km.to_string()),
            ("minmagnitude", MIN_MAGNITUDE.to_string()),
            ("orderby", "time".to_string()),
            ("limit", MAX_RESULTS.to_string()),
        ])
        .send()
        .await?;
    Ok(response.json().await?)
}

/// Maps a USGS GeoJSON payload onto canonical [`EarthquakeEvent`]s.
///
/// GeoJSON coordinates are `[longitude, latitude, depth]`; event time is
/// epoch milliseconds.
#[must_use]
pub fn normalize_earthquakes(body: &Value) -> Vec<EarthquakeEvent> {
    let Some(features) = body.get("features").and_then(Value::as_array) else {
        return Vec::new();
    };

    features
        .iter()
        .map(|feature| {
            let props = &feature["properties"];
            let coords = feature["geometry"]["coordinates"]
                .as_array()
                .map_or(&[] as &[Value], Vec::as_slice);
            let coord = |idx: usize| coords.get(idx).and_then(Value::as_f64).unwrap_or(0.0);

            EarthquakeEvent {
                id: probe_string(feature, &["id"], ""),
                magnitude: probe_f64(props, &["mag"]),
                place: probe_string(props, &["place"], ""),
                time: props.get("time").and_then(Value::as_i64).unwrap_or(0),
                depth: coord(2),
                lat: coord(1),
                lon: coord(0),
                url: probe_string(props, &["url"], ""),
                tsunami: probe_u64(props, &["tsunami"]) != 0,
                felt: props.get("felt").and_then(Value::as_u64),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn quake_payload() -> Value {
        json!({
            "features": [
                {
                    "id": "ci40462424",
                    "properties": {
                        "mag": 4.2,
                        "place": "12km NE of Ridgecrest, CA",
                        "time": 1_717_000_000_000_i64,
                        "url": "https://earthquake.usgs.gov/earthquakes/eventpage/ci40462424",
                        "tsunami": 0,
                        "felt": 312
                    },
                    "geometry": {"coordinates": [-117.52, 35.71, 8.3]}
                },
                {
                    "id": "ci40462425",
                    "properties": {
                        "mag": 2.6,
                        "place": "5km S of Trona, CA",
                        "time": 1_717_100_000_000_i64,
                        "tsunami": 1,
                        "felt": null
                    },
                    "geometry": {"coordinates": [-117.37, 35.72, 2.1]}
                }
            ]
        })
    }

    #[test]
    fn maps_geojson_features() {
        let quakes = normalize_earthquakes(&quake_payload());
        assert_eq!(quakes.len(), 2);
        assert!((quakes[0].magnitude - 4.2).abs() < f64::EPSILON);
        assert!((quakes[0].lat - 35.71).abs() < f64::EPSILON);
        assert!((quakes[0].lon - -117.52).abs() < f64::EPSILON);
        assert!((quakes[0].depth - 8.3).abs() < f64::EPSILON);
        assert_eq!(quakes[0].felt, Some(312));
        assert!(!quakes[0].tsunami);
        assert!(quakes[1].tsunami);
        assert_eq!(quakes[1].felt, None);
    }

    #[test]
    fn missing_features_yield_empty() {
        assert!(normalize_earthquakes(&json!({"metadata": {}})).is_empty());
    }
}
