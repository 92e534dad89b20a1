//! Earthquake event shape normalized from the USGS FDSN event feed.

use serde::{Deserialize, Serialize};

/// Magnitude at or above which an event is considered significant by the
/// display layer.
pub const SIGNIFICANT_MAGNITUDE: f64 = 4.0;

/// One earthquake within the query radius of a dashboard location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarthquakeEvent {
    /// USGS event identifier.
    pub id: String,
    /// Moment magnitude.
    pub magnitude: f64,
    /// Human-readable place description (e.g., "12km NE of Ridgecrest, CA").
    pub place: String,
    /// Event time as epoch milliseconds.
    pub time: i64,
    /// Hypocenter depth in kilometers.
    pub depth: f64,
    /// Epicenter latitude.
    pub lat: f64,
    /// Epicenter longitude.
    pub lon: f64,
    /// USGS event page URL.
    pub url: String,
    /// Whether a tsunami flag was raised for this event.
    pub tsunami: bool,
    /// Number of "did you feel it" reports, when any were filed.
    pub felt: Option<u64>,
}
