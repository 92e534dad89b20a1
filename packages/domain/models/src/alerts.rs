//! Weather alert types normalized from the NOAA active-alerts feed.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Severity of a weather alert, as reported by the National Weather Service.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum AlertSeverity {
    /// Extraordinary threat to life or property.
    Extreme,
    /// Significant threat to life or property.
    Severe,
    /// Possible threat to life or property.
    Moderate,
    /// Minimal to no known threat.
    Minor,
}

impl AlertSeverity {
    /// Parses an upstream severity string.
    ///
    /// The NWS occasionally reports severities outside the documented set
    /// (`"Unknown"`, empty strings); those all map to [`Self::Moderate`].
    #[must_use]
    pub fn from_upstream(raw: &str) -> Self {
        raw.parse().unwrap_or(Self::Moderate)
    }
}

/// An active weather alert for a state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherAlert {
    /// Upstream alert identifier (NWS alert URN).
    pub id: String,
    /// Event name (e.g., "Severe Thunderstorm Warning").
    pub event: String,
    /// Alert severity.
    pub severity: AlertSeverity,
    /// One-line summary issued by the NWS office.
    pub headline: String,
    /// Full alert text.
    pub description: String,
    /// When the alert takes effect (ISO 8601, as issued upstream).
    pub onset: String,
    /// When the alert expires (ISO 8601, as issued upstream).
    pub expires: String,
    /// Affected area names, in the order the NWS lists them.
    pub areas: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_severities() {
        assert_eq!(AlertSeverity::from_upstream("Extreme"), AlertSeverity::Extreme);
        assert_eq!(AlertSeverity::from_upstream("Severe"), AlertSeverity::Severe);
        assert_eq!(AlertSeverity::from_upstream("Moderate"), AlertSeverity::Moderate);
        assert_eq!(AlertSeverity::from_upstream("Minor"), AlertSeverity::Minor);
    }

    #[test]
    fn unknown_severity_defaults_to_moderate() {
        assert_eq!(AlertSeverity::from_upstream("Unknown"), AlertSeverity::Moderate);
        assert_eq!(AlertSeverity::from_upstream(""), AlertSeverity::Moderate);
        assert_eq!(AlertSeverity::from_upstream("severe"), AlertSeverity::Moderate);
    }
}
