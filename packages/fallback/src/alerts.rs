//! Synthetic weather alerts.

use chrono::{DateTime, TimeDelta, Utc};
use hazard_map_domain_models::{AlertSeverity, WeatherAlert};

/// The fixed two-alert set shown when the NWS feed fails or is empty.
#[must_use]
pub fn weather_alerts(state: &str, now: DateTime<Utc>) -> Vec<WeatherAlert> {
    vec![
        WeatherAlert {
            id: "1".to_string(),
            event: "Severe Thunderstorm Warning".to_string(),
            severity: AlertSeverity::Severe,
            headline: format!("Severe Thunderstorm Warning for {state}"),
            description: "The National Weather Service has issued a Severe Thunderstorm Warning."
                .to_string(),
            onset: now.to_rfc3339(),
            expires: (now + TimeDelta::hours(1)).to_rfc3339(),
            areas: vec!["Central Region".to_string()],
        },
        WeatherAlert {
            id: "2".to_string(),
            event: "Flood Watch".to_string(),
            severity: AlertSeverity::Moderate,
            headline: "Flood Watch in effect".to_string(),
            description: "Heavy rainfall may cause flooding in low-lying areas.".to_string(),
            onset: now.to_rfc3339(),
            expires: (now + TimeDelta::hours(24)).to_rfc3339(),
            areas: vec!["Coastal Areas".to_string()],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_alerts_with_fixed_severities() {
        let alerts = weather_alerts("ZZ", Utc::now());
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].severity, AlertSeverity::Severe);
        assert_eq!(alerts[1].severity, AlertSeverity::Moderate);
        assert!(alerts[0].headline.contains("ZZ"));
    }

    #[test]
    fn expiry_follows_onset() {
        let now = Utc::now();
        let alerts = weather_alerts("CA", now);
        assert_eq!(alerts[0].onset, now.to_rfc3339());
        assert_eq!(alerts[0].expires, (now + TimeDelta::hours(1)).to_rfc3339());
        assert_eq!(alerts[1].expires, (now + TimeDelta::hours(24)).to_rfc3339());
    }
}
