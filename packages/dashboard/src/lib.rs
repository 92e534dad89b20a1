#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Infallible domain accessors and the concurrent dashboard load.
//!
//! Each accessor fetches one domain through [`hazard_map_source`], and on
//! any failure — or an empty-but-successful result — substitutes records
//! from [`hazard_map_fallback`] instead of propagating an error. Callers
//! therefore never branch on missing data; they branch, if they care, on
//! the [`DataOrigin`] label that says whether a section is live or
//! generated.

pub mod accessors;

use chrono::{DateTime, Utc};
use hazard_map_domain_models::{
    DemographicsRecord, DisasterRecord, EarthquakeEvent, GrantRecord, HistoricalDisasterBucket,
    HospitalRecord, Prediction, RiskIndexRecord, SchoolDistrictRecord, ShelterRecord, WeatherAlert,
};
use hazard_map_fallback::StateProfiles;
use serde::{Deserialize, Serialize};

/// The location a dashboard load is scoped to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Two-letter state abbreviation.
    pub state: String,
    /// Selected city name.
    pub city: String,
    /// City latitude.
    pub lat: f64,
    /// City longitude.
    pub lon: f64,
}

/// Whether a section holds live upstream data or generated records.
///
/// Fallback output used to be indistinguishable from live data in the
/// interface contract; this label makes the substitution honest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataOrigin {
    /// Normalized records from the upstream API.
    Live,
    /// Generated records substituted after a failure or empty response.
    Fallback,
}

/// A dashboard section together with its origin label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sourced<T> {
    /// Where the data came from.
    pub origin: DataOrigin,
    /// The section payload.
    pub data: T,
}

impl<T> Sourced<T> {
    /// Wraps live upstream data.
    pub const fn live(data: T) -> Self {
        Self {
            origin: DataOrigin::Live,
            data,
        }
    }

    /// Wraps generated fallback data.
    pub const fn fallback(data: T) -> Self {
        Self {
            origin: DataOrigin::Fallback,
            data,
        }
    }
}

/// Everything one dashboard load produces.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    /// The location the load was scoped to.
    pub location: Location,
    /// Active weather alerts.
    pub alerts: Sourced<Vec<WeatherAlert>>,
    /// Current disaster declarations.
    pub disasters: Sourced<Vec<DisasterRecord>>,
    /// Historical declaration buckets feeding the trend estimator.
    pub historical: Sourced<Vec<HistoricalDisasterBucket>>,
    /// Recent earthquakes near the location.
    pub earthquakes: Sourced<Vec<EarthquakeEvent>>,
    /// County risk index records.
    pub risk_index: Sourced<Vec<RiskIndexRecord>>,
    /// Hospitals in the state.
    pub hospitals: Sourced<Vec<HospitalRecord>>,
    /// Emergency shelters near the city.
    pub shelters: Sourced<Vec<ShelterRecord>>,
    /// School districts in the state.
    pub school_districts: Sourced<Vec<SchoolDistrictRecord>>,
    /// State-wide demographics.
    pub demographics: Sourced<DemographicsRecord>,
    /// EMPG grant awards.
    pub grants: Sourced<Vec<GrantRecord>>,
    /// Per-incident-type trend predictions derived from `historical`.
    pub predictions: Vec<Prediction>,
    /// When this load completed.
    pub last_updated: DateTime<Utc>,
}

/// Fans out every domain fetch concurrently and assembles the view state.
///
/// The batch has a single suspend point; an individual failure is absorbed
/// by that accessor's fallback and never aborts the batch. Nothing is
/// retried.
pub async fn load_dashboard(
    client: &reqwest::Client,
    profiles: &StateProfiles,
    location: &Location,
) -> DashboardData {
    let Location {
        state,
        city,
        lat,
        lon,
    } = location;

    let (
        alerts,
        disasters,
        historical,
        earthquakes,
        risk_index,
        hospitals,
        shelters,
        school_districts,
        demographics,
        grants,
    ) = futures::join!(
        accessors::weather_alerts(client, state),
        accessors::disaster_declarations(client, state),
        accessors::historical_disasters(client, state),
        accessors::earthquakes(client, city, *lat, *lon),
        accessors::risk_index(client, profiles, state),
        accessors::hospitals(client, profiles, state, city),
        accessors::shelters(client, profiles, state, city),
        accessors::school_districts(client, profiles, state),
        accessors::demographics(client, profiles, state),
        accessors::grants(client, state),
    );

    let predictions =
        hazard_map_analytics::generate_predictions(&historical.data, &mut rand::thread_rng());

    DashboardData {
        location: location.clone(),
        alerts,
        disasters,
        historical,
        earthquakes,
        risk_index,
        hospitals,
        shelters,
        school_districts,
        demographics,
        grants,
        predictions,
        last_updated: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_labels_serialize_lowercase() {
        let section = Sourced::fallback(vec![1, 2]);
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["origin"], "fallback");
        assert_eq!(json["data"], serde_json::json!([1, 2]));

        let section = Sourced::live(3);
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["origin"], "live");
    }

    #[test]
    fn location_round_trips() {
        let location = Location {
            state: "CA".to_string(),
            city: "Los Angeles".to_string(),
            lat: 34.0522,
            lon: -118.2437,
        };
        let json = serde_json::to_string(&location).unwrap();
        let back: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(back, location);
    }
}
