#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Canonical record shapes for the hazard map system.
//!
//! Every upstream data provider (NOAA, FEMA, USGS, CMS, Census, NCES)
//! normalizes its source-specific payloads into these shared types, and the
//! fallback generators produce records of the exact same shapes. Records are
//! flat, request-scoped snapshots: none persist and none are mutated after
//! creation.

mod alerts;
mod demographics;
mod disasters;
mod facilities;
mod grants;
mod predictions;
mod quakes;
mod risk;
mod schools;

pub use alerts::{AlertSeverity, WeatherAlert};
pub use demographics::DemographicsRecord;
pub use disasters::{
    ACTIVE_WINDOW_DAYS, DeclarationType, DisasterRecord, DisasterStatus, HistoricalDisasterBucket,
    HISTORY_YEAR_MAX, HISTORY_YEAR_MIN,
};
pub use facilities::{HospitalRecord, ShelterRecord, ShelterStatus};
pub use grants::{GrantRecord, GrantStatus};
pub use predictions::{Prediction, TrendDirection};
pub use quakes::{EarthquakeEvent, SIGNIFICANT_MAGNITUDE};
pub use risk::{HazardScores, RiskIndexRecord};
pub use schools::SchoolDistrictRecord;
