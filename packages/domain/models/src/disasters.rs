//! FEMA disaster declaration types and the historical aggregation bucket.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Days a declaration counts as active after its declared date.
pub const ACTIVE_WINDOW_DAYS: i64 = 365;

/// First year kept by the historical aggregation.
pub const HISTORY_YEAR_MIN: i32 = 2019;

/// Last year kept by the historical aggregation.
pub const HISTORY_YEAR_MAX: i32 = 2024;

/// Estimated people affected per declared disaster.
const AFFECTED_PER_DISASTER: u64 = 25_000;

/// Estimated economic impact (USD) per declared disaster.
const ECONOMIC_PER_DISASTER: u64 = 50_000_000;

/// FEMA declaration category, derived from the two-letter declaration code.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum DeclarationType {
    /// `DR` — Major Disaster Declaration.
    #[serde(rename = "Major Disaster")]
    #[strum(serialize = "Major Disaster")]
    MajorDisaster,
    /// `EM` — Emergency Declaration.
    Emergency,
    /// `FM` — Fire Management Assistance Declaration.
    #[serde(rename = "Fire Management")]
    #[strum(serialize = "Fire Management")]
    FireManagement,
    /// Any other declaration code.
    Other,
}

impl DeclarationType {
    /// Maps a FEMA `declarationType` code (`"DR"`, `"EM"`, `"FM"`, ...) to
    /// the derived category.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "DR" => Self::MajorDisaster,
            "EM" => Self::Emergency,
            "FM" => Self::FireManagement,
            _ => Self::Other,
        }
    }
}

/// Whether a declaration is still considered active.
///
/// This is a pure function of the declared date against the supplied clock
/// reading: nothing about it is stored upstream.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum DisasterStatus {
    /// Declared within the last [`ACTIVE_WINDOW_DAYS`] days.
    Active,
    /// Older than the active window, or missing a declared date entirely.
    Closed,
}

impl DisasterStatus {
    /// Derives the status from a declared date and the current time.
    ///
    /// A missing or unparseable declared date yields [`Self::Closed`].
    #[must_use]
    pub fn from_declared(declared: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        match declared {
            Some(date) if now.signed_duration_since(date) <= TimeDelta::days(ACTIVE_WINDOW_DAYS) => {
                Self::Active
            }
            _ => Self::Closed,
        }
    }
}

/// A single FEMA disaster declaration normalized to the canonical shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisasterRecord {
    /// Disaster number or FEMA declaration string.
    pub id: String,
    /// Derived declaration category.
    #[serde(rename = "type")]
    pub declaration_type: DeclarationType,
    /// Declaration title, falling back to the incident type upstream.
    pub title: String,
    /// Two-letter state abbreviation.
    pub state: String,
    /// Designated area. `"Multiple Counties"` when the declaration is not
    /// county-scoped.
    pub county: String,
    /// When the declaration was issued. `None` when the source record has a
    /// missing or unparseable date field.
    pub declared_date: Option<DateTime<Utc>>,
    /// FEMA incident type (e.g., "Flood", "Hurricane").
    pub incident_type: String,
    /// Derived active/closed status.
    pub status: DisasterStatus,
    /// When the incident itself began.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_begin_date: Option<DateTime<Utc>>,
    /// When the incident ended, if it has.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_end_date: Option<DateTime<Utc>>,
    /// Sequential FEMA disaster number, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disaster_number: Option<u64>,
}

/// Declarations aggregated by (year, incident type) for trend analysis.
///
/// Population and economic figures are flat per-disaster estimates, not
/// reported values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalDisasterBucket {
    /// Declaration year.
    pub year: i32,
    /// FEMA incident type.
    #[serde(rename = "type")]
    pub incident_type: String,
    /// Number of declarations of this type in this year.
    pub count: u32,
    /// Estimated affected population (`count` × 25,000).
    pub affected_population: u64,
    /// Estimated economic impact in USD (`count` × 50,000,000).
    pub economic_impact: u64,
}

impl HistoricalDisasterBucket {
    /// Builds a bucket from a raw declaration count, applying the flat
    /// per-disaster estimates.
    #[must_use]
    pub fn from_count(year: i32, incident_type: String, count: u32) -> Self {
        Self {
            year,
            incident_type,
            count,
            affected_population: u64::from(count) * AFFECTED_PER_DISASTER,
            economic_impact: u64::from(count) * ECONOMIC_PER_DISASTER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_code_mapping() {
        assert_eq!(DeclarationType::from_code("DR"), DeclarationType::MajorDisaster);
        assert_eq!(DeclarationType::from_code("EM"), DeclarationType::Emergency);
        assert_eq!(DeclarationType::from_code("FM"), DeclarationType::FireManagement);
        assert_eq!(DeclarationType::from_code("SB"), DeclarationType::Other);
        assert_eq!(DeclarationType::from_code(""), DeclarationType::Other);
    }

    #[test]
    fn declaration_type_display_strings() {
        assert_eq!(DeclarationType::MajorDisaster.to_string(), "Major Disaster");
        assert_eq!(DeclarationType::Emergency.to_string(), "Emergency");
        assert_eq!(DeclarationType::FireManagement.to_string(), "Fire Management");
    }

    #[test]
    fn recent_declaration_is_active() {
        let now = Utc::now();
        let declared = now - TimeDelta::days(10);
        assert_eq!(
            DisasterStatus::from_declared(Some(declared), now),
            DisasterStatus::Active
        );
    }

    #[test]
    fn old_declaration_is_closed() {
        let now = Utc::now();
        let declared = now - TimeDelta::days(400);
        assert_eq!(
            DisasterStatus::from_declared(Some(declared), now),
            DisasterStatus::Closed
        );
    }

    #[test]
    fn missing_declared_date_is_closed() {
        assert_eq!(
            DisasterStatus::from_declared(None, Utc::now()),
            DisasterStatus::Closed
        );
    }

    #[test]
    fn bucket_estimates_scale_with_count() {
        let bucket = HistoricalDisasterBucket::from_count(2023, "Flood".to_string(), 15);
        assert_eq!(bucket.affected_population, 375_000);
        assert_eq!(bucket.economic_impact, 750_000_000);
    }
}
