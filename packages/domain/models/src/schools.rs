//! School district snapshot aggregated from the NCES school directory.

use serde::{Deserialize, Serialize};

/// One school district, rolled up from its member schools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolDistrictRecord {
    /// NCES local education agency identifier.
    pub id: String,
    /// District name.
    pub district_name: String,
    /// County name.
    pub county: String,
    /// Two-letter state abbreviation.
    pub state: String,
    /// Number of schools in the district.
    pub total_schools: u32,
    /// Total enrollment across the district's schools.
    pub total_students: u64,
    /// Emergency coordination phone number.
    pub emergency_contact: String,
    /// Whether district facilities can serve as emergency shelters.
    pub shelter_capable: bool,
    /// Latitude of the district's first listed school, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    /// Longitude of the district's first listed school, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}
