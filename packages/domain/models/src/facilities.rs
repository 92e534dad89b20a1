//! Hospital and shelter facility snapshots.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A hospital near a dashboard location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalRecord {
    /// CMS facility/provider identifier.
    pub id: String,
    /// Facility name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Two-letter state abbreviation.
    pub state: String,
    /// ZIP code.
    pub zip: String,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lon: f64,
    /// Staffed bed count.
    pub beds: u32,
    /// Trauma center designation ("Level I"-"Level III"), when designated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trauma_level: Option<String>,
    /// Whether the facility operates an emergency department.
    pub emergency_services: bool,
    /// Main phone number.
    pub phone: String,
}

/// Operational status of an emergency shelter.
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
pub enum ShelterStatus {
    /// Accepting occupants.
    Open,
    /// Not currently operating.
    Closed,
    /// Operating at capacity.
    Full,
}

/// An emergency shelter near a dashboard location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelterRecord {
    /// Shelter identifier.
    pub id: String,
    /// Shelter name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Two-letter state abbreviation.
    pub state: String,
    /// ZIP code.
    pub zip: String,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lon: f64,
    /// Maximum occupancy.
    pub capacity: u32,
    /// Operational status.
    pub status: ShelterStatus,
    /// Contact phone, when published.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Whether the shelter accommodates special medical needs.
    pub special_needs: bool,
}
