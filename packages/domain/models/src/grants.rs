//! Emergency Management Performance Grant (EMPG) record.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Lifecycle status of a grant award.
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
pub enum GrantStatus {
    /// Funds are being disbursed.
    Active,
    /// Award period has ended.
    Closed,
    /// Awarded but not yet disbursing.
    Pending,
}

impl GrantStatus {
    /// Parses an upstream status string, defaulting to [`Self::Active`] for
    /// unrecognized values.
    #[must_use]
    pub fn from_upstream(raw: &str) -> Self {
        raw.parse().unwrap_or(Self::Active)
    }
}

/// One EMPG award to a state emergency management agency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantRecord {
    /// Grant identifier.
    pub id: String,
    /// Grant or project title.
    pub grant_name: String,
    /// Federal fiscal year of the award.
    pub fiscal_year: i32,
    /// Two-letter state abbreviation.
    pub state: String,
    /// Federal cost share in USD.
    pub federal_share: f64,
    /// State cost share in USD.
    pub state_share: f64,
    /// Award status.
    pub status: GrantStatus,
    /// Program areas the award funds (e.g., "Planning", "Training").
    pub program_areas: Vec<String>,
}
