//! State-level demographics snapshot from the Census ACS 5-year estimates.

use serde::{Deserialize, Serialize};

/// Population and household indicators for a state.
///
/// The last four fields are derived fractions of the total population, not
/// separate ACS variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemographicsRecord {
    /// Two-letter state abbreviation.
    pub state: String,
    /// Geographic scope label (always `"State-wide"` for state queries).
    pub county: String,
    /// Total population (ACS B01003).
    pub total_population: u64,
    /// Occupied housing units (ACS B25002).
    pub households: u64,
    /// Total housing units (ACS B25001).
    pub housing_units: u64,
    /// Median age (ACS B01002).
    pub median_age: f64,
    /// Median household income in USD (ACS B19013).
    pub median_income: f64,
    /// Population below the poverty line (ACS B17001).
    pub poverty_line: u64,
    /// Unemployment as a percentage of total population.
    pub unemployment_rate: f64,
    /// Estimated residents aged 65 and older.
    pub seniors_65_plus: u64,
    /// Estimated children under five.
    pub children_under_5: u64,
    /// Estimated residents with a disability.
    pub disability: u64,
}
