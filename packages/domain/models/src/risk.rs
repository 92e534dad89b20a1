//! FEMA National Risk Index county record.

use serde::{Deserialize, Serialize};

/// Per-peril risk scores from the National Risk Index.
///
/// The NRI defines exactly these eighteen perils. A peril the source (or the
/// fallback generator) does not score is `None` and is omitted from JSON
/// output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HazardScores {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avalanche: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coastal_flooding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cold_wave: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drought: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earthquake: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hail: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat_wave: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hurricane: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icestorm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landslide: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lightning: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub riverine_flooding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strong_wind: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tornado: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tsunami: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volcanic_activity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wildfire: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winter_weather: Option<f64>,
}

/// Composite risk profile for one county.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskIndexRecord {
    /// Two-letter state abbreviation.
    pub state_code: String,
    /// County name.
    pub county: String,
    /// Composite risk score (0-100).
    pub risk_score: f64,
    /// Qualitative rating (e.g., "Very High", "Relatively Low", "Not Rated").
    pub risk_rating: String,
    /// Expected annual loss in USD.
    pub expected_annual_loss: f64,
    /// Social vulnerability score (0-100).
    pub social_vulnerability: f64,
    /// Community resilience score (0-100).
    pub community_resilience: f64,
    /// Per-peril scores.
    pub hazards: HazardScores,
}
