//! Trend prediction derived from the historical disaster buckets.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Direction of a disaster-count trend.
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TrendDirection {
    /// Counts are rising year over year.
    Increasing,
    /// Counts are falling year over year.
    Decreasing,
    /// No movement either way, including single-year series.
    Stable,
}

/// A one-year-ahead point estimate for one incident type.
///
/// Produced by the two-point slope estimator; the confidence figure is a
/// bounded jitter, not a statistically derived interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// FEMA incident type this prediction covers.
    #[serde(rename = "type")]
    pub incident_type: String,
    /// Predicted declaration count for 2025, the year after the fixed
    /// historical window.
    #[serde(rename = "prediction2025")]
    pub prediction_2025: i64,
    /// Confidence score in `[0.7, 0.9)`.
    pub confidence: f64,
    /// Qualitative trend label.
    pub trend: TrendDirection,
}
