#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Trend estimation over the historical disaster buckets.
//!
//! This is a two-point slope model, nothing more: it exists to put a
//! plausible number and direction label next to each incident type, not to
//! forecast. The confidence figure is bounded jitter from the caller's RNG,
//! not a statistical interval.

use hazard_map_domain_models::{HistoricalDisasterBucket, Prediction, TrendDirection};
use rand::Rng;

/// Lower bound of the confidence jitter.
const CONFIDENCE_FLOOR: f64 = 0.7;

/// Width of the confidence jitter band.
const CONFIDENCE_SPAN: f64 = 0.2;

/// Derives one prediction per incident type present in the history.
///
/// Per type, in the order the buckets arrive: the mean of the counts plus a
/// two-point slope (`(last - first) / bucket count`, `0` for a single
/// bucket), rounded. The trend label follows the slope's sign. Types absent
/// from the history produce no prediction.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn generate_predictions(
    history: &[HistoricalDisasterBucket],
    rng: &mut impl Rng,
) -> Vec<Prediction> {
    let mut types: Vec<&str> = Vec::new();
    for bucket in history {
        if !types.contains(&bucket.incident_type.as_str()) {
            types.push(&bucket.incident_type);
        }
    }

    types
        .into_iter()
        .map(|incident_type| {
            let counts: Vec<f64> = history
                .iter()
                .filter(|bucket| bucket.incident_type == incident_type)
                .map(|bucket| f64::from(bucket.count))
                .collect();

            let mean = counts.iter().sum::<f64>() / counts.len() as f64;
            let slope = if counts.len() > 1 {
                (counts[counts.len() - 1] - counts[0]) / counts.len() as f64
            } else {
                0.0
            };

            let trend = if slope > 0.0 {
                TrendDirection::Increasing
            } else if slope < 0.0 {
                TrendDirection::Decreasing
            } else {
                TrendDirection::Stable
            };

            Prediction {
                incident_type: incident_type.to_string(),
                prediction_2025: (mean + slope).round() as i64,
                confidence: CONFIDENCE_FLOOR + rng.gen_range(0.0..1.0) * CONFIDENCE_SPAN,
                trend,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn bucket(year: i32, incident_type: &str, count: u32) -> HistoricalDisasterBucket {
        HistoricalDisasterBucket::from_count(year, incident_type.to_string(), count)
    }

    #[test]
    fn one_prediction_per_type() {
        let history = vec![
            bucket(2019, "Flood", 12),
            bucket(2023, "Flood", 15),
            bucket(2020, "Hurricane", 8),
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let predictions = generate_predictions(&history, &mut rng);

        assert_eq!(predictions.len(), 2);
        assert_eq!(predictions[0].incident_type, "Flood");
        assert_eq!(predictions[1].incident_type, "Hurricane");
    }

    #[test]
    fn prediction_is_mean_plus_slope_rounded() {
        // Flood: counts [12, 15], mean 13.5, slope (15 - 12) / 2 = 1.5.
        let history = vec![bucket(2019, "Flood", 12), bucket(2023, "Flood", 15)];
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let predictions = generate_predictions(&history, &mut rng);

        assert_eq!(predictions[0].prediction_2025, 15);
        assert_eq!(predictions[0].trend, TrendDirection::Increasing);
    }

    #[test]
    fn falling_series_trends_decreasing() {
        let history = vec![
            bucket(2019, "Wildfire", 25),
            bucket(2021, "Wildfire", 18),
            bucket(2023, "Wildfire", 10),
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let predictions = generate_predictions(&history, &mut rng);

        // mean (25 + 18 + 10) / 3, slope (10 - 25) / 3 = -5.
        assert_eq!(predictions[0].prediction_2025, 13);
        assert_eq!(predictions[0].trend, TrendDirection::Decreasing);
    }

    #[test]
    fn single_bucket_is_stable() {
        let history = vec![bucket(2022, "Tornado", 18)];
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let predictions = generate_predictions(&history, &mut rng);

        assert_eq!(predictions.len(), 1);
        assert_eq!(predictions[0].trend, TrendDirection::Stable);
        assert_eq!(predictions[0].prediction_2025, 18);
    }

    #[test]
    fn confidence_stays_in_band() {
        let history = vec![bucket(2019, "Flood", 12), bucket(2020, "Hurricane", 8)];
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for prediction in generate_predictions(&history, &mut rng) {
            assert!((0.7..0.9).contains(&prediction.confidence));
        }
    }

    #[test]
    fn empty_history_yields_no_predictions() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        assert!(generate_predictions(&[], &mut rng).is_empty());
    }
}
