//! Synthetic National Risk Index county records.

use hazard_map_domain_models::{HazardScores, RiskIndexRecord};
use rand::Rng;

use crate::{jitter, StateProfile};

/// States with elevated seismic risk.
const ELEVATED_EARTHQUAKE: &[&str] = &["CA", "AK"];
/// States with elevated wildfire risk.
const ELEVATED_WILDFIRE: &[&str] = &["CA", "CO", "OR"];
/// States with elevated hurricane exposure.
const ELEVATED_HURRICANE: &[&str] = &["FL", "LA", "TX"];
/// Tornado alley.
const ELEVATED_TORNADO: &[&str] = &["TX", "OK", "KS"];
/// States with elevated heat wave risk.
const ELEVATED_HEAT: &[&str] = &["AZ", "NV", "TX"];
/// States with elevated winter weather risk.
const ELEVATED_WINTER: &[&str] = &["NY", "MN", "ND"];
/// States with elevated coastal flooding exposure.
const ELEVATED_COASTAL: &[&str] = &["FL", "LA", "SC"];
/// States with elevated drought risk.
const ELEVATED_DROUGHT: &[&str] = &["CA", "AZ", "NM"];
/// Hail belt, same membership as tornado alley.
const ELEVATED_HAIL: &[&str] = &["TX", "OK", "KS"];

/// One record per profile county, first entries skewed toward elevated
/// ratings. Ten of the eighteen perils are scored; the rest stay unset,
/// matching what the NRI exports for most counties.
#[must_use]
pub fn risk_index(
    profile: &StateProfile,
    state: &str,
    rng: &mut impl Rng,
) -> Vec<RiskIndexRecord> {
    let state_upper = state.to_uppercase();
    let scored = |list: &[&str], rng: &mut dyn rand::RngCore, high: (f64, f64), low: (f64, f64)| {
        if list.contains(&state_upper.as_str()) {
            Some(jitter(rng, high.0, high.1))
        } else {
            Some(jitter(rng, low.0, low.1))
        }
    };

    profile
        .counties
        .iter()
        .enumerate()
        .map(|(idx, county)| RiskIndexRecord {
            state_code: state_upper.clone(),
            county: county.clone(),
            risk_score: jitter(rng, 60.0, 35.0),
            risk_rating: match idx {
                0 => "Very High",
                1 => "Relatively High",
                2 => "Moderate",
                _ => "Relatively Low",
            }
            .to_string(),
            expected_annual_loss: jitter(rng, 5_000_000.0, 50_000_000.0),
            social_vulnerability: jitter(rng, 35.0, 45.0),
            community_resilience: jitter(rng, 45.0, 35.0),
            hazards: HazardScores {
                earthquake: scored(ELEVATED_EARTHQUAKE, rng, (70.0, 25.0), (5.0, 30.0)),
                wildfire: scored(ELEVATED_WILDFIRE, rng, (65.0, 30.0), (15.0, 40.0)),
                hurricane: scored(ELEVATED_HURRICANE, rng, (75.0, 20.0), (3.0, 15.0)),
                tornado: scored(ELEVATED_TORNADO, rng, (55.0, 35.0), (10.0, 30.0)),
                riverine_flooding: Some(jitter(rng, 35.0, 45.0)),
                heat_wave: scored(ELEVATED_HEAT, rng, (60.0, 30.0), (35.0, 35.0)),
                winter_weather: scored(ELEVATED_WINTER, rng, (55.0, 25.0), (15.0, 35.0)),
                coastal_flooding: scored(ELEVATED_COASTAL, rng, (50.0, 35.0), (5.0, 20.0)),
                drought: scored(ELEVATED_DROUGHT, rng, (50.0, 30.0), (20.0, 30.0)),
                hail: scored(ELEVATED_HAIL, rng, (45.0, 30.0), (15.0, 25.0)),
                ..HazardScores::default()
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StateProfiles;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn one_record_per_county_with_skewed_ratings() {
        let profiles = StateProfiles::load().unwrap();
        let profile = profiles.get("CA");
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let records = risk_index(profile, "CA", &mut rng);

        assert_eq!(records.len(), profile.counties.len());
        assert_eq!(records[0].risk_rating, "Very High");
        assert_eq!(records[1].risk_rating, "Relatively High");
        assert_eq!(records[2].risk_rating, "Moderate");
        assert_eq!(records[3].risk_rating, "Relatively Low");
    }

    #[test]
    fn scores_stay_in_range() {
        let profiles = StateProfiles::load().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for code in ["CA", "TX", "VT", "ZZ"] {
            for record in risk_index(profiles.get(code), code, &mut rng) {
                assert!((60.0..95.0).contains(&record.risk_score));
                assert!((35.0..80.0).contains(&record.social_vulnerability));
                assert!((45.0..80.0).contains(&record.community_resilience));
                assert!(record.expected_annual_loss >= 5_000_000.0);
            }
        }
    }

    #[test]
    fn seismic_states_score_high_on_earthquake() {
        let profiles = StateProfiles::load().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let ca = risk_index(profiles.get("CA"), "CA", &mut rng);
        assert!(ca[0].hazards.earthquake.unwrap() >= 70.0);
        let vt = risk_index(profiles.get("VT"), "VT", &mut rng);
        assert!(vt[0].hazards.earthquake.unwrap() < 35.0);
    }

    #[test]
    fn unscored_perils_stay_unset() {
        let profiles = StateProfiles::load().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let records = risk_index(profiles.get("CA"), "CA", &mut rng);
        assert_eq!(records[0].hazards.avalanche, None);
        assert_eq!(records[0].hazards.tsunami, None);
        assert_eq!(records[0].hazards.landslide, None);
    }

    #[test]
    fn same_seed_same_records() {
        let profiles = StateProfiles::load().unwrap();
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(
            risk_index(profiles.get("FL"), "FL", &mut a),
            risk_index(profiles.get("FL"), "FL", &mut b)
        );
    }
}
