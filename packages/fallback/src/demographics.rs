//! Synthetic state demographics.

use hazard_map_domain_models::DemographicsRecord;
use rand::Rng;

use crate::{jitter, StateProfile};

/// Derived population fractions, matching the live normalizer.
const SENIORS_SHARE: f64 = 0.16;
const CHILDREN_SHARE: f64 = 0.06;
const DISABILITY_SHARE: f64 = 0.12;

/// One state-wide record scaled from the profile's population estimate.
///
/// Households are `floor(population / 2.5)` and housing units run 10%
/// ahead of households; the remaining figures jitter inside plausible
/// national ranges.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn demographics(
    profile: &StateProfile,
    state: &str,
    rng: &mut impl Rng,
) -> DemographicsRecord {
    let population = profile.population;
    let households = population * 2 / 5;
    let share = |fraction: f64| (population as f64 * fraction).floor() as u64;

    DemographicsRecord {
        state: state.to_uppercase(),
        county: "State-wide".to_string(),
        total_population: population,
        households,
        housing_units: households * 11 / 10,
        median_age: jitter(rng, 35.0, 10.0),
        median_income: jitter(rng, 55_000.0, 30_000.0),
        poverty_line: (population as f64 * jitter(rng, 0.10, 0.10)).floor() as u64,
        unemployment_rate: jitter(rng, 3.0, 5.0),
        seniors_65_plus: share(SENIORS_SHARE),
        children_under_5: share(CHILDREN_SHARE),
        disability: share(DISABILITY_SHARE),
    }
}
