//! Synthetic EMPG grant awards.

use chrono::{DateTime, Datelike, Utc};
use hazard_map_domain_models::{GrantRecord, GrantStatus};
use rand::Rng;

use crate::jitter;

/// Fiscal years of synthetic awards, counted back from the current year.
const GRANT_YEARS: i32 = 5;

/// Awards in the two most recent fiscal years are still active.
const ACTIVE_YEARS: i32 = 2;

/// Rotating program-area pairs across fiscal years.
const PROGRAM_AREAS: [[&str; 2]; 5] = [
    ["Planning", "Training"],
    ["Training", "Exercise"],
    ["Equipment", "Operations"],
    ["Exercise", "Management"],
    ["Operations", "Planning"],
];

/// Five awards covering the last five fiscal years; the state share is
/// pegged at half the federal share, mirroring the EMPG cost-match rule.
#[must_use]
pub fn grants(state: &str, now: DateTime<Utc>, rng: &mut impl Rng) -> Vec<GrantRecord> {
    let current_year = now.year();
    let state_upper = state.to_uppercase();

    (0..GRANT_YEARS)
        .map(|offset| {
            let fiscal_year = current_year - offset;
            let federal_share = jitter(rng, 500_000.0, 2_000_000.0);

            GrantRecord {
                id: format!("empg-{state_upper}-{fiscal_year}"),
                grant_name: format!("Emergency Management Enhancement Program FY{fiscal_year}"),
                fiscal_year,
                state: state_upper.clone(),
                federal_share,
                state_share: federal_share * 0.5,
                status: if offset < ACTIVE_YEARS {
                    GrantStatus::Active
                } else {
                    GrantStatus::Closed
                },
                program_areas: PROGRAM_AREAS[usize::try_from(offset).unwrap_or(0) % 5]
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn five_awards_with_recent_two_active() {
        let now = Utc::now();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let records = grants("ca", now, &mut rng);

        assert_eq!(records.len(), 5);
        assert_eq!(records[0].fiscal_year, now.year());
        assert_eq!(records[4].fiscal_year, now.year() - 4);
        assert_eq!(records[0].status, GrantStatus::Active);
        assert_eq!(records[1].status, GrantStatus::Active);
        assert_eq!(records[2].status, GrantStatus::Closed);
        assert_eq!(records[0].state, "CA");
    }

    #[test]
    fn state_share_is_half_of_federal() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        for record in grants("TX", Utc::now(), &mut rng) {
            assert!((record.state_share - record.federal_share * 0.5).abs() < f64::EPSILON);
            assert!(record.federal_share >= 500_000.0);
            assert!(record.federal_share < 2_500_000.0);
            assert_eq!(record.program_areas.len(), 2);
        }
    }
}
