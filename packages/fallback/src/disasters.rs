//! Synthetic FEMA declarations and the fixed historical series.

use chrono::{DateTime, TimeDelta, Utc};
use hazard_map_domain_models::{
    DeclarationType, DisasterRecord, DisasterStatus, HistoricalDisasterBucket,
};

/// Days back the synthetic active declaration is dated.
const ACTIVE_AGE_DAYS: i64 = 90;

/// Days back the synthetic closed declaration is dated.
const CLOSED_AGE_DAYS: i64 = 500;

/// Two representative declarations: one inside the active window, one past
/// it. Dates are placed relative to `now` so the derived statuses stay
/// truthful no matter when the records are generated.
#[must_use]
pub fn declarations(state: &str, now: DateTime<Utc>) -> Vec<DisasterRecord> {
    let recent = now - TimeDelta::days(ACTIVE_AGE_DAYS);
    let stale = now - TimeDelta::days(CLOSED_AGE_DAYS);

    vec![
        DisasterRecord {
            id: "DR-4001".to_string(),
            declaration_type: DeclarationType::MajorDisaster,
            title: "Severe Storms and Flooding".to_string(),
            state: state.to_uppercase(),
            county: "Multiple Counties".to_string(),
            declared_date: Some(recent),
            incident_type: "Flood".to_string(),
            status: DisasterStatus::from_declared(Some(recent), now),
            incident_begin_date: None,
            incident_end_date: None,
            disaster_number: None,
        },
        DisasterRecord {
            id: "EM-3589".to_string(),
            declaration_type: DeclarationType::Emergency,
            title: "Hurricane Emergency".to_string(),
            state: state.to_uppercase(),
            county: "Coastal Counties".to_string(),
            declared_date: Some(stale),
            incident_type: "Hurricane".to_string(),
            status: DisasterStatus::from_declared(Some(stale), now),
            incident_begin_date: None,
            incident_end_date: None,
            disaster_number: None,
        },
    ]
}

/// The fixed six-year historical series used when the FEMA archive query
/// fails. Population and impact figures are the series' own literals, not
/// the per-count estimates applied to live data.
#[must_use]
pub fn historical_buckets() -> Vec<HistoricalDisasterBucket> {
    [
        (2019, "Flood", 12, 50_000, 150_000_000),
        (2020, "Hurricane", 8, 120_000, 500_000_000),
        (2021, "Wildfire", 25, 35_000, 200_000_000),
        (2022, "Tornado", 18, 40_000, 180_000_000),
        (2023, "Flood", 15, 60_000, 220_000_000),
        (2024, "Hurricane", 10, 95_000, 450_000_000),
    ]
    .into_iter()
    .map(
        |(year, incident_type, count, affected, impact)| HistoricalDisasterBucket {
            year,
            incident_type: incident_type.to_string(),
            count,
            affected_population: affected,
            economic_impact: impact,
        },
    )
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_derive_from_generated_dates() {
        let records = declarations("tx", Utc::now());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].status, DisasterStatus::Active);
        assert_eq!(records[1].status, DisasterStatus::Closed);
        assert_eq!(records[0].state, "TX");
    }

    #[test]
    fn history_covers_the_window() {
        let buckets = historical_buckets();
        assert_eq!(buckets.len(), 6);
        assert!(buckets.iter().all(|b| (2019..=2024).contains(&b.year)));
        assert_eq!(buckets[0].incident_type, "Flood");
        assert_eq!(buckets[0].count, 12);
    }
}
