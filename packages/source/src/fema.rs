//! FEMA OpenFEMA API: disaster declarations, historical aggregation, and
//! EMPG grants.
//!
//! OpenFEMA speaks OData-style query parameters (`$filter`, `$top`,
//! `$orderby`) and wraps results in an object keyed by dataset name.
//! See <https://www.fema.gov/about/openfema/api>.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use hazard_map_domain_models::{
    DeclarationType, DisasterRecord, DisasterStatus, GrantRecord, GrantStatus,
    HistoricalDisasterBucket, HISTORY_YEAR_MAX, HISTORY_YEAR_MIN,
};
use serde_json::Value;

use crate::parsing::{parse_upstream_date, parse_year};
use crate::probe::{probe_f64_opt, probe_str, probe_string, probe_u64};
use crate::SourceError;

/// Base URL for the OpenFEMA v2 API.
pub const FEMA_API_URL: &str = "https://www.fema.gov/api/open/v2";

/// Records fetched for the current-declarations view.
pub const DECLARATIONS_TOP: u32 = 50;

/// Records fetched for the historical aggregation window.
pub const HISTORY_TOP: u32 = 1000;

/// Records fetched for the grants view.
pub const GRANTS_TOP: u32 = 50;

/// Fetches disaster declaration summaries for a state, most recent first.
///
/// # Errors
///
/// Returns [`SourceError`] if the HTTP request or JSON decoding fails.
pub async fn fetch_declarations(
    client: &reqwest::Client,
    base_url: &str,
    state: &str,
    top: u32,
) -> Result<Value, SourceError> {
    let url = format!("{base_url}/DisasterDeclarationsSummaries");
    log::info!("Fetching FEMA declarations for {state} (top {top})");
    let response = client
        .get(&url)
        .query(&[
            ("$filter", format!("state eq '{state}'")),
            ("$top", top.to_string()),
            ("$orderby", "declarationDate desc".to_string()),
        ])
        .send()
        .await?;
    Ok(response.json().await?)
}

/// Fetches EMPG grant awards for a state, most recent fiscal year first.
///
/// # Errors
///
/// Returns [`SourceError`] if the HTTP request or JSON decoding fails.
pub async fn fetch_grants(
    client: &reqwest::Client,
    base_url: &str,
    state: &str,
) -> Result<Value, SourceError> {
    let url = format!("{base_url}/EmergencyManagementPerformanceGrants");
    log::info!("Fetching FEMA EMPG grants for {state}");
    let response = client
        .get(&url)
        .query(&[
            ("$filter", format!("state eq '{state}'")),
            ("$top", GRANTS_TOP.to_string()),
            ("$orderby", "fiscalYear desc".to_string()),
        ])
        .send()
        .await?;
    Ok(response.json().await?)
}

/// Probes the FEMA shelter-county dataset for a state.
///
/// The dataset rarely carries usable shelter locations; the accessor layer
/// treats any outcome here as a cue to generate shelter records locally.
///
/// # Errors
///
/// Returns [`SourceError`] if the HTTP request or JSON decoding fails.
pub async fn fetch_shelter_counties(
    client: &reqwest::Client,
    base_url: &str,
    state: &str,
) -> Result<Value, SourceError> {
    let url = format!("{base_url}/IpacsCounties");
    let response = client
        .get(&url)
        .query(&[
            ("$filter", format!("state eq '{state}'")),
            ("$top", DECLARATIONS_TOP.to_string()),
        ])
        .send()
        .await?;
    Ok(response.json().await?)
}

/// Extracts the declaration array from an OpenFEMA payload.
fn declaration_rows(body: &Value) -> &[Value] {
    body.get("DisasterDeclarationsSummaries")
        .and_then(Value::as_array)
        .map_or(&[], Vec::as_slice)
}

/// Maps an OpenFEMA declarations payload onto canonical [`DisasterRecord`]s.
///
/// The status is derived from the resolved declared date against `now`:
/// declarations within the last 365 days are `Active`, everything else
/// (including records with no parseable date) is `Closed`.
#[must_use]
pub fn normalize_declarations(body: &Value, now: DateTime<Utc>) -> Vec<DisasterRecord> {
    declaration_rows(body)
        .iter()
        .map(|item| {
            let declared_date = probe_str(item, &["declarationDate", "incidentBeginDate"])
                .and_then(parse_upstream_date);

            DisasterRecord {
                id: probe_string(item, &["disasterNumber", "femaDeclarationString"], ""),
                declaration_type: DeclarationType::from_code(
                    probe_str(item, &["declarationType"]).unwrap_or(""),
                ),
                title: probe_string(item, &["declarationTitle", "incidentType"], ""),
                state: probe_string(item, &["state"], ""),
                county: probe_string(item, &["designatedArea"], "Multiple Counties"),
                declared_date,
                incident_type: probe_string(item, &["incidentType"], "Unknown"),
                status: DisasterStatus::from_declared(declared_date, now),
                incident_begin_date: probe_str(item, &["incidentBeginDate"])
                    .and_then(parse_upstream_date),
                incident_end_date: probe_str(item, &["incidentEndDate"])
                    .and_then(parse_upstream_date),
                disaster_number: match probe_u64(item, &["disasterNumber"]) {
                    0 => None,
                    n => Some(n),
                },
            }
        })
        .collect()
}

/// Aggregates a declarations payload into per-(year, type) buckets for the
/// trend estimator.
///
/// Years outside the 2019-2024 window are dropped; declarations without a
/// parseable date are skipped entirely. Output is ordered by year, then
/// incident type.
#[must_use]
pub fn aggregate_history(body: &Value) -> Vec<HistoricalDisasterBucket> {
    let mut counts: BTreeMap<(i32, String), u32> = BTreeMap::new();

    for item in declaration_rows(body) {
        let Some(year) = probe_str(item, &["declarationDate"]).and_then(parse_year) else {
            continue;
        };
        if !(HISTORY_YEAR_MIN..=HISTORY_YEAR_MAX).contains(&year) {
            continue;
        }
        let incident_type = probe_string(item, &["incidentType"], "Other");
        *counts.entry((year, incident_type)).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|((year, incident_type), count)| {
            HistoricalDisasterBucket::from_count(year, incident_type, count)
        })
        .collect()
}

/// Maps an EMPG grants payload onto canonical [`GrantRecord`]s.
///
/// Missing cost shares fall back to half of `allocatedAmount`, matching how
/// the dataset splits awards it has not itemized.
#[must_use]
pub fn normalize_grants(body: &Value, state: &str) -> Vec<GrantRecord> {
    let Some(rows) = body
        .get("EmergencyManagementPerformanceGrants")
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    rows.iter()
        .enumerate()
        .map(|(idx, item)| {
            let half_allocation = probe_f64_opt(item, &["allocatedAmount"])
                .map(|amount| amount * 0.5);

            GrantRecord {
                id: probe_string(item, &["id"], &format!("empg-{idx}")),
                grant_name: probe_string(
                    item,
                    &["projectTitle"],
                    "Emergency Management Grant",
                ),
                fiscal_year: i32::try_from(probe_u64(item, &["fiscalYear"])).unwrap_or(0),
                state: probe_string(item, &["state"], state),
                federal_share: probe_f64_opt(item, &["federalShare"])
                    .or(half_allocation)
                    .unwrap_or(0.0),
                state_share: probe_f64_opt(item, &["stateShare"])
                    .or(half_allocation)
                    .unwrap_or(0.0),
                status: GrantStatus::from_upstream(probe_str(item, &["status"]).unwrap_or("")),
                program_areas: program_areas(item),
            }
        })
        .collect()
}

/// Reads the program area list, falling back to the single `programArea`
/// field and finally to `"General"`.
fn program_areas(item: &Value) -> Vec<String> {
    if let Some(areas) = item.get("programAreas").and_then(Value::as_array) {
        let names: Vec<String> = areas
            .iter()
            .filter_map(Value::as_str)
            .map(String::from)
            .collect();
        if !names.is_empty() {
            return names;
        }
    }
    vec![probe_string(item, &["programArea"], "General")]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use serde_json::json;

    fn declarations_payload(now: DateTime<Utc>) -> Value {
        let recent = (now - TimeDelta::days(10)).to_rfc3339();
        let stale = (now - TimeDelta::days(400)).to_rfc3339();
        json!({
            "DisasterDeclarationsSummaries": [
                {
                    "disasterNumber": 4781,
                    "femaDeclarationString": "DR-4781-TX",
                    "declarationType": "DR",
                    "declarationTitle": "Severe Storms and Flooding",
                    "state": "TX",
                    "designatedArea": "Harris (County)",
                    "declarationDate": recent,
                    "incidentType": "Flood"
                },
                {
                    "disasterNumber": 3598,
                    "declarationType": "EM",
                    "state": "TX",
                    "declarationDate": stale,
                    "incidentType": "Hurricane"
                }
            ]
        })
    }

    #[test]
    fn maps_declaration_fields() {
        let now = Utc::now();
        let records = normalize_declarations(&declarations_payload(now), now);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "4781");
        assert_eq!(records[0].declaration_type, DeclarationType::MajorDisaster);
        assert_eq!(records[0].county, "Harris (County)");
        assert_eq!(records[0].disaster_number, Some(4781));
        // Title falls back to the incident type when no declarationTitle.
        assert_eq!(records[1].title, "Hurricane");
        assert_eq!(records[1].county, "Multiple Counties");
    }

    #[test]
    fn status_derives_from_declared_date() {
        let now = Utc::now();
        let records = normalize_declarations(&declarations_payload(now), now);
        assert_eq!(records[0].status, DisasterStatus::Active);
        assert_eq!(records[1].status, DisasterStatus::Closed);
    }

    #[test]
    fn missing_dataset_key_yields_empty() {
        let now = Utc::now();
        assert!(normalize_declarations(&json!({"metadata": {}}), now).is_empty());
    }

    #[test]
    fn history_aggregates_by_year_and_type() {
        let body = json!({
            "DisasterDeclarationsSummaries": [
                {"declarationDate": "2021-03-01T00:00:00.000Z", "incidentType": "Flood"},
                {"declarationDate": "2021-08-15T00:00:00.000Z", "incidentType": "Flood"},
                {"declarationDate": "2021-09-02T00:00:00.000Z", "incidentType": "Fire"},
                {"declarationDate": "2018-01-01T00:00:00.000Z", "incidentType": "Flood"},
                {"declarationDate": "2025-01-01T00:00:00.000Z", "incidentType": "Flood"},
                {"incidentType": "Tornado"}
            ]
        });

        let buckets = aggregate_history(&body);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].year, 2021);
        assert_eq!(buckets[0].incident_type, "Fire");
        assert_eq!(buckets[0].count, 1);
        assert_eq!(buckets[1].incident_type, "Flood");
        assert_eq!(buckets[1].count, 2);
        assert_eq!(buckets[1].affected_population, 50_000);
        assert_eq!(buckets[1].economic_impact, 100_000_000);
    }

    #[test]
    fn grants_fall_back_to_half_allocation() {
        let body = json!({
            "EmergencyManagementPerformanceGrants": [
                {
                    "id": "grant-1",
                    "projectTitle": "Statewide Exercise Program",
                    "fiscalYear": 2024,
                    "state": "CA",
                    "allocatedAmount": 1_000_000.0,
                    "programAreas": ["Training", "Exercise"]
                },
                {"fiscalYear": 2023, "programArea": "Planning"}
            ]
        });

        let grants = normalize_grants(&body, "CA");
        assert_eq!(grants.len(), 2);
        assert!((grants[0].federal_share - 500_000.0).abs() < f64::EPSILON);
        assert!((grants[0].state_share - 500_000.0).abs() < f64::EPSILON);
        assert_eq!(grants[0].program_areas, vec!["Training", "Exercise"]);
        assert_eq!(grants[1].id, "empg-1");
        assert_eq!(grants[1].grant_name, "Emergency Management Grant");
        assert_eq!(grants[1].program_areas, vec!["Planning"]);
        assert_eq!(grants[1].status, GrantStatus::Active);
    }
}
