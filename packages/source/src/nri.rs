//! FEMA National Risk Index county data.
//!
//! The NRI serves county records whose field names vary by export vintage:
//! a hazard score may arrive as `erqk`, `ERQK_RISKS`, or `earthquake`.
//! Every output field therefore declares an ordered candidate-key list.

use hazard_map_domain_models::{HazardScores, RiskIndexRecord};
use serde_json::Value;

use crate::probe::{probe_f64, probe_string};
use crate::SourceError;

/// Base URL for the NRI API.
pub const NRI_API_URL: &str = "https://hazards.fema.gov/nri/api/v1";

/// Counties kept per state for the dashboard view.
const MAX_COUNTIES: usize = 10;

/// Fetches raw NRI county records for a state.
///
/// # Errors
///
/// Returns [`SourceError`] if the HTTP request or JSON decoding fails.
pub async fn fetch_counties(
    client: &reqwest::Client,
    base_url: &str,
    state: &str,
) -> Result<Value, SourceError> {
    let url = format!("{base_url}/counties");
    log::info!("Fetching NRI county data for {state}");
    let response = client.get(&url).query(&[("state", state)]).send().await?;
    Ok(response.json().await?)
}

/// Maps an NRI counties payload onto canonical [`RiskIndexRecord`]s.
///
/// Takes the first ten counties; a payload that is not an array yields an
/// empty list. Scores absent under every candidate key coerce to `0.0`;
/// ratings default to `"Not Rated"`.
#[must_use]
pub fn normalize_counties(body: &Value, state: &str) -> Vec<RiskIndexRecord> {
    let Some(rows) = body.as_array() else {
        return Vec::new();
    };

    let state_upper = state.to_uppercase();

    rows.iter()
        .take(MAX_COUNTIES)
        .map(|item| RiskIndexRecord {
            state_code: probe_string(item, &["stateAbbreviation", "state"], &state_upper),
            county: probe_string(item, &["countyName", "county"], "Unknown County"),
            risk_score: probe_f64(item, &["riskScore", "risk_score", "RISK_SCORE"]),
            risk_rating: probe_string(item, &["riskRating", "risk_rating", "RISK_RATNG"], "Not Rated"),
            expected_annual_loss: probe_f64(item, &["eal", "EAL_VALT", "expectedAnnualLoss"]),
            social_vulnerability: probe_f64(item, &["sovi", "SOVI_SCORE", "socialVulnerability"]),
            community_resilience: probe_f64(item, &["resl", "RESL_SCORE", "communityResilience"]),
            hazards: hazard_scores(item),
        })
        .collect()
}

/// Probes all eighteen NRI perils. Candidate order per peril: the short
/// column code, the `_RISKS` export column, then the spelled-out name.
fn hazard_scores(item: &Value) -> HazardScores {
    HazardScores {
        avalanche: Some(probe_f64(item, &["avln", "AVLN_RISKS", "avalanche"])),
        coastal_flooding: Some(probe_f64(item, &["cfld", "CFLD_RISKS", "coastalFlooding"])),
        cold_wave: Some(probe_f64(item, &["cwav", "CWAV_RISKS", "coldWave"])),
        drought: Some(probe_f64(item, &["drgt", "DRGT_RISKS", "drought"])),
        earthquake: Some(probe_f64(item, &["erqk", "ERQK_RISKS", "earthquake"])),
        hail: Some(probe_f64(item, &["hail", "HAIL_RISKS"])),
        heat_wave: Some(probe_f64(item, &["hwav", "HWAV_RISKS", "heatWave"])),
        hurricane: Some(probe_f64(item, &["hrcn", "HRCN_RISKS", "hurricane"])),
        icestorm: Some(probe_f64(item, &["istm", "ISTM_RISKS", "icestorm"])),
        landslide: Some(probe_f64(item, &["lnds", "LNDS_RISKS", "landslide"])),
        lightning: Some(probe_f64(item, &["ltng", "LTNG_RISKS", "lightning"])),
        riverine_flooding: Some(probe_f64(item, &["rfld", "RFLD_RISKS", "riverineFlooding"])),
        strong_wind: Some(probe_f64(item, &["swnd", "SWND_RISKS", "strongWind"])),
        tornado: Some(probe_f64(item, &["trnd", "TRND_RISKS", "tornado"])),
        tsunami: Some(probe_f64(item, &["tsun", "TSUN_RISKS", "tsunami"])),
        volcanic_activity: Some(probe_f64(item, &["vlcn", "VLCN_RISKS", "volcanicActivity"])),
        wildfire: Some(probe_f64(item, &["wfir", "WFIR_RISKS", "wildfire"])),
        winter_weather: Some(probe_f64(item, &["wntw", "WNTW_RISKS", "winterWeather"])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn counties_payload() -> Value {
        json!([
            {
                "stateAbbreviation": "CA",
                "countyName": "Los Angeles",
                "RISK_SCORE": "94.2",
                "riskRating": "Very High",
                "EAL_VALT": 988_000_000.0,
                "SOVI_SCORE": 71.3,
                "resl": 52.8,
                "ERQK_RISKS": 92.1,
                "wfir": "88.4"
            },
            {
                "state": "CA",
                "county": "Alpine",
                "risk_score": 12.7
            }
        ])
    }

    #[test]
    fn probes_candidate_keys_in_order() {
        let records = normalize_counties(&counties_payload(), "ca");
        assert_eq!(records.len(), 2);

        let la = &records[0];
        assert_eq!(la.state_code, "CA");
        assert_eq!(la.county, "Los Angeles");
        assert!((la.risk_score - 94.2).abs() < f64::EPSILON);
        assert!((la.expected_annual_loss - 988_000_000.0).abs() < f64::EPSILON);
        assert_eq!(la.hazards.earthquake, Some(92.1));
        assert_eq!(la.hazards.wildfire, Some(88.4));
    }

    #[test]
    fn missing_fields_get_defaults() {
        let records = normalize_counties(&counties_payload(), "CA");
        let alpine = &records[1];
        assert_eq!(alpine.risk_rating, "Not Rated");
        assert!((alpine.expected_annual_loss - 0.0).abs() < f64::EPSILON);
        assert_eq!(alpine.hazards.tornado, Some(0.0));
    }

    #[test]
    fn caps_at_ten_counties() {
        let rows: Vec<Value> = (0..25)
            .map(|i| json!({"countyName": format!("County {i}"), "riskScore": 50.0}))
            .collect();
        let records = normalize_counties(&Value::Array(rows), "TX");
        assert_eq!(records.len(), 10);
    }

    #[test]
    fn non_array_payload_yields_empty() {
        assert!(normalize_counties(&json!({"error": "down"}), "CA").is_empty());
    }

    #[test]
    fn normalization_is_idempotent() {
        let payload = counties_payload();
        assert_eq!(
            normalize_counties(&payload, "CA"),
            normalize_counties(&payload, "CA")
        );
    }
}
