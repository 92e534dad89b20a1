//! NCES school directory via the Urban Institute Education Data portal.
//!
//! The directory lists individual schools; the normalizer rolls them up
//! into district records keyed by local education agency (LEA) id.
//! See <https://educationdata.urban.org/documentation/>.

use hazard_map_domain_models::SchoolDistrictRecord;
use serde_json::Value;

use crate::probe::{probe_f64_opt, probe_string, probe_u64};
use crate::SourceError;

/// Base URL for the Education Data portal.
pub const NCES_API_URL: &str = "https://educationdata.urban.org/api/v1";

/// Directory vintage queried.
pub const CCD_YEAR: &str = "2022";

/// Schools requested per state.
const PER_PAGE: u32 = 100;

/// Districts kept per state for the dashboard view.
const MAX_DISTRICTS: usize = 10;

/// How many of the leading districts are flagged shelter-capable.
const SHELTER_CAPABLE_DISTRICTS: usize = 5;

/// Placeholder coordination number; the directory has no emergency contact
/// column.
const EMERGENCY_CONTACT: &str = "(555) 000-0000";

/// Fetches the raw school directory for a state.
///
/// # Errors
///
/// Returns [`SourceError`] if the HTTP request or JSON decoding fails.
pub async fn fetch_school_directory(
    client: &reqwest::Client,
    base_url: &str,
    state: &str,
) -> Result<Value, SourceError> {
    let url = format!("{base_url}/schools/ccd/directory/{CCD_YEAR}/");
    log::info!("Fetching NCES school directory for {state}");
    let response = client
        .get(&url)
        .query(&[
            ("state_location", state.to_uppercase()),
            ("per_page", PER_PAGE.to_string()),
        ])
        .send()
        .await?;
    Ok(response.json().await?)
}

/// Extracts the school rows from a directory payload.
///
/// The portal wraps rows in a `results` array; a bare array (as re-served
/// by our own proxy endpoint) is accepted too.
#[must_use]
pub fn school_rows(body: &Value) -> &[Value] {
    body.get("results")
        .and_then(Value::as_array)
        .or_else(|| body.as_array())
        .map_or(&[], Vec::as_slice)
}

/// Rolls individual school rows up into [`SchoolDistrictRecord`]s.
///
/// Schools group by `leaid`/`lea_id` in first-seen order; the first ten
/// districts are kept and the first five flagged shelter-capable.
/// Enrollment sums across member schools; coordinates come from each
/// district's first listed school, dropped when zero or absent.
#[must_use]
pub fn normalize_districts(rows: &[Value], state: &str) -> Vec<SchoolDistrictRecord> {
    let mut order: Vec<String> = Vec::new();
    let mut grouped: Vec<Vec<&Value>> = Vec::new();

    for school in rows {
        let district_id = probe_string(school, &["leaid", "lea_id"], "unknown");
        match order.iter().position(|id| *id == district_id) {
            Some(idx) => grouped[idx].push(school),
            None => {
                order.push(district_id);
                grouped.push(vec![school]);
            }
        }
    }

    order
        .into_iter()
        .zip(grouped)
        .take(MAX_DISTRICTS)
        .enumerate()
        .map(|(idx, (district_id, schools))| {
            let first = schools[0];
            let total_students = schools
                .iter()
                .map(|school| probe_u64(school, &["enrollment"]))
                .sum();

            SchoolDistrictRecord {
                id: district_id,
                district_name: probe_string(
                    first,
                    &["lea_name", "district_name"],
                    &format!("School District {}", idx + 1),
                ),
                county: probe_string(first, &["county_name", "county"], "Unknown County"),
                state: state.to_uppercase(),
                total_schools: u32::try_from(schools.len()).unwrap_or(u32::MAX),
                total_students,
                emergency_contact: EMERGENCY_CONTACT.to_string(),
                shelter_capable: idx < SHELTER_CAPABLE_DISTRICTS,
                lat: probe_f64_opt(first, &["latitude", "lat"]).filter(|lat| *lat != 0.0),
                lon: probe_f64_opt(first, &["longitude", "lon"]).filter(|lon| *lon != 0.0),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn directory_payload() -> Value {
        json!({
            "results": [
                {
                    "leaid": "0622710",
                    "lea_name": "Los Angeles Unified",
                    "county_name": "Los Angeles",
                    "enrollment": "1200",
                    "latitude": 34.05,
                    "longitude": -118.24
                },
                {
                    "leaid": "0622710",
                    "lea_name": "Los Angeles Unified",
                    "enrollment": "850"
                },
                {
                    "lea_id": "0634320",
                    "district_name": "San Diego Unified",
                    "county": "San Diego",
                    "enrollment": 980,
                    "latitude": 0.0
                }
            ]
        })
    }

    #[test]
    fn groups_schools_into_districts() {
        let body = directory_payload();
        let districts = normalize_districts(school_rows(&body), "ca");
        assert_eq!(districts.len(), 2);

        let lausd = &districts[0];
        assert_eq!(lausd.id, "0622710");
        assert_eq!(lausd.district_name, "Los Angeles Unified");
        assert_eq!(lausd.total_schools, 2);
        assert_eq!(lausd.total_students, 2050);
        assert_eq!(lausd.state, "CA");
        assert!(lausd.shelter_capable);
        assert_eq!(lausd.lat, Some(34.05));
    }

    #[test]
    fn zero_coordinates_are_dropped() {
        let body = directory_payload();
        let districts = normalize_districts(school_rows(&body), "CA");
        assert_eq!(districts[1].lat, None);
        assert_eq!(districts[1].lon, None);
    }

    #[test]
    fn caps_at_ten_districts() {
        let rows: Vec<Value> = (0..15)
            .map(|i| json!({"leaid": format!("{i:07}"), "enrollment": 100}))
            .collect();
        let districts = normalize_districts(&rows, "TX");
        assert_eq!(districts.len(), 10);
        assert!(districts[4].shelter_capable);
        assert!(!districts[5].shelter_capable);
    }

    #[test]
    fn schools_without_lea_share_the_unknown_district() {
        let rows = vec![json!({"enrollment": 10}), json!({"enrollment": 20})];
        let districts = normalize_districts(&rows, "CA");
        assert_eq!(districts.len(), 1);
        assert_eq!(districts[0].id, "unknown");
        assert_eq!(districts[0].total_students, 30);
        assert_eq!(districts[0].district_name, "School District 1");
    }
}
