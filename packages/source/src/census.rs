//! US Census Bureau ACS 5-year estimates.
//!
//! One request fetches seven variables for a state; the response is a
//! two-row array (header row, then value row) of strings.
//! See <https://www.census.gov/data/developers/data-sets/acs-5year.html>

use hazard_map_domain_models::DemographicsRecord;
use serde_json::Value;

use crate::SourceError;

/// Base URL for the Census data API.
pub const CENSUS_API_URL: &str = "https://api.census.gov/data";

/// ACS dataset vintage queried.
pub const ACS_VINTAGE: &str = "2022";

/// ACS variables requested, in positional order:
/// total population, median household income, housing units, occupied
/// housing units, median age, population below poverty, unemployed.
pub const ACS_VARIABLES: &str =
    "B01003_001E,B19013_001E,B25001_001E,B25002_001E,B01002_001E,B17001_002E,B23025_005E";

/// Population fallback when the value row is unusable.
const DEFAULT_POPULATION: u64 = 5_000_000;

/// Derived population fractions.
const SENIORS_SHARE: f64 = 0.16;
const CHILDREN_SHARE: f64 = 0.06;
const DISABILITY_SHARE: f64 = 0.12;
const POVERTY_SHARE: f64 = 0.12;
const UNEMPLOYED_SHARE: f64 = 0.04;

/// Fetches the raw ACS rows for a state (by FIPS code).
///
/// # Errors
///
/// Returns [`SourceError`] if the HTTP request or JSON decoding fails.
pub async fn fetch_acs_state(
    client: &reqwest::Client,
    base_url: &str,
    state_fips: &str,
) -> Result<Value, SourceError> {
    let url = format!("{base_url}/{ACS_VINTAGE}/acs/acs5");
    log::info!("Fetching Census ACS demographics for state FIPS {state_fips}");
    let response = client
        .get(&url)
        .query(&[
            ("get", ACS_VARIABLES),
            ("for", &format!("state:{state_fips}")),
        ])
        .send()
        .await?;
    Ok(response.json().await?)
}

/// Splits an ACS payload into its header row and first value row.
///
/// # Errors
///
/// Returns [`SourceError::Shape`] when the payload is not the expected
/// two-row array.
pub fn acs_rows(body: &Value) -> Result<(&Vec<Value>, &Vec<Value>), SourceError> {
    let rows = body.as_array().ok_or_else(|| SourceError::Shape {
        message: "ACS payload is not an array".to_string(),
    })?;
    match (rows.first().and_then(Value::as_array), rows.get(1).and_then(Value::as_array)) {
        (Some(headers), Some(values)) => Ok((headers, values)),
        _ => Err(SourceError::Shape {
            message: "ACS payload missing header or value row".to_string(),
        }),
    }
}

/// Maps an ACS value row onto a canonical [`DemographicsRecord`].
///
/// Values arrive positionally per [`ACS_VARIABLES`]. Each field has its own
/// default; the derived fields (seniors, children, disability) are fixed
/// fractions of the total population, not separate variables.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn normalize_demographics(state: &str, values: &[Value]) -> DemographicsRecord {
    let int_at = |idx: usize| -> Option<u64> {
        values.get(idx).and_then(|v| match v {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse::<u64>().ok(),
            _ => None,
        })
    };
    let float_at = |idx: usize| -> Option<f64> {
        values.get(idx).and_then(|v| match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        })
    };

    let total_population = int_at(0).unwrap_or(DEFAULT_POPULATION);
    let share = |fraction: f64| (total_population as f64 * fraction).floor() as u64;
    // floor(pop / 2.5) without going through floats.
    let households_estimate = total_population * 2 / 5;

    let median_income = float_at(1).unwrap_or(65_000.0);
    let housing_units = int_at(2).unwrap_or(households_estimate);
    let households = int_at(3).unwrap_or(households_estimate);
    let median_age = float_at(4).unwrap_or(38.0);
    let poverty_line = int_at(5).unwrap_or_else(|| share(POVERTY_SHARE));
    let unemployed = int_at(6).unwrap_or_else(|| share(UNEMPLOYED_SHARE));

    DemographicsRecord {
        state: state.to_uppercase(),
        county: "State-wide".to_string(),
        total_population,
        households,
        housing_units,
        median_age,
        median_income,
        poverty_line,
        unemployment_rate: unemployed as f64 / total_population as f64 * 100.0,
        seniors_65_plus: share(SENIORS_SHARE),
        children_under_5: share(CHILDREN_SHARE),
        disability: share(DISABILITY_SHARE),
    }
}
