//! Candidate-key probing for heterogeneous upstream payloads.
//!
//! Upstream field names vary by source and sometimes by record: a hazard
//! score may arrive as `erqk`, `ERQK_RISKS`, or `earthquake`; a coordinate
//! as `latitude`, `lat`, or nested under `location.latitude`. Each
//! normalizer declares an ordered candidate list per output field and these
//! helpers take the first defined value, coercing it to the target type.
//!
//! All probes are pure: absent or uncoercible values become the default,
//! never an error, and there is no hidden randomness.

use serde_json::Value;

/// Resolves a dotted key path (`"location.latitude"`) against a JSON object.
fn resolve<'a>(obj: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = obj;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}

/// Returns the first candidate key that resolves to a non-empty string.
#[must_use]
pub fn probe_str<'a>(obj: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| resolve(obj, key))
        .filter_map(Value::as_str)
        .find(|s| !s.is_empty())
}

/// Returns the first candidate that is a non-empty string or a number
/// (numbers are rendered to their decimal form), else the default.
#[must_use]
pub fn probe_string(obj: &Value, keys: &[&str], default: &str) -> String {
    for key in keys {
        match resolve(obj, key) {
            Some(Value::String(s)) if !s.is_empty() => return s.clone(),
            Some(Value::Number(n)) => return n.to_string(),
            _ => {}
        }
    }
    default.to_string()
}

/// Returns the first candidate that coerces to a finite float, else `0.0`.
///
/// Accepts JSON numbers and numeric strings; several upstream APIs return
/// scores and coordinates as quoted strings.
#[must_use]
pub fn probe_f64(obj: &Value, keys: &[&str]) -> f64 {
    probe_f64_opt(obj, keys).unwrap_or(0.0)
}

/// Like [`probe_f64`] but preserves absence, for fields that are optional
/// by design.
#[must_use]
pub fn probe_f64_opt(obj: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .filter_map(|key| resolve(obj, key))
        .find_map(|value| match value {
            Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
            _ => None,
        })
}

/// Returns the first candidate that coerces to an unsigned integer, else `0`.
#[must_use]
pub fn probe_u64(obj: &Value, keys: &[&str]) -> u64 {
    keys.iter()
        .filter_map(|key| resolve(obj, key))
        .find_map(|value| match value {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse::<u64>().ok(),
            _ => None,
        })
        .unwrap_or(0)
}

/// Returns the first candidate that reads as a boolean, else the default.
///
/// Accepts JSON booleans and the string spellings (`"Yes"`/`"No"`,
/// `"true"`/`"false"`) that flat-file-derived APIs use.
#[must_use]
pub fn probe_bool(obj: &Value, keys: &[&str], default: bool) -> bool {
    keys.iter()
        .filter_map(|key| resolve(obj, key))
        .find_map(|value| match value {
            Value::Bool(b) => Some(*b),
            Value::String(s) => match s.as_str() {
                "Yes" | "yes" | "true" | "True" => Some(true),
                "No" | "no" | "false" | "False" => Some(false),
                _ => None,
            },
            _ => None,
        })
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn takes_first_defined_candidate() {
        let obj = json!({"risk_score": "42.5", "RISK_SCORE": 99.0});
        assert!((probe_f64(&obj, &["riskScore", "risk_score", "RISK_SCORE"]) - 42.5).abs() < f64::EPSILON);
    }

    #[test]
    fn skips_empty_strings() {
        let obj = json!({"facility_name": "", "hospital_name": "Mercy General"});
        assert_eq!(
            probe_string(&obj, &["facility_name", "hospital_name"], "Unknown"),
            "Mercy General"
        );
    }

    #[test]
    fn missing_numeric_field_defaults_to_zero() {
        let obj = json!({"other": 1});
        assert!((probe_f64(&obj, &["erqk", "ERQK_RISKS"]) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unparseable_numeric_string_defaults_to_zero() {
        let obj = json!({"eal": "not a number"});
        assert!((probe_f64(&obj, &["eal"]) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn resolves_dotted_paths() {
        let obj = json!({"location": {"latitude": "34.05"}});
        assert!((probe_f64(&obj, &["latitude", "location.latitude"]) - 34.05).abs() < f64::EPSILON);
    }

    #[test]
    fn stringifies_numeric_ids() {
        let obj = json!({"disasterNumber": 4001});
        assert_eq!(
            probe_string(&obj, &["disasterNumber", "femaDeclarationString"], ""),
            "4001"
        );
    }

    #[test]
    fn reads_boolean_spellings() {
        let obj = json!({"emergency_services": "Yes"});
        assert!(probe_bool(&obj, &["emergency_services"], false));
        let obj = json!({"emergency_services": false});
        assert!(!probe_bool(&obj, &["emergency_services"], true));
        let obj = json!({});
        assert!(probe_bool(&obj, &["emergency_services"], true));
    }
}
