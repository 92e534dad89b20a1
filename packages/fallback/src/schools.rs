//! Synthetic school districts.

use hazard_map_domain_models::SchoolDistrictRecord;

use crate::StateProfile;

/// Coordination number published with every synthetic district.
const EMERGENCY_CONTACT: &str = "(555) 000-0000";

/// Three districts of descending size, offset from the state center.
/// County names come from the profile where available so the records read
/// consistently with the synthetic risk index.
#[must_use]
pub fn districts(profile: &StateProfile, state: &str) -> Vec<SchoolDistrictRecord> {
    let entries = [
        ("dist-1", "Unified School District", 85_u32, 42_000_u64, true, (0.1, 0.1)),
        ("dist-2", "City School District", 45, 22_000, true, (-0.1, -0.1)),
        ("dist-3", "Regional School District", 32, 15_000, false, (0.05, -0.15)),
    ];
    let generic_counties = ["Main County", "Central County", "North County"];

    entries
        .into_iter()
        .enumerate()
        .map(
            |(idx, (id, name, total_schools, total_students, shelter_capable, (dlat, dlon)))| {
                SchoolDistrictRecord {
                    id: id.to_string(),
                    district_name: name.to_string(),
                    county: profile
                        .counties
                        .get(idx)
                        .cloned()
                        .unwrap_or_else(|| generic_counties[idx].to_string()),
                    state: state.to_uppercase(),
                    total_schools,
                    total_students,
                    emergency_contact: EMERGENCY_CONTACT.to_string(),
                    shelter_capable,
                    lat: Some(profile.center.lat + dlat),
                    lon: Some(profile.center.lon + dlon),
                }
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StateProfiles;

    #[test]
    fn three_districts_of_descending_size() {
        let profiles = StateProfiles::load().unwrap();
        let records = districts(profiles.get("CA"), "CA");

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].total_schools, 85);
        assert_eq!(records[0].total_students, 42_000);
        assert!(records[0].shelter_capable);
        assert!(!records[2].shelter_capable);
        assert!(records[0].total_students > records[1].total_students);
    }

    #[test]
    fn counties_come_from_the_profile() {
        let profiles = StateProfiles::load().unwrap();
        let records = districts(profiles.get("CA"), "CA");
        assert_eq!(records[0].county, "Los Angeles");
        assert_eq!(records[1].county, "San Diego");
    }

    #[test]
    fn unknown_state_uses_generic_counties() {
        let profiles = StateProfiles::load().unwrap();
        let records = districts(profiles.get("ZZ"), "ZZ");
        assert_eq!(records[0].county, "Main County");
        assert_eq!(records[0].state, "ZZ");
        assert!(records[0].lat.is_some());
    }
}
