//! Read-only state profile table.
//!
//! County lists, population estimates, and geographic centers are baked
//! into the binary from `profiles/states.toml` at compile time, the same
//! way the system embeds other static configuration. Generators take a
//! [`StateProfile`] rather than reaching into a global, so tests can swap
//! profiles freely.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Embedded profile table, parsed once per [`StateProfiles::load`] call.
const STATE_PROFILES_TOML: &str = include_str!("../profiles/states.toml");

/// Geographic center used to place synthetic facilities.
pub const NATIONAL_CENTER: Center = Center {
    lat: 39.8283,
    lon: -98.5795,
};

/// Population estimate used when a state is not in the table.
const GENERIC_POPULATION: u64 = 5_000_000;

/// Errors that can occur loading the profile table.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// The embedded TOML failed to parse.
    #[error("State profile table is invalid: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Center {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

/// Static facts about one state, used to template synthetic records.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StateProfile {
    /// Full state name.
    pub name: String,
    /// Rounded resident population estimate.
    pub population: u64,
    /// Approximate geographic center.
    pub center: Center,
    /// Most-populous counties, in order.
    pub counties: Vec<String>,
}

impl StateProfile {
    /// The placeholder profile used for state codes absent from the table.
    fn generic() -> Self {
        Self {
            name: "Unknown".to_string(),
            population: GENERIC_POPULATION,
            center: NATIONAL_CENTER,
            counties: [
                "Main County",
                "Central County",
                "North County",
                "South County",
                "East County",
                "West County",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
        }
    }
}

/// The full profile table plus the generic placeholder.
#[derive(Debug, Clone)]
pub struct StateProfiles {
    states: BTreeMap<String, StateProfile>,
    generic: StateProfile,
}

impl StateProfiles {
    /// Parses the embedded profile table.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError`] if the embedded TOML is malformed.
    pub fn load() -> Result<Self, ProfileError> {
        let states: BTreeMap<String, StateProfile> = toml::from_str(STATE_PROFILES_TOML)?;
        Ok(Self {
            states,
            generic: StateProfile::generic(),
        })
    }

    /// Looks up a state profile by two-letter code (case-insensitive).
    ///
    /// Unknown codes get the generic placeholder profile, never a failure.
    #[must_use]
    pub fn get(&self, state: &str) -> &StateProfile {
        self.states
            .get(&state.to_uppercase())
            .unwrap_or(&self.generic)
    }

    /// Iterates the configured state codes in alphabetical order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_table_parses() {
        let profiles = StateProfiles::load().unwrap();
        assert_eq!(profiles.codes().count(), 51);
    }

    #[test]
    fn every_profile_is_complete() {
        let profiles = StateProfiles::load().unwrap();
        for code in profiles.codes() {
            let profile = profiles.get(code);
            assert!(!profile.counties.is_empty(), "{code} has no counties");
            assert!(profile.population > 0, "{code} has no population");
            assert!(
                profile.center.lat > 15.0 && profile.center.lat < 72.0,
                "{code} center latitude out of range"
            );
        }
    }

    #[test]
    fn known_state_pins() {
        let profiles = StateProfiles::load().unwrap();
        assert_eq!(profiles.get("CA").population, 39_500_000);
        assert_eq!(profiles.get("ca").name, "California");
        assert_eq!(profiles.get("TX").population, 29_000_000);
        assert_eq!(profiles.get("CA").counties[0], "Los Angeles");
    }

    #[test]
    fn unknown_state_gets_generic_profile() {
        let profiles = StateProfiles::load().unwrap();
        let profile = profiles.get("ZZ");
        assert_eq!(profile.counties[0], "Main County");
        assert_eq!(profile.population, 5_000_000);
        assert!((profile.center.lat - 39.8283).abs() < f64::EPSILON);
    }
}
