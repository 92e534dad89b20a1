//! Synthetic hospitals and shelters.
//!
//! Facility names template on the selected city; coordinates cluster just
//! off the state's geographic center so map widgets have something sane to
//! frame.

use hazard_map_domain_models::{HospitalRecord, ShelterRecord, ShelterStatus};
use rand::Rng;

use crate::{jitter, StateProfile};

/// Three hospitals covering the trauma levels the dashboard filters on.
#[must_use]
pub fn hospitals(
    profile: &StateProfile,
    state: &str,
    city: &str,
    rng: &mut impl Rng,
) -> Vec<HospitalRecord> {
    let entries = [
        ("hosp-1", format!("{city} General Hospital"), "100 Hospital Drive", "90010", 450, "Level I", "(555) 111-2222"),
        ("hosp-2", format!("{city} Medical Center"), "200 Healthcare Blvd", "90011", 325, "Level II", "(555) 222-3333"),
        ("hosp-3", "St. Mary's Hospital".to_string(), "300 Medical Plaza", "90012", 275, "Level III", "(555) 333-4444"),
    ];

    entries
        .into_iter()
        .map(|(id, name, address, zip, beds, trauma, phone)| HospitalRecord {
            id: id.to_string(),
            name,
            address: address.to_string(),
            city: city.to_string(),
            state: state.to_uppercase(),
            zip: zip.to_string(),
            lat: profile.center.lat + jitter(rng, 0.0, 0.1),
            lon: profile.center.lon + jitter(rng, 0.0, 0.1),
            beds,
            trauma_level: Some(trauma.to_string()),
            emergency_services: true,
            phone: phone.to_string(),
        })
        .collect()
}

/// Three shelters: two open (one special-needs capable) and one closed.
#[must_use]
pub fn shelters(
    profile: &StateProfile,
    state: &str,
    city: &str,
    rng: &mut impl Rng,
) -> Vec<ShelterRecord> {
    let entries = [
        ("shelter-1", format!("{city} Community Center"), "123 Main Street", "90001", 500, ShelterStatus::Open, "(555) 123-4567", true),
        ("shelter-2", format!("{city} High School"), "456 School Road", "90002", 800, ShelterStatus::Open, "(555) 234-5678", false),
        ("shelter-3", "Red Cross Emergency Shelter".to_string(), "789 Emergency Ave", "90003", 300, ShelterStatus::Closed, "(555) 345-6789", true),
    ];

    entries
        .into_iter()
        .map(
            |(id, name, address, zip, capacity, status, phone, special_needs)| ShelterRecord {
                id: id.to_string(),
                name,
                address: address.to_string(),
                city: city.to_string(),
                state: state.to_uppercase(),
                zip: zip.to_string(),
                lat: profile.center.lat + jitter(rng, 0.0, 0.1),
                lon: profile.center.lon + jitter(rng, 0.0, 0.1),
                capacity,
                status,
                phone: Some(phone.to_string()),
                special_needs,
            },
        )
        .collect()
}
