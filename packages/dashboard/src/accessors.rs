//! One infallible accessor per domain.
//!
//! Accessors follow a single pattern: fetch, normalize, and substitute
//! fallback records when the call errors or the normalized result is empty.
//! An empty-but-successful upstream response is treated identically to a
//! failure. Failures surface only as log lines.

use chrono::Utc;
use hazard_map_domain_models::{
    DemographicsRecord, DisasterRecord, EarthquakeEvent, GrantRecord, HistoricalDisasterBucket,
    HospitalRecord, RiskIndexRecord, SchoolDistrictRecord, ShelterRecord, WeatherAlert,
};
use hazard_map_fallback as fallback;
use hazard_map_fallback::StateProfiles;
use hazard_map_source::{census, cms, fema, nces, noaa, nri, usgs};

use crate::Sourced;

/// Search radius for the earthquake query, in kilometers.
pub const EARTHQUAKE_RADIUS_KM: f64 = 500.0;

/// Active weather alerts for a state.
pub async fn weather_alerts(
    client: &reqwest::Client,
    state: &str,
) -> Sourced<Vec<WeatherAlert>> {
    match noaa::fetch_active_alerts(client, noaa::NOAA_API_URL, state).await {
        Ok(body) => {
            let alerts = noaa::normalize_alerts(&body);
            if alerts.is_empty() {
                log::info!("No active alerts for {state}, substituting fallback alerts");
                Sourced::fallback(fallback::alerts::weather_alerts(state, Utc::now()))
            } else {
                Sourced::live(alerts)
            }
        }
        Err(e) => {
            log::warn!("Weather alert fetch failed for {state}: {e}");
            Sourced::fallback(fallback::alerts::weather_alerts(state, Utc::now()))
        }
    }
}

/// Current disaster declarations for a state.
pub async fn disaster_declarations(
    client: &reqwest::Client,
    state: &str,
) -> Sourced<Vec<DisasterRecord>> {
    let now = Utc::now();
    match fema::fetch_declarations(client, fema::FEMA_API_URL, state, fema::DECLARATIONS_TOP).await
    {
        Ok(body) => {
            let records = fema::normalize_declarations(&body, now);
            if records.is_empty() {
                log::info!("No FEMA declarations for {state}, substituting fallback records");
                Sourced::fallback(fallback::disasters::declarations(state, now))
            } else {
                Sourced::live(records)
            }
        }
        Err(e) => {
            log::warn!("FEMA declarations fetch failed for {state}: {e}");
            Sourced::fallback(fallback::disasters::declarations(state, now))
        }
    }
}

/// Historical declaration buckets for the trend estimator.
pub async fn historical_disasters(
    client: &reqwest::Client,
    state: &str,
) -> Sourced<Vec<HistoricalDisasterBucket>> {
    match fema::fetch_declarations(client, fema::FEMA_API_URL, state, fema::HISTORY_TOP).await {
        Ok(body) => {
            let buckets = fema::aggregate_history(&body);
            if buckets.is_empty() {
                log::info!("No FEMA history for {state}, substituting the fixed series");
                Sourced::fallback(fallback::disasters::historical_buckets())
            } else {
                Sourced::live(buckets)
            }
        }
        Err(e) => {
            log::warn!("FEMA history fetch failed for {state}: {e}");
            Sourced::fallback(fallback::disasters::historical_buckets())
        }
    }
}

/// Recent earthquakes near a coordinate.
pub async fn earthquakes(
    client: &reqwest::Client,
    city: &str,
    lat: f64,
    lon: f64,
) -> Sourced<Vec<EarthquakeEvent>> {
    let now = Utc::now();
    match usgs::fetch_earthquakes(client, usgs::USGS_API_URL, lat, lon, EARTHQUAKE_RADIUS_KM, now)
        .await
    {
        Ok(body) => {
            let events = usgs::normalize_earthquakes(&body);
            if events.is_empty() {
                log::info!("No recent earthquakes near {city}, substituting fallback events");
                Sourced::fallback(fallback::quakes::earthquakes(
                    city,
                    lat,
                    lon,
                    now,
                    &mut rand::thread_rng(),
                ))
            } else {
                Sourced::live(events)
            }
        }
        Err(e) => {
            log::warn!("USGS fetch failed near {city}: {e}");
            Sourced::fallback(fallback::quakes::earthquakes(
                city,
                lat,
                lon,
                now,
                &mut rand::thread_rng(),
            ))
        }
    }
}

/// County risk index records for a state.
pub async fn risk_index(
    client: &reqwest::Client,
    profiles: &StateProfiles,
    state: &str,
) -> Sourced<Vec<RiskIndexRecord>> {
    match nri::fetch_counties(client, nri::NRI_API_URL, state).await {
        Ok(body) => {
            let records = nri::normalize_counties(&body, state);
            if records.is_empty() {
                log::info!("No NRI counties for {state}, substituting fallback records");
                Sourced::fallback(fallback::risk::risk_index(
                    profiles.get(state),
                    state,
                    &mut rand::thread_rng(),
                ))
            } else {
                Sourced::live(records)
            }
        }
        Err(e) => {
            log::warn!("NRI fetch failed for {state}: {e}");
            Sourced::fallback(fallback::risk::risk_index(
                profiles.get(state),
                state,
                &mut rand::thread_rng(),
            ))
        }
    }
}

/// Hospitals in a state.
pub async fn hospitals(
    client: &reqwest::Client,
    profiles: &StateProfiles,
    state: &str,
    city: &str,
) -> Sourced<Vec<HospitalRecord>> {
    let center = profiles.get(state).center;
    match cms::fetch_hospitals(client, cms::CMS_API_URL, state).await {
        Ok(body) => {
            let rows = cms::hospital_rows(&body);
            if rows.is_empty() {
                log::info!("No CMS hospitals for {state}, substituting fallback records");
                Sourced::fallback(fallback::facilities::hospitals(
                    profiles.get(state),
                    state,
                    city,
                    &mut rand::thread_rng(),
                ))
            } else {
                Sourced::live(cms::normalize_hospitals(rows, state, city, center.lat, center.lon))
            }
        }
        Err(e) => {
            log::warn!("CMS hospital fetch failed for {state}: {e}");
            Sourced::fallback(fallback::facilities::hospitals(
                profiles.get(state),
                state,
                city,
                &mut rand::thread_rng(),
            ))
        }
    }
}

/// Emergency shelters near a city.
///
/// The FEMA shelter-county dataset is probed so the call pattern matches
/// every other domain, but it carries no usable shelter locations; the
/// records themselves are always generated.
pub async fn shelters(
    client: &reqwest::Client,
    profiles: &StateProfiles,
    state: &str,
    city: &str,
) -> Sourced<Vec<ShelterRecord>> {
    if let Err(e) = fema::fetch_shelter_counties(client, fema::FEMA_API_URL, state).await {
        log::warn!("FEMA shelter-county probe failed for {state}: {e}");
    }
    Sourced::fallback(fallback::facilities::shelters(
        profiles.get(state),
        state,
        city,
        &mut rand::thread_rng(),
    ))
}

/// School districts in a state.
pub async fn school_districts(
    client: &reqwest::Client,
    profiles: &StateProfiles,
    state: &str,
) -> Sourced<Vec<SchoolDistrictRecord>> {
    match nces::fetch_school_directory(client, nces::NCES_API_URL, state).await {
        Ok(body) => {
            let districts = nces::normalize_districts(nces::school_rows(&body), state);
            if districts.is_empty() {
                log::info!("No school directory rows for {state}, substituting fallback records");
                Sourced::fallback(fallback::schools::districts(profiles.get(state), state))
            } else {
                Sourced::live(districts)
            }
        }
        Err(e) => {
            log::warn!("School directory fetch failed for {state}: {e}");
            Sourced::fallback(fallback::schools::districts(profiles.get(state), state))
        }
    }
}

/// State-wide demographics.
pub async fn demographics(
    client: &reqwest::Client,
    profiles: &StateProfiles,
    state: &str,
) -> Sourced<DemographicsRecord> {
    let fips = hazard_map_geography_models::state_fips(&state.to_uppercase());
    let result = match census::fetch_acs_state(client, census::CENSUS_API_URL, fips).await {
        Ok(body) => census::acs_rows(&body)
            .map(|(_, values)| census::normalize_demographics(state, values)),
        Err(e) => Err(e),
    };

    match result {
        Ok(record) => Sourced::live(record),
        Err(e) => {
            log::warn!("Census fetch failed for {state}: {e}");
            Sourced::fallback(fallback::demographics::demographics(
                profiles.get(state),
                state,
                &mut rand::thread_rng(),
            ))
        }
    }
}

/// EMPG grant awards for a state.
pub async fn grants(client: &reqwest::Client, state: &str) -> Sourced<Vec<GrantRecord>> {
    let now = Utc::now();
    match fema::fetch_grants(client, fema::FEMA_API_URL, state).await {
        Ok(body) => {
            let records = fema::normalize_grants(&body, state);
            if records.is_empty() {
                log::info!("No EMPG grants for {state}, substituting fallback records");
                Sourced::fallback(fallback::grants::grants(state, now, &mut rand::thread_rng()))
            } else {
                Sourced::live(records)
            }
        }
        Err(e) => {
            log::warn!("EMPG grant fetch failed for {state}: {e}");
            Sourced::fallback(fallback::grants::grants(state, now, &mut rand::thread_rng()))
        }
    }
}
