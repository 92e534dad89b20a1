//! Synthetic earthquake events.

use chrono::{DateTime, TimeDelta, Utc};
use hazard_map_domain_models::{EarthquakeEvent, SIGNIFICANT_MAGNITUDE};
use rand::Rng;

use crate::jitter;

/// Fixed offsets (degrees) spreading the synthetic epicenters around the
/// query center.
const OFFSETS: [(f64, f64); 3] = [(0.3, 0.2), (-0.25, 0.4), (0.1, -0.35)];

/// Compass labels matching [`OFFSETS`].
const DIRECTIONS: [&str; 3] = ["NE", "SE", "NW"];

/// Three recent events near the query center. The first entry is always at
/// or above magnitude 4.0 so the dashboard's significant-event view has
/// something to show.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn earthquakes(
    city: &str,
    lat: f64,
    lon: f64,
    now: DateTime<Utc>,
    rng: &mut impl Rng,
) -> Vec<EarthquakeEvent> {
    OFFSETS
        .iter()
        .zip(DIRECTIONS)
        .enumerate()
        .map(|(idx, ((dlat, dlon), direction))| {
            let magnitude = if idx == 0 {
                jitter(rng, SIGNIFICANT_MAGNITUDE, 1.3)
            } else {
                jitter(rng, 2.5, 1.5)
            };
            let days_ago = jitter(rng, 1.0, 28.0);
            let time = now - TimeDelta::minutes((days_ago * 24.0 * 60.0) as i64);
            let distance_km = (10.0 + jitter(rng, 0.0, 40.0)).round();

            EarthquakeEvent {
                id: format!("quake-{}", idx + 1),
                magnitude: (magnitude * 10.0).round() / 10.0,
                place: format!("{distance_km}km {direction} of {city}"),
                time: time.timestamp_millis(),
                depth: (jitter(rng, 5.0, 15.0) * 10.0).round() / 10.0,
                lat: lat + dlat + jitter(rng, -0.05, 0.1),
                lon: lon + dlon + jitter(rng, -0.05, 0.1),
                url: String::new(),
                tsunami: false,
                felt: (idx == 0).then(|| rng.gen_range(50..500)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn first_event_is_significant() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let quakes = earthquakes("Sacramento", 38.58, -121.49, Utc::now(), &mut rng);
        assert_eq!(quakes.len(), 3);
        assert!(quakes[0].magnitude >= 4.0);
        assert!(quakes.iter().all(|q| q.magnitude >= 2.5));
        assert!(quakes[0].place.contains("Sacramento"));
        assert!(quakes[0].felt.is_some());
    }

    #[test]
    fn events_fall_within_the_lookback_window() {
        let now = Utc::now();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let quakes = earthquakes("Reno", 39.52, -119.81, now, &mut rng);
        let floor = (now - TimeDelta::days(30)).timestamp_millis();
        assert!(quakes.iter().all(|q| q.time >= floor && q.time <= now.timestamp_millis()));
    }

    #[test]
    fn same_seed_same_events() {
        let now = Utc::now();
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(
            earthquakes("Boise", 43.61, -116.20, now, &mut a),
            earthquakes("Boise", 43.61, -116.20, now, &mut b)
        );
    }
}
