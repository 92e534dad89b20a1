#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Synthetic record generators.
//!
//! When an upstream call fails or returns nothing, the accessor layer
//! substitutes records from this crate so downstream consumers never handle
//! a partial or missing dataset. Generated records are shape-identical to
//! normalizer output and internally consistent (derived statuses really
//! derive, coordinates cluster around the state's center).
//!
//! Everything that varies does so through an explicit source: numeric
//! jitter comes from the caller's [`rand::Rng`], clock readings from a
//! caller-supplied `now`, and place names from the read-only
//! [`profiles::StateProfiles`] table. Same seed, same state, same instant
//! in, identical records out.

pub mod alerts;
pub mod demographics;
pub mod disasters;
pub mod facilities;
pub mod grants;
pub mod profiles;
pub mod quakes;
pub mod risk;
pub mod schools;

pub use profiles::{ProfileError, StateProfile, StateProfiles};

use rand::Rng;

/// Uniform jitter in `[base, base + span)`.
pub(crate) fn jitter<R: Rng + ?Sized>(rng: &mut R, base: f64, span: f64) -> f64 {
    base + rng.gen_range(0.0..1.0) * span
}
