#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for fetching hazard map data.
//!
//! Each subcommand runs one domain accessor (or the full concurrent
//! dashboard load) and prints the result as pretty JSON, with fallback
//! substitution behaving exactly as it does for the web dashboard.

use clap::{Parser, Subcommand};
use hazard_map_dashboard::{Location, accessors, load_dashboard};
use hazard_map_fallback::StateProfiles;

#[derive(Parser)]
#[command(name = "hazard_map", about = "Emergency-management data fetcher")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load every domain concurrently for a location and print the full
    /// dashboard payload
    Dashboard {
        /// Two-letter state abbreviation (e.g., "CA")
        #[arg(long)]
        state: String,
        /// City name (e.g., "Los Angeles")
        #[arg(long)]
        city: String,
        /// City latitude
        #[arg(long)]
        lat: f64,
        /// City longitude
        #[arg(long)]
        lon: f64,
    },
    /// Active weather alerts for a state
    Alerts {
        /// Two-letter state abbreviation
        #[arg(long)]
        state: String,
    },
    /// Current FEMA disaster declarations for a state
    Disasters {
        /// Two-letter state abbreviation
        #[arg(long)]
        state: String,
    },
    /// Recent earthquakes near a coordinate
    Quakes {
        /// Center latitude
        #[arg(long)]
        lat: f64,
        /// Center longitude
        #[arg(long)]
        lon: f64,
        /// Label for the search center (used in fallback place names)
        #[arg(long, default_value = "selected location")]
        place: String,
    },
    /// FEMA National Risk Index counties for a state
    Risk {
        /// Two-letter state abbreviation
        #[arg(long)]
        state: String,
    },
    /// State-wide Census demographics
    Demographics {
        /// Two-letter state abbreviation
        #[arg(long)]
        state: String,
    },
    /// List the configured state profiles
    States,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let profiles = StateProfiles::load()?;
    let client = hazard_map_source::build_http_client()?;

    let output = match cli.command {
        Commands::Dashboard {
            state,
            city,
            lat,
            lon,
        } => {
            let location = Location {
                state,
                city,
                lat,
                lon,
            };
            let data = load_dashboard(&client, &profiles, &location).await;
            serde_json::to_value(&data)?
        }
        Commands::Alerts { state } => {
            serde_json::to_value(accessors::weather_alerts(&client, &state).await)?
        }
        Commands::Disasters { state } => {
            serde_json::to_value(accessors::disaster_declarations(&client, &state).await)?
        }
        Commands::Quakes { lat, lon, place } => {
            serde_json::to_value(accessors::earthquakes(&client, &place, lat, lon).await)?
        }
        Commands::Risk { state } => {
            serde_json::to_value(accessors::risk_index(&client, &profiles, &state).await)?
        }
        Commands::Demographics { state } => {
            serde_json::to_value(accessors::demographics(&client, &profiles, &state).await)?
        }
        Commands::States => {
            let states: Vec<serde_json::Value> = profiles
                .codes()
                .map(|code| {
                    let profile = profiles.get(code);
                    serde_json::json!({
                        "code": code,
                        "name": profile.name,
                        "population": profile.population,
                        "counties": profile.counties,
                    })
                })
                .collect();
            serde_json::Value::Array(states)
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
