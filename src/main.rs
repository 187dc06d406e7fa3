mod catalog;
mod config;
mod predict;

use std::process::ExitCode;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use crate::catalog::TleStore;
use crate::config::Config;
use crate::predict::{current_position, predict_passes, Observer};

#[derive(Parser)]
#[command(name = "passcast")]
#[command(about = "Satellite pass prediction from a ground station")]
struct Cli {
    /// Configuration file
    #[arg(short, long, default_value = "passcast.yaml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the satellites in the local TLE catalog
    List,
    /// Print the current position of a satellite
    Position {
        /// NORAD catalog id
        norad_id: u32,
        /// Evaluate at this instant (RFC3339) instead of now
        #[arg(long)]
        at: Option<String>,
    },
    /// Predict passes of a satellite over the ground station
    Passes {
        /// NORAD catalog id
        norad_id: u32,
        /// Observer latitude in degrees (defaults to the configured station)
        #[arg(long, requires = "lon")]
        lat: Option<f64>,
        /// Observer longitude in degrees
        #[arg(long, requires = "lat")]
        lon: Option<f64>,
        /// Observer altitude in meters
        #[arg(long)]
        alt_m: Option<f64>,
        /// Prediction horizon in days
        #[arg(long)]
        days: Option<f64>,
        /// Minimum elevation in degrees
        #[arg(long)]
        min_elevation: Option<f64>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let config = match Config::from_file(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading {}: {}", cli.config, e);
            return ExitCode::FAILURE;
        }
    };

    let max_age = match config.catalog_max_age() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error in {}: {}", cli.config, e);
            return ExitCode::FAILURE;
        }
    };

    let mut store = TleStore::new(config.catalog.tle_folder.clone(), max_age);
    if let Err(e) = store.ensure_fresh() {
        eprintln!("Error loading TLE catalog: {}", e);
        return ExitCode::FAILURE;
    }

    match cli.command {
        Commands::List => list(&store),
        Commands::Position { norad_id, at } => position(&store, norad_id, at.as_deref()),
        Commands::Passes {
            norad_id,
            lat,
            lon,
            alt_m,
            days,
            min_elevation,
        } => passes(&store, &config, norad_id, lat, lon, alt_m, days, min_elevation),
    }
}

fn list(store: &TleStore) -> ExitCode {
    let infos: Vec<_> = store.satellites().into_iter().map(|e| &e.info).collect();
    print_json(&infos)
}

fn position(store: &TleStore, norad_id: u32, at: Option<&str>) -> ExitCode {
    let Some(entry) = store.get(norad_id) else {
        eprintln!("Satellite {} not found in catalog", norad_id);
        return ExitCode::FAILURE;
    };

    let at = match at {
        Some(s) => match DateTime::parse_from_rfc3339(s) {
            Ok(dt) => Some(dt.with_timezone(&Utc)),
            Err(e) => {
                eprintln!("Invalid timestamp '{}': {}", s, e);
                return ExitCode::FAILURE;
            }
        },
        None => None,
    };

    match current_position(&entry.elements, &entry.constants, at) {
        Ok(pos) => print_json(&pos),
        Err(e) => {
            eprintln!("Error computing position of {}: {}", entry.info.name, e);
            ExitCode::FAILURE
        }
    }
}

fn passes(
    store: &TleStore,
    config: &Config,
    norad_id: u32,
    lat: Option<f64>,
    lon: Option<f64>,
    alt_m: Option<f64>,
    days: Option<f64>,
    min_elevation: Option<f64>,
) -> ExitCode {
    let Some(entry) = store.get(norad_id) else {
        eprintln!("Satellite {} not found in catalog", norad_id);
        return ExitCode::FAILURE;
    };

    let observer = match (lat, lon) {
        (Some(lat), Some(lon)) => Observer::new(lat, lon, alt_m.unwrap_or(0.0)),
        _ => {
            log::info!(
                "using configured station '{}'",
                config.station.name.as_deref().unwrap_or("unnamed")
            );
            Observer::from_coordinates(&config.station.coordinates, Some(config.station.altitude_m))
        }
    };
    let observer = match observer {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let days = days.unwrap_or(config.defaults.horizon_days);
    let min_elevation = min_elevation.unwrap_or(config.defaults.min_elevation_deg);

    log::info!(
        "predicting passes of {} over the next {} days (min elevation {} deg)",
        entry.info.name,
        days,
        min_elevation
    );

    match predict_passes(&entry.elements, &entry.constants, &observer, days, min_elevation) {
        Ok(found) => {
            if found.is_empty() {
                log::info!("no passes found for {}", entry.info.name);
            }
            print_json(&found)
        }
        Err(e) => {
            eprintln!("Error predicting passes of {}: {}", entry.info.name, e);
            ExitCode::FAILURE
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(s) => {
            println!("{}", s);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            ExitCode::FAILURE
        }
    }
}
