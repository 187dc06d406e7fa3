use chrono::{DateTime, Utc};
use serde::Serialize;

/// Inertial-frame satellite state at one instant. Produced fresh per
/// evaluation, never mutated.
#[derive(Debug, Clone, Copy)]
pub struct StateVector {
    pub timestamp: DateTime<Utc>,
    pub position_km: [f64; 3],
    pub velocity_km_s: [f64; 3],
}

/// Observer-relative look angles for one sample.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ElevationSample {
    pub timestamp: DateTime<Utc>,
    pub elevation_deg: f64,
    pub azimuth_deg: f64,
    pub range_km: f64,
}

/// A completed visibility pass over the ground station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassRecord {
    pub aos_time: DateTime<Utc>,
    pub los_time: DateTime<Utc>,
    pub max_elevation_deg: f64,
    pub max_elevation_time: DateTime<Utc>,
    pub duration_seconds: f64,
}

/// Geodetic subpoint plus raw state of a satellite at a single instant.
#[derive(Debug, Clone, Serialize)]
pub struct SatellitePosition {
    pub timestamp: DateTime<Utc>,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_km: f64,
    pub position_km: [f64; 3],
    pub velocity_km_s: [f64; 3],
    pub speed_km_s: f64,
}
