use crate::predict::observer::Observer;
use crate::predict::types::{ElevationSample, SatellitePosition, StateVector};

/// Mean Earth radius of the spherical-Earth model.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Reduce a satellite state to observer-relative look angles.
///
/// The observer position is built from latitude/longitude only and
/// subtracted directly from the satellite vector; Earth rotation against
/// the inertial frame is not applied. Returns `None` for degenerate
/// states (non-finite components or zero range) so the sweep can skip
/// the sample instead of comparing against NaN.
pub fn look_angles(state: &StateVector, observer: &Observer) -> Option<ElevationSample> {
    let obs = observer.position_km();
    let dr = [
        state.position_km[0] - obs[0],
        state.position_km[1] - obs[1],
        state.position_km[2] - obs[2],
    ];
    let range_km = (dr[0] * dr[0] + dr[1] * dr[1] + dr[2] * dr[2]).sqrt();
    if !range_km.is_finite() || range_km <= 0.0 {
        return None;
    }

    let (east, north, up) = ecef_to_enu(dr, observer.lat_rad(), observer.lon_rad());
    let elevation = (up / range_km).asin().to_degrees();
    let azimuth = east.atan2(north).to_degrees().rem_euclid(360.0);
    if !elevation.is_finite() || !azimuth.is_finite() {
        return None;
    }

    Some(ElevationSample {
        timestamp: state.timestamp,
        elevation_deg: round2(elevation),
        azimuth_deg: round2(azimuth),
        range_km: round2(range_km),
    })
}

/// Rotate an observer-to-target vector into the local East-North-Up basis.
pub fn ecef_to_enu(dr: [f64; 3], lat_rad: f64, lon_rad: f64) -> (f64, f64, f64) {
    let sin_lat = lat_rad.sin();
    let cos_lat = lat_rad.cos();
    let sin_lon = lon_rad.sin();
    let cos_lon = lon_rad.cos();

    let east = -sin_lon * dr[0] + cos_lon * dr[1];
    let north = -sin_lat * cos_lon * dr[0] - sin_lat * sin_lon * dr[1] + cos_lat * dr[2];
    let up = cos_lat * cos_lon * dr[0] + cos_lat * sin_lon * dr[1] + sin_lat * dr[2];
    (east, north, up)
}

/// Geodetic subpoint of a state vector over the spherical Earth.
pub fn subpoint(state: &StateVector) -> SatellitePosition {
    let [x, y, z] = state.position_km;
    let [vx, vy, vz] = state.velocity_km_s;
    let r_xy = (x * x + y * y).sqrt();
    let r = (x * x + y * y + z * z).sqrt();

    SatellitePosition {
        timestamp: state.timestamp,
        latitude_deg: z.atan2(r_xy).to_degrees(),
        longitude_deg: y.atan2(x).to_degrees(),
        altitude_km: r - EARTH_RADIUS_KM,
        position_km: state.position_km,
        velocity_km_s: state.velocity_km_s,
        speed_km_s: (vx * vx + vy * vy + vz * vz).sqrt(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
