use crate::predict::error::PredictError;
use crate::predict::frames::EARTH_RADIUS_KM;

/// Ground station location. Coordinates are validated on construction,
/// so every `Observer` reaching the pipeline is in range.
#[derive(Debug, Clone, Copy)]
pub struct Observer {
    latitude_deg: f64,
    longitude_deg: f64,
    altitude_m: f64,
}

impl Observer {
    pub fn new(
        latitude_deg: f64,
        longitude_deg: f64,
        altitude_m: f64,
    ) -> Result<Self, PredictError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(PredictError::InvalidObserver(format!(
                "latitude {} outside [-90, 90]",
                latitude_deg
            )));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(PredictError::InvalidObserver(format!(
                "longitude {} outside [-180, 180]",
                longitude_deg
            )));
        }
        if !altitude_m.is_finite() {
            return Err(PredictError::InvalidObserver(format!(
                "altitude {} is not finite",
                altitude_m
            )));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        })
    }

    /// Parse a `"latitude, longitude"` coordinate string.
    pub fn from_coordinates(coordinates: &str, altitude_m: Option<f64>) -> Result<Self, PredictError> {
        let parts: Vec<_> = coordinates.split(',').map(|s| s.trim()).collect();
        if parts.len() < 2 {
            return Err(PredictError::InvalidObserver(format!(
                "expected 'latitude, longitude', got '{}'",
                coordinates
            )));
        }
        let lat = parts[0].parse().map_err(|_| {
            PredictError::InvalidObserver(format!("unparseable latitude '{}'", parts[0]))
        })?;
        let lon = parts[1].parse().map_err(|_| {
            PredictError::InvalidObserver(format!("unparseable longitude '{}'", parts[1]))
        })?;
        Self::new(lat, lon, altitude_m.unwrap_or(0.0))
    }

    pub fn lat_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn lon_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }

    /// Cartesian position on the spherical Earth, in the same frame the
    /// satellite vectors are compared in.
    pub fn position_km(&self) -> [f64; 3] {
        let r = EARTH_RADIUS_KM + self.altitude_m / 1000.0;
        let lat = self.lat_rad();
        let lon = self.lon_rad();
        [
            r * lat.cos() * lon.cos(),
            r * lat.cos() * lon.sin(),
            r * lat.sin(),
        ]
    }
}
