use chrono::{DateTime, Utc};
use sgp4::{Constants, Elements};

use crate::predict::error::PredictError;
use crate::predict::types::StateVector;

/// Propagate the orbital state to `timestamp`.
///
/// The offset handed to the propagator is minutes since the TLE's own
/// epoch. Vectors come back in the propagator's inertial frame (km,
/// km/s); non-finite output is rejected here so downstream code never
/// compares against NaN.
pub fn propagate_state(
    elements: &Elements,
    constants: &Constants,
    timestamp: DateTime<Utc>,
) -> Result<StateVector, PredictError> {
    let minutes = elements
        .datetime_to_minutes_since_epoch(&timestamp.naive_utc())
        .map_err(|e| PredictError::Propagation(e.to_string()))?;

    let prediction = constants
        .propagate(minutes)
        .map_err(|e| PredictError::Propagation(e.to_string()))?;

    let degenerate = prediction
        .position
        .iter()
        .chain(prediction.velocity.iter())
        .any(|v| !v.is_finite());
    if degenerate {
        return Err(PredictError::Propagation(
            "propagator returned a non-finite state vector".into(),
        ));
    }

    Ok(StateVector {
        timestamp,
        position_km: prediction.position,
        velocity_km_s: prediction.velocity,
    })
}
