use chrono::{DateTime, Utc};
use sgp4::{Constants, Elements};

use crate::predict::error::PredictError;
use crate::predict::frames::subpoint;
use crate::predict::propagation::propagate_state;
use crate::predict::types::SatellitePosition;

/// Geodetic position and raw state of a satellite at `at` (now when
/// omitted). Unlike the pass sweep, a propagation failure for the single
/// requested instant is surfaced to the caller.
pub fn current_position(
    elements: &Elements,
    constants: &Constants,
    at: Option<DateTime<Utc>>,
) -> Result<SatellitePosition, PredictError> {
    let timestamp = at.unwrap_or_else(Utc::now);
    let state = propagate_state(elements, constants, timestamp)?;
    Ok(subpoint(&state))
}
