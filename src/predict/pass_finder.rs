use chrono::{DateTime, Utc};
use sgp4::{Constants, Elements};

use crate::predict::error::PredictError;
use crate::predict::frames::look_angles;
use crate::predict::observer::Observer;
use crate::predict::propagation::propagate_state;
use crate::predict::schedule::SampleSchedule;
use crate::predict::types::{ElevationSample, PassRecord};

/// Detector state. A pass record exists exactly while the satellite is
/// visible, so "visible without an open record" cannot be represented.
enum Visibility {
    NotVisible,
    Visible(OpenPass),
}

/// Pass being tracked between its rising and falling edges.
struct OpenPass {
    aos_time: DateTime<Utc>,
    max_elevation_deg: f64,
    max_elevation_time: DateTime<Utc>,
}

impl OpenPass {
    fn begin(sample: &ElevationSample) -> Self {
        Self {
            aos_time: sample.timestamp,
            max_elevation_deg: sample.elevation_deg,
            max_elevation_time: sample.timestamp,
        }
    }

    /// Track the running maximum. Strict greater-than: ties keep the
    /// earlier culmination time.
    fn observe(&mut self, sample: &ElevationSample) {
        if sample.elevation_deg > self.max_elevation_deg {
            self.max_elevation_deg = sample.elevation_deg;
            self.max_elevation_time = sample.timestamp;
        }
    }

    fn seal(self, los_time: DateTime<Utc>) -> PassRecord {
        let duration_seconds = (los_time - self.aos_time).num_milliseconds() as f64 / 1000.0;
        PassRecord {
            aos_time: self.aos_time,
            los_time,
            max_elevation_deg: self.max_elevation_deg,
            max_elevation_time: self.max_elevation_time,
            duration_seconds,
        }
    }
}

/// Find all passes above `min_elevation_deg` within `horizon_days`
/// starting now.
pub fn predict_passes(
    elements: &Elements,
    constants: &Constants,
    observer: &Observer,
    horizon_days: f64,
    min_elevation_deg: f64,
) -> Result<Vec<PassRecord>, PredictError> {
    predict_passes_from(
        elements,
        constants,
        observer,
        Utc::now(),
        horizon_days,
        min_elevation_deg,
    )
}

/// Same as [`predict_passes`] with an explicit sweep start, for
/// deterministic runs.
pub fn predict_passes_from(
    elements: &Elements,
    constants: &Constants,
    observer: &Observer,
    start: DateTime<Utc>,
    horizon_days: f64,
    min_elevation_deg: f64,
) -> Result<Vec<PassRecord>, PredictError> {
    let schedule = SampleSchedule::new(elements.mean_motion, start, horizon_days)?;

    Ok(sweep(&schedule, min_elevation_deg, |timestamp| {
        match propagate_state(elements, constants, timestamp) {
            Ok(state) => look_angles(&state, observer),
            Err(e) => {
                log::debug!("skipping sample at {}: {}", timestamp, e);
                None
            }
        }
    }))
}

/// Run the two-state visibility machine over the schedule.
///
/// Samples for which `sample_at` yields nothing leave the detector state
/// untouched. A pass still open after the final sample is sealed at the
/// horizon boundary, so a truncated pass is still reported.
fn sweep(
    schedule: &SampleSchedule,
    min_elevation_deg: f64,
    mut sample_at: impl FnMut(DateTime<Utc>) -> Option<ElevationSample>,
) -> Vec<PassRecord> {
    let mut passes = Vec::new();
    let mut visibility = Visibility::NotVisible;

    for timestamp in schedule.iter() {
        let Some(sample) = sample_at(timestamp) else {
            continue;
        };
        let visible = sample.elevation_deg >= min_elevation_deg;

        visibility = match visibility {
            // Rising edge: open a new pass.
            Visibility::NotVisible if visible => Visibility::Visible(OpenPass::begin(&sample)),
            Visibility::NotVisible => Visibility::NotVisible,
            Visibility::Visible(mut open) if visible => {
                open.observe(&sample);
                Visibility::Visible(open)
            }
            // Falling edge: seal and emit.
            Visibility::Visible(open) => {
                passes.push(open.seal(sample.timestamp));
                Visibility::NotVisible
            }
        };
    }

    if let Visibility::Visible(open) = visibility {
        passes.push(open.seal(schedule.horizon_end()));
    }

    passes
}
