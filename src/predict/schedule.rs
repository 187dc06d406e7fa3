use chrono::{DateTime, Duration, Utc};

use crate::predict::error::PredictError;

const MAX_STEP_MINUTES: f64 = 5.0; // never sample coarser than this
const MIN_SAMPLES_PER_ORBIT: f64 = 12.0;

/// Sample instants for one prediction sweep.
///
/// Instants are derived from the start and the sample index, so the
/// schedule can be replayed deterministically and iterated lazily
/// without a shared cursor.
#[derive(Debug, Clone)]
pub struct SampleSchedule {
    start: DateTime<Utc>,
    step_minutes: f64,
    total_samples: usize,
}

impl SampleSchedule {
    /// Build the adaptive schedule for one satellite and horizon.
    ///
    /// The step guarantees at least 12 samples per revolution and never
    /// exceeds a 5 minute cadence, bounding both undersampling of fast
    /// low orbits and oversampling of slow ones.
    pub fn new(
        mean_motion_rev_day: f64,
        start: DateTime<Utc>,
        horizon_days: f64,
    ) -> Result<Self, PredictError> {
        if !horizon_days.is_finite() || horizon_days <= 0.0 {
            return Err(PredictError::InvalidHorizon(horizon_days));
        }
        if !mean_motion_rev_day.is_finite() || mean_motion_rev_day <= 0.0 {
            return Err(PredictError::InvalidElements(format!(
                "mean motion must be positive, got {}",
                mean_motion_rev_day
            )));
        }

        let period_minutes = 1440.0 / mean_motion_rev_day;
        let step_minutes = MAX_STEP_MINUTES.min(period_minutes / MIN_SAMPLES_PER_ORBIT);
        let total_samples = (horizon_days * 1440.0 / step_minutes).floor() as usize;

        Ok(Self {
            start,
            step_minutes,
            total_samples,
        })
    }

    fn instant(&self, index: usize) -> DateTime<Utc> {
        let offset_ms = index as f64 * self.step_minutes * 60_000.0;
        self.start + Duration::milliseconds(offset_ms.round() as i64)
    }

    /// End of the swept horizon, one step past the final sample. Used to
    /// seal a pass still open when the sweep runs out.
    pub fn horizon_end(&self) -> DateTime<Utc> {
        let offset_ms = self.total_samples as f64 * self.step_minutes * 60_000.0;
        self.start + Duration::milliseconds(offset_ms.round() as i64)
    }

    /// Lazy iterator over the sample instants.
    pub fn iter(&self) -> impl Iterator<Item = DateTime<Utc>> + '_ {
        (0..self.total_samples).map(move |i| self.instant(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn slow_orbits_are_capped_at_five_minutes() {
        // ISS-like: ~91.6 minute period, period/12 > 5.
        let schedule = SampleSchedule::new(15.72, start(), 3.0).unwrap();
        assert_eq!(schedule.step_minutes, 5.0);
        assert_eq!(schedule.total_samples, (3.0_f64 * 1440.0 / 5.0) as usize);
    }

    #[test]
    fn fast_orbits_get_twelve_samples_per_revolution() {
        // 30 minute period: step must shrink to period/12.
        let schedule = SampleSchedule::new(48.0, start(), 1.0).unwrap();
        assert!((schedule.step_minutes - 2.5).abs() < 1e-12);

        let period_minutes = 1440.0 / 48.0;
        assert!(schedule.step_minutes > 0.0);
        assert!(schedule.step_minutes <= MAX_STEP_MINUTES);
        assert!(schedule.step_minutes <= period_minutes / 12.0);
    }

    #[test]
    fn rejects_degenerate_inputs() {
        assert!(SampleSchedule::new(0.0, start(), 3.0).is_err());
        assert!(SampleSchedule::new(-1.0, start(), 3.0).is_err());
        assert!(SampleSchedule::new(f64::NAN, start(), 3.0).is_err());
        assert!(SampleSchedule::new(15.72, start(), 0.0).is_err());
        assert!(SampleSchedule::new(15.72, start(), f64::NAN).is_err());
    }

    #[test]
    fn replays_identically() {
        let schedule = SampleSchedule::new(15.72, start(), 0.5).unwrap();
        let first: Vec<_> = schedule.iter().collect();
        let second: Vec<_> = schedule.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), schedule.total_samples);
    }

    #[test]
    fn samples_are_strictly_increasing_and_end_before_horizon() {
        let schedule = SampleSchedule::new(15.72, start(), 0.25).unwrap();
        let instants: Vec<_> = schedule.iter().collect();
        assert!(instants.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(instants[0], start());
        assert!(*instants.last().unwrap() < schedule.horizon_end());
    }
}
