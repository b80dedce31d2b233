//! Activity variants and the shared distance/speed model.
//!
//! Every variant wraps a [`Workout`] holding the readings common to all
//! activities and implements [`Training`], supplying its own calorie formula.
//! Distance and mean speed come from the trait's provided methods unless a
//! variant overrides them.

mod running;
mod swimming;
mod walking;

use std::fmt;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::errors::{Result, WorkoutError};
use crate::summary::Summary;

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;
/// Stride length shared by running and walking, in meters.
pub const DEFAULT_STEP_LENGTH_M: f64 = 0.65;

/// Readings shared by every activity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Workout {
    /// Steps or strokes counted by the sensor.
    pub action: f64,
    /// Duration in hours.
    pub duration_hours: f64,
    /// Athlete weight in kilograms.
    pub weight_kg: f64,
}

impl Workout {
    pub fn new(action: f64, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action,
            duration_hours,
            weight_kg,
        }
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_hours * MIN_IN_H
    }
}

/// Common contract for all activities.
///
/// `spent_calories` has no shared default: each variant owns its formula.
pub trait Training: fmt::Debug + Send + Sync {
    /// Fixed label shown in the report.
    fn label(&self) -> &'static str;

    /// Readings shared by all activities.
    fn workout(&self) -> &Workout;

    /// Length of one step or stroke in meters.
    fn step_length_m(&self) -> f64 {
        DEFAULT_STEP_LENGTH_M
    }

    /// Distance covered in kilometers.
    fn distance_km(&self) -> f64 {
        self.workout().action * self.step_length_m() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.workout().duration_hours
    }

    /// Spent calories in kcal.
    fn spent_calories(&self) -> f64;

    /// Rejects readings a variant's formulas cannot divide by.
    fn check_divisors(&self) -> Result<()> {
        Ok(())
    }

    /// Computes the summary for this workout.
    ///
    /// A zero or NaN duration leaves speed undefined and is reported as
    /// [`WorkoutError::DegenerateDuration`].
    fn summary(&self) -> Result<Summary> {
        let duration_hours = self.workout().duration_hours;
        if duration_hours == 0.0 || duration_hours.is_nan() {
            return Err(WorkoutError::DegenerateDuration {
                label: self.label(),
                duration_hours,
            });
        }
        self.check_divisors()?;

        Ok(Summary {
            activity_label: self.label(),
            duration_hours,
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        })
    }
}

/// A concrete activity that can be built from a positional reading list.
pub trait Variant: Training + Sized + 'static {
    /// Dispatch code used by the data feed.
    const CODE: &'static str;
    /// Report label.
    const LABEL: &'static str;
    /// Number of readings the constructor takes.
    const ARITY: usize;

    fn from_readings(readings: &[f64]) -> Result<Self>;
}

/// Splits a reading list into exactly `N` positional fields.
pub(crate) fn unpack<const N: usize>(code: &str, readings: &[f64]) -> Result<[f64; N]> {
    <[f64; N]>::try_from(readings).map_err(|_| WorkoutError::ArgumentMismatch {
        code: code.to_string(),
        expected: N,
        actual: readings.len(),
    })
}
