//! Sports walking.

use super::{Training, Variant, Workout, unpack};
use crate::errors::{Result, WorkoutError};

/// Sports walking workout.
///
/// Readings: `(action, duration_hours, weight_kg, height_cm)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    workout: Workout,
    height_cm: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(action: f64, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            workout: Workout::new(action, duration_hours, weight_kg),
            height_cm,
        }
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Training for SportsWalking {
    fn label(&self) -> &'static str {
        Self::LABEL
    }

    fn workout(&self) -> &Workout {
        &self.workout
    }

    fn spent_calories(&self) -> f64 {
        let weight = self.workout.weight_kg;
        let speed = self.mean_speed_kmh();
        let speed_height = floor_div(speed.powi(2), self.height_cm);
        (Self::CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_height * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * self.workout.duration_min()
    }

    fn check_divisors(&self) -> Result<()> {
        if self.height_cm == 0.0 {
            return Err(WorkoutError::ZeroDivisor {
                label: Self::LABEL,
                field: "height_cm",
            });
        }
        Ok(())
    }
}

impl Variant for SportsWalking {
    const CODE: &'static str = "WLK";
    const LABEL: &'static str = "SportsWalking";
    const ARITY: usize = 4;

    fn from_readings(readings: &[f64]) -> Result<Self> {
        let [action, duration_hours, weight_kg, height_cm] = unpack::<4>(Self::CODE, readings)?;
        Ok(Self {
            workout: Workout::new(action, duration_hours, weight_kg),
            height_cm,
        })
    }
}

/// Floor division on floats, rounded from the exact remainder rather than
/// from the already rounded quotient.
fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floor = div.floor();
    if div - floor > 0.5 { floor + 1.0 } else { floor }
}
