//! Running.

use super::{M_IN_KM, Training, Variant, Workout, unpack};
use crate::errors::Result;

/// Running workout.
///
/// Readings: `(action, duration_hours, weight_kg)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    workout: Workout,
}

impl Running {
    const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_SPEED_SHIFT: f64 = 20.0;

    pub fn new(action: f64, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            workout: Workout::new(action, duration_hours, weight_kg),
        }
    }
}

impl Training for Running {
    fn label(&self) -> &'static str {
        Self::LABEL
    }

    fn workout(&self) -> &Workout {
        &self.workout
    }

    fn spent_calories(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        // Goes negative below ~1.1 km/h; kept as is.
        (Self::CALORIES_SPEED_MULTIPLIER * speed - Self::CALORIES_SPEED_SHIFT)
            * self.workout.weight_kg
            / M_IN_KM
            * self.workout.duration_min()
    }
}

impl Variant for Running {
    const CODE: &'static str = "RUN";
    const LABEL: &'static str = "Running";
    const ARITY: usize = 3;

    fn from_readings(readings: &[f64]) -> Result<Self> {
        let [action, duration_hours, weight_kg] = unpack::<3>(Self::CODE, readings)?;
        Ok(Self {
            workout: Workout::new(action, duration_hours, weight_kg),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_and_speed() {
        let running = Running::new(15000.0, 1.0, 75.0);
        assert!((running.distance_km() - 9.75).abs() < 1e-9);
        assert!((running.mean_speed_kmh() - 9.75).abs() < 1e-9);

        let half = Running::new(15000.0, 0.5, 75.0);
        assert!((half.mean_speed_kmh() - half.distance_km() / 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_spent_calories() {
        let running = Running::new(15000.0, 1.0, 75.0);
        assert!((running.spent_calories() - 699.75).abs() < 1e-9);
    }

    #[test]
    fn test_slow_running_burns_negative_calories() {
        let running = Running::new(100.0, 1.0, 75.0);
        assert!(running.spent_calories() < 0.0);
    }

    #[test]
    fn test_from_readings() {
        let running = Running::from_readings(&[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(running, Running::new(15000.0, 1.0, 75.0));
        assert!(Running::from_readings(&[15000.0, 1.0]).is_err());
    }
}
