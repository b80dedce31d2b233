//! Swimming.

use super::{M_IN_KM, Training, Variant, Workout, unpack};
use crate::errors::Result;

/// Swimming workout.
///
/// Readings: `(action, duration_hours, weight_kg, pool_length_m, pool_lap_count)`.
///
/// Distance still counts strokes, while mean speed is taken from the pool
/// length and the number of laps. The two are independent of each other.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    workout: Workout,
    pool_length_m: f64,
    pool_lap_count: f64,
}

impl Swimming {
    const STROKE_LENGTH_M: f64 = 1.38;
    const CALORIES_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: f64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lap_count: f64,
    ) -> Self {
        Self {
            workout: Workout::new(action, duration_hours, weight_kg),
            pool_length_m,
            pool_lap_count,
        }
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub fn pool_lap_count(&self) -> f64 {
        self.pool_lap_count
    }
}

impl Training for Swimming {
    fn label(&self) -> &'static str {
        Self::LABEL
    }

    fn workout(&self) -> &Workout {
        &self.workout
    }

    fn step_length_m(&self) -> f64 {
        Self::STROKE_LENGTH_M
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_lap_count / M_IN_KM / self.workout.duration_hours
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + Self::CALORIES_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.workout.weight_kg
    }
}

impl Variant for Swimming {
    const CODE: &'static str = "SWM";
    const LABEL: &'static str = "Swimming";
    const ARITY: usize = 5;

    fn from_readings(readings: &[f64]) -> Result<Self> {
        let [action, duration_hours, weight_kg, pool_length_m, pool_lap_count] =
            unpack::<5>(Self::CODE, readings)?;
        Ok(Self {
            workout: Workout::new(action, duration_hours, weight_kg),
            pool_length_m,
            pool_lap_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_uses_stroke_length() {
        let swimming = Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0);
        assert!((swimming.distance_km() - 0.9936).abs() < 1e-9);
    }

    #[test]
    fn test_speed_uses_pool() {
        let swimming = Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0);
        assert!((swimming.mean_speed_kmh() - 1.0).abs() < 1e-9);

        // Stroke count has no effect on speed.
        let more_strokes = Swimming::new(2000.0, 1.0, 80.0, 25.0, 40.0);
        assert_eq!(swimming.mean_speed_kmh(), more_strokes.mean_speed_kmh());

        let half_hour = Swimming::new(720.0, 0.5, 80.0, 50.0, 20.0);
        assert!((half_hour.mean_speed_kmh() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_spent_calories() {
        let swimming = Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0);
        assert!((swimming.spent_calories() - 336.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_readings() {
        let swimming = Swimming::from_readings(&[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(swimming.pool_length_m(), 25.0);
        assert_eq!(swimming.pool_lap_count(), 40.0);
        assert!(Swimming::from_readings(&[720.0, 1.0, 80.0, 25.0]).is_err());
    }
}
