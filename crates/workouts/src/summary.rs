//! Computed workout results.

use std::fmt;

use serde::Serialize;

/// Result of one workout computation.
///
/// Built once by [`Training::summary`](crate::training::Training::summary) and
/// only ever read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Fixed variant label (`Running`, `SportsWalking`, `Swimming`).
    #[serde(rename = "training_type")]
    pub activity_label: &'static str,
    /// Duration in hours.
    #[serde(rename = "duration")]
    pub duration_hours: f64,
    /// Distance in kilometers.
    #[serde(rename = "distance")]
    pub distance_km: f64,
    /// Mean speed in km/h.
    #[serde(rename = "speed")]
    pub mean_speed_kmh: f64,
    /// Spent calories in kcal.
    pub calories: f64,
}

impl Summary {
    /// Renders the one-line report printed for each workout.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.activity_label,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories,
        )
    }
}
