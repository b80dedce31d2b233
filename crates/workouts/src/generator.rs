//! Random sensor packages for demos and tests.
//!
//! Readings are drawn around typical recreational values so the resulting
//! summaries look like real workouts. Every generated package has the arity
//! its code expects and a positive duration.

use rand::Rng;
use rand::seq::SliceRandom;
use rand_distr::{Distribution, Normal};

use crate::feed::Package;
use crate::registry::ActivityCode;

/// Pool lengths found at most swimming pools, in meters.
const POOL_LENGTHS_M: [f64; 3] = [25.0, 33.3, 50.0];

/// Shortest generated duration, in hours.
const MIN_DURATION_HOURS: f64 = 0.01;

/// Generates plausible packages for every activity code.
#[derive(Debug, Clone)]
pub struct ReadingGenerator {
    /// Duration range in hours. An empty range always yields its lower bound.
    pub duration_hours: (f64, f64),
    /// Athlete weight mean and standard deviation in kilograms.
    pub weight_kg: (f64, f64),
    /// Athlete height mean and standard deviation in centimeters.
    pub height_cm: (f64, f64),
}

impl Default for ReadingGenerator {
    fn default() -> Self {
        Self {
            duration_hours: (0.25, 2.0),
            weight_kg: (72.0, 10.0),
            height_cm: (172.0, 9.0),
        }
    }
}

impl ReadingGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates `count` packages with randomly chosen activity codes.
    pub fn packages(&self, count: usize, rng: &mut impl Rng) -> Vec<Package> {
        (0..count)
            .map(|_| {
                let code = *ActivityCode::ALL
                    .choose(rng)
                    .unwrap_or(&ActivityCode::Running);
                self.package(code, rng)
            })
            .collect()
    }

    /// Generates one package for the given activity.
    pub fn package(&self, code: ActivityCode, rng: &mut impl Rng) -> Package {
        let (min_duration, max_duration) = self.duration_hours;
        let duration = if min_duration < max_duration {
            rng.gen_range(min_duration..max_duration)
        } else {
            min_duration
        };
        let duration = round_to(duration, 2).max(MIN_DURATION_HOURS);
        let weight = round_to(
            normal(rng, self.weight_kg.0, self.weight_kg.1).clamp(40.0, 150.0),
            1,
        );

        let data = match code {
            ActivityCode::Running => {
                let steps_per_hour = normal(rng, 10_000.0, 1_500.0).clamp(5_000.0, 16_000.0);
                vec![(steps_per_hour * duration).round(), duration, weight]
            }
            ActivityCode::SportsWalking => {
                let steps_per_hour = normal(rng, 6_500.0, 800.0).clamp(3_500.0, 9_000.0);
                let height = normal(rng, self.height_cm.0, self.height_cm.1)
                    .clamp(140.0, 210.0)
                    .round();
                vec![(steps_per_hour * duration).round(), duration, weight, height]
            }
            ActivityCode::Swimming => {
                let strokes_per_hour = normal(rng, 1_500.0, 250.0).clamp(800.0, 2_500.0);
                let speed_kmh = normal(rng, 2.0, 0.4).clamp(0.8, 4.0);
                let pool_length = POOL_LENGTHS_M[rng.gen_range(0..POOL_LENGTHS_M.len())];
                let laps = (speed_kmh * duration * 1000.0 / pool_length).round().max(1.0);
                vec![
                    (strokes_per_hour * duration).round(),
                    duration,
                    weight,
                    pool_length,
                    laps,
                ]
            }
        };

        Package::new(code.code(), data)
    }
}

fn normal(rng: &mut impl Rng, mean: f64, std_dev: f64) -> f64 {
    match Normal::new(mean, std_dev) {
        Ok(normal) => normal.sample(rng),
        Err(_) => mean,
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
