//! Sensor feed packages and their processing.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::{Result, WorkoutError};
use crate::registry::read_package;
use crate::summary::Summary;

/// One workout as delivered by the sensor feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Activity code, e.g. `RUN`.
    pub workout_type: String,
    /// Readings in constructor order.
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

/// Reference packages: one swim, one run and one walk.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Loads a JSON array of packages from disk.
pub fn load_packages(path: impl AsRef<Path>) -> Result<Vec<Package>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let packages = parse_packages(&raw)?;
    info!("Loaded {} packages from {}", packages.len(), path.display());
    Ok(packages)
}

/// Parses a JSON array of packages.
pub fn parse_packages(raw: &str) -> Result<Vec<Package>> {
    Ok(serde_json::from_str(raw)?)
}

/// Computes the summary of a single package.
pub fn process_package(package: &Package) -> Result<Summary> {
    read_package(&package.workout_type, &package.data)?.summary()
}

/// A package that could not be summarised.
#[derive(Debug)]
pub struct FeedFailure {
    /// Position of the package in the feed.
    pub index: usize,
    pub workout_type: String,
    pub error: WorkoutError,
}

/// Outcome of processing a whole feed.
#[derive(Debug, Default)]
pub struct FeedReport {
    /// Summaries of the successful packages, in feed order.
    pub summaries: Vec<Summary>,
    pub failures: Vec<FeedFailure>,
}

impl FeedReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Processes every package independently.
///
/// A failing package produces no summary and does not affect the others.
pub fn process_feed(packages: &[Package]) -> FeedReport {
    let mut report = FeedReport::default();

    for (index, package) in packages.iter().enumerate() {
        match process_package(package) {
            Ok(summary) => report.summaries.push(summary),
            Err(error) => {
                warn!(index, workout_type = %package.workout_type, "Skipping workout: {error}");
                report.failures.push(FeedFailure {
                    index,
                    workout_type: package.workout_type.clone(),
                    error,
                });
            }
        }
    }

    report
}
