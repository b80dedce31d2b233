//! Workout statistics from sensor readings.
//!
//! Each sensor package carries an activity code and a positional list of
//! readings. The code selects a training variant (running, sports walking or
//! swimming), which computes distance, mean speed and spent calories and
//! renders them as a one-line summary.
//!
//! ```rust
//! use workouts::prelude::*;
//!
//! let training = read_package("RUN", &[15000.0, 1.0, 75.0])?;
//! let summary = training.summary()?;
//! assert_eq!(summary.activity_label, "Running");
//! # Ok::<(), workouts::errors::WorkoutError>(())
//! ```

pub mod config;
pub mod errors;
pub mod feed;
pub mod generator;
pub mod registry;
pub mod summary;
pub mod training;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{DriverConfig, OutputFormat};
    pub use crate::errors::{Result, WorkoutError};
    pub use crate::feed::{
        FeedFailure, FeedReport, Package, load_packages, parse_packages, process_feed,
        process_package, sample_packages,
    };
    pub use crate::generator::ReadingGenerator;
    pub use crate::registry::{ActivityCode, read_package};
    pub use crate::summary::Summary;
    pub use crate::training::{Running, SportsWalking, Swimming, Training, Variant, Workout};
}
