//! Dispatch from feed activity codes to training variants.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::errors::{Result, WorkoutError};
use crate::training::{Running, SportsWalking, Swimming, Training, Variant};

/// Builds a boxed training from a positional reading list.
pub type Constructor = fn(&[f64]) -> Result<Box<dyn Training>>;

/// Activity codes understood by the data feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityCode {
    Swimming,
    Running,
    SportsWalking,
}

impl ActivityCode {
    pub const ALL: [ActivityCode; 3] = [
        ActivityCode::Swimming,
        ActivityCode::Running,
        ActivityCode::SportsWalking,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ActivityCode::Swimming => Swimming::CODE,
            ActivityCode::Running => Running::CODE,
            ActivityCode::SportsWalking => SportsWalking::CODE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityCode::Swimming => Swimming::LABEL,
            ActivityCode::Running => Running::LABEL,
            ActivityCode::SportsWalking => SportsWalking::LABEL,
        }
    }

    /// Number of readings the variant constructor takes.
    pub fn arity(self) -> usize {
        match self {
            ActivityCode::Swimming => Swimming::ARITY,
            ActivityCode::Running => Running::ARITY,
            ActivityCode::SportsWalking => SportsWalking::ARITY,
        }
    }

    pub fn constructor(self) -> Constructor {
        match self {
            ActivityCode::Swimming => construct::<Swimming>,
            ActivityCode::Running => construct::<Running>,
            ActivityCode::SportsWalking => construct::<SportsWalking>,
        }
    }
}

impl FromStr for ActivityCode {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|code| code.code() == s)
            .ok_or_else(|| WorkoutError::UnknownActivity(s.to_string()))
    }
}

impl fmt::Display for ActivityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

fn construct<T: Variant>(readings: &[f64]) -> Result<Box<dyn Training>> {
    Ok(Box::new(T::from_readings(readings)?))
}

/// Reads one sensor package: resolves the code and builds the variant from
/// the readings in order.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Box<dyn Training>> {
    let code: ActivityCode = workout_type.parse()?;
    let training = (code.constructor())(data)?;
    debug!(code = %code, readings = data.len(), "Constructed {}", training.label());
    Ok(training)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_str() {
        for code in ActivityCode::ALL {
            assert_eq!(code.code().parse::<ActivityCode>().unwrap(), code);
        }
    }

    #[test]
    fn test_dispatch_table() {
        assert_eq!(ActivityCode::from_str("SWM").unwrap().label(), "Swimming");
        assert_eq!(ActivityCode::from_str("RUN").unwrap().label(), "Running");
        assert_eq!(ActivityCode::from_str("WLK").unwrap().label(), "SportsWalking");
    }

    #[test]
    fn test_arity() {
        assert_eq!(ActivityCode::Running.arity(), 3);
        assert_eq!(ActivityCode::SportsWalking.arity(), 4);
        assert_eq!(ActivityCode::Swimming.arity(), 5);
    }

    #[test]
    fn test_unknown_code() {
        let err = read_package("XYZ", &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, WorkoutError::UnknownActivity(code) if code == "XYZ"));
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        assert!(read_package("run", &[15000.0, 1.0, 75.0]).is_err());
    }

    #[test]
    fn test_read_package_builds_variant() {
        let training = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(training.label(), "SportsWalking");
        assert_eq!(training.workout().action, 9000.0);
    }

    #[test]
    fn test_read_package_arity_mismatch() {
        let err = read_package("SWM", &[720.0, 1.0, 80.0]).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::ArgumentMismatch {
                expected: 5,
                actual: 3,
                ..
            }
        ));
    }
}
