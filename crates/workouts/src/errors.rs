use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkoutError {
    #[error("Unknown activity code: {0}")]
    UnknownActivity(String),

    #[error("Argument mismatch for {code}: expected {expected} readings, got {actual}")]
    ArgumentMismatch {
        code: String,
        expected: usize,
        actual: usize,
    },

    #[error("Division by zero for {label}: {field} is 0")]
    ZeroDivisor {
        label: &'static str,
        field: &'static str,
    },

    #[error("Degenerate duration for {label}: {duration_hours} h")]
    DegenerateDuration {
        label: &'static str,
        duration_hours: f64,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Feed parsing error: {0}")]
    FeedParsing(#[from] serde_json::Error),
}

pub type Result<T, E = WorkoutError> = std::result::Result<T, E>;
