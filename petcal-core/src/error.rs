//! Error types for petcal.

use thiserror::Error;

/// Errors that can occur in petcal operations.
#[derive(Error, Debug)]
pub enum PetcalError {
    #[error("Invalid month index {0} (expected 0-11)")]
    InvalidMonth(u32),

    #[error("Year {0} is outside the supported calendar range")]
    InvalidYear(i32),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid weekday '{0}'")]
    InvalidWeekday(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for petcal operations.
pub type PetcalResult<T> = Result<T, PetcalError>;
