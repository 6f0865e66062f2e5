//! Error types for step interpretation

use thiserror::Error;

use crate::driver::DriverError;

/// Main error type for step execution
#[derive(Error, Debug)]
pub enum StepError {
    /// The captured repeat count is not a non-negative integer
    #[error("Malformed repeat count: '{0}'")]
    MalformedCount(String),

    /// A table row lacks a column the pattern requires
    #[error("Row {row} is missing required column '{column}'")]
    MissingField { row: usize, column: String },

    /// A table-driven pattern was dispatched without a data table
    #[error("Step '{0}' requires a data table")]
    MissingTable(&'static str),

    /// No registered pattern matches the step text
    #[error("No registered pattern matches step: '{0}'")]
    UnknownStep(String),

    /// Nested steps re-entered the interpreter past the depth limit
    #[error("Nested steps exceed maximum depth of {0}")]
    NestingTooDeep(usize),

    /// Failure reported by the underlying automation driver.
    ///
    /// Passed through untouched; the interpreter never wraps or retries
    /// driver failures.
    #[error(transparent)]
    Driver(#[from] DriverError),
}

/// Result type alias for step execution
pub type Result<T> = std::result::Result<T, StepError>;
