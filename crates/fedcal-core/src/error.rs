//! Error types for the fedcal library.
//!
//! This module defines the error types used throughout fedcal,
//! providing structured error handling with context.

use thiserror::Error;

use crate::types::{Date, Dept};

/// A specialized Result type for fedcal operations.
pub type FedCalResult<T> = Result<T, FedCalError>;

/// The main error type for fedcal operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FedCalError {
    /// Input string did not match any accepted date format.
    #[error("Cannot parse date: {input}")]
    Parse {
        /// The string that failed to parse.
        input: String,
    },

    /// A date lies outside the supported 1970-01-01..2199-12-31 range.
    #[error("Date out of supported range (1970-2199): {message}")]
    OutOfRange {
        /// Description of the out-of-range value.
        message: String,
    },

    /// A date tuple had the wrong arity, or an array argument was empty
    /// where a non-empty one was required.
    #[error("Shape error: {message}")]
    Shape {
        /// Description of the shape problem.
        message: String,
    },

    /// An offset was constructed with an invalid pass-day map or a
    /// contradictory weekmask.
    #[error("Invalid offset configuration: {message}")]
    InvalidConfig {
        /// Description of the configuration problem.
        message: String,
    },

    /// The status dataset failed a per-department coverage invariant.
    #[error("Status dataset invariant violated for {department}: {message}")]
    DatasetInvariantViolated {
        /// Department whose coverage is broken.
        department: Dept,
        /// Description of the offending interval or day.
        message: String,
    },

    /// A status query predates the department's existence.
    #[error("{department} did not exist on {date}")]
    OutOfDepartmentRange {
        /// The department queried.
        department: Dept,
        /// The query date.
        date: Date,
    },
}

impl FedCalError {
    /// Creates a parse error.
    #[must_use]
    pub fn parse(input: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
        }
    }

    /// Creates an out-of-range error.
    #[must_use]
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::OutOfRange {
            message: message.into(),
        }
    }

    /// Creates a shape error.
    #[must_use]
    pub fn shape(message: impl Into<String>) -> Self {
        Self::Shape {
            message: message.into(),
        }
    }

    /// Creates an invalid-configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Creates a dataset-invariant error.
    #[must_use]
    pub fn dataset_invariant(department: Dept, message: impl Into<String>) -> Self {
        Self::DatasetInvariantViolated {
            department,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FedCalError::parse("13/45/20019");
        assert!(err.to_string().contains("Cannot parse date"));
    }

    #[test]
    fn test_out_of_department_range_display() {
        let err = FedCalError::OutOfDepartmentRange {
            department: Dept::DHS,
            date: Date::from_ymd(2003, 11, 24).unwrap(),
        };
        assert!(err.to_string().contains("2003-11-24"));
    }
}
