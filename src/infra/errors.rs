// src/infra/errors.rs - Error types for drillbook

use thiserror::Error;

pub type Result<T, E = DrillError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum DrillError {
    // Input errors
    #[error("Could not parse '{token}' as {expected}")]
    Parse { token: String, expected: &'static str },

    #[error("Input ended early: expected {expected}")]
    MissingInput { expected: String },

    #[error("'{task}' needs at least one value")]
    EmptyInput { task: &'static str },

    #[error("Matrix row {row} has {found} values, expected {expected}")]
    Ragged {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("Matrix is {rows}x{cols}, expected a square matrix")]
    NotSquare { rows: usize, cols: usize },

    // Computation errors
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Arithmetic overflow in {0}")]
    Overflow(&'static str),

    #[error("Amount {amount} can't be paid with {denominations:?} (left over: {remainder})")]
    Unpayable {
        amount: u64,
        remainder: u64,
        denominations: Vec<u64>,
    },

    #[error("Refusing to generate {rows} rows (limit: {limit})")]
    TooLarge { rows: u128, limit: u128 },

    // Infra
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DrillError {
    /// True when the error was caused by the data fed in rather than by the
    /// computation or the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DrillError::Parse { .. }
                | DrillError::MissingInput { .. }
                | DrillError::EmptyInput { .. }
                | DrillError::Ragged { .. }
                | DrillError::NotSquare { .. }
                | DrillError::Json(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_message() {
        let e = DrillError::Parse {
            token: "abc".into(),
            expected: "an integer",
        };
        assert_eq!(e.to_string(), "Could not parse 'abc' as an integer");
        assert!(e.is_input_error());
    }

    #[test]
    fn test_unpayable_message() {
        let e = DrillError::Unpayable {
            amount: 7,
            remainder: 1,
            denominations: vec![4, 2],
        };
        assert_eq!(
            e.to_string(),
            "Amount 7 can't be paid with [4, 2] (left over: 1)"
        );
        assert!(!e.is_input_error());
    }

    #[test]
    fn test_overflow_not_input_error() {
        assert!(!DrillError::Overflow("prefix sum").is_input_error());
    }
}
