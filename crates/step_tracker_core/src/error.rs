//! Error types for record parsing and metric computation.

use std::fmt;

use thiserror::Error;

/// Errors produced by the parser, the calculator and configuration loading.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrackerError {
    #[error("malformed record: expected {expected} comma-separated fields, got {actual}")]
    MalformedInput { expected: usize, actual: usize },

    #[error("invalid step count {raw:?}: {reason}")]
    InvalidStepCount { raw: String, reason: String },

    #[error("invalid duration {raw:?}: {reason}")]
    InvalidDuration { raw: String, reason: String },

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("unknown activity kind: {0:?}")]
    UnknownActivityKind(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

/// A single input that failed the strictly-positive check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    NonPositiveSteps,
    NonPositiveWeight,
    NonPositiveHeight,
    NonPositiveDuration,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Violation::NonPositiveSteps => "step count must be greater than 0",
            Violation::NonPositiveWeight => "weight must be greater than 0",
            Violation::NonPositiveHeight => "height must be greater than 0",
            Violation::NonPositiveDuration => "activity duration must be greater than 0",
        };
        f.write_str(msg)
    }
}

/// Every constraint violated by one set of calculator inputs, in check order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Build an error from collected violations; `None` when nothing was violated.
    pub fn collect(violations: Vec<Violation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self { violations })
        }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn contains(&self, violation: Violation) -> bool {
        self.violations.contains(&violation)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_empty_is_none() {
        assert!(ValidationError::collect(Vec::new()).is_none());
    }

    #[test]
    fn display_lists_every_violation() {
        let err = ValidationError::collect(vec![
            Violation::NonPositiveSteps,
            Violation::NonPositiveWeight,
        ])
        .expect("violations");
        assert_eq!(
            err.to_string(),
            "step count must be greater than 0; weight must be greater than 0"
        );
        let wrapped = TrackerError::from(err);
        assert!(wrapped.to_string().starts_with("validation error: "));
    }
}
