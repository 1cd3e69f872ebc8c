//! Step-record parsing and activity metrics: distance, average speed and
//! calories burned for walking and running sessions.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;
use serde::Serialize;

pub mod calories;
pub mod config;
pub mod duration;
pub mod error;
pub mod parser;
pub mod report;

pub use calories::{
    average_speed, classify_and_compute, compute, distance, running_calories, walking_calories,
};
pub use error::{TrackerError, TrackerResult, ValidationError, Violation};
pub use parser::parse;
pub use report::{
    DaySummary, TrainingSummary, build_day_summary, build_training_summary, day_summary,
    training_summary,
};

/// The two supported activity kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Walking,
    Running,
}

impl ActivityKind {
    pub const WALKING_LABEL: &'static str = "Ходьба";
    pub const RUNNING_LABEL: &'static str = "Бег";

    /// Label as it appears in training records.
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Walking => Self::WALKING_LABEL,
            ActivityKind::Running => Self::RUNNING_LABEL,
        }
    }
}

impl FromStr for ActivityKind {
    type Err = error::TrackerError;

    // Exact match only: no case folding, no trimming, no synonyms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::WALKING_LABEL => Ok(ActivityKind::Walking),
            Self::RUNNING_LABEL => Ok(ActivityKind::Running),
            other => Err(error::TrackerError::UnknownActivityKind(other.to_string())),
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Shape of an input record, which fixes how many fields it must have.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordShape {
    /// `<steps>,<duration>`
    Day,
    /// `<steps>,<activity>,<duration>`
    Training,
}

impl RecordShape {
    pub fn field_count(self) -> usize {
        match self {
            RecordShape::Day => 2,
            RecordShape::Training => 3,
        }
    }
}

/// A validated input record.
///
/// `steps > 0` and `duration` is strictly positive. `activity` is only present
/// for training records and is kept verbatim; unknown labels are rejected at
/// computation time.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivityRecord {
    pub steps: i64,
    pub activity: Option<String>,
    pub duration: TimeDelta,
}

/// Per-call body measurements. Height may be in any unit as long as callers
/// are consistent; distance scales linearly with it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PersonProfile {
    pub weight: f64,
    pub height: f64,
}

impl PersonProfile {
    pub fn new(weight: f64, height: f64) -> Self {
        Self { weight, height }
    }
}

/// Metrics derived from one activity. Never cached; recomputed per call.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ActivityMetrics {
    pub distance_km: f64,
    pub avg_speed_kmh: f64,
    pub calories: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_kind_labels_round_trip() {
        for kind in [ActivityKind::Walking, ActivityKind::Running] {
            assert_eq!(kind.label().parse::<ActivityKind>().unwrap(), kind);
        }
    }

    #[test]
    fn activity_kind_is_case_and_space_sensitive() {
        assert!("бег".parse::<ActivityKind>().is_err());
        assert!(" Бег".parse::<ActivityKind>().is_err());
        assert!("Running".parse::<ActivityKind>().is_err());
        assert_eq!(
            "Плавание".parse::<ActivityKind>(),
            Err(TrackerError::UnknownActivityKind("Плавание".into()))
        );
    }

    #[test]
    fn record_shape_field_counts() {
        assert_eq!(RecordShape::Day.field_count(), 2);
        assert_eq!(RecordShape::Training.field_count(), 3);
    }
}
