//! Human-readable summaries for day and training records.
//!
//! The two text entry points differ in failure handling:
//! [`build_day_summary`] logs and returns an empty string, while
//! [`build_training_summary`] hands the error back to the caller.

use std::fmt;

use serde::Serialize;

use crate::calories::{METERS_IN_KM, compute, walking_calories};
use crate::duration::hours;
use crate::error::{TrackerError, TrackerResult};
use crate::parser::parse;
use crate::{ActivityKind, PersonProfile, RecordShape};

/// Fixed step length in metres used for day summaries.
pub const DAY_STEP_LENGTH_M: f64 = 0.65;

/// Structured day summary. `Display` renders the three-line report.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DaySummary {
    pub steps: i64,
    pub distance_km: f64,
    pub calories: f64,
}

impl fmt::Display for DaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Количество шагов: {}.", self.steps)?;
        writeln!(f, "Дистанция составила {:.2} км.", self.distance_km)?;
        writeln!(f, "Вы сожгли {:.2} ккал.", self.calories)
    }
}

/// Structured training summary. `Display` renders the five-line report.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrainingSummary {
    pub activity: ActivityKind,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub avg_speed_kmh: f64,
    pub calories: f64,
}

impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Тип тренировки: {}", self.activity.label())?;
        writeln!(f, "Длительность: {:.2} ч.", self.duration_hours)?;
        writeln!(f, "Дистанция: {:.2} км.", self.distance_km)?;
        writeln!(f, "Скорость: {:.2} км/ч", self.avg_speed_kmh)?;
        writeln!(f, "Сожгли калорий: {:.2}", self.calories)
    }
}

/// Parse a `<steps>,<duration>` record and summarize it as a walk.
pub fn day_summary(raw: &str, profile: PersonProfile) -> TrackerResult<DaySummary> {
    let record = parse(raw, RecordShape::Day)?;
    let distance_km = record.steps as f64 * DAY_STEP_LENGTH_M / METERS_IN_KM;
    let calories = walking_calories(
        record.steps,
        profile.weight,
        profile.height,
        record.duration,
    )?;
    Ok(DaySummary {
        steps: record.steps,
        distance_km,
        calories,
    })
}

/// Parse a `<steps>,<activity>,<duration>` record and summarize it.
pub fn training_summary(raw: &str, profile: PersonProfile) -> TrackerResult<TrainingSummary> {
    let record = parse(raw, RecordShape::Training)?;
    let activity = match record.activity.as_deref() {
        Some(label) => label.parse::<ActivityKind>()?,
        None => {
            return Err(TrackerError::MalformedInput {
                expected: RecordShape::Training.field_count(),
                actual: RecordShape::Day.field_count(),
            });
        }
    };
    let metrics = compute(
        activity,
        record.steps,
        profile.weight,
        profile.height,
        record.duration,
    )?;
    Ok(TrainingSummary {
        activity,
        duration_hours: hours(record.duration),
        distance_km: metrics.distance_km,
        avg_speed_kmh: metrics.avg_speed_kmh,
        calories: metrics.calories,
    })
}

/// Day report text, or an empty string if the record cannot be summarized.
///
/// Failures are only visible through the `tracing` diagnostic.
pub fn build_day_summary(raw: &str, weight: f64, height: f64) -> String {
    match day_summary(raw, PersonProfile::new(weight, height)) {
        Ok(summary) => summary.to_string(),
        Err(e) => {
            report_rejected("day", &e);
            String::new()
        }
    }
}

/// Training report text; errors are propagated unchanged.
pub fn build_training_summary(raw: &str, weight: f64, height: f64) -> TrackerResult<String> {
    training_summary(raw, PersonProfile::new(weight, height))
        .map(|summary| summary.to_string())
        .inspect_err(|e| report_rejected("training", e))
}

/// Name of the counter bumped once per rejected record, labelled by `kind`.
pub const RECORDS_REJECTED: &str = "step_tracker_records_rejected_total";

/// Emit the diagnostic for a record that could not be summarized.
pub fn report_rejected(kind: &'static str, err: &TrackerError) {
    tracing::warn!(kind, error = %err, "activity record rejected");
    metrics::counter!(RECORDS_REJECTED, "kind" => kind).increment(1);
}
