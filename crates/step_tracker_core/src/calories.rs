//! Distance, average speed and energy expenditure formulas.
//!
//! Every public calorie formula checks that steps, weight, height and
//! duration are all strictly positive before computing anything. Violations
//! are gathered into one [`ValidationError`] so callers see every problem at
//! once. No rounding is applied here.

use chrono::TimeDelta;

use crate::duration::{hours, minutes};
use crate::error::{TrackerResult, ValidationError, Violation};
use crate::{ActivityKind, ActivityMetrics};

/// Step length as a fraction of height.
pub const STEP_LENGTH_COEFFICIENT: f64 = 0.45;
/// Share of the running formula burned while walking.
pub const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;
pub const METERS_IN_KM: f64 = 1000.0;
pub const MINUTES_IN_HOUR: f64 = 60.0;

/// Distance in kilometres using a height-derived step length.
///
/// Returns `0.0` for a non-positive height.
pub fn distance(steps: i64, height: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    steps as f64 * height * STEP_LENGTH_COEFFICIENT / METERS_IN_KM
}

/// Average speed in km/h. Returns `0.0` for a non-positive duration.
pub fn average_speed(steps: i64, height: f64, duration: TimeDelta) -> f64 {
    if minutes(duration) <= 0.0 {
        return 0.0;
    }
    distance(steps, height) / hours(duration)
}

#[allow(clippy::neg_cmp_op_on_partial_ord)]
fn validate(
    steps: i64,
    weight: f64,
    height: f64,
    duration: TimeDelta,
) -> Result<(), ValidationError> {
    let mut violations = Vec::new();
    if steps <= 0 {
        violations.push(Violation::NonPositiveSteps);
    }
    // `!(x > 0.0)` so that NaN is rejected too.
    if !(weight > 0.0) {
        violations.push(Violation::NonPositiveWeight);
    }
    if !(height > 0.0) {
        violations.push(Violation::NonPositiveHeight);
    }
    if minutes(duration) <= 0.0 {
        violations.push(Violation::NonPositiveDuration);
    }
    match ValidationError::collect(violations) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Calories burned while running.
pub fn running_calories(
    steps: i64,
    weight: f64,
    height: f64,
    duration: TimeDelta,
) -> TrackerResult<f64> {
    validate(steps, weight, height, duration)?;
    let speed = average_speed(steps, height, duration);
    Ok(weight * speed * minutes(duration) / MINUTES_IN_HOUR)
}

/// Calories burned while walking: the running formula scaled by
/// [`WALKING_CALORIES_COEFFICIENT`].
pub fn walking_calories(
    steps: i64,
    weight: f64,
    height: f64,
    duration: TimeDelta,
) -> TrackerResult<f64> {
    validate(steps, weight, height, duration)?;
    let speed = average_speed(steps, height, duration);
    Ok(weight * speed * minutes(duration) / MINUTES_IN_HOUR * WALKING_CALORIES_COEFFICIENT)
}

/// Compute all metrics for a known activity kind.
pub fn compute(
    kind: ActivityKind,
    steps: i64,
    weight: f64,
    height: f64,
    duration: TimeDelta,
) -> TrackerResult<ActivityMetrics> {
    let calories = match kind {
        ActivityKind::Running => running_calories(steps, weight, height, duration)?,
        ActivityKind::Walking => walking_calories(steps, weight, height, duration)?,
    };
    let metrics = ActivityMetrics {
        distance_km: distance(steps, height),
        avg_speed_kmh: average_speed(steps, height, duration),
        calories,
    };
    tracing::debug!(?kind, ?metrics, "computed activity metrics");
    Ok(metrics)
}

/// Resolve an activity label and compute its metrics.
///
/// Unknown labels fail with [`crate::TrackerError::UnknownActivityKind`] before any
/// input validation or arithmetic happens.
pub fn classify_and_compute(
    label: &str,
    steps: i64,
    weight: f64,
    height: f64,
    duration: TimeDelta,
) -> TrackerResult<ActivityMetrics> {
    let kind: ActivityKind = label.parse()?;
    compute(kind, steps, weight, height, duration)
}
