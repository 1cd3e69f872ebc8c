//! Record parsing: `"<steps>,<duration>"` and `"<steps>,<activity>,<duration>"`.
//!
//! Fields are split on every comma with no escaping and no whitespace
//! trimming, so `"5000, 1h"` is rejected as an invalid duration.

use crate::duration::{minutes, parse_duration};
use crate::error::{TrackerError, TrackerResult};
use crate::{ActivityRecord, RecordShape};

/// Parse and validate a raw record of the given shape.
pub fn parse(raw: &str, shape: RecordShape) -> TrackerResult<ActivityRecord> {
    let parts: Vec<&str> = raw.split(',').collect();
    let expected = shape.field_count();
    if parts.len() != expected {
        return Err(TrackerError::MalformedInput {
            expected,
            actual: parts.len(),
        });
    }

    let steps = parse_steps(parts[0])?;
    let activity = match shape {
        RecordShape::Day => None,
        RecordShape::Training => Some(parts[1].to_string()),
    };
    let duration_raw = parts[expected - 1];
    let duration = parse_duration(duration_raw).map_err(|e| TrackerError::InvalidDuration {
        raw: duration_raw.to_string(),
        reason: e.to_string(),
    })?;
    if minutes(duration) <= 0.0 {
        return Err(TrackerError::InvalidDuration {
            raw: duration_raw.to_string(),
            reason: "activity duration must be greater than 0".into(),
        });
    }

    tracing::debug!(steps, ?activity, %duration, "parsed activity record");
    Ok(ActivityRecord {
        steps,
        activity,
        duration,
    })
}

fn parse_steps(raw: &str) -> TrackerResult<i64> {
    let steps: i64 = raw.parse().map_err(|e: std::num::ParseIntError| {
        TrackerError::InvalidStepCount {
            raw: raw.to_string(),
            reason: e.to_string(),
        }
    })?;
    if steps <= 0 {
        return Err(TrackerError::InvalidStepCount {
            raw: raw.to_string(),
            reason: "step count must be greater than 0".into(),
        });
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn parses_day_record() {
        let rec = parse("5000,1h", RecordShape::Day).expect("record");
        assert_eq!(rec.steps, 5000);
        assert_eq!(rec.activity, None);
        assert_eq!(rec.duration, TimeDelta::hours(1));
    }

    #[test]
    fn parses_training_record_with_verbatim_label() {
        let rec = parse("678,Плавание,1h30m", RecordShape::Training).expect("record");
        assert_eq!(rec.steps, 678);
        assert_eq!(rec.activity.as_deref(), Some("Плавание"));
        assert_eq!(rec.duration, TimeDelta::minutes(90));
    }

    #[test]
    fn wrong_field_count_is_malformed() {
        for (raw, shape, actual) in [
            ("5000", RecordShape::Day, 1),
            ("5000,Бег,1h", RecordShape::Day, 3),
            ("5000,1h", RecordShape::Training, 2),
            ("5000,Бег,1h,extra", RecordShape::Training, 4),
            ("", RecordShape::Day, 1),
        ] {
            assert_eq!(
                parse(raw, shape),
                Err(TrackerError::MalformedInput {
                    expected: shape.field_count(),
                    actual,
                }),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn rejects_bad_step_counts() {
        for raw in ["abc,1h", "-5,1h", "0,1h", ",1h", "12.5,1h", " 10,1h"] {
            assert!(
                matches!(
                    parse(raw, RecordShape::Day),
                    Err(TrackerError::InvalidStepCount { .. })
                ),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn accepts_explicit_plus_sign_on_steps() {
        assert_eq!(parse("+10,1m", RecordShape::Day).unwrap().steps, 10);
    }

    #[test]
    fn rejects_bad_durations() {
        for raw in ["10,", "10,1x", "10,0s", "10,-1h", "10, 1h", "10,0"] {
            assert!(
                matches!(
                    parse(raw, RecordShape::Day),
                    Err(TrackerError::InvalidDuration { .. })
                ),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn step_error_reported_before_duration_error() {
        assert!(matches!(
            parse("x,Бег,nope", RecordShape::Training),
            Err(TrackerError::InvalidStepCount { .. })
        ));
    }
}
