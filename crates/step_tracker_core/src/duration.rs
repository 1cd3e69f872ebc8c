//! Duration expression parsing.
//!
//! Records carry their duration as a compound expression such as `"1h30m"`,
//! `"45m"`, `"1.5h"` or `"-2m"`: an optional sign followed by one or more
//! number+unit pairs. Recognized units are `ns`, `us` (also `µs`/`μs`), `ms`,
//! `s`, `m` and `h`. The bare string `"0"` is accepted without a unit.

use chrono::TimeDelta;
use thiserror::Error;

const NANOS_PER_MINUTE: f64 = 60_000_000_000.0;
const NANOS_PER_HOUR: f64 = 3_600_000_000_000.0;

// Fraction digits past this point cannot change a nanosecond count.
const MAX_FRACTION_DIGITS: usize = 18;

/// Error type for duration parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("invalid duration format: {0:?}")]
    InvalidFormat(String),

    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    #[error("unknown unit {0:?}")]
    UnknownUnit(String),

    #[error("duration {0:?} is out of range")]
    Overflow(String),
}

fn unit_nanos(unit: &str) -> Option<u128> {
    let nanos = match unit {
        "ns" => 1,
        "us" | "µs" | "μs" => 1_000,
        "ms" => 1_000_000,
        "s" => 1_000_000_000,
        "m" => 60 * 1_000_000_000,
        "h" => 3_600 * 1_000_000_000,
        _ => return None,
    };
    Some(nanos)
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// Parse a duration expression into a signed [`TimeDelta`].
///
/// ```
/// use chrono::TimeDelta;
/// use step_tracker_core::duration::parse_duration;
///
/// assert_eq!(parse_duration("1h30m").unwrap(), TimeDelta::minutes(90));
/// assert_eq!(parse_duration("-45s").unwrap(), TimeDelta::seconds(-45));
/// assert!(parse_duration("1h 30m").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<TimeDelta, DurationParseError> {
    let mut rest = input;
    let mut negative = false;
    if let Some(r) = rest.strip_prefix('-') {
        negative = true;
        rest = r;
    } else if let Some(r) = rest.strip_prefix('+') {
        rest = r;
    }

    if rest == "0" {
        return Ok(TimeDelta::zero());
    }
    if rest.is_empty() {
        return Err(DurationParseError::InvalidFormat(input.to_string()));
    }

    let limit: u128 = if negative {
        i64::MAX as u128 + 1
    } else {
        i64::MAX as u128
    };
    let overflow = || DurationParseError::Overflow(input.to_string());

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let int_len = leading_digits(rest);
        let (int_digits, after) = rest.split_at(int_len);
        rest = after;

        let mut frac_digits = "";
        if let Some(after_dot) = rest.strip_prefix('.') {
            let frac_len = leading_digits(after_dot);
            frac_digits = &after_dot[..frac_len];
            rest = &after_dot[frac_len..];
        }
        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(DurationParseError::InvalidFormat(input.to_string()));
        }

        let unit_len = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        let (unit, after) = rest.split_at(unit_len);
        rest = after;
        if unit.is_empty() {
            return Err(DurationParseError::MissingUnit(input.to_string()));
        }
        let scale =
            unit_nanos(unit).ok_or_else(|| DurationParseError::UnknownUnit(unit.to_string()))?;

        let whole: u128 = if int_digits.is_empty() {
            0
        } else {
            int_digits.parse().map_err(|_| overflow())?
        };
        let mut component = whole.checked_mul(scale).ok_or_else(overflow)?;

        let frac_digits = &frac_digits[..frac_digits.len().min(MAX_FRACTION_DIGITS)];
        if !frac_digits.is_empty() {
            let frac: u128 = frac_digits.parse().map_err(|_| overflow())?;
            let denom = 10u128.pow(frac_digits.len() as u32);
            component += frac * scale / denom;
        }

        total = total.checked_add(component).ok_or_else(overflow)?;
        if total > limit {
            return Err(overflow());
        }
    }

    let signed = if negative {
        -(total as i128)
    } else {
        total as i128
    };
    let nanos = i64::try_from(signed).map_err(|_| overflow())?;
    Ok(TimeDelta::nanoseconds(nanos))
}

/// Length of `d` in fractional minutes.
pub fn minutes(d: TimeDelta) -> f64 {
    match d.num_nanoseconds() {
        Some(ns) => ns as f64 / NANOS_PER_MINUTE,
        None => d.num_milliseconds() as f64 / 60_000.0,
    }
}

/// Length of `d` in fractional hours.
pub fn hours(d: TimeDelta) -> f64 {
    match d.num_nanoseconds() {
        Some(ns) => ns as f64 / NANOS_PER_HOUR,
        None => d.num_milliseconds() as f64 / 3_600_000.0,
    }
}
