//! Normalization of worked-time values into decimal hours.
//!
//! Timesheets carry hours in several shapes: bare numbers (`8`, `7.5`),
//! strings with a unit suffix (`"8hrs"`, `"0.25h"`) and clock durations
//! (`"7:30"`). Everything numeric in the crate goes through [`normalize_hours`]
//! so that no other module parses hour strings on its own.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([0-9]+(?:\.[0-9]+)?)").unwrap());

/// An hour value as it appears on the wire.
///
/// Anything that is neither a number nor a string still deserializes (as
/// [`HourValue::Invalid`]) so a single odd cell never rejects a whole payload;
/// it simply fails normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HourValue {
    Number(f64),
    Text(String),
    Invalid(serde_json::Value),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedHour {
    #[error("hour value is missing")]
    Missing,
    #[error("unparsable hour value: {0}")]
    Unparsable(String),
}

impl HourValue {
    /// Convert to decimal hours.
    ///
    /// Numbers are accepted as-is, including negative ones; range checks are
    /// up to the caller. Strings must start with an unsigned decimal number,
    /// whatever follows it (`hrs`, `h`, ...) is ignored.
    pub fn to_hours(&self) -> Result<f64, MalformedHour> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(text) => parse_leading_hours(text),
            Self::Invalid(serde_json::Value::Null) => Err(MalformedHour::Missing),
            Self::Invalid(other) => Err(MalformedHour::Unparsable(other.to_string())),
        }
    }
}

impl From<f64> for HourValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for HourValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for HourValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Normalize an optional hour value. A missing value is malformed, not zero.
pub fn normalize_hours(value: Option<&HourValue>) -> Result<f64, MalformedHour> {
    value.ok_or(MalformedHour::Missing)?.to_hours()
}

fn parse_leading_hours(text: &str) -> Result<f64, MalformedHour> {
    let normalized = text.trim().to_lowercase();

    LEADING_NUMBER
        .captures(&normalized)
        .and_then(|captures| captures.get(1))
        .and_then(|number| number.as_str().parse::<f64>().ok())
        .ok_or_else(|| MalformedHour::Unparsable(text.to_string()))
}

/// Convert an `H:MM` clock duration into an hours label such as `"7.5hrs"`.
///
/// Empty and `"0:00"` become `"0hrs"`. Values that are not clock durations are
/// returned unchanged, so an already formatted `"8hrs"` survives.
pub fn clock_to_hours_label(clock: &str) -> String {
    if clock.is_empty() || clock == "0:00" {
        return "0hrs".to_string();
    }

    match parse_clock(clock) {
        Some(hours) => hours_label(hours),
        None => clock.to_string(),
    }
}

/// Format decimal hours as a label: `"8hrs"` for whole hours, `"7.5hrs"` otherwise.
pub fn hours_label(hours: f64) -> String {
    if (hours - hours.round()).abs() < 1e-9 {
        format!("{}hrs", hours.round() as i64)
    } else {
        format!("{}hrs", format_decimal(hours))
    }
}

/// Six significant digits with trailing zeros trimmed, like C's `%g` for
/// values in the range timesheets use. There is no exponent form: fractions
/// below `0.000005` print as `"0"` and large values print every integer digit.
pub fn format_decimal(value: f64) -> String {
    let magnitude = value.abs();
    let integer_digits = if magnitude >= 1.0 {
        magnitude.log10().floor() as i32 + 1
    } else {
        1
    };
    let precision = (6 - integer_digits).max(0) as usize;
    let formatted = format!("{value:.precision$}");

    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

fn parse_clock(clock: &str) -> Option<f64> {
    let (hours, minutes) = clock.split_once(':')?;
    if minutes.contains(':') {
        return None;
    }

    let hours: i64 = hours.trim().parse().ok()?;
    let minutes: i64 = minutes.trim().parse().ok()?;

    Some(hours as f64 + minutes as f64 / 60.0)
}
