//! Display formatting for the two timestamp encodings the backends emit.
//!
//! The lab-instance search API reports epoch seconds (as a number or a
//! numeric string). The lab-provider detail API wraps a millisecond epoch in
//! literal characters, e.g. `/Date(1672531199000)/`. Both formatters are
//! total: anything they cannot interpret renders as [`NOT_AVAILABLE`].

use chrono::{DateTime, Local, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Placeholder rendered for absent or unparseable values.
pub const NOT_AVAILABLE: &str = "N/A";

static DIGIT_RUN: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"\d+").ok());

/// Format an epoch-seconds value as `MM/DD/YYYY H:MM AM|PM` (UTC).
///
/// `null`, the empty string, numeric zero and non-numeric input render as
/// `"N/A"`.
pub fn format_epoch_seconds(value: &Value) -> String {
    epoch_seconds(value)
        .and_then(|secs| DateTime::<Utc>::from_timestamp_millis((secs * 1000.0).round() as i64))
        .map(|dt| dt.format("%m/%d/%Y %-I:%M %p").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Format a provider-wrapped millisecond timestamp as
/// `MM/DD/YYYY - H:MM AM|PM` in local time.
pub fn format_provider_timestamp(wrapped: Option<&str>) -> String {
    wrapped
        .and_then(first_digit_run)
        .and_then(|digits| digits.parse::<i64>().ok())
        .and_then(|millis| Local.timestamp_millis_opt(millis).single())
        .map(|dt| dt.format("%m/%d/%Y - %-I:%M %p").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn epoch_seconds(value: &Value) -> Option<f64> {
    let secs = match value {
        Value::Number(n) => n.as_f64().filter(|secs| *secs != 0.0)?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        _ => return None,
    };

    secs.is_finite().then_some(secs)
}

fn first_digit_run(text: &str) -> Option<&str> {
    DIGIT_RUN
        .as_ref()
        .and_then(|re| re.find(text))
        .map(|m| m.as_str())
}
