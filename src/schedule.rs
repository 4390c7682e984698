//! Weekly recurring-date generation for class schedules.
//!
//! A class meets once a week on a named weekday between an inclusive start
//! and end date. Dashboards ask for the concrete meeting dates inside a query
//! window, and for the next meeting after today. Malformed or absent inputs
//! degrade to empty results or raw-date fallbacks; the only operation that
//! reports an error is the week-window validation.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;

use crate::model::ClassScheduleSpec;

const ISO_DATE: &str = "%Y-%m-%d";

/// Structured validation error: stable machine code plus a human message.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ScheduleError {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ScheduleError {}

/// Maps a weekday name to 0=Sunday..6=Saturday. Case-insensitive full names
/// only; anything else is `None`.
pub fn weekday_index(name: &str) -> Option<u32> {
    const NAMES: [&str; 7] = [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ];
    let trimmed = name.trim();
    NAMES
        .iter()
        .position(|n| n.eq_ignore_ascii_case(trimmed))
        .map(|i| i as u32)
}

fn days_from_sunday(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), ISO_DATE).ok()
}

fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE).to_string()
}

/// Concrete meeting dates for a weekly recurrence, clipped to a query window.
///
/// Intersects `[class_start, class_end]` with `[window_start, window_end]`,
/// advances at most 6 days to the first date falling on `day`, then emits
/// every 7th day through the end of the intersection, ascending. Empty when
/// the ranges do not overlap or the weekday name is unrecognized.
pub fn generate_recurring_dates(
    class_start: NaiveDate,
    class_end: NaiveDate,
    day: &str,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Vec<String> {
    let start = class_start.max(window_start);
    let end = class_end.min(window_end);
    if start > end {
        return Vec::new();
    }
    let Some(target) = weekday_index(day) else {
        return Vec::new();
    };

    let offset = (target + 7 - days_from_sunday(start)) % 7;
    let mut current = start + Duration::days(i64::from(offset));
    let mut dates = Vec::new();
    while current <= end {
        dates.push(format_iso_date(current));
        current = current + Duration::days(7);
    }
    dates
}

/// [`generate_recurring_dates`] over a raw [`ClassScheduleSpec`]: absent or
/// unparseable recurrence fields degrade to an empty result.
pub fn occurrences_in_window(
    spec: &ClassScheduleSpec,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Vec<String> {
    let parsed_start = spec.start_date.as_deref().and_then(parse_iso_date);
    let parsed_end = spec.end_date.as_deref().and_then(parse_iso_date);
    let (Some(class_start), Some(class_end), Some(day)) =
        (parsed_start, parsed_end, spec.day.as_deref())
    else {
        return Vec::new();
    };
    generate_recurring_dates(class_start, class_end, day, window_start, window_end)
}

/// The next meeting date strictly after `today`'s slot: advancing lands on
/// the coming target weekday, a full week out when today already matches.
///
/// Capped at the class `end_date`; past the cap, or when the recurrence day
/// is missing or unrecognized, falls back to the raw `start_date` (or today's
/// date when there is none). Total; returns a `YYYY-MM-DD` string.
pub fn next_occurrence(spec: &ClassScheduleSpec, today: NaiveDate) -> String {
    let fallback = || {
        spec.start_date
            .as_ref()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format_iso_date(today))
    };

    let Some(target) = spec.day.as_deref().and_then(weekday_index) else {
        return fallback();
    };

    let mut offset = (target + 7 - days_from_sunday(today)) % 7;
    if offset == 0 {
        offset = 7;
    }
    let candidate = today + Duration::days(i64::from(offset));

    if let Some(end) = spec.end_date.as_deref().and_then(parse_iso_date) {
        if candidate > end {
            return fallback();
        }
    }
    format_iso_date(candidate)
}

/// Validates a schedule-window query range: `start` must be a Monday, `end`
/// the Sunday exactly 6 days later. Each of the five ways a caller can get
/// this wrong has its own error code.
pub fn validate_week_dates(
    start: Option<&str>,
    end: Option<&str>,
) -> Result<(NaiveDate, NaiveDate), ScheduleError> {
    let (Some(start_raw), Some(end_raw)) = (start, end) else {
        return Err(ScheduleError::new(
            "missing_input",
            "start_date and end_date are required",
        ));
    };
    let Some(start) = parse_iso_date(start_raw) else {
        return Err(ScheduleError::new(
            "bad_date",
            format!("start_date is not a valid YYYY-MM-DD date: {}", start_raw),
        ));
    };
    let Some(end) = parse_iso_date(end_raw) else {
        return Err(ScheduleError::new(
            "bad_date",
            format!("end_date is not a valid YYYY-MM-DD date: {}", end_raw),
        ));
    };
    if start.weekday() != Weekday::Mon {
        return Err(ScheduleError::new(
            "bad_start_weekday",
            "start_date must be a Monday",
        ));
    }
    if end.weekday() != Weekday::Sun {
        return Err(ScheduleError::new(
            "bad_end_weekday",
            "end_date must be a Sunday",
        ));
    }
    if end - start != Duration::days(6) {
        return Err(ScheduleError::new(
            "bad_span",
            "end_date must be exactly 6 days after start_date",
        ));
    }
    Ok((start, end))
}
