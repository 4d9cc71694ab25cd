// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Human-relative time rendering

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 12 * MONTH;
const LONG_TIME: i64 = 37 * YEAR;

/// Magnitude buckets: upper bound (exclusive, seconds), unit label and divisor.
/// A divisor of zero means the label is used verbatim.
const MAGNITUDES: &[(i64, &str, i64)] = &[
    (1, "now", 0),
    (2, "1 second", 0),
    (MINUTE, "seconds", 1),
    (2 * MINUTE, "1 minute", 0),
    (HOUR, "minutes", MINUTE),
    (2 * HOUR, "1 hour", 0),
    (DAY, "hours", HOUR),
    (2 * DAY, "1 day", 0),
    (WEEK, "days", DAY),
    (2 * WEEK, "1 week", 0),
    (MONTH, "weeks", WEEK),
    (2 * MONTH, "1 month", 0),
    (YEAR, "months", MONTH),
    (18 * MONTH, "1 year", 0),
    (2 * YEAR, "2 years", 0),
    (LONG_TIME, "years", YEAR),
];

/// Render `then` relative to `now`, e.g. "3 hours ago" or "2 days from now"
///
/// # Example
///
/// ```
/// use chrono::{Duration, Utc};
/// use release_changes_github::humanize::relative_time;
///
/// let now = Utc::now();
/// assert_eq!(relative_time(now - Duration::hours(3), now), "3 hours ago");
/// assert_eq!(relative_time(now, now), "now");
/// ```
#[must_use]
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(then).num_seconds();
    let (seconds, suffix) = if delta < 0 {
        (delta.saturating_neg(), "from now")
    } else {
        (delta, "ago")
    };

    match MAGNITUDES.iter().find(|(bound, _, _)| seconds < *bound) {
        Some((_, "now", _)) => "now".to_string(),
        Some((_, label, 0)) => format!("{label} {suffix}"),
        Some((_, unit, divisor)) => format!("{} {unit} {suffix}", seconds / divisor),
        None => format!("a long while {suffix}"),
    }
}
