//! Anniversary countdown math.
//!
//! Works on calendar dates only; callers pass "today" in the listener's local
//! time zone so the day boundaries match what they see.

#[cfg(test)]
#[path = "anniversary_test.rs"]
mod anniversary_test;

use time::macros::format_description;
use time::{Date, Month};

/// Parse a strict `YYYY-MM-DD` date, ignoring surrounding whitespace.
///
/// Impossible calendar dates such as `2023-02-30` are rejected.
#[must_use]
pub fn parse_iso_date(value: &str) -> Option<Date> {
    let trimmed = value.trim();
    let bytes = trimmed.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| if i == 4 || i == 7 { *b == b'-' } else { b.is_ascii_digit() });
    if !shape_ok {
        return None;
    }
    match Date::parse(trimmed, format_description!("[year]-[month]-[day]")) {
        Ok(date) if date.year() > 0 => Some(date),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!(value = %trimmed, error = %e, "rejected start date");
            None
        }
    }
}

/// Relationship counters derived from the start date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnniversaryStats {
    pub start: Date,
    /// Days since the start, counting the start day itself as day one.
    pub days_together: i64,
    /// Completed years.
    pub years_together: i32,
    /// The next anniversary, today included.
    pub next_anniversary: Date,
    pub days_until_next: i64,
}

/// Compute the counters for `start` as seen on `today`.
///
/// A start date in the future counts as day one and zero years.
#[must_use]
pub fn anniversary_stats(start: Date, today: Date) -> AnniversaryStats {
    let days_together = (today - start).whole_days().max(0) + 1;

    let this_year = anniversary_in(start, today.year());
    let next_anniversary = if this_year < today { anniversary_in(start, today.year() + 1) } else { this_year };
    let days_until_next = (next_anniversary - today).whole_days().max(0);

    let not_reached = i32::from(this_year > today);
    let years_together = (today.year() - start.year() - not_reached).max(0);

    AnniversaryStats { start, days_together, years_together, next_anniversary, days_until_next }
}

/// `start`'s month and day in `year`. Feb 29 rolls over to Mar 1 in common years.
fn anniversary_in(start: Date, year: i32) -> Date {
    let (month, day) = (start.month(), start.day());
    Date::from_calendar_date(year, month, day)
        .or_else(|_| Date::from_calendar_date(year, Month::March, 1))
        .unwrap_or(start)
}
