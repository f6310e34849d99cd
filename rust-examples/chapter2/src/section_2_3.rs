//! Section 2.3: match
//!
//! `match` is exhaustive: the compiler rejects it unless every possible
//! value is covered. Arms can match:
//!
//! - several alternatives with `|`
//! - ranges such as `0..12`
//! - any value with a guard: `h if h < 18 => ...`
//!
//! The demo classifies a timestamp. The timestamp is a parameter rather than
//! a read of the clock inside the function, so the result depends only on the input.

use std::fmt;
use std::io::Write;

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use tour_common::Result;
use tour_common::console::heading;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Weekday,
    Weekend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl fmt::Display for DayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayKind::Weekday => f.write_str("weekday"),
            DayKind::Weekend => f.write_str("weekend"),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeOfDay::Morning => f.write_str("morning"),
            TimeOfDay::Afternoon => f.write_str("afternoon"),
            TimeOfDay::Evening => f.write_str("evening"),
        }
    }
}

/// Alternatives joined with `|`.
///
/// # Examples
/// ```
/// use chrono::Weekday;
/// use tour_chapter2::section_2_3::{DayKind, day_kind};
/// assert_eq!(day_kind(Weekday::Sun), DayKind::Weekend);
/// assert_eq!(day_kind(Weekday::Wed), DayKind::Weekday);
/// ```
pub fn day_kind(day: Weekday) -> DayKind {
    match day {
        Weekday::Sat | Weekday::Sun => DayKind::Weekend,
        _ => DayKind::Weekday,
    }
}

/// Guards instead of a scrutinee comparison, like a condition-only switch.
pub fn time_of_day(hour: u32) -> TimeOfDay {
    match hour {
        h if h < 12 => TimeOfDay::Morning,
        h if h < 18 => TimeOfDay::Afternoon,
        _ => TimeOfDay::Evening,
    }
}

pub fn demonstrate_match<W: Write>(out: &mut W, now: NaiveDateTime) -> Result<()> {
    heading(out, "match")?;

    let weekday = now.weekday();
    writeln!(out, "{weekday} is a {}", day_kind(weekday))?;
    writeln!(out, "{:02}:00 is in the {}", now.hour(), time_of_day(now.hour()))?;

    // Ranges and bindings with `@`
    let temperature = 23;
    let feel = match temperature {
        i32::MIN..=0 => "freezing",
        1..=15 => "cold",
        t @ 16..=25 => {
            tracing::trace!(temperature = t, "comfortable range");
            "comfortable"
        }
        _ => "hot",
    };
    writeln!(out, "{temperature} degrees feels {feel}")?;

    Ok(())
}
