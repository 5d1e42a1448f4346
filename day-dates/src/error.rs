// SPDX-License-Identifier: MPL-2.0

//! Errors raised while building, shifting or parsing dates.

use thiserror::Error;

/// Errors that may occur when a [Date](crate::Date) cannot be produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// A lenient construction rolled over to a day outside the representable calendar.
    #[error("no representable day for year {year}, month {month} (0-based), day {day}")]
    OutOfRange {
        /// Requested year.
        year: i32,
        /// Requested month, 0-based, possibly outside `0..12`.
        month: i32,
        /// Requested day of month, possibly outside the month.
        day: i32,
    },

    /// Adding days moved the date outside the representable calendar.
    #[error("adding {days} days to {date} leaves the representable calendar")]
    Overflow {
        /// Date that was being shifted, as `dd.mm.yyyy`.
        date: String,
        /// Number of days that were added.
        days: i64,
    },

    /// Date text must contain day, month and year separated by dots.
    #[error("date {input} must contain 3 numbers separated by dot")]
    NotThreeParts {
        /// Text that was being parsed.
        input: String,
    },

    /// One of the parts of the date text is not a number.
    #[error("cannot parse '{part}' in '{input}' as a number: {reason}")]
    InvalidNumber {
        /// Text that was being parsed.
        input: String,
        /// The part where parsing failed.
        part: String,
        /// The underlying integer parsing error.
        reason: String,
    },

    /// The parts are numbers but do not name a day of the calendar, e.g. `31.02.2006`.
    #[error("{input} is not a day of the calendar")]
    InvalidDate {
        /// Text that was being parsed.
        input: String,
    },
}
