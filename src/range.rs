// SPDX-License-Identifier: MPL-2.0

//! The in-memory date range.
//!
//! [`Range`] is a plain immutable pair of [`Date`]s. It takes whatever endpoints it is
//! given: a range built backwards (`finish` before `start`) or with a single day is
//! legal and reports itself as [empty](DateRange::is_empty).
//!
//! Equality and hashing look at the endpoints only, so two empty ranges with
//! different endpoints are different values. Ranges are ordered by start, then
//! by finish, which is the same order as [compare_to](DateRange::compare_to).

use std::fmt;

use crate::date_range::DateRange;
use crate::Date;

/// A closed range of days, from `start` to `finish` both included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    // Field order drives the derived ordering.
    start: Date,
    finish: Date,
}

impl Range {
    /// Range between two days, both included.
    /// `start` should not be after `finish`, but this is not checked.
    pub fn new(start: Date, finish: Date) -> Self {
        Self { start, finish }
    }

    /// Range starting and finishing on the same day. It is empty.
    pub fn single_day(day: Date) -> Self {
        Self::new(day, day)
    }

    /// Gives back the `(start, finish)` pair.
    pub fn into_inner(self) -> (Date, Date) {
        (self.start, self.finish)
    }
}

impl DateRange for Range {
    fn start(&self) -> Date {
        self.start
    }

    fn finish(&self) -> Date {
        self.finish
    }
}

impl From<(Date, Date)> for Range {
    fn from((start, finish): (Date, Date)) -> Self {
        Self::new(start, finish)
    }
}

impl From<Range> for (Date, Date) {
    fn from(range: Range) -> Self {
        range.into_inner()
    }
}

// REPORT ######################################################################

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str(crate::EMPTY)
        } else {
            write!(f, "{} - {}", self.start, self.finish)
        }
    }
}

/// Generate ranges with both endpoints between [Date::epoch] and [Date::infinity].
/// About half of them are empty.
#[cfg(any(feature = "proptest", test))]
pub fn proptest_strategy() -> impl proptest::strategy::Strategy<Value = Range> {
    use proptest::strategy::Strategy;

    (
        day_dates::proptest_strategy(),
        day_dates::proptest_strategy(),
    )
        .prop_map(|(start, finish)| Range::new(start, finish))
}

// TESTS #######################################################################
