// SPDX-License-Identifier: MPL-2.0

//! Calendar days for date ranges.
//!
//! A [`Date`] is a single day of the proleptic Gregorian calendar. Every date is pinned to the same
//! time of day, 12:00 ("midday"), so that comparing two dates only ever compares days, whatever
//! daylight saving shift happened in between. Time zones are not modelled: [today()] and friends
//! read the local clock and keep its calendar day.
//!
//! Dates are built from a year, a **0-based** month (see the [month] constants) and a day of month.
//! Construction is lenient: a month or day outside its usual span rolls over into the
//! neighbouring months and years, so `Date::new(2006, month::DECEMBER, 32)` is the 1st of January
//! 2007 and `Date::new(2006, month::MARCH, 0)` is the last day of February 2006.
//!
//! Two sentinels bound the calendar used by date ranges:
//!  - [epoch()](Date::epoch): January 1st of year 0
//!  - [infinity()](Date::infinity): December 31st of year 9999
//!
//! Dates render as zero-padded `dd.mm.yyyy` and parse back from the same text.
//!
//! ## Optional features
//!
//! * `serde`: serialization and deserialization of [`Date`] as its `dd.mm.yyyy` text.
//! * `proptest`: Exports a proptest strategy for [`Date`] between the two sentinels.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, Days, Local, NaiveDate, NaiveDateTime, NaiveTime};
#[cfg(any(feature = "proptest", test))]
use proptest::prelude::*;

mod error;

pub use error::DateError;

/// Text rendered by [format_date] for a missing date.
pub const NULL_DATE: &str = "Null Date";

/// Hour of the day every [`Date`] is pinned to.
pub const MIDDAY_HOUR: u32 = 12;

/// Month numbers as expected by [Date::new]. Months are 0-based.
pub mod month {
    /// January
    pub const JANUARY: i32 = 0;
    /// February
    pub const FEBRUARY: i32 = 1;
    /// March
    pub const MARCH: i32 = 2;
    /// April
    pub const APRIL: i32 = 3;
    /// May
    pub const MAY: i32 = 4;
    /// June
    pub const JUNE: i32 = 5;
    /// July
    pub const JULY: i32 = 6;
    /// August
    pub const AUGUST: i32 = 7;
    /// September
    pub const SEPTEMBER: i32 = 8;
    /// October
    pub const OCTOBER: i32 = 9;
    /// November
    pub const NOVEMBER: i32 = 10;
    /// December
    pub const DECEMBER: i32 = 11;
}

/// A calendar day, stored as the midday instant of that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDateTime);

fn midday() -> NaiveTime {
    NaiveTime::from_hms_opt(MIDDAY_HOUR, 0, 0).expect("12:00:00 is a valid time of day")
}

fn shift(day: NaiveDate, days: i64) -> Option<NaiveDate> {
    let delta = Days::new(days.unsigned_abs());
    if days >= 0 {
        day.checked_add_days(delta)
    } else {
        day.checked_sub_days(delta)
    }
}

// Constructors
impl Date {
    /// Creates the date for a year, a 0-based month and a day of month.
    ///
    /// Months outside `0..12` and days outside the month roll over into the neighbouring months
    /// and years. Fails only if the resulting day is not representable.
    pub fn new(year: i32, month: i32, day: i32) -> Result<Self, DateError> {
        let out_of_range = || DateError::OutOfRange { year, month, day };
        let full_year = year
            .checked_add(month.div_euclid(12))
            .ok_or_else(out_of_range)?;
        let month_of_year = month.rem_euclid(12) as u32 + 1;
        let first = NaiveDate::from_ymd_opt(full_year, month_of_year, 1).ok_or_else(out_of_range)?;
        let naive = shift(first, i64::from(day) - 1).ok_or_else(out_of_range)?;
        if naive.year() != year || naive.month() != month_of_year || naive.day() as i32 != day {
            log::trace!(
                "date {year}/{month}/{day} (0-based month) rolled over to {}",
                Self::from(naive)
            );
        }
        Ok(Self::from(naive))
    }

    /// January 1st of year 0, the earliest date used by ranges.
    pub fn epoch() -> Self {
        Self::from(NaiveDate::from_ymd_opt(0, 1, 1).expect("year 0 is representable"))
    }

    /// December 31st of year 9999, the latest date used by ranges.
    pub fn infinity() -> Self {
        Self::from(NaiveDate::from_ymd_opt(9999, 12, 31).expect("year 9999 is representable"))
    }
}

impl From<NaiveDate> for Date {
    fn from(day: NaiveDate) -> Self {
        Self(day.and_time(midday()))
    }
}

// Accessors
impl Date {
    /// The year, which may be 0 or negative.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// The 0-based month, `0` for January.
    pub fn month(&self) -> u32 {
        self.0.month0()
    }

    /// The 1-based day of month.
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The calendar day without its time of day.
    pub fn naive(&self) -> NaiveDate {
        self.0.date()
    }

    /// The instant this date stands for: midday of its day.
    pub fn to_datetime(&self) -> NaiveDateTime {
        self.0
    }
}

// Arithmetic
impl Date {
    /// Adds some number of days, or subtracts them if `days` is negative.
    pub fn add_days(self, days: i64) -> Result<Self, DateError> {
        shift(self.naive(), days)
            .map(Self::from)
            .ok_or_else(|| DateError::Overflow {
                date: self.to_string(),
                days,
            })
    }

    /// Same as [add_days](Date::add_days) but stops at the ends of the representable calendar.
    pub fn saturating_add_days(self, days: i64) -> Self {
        self.add_days(days).unwrap_or_else(|_| {
            if days >= 0 {
                Self::from(NaiveDate::MAX)
            } else {
                Self::from(NaiveDate::MIN)
            }
        })
    }

    /// Number of days from `earlier` to `self`, negative if `earlier` is in fact later.
    pub fn days_since(self, earlier: Self) -> i64 {
        self.naive().signed_duration_since(earlier.naive()).num_days()
    }
}

/// The current day, read from the local clock.
pub fn today() -> Date {
    Date::from(Local::now().date_naive())
}

/// The day after [today()].
pub fn tomorrow() -> Date {
    today().saturating_add_days(1)
}

/// The day before [today()].
pub fn yesterday() -> Date {
    today().saturating_add_days(-1)
}

/// The current local instant. Unlike every [`Date`], it is not pinned to midday.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

// REPORT ######################################################################

impl Display for Date {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}.{:02}.{:04}",
            self.day(),
            self.month() + 1,
            self.year()
        )
    }
}

/// Renders a date as `dd.mm.yyyy`, or [NULL_DATE] when there is none.
pub fn format_date(date: Option<&Date>) -> String {
    match date {
        Some(date) => date.to_string(),
        None => NULL_DATE.to_string(),
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses `dd.mm.yyyy`. Unlike [Date::new], parsing is strict: day and month take exactly
    /// two digits, the year exactly four, and the text must name a real day.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn parse_part<T: FromStr<Err = std::num::ParseIntError>>(
            input: &str,
            part: &str,
            width: usize,
        ) -> Result<T, DateError> {
            let invalid = |reason: String| DateError::InvalidNumber {
                input: input.to_string(),
                part: part.to_string(),
                reason,
            };
            if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid(format!("expected {width} digits")));
            }
            part.parse::<T>().map_err(|e| invalid(e.to_string()))
        }

        let mut parts = s.split('.');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(day), Some(month), Some(year), None) => {
                let day: u32 = parse_part(s, day, 2)?;
                let month: u32 = parse_part(s, month, 2)?;
                let year: i32 = parse_part(s, year, 4)?;
                NaiveDate::from_ymd_opt(year, month, day)
                    .map(Self::from)
                    .ok_or_else(|| DateError::InvalidDate {
                        input: s.to_string(),
                    })
            }
            _ => Err(DateError::NotThreeParts {
                input: s.to_string(),
            }),
        }
    }
}

// SERIALIZATION ###############################################################

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Generate dates between [Date::epoch] and [Date::infinity], both included.
#[cfg(any(feature = "proptest", test))]
pub fn proptest_strategy() -> impl Strategy<Value = Date> {
    let epoch = Date::epoch();
    let span = Date::infinity().days_since(epoch);
    (0..=span).prop_map(move |offset| epoch.saturating_add_days(offset))
}
