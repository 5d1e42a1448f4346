// SPDX-License-Identifier: MPL-2.0

//! Date ranges: closed intervals of calendar days.
//!
//! A date range is a pair of days, `start` and `finish`, both part of the range.
//! This crate answers the usual questions about such ranges: whether a day or another
//! range is included, whether two ranges overlap, how they are ordered.
//! It is meant as a building block for validity periods, schedules and any other
//! bounded period of time.
//! See also <http://www.martinfowler.com/ap2/range.html>.
//!
//! # DateRange trait
//!
//! Every predicate lives on the [DateRange] trait, which only asks implementors
//! for the two endpoints. The crate provides two implementations:
//! the [Range] value type and the bare `(Date, Date)` pair.
//!
//! Ranges are never validated: a range whose finish comes before its start is legal,
//! it is simply [empty](DateRange::is_empty), as is a range with a single day.
//! All predicates keep working on such ranges with the same definitions.
//!
//! # Basic example
//!
//! ```
//! use daterange::dates::{month, Date};
//! use daterange::{DateRange, DateRangeFactory, RangeFactory};
//!
//! let day = |d| Date::new(2006, month::MARCH, d).unwrap();
//! let factory = RangeFactory;
//!
//! let spring_break = factory.create_date_range(day(10), day(20));
//! assert!(spring_break.includes(day(10)));
//! assert!(spring_break.includes(day(20)));
//! assert!(!spring_break.includes(day(21)));
//!
//! assert!(spring_break.overlaps(&factory.create_date_range(day(18), day(22))));
//! assert!(!spring_break.overlaps(&factory.create_date_range(day(22), day(29))));
//!
//! assert_eq!(spring_break.to_string(), "10.03.2006 - 20.03.2006");
//! assert_eq!(
//!     factory.create_date_range(day(12), day(10)).to_string(),
//!     daterange::EMPTY
//! );
//! ```
//!
//! # Choosing the representation
//!
//! Code that creates ranges can stay independent of the concrete type by taking a
//! [DateRangeFactory]. [RangeFactory] produces [Range] values, and any closure
//! `Fn(Date, Date) -> R` with `R: DateRange` is a factory too.
//!
//! ```
//! use daterange::dates::{self, Date};
//! use daterange::{DateRange, DateRangeFactory, RangeFactory};
//!
//! fn first_week<F: DateRangeFactory>(factory: &F, first: Date) -> F::Range {
//!     factory.create_date_range(first, first.saturating_add_days(6))
//! }
//!
//! let today = dates::today();
//! let as_value = first_week(&RangeFactory, today);
//! let as_pair = first_week(&|start: Date, finish: Date| (start, finish), today);
//! assert!(as_value.exactly_matches(&as_pair));
//! ```
//!
//! # Dates
//!
//! Days are [Date] values from the [dates] crate, re-exported here. They are pinned
//! to midday, built from a 0-based month, and render as `dd.mm.yyyy`.
//!
//! ## Optional features
//!
//! * `serde`: serialization and deserialization of [Range] and [Date].
//! * `proptest`: Exports proptest strategies for [Range] and [Date].

#![warn(missing_docs)]

pub mod date_range;
pub mod factory;
pub mod range;

pub use day_dates as dates;
pub use day_dates::Date;

pub use date_range::DateRange;
pub use factory::{DateRangeFactory, RangeFactory};
pub use range::Range;

#[cfg(any(feature = "proptest", test))]
pub use range::proptest_strategy;

/// Text rendered for an empty date range.
pub const EMPTY: &str = "Empty Date Range";
