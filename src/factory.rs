// SPDX-License-Identifier: MPL-2.0

//! Construction of date ranges.
//!
//! Code that builds ranges should ask a [DateRangeFactory] for them instead of naming a
//! concrete type. The factory decides which [DateRange] implementation comes out:
//!  - [RangeFactory] builds the in-memory [Range],
//!  - any function or closure `Fn(Date, Date) -> R` is a factory for `R`,
//!    for example `|start, finish| (start, finish)` builds plain pairs.
//!
//! No factory validates its input: `start` after `finish` gives an empty range.

use crate::date_range::DateRange;
use crate::range::Range;
use crate::Date;

/// Trait that allows the choice of the range representation to be made by the caller.
pub trait DateRangeFactory {
    /// Range type built by this factory.
    type Range: DateRange;

    /// Builds a new range from `start` to `finish`, both included.
    /// `start` should not be after `finish`; if it is, the range is empty.
    fn create_date_range(&self, start: Date, finish: Date) -> Self::Range;
}

/// Factory building [Range] values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeFactory;

impl RangeFactory {
    /// Creates the factory.
    pub fn new() -> Self {
        Self
    }
}

impl DateRangeFactory for RangeFactory {
    type Range = Range;

    fn create_date_range(&self, start: Date, finish: Date) -> Range {
        let range = Range::new(start, finish);
        if range.is_empty() {
            log::debug!("created empty date range from {start} to {finish}");
        }
        range
    }
}

impl<F, R> DateRangeFactory for F
where
    F: Fn(Date, Date) -> R,
    R: DateRange,
{
    type Range = R;

    fn create_date_range(&self, start: Date, finish: Date) -> R {
        self(start, finish)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::month;

    fn init_log() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn march(day: i32) -> Date {
        Date::new(2006, month::MARCH, day).unwrap()
    }

    fn build<F: DateRangeFactory>(factory: &F) -> F::Range {
        factory.create_date_range(march(28), march(29))
    }

    #[test]
    fn range_factory() {
        init_log();
        let range = RangeFactory::new().create_date_range(march(28), march(29));
        assert_eq!(range, Range::new(march(28), march(29)));
    }

    #[test]
    fn backwards_is_accepted() {
        init_log();
        let range = RangeFactory.create_date_range(march(28), march(27));
        assert!(range.is_empty());
        assert_eq!(range.start(), march(28));
        assert_eq!(range.finish(), march(27));
    }

    #[test]
    fn every_call_builds_a_new_value() {
        let factory = RangeFactory;
        let first = factory.create_date_range(march(1), march(2));
        let second = factory.create_date_range(march(3), march(4));
        assert_ne!(first, second);
    }

    #[test]
    fn closures_are_factories() {
        let pairs = |start: Date, finish: Date| (start, finish);
        assert_eq!(build(&pairs), (march(28), march(29)));
        assert_eq!(build(&Range::new), Range::new(march(28), march(29)));
    }

    #[test]
    fn boxed_factory() {
        let factory: Box<dyn DateRangeFactory<Range = Range>> = Box::new(RangeFactory);
        assert_eq!(
            factory.create_date_range(march(28), march(29)),
            Range::new(march(28), march(29))
        );
    }
}
