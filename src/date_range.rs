// SPDX-License-Identifier: MPL-2.0

//! The contract shared by every representation of a date range.
//!
//! A date range is a pair of days, `start` and `finish`, both part of the range.
//! Nothing forces `start <= finish`: a range whose start is not strictly before
//! its finish is simply [empty](DateRange::is_empty).
//!
//! Implementors only provide the two endpoints. Every predicate is defined on top
//! of them, so two representations always agree on inclusion, overlap and ordering,
//! and can be compared with each other.

use std::cmp::Ordering;

use crate::{Date, EMPTY};

/// Trait describing closed ranges of days.
pub trait DateRange {
    // Endpoints
    /// First day of the range.
    fn start(&self) -> Date;
    /// Last day of the range.
    fn finish(&self) -> Date;

    // Automatically implemented functions ###########################

    /// True iff `start >= finish`.
    fn is_empty(&self) -> bool {
        self.start() >= self.finish()
    }

    /// True iff `start <= point <= finish`. Both ends are included.
    fn includes(&self, point: Date) -> bool {
        point >= self.start() && point <= self.finish()
    }

    /// True iff both endpoints of `other` are [included](DateRange::includes) in this range.
    fn includes_range<R: DateRange + ?Sized>(&self, other: &R) -> bool {
        self.includes(other.start()) && self.includes(other.finish())
    }

    /// True iff `other` includes the start or the finish of this range,
    /// or this range includes `other`.
    fn overlaps<R: DateRange + ?Sized>(&self, other: &R) -> bool {
        other.includes(self.start()) || other.includes(self.finish()) || self.includes_range(other)
    }

    /// Orders ranges by start, then by finish.
    fn compare_to<R: DateRange + ?Sized>(&self, other: &R) -> Ordering {
        self.start()
            .cmp(&other.start())
            .then_with(|| self.finish().cmp(&other.finish()))
    }

    /// This range starts strictly before `other`.
    fn starts_before<R: DateRange + ?Sized>(&self, other: &R) -> bool {
        self.start() < other.start()
    }

    /// This range starts strictly after `other`.
    fn starts_after<R: DateRange + ?Sized>(&self, other: &R) -> bool {
        self.start() > other.start()
    }

    /// This range ends strictly before `other`.
    fn ends_before<R: DateRange + ?Sized>(&self, other: &R) -> bool {
        self.finish() < other.finish()
    }

    /// This range ends strictly after `other`.
    fn ends_after<R: DateRange + ?Sized>(&self, other: &R) -> bool {
        self.finish() > other.finish()
    }

    /// `other` lies inside this range without touching either of its boundaries:
    /// `self.includes_range(other) && self.starts_before(other) && self.ends_after(other)`.
    fn strictly_includes<R: DateRange + ?Sized>(&self, other: &R) -> bool {
        self.includes_range(other) && self.starts_before(other) && self.ends_after(other)
    }

    /// This range includes `other` while starting no earlier and ending no later:
    /// `self.includes_range(other) && !self.starts_before(other) && !self.ends_after(other)`.
    ///
    /// In practice this holds when both ranges share their endpoints and `start <= finish`.
    fn exactly_matches<R: DateRange + ?Sized>(&self, other: &R) -> bool {
        self.includes_range(other) && !self.starts_before(other) && !self.ends_after(other)
    }

    /// Renders the range as `dd.mm.yyyy - dd.mm.yyyy`, or [EMPTY] for an empty range.
    fn describe(&self) -> String {
        if self.is_empty() {
            EMPTY.to_string()
        } else {
            format!("{} - {}", self.start(), self.finish())
        }
    }
}

/// A bare `(start, finish)` pair is a date range too.
impl DateRange for (Date, Date) {
    fn start(&self) -> Date {
        self.0
    }

    fn finish(&self) -> Date {
        self.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::month;

    fn day(d: i32) -> Date {
        Date::new(2006, month::MARCH, d).unwrap()
    }

    #[test]
    fn pair_endpoints() {
        let pair = (day(10), day(20));
        assert_eq!(DateRange::start(&pair), day(10));
        assert_eq!(DateRange::finish(&pair), day(20));
    }

    #[test]
    fn pair_predicates() {
        let pair = (day(10), day(20));
        assert!(!DateRange::is_empty(&pair));
        assert!(pair.includes(day(10)));
        assert!(pair.includes(day(20)));
        assert!(!pair.includes(day(21)));
        assert!(pair.overlaps(&(day(18), day(22))));
        assert!(!pair.overlaps(&(day(22), day(29))));
        assert!(pair.strictly_includes(&(day(11), day(19))));
        assert!(pair.exactly_matches(&(day(10), day(20))));
        assert_eq!(pair.describe(), "10.03.2006 - 20.03.2006");
        assert_eq!((day(20), day(10)).describe(), "Empty Date Range");
    }

    #[test]
    fn compare_to_breaks_ties_on_finish() {
        let pair = (day(10), day(20));
        assert_eq!(pair.compare_to(&(day(11), day(12))), Ordering::Less);
        assert_eq!(pair.compare_to(&(day(10), day(19))), Ordering::Greater);
        assert_eq!(pair.compare_to(&(day(10), day(20))), Ordering::Equal);
    }

    #[test]
    fn empty_ranges_use_the_same_formulas() {
        // A backwards range still includes nothing between its endpoints,
        // but it is included in any range spanning both of them.
        let backwards = (day(20), day(10));
        assert!(!backwards.includes(day(15)));
        assert!((day(1), day(30)).includes_range(&backwards));
        assert!((day(1), day(30)).overlaps(&backwards));
        assert!(backwards.overlaps(&(day(1), day(30))));

        // A zero-length range includes its only day.
        let single = (day(12), day(12));
        assert!(DateRange::is_empty(&single));
        assert!(single.includes(day(12)));
        assert!(single.exactly_matches(&single));
    }

    #[test]
    fn exactly_matches_needs_the_same_endpoints() {
        let outer = (day(10), day(20));
        assert!(outer.exactly_matches(&(day(10), day(20))));
        assert!(!outer.exactly_matches(&(day(11), day(20))));
        assert!(!outer.exactly_matches(&(day(10), day(19))));
        assert!(!(day(11), day(20)).exactly_matches(&outer));

        // A backwards range does not even include itself.
        let backwards = (day(18), day(12));
        assert!(!backwards.includes_range(&backwards));
        assert!(!backwards.exactly_matches(&backwards));
    }
}
