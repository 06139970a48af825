//! Pairwise intersection of time ranges
//!
//! The only set operation defined over [`TimeRange`]: the overlap of two
//! ranges, or the zero sentinel when they are disjoint.

use std::cmp::{max, min};

use crate::range::TimeRange;

impl TimeRange {
    /// Returns the intersection of this range with another.
    ///
    /// The result is `[max(starts), min(ends)]`. If the ranges do not
    /// overlap, the guarded constructor collapses the result to the zero
    /// sentinel. Symmetric (`a.intersect(b) == b.intersect(a)`) and
    /// idempotent (`a.intersect(a) == a`).
    pub fn intersect(&self, other: TimeRange) -> TimeRange {
        TimeRange::new(max(self.start(), other.start()), min(self.end(), other.end()))
    }
}

/// Returns the intersection of the given ranges.
///
/// Free-function form of [`TimeRange::intersect`].
pub fn intersect(a: TimeRange, b: TimeRange) -> TimeRange {
    a.intersect(b)
}

#[cfg(test)]
mod tests {
    //! Unit tests for intersect.
    use chrono::{DateTime, FixedOffset, TimeZone, Utc};

    use super::*;

    fn instant(hour: u32, min: u32, sec: u32) -> DateTime<FixedOffset> {
        Utc.with_ymd_and_hms(2006, 1, 2, hour, min, sec).unwrap().fixed_offset()
    }

    fn range(start: (u32, u32, u32), end: (u32, u32, u32)) -> TimeRange {
        TimeRange::new(instant(start.0, start.1, start.2), instant(end.0, end.1, end.2))
    }

    /// Validates `intersect` behavior for the same range scenario.
    ///
    /// Assertions:
    /// - Confirms `intersect(a, a)` equals `a`.
    #[test]
    fn test_same_range() {
        let a = range((15, 4, 5), (15, 7, 5));
        assert_eq!(intersect(a, a), a);
    }

    /// Validates `intersect` behavior when one range is nested in the other.
    ///
    /// Assertions:
    /// - Confirms the intersection equals the inner range.
    /// - Confirms the result is symmetric.
    #[test]
    fn test_nested_range() {
        let outer = range((15, 4, 5), (15, 7, 5));
        let inner = range((15, 5, 5), (15, 6, 5));
        assert_eq!(intersect(outer, inner), inner);
        assert_eq!(intersect(inner, outer), inner);
    }

    /// Validates `intersect` behavior for partially overlapping ranges.
    ///
    /// Assertions:
    /// - Confirms overlap from the left equals `[a.start, b.end]`.
    /// - Confirms overlap from the right equals `[b.start, a.end]`.
    /// - Confirms both orientations are symmetric.
    #[test]
    fn test_partial_overlap() {
        let a = range((15, 4, 5), (15, 7, 5));

        // b.start < a.start < b.end < a.end
        let b = range((15, 3, 5), (15, 5, 5));
        let expected = range((15, 4, 5), (15, 5, 5));
        assert_eq!(intersect(a, b), expected);
        assert_eq!(intersect(b, a), expected);

        // a.start < c.start < a.end < c.end
        let c = range((15, 6, 5), (15, 9, 5));
        let expected = range((15, 6, 5), (15, 7, 5));
        assert_eq!(intersect(a, c), expected);
        assert_eq!(intersect(c, a), expected);
    }

    /// Validates `intersect` behavior for disjoint ranges.
    ///
    /// Assertions:
    /// - Ensures `intersect(a, b).is_zero()` evaluates to true when `a` ends
    ///   before `b` starts.
    /// - Ensures the same holds in the opposite order.
    #[test]
    fn test_disjoint_ranges_collapse_to_zero() {
        let a = range((15, 4, 5), (15, 7, 5));
        let b = range((16, 5, 5), (16, 6, 5));
        assert!(intersect(a, b).is_zero());
        assert!(intersect(b, a).is_zero());
    }

    /// Validates `intersect` behavior for ranges touching at a single
    /// instant.
    ///
    /// Assertions:
    /// - Confirms the intersection is the degenerate range at the shared
    ///   boundary.
    /// - Ensures the result is not the sentinel.
    #[test]
    fn test_touching_ranges_yield_degenerate_overlap() {
        let a = range((15, 4, 5), (15, 7, 5));
        let b = range((15, 7, 5), (15, 9, 5));
        let overlap = intersect(a, b);
        assert_eq!(overlap, range((15, 7, 5), (15, 7, 5)));
        assert!(!overlap.is_zero());
    }

    /// Validates the method form stays in lockstep with the free function.
    ///
    /// Assertions:
    /// - Confirms `a.intersect(b)` equals `intersect(a, b)`.
    #[test]
    fn test_method_matches_free_function() {
        let a = range((15, 4, 5), (15, 7, 5));
        let b = range((15, 5, 5), (15, 9, 5));
        assert_eq!(a.intersect(b), intersect(a, b));
    }
}
