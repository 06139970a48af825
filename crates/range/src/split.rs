//! Fixed-step subdivision of a time range
//!
//! Walks a range as the sequence `start, start+span, start+2*span, ...` up to
//! and including the last point that is `<= end`. Two forms are provided: an
//! eager [`TimeRange::split`] that materializes the whole sequence, and a lazy
//! [`SplitCursor`] for ranges where that would be wasteful. Both forms produce
//! identical output for identical inputs; their implementations are kept
//! independent so that equivalence stays a testable property.

use std::iter::FusedIterator;

use chrono::{DateTime, FixedOffset, TimeDelta};
use thiserror::Error;

use crate::range::{zero_instant, TimeRange};

/// Error type for subdivision
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SplitError {
    #[error("Split span must be positive, got {0}")]
    NonPositiveSpan(TimeDelta),
}

impl TimeRange {
    /// Returns the ordered sequence of step points within this range.
    ///
    /// Points run from `start` in `span` increments up to and including the
    /// last point `<= end`; a point exactly equal to `end` is included. If
    /// `span` is longer than the range, the sequence is just `[start]`. The
    /// sequence always has at least one element and at most
    /// `floor(duration/span) + 1`.
    ///
    /// A non-positive `span` is rejected with [`SplitError::NonPositiveSpan`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeDelta, TimeZone, Utc};
    /// use tempora_range::TimeRange;
    ///
    /// let range = TimeRange::new(
    ///     Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap(),
    ///     Utc.with_ymd_and_hms(2006, 1, 2, 15, 7, 5).unwrap(),
    /// );
    /// let points = range.split(TimeDelta::minutes(1)).unwrap();
    /// assert_eq!(points.len(), 4);
    /// assert_eq!(points[0], range.start());
    /// assert_eq!(points[3], range.end());
    /// ```
    pub fn split(&self, span: TimeDelta) -> Result<Vec<DateTime<FixedOffset>>, SplitError> {
        if span <= TimeDelta::zero() {
            return Err(SplitError::NonPositiveSpan(span));
        }
        let mut points = Vec::new();
        let mut point = self.start();
        while point <= self.end() {
            points.push(point);
            point += span;
        }
        Ok(points)
    }

    /// Returns a lazy cursor over the same step points as [`split`].
    ///
    /// The same span validation applies.
    ///
    /// [`split`]: TimeRange::split
    pub fn split_cursor(&self, span: TimeDelta) -> Result<SplitCursor, SplitError> {
        if span <= TimeDelta::zero() {
            return Err(SplitError::NonPositiveSpan(span));
        }
        Ok(SplitCursor { range: *self, span, pending: None })
    }
}

/// A lazy, forward-only cursor over the step points of a range.
///
/// Built by [`TimeRange::split_cursor`]. Holds a copy of the immutable range,
/// the step span, and the single mutable piece of state: the next point to
/// emit (`None` until iteration starts). Intended for one consumer in a
/// strictly sequential `has_next`/`advance` loop; the `&mut self` receiver on
/// [`advance`](SplitCursor::advance) makes concurrent stepping of a shared
/// cursor unrepresentable.
///
/// The cursor also implements [`Iterator`], walking the same state, for use
/// in `for` loops and combinator chains.
#[derive(Debug, Clone)]
pub struct SplitCursor {
    range: TimeRange,
    span: TimeDelta,
    pending: Option<DateTime<FixedOffset>>,
}

impl SplitCursor {
    /// Returns true if another step point remains to be produced.
    ///
    /// Before the first `advance` this asks whether `start <= end`, which
    /// holds for every range, so a fresh cursor always has at least one
    /// point.
    pub fn has_next(&self) -> bool {
        self.pending.unwrap_or(self.range.start()) <= self.range.end()
    }

    /// Produces the next step point and advances the cursor.
    ///
    /// After exhaustion this returns [`zero_instant`] as a defined terminal
    /// value, not a fault; callers driving the cursor through this face stop
    /// once [`has_next`](SplitCursor::has_next) is false.
    pub fn advance(&mut self) -> DateTime<FixedOffset> {
        if !self.has_next() {
            return zero_instant();
        }
        let current = self.pending.unwrap_or(self.range.start());
        self.pending = Some(current + self.span);
        current
    }
}

impl Iterator for SplitCursor {
    type Item = DateTime<FixedOffset>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.has_next() {
            Some(self.advance())
        } else {
            None
        }
    }
}

// Once the pending point passes the end it only moves further away, so
// exhaustion is permanent.
impl FusedIterator for SplitCursor {}
