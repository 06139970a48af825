//! The inclusive time range value type
//!
//! Provides the immutable [`TimeRange`] value, its guarded factories, and its
//! query and derivation methods. A range is closed on both ends: the point set
//! it represents is `[start, end]`, not a half-open interval.

use std::fmt;

use chrono::{DateTime, FixedOffset, SecondsFormat, TimeDelta, Utc};

/// Returns the zero instant: the Unix epoch at UTC.
///
/// Both endpoints of the zero sentinel range equal this instant, and an
/// exhausted [`SplitCursor`](crate::split::SplitCursor) returns it from
/// `advance` as its terminal value.
pub fn zero_instant() -> DateTime<FixedOffset> {
    DateTime::<Utc>::UNIX_EPOCH.fixed_offset()
}

/// An immutable range of time with timezone-aware endpoints.
///
/// The range includes both start and end, i.e. `[start, end]`. Endpoints are
/// compared as absolute instants; two ranges whose endpoints denote the same
/// instants through different offsets are equal.
///
/// Ranges are created only through the guarded factories ([`TimeRange::new`],
/// [`TimeRange::from_start`], [`TimeRange::until`]) or through derivation
/// methods, all of which uphold `start <= end`. An ordering violation
/// collapses the result to the zero sentinel rather than raising an error;
/// check [`TimeRange::is_zero`] on results that may have collapsed.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tempora_range::TimeRange;
///
/// let range = TimeRange::new(
///     Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap(),
///     Utc.with_ymd_and_hms(2006, 1, 2, 15, 7, 5).unwrap(),
/// );
/// assert_eq!(range.to_string(), "[2006-01-02T15:04:05Z, 2006-01-02T15:07:05Z]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "TimeRangeRepr")
)]
pub struct TimeRange {
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
}

/// Raw endpoint pair used to route deserialization through the guarded
/// constructor, so an inverted payload collapses to the sentinel exactly as a
/// direct `new` call would.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TimeRangeRepr {
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
}

#[cfg(feature = "serde")]
impl From<TimeRangeRepr> for TimeRange {
    fn from(repr: TimeRangeRepr) -> Self {
        Self::new(repr.start, repr.end)
    }
}

impl TimeRange {
    /// Creates a range with the given start and end.
    ///
    /// If `start` is strictly after `end`, returns the zero sentinel.
    pub fn new(
        start: impl Into<DateTime<FixedOffset>>,
        end: impl Into<DateTime<FixedOffset>>,
    ) -> Self {
        let (start, end) = (start.into(), end.into());
        if start > end {
            return Self::zero();
        }
        Self { start, end }
    }

    /// Creates a range covering `duration` forward from `start`.
    ///
    /// The duration should be non-negative for a forward range; a negative
    /// duration collapses the result to the zero sentinel via [`new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeDelta, TimeZone, Utc};
    /// use tempora_range::TimeRange;
    ///
    /// let start = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
    /// let range = TimeRange::from_start(start, TimeDelta::minutes(15));
    /// assert_eq!(range.to_string(), "[2006-01-02T15:04:05Z, 2006-01-02T15:19:05Z]");
    /// ```
    ///
    /// [`new`]: TimeRange::new
    pub fn from_start(start: impl Into<DateTime<FixedOffset>>, duration: TimeDelta) -> Self {
        let start = start.into();
        Self::new(start, start + duration)
    }

    /// Creates a range covering `duration` backward from `end`.
    ///
    /// The duration should be non-negative for a forward range; a negative
    /// duration collapses the result to the zero sentinel via [`new`].
    ///
    /// [`new`]: TimeRange::new
    pub fn until(end: impl Into<DateTime<FixedOffset>>, duration: TimeDelta) -> Self {
        let end = end.into();
        Self::new(end - duration, end)
    }

    /// Returns the zero sentinel range, the canonical "no such range" marker.
    ///
    /// Both endpoints equal [`zero_instant`]. The sentinel is distinct from a
    /// degenerate range whose equal endpoints are a real instant; see
    /// [`TimeRange::is_zero`].
    pub fn zero() -> Self {
        Self { start: zero_instant(), end: zero_instant() }
    }

    /// Returns the start time.
    pub fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    /// Returns the end time.
    pub fn end(&self) -> DateTime<FixedOffset> {
        self.end
    }

    /// Returns the duration between start and end.
    ///
    /// Non-negative for any range built through the guarded factories.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Returns true if both endpoints equal the zero instant.
    ///
    /// This identifies the sentinel produced by collapsed constructions, not
    /// zero-length ranges in general: a range whose equal endpoints are a
    /// real instant is valid and `is_zero` is false for it. The one caveat of
    /// the sentinel encoding is that a range genuinely pinned to the epoch on
    /// both ends is indistinguishable from the sentinel.
    pub fn is_zero(&self) -> bool {
        self.start == zero_instant() && self.end == zero_instant()
    }

    /// Returns true if the instant is in this range.
    ///
    /// The range is closed on both ends, so an instant equal to either
    /// endpoint is contained. For a degenerate range (`start == end`) this
    /// holds only for that exact instant.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use tempora_range::TimeRange;
    ///
    /// let available = TimeRange::new(
    ///     Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap(),
    ///     Utc.with_ymd_and_hms(2006, 1, 2, 15, 7, 5).unwrap(),
    /// );
    /// let desired = Utc.with_ymd_and_hms(2006, 1, 2, 15, 6, 0).unwrap();
    /// assert!(available.contains(desired));
    /// ```
    pub fn contains(&self, instant: impl Into<DateTime<FixedOffset>>) -> bool {
        let instant = instant.into();
        self.start == instant || self.end == instant || (self.start < instant && instant < self.end)
    }

    /// Returns true if this range ends strictly before the instant.
    ///
    /// Not the complement of [`contains`]: an instant equal to `end` is
    /// contained and `is_before` is false for it.
    ///
    /// [`contains`]: TimeRange::contains
    pub fn is_before(&self, instant: impl Into<DateTime<FixedOffset>>) -> bool {
        self.end < instant.into()
    }

    /// Returns true if this range starts strictly after the instant.
    pub fn is_after(&self, instant: impl Into<DateTime<FixedOffset>>) -> bool {
        self.start > instant.into()
    }

    /// Returns this range moved by the given delta.
    ///
    /// The delta may be negative (shift earlier) or positive (shift later).
    /// Both endpoints move by the identical amount, so the duration is
    /// preserved.
    pub fn shift(&self, delta: TimeDelta) -> Self {
        Self::new(self.start + delta, self.end + delta)
    }

    /// Returns this range with only the end moved by the given delta.
    ///
    /// A positive delta lengthens the range, a negative delta shortens it. If
    /// the moved end would fall before the start, the result collapses to the
    /// zero sentinel; callers must check [`TimeRange::is_zero`].
    pub fn extend(&self, delta: TimeDelta) -> Self {
        Self::new(self.start, self.end + delta)
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        Self::zero()
    }
}

/// Renders as `[<start>, <end>]` with both endpoints in RFC 3339.
///
/// The shape is a committed contract: square brackets, comma-space separator,
/// whole-second precision, `Z` for zero offsets, non-zero offsets preserved.
impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}]",
            self.start.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.end.to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }
}

/// Returns true if the instant is within the range.
///
/// This is a synonym of [`TimeRange::contains`] for call-site readability.
pub fn within(instant: impl Into<DateTime<FixedOffset>>, range: TimeRange) -> bool {
    range.contains(instant)
}
