//! Inclusive time range primitives shared across Tempora crates.
//!
//! A [`TimeRange`] is an immutable, closed interval of time points
//! `[start, end]` with timezone-aware endpoints. Every operation is a pure
//! function over value inputs: factories build ranges, predicates query them,
//! derivation methods ([`TimeRange::shift`], [`TimeRange::extend`],
//! [`TimeRange::intersect`]) produce new ranges, and subdivision walks a range
//! in fixed steps either eagerly ([`TimeRange::split`]) or lazily
//! ([`TimeRange::split_cursor`]).
//!
//! Ordering violations never raise errors. A constructor asked for a range
//! whose start falls after its end collapses the result to the zero sentinel
//! ([`TimeRange::zero`]); callers check [`TimeRange::is_zero`] instead of
//! matching an error channel.
//!
//! # Features
//!
//! Enable cargo features to opt into what you need:
//! - `serde`: `Serialize`/`Deserialize` on [`TimeRange`], with
//!   deserialization routed through the guarded constructor

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod intersect;
pub mod range;
pub mod split;

// Re-export commonly used types and functions for convenience
// ------------------------
pub use intersect::intersect;
pub use range::{within, zero_instant, TimeRange};
pub use split::{SplitCursor, SplitError};
