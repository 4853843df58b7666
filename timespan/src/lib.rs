//! This crate provides a duration type, `TimeSpan`, which stores an elapsed
//! amount of time as a single `f64` number of milliseconds. This gives
//! sub-millisecond precision over a very wide range, allows negative spans,
//! and keeps the type the size of one float.
//!
//! Instead of wrapping the type in an `Option`, an absent or invalid span is
//! represented by `TimeSpan::NULL`, which holds NaN. Arithmetic on it yields
//! NaN and comparisons with it are false, just as they are for `f64`. Use
//! `TimeSpan::is_null()` to check for it.
//!
//! ```
//! use timespan::{TimeSpan, TimeSpanExt};
//!
//! let span = 1.hours() + 1.minutes() + 1.5.seconds();
//! assert_eq!(span.as_millis(), 3_661_500.0);
//! assert_eq!(span.to_time_string(3, true).unwrap(), "01:01:01.500");
//!
//! assert!((TimeSpan::NULL + span).is_null());
//! ```
//!
//! Spans can be combined with a calendar `MonthSpan` to form a
//! `DateTimeSpan`. These types carry the month count alongside the span and
//! leave calendar math to the caller.

mod convert;
mod duration;
mod error;
mod format;
mod span;
mod units;

pub use duration::TimeSpan;
pub use error::Error;
pub use format::{to_time_string, TimeFormat, MAX_COMPONENTS};
pub use span::{DateTimeSpan, MonthSpan};
pub use units::TimeSpanExt;

const NANOS_PER_MILLI: f64 = 1_000_000.0;
const MICROS_PER_MILLI: f64 = 1_000.0;
const MILLIS_PER_SEC: f64 = 1_000.0;
const MILLIS_PER_MINUTE: f64 = 60.0 * MILLIS_PER_SEC;
const MILLIS_PER_HOUR: f64 = 60.0 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: f64 = 24.0 * MILLIS_PER_HOUR;
const MILLIS_PER_WEEK: f64 = 7.0 * MILLIS_PER_DAY;
