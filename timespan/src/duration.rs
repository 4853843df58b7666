use crate::*;
use core::cmp::Ordering;
use core::fmt::Display;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A span of time stored as a floating point number of milliseconds. Unlike
/// `core::time::Duration` the span may be fractional, negative, infinite, or
/// NaN. The NaN value is exposed as `TimeSpan::NULL` and is used to represent
/// a missing or invalid span.
///
/// Comparisons follow `f64`: `NULL` is not equal to anything, including
/// itself, and is unordered with respect to every other span.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct TimeSpan {
    pub(crate) ms: f64,
}

impl TimeSpan {
    /// A span with no length.
    pub const ZERO: TimeSpan = TimeSpan { ms: 0.0 };

    /// The absent/invalid span. Holds NaN milliseconds.
    pub const NULL: TimeSpan = TimeSpan { ms: f64::NAN };

    /// Create a span from milliseconds. A zero input (of either sign) returns
    /// `TimeSpan::ZERO`.
    pub fn from_millis(millis: f64) -> Self {
        if millis == 0.0 {
            Self::ZERO
        } else {
            Self { ms: millis }
        }
    }

    pub fn from_nanos(nanos: f64) -> Self {
        Self::from_millis(nanos / NANOS_PER_MILLI)
    }

    pub fn from_micros(micros: f64) -> Self {
        Self::from_millis(micros / MICROS_PER_MILLI)
    }

    pub fn from_secs(secs: f64) -> Self {
        Self::from_millis(secs * MILLIS_PER_SEC)
    }

    pub fn from_minutes(minutes: f64) -> Self {
        Self::from_millis(minutes * MILLIS_PER_MINUTE)
    }

    pub fn from_hours(hours: f64) -> Self {
        Self::from_millis(hours * MILLIS_PER_HOUR)
    }

    pub fn from_days(days: f64) -> Self {
        Self::from_millis(days * MILLIS_PER_DAY)
    }

    pub fn from_weeks(weeks: f64) -> Self {
        Self::from_millis(weeks * MILLIS_PER_WEEK)
    }

    pub fn as_nanos(&self) -> f64 {
        self.ms * NANOS_PER_MILLI
    }

    pub fn as_micros(&self) -> f64 {
        self.ms * MICROS_PER_MILLI
    }

    pub fn as_millis(&self) -> f64 {
        self.ms
    }

    /// Whole milliseconds, truncated toward zero. Out of range values
    /// saturate and NaN becomes zero.
    pub fn as_millis_i32(&self) -> i32 {
        self.ms as i32
    }

    /// Whole milliseconds, truncated toward zero. Out of range values
    /// saturate and NaN becomes zero.
    pub fn as_millis_i64(&self) -> i64 {
        self.ms as i64
    }

    pub fn as_secs(&self) -> f64 {
        self.ms / MILLIS_PER_SEC
    }

    pub fn as_minutes(&self) -> f64 {
        self.ms / MILLIS_PER_MINUTE
    }

    pub fn as_hours(&self) -> f64 {
        self.ms / MILLIS_PER_HOUR
    }

    pub fn as_days(&self) -> f64 {
        self.ms / MILLIS_PER_DAY
    }

    pub fn as_weeks(&self) -> f64 {
        self.ms / MILLIS_PER_WEEK
    }

    /// Returns true if this is the `NULL` span, or any other NaN span.
    pub fn is_null(&self) -> bool {
        self.ms.is_nan()
    }

    pub fn is_finite(&self) -> bool {
        self.ms.is_finite()
    }

    pub fn abs(self) -> Self {
        Self::from_millis(self.ms.abs())
    }

    /// Compare two spans by their millisecond values. Returns `None` if
    /// either span is NaN.
    pub fn compare(&self, other: &TimeSpan) -> Option<Ordering> {
        self.ms.partial_cmp(&other.ms)
    }

    /// The smaller of two spans. If either span is NaN the result is `NULL`.
    pub fn min(self, other: TimeSpan) -> Self {
        if self.is_null() || other.is_null() {
            Self::NULL
        } else if other < self {
            other
        } else {
            self
        }
    }

    /// The larger of two spans. If either span is NaN the result is `NULL`.
    pub fn max(self, other: TimeSpan) -> Self {
        if self.is_null() || other.is_null() {
            Self::NULL
        } else if other > self {
            other
        } else {
            self
        }
    }

    /// Restrict the span to the range `min..=max`. A NaN span is returned
    /// unchanged and NaN bounds are ignored. Unlike `f64::clamp` this never
    /// panics; the lower bound is checked first.
    pub fn clamp(self, min: TimeSpan, max: TimeSpan) -> Self {
        if self < min {
            min
        } else if self > max {
            max
        } else {
            self
        }
    }

    /// Render the span as a fixed width clock string. See
    /// [`to_time_string`](crate::to_time_string).
    pub fn to_time_string(&self, components: usize, add_millis: bool) -> Result<String, Error> {
        to_time_string(self.ms, components, add_millis)
    }

    /// Render the span as `hh:mm:ss`.
    pub fn to_clock_string(&self) -> String {
        TimeFormat::default().format_span(*self)
    }
}

impl Display for TimeSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        write!(f, "{}ms", self.ms)
    }
}

impl Neg for TimeSpan {
    type Output = TimeSpan;

    fn neg(self) -> Self::Output {
        TimeSpan::from_millis(-self.ms)
    }
}

impl Add<TimeSpan> for TimeSpan {
    type Output = TimeSpan;

    fn add(self, rhs: TimeSpan) -> Self::Output {
        TimeSpan::from_millis(self.ms + rhs.ms)
    }
}

impl AddAssign<TimeSpan> for TimeSpan {
    fn add_assign(&mut self, rhs: TimeSpan) {
        *self = *self + rhs;
    }
}

impl Add<MonthSpan> for TimeSpan {
    type Output = DateTimeSpan;

    fn add(self, rhs: MonthSpan) -> Self::Output {
        DateTimeSpan::new(rhs, self)
    }
}

impl Add<DateTimeSpan> for TimeSpan {
    type Output = DateTimeSpan;

    fn add(self, rhs: DateTimeSpan) -> Self::Output {
        DateTimeSpan::new(rhs.month_span(), self + rhs.time_span())
    }
}

// subtraction is addition of the negated operand, so NaN and signed zero
// behave exactly as they do for `+`

impl Sub<TimeSpan> for TimeSpan {
    type Output = TimeSpan;

    fn sub(self, rhs: TimeSpan) -> Self::Output {
        self + (-rhs)
    }
}

impl SubAssign<TimeSpan> for TimeSpan {
    fn sub_assign(&mut self, rhs: TimeSpan) {
        *self = *self - rhs;
    }
}

impl Sub<MonthSpan> for TimeSpan {
    type Output = DateTimeSpan;

    fn sub(self, rhs: MonthSpan) -> Self::Output {
        self + (-rhs)
    }
}

impl Sub<DateTimeSpan> for TimeSpan {
    type Output = DateTimeSpan;

    fn sub(self, rhs: DateTimeSpan) -> Self::Output {
        self + (-rhs)
    }
}

macro_rules! scalar {
    ($($ty:ty),*) => {
        $(
            impl Mul<$ty> for TimeSpan {
                type Output = TimeSpan;

                fn mul(self, rhs: $ty) -> Self::Output {
                    TimeSpan::from_millis(self.ms * rhs as f64)
                }
            }

            impl MulAssign<$ty> for TimeSpan {
                fn mul_assign(&mut self, rhs: $ty) {
                    *self = *self * rhs;
                }
            }

            impl Div<$ty> for TimeSpan {
                type Output = TimeSpan;

                fn div(self, rhs: $ty) -> Self::Output {
                    TimeSpan::from_millis(self.ms / rhs as f64)
                }
            }

            impl DivAssign<$ty> for TimeSpan {
                fn div_assign(&mut self, rhs: $ty) {
                    *self = *self / rhs;
                }
            }
        )*
    };
}

scalar!(f64, f32, i32, i64, u32, u64);

impl Mul<TimeSpan> for f64 {
    type Output = TimeSpan;

    fn mul(self, rhs: TimeSpan) -> Self::Output {
        rhs * self
    }
}

impl Mul<TimeSpan> for i32 {
    type Output = TimeSpan;

    fn mul(self, rhs: TimeSpan) -> Self::Output {
        rhs * self
    }
}

/// The ratio between two spans.
impl Div<TimeSpan> for TimeSpan {
    type Output = f64;

    fn div(self, rhs: TimeSpan) -> Self::Output {
        self.ms / rhs.ms
    }
}

impl Rem<TimeSpan> for TimeSpan {
    type Output = TimeSpan;

    fn rem(self, rhs: TimeSpan) -> Self::Output {
        TimeSpan::from_millis(self.ms % rhs.ms)
    }
}

impl Sum for TimeSpan {
    fn sum<I: Iterator<Item = TimeSpan>>(iter: I) -> Self {
        iter.fold(TimeSpan::ZERO, |acc, span| acc + span)
    }
}

impl<'a> Sum<&'a TimeSpan> for TimeSpan {
    fn sum<I: Iterator<Item = &'a TimeSpan>>(iter: I) -> Self {
        iter.fold(TimeSpan::ZERO, |acc, span| acc + *span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size() {
        assert_eq!(std::mem::size_of::<TimeSpan>(), 8);
    }

    #[test]
    fn zero() {
        assert_eq!(TimeSpan::from_millis(0.0).as_millis().to_bits(), 0);
        // negative zero collapses to ZERO
        assert_eq!(TimeSpan::from_millis(-0.0).as_millis().to_bits(), 0);
        assert_eq!(TimeSpan::default(), TimeSpan::ZERO);
        assert_eq!((-TimeSpan::ZERO).as_millis().to_bits(), 0);
    }

    #[test]
    fn conversions() {
        assert_eq!(TimeSpan::from_nanos(1_500_000.0).as_millis(), 1.5);
        assert_eq!(TimeSpan::from_micros(2_000.0).as_millis(), 2.0);
        assert_eq!(TimeSpan::from_secs(1.5).as_millis(), 1_500.0);
        assert_eq!(TimeSpan::from_minutes(2.0).as_millis(), 120_000.0);
        assert_eq!(TimeSpan::from_hours(1.0).as_millis(), 3_600_000.0);
        assert_eq!(TimeSpan::from_days(1.0).as_millis(), 86_400_000.0);
        assert_eq!(TimeSpan::from_weeks(1.0).as_millis(), 604_800_000.0);

        let span = TimeSpan::from_millis(90_000.0);
        assert_eq!(span.as_nanos(), 90_000_000_000.0);
        assert_eq!(span.as_micros(), 90_000_000.0);
        assert_eq!(span.as_secs(), 90.0);
        assert_eq!(span.as_minutes(), 1.5);
        assert_eq!(span.as_hours(), 0.025);
        assert_eq!(TimeSpan::from_hours(36.0).as_days(), 1.5);
        assert_eq!(TimeSpan::from_days(14.0).as_weeks(), 2.0);
    }

    #[test]
    fn integer_millis() {
        assert_eq!(TimeSpan::from_millis(1.9).as_millis_i32(), 1);
        assert_eq!(TimeSpan::from_millis(-1.9).as_millis_i64(), -1);
        assert_eq!(TimeSpan::from_millis(1e12).as_millis_i32(), i32::MAX);
        assert_eq!(TimeSpan::from_millis(1e12).as_millis_i64(), 1_000_000_000_000);
        assert_eq!(TimeSpan::NULL.as_millis_i32(), 0);
        assert_eq!(TimeSpan::NULL.as_millis_i64(), 0);
    }

    #[test]
    fn arithmetic() {
        let a = TimeSpan::from_secs(3.0);
        let b = TimeSpan::from_millis(250.0);

        assert_eq!(a + b, TimeSpan::from_millis(3_250.0));
        assert_eq!(a - b, TimeSpan::from_millis(2_750.0));
        assert_eq!(-a, TimeSpan::from_secs(-3.0));
        assert_eq!(a * 2, TimeSpan::from_secs(6.0));
        assert_eq!(a * 0.5, TimeSpan::from_millis(1_500.0));
        assert_eq!(2.0 * b, TimeSpan::from_millis(500.0));
        assert_eq!(a / 3_u32, TimeSpan::from_secs(1.0));
        assert_eq!(a / b, 12.0);
        assert_eq!(a % TimeSpan::from_millis(1_100.0), TimeSpan::from_millis(800.0));

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
        c *= 4_i64;
        assert_eq!(c, TimeSpan::from_secs(1.0));
        c /= 2.0;
        assert_eq!(c, TimeSpan::from_millis(500.0));
    }

    #[test]
    fn null() {
        let null = TimeSpan::NULL;
        assert!(null.is_null());
        assert!(!null.is_finite());
        let other = TimeSpan::NULL;
        assert!(null != other);
        assert_eq!(null.compare(&other), None);
        assert_eq!(null.compare(&TimeSpan::ZERO), None);
        assert!((null + TimeSpan::from_secs(1.0)).is_null());
        assert!((TimeSpan::from_secs(1.0) - null).is_null());
        assert!((null * 2_i32).is_null());
        assert_eq!(null.partial_cmp(&TimeSpan::ZERO), None);
    }

    #[test]
    fn ordering() {
        let mut spans = vec![
            TimeSpan::from_hours(1.0),
            TimeSpan::from_millis(-5.0),
            TimeSpan::from_secs(30.0),
        ];
        spans.sort_by(|a, b| a.compare(b).unwrap());
        assert_eq!(
            spans,
            vec![
                TimeSpan::from_millis(-5.0),
                TimeSpan::from_secs(30.0),
                TimeSpan::from_hours(1.0),
            ]
        );
        assert_eq!(
            TimeSpan::from_secs(1.0).compare(&TimeSpan::from_millis(1_000.0)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn min_max_clamp() {
        let a = TimeSpan::from_secs(1.0);
        let b = TimeSpan::from_secs(2.0);
        assert_eq!(a.min(b), a);
        assert_eq!(a.max(b), b);
        assert_eq!(TimeSpan::from_secs(5.0).clamp(a, b), b);
        assert_eq!(TimeSpan::from_secs(-5.0).clamp(a, b), a);
        assert_eq!(TimeSpan::from_millis(1_500.0).clamp(a, b), TimeSpan::from_millis(1_500.0));
        assert_eq!(TimeSpan::from_secs(-5.0).abs(), TimeSpan::from_secs(5.0));
    }

    #[test]
    fn min_max_clamp_keep_null() {
        let a = TimeSpan::from_secs(1.0);
        let b = TimeSpan::from_secs(2.0);
        assert!(TimeSpan::NULL.min(a).is_null());
        assert!(a.min(TimeSpan::NULL).is_null());
        assert!(TimeSpan::NULL.max(a).is_null());
        assert!(a.max(TimeSpan::NULL).is_null());
        assert!(TimeSpan::NULL.clamp(a, b).is_null());
        // NaN bounds never reject a value
        assert_eq!(a.clamp(TimeSpan::NULL, TimeSpan::NULL), a);
    }

    #[test]
    fn sum() {
        let spans = [
            TimeSpan::from_secs(1.0),
            TimeSpan::from_secs(2.0),
            TimeSpan::from_millis(500.0),
        ];
        assert_eq!(spans.iter().sum::<TimeSpan>(), TimeSpan::from_millis(3_500.0));
        assert_eq!(spans.into_iter().sum::<TimeSpan>(), TimeSpan::from_millis(3_500.0));
        assert_eq!(Vec::<TimeSpan>::new().into_iter().sum::<TimeSpan>(), TimeSpan::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", TimeSpan::from_millis(1_500.0)), "1500ms");
        assert_eq!(format!("{}", TimeSpan::from_millis(0.25)), "0.25ms");
        assert_eq!(format!("{}", TimeSpan::NULL), "NaNms");
    }
}
