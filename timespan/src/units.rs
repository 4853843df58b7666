use crate::TimeSpan;

/// Build a `TimeSpan` directly from a number.
///
/// ```
/// use timespan::{TimeSpan, TimeSpanExt};
///
/// assert_eq!(5.seconds(), TimeSpan::from_secs(5.0));
/// assert_eq!(1.5.minutes(), 90.seconds());
/// assert_eq!((-2).hours(), -(2.hours()));
/// ```
///
/// Every integer and float primitive is converted to `f64` first, so very
/// large 64 and 128 bit integers lose precision.
pub trait TimeSpanExt: Sized {
    fn nanoseconds(self) -> TimeSpan;

    fn microseconds(self) -> TimeSpan;

    fn milliseconds(self) -> TimeSpan;

    fn seconds(self) -> TimeSpan;

    fn minutes(self) -> TimeSpan;

    fn hours(self) -> TimeSpan;

    fn days(self) -> TimeSpan;

    fn weeks(self) -> TimeSpan;
}

macro_rules! impl_ext {
    ($($ty:ty),*) => {
        $(
            impl TimeSpanExt for $ty {
                #[inline]
                fn nanoseconds(self) -> TimeSpan {
                    TimeSpan::from_nanos(self as f64)
                }
                #[inline]
                fn microseconds(self) -> TimeSpan {
                    TimeSpan::from_micros(self as f64)
                }
                #[inline]
                fn milliseconds(self) -> TimeSpan {
                    TimeSpan::from_millis(self as f64)
                }
                #[inline]
                fn seconds(self) -> TimeSpan {
                    TimeSpan::from_secs(self as f64)
                }
                #[inline]
                fn minutes(self) -> TimeSpan {
                    TimeSpan::from_minutes(self as f64)
                }
                #[inline]
                fn hours(self) -> TimeSpan {
                    TimeSpan::from_hours(self as f64)
                }
                #[inline]
                fn days(self) -> TimeSpan {
                    TimeSpan::from_days(self as f64)
                }
                #[inline]
                fn weeks(self) -> TimeSpan {
                    TimeSpan::from_weeks(self as f64)
                }
            }
        )*
    };
}

impl_ext!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
