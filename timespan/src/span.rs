//! Calendar spans which pair a `TimeSpan` with a whole number of months.
//!
//! Months and years have no fixed length, so these types only carry the month
//! count. Resolving them against a calendar date is left to the caller.

use crate::TimeSpan;
use core::fmt::Display;
use core::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A number of calendar months. Arithmetic saturates at the bounds of `i32`
/// rather than overflowing.
#[derive(Copy, Clone, Default, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MonthSpan {
    months: i32,
}

impl MonthSpan {
    pub const ZERO: MonthSpan = MonthSpan { months: 0 };

    pub const fn from_months(months: i32) -> Self {
        Self { months }
    }

    pub const fn from_years(years: i32) -> Self {
        Self {
            months: years.saturating_mul(12),
        }
    }

    pub const fn total_months(&self) -> i32 {
        self.months
    }

    /// Whole years, truncated toward zero.
    pub const fn years(&self) -> i32 {
        self.months / 12
    }

    /// Months remaining after whole years are removed. Has the same sign as
    /// the total.
    pub const fn months(&self) -> i32 {
        self.months % 12
    }
}

impl Display for MonthSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        let years = self.years();
        let months = self.months();
        match (years, months) {
            (0, m) => write!(f, "{m}M"),
            (y, 0) => write!(f, "{y}Y"),
            (y, m) => write!(f, "{y}Y {m}M"),
        }
    }
}

impl Neg for MonthSpan {
    type Output = MonthSpan;

    fn neg(self) -> Self::Output {
        MonthSpan {
            months: self.months.saturating_neg(),
        }
    }
}

impl Add<MonthSpan> for MonthSpan {
    type Output = MonthSpan;

    fn add(self, rhs: MonthSpan) -> Self::Output {
        MonthSpan {
            months: self.months.saturating_add(rhs.months),
        }
    }
}

impl Sub<MonthSpan> for MonthSpan {
    type Output = MonthSpan;

    fn sub(self, rhs: MonthSpan) -> Self::Output {
        MonthSpan {
            months: self.months.saturating_sub(rhs.months),
        }
    }
}

impl Mul<i32> for MonthSpan {
    type Output = MonthSpan;

    fn mul(self, rhs: i32) -> Self::Output {
        MonthSpan {
            months: self.months.saturating_mul(rhs),
        }
    }
}

impl Add<TimeSpan> for MonthSpan {
    type Output = DateTimeSpan;

    fn add(self, rhs: TimeSpan) -> Self::Output {
        DateTimeSpan::new(self, rhs)
    }
}

impl Sub<TimeSpan> for MonthSpan {
    type Output = DateTimeSpan;

    fn sub(self, rhs: TimeSpan) -> Self::Output {
        DateTimeSpan::new(self, -rhs)
    }
}

/// A month component and a time component, kept separate. The time component
/// is not normalised into months or the other way around.
#[derive(Copy, Clone, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateTimeSpan {
    months: MonthSpan,
    time: TimeSpan,
}

impl DateTimeSpan {
    pub fn new(months: MonthSpan, time: TimeSpan) -> Self {
        Self { months, time }
    }

    pub fn month_span(&self) -> MonthSpan {
        self.months
    }

    pub fn time_span(&self) -> TimeSpan {
        self.time
    }
}

impl Display for DateTimeSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        write!(f, "{} {}", self.months, self.time)
    }
}

impl Neg for DateTimeSpan {
    type Output = DateTimeSpan;

    fn neg(self) -> Self::Output {
        DateTimeSpan::new(-self.months, -self.time)
    }
}

impl Add<DateTimeSpan> for DateTimeSpan {
    type Output = DateTimeSpan;

    fn add(self, rhs: DateTimeSpan) -> Self::Output {
        DateTimeSpan::new(self.months + rhs.months, self.time + rhs.time)
    }
}

impl Sub<DateTimeSpan> for DateTimeSpan {
    type Output = DateTimeSpan;

    fn sub(self, rhs: DateTimeSpan) -> Self::Output {
        self + (-rhs)
    }
}

impl Add<TimeSpan> for DateTimeSpan {
    type Output = DateTimeSpan;

    fn add(self, rhs: TimeSpan) -> Self::Output {
        DateTimeSpan::new(self.months, self.time + rhs)
    }
}

impl Sub<TimeSpan> for DateTimeSpan {
    type Output = DateTimeSpan;

    fn sub(self, rhs: TimeSpan) -> Self::Output {
        self + (-rhs)
    }
}

impl Add<MonthSpan> for DateTimeSpan {
    type Output = DateTimeSpan;

    fn add(self, rhs: MonthSpan) -> Self::Output {
        DateTimeSpan::new(self.months + rhs, self.time)
    }
}

impl Sub<MonthSpan> for DateTimeSpan {
    type Output = DateTimeSpan;

    fn sub(self, rhs: MonthSpan) -> Self::Output {
        self + (-rhs)
    }
}
