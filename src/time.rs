//! Calendar arithmetic and Julian day calculations.
//!
//! Dates are proleptic Gregorian throughout; no Julian calendar switch-over is applied.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::math::floor;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::Datelike;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Earliest year accepted by [`CalendarDate::new`].
///
/// The accepted years, and the two days after the last one, all map onto chrono's
/// `NaiveDate` range.
pub const MIN_YEAR: i32 = -262_143;

/// Latest year accepted by [`CalendarDate::new`].
pub const MAX_YEAR: i32 = 262_141;

/// Calculates the Julian Day for a Gregorian calendar date.
///
/// Follows Meeus, "Astronomical Algorithms", chapter 7. January and February are
/// treated as months 13 and 14 of the previous year. `hours` is the time since
/// 0h UT and may exceed 24.
///
/// # Example
/// ```
/// # use prayer_times::time::julian_day;
/// assert_eq!(julian_day(1992, 10, 13, 0.0), 2_448_908.5);
/// ```
#[must_use]
pub fn julian_day(year: i32, month: u32, day: u32, hours: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (f64::from(year - 1), f64::from(month + 12))
    } else {
        (f64::from(year), f64::from(month))
    };

    let d = f64::from(day) + hours / 24.0;

    let a = floor(y / 100.0);
    let b = 2.0 - a + floor(a / 4.0);

    floor(365.25 * (y + 4716.0)) + floor(30.6001 * (m + 1.0)) + d + b - 1524.5
}

/// Calculates the Julian Century from J2000.0.
///
/// JC = (JD - 2451545.0) / 36525
#[must_use]
pub fn julian_century(julian_day: f64) -> f64 {
    (julian_day - J2000_JDN) / DAYS_PER_CENTURY
}

/// Whether `year` is a leap year in the Gregorian calendar.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`.
///
/// # Errors
/// Returns `InvalidDate` if month is outside 1-12.
pub const fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => return Err(Error::invalid_date("month must be between 1 and 12")),
    };
    Ok(days)
}

/// A calendar date without time of day.
///
/// # Example
/// ```
/// # use prayer_times::time::CalendarDate;
/// let date = CalendarDate::new(2016, 12, 31).unwrap();
/// assert_eq!(date.day_of_year(), 366);
/// assert_eq!(date.next_day(), CalendarDate::new(2017, 1, 1).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "UncheckedDate")
)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Creates a date from year, month (1-12) and day of month.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the month or day does not exist, or the year is
    /// outside [`MIN_YEAR`]..=[`MAX_YEAR`].
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::invalid_date("year is outside the supported range"));
        }
        let days = days_in_month(year, month)?;
        if !(1..=days).contains(&day) {
            return Err(Error::invalid_date("day is out of range for month"));
        }
        Ok(Self { year, month, day })
    }

    /// Creates a date from any chrono date-like value.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_date_like<D: Datelike>(date: &D) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }

    /// Gets the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of month.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Whether this date falls in a leap year.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Ordinal day within the year, starting at 1 for January 1st.
    #[must_use]
    pub fn day_of_year(&self) -> u32 {
        (1..self.month)
            .map(|month| days_in_month(self.year, month).unwrap_or(0))
            .sum::<u32>()
            + self.day
    }

    /// The following calendar day.
    #[must_use]
    pub fn next_day(&self) -> Self {
        let days = days_in_month(self.year, self.month).unwrap_or(31);
        if self.day < days {
            Self {
                day: self.day + 1,
                ..*self
            }
        } else if self.month < 12 {
            Self {
                month: self.month + 1,
                day: 1,
                ..*self
            }
        } else {
            Self {
                year: self.year + 1,
                month: 1,
                day: 1,
            }
        }
    }

    /// Julian Day at 0h UT of this date.
    #[must_use]
    pub fn julian_day(&self) -> f64 {
        julian_day(self.year, self.month, self.day, 0.0)
    }

    /// Converts to a chrono `NaiveDate`.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the year is outside chrono's supported range.
    #[cfg(feature = "chrono")]
    pub fn to_naive_date(&self) -> Result<chrono::NaiveDate> {
        chrono::NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .ok_or_else(|| Error::invalid_date("year is outside the supported range"))
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for CalendarDate {
    fn from(date: chrono::NaiveDate) -> Self {
        Self::from_date_like(&date)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedDate {
    year: i32,
    month: u32,
    day: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedDate> for CalendarDate {
    type Error = Error;

    fn try_from(raw: UncheckedDate) -> Result<Self> {
        Self::new(raw.year, raw.month, raw.day)
    }
}
