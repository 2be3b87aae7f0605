//! Time conversions for the solar calculations.
//!
//! The suncalc formula set works on a continuous Julian date, counted in
//! days and anchored to the Unix epoch for easy interchange with wall-clock
//! timestamps. This module provides the [`JulianDay`] type and the
//! conversions between calendar dates, Unix milliseconds, and Julian days.

#![allow(clippy::unreadable_literal)]

use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::TimeZone;

/// Milliseconds per day (86,400,000)
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Julian Day Number of the Unix epoch day (1970-01-01)
const J1970: f64 = 2_440_588.0;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
const J2000: f64 = 2_451_545.0;

/// Days between the Unix epoch and 0000-03-01 of the proleptic Gregorian calendar.
const UNIX_EPOCH_CIVIL_DAYS: i64 = 719_468;

/// A Julian date: continuous days (and day fractions) since the Julian epoch.
///
/// This is the time representation the solar formulas operate on. Instants
/// are referenced to UTC; no ΔT correction is applied, which is consistent
/// with the low-precision formula set used by this crate.
///
/// # Example
/// ```
/// # use sunlight::time::JulianDay;
/// // The Unix epoch starts at Julian date 2440587.5
/// let jd = JulianDay::from_unix_millis(0.0);
/// assert!((jd.value() - 2_440_587.5).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDay(f64);

impl JulianDay {
    /// Creates a Julian day from a raw Julian date value.
    #[must_use]
    pub const fn new(julian_date: f64) -> Self {
        Self(julian_date)
    }

    /// Gets the raw Julian date value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Creates a Julian day from milliseconds since the Unix epoch (UTC).
    #[must_use]
    pub fn from_unix_millis(millis: f64) -> Self {
        Self(millis / MILLIS_PER_DAY - 0.5 + J1970)
    }

    /// Gets the instant as milliseconds since the Unix epoch (UTC).
    #[must_use]
    pub fn to_unix_millis(&self) -> f64 {
        (self.0 + 0.5 - J1970) * MILLIS_PER_DAY
    }

    /// Creates a Julian day from UTC calendar components.
    ///
    /// Uses the proleptic Gregorian calendar. The formulas in this crate are
    /// intended for roughly the years 1901-2099; dates outside that window
    /// are accepted but lose accuracy.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if any component is outside its valid range
    /// (month 1-12, day valid for the month, hour 0-23, minute 0-59,
    /// second 0-59.999...).
    ///
    /// # Example
    /// ```
    /// # use sunlight::time::JulianDay;
    /// let jd = JulianDay::from_utc(2000, 1, 1, 12, 0, 0.0).unwrap();
    /// assert!((jd.value() - 2_451_545.0).abs() < 1e-9);
    /// ```
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_datetime(
                "second must be between 0 and 59.999...",
            ));
        }

        let days = days_from_civil(year, month, day);
        let day_fraction =
            (f64::from(hour) + (f64::from(minute) + second / 60.0) / 60.0) / 24.0;
        Ok(Self(days as f64 + (J1970 - 0.5) + day_fraction))
    }

    /// Creates a Julian day from a timezone-aware chrono `DateTime`.
    ///
    /// The instant is converted to UTC; sub-millisecond precision is
    /// discarded, matching the millisecond resolution of the output times.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &chrono::DateTime<Tz>) -> Self {
        Self::from_unix_millis(datetime.timestamp_millis() as f64)
    }

    /// Converts this instant to a `DateTime` in the given timezone.
    ///
    /// The value is rounded to the nearest millisecond.
    ///
    /// # Errors
    /// Returns `ComputationError` if the instant is not finite or falls
    /// outside the range representable by `chrono::DateTime`.
    #[cfg(feature = "chrono")]
    pub fn to_datetime<Tz: TimeZone>(&self, tz: &Tz) -> Result<chrono::DateTime<Tz>> {
        let millis = crate::math::round(self.to_unix_millis());
        if !millis.is_finite() {
            return Err(Error::computation_error("instant is not finite"));
        }
        let utc = chrono::DateTime::from_timestamp_millis(millis as i64).ok_or(
            Error::computation_error("instant outside representable datetime range"),
        )?;
        Ok(tz.from_utc_datetime(&utc.naive_utc()))
    }

    /// Days elapsed since the J2000.0 epoch (2000-01-01 12:00:00 UTC).
    #[must_use]
    pub fn days_since_j2000(&self) -> f64 {
        self.0 - J2000
    }

    /// Creates a Julian day offset from the J2000.0 epoch.
    pub(crate) fn from_days_since_j2000(days: f64) -> Self {
        Self(J2000 + days)
    }

    /// Offsets the instant by a number of days (fractions allowed).
    #[must_use]
    pub fn add_days(self, days: f64) -> Self {
        Self(self.0 + days)
    }
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// Days from the Unix epoch to the given proleptic Gregorian date.
///
/// Integer-exact for the full `i32` year range (Howard Hinnant's
/// days-from-civil algorithm).
const fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year as i64 - 1 } else { year as i64 };
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = y - era * 400;
    let mp = if month > 2 { month - 3 } else { month + 9 };
    let doy = (153 * mp as i64 + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - UNIX_EPOCH_CIVIL_DAYS
}
