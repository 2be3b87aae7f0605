//! Sunlight-phase time calculation.
//!
//! For a calendar date and observer location this module computes the
//! instants of the fourteen named sunlight phases: solar noon and nadir
//! from the corrected solar transit, and the twelve rise/set style phases
//! by solving the hour-angle equation for each phase's target altitude.
//!
//! Phases that the sun never reaches on a given day (polar day and polar
//! night) are reported as [`PhaseEvent::DoesNotOccur`] rather than as
//! errors, and a [`PhaseSet`] selection limits both the computation and
//! the shape of the result record.

#![allow(clippy::unreadable_literal)]

use crate::coords::{declination, ecliptic_longitude, solar_mean_anomaly};
use crate::error::check_coordinates;
use crate::math::{acos, cos, degrees_to_radians, round, sin, TAU};
use crate::time::JulianDay;
use crate::types::{HoursUtc, Phase, PhaseEvent, PhaseSet, SunlightTimes};
use crate::Result;

#[cfg(feature = "chrono")]
use chrono::{DateTime, NaiveDate, TimeZone};

/// Transit approximation constant of the suncalc day-cycle equations.
const J0: f64 = 0.0009;

/// A pair of morning/evening phases defined by one target sun altitude.
struct Band {
    /// Target sun altitude in degrees
    altitude_degrees: f64,
    /// Phase at the morning crossing
    morning: Phase,
    /// Phase at the evening crossing
    evening: Phase,
}

/// The twelve crossing phases, grouped by their defining altitude.
///
/// -0.833° is the standard sunrise/sunset altitude (refraction plus solar
/// radius), -0.3° the upper-limb variant, -6/-12/-18° the civil, nautical,
/// and astronomical twilight bands, +6° the golden hour boundary.
const BANDS: [Band; 6] = [
    Band {
        altitude_degrees: -0.833,
        morning: Phase::Sunrise,
        evening: Phase::Sunset,
    },
    Band {
        altitude_degrees: -0.3,
        morning: Phase::SunriseEnd,
        evening: Phase::SunsetStart,
    },
    Band {
        altitude_degrees: -6.0,
        morning: Phase::Dawn,
        evening: Phase::Dusk,
    },
    Band {
        altitude_degrees: -12.0,
        morning: Phase::NauticalDawn,
        evening: Phase::NauticalDusk,
    },
    Band {
        altitude_degrees: -18.0,
        morning: Phase::NightEnd,
        evening: Phase::Night,
    },
    Band {
        altitude_degrees: 6.0,
        morning: Phase::GoldenHourEnd,
        evening: Phase::GoldenHour,
    },
];

/// Hour angle at which the sun reaches altitude `h`, or `None` if it never
/// does on this day (polar day/night).
fn hour_angle(h: f64, phi: f64, dec: f64) -> Option<f64> {
    let x = (sin(h) - sin(phi) * sin(dec)) / (cos(phi) * cos(dec));
    // Outside [-1, 1] (or NaN at the exact poles) there is no crossing
    if (-1.0..=1.0).contains(&x) {
        Some(acos(x))
    } else {
        None
    }
}

/// Corrected solar transit (days since J2000.0) for an approximate transit
/// `ds`, solar mean anomaly `m`, and ecliptic longitude `l`.
fn solar_transit(ds: f64, m: f64, l: f64) -> f64 {
    ds + 0.0053 * sin(m) - 0.0069 * sin(2.0 * l)
}

/// Core calculation on Julian days.
///
/// `date_jd` may be any instant within the calculation date; the Julian
/// cycle rounding anchors the result to the solar day nearest to it.
fn compute(
    date_jd: JulianDay,
    latitude: f64,
    longitude: f64,
    phases: PhaseSet,
) -> Result<SunlightTimes<JulianDay>> {
    check_coordinates(latitude, longitude)?;

    let lw = degrees_to_radians(-longitude);
    let phi = degrees_to_radians(latitude);
    let d = date_jd.days_since_j2000();

    // Julian cycle nearest to the given date at this longitude
    let n = round(d - J0 - lw / TAU);
    let ds = J0 + lw / TAU + n;

    let m = solar_mean_anomaly(ds);
    let l = ecliptic_longitude(m);
    let dec = declination(l, 0.0);

    let noon = solar_transit(ds, m, l);

    let mut times = SunlightTimes::empty();
    if phases.contains(Phase::SolarNoon) {
        times.set(
            Phase::SolarNoon,
            PhaseEvent::Occurs(JulianDay::from_days_since_j2000(noon)),
        );
    }
    if phases.contains(Phase::Nadir) {
        times.set(
            Phase::Nadir,
            PhaseEvent::Occurs(JulianDay::from_days_since_j2000(noon - 0.5)),
        );
    }

    for band in &BANDS {
        let morning_requested = phases.contains(band.morning);
        let evening_requested = phases.contains(band.evening);
        if !morning_requested && !evening_requested {
            continue;
        }

        match hour_angle(degrees_to_radians(band.altitude_degrees), phi, dec) {
            Some(w) => {
                let set = solar_transit(J0 + (w + lw) / TAU + n, m, l);
                // The morning crossing mirrors the evening one around noon
                let rise = noon - (set - noon);
                if morning_requested {
                    times.set(
                        band.morning,
                        PhaseEvent::Occurs(JulianDay::from_days_since_j2000(rise)),
                    );
                }
                if evening_requested {
                    times.set(
                        band.evening,
                        PhaseEvent::Occurs(JulianDay::from_days_since_j2000(set)),
                    );
                }
            }
            None => {
                if morning_requested {
                    times.set(band.morning, PhaseEvent::DoesNotOccur);
                }
                if evening_requested {
                    times.set(band.evening, PhaseEvent::DoesNotOccur);
                }
            }
        }
    }

    Ok(times)
}

/// Calculate all fourteen sunlight-phase times for a date and location.
///
/// The date is interpreted as a UTC calendar date; output instants are
/// expressed in `tz`. Callers without timezone requirements pass
/// [`chrono::Utc`].
///
/// # Arguments
/// * `date` - Calendar date (time of day is irrelevant to the result)
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
/// * `tz` - Timezone for the output instants
///
/// # Errors
/// Returns error for invalid coordinates (latitude outside ±90°, longitude
/// outside ±180°)
///
/// # Example
/// ```rust
/// use chrono::{NaiveDate, Utc};
/// use sunlight::times;
///
/// let date = NaiveDate::from_ymd_opt(2000, 7, 1).unwrap();
/// let times = times::sunlight_times(date, 54.0, 9.0, &Utc).unwrap();
///
/// let sunrise = times.sunrise().unwrap();
/// assert_eq!(
///     sunrise.format("%Y-%m-%d %H:%M:%S").to_string(),
///     "2000-07-01 02:57:50"
/// );
/// ```
#[cfg(feature = "chrono")]
pub fn sunlight_times<Tz: TimeZone>(
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
    tz: &Tz,
) -> Result<SunlightTimes<DateTime<Tz>>> {
    sunlight_times_for_phases(date, latitude, longitude, tz, PhaseSet::all())
}

/// Calculate a selection of sunlight-phase times for a date and location.
///
/// Only the requested phases appear in the result record, in canonical
/// order regardless of how the selection was built; solving work is shared
/// per altitude band, so requesting fewer phases does less work.
///
/// # Errors
/// Returns error for invalid coordinates (latitude outside ±90°, longitude
/// outside ±180°)
///
/// # Example
/// ```rust
/// use chrono::{NaiveDate, Utc};
/// use sunlight::{times, Phase, PhaseSet};
///
/// let date = NaiveDate::from_ymd_opt(2000, 7, 1).unwrap();
/// let selection = PhaseSet::of(&[Phase::Sunset, Phase::Sunrise]);
/// let times =
///     times::sunlight_times_for_phases(date, 54.0, 9.0, &Utc, selection).unwrap();
///
/// assert!(times.sunrise().is_some());
/// assert!(times.sunset().is_some());
/// // Not part of the selection, so not part of the record
/// assert!(times.get(Phase::SolarNoon).is_none());
/// ```
#[cfg(feature = "chrono")]
pub fn sunlight_times_for_phases<Tz: TimeZone>(
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
    tz: &Tz,
    phases: PhaseSet,
) -> Result<SunlightTimes<DateTime<Tz>>> {
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always valid")
        .and_utc();
    let times = compute(
        JulianDay::from_datetime(&midnight),
        latitude,
        longitude,
        phases,
    )?;
    times.try_map(|jd| jd.to_datetime(tz))
}

/// Calculate sunlight-phase times for a sequence of dates.
///
/// The bulk form of [`sunlight_times_for_phases`]: yields one record per
/// input date, in input order. Coordinates are validated once up front.
///
/// # Example
/// ```rust
/// use chrono::{NaiveDate, Utc};
/// use sunlight::{times, PhaseSet};
///
/// let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let dates = start.iter_days().take(7);
/// let week: Result<Vec<_>, _> =
///     times::sunlight_times_range(dates, 54.0, 9.0, &Utc, PhaseSet::all())
///         .collect();
///
/// assert_eq!(week.unwrap().len(), 7);
/// ```
#[cfg(feature = "chrono")]
pub fn sunlight_times_range<Tz, D>(
    dates: D,
    latitude: f64,
    longitude: f64,
    tz: &Tz,
    phases: PhaseSet,
) -> impl Iterator<Item = Result<SunlightTimes<DateTime<Tz>>>>
where
    Tz: TimeZone,
    D: IntoIterator<Item = NaiveDate>,
{
    let precheck = check_coordinates(latitude, longitude);
    let tz = tz.clone();
    dates.into_iter().map(move |date| {
        precheck.clone()?;
        sunlight_times_for_phases(date, latitude, longitude, &tz, phases)
    })
}

/// Calculate sunlight-phase times without the chrono dependency.
///
/// Times are returned as [`HoursUtc`], hours since midnight UTC (0 UT) of
/// the given date; values may be negative (previous day, routine for the
/// nadir) or exceed 24 (next day).
///
/// # Arguments
/// * `year` - Year
/// * `month` - Month (1-12)
/// * `day` - Day of month (1-31)
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
/// * `phases` - Selection of phases to compute
///
/// # Errors
/// Returns error for invalid date components or coordinates
///
/// # Example
/// ```
/// use sunlight::{times, PhaseSet};
///
/// let times =
///     times::sunlight_times_utc(2000, 7, 1, 54.0, 9.0, PhaseSet::all()).unwrap();
///
/// let sunrise = times.sunrise().unwrap();
/// assert!((sunrise.hours() - 2.964).abs() < 0.001);
/// ```
pub fn sunlight_times_utc(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    phases: PhaseSet,
) -> Result<SunlightTimes<HoursUtc>> {
    let midnight = JulianDay::from_utc(year, month, day, 0, 0, 0.0)?;
    let times = compute(midnight, latitude, longitude, phases)?;
    times.try_map(|jd| {
        Ok(HoursUtc::from_hours(
            (jd.value() - midnight.value()) * 24.0,
        ))
    })
}
