//! Solar coordinate helpers for the low-precision formula set.
//!
//! These are the "Astronomy Answers" style approximations used by suncalc:
//! position of the sun on the ecliptic from its mean anomaly and equation of
//! center, converted to equatorial coordinates with a fixed obliquity, then
//! to horizontal coordinates through the local sidereal time.
//!
//! All angles are in radians; `d` arguments are days since J2000.0.

#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]

use crate::math::{asin, atan2, clamp_unit, cos, degrees_to_radians, sin, tan};

/// Obliquity of the Earth's ecliptic in radians (23.4397°).
const OBLIQUITY: f64 = 23.4397 * core::f64::consts::PI / 180.0;

/// Equatorial coordinates of the sun.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EquatorialCoords {
    /// Declination in radians
    pub(crate) declination: f64,
    /// Right ascension in radians
    pub(crate) right_ascension: f64,
}

/// Mean anomaly of the sun for `d` days since J2000.0.
pub(crate) fn solar_mean_anomaly(d: f64) -> f64 {
    degrees_to_radians(357.5291 + 0.98560028 * d)
}

/// Ecliptic longitude of the sun from its mean anomaly.
///
/// Applies the equation of center and the longitude of Earth's perihelion
/// (102.9372°); the final π shifts from the sun-as-seen-from-Earth frame.
pub(crate) fn ecliptic_longitude(mean_anomaly: f64) -> f64 {
    let center = degrees_to_radians(
        1.9148 * sin(mean_anomaly) + 0.02 * sin(2.0 * mean_anomaly)
            + 0.0003 * sin(3.0 * mean_anomaly),
    );
    let perihelion = degrees_to_radians(102.9372);
    mean_anomaly + center + perihelion + core::f64::consts::PI
}

/// Declination for ecliptic longitude `l` and ecliptic latitude `b`.
pub(crate) fn declination(l: f64, b: f64) -> f64 {
    asin(clamp_unit(
        sin(b) * cos(OBLIQUITY) + cos(b) * sin(OBLIQUITY) * sin(l),
    ))
}

/// Right ascension for ecliptic longitude `l` and ecliptic latitude `b`.
pub(crate) fn right_ascension(l: f64, b: f64) -> f64 {
    atan2(sin(l) * cos(OBLIQUITY) - tan(b) * sin(OBLIQUITY), cos(l))
}

/// Equatorial coordinates of the sun for `d` days since J2000.0.
pub(crate) fn sun_coords(d: f64) -> EquatorialCoords {
    let l = ecliptic_longitude(solar_mean_anomaly(d));
    EquatorialCoords {
        declination: declination(l, 0.0),
        right_ascension: right_ascension(l, 0.0),
    }
}

/// Local sidereal time for `d` days since J2000.0 and west longitude `lw`.
pub(crate) fn sidereal_time(d: f64, lw: f64) -> f64 {
    degrees_to_radians(280.16 + 360.9856235 * d) - lw
}

/// Altitude of a body at hour angle `h`, observer latitude `phi`,
/// declination `dec`.
pub(crate) fn altitude(h: f64, phi: f64, dec: f64) -> f64 {
    asin(clamp_unit(
        sin(phi) * sin(dec) + cos(phi) * cos(dec) * cos(h),
    ))
}

/// Azimuth of a body at hour angle `h`, observer latitude `phi`,
/// declination `dec`. Measured from south toward west.
pub(crate) fn azimuth(h: f64, phi: f64, dec: f64) -> f64 {
    atan2(sin(h), cos(h) * sin(phi) - tan(dec) * cos(phi))
}
