//! Sun position calculation.
//!
//! Computes the instantaneous altitude and azimuth of the sun for a
//! timestamp and observer coordinates, using the low-precision suncalc
//! formula set (accurate to a fraction of a degree for roughly the years
//! 1901-2099).

use crate::coords::{altitude, azimuth, sidereal_time, sun_coords};
use crate::error::check_coordinates;
use crate::math::degrees_to_radians;
use crate::time::JulianDay;
use crate::{Result, SunPosition};

#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Calculate the sun position for the given time and location.
///
/// # Arguments
/// * `datetime` - Timezone-aware date and time (converted to UTC internally)
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
///
/// # Returns
/// Altitude and azimuth in radians; see [`SunPosition`] for the angle
/// conventions.
///
/// # Errors
/// Returns error for invalid coordinates (latitude outside ±90°, longitude
/// outside ±180°)
///
/// # Example
/// ```rust
/// use chrono::{DateTime, Utc};
/// use sunlight::position;
///
/// let datetime = "2000-07-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
/// let position = position::sun_position(datetime, 54.0, 9.0).unwrap();
///
/// assert!((position.altitude() - 1.021444).abs() < 1e-5);
/// assert!((position.azimuth() - 0.239049).abs() < 1e-5);
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn sun_position<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<SunPosition> {
    sun_position_from_julian(JulianDay::from_datetime(&datetime), latitude, longitude)
}

/// Calculate the sun position from a Julian day.
///
/// Core implementation for `no_std` compatibility (no chrono dependency).
///
/// # Arguments
/// * `jd` - Instant as a [`JulianDay`]
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
///
/// # Errors
/// Returns error for invalid coordinates
///
/// # Example
/// ```rust
/// use sunlight::{position, time::JulianDay};
///
/// let jd = JulianDay::from_utc(2000, 7, 1, 12, 0, 0.0).unwrap();
/// let position = position::sun_position_from_julian(jd, 54.0, 9.0).unwrap();
///
/// assert!((position.altitude() - 1.021444).abs() < 1e-5);
/// ```
pub fn sun_position_from_julian(
    jd: JulianDay,
    latitude: f64,
    longitude: f64,
) -> Result<SunPosition> {
    check_coordinates(latitude, longitude)?;

    let lw = degrees_to_radians(-longitude);
    let phi = degrees_to_radians(latitude);
    let d = jd.days_since_j2000();

    let coords = sun_coords(d);
    let hour_angle = sidereal_time(d, lw) - coords.right_ascension;

    SunPosition::new(
        altitude(hour_angle, phi, coords.declination),
        azimuth(hour_angle, phi, coords.declination),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_position() {
        let jd = JulianDay::from_utc(2000, 7, 1, 12, 0, 0.0).unwrap();
        let position = sun_position_from_julian(jd, 54.0, 9.0).unwrap();

        assert!((position.altitude() - 1.021444013872015).abs() < 1e-9);
        assert!((position.azimuth() - 0.23904867335099955).abs() < 1e-9);
    }

    #[test]
    fn test_coordinate_validation() {
        let jd = JulianDay::from_utc(2000, 7, 1, 12, 0, 0.0).unwrap();

        assert!(sun_position_from_julian(jd, 95.0, 0.0).is_err());
        assert!(sun_position_from_julian(jd, 0.0, 185.0).is_err());
        assert!(sun_position_from_julian(jd, -90.0, 180.0).is_ok());
    }

    #[test]
    fn test_altitude_within_bounds_over_a_day() {
        use crate::math::PI;

        let midnight = JulianDay::from_utc(2024, 3, 20, 0, 0, 0.0).unwrap();
        for quarter_hour in 0..96 {
            let jd = midnight.add_days(f64::from(quarter_hour) / 96.0);
            let position = sun_position_from_julian(jd, 54.0, 9.0).unwrap();
            assert!(position.altitude().abs() <= PI / 2.0);
            assert!(position.azimuth().abs() <= PI);
        }
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_chrono_and_julian_agree() {
        use chrono::{DateTime, FixedOffset, Utc};

        let utc = "2013-03-05T10:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let offset = "2013-03-05T12:00:00+02:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();

        // Same instant through different timezone representations
        let a = sun_position(utc, 50.5, 30.5).unwrap();
        let b = sun_position(offset, 50.5, 30.5).unwrap();
        assert!((a.altitude() - b.altitude()).abs() < 1e-12);
        assert!((a.azimuth() - b.azimuth()).abs() < 1e-12);
    }
}
