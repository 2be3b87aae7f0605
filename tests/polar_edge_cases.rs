//! Edge-case behaviour at extreme latitudes: polar day, polar night, and
//! the transition bands where only some phases survive.

use sunlight::{times, Phase, PhaseEvent, PhaseSet};

#[cfg(feature = "chrono")]
use chrono::{NaiveDate, Utc};

fn occurs(event: Option<&PhaseEvent<sunlight::HoursUtc>>) -> bool {
    event.expect("phase was requested").occurs()
}

#[test]
fn polar_day_reports_absent_phases_not_errors() {
    // Above the arctic circle at midsummer the sun never sets
    let times = times::sunlight_times_utc(2000, 6, 21, 70.0, 19.0, PhaseSet::all()).unwrap();

    for phase in [
        Phase::Sunrise,
        Phase::Sunset,
        Phase::SunriseEnd,
        Phase::SunsetStart,
        Phase::Dawn,
        Phase::Dusk,
        Phase::NauticalDawn,
        Phase::NauticalDusk,
        Phase::NightEnd,
        Phase::Night,
    ] {
        assert!(
            !occurs(times.get(phase)),
            "{phase} should not occur in polar day"
        );
    }

    // The sun still dips below +6°, so the golden hour boundary survives,
    // and the transit phases always occur.
    assert!(occurs(times.get(Phase::GoldenHourEnd)));
    assert!(occurs(times.get(Phase::GoldenHour)));
    assert!(occurs(times.get(Phase::SolarNoon)));
    assert!(occurs(times.get(Phase::Nadir)));
}

#[test]
fn polar_night_keeps_twilights() {
    // Midwinter at 70°N: no sunrise, but civil through astronomical
    // twilight still happen around midday.
    let times = times::sunlight_times_utc(2000, 12, 21, 70.0, 19.0, PhaseSet::all()).unwrap();

    for phase in [
        Phase::Sunrise,
        Phase::Sunset,
        Phase::SunriseEnd,
        Phase::SunsetStart,
        Phase::GoldenHourEnd,
        Phase::GoldenHour,
    ] {
        assert!(
            !occurs(times.get(phase)),
            "{phase} should not occur in polar night"
        );
    }

    for phase in [
        Phase::Dawn,
        Phase::Dusk,
        Phase::NauticalDawn,
        Phase::NauticalDusk,
        Phase::NightEnd,
        Phase::Night,
    ] {
        assert!(occurs(times.get(phase)), "{phase} should occur");
    }

    // Twilight brackets the (below-horizon) noon
    let noon = times.solar_noon().unwrap().hours();
    let dawn = times.time(Phase::Dawn).unwrap().hours();
    let dusk = times.time(Phase::Dusk).unwrap().hours();
    assert!(dawn < noon && noon < dusk);
}

#[test]
fn poles_are_computable() {
    // At the exact poles the hour-angle equation degenerates; every
    // crossing phase vanishes but the calculation still succeeds.
    for latitude in [90.0, -90.0] {
        let times =
            times::sunlight_times_utc(2024, 6, 21, latitude, 0.0, PhaseSet::all()).unwrap();
        assert!(occurs(times.get(Phase::SolarNoon)));
        assert!(occurs(times.get(Phase::Nadir)));
        assert!(!occurs(times.get(Phase::Sunrise)));
        assert!(!occurs(times.get(Phase::Sunset)));
    }
}

#[test]
fn equator_has_every_phase_year_round() {
    for month in 1..=12 {
        let times = times::sunlight_times_utc(2024, month, 15, 0.0, 0.0, PhaseSet::all()).unwrap();
        for (phase, event) in times.iter() {
            assert!(event.occurs(), "{phase} should occur at the equator");
        }
    }
}

#[test]
fn all_times_finite_across_the_polar_boundary() {
    // Sweep the latitudes around the arctic circle on a solstice; any
    // phase that occurs must carry a finite time.
    for i in 0..=480 {
        let latitude = 60.0 + f64::from(i) * 0.05;
        let times =
            times::sunlight_times_utc(2023, 6, 21, latitude, 0.0, PhaseSet::all()).unwrap();
        for (phase, event) in times.iter() {
            if let PhaseEvent::Occurs(hours) = event {
                assert!(
                    hours.hours().is_finite(),
                    "non-finite {phase} at latitude {latitude}"
                );
            }
        }
    }
}

#[test]
#[cfg(feature = "chrono")]
fn polar_chrono_results_match_core_results() {
    let date = NaiveDate::from_ymd_opt(2000, 6, 21).unwrap();
    let chrono_times = times::sunlight_times(date, 70.0, 19.0, &Utc).unwrap();
    let core_times = times::sunlight_times_utc(2000, 6, 21, 70.0, 19.0, PhaseSet::all()).unwrap();

    for (phase, event) in core_times.iter() {
        assert_eq!(
            event.occurs(),
            chrono_times.get(phase).unwrap().occurs(),
            "occurrence mismatch for {phase}"
        );
    }
}
