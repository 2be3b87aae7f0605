//! Core data types for sun position and sunlight-time calculations.

use crate::math::{floor, PI};
use crate::{Error, Result};
use core::fmt;
use core::str::FromStr;

/// Sun position in horizontal coordinates, as seen from a point on Earth.
///
/// Both angles are in radians, following the suncalc convention:
/// - Altitude: angle above the horizon, 0 at the horizon, π/2 at the zenith,
///   negative below the horizon.
/// - Azimuth: direction along the horizon, measured from south and
///   increasing toward west; 0 is south, π/2 is west, ±π is north.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Altitude above the horizon in radians (-π/2 to π/2)
    altitude: f64,
    /// Azimuth in radians, measured from south toward west (-π to π)
    azimuth: f64,
}

impl SunPosition {
    /// Creates a new sun position from altitude and azimuth in radians.
    ///
    /// # Errors
    /// Returns `ComputationError` if either angle is not finite or the
    /// altitude is outside [-π/2, π/2].
    ///
    /// # Example
    /// ```
    /// # use sunlight::SunPosition;
    /// let position = SunPosition::new(0.5, -1.2).unwrap();
    /// assert_eq!(position.altitude(), 0.5);
    /// assert_eq!(position.azimuth(), -1.2);
    /// ```
    pub fn new(altitude: f64, azimuth: f64) -> Result<Self> {
        if !altitude.is_finite() || altitude.abs() > PI / 2.0 {
            return Err(Error::computation_error(
                "altitude must be between -π/2 and π/2",
            ));
        }
        if !azimuth.is_finite() {
            return Err(Error::computation_error("azimuth is not finite"));
        }
        Ok(Self { altitude, azimuth })
    }

    /// Gets the altitude above the horizon in radians (-π/2 to π/2).
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Gets the azimuth in radians, measured from south toward west (-π to π).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the azimuth in radians measured clockwise from north (0 to 2π).
    ///
    /// Compass-style convenience for callers that prefer the surveying
    /// convention over the suncalc south-based one.
    #[must_use]
    pub fn azimuth_from_north(&self) -> f64 {
        let from_north = self.azimuth + PI;
        if from_north >= 2.0 * PI {
            from_north - 2.0 * PI
        } else {
            from_north
        }
    }

    /// Checks if the sun is above the horizon (altitude > 0).
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.altitude > 0.0
    }
}

/// The fourteen named sunlight phases of a day.
///
/// Declared in the canonical order used by result records and phase-set
/// iteration, matching the order of the `keep` defaults in the original
/// suncalc interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// Sun at its highest position
    SolarNoon,
    /// Darkest moment of the night, sun at its lowest position
    Nadir,
    /// Top edge of the sun appears on the horizon
    Sunrise,
    /// Sun disappears below the horizon, evening civil twilight starts
    Sunset,
    /// Bottom edge of the sun touches the horizon
    SunriseEnd,
    /// Bottom edge of the sun touches the horizon in the evening
    SunsetStart,
    /// Morning nautical twilight ends, morning civil twilight starts
    Dawn,
    /// Evening nautical twilight starts
    Dusk,
    /// Morning nautical twilight starts
    NauticalDawn,
    /// Evening astronomical twilight starts
    NauticalDusk,
    /// Night ends, morning astronomical twilight starts
    NightEnd,
    /// Night starts, dark enough for astronomical observations
    Night,
    /// Morning golden hour (soft light) ends
    GoldenHourEnd,
    /// Evening golden hour starts
    GoldenHour,
}

impl Phase {
    /// Number of sunlight phases.
    pub const COUNT: usize = 14;

    /// All phases in canonical order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::SolarNoon,
        Self::Nadir,
        Self::Sunrise,
        Self::Sunset,
        Self::SunriseEnd,
        Self::SunsetStart,
        Self::Dawn,
        Self::Dusk,
        Self::NauticalDawn,
        Self::NauticalDusk,
        Self::NightEnd,
        Self::Night,
        Self::GoldenHourEnd,
        Self::GoldenHour,
    ];

    /// Gets the stable camelCase name of this phase (e.g. `"solarNoon"`).
    ///
    /// These are the names accepted by [`Phase::from_str`] and
    /// [`PhaseSet::from_names`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SolarNoon => "solarNoon",
            Self::Nadir => "nadir",
            Self::Sunrise => "sunrise",
            Self::Sunset => "sunset",
            Self::SunriseEnd => "sunriseEnd",
            Self::SunsetStart => "sunsetStart",
            Self::Dawn => "dawn",
            Self::Dusk => "dusk",
            Self::NauticalDawn => "nauticalDawn",
            Self::NauticalDusk => "nauticalDusk",
            Self::NightEnd => "nightEnd",
            Self::Night => "night",
            Self::GoldenHourEnd => "goldenHourEnd",
            Self::GoldenHour => "goldenHour",
        }
    }

    /// Index of this phase in the canonical order.
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Phase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|phase| phase.name() == s)
            .ok_or(Error::unknown_phase())
    }
}

/// A set of [`Phase`] values, the typed form of the `keep` selection.
///
/// Iteration always yields phases in canonical order, regardless of the
/// order they were inserted in.
///
/// # Example
/// ```
/// # use sunlight::{Phase, PhaseSet};
/// let set = PhaseSet::of(&[Phase::Sunset, Phase::Sunrise]);
/// assert_eq!(set.len(), 2);
/// let in_order: Vec<_> = set.iter().collect();
/// assert_eq!(in_order, [Phase::Sunrise, Phase::Sunset]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhaseSet(u16);

impl PhaseSet {
    const ALL_BITS: u16 = (1u16 << Phase::COUNT) - 1;

    /// Creates an empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Creates a set containing all fourteen phases.
    #[must_use]
    pub const fn all() -> Self {
        Self(Self::ALL_BITS)
    }

    /// Creates a set from a slice of phases.
    #[must_use]
    pub const fn of(phases: &[Phase]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < phases.len() {
            bits |= 1u16 << phases[i].index();
            i += 1;
        }
        Self(bits)
    }

    /// Returns this set with the given phase added.
    #[must_use]
    pub const fn with(self, phase: Phase) -> Self {
        Self(self.0 | 1u16 << phase.index())
    }

    /// Checks whether the set contains the given phase.
    #[must_use]
    pub const fn contains(self, phase: Phase) -> bool {
        self.0 & (1u16 << phase.index()) != 0
    }

    /// Number of phases in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Checks whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the contained phases in canonical order.
    pub fn iter(self) -> impl Iterator<Item = Phase> {
        Phase::ALL
            .iter()
            .copied()
            .filter(move |phase| self.contains(*phase))
    }

    /// Parses a set from phase names (e.g. `["sunrise", "sunset"]`).
    ///
    /// # Errors
    /// Returns `UnknownPhase` if any name is not one of the fourteen
    /// recognized phase names.
    ///
    /// # Example
    /// ```
    /// # use sunlight::{Phase, PhaseSet};
    /// let set = PhaseSet::from_names(["sunset", "sunrise"]).unwrap();
    /// assert_eq!(set, PhaseSet::of(&[Phase::Sunrise, Phase::Sunset]));
    /// assert!(PhaseSet::from_names(["sunshine"]).is_err());
    /// ```
    pub fn from_names<'a, I>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut set = Self::empty();
        for name in names {
            set = set.with(name.parse()?);
        }
        Ok(set)
    }
}

impl FromIterator<Phase> for PhaseSet {
    fn from_iter<I: IntoIterator<Item = Phase>>(iter: I) -> Self {
        let mut set = Self::empty();
        for phase in iter {
            set = set.with(phase);
        }
        set
    }
}

/// Outcome of a single sunlight phase on a given day.
///
/// A phase either occurs at a specific instant or, at extreme latitudes,
/// does not occur at all on that day (polar day/night). Non-occurrence is
/// data, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent<T> {
    /// The phase occurs at the contained instant.
    Occurs(T),
    /// The sun never reaches the phase's altitude on this day at this
    /// latitude (polar day or polar night).
    DoesNotOccur,
}

impl<T> PhaseEvent<T> {
    /// Checks if the phase occurs on this day.
    #[must_use]
    pub const fn occurs(&self) -> bool {
        matches!(self, Self::Occurs(_))
    }

    /// Gets the instant if the phase occurs.
    pub const fn time(&self) -> Option<&T> {
        if let Self::Occurs(time) = self {
            Some(time)
        } else {
            None
        }
    }

    /// Converts into the instant if the phase occurs.
    pub fn into_time(self) -> Option<T> {
        if let Self::Occurs(time) = self {
            Some(time)
        } else {
            None
        }
    }
}

/// Sunlight-phase times for one day at one location.
///
/// Holds an entry for every *requested* phase; phases that were not part of
/// the request are absent from the record entirely, which keeps "not
/// computed" distinguishable from "does not occur on this day"
/// ([`PhaseEvent::DoesNotOccur`]).
///
/// All instants in one record are expressed in the timezone the calculation
/// was asked for and belong to the same 24-hour solar cycle; the nadir
/// precedes solar noon, evening phases follow it.
#[derive(Debug, Clone, PartialEq)]
pub struct SunlightTimes<T> {
    entries: [Option<PhaseEvent<T>>; Phase::COUNT],
}

impl<T> SunlightTimes<T> {
    /// Creates an empty record (no phases requested).
    pub(crate) fn empty() -> Self {
        Self {
            entries: core::array::from_fn(|_| None),
        }
    }

    /// Sets the entry for a phase.
    pub(crate) fn set(&mut self, phase: Phase, event: PhaseEvent<T>) {
        self.entries[phase.index()] = Some(event);
    }

    /// Gets the outcome for a phase, or `None` if it was not requested.
    pub fn get(&self, phase: Phase) -> Option<&PhaseEvent<T>> {
        self.entries[phase.index()].as_ref()
    }

    /// Gets the instant of a phase, if it was requested and occurs.
    pub fn time(&self, phase: Phase) -> Option<&T> {
        self.get(phase).and_then(PhaseEvent::time)
    }

    /// Gets the solar noon instant, if requested.
    ///
    /// Solar noon and nadir always occur, so for a requested phase this is
    /// `None` only when the phase was filtered out of the request.
    pub fn solar_noon(&self) -> Option<&T> {
        self.time(Phase::SolarNoon)
    }

    /// Gets the nadir instant, if requested.
    pub fn nadir(&self) -> Option<&T> {
        self.time(Phase::Nadir)
    }

    /// Gets the sunrise instant, if requested and occurring.
    pub fn sunrise(&self) -> Option<&T> {
        self.time(Phase::Sunrise)
    }

    /// Gets the sunset instant, if requested and occurring.
    pub fn sunset(&self) -> Option<&T> {
        self.time(Phase::Sunset)
    }

    /// The set of phases present in this record.
    #[must_use]
    pub fn requested(&self) -> PhaseSet {
        Phase::ALL
            .iter()
            .copied()
            .filter(|phase| self.entries[phase.index()].is_some())
            .collect()
    }

    /// Iterates over the requested phases in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Phase, &PhaseEvent<T>)> + '_ {
        Phase::ALL.iter().copied().filter_map(move |phase| {
            self.entries[phase.index()].as_ref().map(|event| (phase, event))
        })
    }

    /// Converts every occurring instant with a fallible mapping.
    pub(crate) fn try_map<U, F>(self, mut convert: F) -> Result<SunlightTimes<U>>
    where
        F: FnMut(T) -> Result<U>,
    {
        let mut out = SunlightTimes::empty();
        for (i, entry) in self.entries.into_iter().enumerate() {
            out.entries[i] = match entry {
                None => None,
                Some(PhaseEvent::DoesNotOccur) => Some(PhaseEvent::DoesNotOccur),
                Some(PhaseEvent::Occurs(time)) => Some(PhaseEvent::Occurs(convert(time)?)),
            };
        }
        Ok(out)
    }
}

/// Hours since midnight UTC that can extend beyond a single day.
///
/// Used for sunlight times without the chrono dependency. Values represent
/// hours since midnight UTC (0 UT) of the calculation date:
/// - Negative values indicate the previous day
/// - 0.0 to < 24.0 indicates the current day
/// - ≥ 24.0 indicates the next day
///
/// The nadir of a day's solar cycle usually lands on the previous UTC day,
/// so negative values are routine rather than exceptional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoursUtc(f64);

impl HoursUtc {
    /// Creates a new `HoursUtc` from hours since midnight UTC.
    ///
    /// Values can be negative (previous day) or ≥ 24.0 (next day).
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the raw hours value.
    ///
    /// Can be negative (previous day) or ≥ 24.0 (next day).
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Gets the day offset and normalized hours (0.0 to < 24.0).
    ///
    /// # Returns
    /// Tuple of (`day_offset`, `hours_in_day`) where:
    /// - `day_offset`: whole days offset from the calculation date
    /// - `hours_in_day`: 0.0 to < 24.0
    ///
    /// # Example
    /// ```
    /// # use sunlight::HoursUtc;
    /// let time = HoursUtc::from_hours(-0.5);
    /// let (day_offset, hours) = time.day_and_hours();
    /// assert_eq!(day_offset, -1);
    /// assert!((hours - 23.5).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn day_and_hours(&self) -> (i32, f64) {
        let hours = self.0;
        if !hours.is_finite() {
            return (0, hours);
        }

        let mut day_offset_raw = floor(hours / 24.0);
        let mut normalized_hours = hours - day_offset_raw * 24.0;

        if normalized_hours < 0.0 {
            normalized_hours += 24.0;
            day_offset_raw -= 1.0;
        } else if normalized_hours >= 24.0 {
            normalized_hours -= 24.0;
            day_offset_raw += 1.0;
        }

        let day_offset = if day_offset_raw >= f64::from(i32::MAX) {
            i32::MAX
        } else if day_offset_raw <= f64::from(i32::MIN) {
            i32::MIN
        } else {
            day_offset_raw as i32
        };

        (day_offset, normalized_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sun_position_creation() {
        let pos = SunPosition::new(0.5, -1.2).unwrap();
        assert_eq!(pos.altitude(), 0.5);
        assert_eq!(pos.azimuth(), -1.2);
        assert!(pos.is_sun_up());

        let below = SunPosition::new(-0.1, 2.0).unwrap();
        assert!(!below.is_sun_up());

        assert!(SunPosition::new(2.0, 0.0).is_err());
        assert!(SunPosition::new(f64::NAN, 0.0).is_err());
        assert!(SunPosition::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_azimuth_from_north() {
        let south = SunPosition::new(0.0, 0.0).unwrap();
        assert!((south.azimuth_from_north() - PI).abs() < 1e-12);

        let north = SunPosition::new(0.0, PI).unwrap();
        assert!(north.azimuth_from_north().abs() < 1e-12);

        let west = SunPosition::new(0.0, PI / 2.0).unwrap();
        assert!((west.azimuth_from_north() - 1.5 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_phase_names_round_trip() {
        for phase in Phase::ALL {
            assert_eq!(phase.name().parse::<Phase>().unwrap(), phase);
        }

        assert_eq!("sunset".parse::<Phase>().unwrap(), Phase::Sunset);
        assert!("Sunset".parse::<Phase>().is_err());
        assert!("sunshine".parse::<Phase>().is_err());
        assert!("".parse::<Phase>().is_err());
    }

    #[test]
    fn test_phase_canonical_order() {
        assert_eq!(Phase::ALL[0], Phase::SolarNoon);
        assert_eq!(Phase::ALL[1], Phase::Nadir);
        assert_eq!(Phase::ALL[13], Phase::GoldenHour);
        for (i, phase) in Phase::ALL.iter().enumerate() {
            assert_eq!(phase.index(), i);
        }
    }

    #[test]
    fn test_phase_set_operations() {
        let empty = PhaseSet::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);

        let all = PhaseSet::all();
        assert_eq!(all.len(), Phase::COUNT);
        for phase in Phase::ALL {
            assert!(all.contains(phase));
        }

        let set = PhaseSet::of(&[Phase::GoldenHour, Phase::Sunrise]);
        assert!(set.contains(Phase::Sunrise));
        assert!(set.contains(Phase::GoldenHour));
        assert!(!set.contains(Phase::Sunset));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_phase_set_iterates_in_canonical_order() {
        // Insertion order reversed relative to canonical order
        let set = PhaseSet::empty()
            .with(Phase::GoldenHour)
            .with(Phase::Dawn)
            .with(Phase::SolarNoon);

        let mut iter = set.iter();
        assert_eq!(iter.next(), Some(Phase::SolarNoon));
        assert_eq!(iter.next(), Some(Phase::Dawn));
        assert_eq!(iter.next(), Some(Phase::GoldenHour));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_phase_set_from_names() {
        let set = PhaseSet::from_names(["nauticalDusk", "nadir"]).unwrap();
        assert_eq!(set, PhaseSet::of(&[Phase::Nadir, Phase::NauticalDusk]));

        assert_eq!(
            PhaseSet::from_names(["nadir", "midnight"]),
            Err(Error::unknown_phase())
        );
    }

    #[test]
    fn test_phase_event_accessors() {
        let event = PhaseEvent::Occurs(42);
        assert!(event.occurs());
        assert_eq!(event.time(), Some(&42));
        assert_eq!(event.into_time(), Some(42));

        let absent: PhaseEvent<i32> = PhaseEvent::DoesNotOccur;
        assert!(!absent.occurs());
        assert_eq!(absent.time(), None);
        assert_eq!(absent.into_time(), None);
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_sunlight_times_record() {
        let mut times = SunlightTimes::empty();
        times.set(Phase::Sunrise, PhaseEvent::Occurs(6.0));
        times.set(Phase::Night, PhaseEvent::DoesNotOccur);

        assert_eq!(times.sunrise(), Some(&6.0));
        assert_eq!(times.time(Phase::Night), None);
        assert_eq!(times.get(Phase::Night), Some(&PhaseEvent::DoesNotOccur));
        // Not requested at all
        assert_eq!(times.get(Phase::Sunset), None);
        assert_eq!(times.sunset(), None);

        assert_eq!(
            times.requested(),
            PhaseSet::of(&[Phase::Sunrise, Phase::Night])
        );

        let collected: Vec<_> = times.iter().collect();
        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].0, Phase::Sunrise);
        assert_eq!(collected[1].0, Phase::Night);
    }

    #[test]
    fn test_hours_utc_day_and_hours() {
        let (offset, hours) = HoursUtc::from_hours(6.5).day_and_hours();
        assert_eq!(offset, 0);
        assert!((hours - 6.5).abs() < 1e-10);

        let (offset, hours) = HoursUtc::from_hours(25.5).day_and_hours();
        assert_eq!(offset, 1);
        assert!((hours - 1.5).abs() < 1e-10);

        let (offset, hours) = HoursUtc::from_hours(-0.5).day_and_hours();
        assert_eq!(offset, -1);
        assert!((hours - 23.5).abs() < 1e-10);
    }
}
