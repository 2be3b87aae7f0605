//! # Sunlight
//!
//! Sun position and sunlight-phase times from the low-precision suncalc formula set.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! This library computes two things for an observer on Earth:
//! - **Sun position**: instantaneous altitude and azimuth of the sun, in radians
//! - **Sunlight times**: the instants of the fourteen named phases of a day
//!   (solar noon, nadir, sunrise, sunset, twilights, golden hour, ...)
//!
//! Both are pure, stateless computations with no I/O; results depend only on the
//! inputs and every function is safe to call concurrently. The formulas are the
//! widely used suncalc approximations (accurate to a fraction of a degree,
//! intended for roughly the years 1901-2099), not a high-precision ephemeris.
//!
//! ## Features
//!
//! - Typed phase selection: compute and return exactly the phases you ask for
//! - Polar-aware: phases the sun never reaches are reported as
//!   [`PhaseEvent::DoesNotOccur`], never as errors
//! - Bulk calculation over date ranges via an iterator API
//! - Thread-safe: stateless, immutable data structures
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable `DateTime<Tz>` based convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono (most convenient)
//! sunlight = "0.1"
//!
//! # Minimal std (no chrono, smallest dependency tree)
//! sunlight = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! sunlight = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Sun Position
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::{DateTime, Utc};
//! use sunlight::position;
//!
//! let datetime = "2000-07-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
//! let position = position::sun_position(datetime, 54.0, 9.0).unwrap();
//!
//! println!("Altitude: {:.4} rad", position.altitude());
//! println!("Azimuth: {:.4} rad", position.azimuth());
//! # }
//! ```
//!
//! ### Sunlight Times
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::{NaiveDate, Utc};
//! use sunlight::{times, PhaseEvent};
//!
//! let date = NaiveDate::from_ymd_opt(2000, 7, 1).unwrap();
//! let times = times::sunlight_times(date, 54.0, 9.0, &Utc).unwrap();
//!
//! for (phase, event) in times.iter() {
//!     match event {
//!         PhaseEvent::Occurs(instant) => println!("{phase}: {instant}"),
//!         PhaseEvent::DoesNotOccur => println!("{phase}: does not occur"),
//!     }
//! }
//! # }
//! ```
//!
//! ### Selecting Phases (`keep`)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::{NaiveDate, Utc};
//! use sunlight::{times, PhaseSet};
//!
//! // Build the selection from names, as the original interface does...
//! let selection = PhaseSet::from_names(["sunrise", "sunset"]).unwrap();
//! // ...or from typed values: PhaseSet::of(&[Phase::Sunrise, Phase::Sunset])
//!
//! let date = NaiveDate::from_ymd_opt(2000, 7, 1).unwrap();
//! let times =
//!     times::sunlight_times_for_phases(date, 54.0, 9.0, &Utc, selection).unwrap();
//! assert_eq!(times.iter().count(), 2);
//! # }
//! ```
//!
//! ## Coordinate System
//!
//! Angles follow the suncalc conventions, in radians throughout:
//! - **Altitude**: 0 at the horizon, π/2 at the zenith, negative below the horizon
//! - **Azimuth**: measured from south, increasing toward west; 0 = south,
//!   π/2 = west, ±π = north (use [`SunPosition::azimuth_from_north`] for the
//!   compass convention)
//!
//! Directly above the observer's zenith (or nadir) the azimuth is geometrically
//! indeterminate; the reported value is then meaningless but finite.
//!
//! ## References
//!
//! - Agafonkin, V. suncalc: sun position and sunlight phase calculations,
//!   based on formulas from <https://aa.quae.nl/en/reken/zonpositie.html>
//! - Meeus, J. "Astronomical Algorithms", 2nd edition (background for the
//!   low-precision solar position formulas)

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::types::{HoursUtc, Phase, PhaseEvent, PhaseSet, SunPosition, SunlightTimes};

// Operation modules
pub mod position;
pub mod times;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod coords;
mod math;

// Public modules
pub mod time;
