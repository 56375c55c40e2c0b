//! # Prayer Times
//!
//! Offline, deterministic calculation of the five daily Islamic prayers and sunrise
//! from the position of the sun.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! Times are derived from low-precision solar coordinates (Meeus, *Astronomical
//! Algorithms*): solar noon gives Dhuhr, the sun crossing the horizon gives Sunrise
//! and Maghrib, a shadow-length rule gives Asr, and a twilight depression angle gives
//! Fajr and Isha. At high latitudes, where twilight may not end, Fajr and Isha are
//! bounded by a portion of the night.
//!
//! ## Features
//!
//! - Presets for the common calculation methods, customizable through immutable parameters
//! - High latitude rules and the season-adjusted twilight of the Moonsighting Committee
//! - Layered API: numeric solar layers work without `chrono`; schedules need it
//! - Thread-safe: stateless, immutable values
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable [`PrayerTimes`] and the `DateTime` based API
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `serde`: `Serialize`/`Deserialize` for coordinates, dates, parameters and schedules
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! prayer-times = "0.1"
//!
//! # no_std + chrono
//! prayer-times = { version = "0.1", default-features = false, features = ["libm", "chrono"] }
//!
//! # Minimal no_std (solar times only)
//! prayer-times = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Prayer times (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::NaiveDate;
//! use prayer_times::{CalculationMethod, Coordinates, Madhab, PrayerTimes};
//!
//! let coordinates = Coordinates::new(35.7750, -78.6336).unwrap();
//! let date = NaiveDate::from_ymd_opt(2015, 7, 12).unwrap();
//! let params = CalculationMethod::NorthAmerica
//!     .parameters()
//!     .with_madhab(Madhab::Hanafi);
//!
//! let times = PrayerTimes::for_date(coordinates, &date, params).unwrap();
//! for (prayer, time) in times.iter() {
//!     println!("{prayer}: {time}");
//! }
//! # }
//! ```
//!
//! ### Solar times (numeric API, no chrono)
//! ```rust
//! use prayer_times::{CalendarDate, Coordinates, SolarTime};
//!
//! let coordinates = Coordinates::new(59.9094, 10.7349).unwrap();
//! let date = CalendarDate::new(2016, 1, 1).unwrap();
//! let solar_time = SolarTime::new(date, coordinates).unwrap();
//!
//! // Hours after 0h UT
//! println!("Solar noon: {:.3}", solar_time.transit().hours());
//! println!("Civil dawn: {:.3}", solar_time.hour_angle(-6.0, false).unwrap().hours());
//! ```
//!
//! ## Logging
//!
//! Decisions such as bounding Fajr or Isha at high latitudes are reported through the
//! [`log`](https://docs.rs/log) facade at `debug` level. No logger is installed.

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
pub use crate::method::CalculationMethod;
pub use crate::params::{
    CalculationParameters, HighLatitudeRule, Madhab, NightPortions, PrayerAdjustments,
    ShadowLength,
};
#[cfg(feature = "chrono")]
pub use crate::prayer::PrayerTimes;
pub use crate::solar::SolarCoordinates;
pub use crate::solar_time::SolarTime;
pub use crate::time::CalendarDate;
pub use crate::types::{Coordinates, Horizon, HoursUtc, Prayer, TimeComponents};

// Schedule
pub mod method;
pub mod params;
#[cfg(feature = "chrono")]
pub mod prayer;
pub mod seasonal;

// Astronomy
pub mod solar;
pub mod solar_time;

// Core modules
pub mod error;
pub mod types;

// Public modules
pub mod math;
pub mod time;

#[cfg(all(test, feature = "chrono"))]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, NaiveDate};

    #[test]
    fn test_date_like_inputs_agree() {
        let coordinates = Coordinates::new(59.9094, 10.7349).unwrap();
        let params = CalculationMethod::MuslimWorldLeague.parameters();

        let naive = NaiveDate::from_ymd_opt(2016, 3, 20).unwrap();
        let local = "2016-03-20T23:30:00+01:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let calendar = CalendarDate::new(2016, 3, 20).unwrap();

        let from_naive = PrayerTimes::for_date(coordinates, &naive, params).unwrap();
        let from_local = PrayerTimes::for_date(coordinates, &local, params).unwrap();
        let from_calendar = PrayerTimes::new(coordinates, calendar, params).unwrap();

        assert_eq!(from_naive, from_calendar);
        assert_eq!(from_local, from_calendar);
    }

    #[test]
    fn test_schedule_is_ordered() {
        let coordinates = Coordinates::new(21.4225, 39.8262).unwrap();
        let date = CalendarDate::new(2024, 9, 1).unwrap();

        for method in CalculationMethod::ALL {
            if method == CalculationMethod::Other {
                continue;
            }
            let times = PrayerTimes::new(coordinates, date, method.parameters()).unwrap();
            let instants: Vec<_> = times.iter().map(|(_, time)| time).collect();
            assert!(
                instants.windows(2).all(|pair| pair[0] < pair[1]),
                "{method:?}: {instants:?}"
            );
        }
    }
}
