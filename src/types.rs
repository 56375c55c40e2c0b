//! Core value types shared by the solar and prayer time calculations.

use crate::error::{check_coordinates, check_time_value, check_twilight_angle};
use crate::math::{floor, normalize_with_bound, round};
use crate::{Error, Result};

/// Observer location on Earth.
///
/// # Example
/// ```
/// # use prayer_times::Coordinates;
/// let raleigh = Coordinates::new(35.7750, -78.6336).unwrap();
/// assert_eq!(raleigh.latitude(), 35.7750);
///
/// assert!(Coordinates::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "UncheckedCoordinates")
)]
pub struct Coordinates {
    /// Latitude in degrees, positive north
    latitude: f64,
    /// Longitude in degrees, positive east
    longitude: f64,
}

impl Coordinates {
    /// Creates new coordinates.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Gets the latitude in degrees (-90 to +90, positive north).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees (-180 to +180, positive east).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedCoordinates {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedCoordinates> for Coordinates {
    type Error = Error;

    fn try_from(raw: UncheckedCoordinates) -> Result<Self> {
        Self::new(raw.latitude, raw.longitude)
    }
}

/// Solar altitude that marks a rise or set style event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizon {
    /// Upper limb touching the horizon, refraction included (-50′)
    SunriseSunset,
    /// Sun the given number of degrees below the horizon, as used for Fajr and Isha
    Twilight(f64),
}

impl Horizon {
    /// Depression of `angle` degrees below the horizon.
    ///
    /// # Errors
    /// Returns `InvalidAngle` unless `angle` lies in `[0, 30]`.
    ///
    /// # Example
    /// ```
    /// # use prayer_times::Horizon;
    /// assert_eq!(Horizon::twilight(18.0).unwrap().elevation_angle(), -18.0);
    /// assert!(Horizon::twilight(45.0).is_err());
    /// ```
    pub fn twilight(angle: f64) -> Result<Self> {
        check_twilight_angle(angle)?;
        Ok(Self::Twilight(angle))
    }

    /// Altitude of the sun's center in degrees; negative below the horizon.
    #[must_use]
    pub fn elevation_angle(&self) -> f64 {
        match self {
            Self::SunriseSunset => -50.0 / 60.0,
            Self::Twilight(angle) => -angle,
        }
    }
}

/// Solar event time in hours after 0h UT of the calculation date.
///
/// Events near the date line fall outside `[0, 24)`: Maghrib west of Greenwich
/// is often past 24h, Fajr far to the east can be negative.
///
/// # Example
/// ```
/// # use prayer_times::HoursUtc;
/// let maghrib = HoursUtc::from_hours(24.5);
/// let (day_offset, hours) = maghrib.day_and_hours();
/// assert_eq!(day_offset, 1);
/// assert!((hours - 0.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct HoursUtc(f64);

impl HoursUtc {
    /// Wraps a raw hour count.
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Raw hour count, not wrapped into a single day.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Splits into a whole-day offset and the hour within that day, in `[0, 24)`.
    ///
    /// Non-finite values are returned unchanged with a zero offset.
    #[must_use]
    pub fn day_and_hours(&self) -> (i32, f64) {
        let hours = self.0;
        if !hours.is_finite() {
            return (0, hours);
        }

        let in_day = normalize_with_bound(hours, 24.0);
        let days = round((hours - in_day) / 24.0);
        (
            days.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32,
            in_day,
        )
    }

    /// Splits the value into whole hours, minutes and seconds.
    ///
    /// Each component is floored; hours are not wrapped into a single day.
    ///
    /// # Errors
    /// Returns `InvalidTimeValue` if the value is infinite or NaN.
    ///
    /// # Example
    /// ```
    /// # use prayer_times::HoursUtc;
    /// let time = HoursUtc::from_hours(17.3426).components().unwrap();
    /// assert_eq!((time.hours, time.minutes, time.seconds), (17, 20, 33));
    /// ```
    pub fn components(&self) -> Result<TimeComponents> {
        let value = check_time_value(self.0)?;

        let hours = floor(value);
        let minutes = floor((value - hours) * 60.0);
        let seconds = floor((value - (hours + minutes / 60.0)) * 3600.0);

        Ok(TimeComponents {
            hours: hours as i64,
            minutes: minutes as i64,
            seconds: seconds as i64,
        })
    }

    /// Maps this value onto an instant relative to midnight UTC of `date`.
    ///
    /// Sub-second precision is dropped.
    ///
    /// # Errors
    /// Returns `InvalidTimeValue` if the value is infinite or NaN, and
    /// `InvalidDate` if the date cannot be represented by chrono.
    #[cfg(feature = "chrono")]
    pub fn to_datetime(
        &self,
        date: &crate::time::CalendarDate,
    ) -> Result<chrono::DateTime<chrono::Utc>> {
        let components = self.components()?;
        let midnight = date
            .to_naive_date()?
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| Error::invalid_date("midnight is not representable"))?
            .and_utc();

        midnight
            .checked_add_signed(components.to_duration())
            .ok_or_else(|| Error::invalid_date("time is outside the supported range"))
    }
}

/// Whole hours, minutes and seconds of an `HoursUtc` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeComponents {
    /// Whole hours, may be negative or ≥ 24
    pub hours: i64,
    /// Minutes within the hour (0-59)
    pub minutes: i64,
    /// Seconds within the minute (0-59)
    pub seconds: i64,
}

impl TimeComponents {
    /// Total length as a chrono duration.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn to_duration(&self) -> chrono::TimeDelta {
        chrono::TimeDelta::seconds(self.hours * 3600 + self.minutes * 60 + self.seconds)
    }
}

/// The daily prayers, ordered by their time of day.
///
/// `None` sorts before every prayer and stands for "no prayer", e.g. when asking
/// for the current prayer before Fajr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Prayer {
    /// No prayer
    None,
    /// Dawn prayer
    Fajr,
    /// Sunrise (not a prayer, marks the end of Fajr)
    Sunrise,
    /// Midday prayer, just after solar transit
    Dhuhr,
    /// Afternoon prayer
    Asr,
    /// Sunset prayer
    Maghrib,
    /// Night prayer
    Isha,
}

impl Prayer {
    /// All prayers in chronological order, without `None`.
    pub const ALL: [Self; 6] = [
        Self::Fajr,
        Self::Sunrise,
        Self::Dhuhr,
        Self::Asr,
        Self::Maghrib,
        Self::Isha,
    ];

    /// The prayer that follows this one on the same day.
    ///
    /// `None` is followed by Fajr, and nothing follows Isha.
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::None => Self::Fajr,
            Self::Fajr => Self::Sunrise,
            Self::Sunrise => Self::Dhuhr,
            Self::Dhuhr => Self::Asr,
            Self::Asr => Self::Maghrib,
            Self::Maghrib => Self::Isha,
            Self::Isha => Self::None,
        }
    }

    /// Lowercase name of the prayer.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Fajr => "fajr",
            Self::Sunrise => "sunrise",
            Self::Dhuhr => "dhuhr",
            Self::Asr => "asr",
            Self::Maghrib => "maghrib",
            Self::Isha => "isha",
        }
    }
}

impl core::fmt::Display for Prayer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates() {
        let coords = Coordinates::new(59.9094, 10.7349).unwrap();
        assert_eq!(coords.latitude(), 59.9094);
        assert_eq!(coords.longitude(), 10.7349);

        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert!(Coordinates::new(-90.0, -180.0).is_ok());
        assert_eq!(
            Coordinates::new(90.5, 0.0),
            Err(Error::invalid_latitude(90.5))
        );
        assert_eq!(
            Coordinates::new(0.0, -180.5),
            Err(Error::invalid_longitude(-180.5))
        );
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_horizon_elevation_angles() {
        assert!((Horizon::SunriseSunset.elevation_angle() + 0.833_333).abs() < 1e-6);
        assert_eq!(Horizon::twilight(17.5).unwrap().elevation_angle(), -17.5);
        assert_eq!(Horizon::twilight(0.0).unwrap().elevation_angle(), 0.0);

        assert_eq!(Horizon::twilight(-1.0), Err(Error::invalid_angle(-1.0)));
        assert!(Horizon::twilight(30.5).is_err());
        assert!(Horizon::twilight(f64::NAN).is_err());
    }

    #[test]
    fn test_hours_utc_day_and_hours() {
        let (day, hours) = HoursUtc::from_hours(12.5).day_and_hours();
        assert_eq!(day, 0);
        assert!((hours - 12.5).abs() < 1e-10);

        let (day, hours) = HoursUtc::from_hours(25.5).day_and_hours();
        assert_eq!(day, 1);
        assert!((hours - 1.5).abs() < 1e-10);

        let (day, hours) = HoursUtc::from_hours(-0.5).day_and_hours();
        assert_eq!(day, -1);
        assert!((hours - 23.5).abs() < 1e-10);

        let (day, hours) = HoursUtc::from_hours(f64::NAN).day_and_hours();
        assert_eq!(day, 0);
        assert!(hours.is_nan());
    }

    #[test]
    fn test_time_components() {
        let time = HoursUtc::from_hours(24.5).components().unwrap();
        assert_eq!(
            time,
            TimeComponents {
                hours: 24,
                minutes: 30,
                seconds: 0
            }
        );

        let time = HoursUtc::from_hours(9.0 + 38.0 / 60.0 + 20.5 / 3600.0)
            .components()
            .unwrap();
        assert_eq!((time.hours, time.minutes, time.seconds), (9, 38, 20));

        let time = HoursUtc::from_hours(-1.25).components().unwrap();
        assert_eq!((time.hours, time.minutes, time.seconds), (-2, 45, 0));
    }

    #[test]
    fn test_time_components_reject_non_finite() {
        assert_eq!(
            HoursUtc::from_hours(f64::INFINITY).components(),
            Err(Error::invalid_time_value(f64::INFINITY))
        );
        assert!(HoursUtc::from_hours(f64::NAN).components().is_err());
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_to_datetime() {
        use crate::time::CalendarDate;
        use chrono::{TimeZone, Utc};

        let date = CalendarDate::new(2015, 7, 12).unwrap();
        let instant = HoursUtc::from_hours(24.5).to_datetime(&date).unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2015, 7, 13, 0, 30, 0).unwrap());

        let instant = HoursUtc::from_hours(-0.25).to_datetime(&date).unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2015, 7, 11, 23, 45, 0).unwrap());

        assert!(HoursUtc::from_hours(f64::NAN).to_datetime(&date).is_err());
    }

    #[test]
    fn test_prayer_ordering() {
        assert!(Prayer::None < Prayer::Fajr);
        assert!(Prayer::Fajr < Prayer::Sunrise);
        assert!(Prayer::Sunrise < Prayer::Dhuhr);
        assert!(Prayer::Dhuhr < Prayer::Asr);
        assert!(Prayer::Asr < Prayer::Maghrib);
        assert!(Prayer::Maghrib < Prayer::Isha);

        let mut sorted = Prayer::ALL;
        sorted.sort();
        assert_eq!(sorted, Prayer::ALL);
    }

    #[test]
    fn test_prayer_next() {
        let mut prayer = Prayer::None;
        for expected in Prayer::ALL {
            prayer = prayer.next();
            assert_eq!(prayer, expected);
        }
        assert_eq!(prayer.next(), Prayer::None);
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_prayer_display() {
        assert_eq!(Prayer::Maghrib.to_string(), "maghrib");
        assert_eq!(Prayer::None.to_string(), "none");
    }
}
