//! Transit, rise and set times from three consecutive days of solar coordinates.
//!
//! Implements the interpolation method of Meeus, "Astronomical Algorithms", chapter 15.
//! Each event starts from the approximate transit and is refined with exactly one
//! correction step; all results are hours after 0h UT of the calculation date.

#![allow(clippy::too_many_arguments)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]

use crate::math::{
    acos, atan, closest_angle, cos, degrees_to_radians, interpolate, interpolate_angles,
    normalize_with_bound, radians_to_degrees, sin, tan, unwind_angle,
};
use crate::params::ShadowLength;
use crate::solar::{altitude_of_celestial_body, SolarCoordinates};
use crate::time::CalendarDate;
use crate::types::{Coordinates, Horizon, HoursUtc};
use crate::{Error, Result};

/// Sidereal degrees per solar day fraction (Meeus 15.2).
const SIDEREAL_RATE: f64 = 360.985647;

/// Below this magnitude the correction step for an hour angle is undefined.
const MIN_CORRECTION_DENOMINATOR: f64 = 1e-12;

/// Approximate transit as a fraction of the day (Meeus 15.2).
///
/// # Arguments
/// * `longitude` - Observer longitude in degrees, positive east
/// * `sidereal_time` - Apparent sidereal time at Greenwich at 0h UT, in degrees
/// * `right_ascension` - Right ascension of the sun at 0h UT, in degrees
///
/// # Returns
/// Fraction of the day in `[0, 1)`
#[must_use]
pub fn approximate_transit(longitude: f64, sidereal_time: f64, right_ascension: f64) -> f64 {
    let longitude_west = -longitude;
    normalize_with_bound(
        (right_ascension + longitude_west - sidereal_time) / 360.0,
        1.0,
    )
}

/// Transit time in hours, corrected for the sun's motion during the day.
///
/// `right_ascension` is the value for the calculation date,
/// `previous_right_ascension` and `next_right_ascension` those of the neighbouring days.
#[must_use]
pub fn corrected_transit(
    approximate_transit: f64,
    longitude: f64,
    sidereal_time: f64,
    right_ascension: f64,
    previous_right_ascension: f64,
    next_right_ascension: f64,
) -> f64 {
    let m0 = approximate_transit;
    let longitude_west = -longitude;

    let theta = unwind_angle(sidereal_time + SIDEREAL_RATE * m0);
    let alpha = unwind_angle(interpolate_angles(
        right_ascension,
        previous_right_ascension,
        next_right_ascension,
        m0,
    ));
    let local_hour_angle = closest_angle(theta - longitude_west - alpha);
    let delta_m = local_hour_angle / -360.0;

    (m0 + delta_m) * 24.0
}

/// Time in hours at which the sun reaches `altitude` before or after transit.
///
/// The zeroth-order hour angle is computed from the declination of the calculation
/// date, then refined once using interpolated coordinates.
///
/// # Errors
/// Returns `UnsolvableHourAngle` when the sun never reaches `altitude` on this day,
/// or when the correction step is undefined.
pub fn corrected_hour_angle(
    approximate_transit: f64,
    altitude: f64,
    coordinates: &Coordinates,
    after_transit: bool,
    sidereal_time: f64,
    right_ascension: f64,
    previous_right_ascension: f64,
    next_right_ascension: f64,
    declination: f64,
    previous_declination: f64,
    next_declination: f64,
) -> Result<f64> {
    let m0 = approximate_transit;
    let h0 = altitude;
    let longitude_west = -coordinates.longitude();
    let phi = degrees_to_radians(coordinates.latitude());

    let delta2 = degrees_to_radians(declination);
    let term1 = sin(degrees_to_radians(h0)) - sin(phi) * sin(delta2);
    let term2 = cos(phi) * cos(delta2);
    let cos_h0 = term1 / term2;
    if !(-1.0..=1.0).contains(&cos_h0) {
        return Err(Error::unsolvable_hour_angle(altitude));
    }
    let hour_angle0 = radians_to_degrees(acos(cos_h0));

    let m = if after_transit {
        m0 + hour_angle0 / 360.0
    } else {
        m0 - hour_angle0 / 360.0
    };

    let theta = unwind_angle(sidereal_time + SIDEREAL_RATE * m);
    let alpha = unwind_angle(interpolate_angles(
        right_ascension,
        previous_right_ascension,
        next_right_ascension,
        m,
    ));
    let delta = interpolate(declination, previous_declination, next_declination, m);
    let local_hour_angle = theta - longitude_west - alpha;
    let h = altitude_of_celestial_body(coordinates.latitude(), delta, local_hour_angle);

    let term3 = h - h0;
    let term4 = 360.0
        * cos(degrees_to_radians(delta))
        * cos(phi)
        * sin(degrees_to_radians(local_hour_angle));
    if term4.abs() < MIN_CORRECTION_DENOMINATOR {
        return Err(Error::unsolvable_hour_angle(altitude));
    }
    let delta_m = term3 / term4;

    Ok((m + delta_m) * 24.0)
}

/// Solar events of one day at one location.
///
/// Keeps the solar coordinates of the previous, current and next day so that
/// further hour angles can be solved without recomputing them.
///
/// # Example
/// ```
/// # use prayer_times::{CalendarDate, Coordinates, SolarTime};
/// let coordinates = Coordinates::new(35.7750, -78.6336).unwrap();
/// let date = CalendarDate::new(2015, 7, 12).unwrap();
/// let solar_time = SolarTime::new(date, coordinates).unwrap();
///
/// // Sunset in Raleigh is after midnight UTC in July
/// let (day_offset, _) = solar_time.sunset().day_and_hours();
/// assert_eq!(day_offset, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTime {
    observer: Coordinates,
    solar: SolarCoordinates,
    prev_solar: SolarCoordinates,
    next_solar: SolarCoordinates,
    approximate_transit: f64,
    transit: HoursUtc,
    sunrise: HoursUtc,
    sunset: HoursUtc,
}

impl SolarTime {
    /// Computes transit, sunrise and sunset for `date` at `coordinates`.
    ///
    /// # Errors
    /// Returns `UnsolvableHourAngle` if the sun does not rise or set on this day.
    pub fn new(date: CalendarDate, coordinates: Coordinates) -> Result<Self> {
        let julian_day = date.julian_day();

        let prev_solar = SolarCoordinates::new(julian_day - 1.0);
        let solar = SolarCoordinates::new(julian_day);
        let next_solar = SolarCoordinates::new(julian_day + 1.0);

        let m0 = approximate_transit(
            coordinates.longitude(),
            solar.apparent_sidereal_time(),
            solar.right_ascension(),
        );
        let transit = corrected_transit(
            m0,
            coordinates.longitude(),
            solar.apparent_sidereal_time(),
            solar.right_ascension(),
            prev_solar.right_ascension(),
            next_solar.right_ascension(),
        );

        let mut solar_time = Self {
            observer: coordinates,
            solar,
            prev_solar,
            next_solar,
            approximate_transit: m0,
            transit: HoursUtc::from_hours(transit),
            sunrise: HoursUtc::from_hours(f64::NAN),
            sunset: HoursUtc::from_hours(f64::NAN),
        };

        let horizon = Horizon::SunriseSunset.elevation_angle();
        solar_time.sunrise = solar_time.hour_angle(horizon, false)?;
        solar_time.sunset = solar_time.hour_angle(horizon, true)?;

        Ok(solar_time)
    }

    /// Time at which the sun reaches `angle` degrees of altitude.
    ///
    /// # Errors
    /// Returns `UnsolvableHourAngle` if the sun never reaches that altitude.
    pub fn hour_angle(&self, angle: f64, after_transit: bool) -> Result<HoursUtc> {
        corrected_hour_angle(
            self.approximate_transit,
            angle,
            &self.observer,
            after_transit,
            self.solar.apparent_sidereal_time(),
            self.solar.right_ascension(),
            self.prev_solar.right_ascension(),
            self.next_solar.right_ascension(),
            self.solar.declination(),
            self.prev_solar.declination(),
            self.next_solar.declination(),
        )
        .map(HoursUtc::from_hours)
    }

    /// Time in the afternoon at which an object's shadow reaches the given length.
    ///
    /// # Errors
    /// Returns `UnsolvableHourAngle` if the sun never gets that low.
    pub fn afternoon(&self, shadow_length: ShadowLength) -> Result<HoursUtc> {
        let tangent = (self.observer.latitude() - self.solar.declination()).abs();
        let inverse = shadow_length.factor() + tan(degrees_to_radians(tangent));
        let angle = radians_to_degrees(atan(1.0 / inverse));
        self.hour_angle(angle, true)
    }

    /// Solar noon.
    #[must_use]
    pub const fn transit(&self) -> HoursUtc {
        self.transit
    }

    /// Upper limb of the sun at the horizon in the morning.
    #[must_use]
    pub const fn sunrise(&self) -> HoursUtc {
        self.sunrise
    }

    /// Upper limb of the sun at the horizon in the evening.
    #[must_use]
    pub const fn sunset(&self) -> HoursUtc {
        self.sunset
    }

    /// Observer location.
    #[must_use]
    pub const fn observer(&self) -> Coordinates {
        self.observer
    }

    /// Solar coordinates at 0h UT of the calculation date.
    #[must_use]
    pub const fn solar_coordinates(&self) -> SolarCoordinates {
        self.solar
    }
}
