//! Low-precision solar coordinates.
//!
//! Closed-form expressions from Meeus, "Astronomical Algorithms" (2nd ed.), chapters
//! 12, 22 and 25. Accuracy is about 0.01° in the sun's position, which is far below
//! the one-minute resolution of a prayer schedule.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::math::{
    asin, atan2, cos, degrees_to_radians, polynomial, radians_to_degrees, sin, unwind_angle,
};
use crate::time::julian_century;

/// Arcseconds per degree.
const ARCSECONDS_PER_DEGREE: f64 = 3600.0;

/// Position of the sun for a single Julian Day.
///
/// All values are in degrees.
///
/// # Example
/// ```
/// # use prayer_times::solar::SolarCoordinates;
/// let sun = SolarCoordinates::new(2_448_908.5); // 1992-10-13
/// assert!((sun.declination() - -7.78507).abs() < 1e-5);
/// assert!((sun.right_ascension() - 198.38083).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCoordinates {
    declination: f64,
    right_ascension: f64,
    apparent_sidereal_time: f64,
}

impl SolarCoordinates {
    /// Computes the solar coordinates for a Julian Day.
    #[must_use]
    pub fn new(julian_day: f64) -> Self {
        let t = julian_century(julian_day);
        let l0 = mean_solar_longitude(t);
        let lp = mean_lunar_longitude(t);
        let omega = ascending_lunar_node_longitude(t);
        let lambda = degrees_to_radians(apparent_solar_longitude(t, l0));

        let theta0 = mean_sidereal_time(t);
        let delta_psi = nutation_in_longitude(l0, lp, omega);
        let delta_epsilon = nutation_in_obliquity(l0, lp, omega);

        let epsilon0 = mean_obliquity_of_the_ecliptic(t);
        let epsilon_apparent = degrees_to_radians(apparent_obliquity_of_the_ecliptic(t, epsilon0));

        let declination = radians_to_degrees(asin(sin(epsilon_apparent) * sin(lambda)));
        let right_ascension = unwind_angle(radians_to_degrees(atan2(
            cos(epsilon_apparent) * sin(lambda),
            cos(lambda),
        )));
        let apparent_sidereal_time = theta0
            + delta_psi * cos(degrees_to_radians(epsilon0 + delta_epsilon));

        Self {
            declination,
            right_ascension,
            apparent_sidereal_time,
        }
    }

    /// Declination of the sun in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Right ascension of the sun in degrees, in `[0, 360)`.
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Apparent sidereal time at Greenwich in degrees.
    #[must_use]
    pub const fn apparent_sidereal_time(&self) -> f64 {
        self.apparent_sidereal_time
    }
}

/// Geometric mean longitude of the sun (Meeus 25.2).
#[must_use]
pub fn mean_solar_longitude(t: f64) -> f64 {
    unwind_angle(polynomial(&[280.4664567, 36000.76983, 0.0003032], t))
}

/// Mean longitude of the moon.
#[must_use]
pub fn mean_lunar_longitude(t: f64) -> f64 {
    unwind_angle(polynomial(&[218.3165, 481267.8813], t))
}

/// Longitude of the ascending node of the moon's mean orbit (Meeus p. 144).
#[must_use]
pub fn ascending_lunar_node_longitude(t: f64) -> f64 {
    unwind_angle(polynomial(
        &[125.04452, -1934.136261, 0.0020708, 1.0 / 450000.0],
        t,
    ))
}

/// Mean anomaly of the sun (Meeus 25.3).
#[must_use]
pub fn mean_solar_anomaly(t: f64) -> f64 {
    unwind_angle(polynomial(&[357.52911, 35999.05029, -0.0001537], t))
}

/// Equation of the center of the sun, given its mean anomaly `m`.
#[must_use]
pub fn solar_equation_of_the_center(t: f64, m: f64) -> f64 {
    let m_rad = degrees_to_radians(m);
    let term1 = polynomial(&[1.914602, -0.004817, -0.000014], t) * sin(m_rad);
    let term2 = polynomial(&[0.019993, -0.000101], t) * sin(2.0 * m_rad);
    let term3 = 0.000289 * sin(3.0 * m_rad);
    term1 + term2 + term3
}

/// Apparent longitude of the sun, corrected for nutation and aberration.
///
/// `l0` is the mean solar longitude for the same `t`.
#[must_use]
pub fn apparent_solar_longitude(t: f64, l0: f64) -> f64 {
    let longitude = l0 + solar_equation_of_the_center(t, mean_solar_anomaly(t));
    let omega = degrees_to_radians(125.04 - 1934.136 * t);
    unwind_angle(longitude - 0.00569 - 0.00478 * sin(omega))
}

/// Mean obliquity of the ecliptic (Meeus 22.2).
#[must_use]
pub fn mean_obliquity_of_the_ecliptic(t: f64) -> f64 {
    polynomial(&[23.439291, -0.013004167, -0.0000001639, 0.0000005036], t)
}

/// Apparent obliquity of the ecliptic, given the mean obliquity `epsilon0`.
#[must_use]
pub fn apparent_obliquity_of_the_ecliptic(t: f64, epsilon0: f64) -> f64 {
    let omega = degrees_to_radians(125.04 - 1934.136 * t);
    epsilon0 + 0.00256 * cos(omega)
}

/// Mean sidereal time at Greenwich in degrees (Meeus 12.4).
#[must_use]
pub fn mean_sidereal_time(t: f64) -> f64 {
    let julian_day = t * 36525.0 + 2451545.0;
    let theta = 280.46061837 + 360.98564736629 * (julian_day - 2451545.0) + 0.000387933 * t * t
        - t * t * t / 38710000.0;
    unwind_angle(theta)
}

/// Nutation in longitude in degrees (Meeus p. 144, low precision).
#[must_use]
pub fn nutation_in_longitude(l0: f64, lp: f64, omega: f64) -> f64 {
    let l0 = degrees_to_radians(l0);
    let lp = degrees_to_radians(lp);
    let omega = degrees_to_radians(omega);

    let arcseconds = -17.2 * sin(omega) - 1.32 * sin(2.0 * l0) - 0.23 * sin(2.0 * lp)
        + 0.21 * sin(2.0 * omega);
    arcseconds / ARCSECONDS_PER_DEGREE
}

/// Nutation in obliquity in degrees (Meeus p. 144, low precision).
#[must_use]
pub fn nutation_in_obliquity(l0: f64, lp: f64, omega: f64) -> f64 {
    let l0 = degrees_to_radians(l0);
    let lp = degrees_to_radians(lp);
    let omega = degrees_to_radians(omega);

    let arcseconds = 9.2 * cos(omega) + 0.57 * cos(2.0 * l0) + 0.10 * cos(2.0 * lp)
        - 0.09 * cos(2.0 * omega);
    arcseconds / ARCSECONDS_PER_DEGREE
}

/// Altitude of a celestial body (Meeus 13.6).
///
/// # Arguments
/// * `latitude` - Observer latitude in degrees
/// * `declination` - Declination of the body in degrees
/// * `local_hour_angle` - Local hour angle of the body in degrees
#[must_use]
pub fn altitude_of_celestial_body(latitude: f64, declination: f64, local_hour_angle: f64) -> f64 {
    let phi = degrees_to_radians(latitude);
    let delta = degrees_to_radians(declination);
    let hour_angle = degrees_to_radians(local_hour_angle);

    let term1 = sin(phi) * sin(delta);
    let term2 = cos(phi) * cos(delta) * cos(hour_angle);
    radians_to_degrees(asin(term1 + term2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::julian_day;

    #[test]
    fn test_solar_coordinates_meeus_example_25a() {
        // Astronomical Algorithms, example 25.a (1992 October 13.0 TD)
        let jd = julian_day(1992, 10, 13, 0.0);
        assert_eq!(jd, 2448908.5);

        let t = julian_century(jd);
        assert!((t - -0.072183436).abs() < 1e-11);

        let l0 = mean_solar_longitude(t);
        assert!((l0 - 201.80720).abs() < 1e-5);

        let epsilon0 = mean_obliquity_of_the_ecliptic(t);
        assert!((epsilon0 - 23.44023).abs() < 1e-5);

        let epsilon_apparent = apparent_obliquity_of_the_ecliptic(t, epsilon0);
        assert!((epsilon_apparent - 23.43999).abs() < 1e-5);

        let m = mean_solar_anomaly(t);
        assert!((m - 278.99397).abs() < 1e-5);

        let c = solar_equation_of_the_center(t, m);
        assert!((c - -1.89732).abs() < 1e-5);

        let lambda = apparent_solar_longitude(t, l0);
        assert!((lambda - 199.90895).abs() < 2e-5);

        let coordinates = SolarCoordinates::new(jd);
        assert!((coordinates.declination() - -7.78507).abs() < 1e-5);
        assert!((coordinates.right_ascension() - 198.38083).abs() < 1e-5);
    }

    #[test]
    fn test_sidereal_time_meeus_examples_12a_12b() {
        // Example 12.a: 1987 April 10, 0h UT
        let t = julian_century(julian_day(1987, 4, 10, 0.0));
        let theta0 = mean_sidereal_time(t);
        assert!((theta0 - 197.693195).abs() < 1e-6);

        // Example 12.b: 1987 April 10, 19h21m UT
        let t = julian_century(julian_day(1987, 4, 10, 19.0 + 21.0 / 60.0));
        let theta0 = mean_sidereal_time(t);
        assert!((theta0 - 128.7378734).abs() < 1e-6);
    }

    #[test]
    fn test_nutation_meeus_example_22a() {
        // Example 22.a: 1987 April 10, 0h TD
        let jd = julian_day(1987, 4, 10, 0.0);
        let t = julian_century(jd);
        assert!((t - -0.127296372348).abs() < 1e-9);

        let omega = ascending_lunar_node_longitude(t);
        assert!((omega - 11.2531).abs() < 1e-4);

        let l0 = mean_solar_longitude(t);
        let lp = mean_lunar_longitude(t);

        let delta_psi = nutation_in_longitude(l0, lp, omega);
        assert!((delta_psi - -3.788 / 3600.0).abs() < 0.1 / 3600.0);

        let delta_epsilon = nutation_in_obliquity(l0, lp, omega);
        assert!((delta_epsilon - 9.443 / 3600.0).abs() < 0.1 / 3600.0);

        let epsilon0 = mean_obliquity_of_the_ecliptic(t);
        let epsilon = epsilon0 + delta_epsilon;
        let expected = 23.0 + 26.0 / 60.0 + 36.850 / 3600.0;
        assert!((epsilon - expected).abs() < 2e-5);

        // Apparent sidereal time of example 12.a: 13h10m46.1351s
        let expected_ast = (13.0 + 10.0 / 60.0 + 46.1351 / 3600.0) * 15.0;
        let coordinates = SolarCoordinates::new(jd);
        assert!((coordinates.apparent_sidereal_time() - expected_ast).abs() < 1e-4);
    }

    #[test]
    fn test_altitude_of_celestial_body() {
        // Example 13.b: Venus seen from the US Naval Observatory
        let latitude = 38.0 + 55.0 / 60.0 + 17.0 / 3600.0;
        let declination = -(6.0 + 43.0 / 60.0 + 11.61 / 3600.0);
        let altitude = altitude_of_celestial_body(latitude, declination, 64.352133);
        assert!((altitude - 15.1249).abs() < 1e-4);
    }

    #[test]
    fn test_right_ascension_is_unwound() {
        let mut jd = julian_day(2016, 1, 1, 0.0);
        for _ in 0..366 {
            let ra = SolarCoordinates::new(jd).right_ascension();
            assert!((0.0..360.0).contains(&ra), "ra {ra} at jd {jd}");
            jd += 1.0;
        }
    }
}
