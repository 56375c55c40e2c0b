//! Season-adjusted twilight used by the Moonsighting Committee method.
//!
//! Instead of a fixed night portion, the bound on Fajr and Isha is a number of
//! minutes before sunrise or after sunset that varies linearly between four
//! latitude-dependent anchors over the year, counted from the winter solstice.

use crate::math::round;
use crate::time::is_leap_year;

/// Days from the winter solstice of the observer's hemisphere to `day_of_year`.
///
/// The northern count starts on December 21st, the southern one on June 21st.
///
/// # Example
/// ```
/// # use prayer_times::seasonal::days_since_solstice;
/// assert_eq!(days_since_solstice(1, 2016, 40.0), 11);
/// assert_eq!(days_since_solstice(173, 2016, -33.0), 0);
/// ```
#[must_use]
pub const fn days_since_solstice(day_of_year: u32, year: i32, latitude: f64) -> u32 {
    const NORTHERN_OFFSET: u32 = 10;
    let (southern_offset, days_in_year) = if is_leap_year(year) {
        (173, 366)
    } else {
        (172, 365)
    };

    if latitude >= 0.0 {
        let days = day_of_year + NORTHERN_OFFSET;
        if days >= days_in_year {
            days - days_in_year
        } else {
            days
        }
    } else if day_of_year < southern_offset {
        day_of_year + days_in_year - southern_offset
    } else {
        day_of_year - southern_offset
    }
}

/// Piecewise-linear interpolation over the year between the four anchors.
fn seasonal_curve(anchors: [f64; 4], days: u32) -> f64 {
    let [a, b, c, d] = anchors;
    let dyy = f64::from(days);

    if days < 91 {
        a + (b - a) / 91.0 * dyy
    } else if days < 137 {
        b + (c - b) / 46.0 * (dyy - 91.0)
    } else if days < 183 {
        c + (d - c) / 46.0 * (dyy - 137.0)
    } else if days < 229 {
        d + (c - d) / 46.0 * (dyy - 183.0)
    } else if days < 275 {
        c + (b - c) / 46.0 * (dyy - 229.0)
    } else {
        b + (a - b) / 91.0 * (dyy - 275.0)
    }
}

fn anchors(latitude: f64, coefficients: [f64; 4]) -> [f64; 4] {
    let scale = latitude.abs() / 55.0;
    coefficients.map(|k| 75.0 + k * scale)
}

fn minutes_to_seconds(minutes: f64) -> i64 {
    round(minutes * 60.0) as i64
}

/// Minutes before sunrise that bound Fajr.
#[must_use]
pub fn morning_twilight_minutes(latitude: f64, day_of_year: u32, year: i32) -> f64 {
    let anchors = anchors(latitude, [28.65, 19.44, 32.74, 48.10]);
    seasonal_curve(anchors, days_since_solstice(day_of_year, year, latitude))
}

/// Minutes after sunset that bound Isha.
#[must_use]
pub fn evening_twilight_minutes(latitude: f64, day_of_year: u32, year: i32) -> f64 {
    let anchors = anchors(latitude, [25.60, 2.050, -9.210, 6.140]);
    seasonal_curve(anchors, days_since_solstice(day_of_year, year, latitude))
}

/// Whole seconds before sunrise that bound Fajr, rounded half away from zero.
#[must_use]
pub fn season_adjusted_morning_twilight(latitude: f64, day_of_year: u32, year: i32) -> i64 {
    minutes_to_seconds(morning_twilight_minutes(latitude, day_of_year, year))
}

/// Whole seconds after sunset that bound Isha, rounded half away from zero.
#[must_use]
pub fn season_adjusted_evening_twilight(latitude: f64, day_of_year: u32, year: i32) -> i64 {
    minutes_to_seconds(evening_twilight_minutes(latitude, day_of_year, year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::CalendarDate;

    fn days_since(year: i32, month: u32, day: u32, latitude: f64) -> u32 {
        let date = CalendarDate::new(year, month, day).unwrap();
        days_since_solstice(date.day_of_year(), year, latitude)
    }

    #[test]
    fn test_days_since_solstice() {
        let cases = [
            // northern hemisphere
            (2016, 1, 1, 1.0, 11),
            (2015, 12, 31, 1.0, 10),
            (2016, 12, 31, 1.0, 10),
            (2016, 12, 21, 1.0, 0),
            (2016, 12, 22, 1.0, 1),
            (2016, 3, 1, 1.0, 71),
            (2015, 3, 1, 1.0, 70),
            (2016, 12, 20, 1.0, 365),
            (2015, 12, 20, 1.0, 364),
            // southern hemisphere
            (2015, 6, 21, -1.0, 0),
            (2016, 6, 21, -1.0, 0),
            (2015, 6, 20, -1.0, 364),
            (2016, 6, 20, -1.0, 365),
        ];

        for (year, month, day, latitude, expected) in cases {
            assert_eq!(
                days_since(year, month, day, latitude),
                expected,
                "{year}-{month}-{day} at {latitude}"
            );
        }
    }

    #[test]
    fn test_equator_is_constant() {
        for day in [1, 91, 137, 183, 229, 275, 365] {
            assert!((morning_twilight_minutes(0.0, day, 2015) - 75.0).abs() < 1e-12);
            assert!((evening_twilight_minutes(0.0, day, 2015) - 75.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_seasonal_offsets() {
        assert!((morning_twilight_minutes(59.9094, 1, 2016) - 104.99468).abs() < 1e-4);
        assert_eq!(season_adjusted_morning_twilight(59.9094, 1, 2016), 6300);
        assert_eq!(season_adjusted_evening_twilight(59.9094, 1, 2016), 5987);

        assert_eq!(season_adjusted_morning_twilight(59.9094, 183, 2016), 7425);
        assert_eq!(season_adjusted_evening_twilight(59.9094, 183, 2016), 4683);

        assert_eq!(season_adjusted_morning_twilight(35.775, 31, 2016), 5456);
        assert_eq!(season_adjusted_evening_twilight(35.775, 31, 2016), 5085);
    }

    #[test]
    fn test_southern_hemisphere_is_shifted_half_a_year() {
        // New Year's Day is 194 days after the southern winter solstice in 2016
        assert_eq!(days_since_solstice(1, 2016, -33.8688), 194);
        assert_eq!(season_adjusted_morning_twilight(-33.8688, 1, 2016), 6141);
        assert_eq!(season_adjusted_evening_twilight(-33.8688, 1, 2016), 4591);
    }

    #[test]
    fn test_curve_is_continuous_at_segment_boundaries() {
        let anchors = anchors(50.0, [28.65, 19.44, 32.74, 48.10]);
        for boundary in [91, 137, 183, 229, 275] {
            let before = seasonal_curve(anchors, boundary - 1);
            let at = seasonal_curve(anchors, boundary);
            assert!((at - before).abs() < 0.5, "jump at day {boundary}");
        }
    }
}
