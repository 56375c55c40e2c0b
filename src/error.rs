//! Error types for the prayer time library.

use core::fmt;

/// Crate-wide result type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while computing solar times and prayer schedules.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Observer latitude outside -90° to +90°.
    InvalidLatitude {
        /// Rejected latitude in degrees.
        value: f64,
    },
    /// Observer longitude outside -180° to +180°.
    InvalidLongitude {
        /// Rejected longitude in degrees.
        value: f64,
    },
    /// Calendar date that does not exist in the proleptic Gregorian calendar.
    InvalidDate {
        /// Description of the date constraint violation.
        message: &'static str,
    },
    /// Twilight angle outside the range accepted by the calculation parameters.
    InvalidAngle {
        /// The invalid angle value provided.
        value: f64,
    },
    /// High latitude rule that cannot produce night portions.
    InvalidHighLatitudeRule {
        /// Description of the rule problem.
        message: &'static str,
    },
    /// The sun never reaches the requested altitude on this day at this latitude.
    UnsolvableHourAngle {
        /// Target solar altitude in degrees.
        altitude: f64,
    },
    /// A computed time of day is infinite or NaN.
    InvalidTimeValue {
        /// The offending value in hours.
        value: f64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidDate { message } => {
                write!(f, "invalid date: {message}")
            }
            Self::InvalidAngle { value } => {
                write!(
                    f,
                    "invalid twilight angle {value}° (must be between 0° and 30°)"
                )
            }
            Self::InvalidHighLatitudeRule { message } => {
                write!(f, "invalid high latitude rule: {message}")
            }
            Self::UnsolvableHourAngle { altitude } => {
                write!(f, "sun does not reach an altitude of {altitude}° on this day")
            }
            Self::InvalidTimeValue { value } => {
                write!(f, "invalid time value {value} (must be finite)")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_date(message: &'static str) -> Self {
        Self::InvalidDate { message }
    }

    /// Creates an invalid twilight angle error.
    #[must_use]
    pub const fn invalid_angle(value: f64) -> Self {
        Self::InvalidAngle { value }
    }

    /// Creates an invalid high latitude rule error.
    #[must_use]
    pub const fn invalid_high_latitude_rule(message: &'static str) -> Self {
        Self::InvalidHighLatitudeRule { message }
    }

    /// Creates an unsolvable hour angle error.
    #[must_use]
    pub const fn unsolvable_hour_angle(altitude: f64) -> Self {
        Self::UnsolvableHourAngle { altitude }
    }

    /// Creates an invalid time value error.
    #[must_use]
    pub const fn invalid_time_value(value: f64) -> Self {
        Self::InvalidTimeValue { value }
    }

    /// Whether this error rejects the observer coordinates.
    #[must_use]
    pub const fn is_invalid_coordinates(&self) -> bool {
        matches!(
            self,
            Self::InvalidLatitude { .. } | Self::InvalidLongitude { .. }
        )
    }
}

/// Checks that a latitude lies in `[-90, 90]` degrees.
///
/// # Errors
/// Returns `InvalidLatitude` otherwise, including for NaN.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if (-90.0..=90.0).contains(&latitude) {
        Ok(())
    } else {
        Err(Error::invalid_latitude(latitude))
    }
}

/// Checks that a longitude lies in `[-180, 180]` degrees.
///
/// # Errors
/// Returns `InvalidLongitude` otherwise, including for NaN.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if (-180.0..=180.0).contains(&longitude) {
        Ok(())
    } else {
        Err(Error::invalid_longitude(longitude))
    }
}

/// Checks an observer position; latitude is reported first.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude`.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude).and(check_longitude(longitude))
}

/// Validates a twilight angle used for Fajr or Isha.
///
/// # Errors
/// Returns `InvalidAngle` if the angle is not finite or outside 0 to 30 degrees.
pub fn check_twilight_angle(angle: f64) -> Result<()> {
    if !(0.0..=30.0).contains(&angle) {
        return Err(Error::invalid_angle(angle));
    }
    Ok(())
}

/// Validates that a time of day in hours can be mapped onto a calendar instant.
///
/// # Errors
/// Returns `InvalidTimeValue` if `hours` is infinite or NaN.
pub fn check_time_value(hours: f64) -> Result<f64> {
    if !hours.is_finite() {
        return Err(Error::invalid_time_value(hours));
    }
    Ok(hours)
}
