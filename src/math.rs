//! Angle arithmetic, interpolation and math function dispatch.
//!
//! The trigonometric wrappers pick the native `std` implementation when available
//! and fall back to `libm` for `no_std` builds.

/// Converts degrees to radians.
#[inline]
#[must_use]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
#[must_use]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Normalizes `value` into `[0, bound)`.
///
/// Uses a floored (Euclidean) modulo, so negative inputs wrap around instead of
/// keeping their sign as `%` would.
///
/// # Example
/// ```
/// # use prayer_times::math::normalize_with_bound;
/// assert_eq!(normalize_with_bound(2592.0, 360.0), 72.0);
/// assert_eq!(normalize_with_bound(-45.0, 360.0), 315.0);
/// ```
#[must_use]
pub fn normalize_with_bound(value: f64, bound: f64) -> f64 {
    let normalized = value - bound * floor(value / bound);
    // tiny negative inputs round up to exactly `bound`
    if normalized >= bound {
        normalized - bound
    } else {
        normalized
    }
}

/// Normalizes an angle in degrees to `[0, 360)`.
#[must_use]
pub fn unwind_angle(degrees: f64) -> f64 {
    normalize_with_bound(degrees, 360.0)
}

/// Maps an angle to its representative in `(-180, 180]`.
///
/// Used to pick the shorter arc for hour-angle differences. Angles on the 180°
/// boundary map to `+180`.
///
/// # Example
/// ```
/// # use prayer_times::math::closest_angle;
/// assert_eq!(closest_angle(-359.0), 1.0);
/// assert_eq!(closest_angle(-180.0), 180.0);
/// ```
#[must_use]
pub fn closest_angle(degrees: f64) -> f64 {
    if degrees > -180.0 && degrees <= 180.0 {
        return degrees;
    }

    let closest = degrees - 360.0 * round(degrees / 360.0);
    if closest <= -180.0 {
        closest + 360.0
    } else if closest > 180.0 {
        closest - 360.0
    } else {
        closest
    }
}

/// Three-point interpolation (Meeus, Astronomical Algorithms, eq. 3.3).
///
/// `y2` is the central value, `y1` and `y3` the values one interval before and
/// after it, and `n` the interpolation factor measured from `y2`.
#[must_use]
pub fn interpolate(y2: f64, y1: f64, y3: f64, n: f64) -> f64 {
    let a = y2 - y1;
    let b = y3 - y2;
    let c = b - a;
    y2 + (n / 2.0) * (a + b + n * c)
}

/// Three-point interpolation of angles in degrees.
///
/// Both first differences are unwound before use so that a value set straddling
/// 0°/360° interpolates smoothly.
#[must_use]
pub fn interpolate_angles(y2: f64, y1: f64, y3: f64, n: f64) -> f64 {
    let a = unwind_angle(y2 - y1);
    let b = unwind_angle(y3 - y2);
    let c = b - a;
    y2 + (n / 2.0) * (a + b + n * c)
}

/// Evaluates `c[0] + c[1]·x + c[2]·x² + …` by Horner's rule.
#[must_use]
pub fn polynomial(coefficients: &[f64], x: f64) -> f64 {
    coefficients
        .iter()
        .rev()
        .fold(0.0, |acc, &coefficient| fused_multiply_add(acc, x, coefficient))
}

// Native float methods with `std`, otherwise `libm`.
macro_rules! float_fn {
    ($($(#[$meta:meta])* $name:ident => $libm:ident;)+) => {
        $(
            $(#[$meta])*
            #[inline]
            #[must_use]
            pub fn $name(x: f64) -> f64 {
                #[cfg(feature = "std")]
                return x.$name();

                #[cfg(not(feature = "std"))]
                return libm::$libm(x);
            }
        )+
    };
}

float_fn! {
    /// Sine of an angle in radians.
    sin => sin;
    /// Cosine of an angle in radians.
    cos => cos;
    /// Tangent of an angle in radians.
    tan => tan;
    /// Arcsine in radians.
    asin => asin;
    /// Arccosine in radians; NaN outside `[-1, 1]`.
    acos => acos;
    /// Arctangent in radians.
    atan => atan;
    /// Largest integer not greater than `x`.
    floor => floor;
    /// Nearest integer, halves away from zero.
    round => round;
}

/// Four-quadrant arctangent of `y / x` in radians.
#[inline]
#[must_use]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

#[inline]
fn fused_multiply_add(x: f64, a: f64, b: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.mul_add(a, b);

    #[cfg(not(feature = "std"))]
    return libm::fma(x, a, b);
}
