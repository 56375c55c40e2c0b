//! Calculation parameters: twilight angles, Asr rule, high latitude rule and adjustments.

use core::fmt;
use core::str::FromStr;

use crate::error::check_twilight_angle;
use crate::method::CalculationMethod;
use crate::types::Prayer;
use crate::{Error, Result};

/// Juristic rule for the start of Asr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Madhab {
    /// Shafi, Maliki and Hanbali: shadow equals the object's length
    #[default]
    Shafi,
    /// Hanafi: shadow equals twice the object's length
    Hanafi,
}

impl Madhab {
    /// Shadow length that marks the start of Asr under this rule.
    #[must_use]
    pub const fn shadow_length(&self) -> ShadowLength {
        match self {
            Self::Shafi => ShadowLength::Single,
            Self::Hanafi => ShadowLength::Double,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Shafi => "shafi",
            Self::Hanafi => "hanafi",
        }
    }
}

impl fmt::Display for Madhab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown madhab name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseMadhabError;

impl fmt::Display for ParseMadhabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown madhab (expected \"shafi\" or \"hanafi\")")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseMadhabError {}

impl FromStr for Madhab {
    type Err = ParseMadhabError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s {
            "shafi" => Ok(Self::Shafi),
            "hanafi" => Ok(Self::Hanafi),
            _ => Err(ParseMadhabError),
        }
    }
}

/// Length of an object's shadow, relative to the object, that marks Asr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadowLength {
    /// Shadow as long as the object
    Single,
    /// Shadow twice as long as the object
    Double,
}

impl ShadowLength {
    /// Shadow length as a multiple of the object's length.
    #[must_use]
    pub const fn factor(&self) -> f64 {
        match self {
            Self::Single => 1.0,
            Self::Double => 2.0,
        }
    }
}

/// Rule that bounds Fajr and Isha at high latitudes, where twilight may last all night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum HighLatitudeRule {
    /// No bound; cannot produce night portions
    None,
    /// Fajr no earlier than the middle of the night, Isha no later
    #[default]
    MiddleOfTheNight,
    /// Fajr no earlier than the last seventh of the night, Isha no later than the first seventh
    SeventhOfTheNight,
    /// The portion of the night is the twilight angle divided by 60
    TwilightAngle,
}

impl HighLatitudeRule {
    const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::MiddleOfTheNight => "middle-of-the-night",
            Self::SeventhOfTheNight => "seventh-of-the-night",
            Self::TwilightAngle => "twilight-angle",
        }
    }
}

impl fmt::Display for HighLatitudeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HighLatitudeRule {
    type Err = Error;

    /// Parses the kebab-case rule name.
    ///
    /// # Example
    /// ```
    /// # use prayer_times::HighLatitudeRule;
    /// let rule: HighLatitudeRule = "seventh-of-the-night".parse().unwrap();
    /// assert_eq!(rule, HighLatitudeRule::SeventhOfTheNight);
    /// assert!("first-third".parse::<HighLatitudeRule>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(Self::None),
            "middle-of-the-night" => Ok(Self::MiddleOfTheNight),
            "seventh-of-the-night" => Ok(Self::SeventhOfTheNight),
            "twilight-angle" => Ok(Self::TwilightAngle),
            _ => Err(Error::invalid_high_latitude_rule("unknown rule name")),
        }
    }
}

/// Minutes added to each computed time. Negative values move a time earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PrayerAdjustments {
    /// Fajr offset in minutes
    pub fajr: i32,
    /// Sunrise offset in minutes
    pub sunrise: i32,
    /// Dhuhr offset in minutes
    pub dhuhr: i32,
    /// Asr offset in minutes
    pub asr: i32,
    /// Maghrib offset in minutes
    pub maghrib: i32,
    /// Isha offset in minutes
    pub isha: i32,
}

impl PrayerAdjustments {
    /// No adjustment for any prayer.
    pub const NONE: Self = Self {
        fajr: 0,
        sunrise: 0,
        dhuhr: 0,
        asr: 0,
        maghrib: 0,
        isha: 0,
    };

    /// Offset in minutes for `prayer`; zero for `Prayer::None`.
    #[must_use]
    pub const fn for_prayer(&self, prayer: Prayer) -> i32 {
        match prayer {
            Prayer::None => 0,
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }
}

/// Fractions of the night used as the latest Fajr and earliest Isha bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NightPortions {
    fajr: f64,
    isha: f64,
}

impl NightPortions {
    /// Portion of the night before sunrise that bounds Fajr.
    #[must_use]
    pub const fn fajr(&self) -> f64 {
        self.fajr
    }

    /// Portion of the night after sunset that bounds Isha.
    #[must_use]
    pub const fn isha(&self) -> f64 {
        self.isha
    }
}

/// Everything that shapes a prayer schedule besides location and date.
///
/// Values are immutable; the `with_*` methods return modified copies.
///
/// # Example
/// ```
/// # use prayer_times::{CalculationMethod, CalculationParameters, HighLatitudeRule, Madhab};
/// let params = CalculationMethod::NorthAmerica
///     .parameters()
///     .with_madhab(Madhab::Hanafi)
///     .with_high_latitude_rule(HighLatitudeRule::SeventhOfTheNight);
/// assert_eq!(params.fajr_angle(), 15.0);
///
/// let custom = CalculationParameters::new(16.0, 14.0).unwrap();
/// assert_eq!(custom.method(), CalculationMethod::Other);
/// assert!(CalculationParameters::new(0.0, 14.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "UncheckedParameters")
)]
pub struct CalculationParameters {
    method: CalculationMethod,
    fajr_angle: f64,
    isha_angle: f64,
    isha_interval: u32,
    madhab: Madhab,
    high_latitude_rule: HighLatitudeRule,
    adjustments: PrayerAdjustments,
    method_adjustments: PrayerAdjustments,
}

impl CalculationParameters {
    /// Creates custom parameters from twilight angles in degrees.
    ///
    /// # Errors
    /// Returns `InvalidAngle` unless both angles lie in `(0, 30]`.
    pub fn new(fajr_angle: f64, isha_angle: f64) -> Result<Self> {
        let params = Self::preset(CalculationMethod::Other, fajr_angle, isha_angle, 0);
        params.validate()?;
        Ok(params)
    }

    /// Creates custom parameters where Isha is a fixed number of minutes after Maghrib.
    ///
    /// # Errors
    /// Returns `InvalidAngle` unless the Fajr angle lies in `(0, 30]`, or if
    /// `isha_interval` is zero.
    pub fn with_interval(fajr_angle: f64, isha_interval: u32) -> Result<Self> {
        let params = Self::preset(CalculationMethod::Other, fajr_angle, 0.0, isha_interval);
        params.validate()?;
        Ok(params)
    }

    pub(crate) const fn preset(
        method: CalculationMethod,
        fajr_angle: f64,
        isha_angle: f64,
        isha_interval: u32,
    ) -> Self {
        Self {
            method,
            fajr_angle,
            isha_angle,
            isha_interval,
            madhab: Madhab::Shafi,
            high_latitude_rule: HighLatitudeRule::MiddleOfTheNight,
            adjustments: PrayerAdjustments::NONE,
            method_adjustments: PrayerAdjustments::NONE,
        }
    }

    /// Checks the twilight angles and the Isha interval.
    ///
    /// # Errors
    /// Returns `InvalidAngle` if Fajr has no angle in `(0, 30]`, the Isha angle is
    /// outside `[0, 30]`, or Isha has neither an angle nor an interval.
    pub fn validate(&self) -> Result<()> {
        check_twilight_angle(self.fajr_angle)?;
        if self.fajr_angle == 0.0 {
            return Err(Error::invalid_angle(self.fajr_angle));
        }
        check_twilight_angle(self.isha_angle)?;
        if self.isha_angle == 0.0 && self.isha_interval == 0 {
            return Err(Error::invalid_angle(self.isha_angle));
        }
        Ok(())
    }

    /// Sets a fixed Isha interval in minutes after Maghrib; zero restores the Isha angle.
    ///
    /// # Errors
    /// Returns `InvalidAngle` if the interval is zero and there is no Isha angle to fall back to.
    pub fn with_isha_interval(self, minutes: u32) -> Result<Self> {
        let params = Self {
            isha_interval: minutes,
            ..self
        };
        params.validate()?;
        Ok(params)
    }

    /// Replaces the Asr rule.
    #[must_use]
    pub const fn with_madhab(self, madhab: Madhab) -> Self {
        Self { madhab, ..self }
    }

    /// Replaces the high latitude rule.
    #[must_use]
    pub const fn with_high_latitude_rule(self, high_latitude_rule: HighLatitudeRule) -> Self {
        Self {
            high_latitude_rule,
            ..self
        }
    }

    /// Replaces the user adjustments.
    #[must_use]
    pub const fn with_adjustments(self, adjustments: PrayerAdjustments) -> Self {
        Self {
            adjustments,
            ..self
        }
    }

    /// Replaces the adjustments that belong to the calculation method.
    #[must_use]
    pub const fn with_method_adjustments(self, method_adjustments: PrayerAdjustments) -> Self {
        Self {
            method_adjustments,
            ..self
        }
    }

    /// Method these parameters came from.
    #[must_use]
    pub const fn method(&self) -> CalculationMethod {
        self.method
    }

    /// Sun depression angle for Fajr in degrees.
    #[must_use]
    pub const fn fajr_angle(&self) -> f64 {
        self.fajr_angle
    }

    /// Sun depression angle for Isha in degrees; unused when an interval is set.
    #[must_use]
    pub const fn isha_angle(&self) -> f64 {
        self.isha_angle
    }

    /// Minutes from Maghrib to Isha, or zero when Isha follows the angle.
    #[must_use]
    pub const fn isha_interval(&self) -> u32 {
        self.isha_interval
    }

    /// Asr rule.
    #[must_use]
    pub const fn madhab(&self) -> Madhab {
        self.madhab
    }

    /// High latitude rule.
    #[must_use]
    pub const fn high_latitude_rule(&self) -> HighLatitudeRule {
        self.high_latitude_rule
    }

    /// User adjustments in minutes.
    #[must_use]
    pub const fn adjustments(&self) -> PrayerAdjustments {
        self.adjustments
    }

    /// Method adjustments in minutes.
    #[must_use]
    pub const fn method_adjustments(&self) -> PrayerAdjustments {
        self.method_adjustments
    }

    /// Total offset in minutes applied to `prayer`.
    ///
    /// Summed as `i64` so that extreme user and method offsets cannot overflow.
    #[must_use]
    pub fn total_adjustment(&self, prayer: Prayer) -> i64 {
        i64::from(self.adjustments.for_prayer(prayer))
            + i64::from(self.method_adjustments.for_prayer(prayer))
    }

    /// Portions of the night that bound Fajr and Isha under the high latitude rule.
    ///
    /// # Errors
    /// Returns `InvalidHighLatitudeRule` for `HighLatitudeRule::None`.
    pub fn night_portions(&self) -> Result<NightPortions> {
        match self.high_latitude_rule {
            HighLatitudeRule::MiddleOfTheNight => Ok(NightPortions {
                fajr: 1.0 / 2.0,
                isha: 1.0 / 2.0,
            }),
            HighLatitudeRule::SeventhOfTheNight => Ok(NightPortions {
                fajr: 1.0 / 7.0,
                isha: 1.0 / 7.0,
            }),
            HighLatitudeRule::TwilightAngle => Ok(NightPortions {
                fajr: self.fajr_angle / 60.0,
                isha: self.isha_angle / 60.0,
            }),
            HighLatitudeRule::None => Err(Error::invalid_high_latitude_rule(
                "no night portions without a high latitude rule",
            )),
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedParameters {
    #[serde(default)]
    method: CalculationMethod,
    fajr_angle: f64,
    #[serde(default)]
    isha_angle: f64,
    #[serde(default)]
    isha_interval: u32,
    #[serde(default)]
    madhab: Madhab,
    #[serde(default)]
    high_latitude_rule: HighLatitudeRule,
    #[serde(default)]
    adjustments: PrayerAdjustments,
    #[serde(default)]
    method_adjustments: PrayerAdjustments,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedParameters> for CalculationParameters {
    type Error = Error;

    fn try_from(raw: UncheckedParameters) -> Result<Self> {
        let params = Self {
            method: raw.method,
            fajr_angle: raw.fajr_angle,
            isha_angle: raw.isha_angle,
            isha_interval: raw.isha_interval,
            madhab: raw.madhab,
            high_latitude_rule: raw.high_latitude_rule,
            adjustments: raw.adjustments,
            method_adjustments: raw.method_adjustments,
        };
        params.validate()?;
        Ok(params)
    }
}
