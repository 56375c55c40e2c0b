//! Daily prayer schedule.
//!
//! Turns the solar events of a day into the six prayer instants, bounding the
//! twilight-based Fajr and Isha so they stay usable at high latitudes.

use chrono::{DateTime, Datelike, TimeDelta, TimeZone, Utc};
use log::{debug, trace};

use crate::method::CalculationMethod;
use crate::params::CalculationParameters;
use crate::seasonal::{season_adjusted_evening_twilight, season_adjusted_morning_twilight};
use crate::solar_time::SolarTime;
use crate::time::CalendarDate;
use crate::types::{Coordinates, Horizon, Prayer};
use crate::{Error, Result};

/// Latitude from which the Moonsighting Committee places Fajr and Isha a seventh of
/// the night from sunrise and sunset.
const MOONSIGHTING_HIGH_LATITUDE: f64 = 55.0;

const SECONDS_PER_DAY: i64 = 86_400;

/// Prayer times for one day at one location, in UTC and rounded to the minute.
///
/// Convert to local time with [`DateTime::with_timezone`].
///
/// # Example
/// ```
/// use chrono::{NaiveDate, Timelike};
/// use prayer_times::{CalculationMethod, Coordinates, Madhab, PrayerTimes};
///
/// let coordinates = Coordinates::new(35.7750, -78.6336).unwrap();
/// let date = NaiveDate::from_ymd_opt(2015, 7, 12).unwrap();
/// let params = CalculationMethod::NorthAmerica
///     .parameters()
///     .with_madhab(Madhab::Hanafi);
///
/// let times = PrayerTimes::for_date(coordinates, &date, params).unwrap();
/// assert_eq!((times.fajr().hour(), times.fajr().minute()), (8, 42));
/// assert!(times.fajr() < times.sunrise());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrayerTimes {
    fajr: DateTime<Utc>,
    sunrise: DateTime<Utc>,
    dhuhr: DateTime<Utc>,
    asr: DateTime<Utc>,
    maghrib: DateTime<Utc>,
    isha: DateTime<Utc>,
    coordinates: Coordinates,
    date: CalendarDate,
    parameters: CalculationParameters,
}

impl PrayerTimes {
    /// Computes the schedule for `date` at `coordinates`.
    ///
    /// # Errors
    /// - `UnsolvableHourAngle` if the sun does not rise or set, or never gets low
    ///   enough for Asr, on this day or the next
    /// - `InvalidHighLatitudeRule` if Fajr or Isha need a night portion and the
    ///   high latitude rule is `None`
    /// - `InvalidAngle` if the parameters have no usable Fajr or Isha definition,
    ///   e.g. the unset angles of [`CalculationMethod::Other`]
    /// - `InvalidTimeValue` or `InvalidDate` if a time cannot be placed on the calendar
    pub fn new(
        coordinates: Coordinates,
        date: CalendarDate,
        parameters: CalculationParameters,
    ) -> Result<Self> {
        parameters.validate()?;

        let solar_time = SolarTime::new(date, coordinates)?;

        trace!(
            "solar times for {date:?}: transit {:?}, sunrise {:?}, sunset {:?}",
            solar_time.transit(),
            solar_time.sunrise(),
            solar_time.sunset()
        );

        let dhuhr = solar_time.transit().to_datetime(&date)?;
        let sunrise = solar_time.sunrise().to_datetime(&date)?;
        let maghrib = solar_time.sunset().to_datetime(&date)?;
        let asr = solar_time
            .afternoon(parameters.madhab().shadow_length())?
            .to_datetime(&date)?;

        let night = night_after(coordinates, date, maghrib)?;

        let engine = Engine {
            solar_time: &solar_time,
            coordinates: &coordinates,
            date: &date,
            parameters: &parameters,
            night,
        };
        let fajr = engine.fajr(sunrise)?;
        let isha = engine.isha(maghrib)?;

        let finalize = |prayer: Prayer, time: DateTime<Utc>| -> Result<DateTime<Utc>> {
            let adjustment = TimeDelta::minutes(parameters.total_adjustment(prayer));
            let adjusted = time.checked_add_signed(adjustment).ok_or_else(|| {
                Error::invalid_date("adjusted time is outside the supported range")
            })?;
            rounded_minute(adjusted)
        };

        Ok(Self {
            fajr: finalize(Prayer::Fajr, fajr)?,
            sunrise: finalize(Prayer::Sunrise, sunrise)?,
            dhuhr: finalize(Prayer::Dhuhr, dhuhr)?,
            asr: finalize(Prayer::Asr, asr)?,
            maghrib: finalize(Prayer::Maghrib, maghrib)?,
            isha: finalize(Prayer::Isha, isha)?,
            coordinates,
            date,
            parameters,
        })
    }

    /// Computes the schedule for any chrono date-like value, e.g. `NaiveDate` or
    /// a local `DateTime`. Only the calendar date is used.
    ///
    /// # Errors
    /// See [`PrayerTimes::new`].
    pub fn for_date<D: Datelike>(
        coordinates: Coordinates,
        date: &D,
        parameters: CalculationParameters,
    ) -> Result<Self> {
        Self::new(coordinates, CalendarDate::from_date_like(date), parameters)
    }

    /// Fajr.
    #[must_use]
    pub const fn fajr(&self) -> DateTime<Utc> {
        self.fajr
    }

    /// Sunrise.
    #[must_use]
    pub const fn sunrise(&self) -> DateTime<Utc> {
        self.sunrise
    }

    /// Dhuhr.
    #[must_use]
    pub const fn dhuhr(&self) -> DateTime<Utc> {
        self.dhuhr
    }

    /// Asr.
    #[must_use]
    pub const fn asr(&self) -> DateTime<Utc> {
        self.asr
    }

    /// Maghrib.
    #[must_use]
    pub const fn maghrib(&self) -> DateTime<Utc> {
        self.maghrib
    }

    /// Isha.
    #[must_use]
    pub const fn isha(&self) -> DateTime<Utc> {
        self.isha
    }

    /// Location the schedule was computed for.
    #[must_use]
    pub const fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Date the schedule was computed for.
    #[must_use]
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    /// Parameters the schedule was computed with.
    #[must_use]
    pub const fn parameters(&self) -> CalculationParameters {
        self.parameters
    }

    /// Instant of `prayer`, or `None` for [`Prayer::None`].
    #[must_use]
    pub const fn time_for_prayer(&self, prayer: Prayer) -> Option<DateTime<Utc>> {
        match prayer {
            Prayer::None => None,
            Prayer::Fajr => Some(self.fajr),
            Prayer::Sunrise => Some(self.sunrise),
            Prayer::Dhuhr => Some(self.dhuhr),
            Prayer::Asr => Some(self.asr),
            Prayer::Maghrib => Some(self.maghrib),
            Prayer::Isha => Some(self.isha),
        }
    }

    /// All six times in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, DateTime<Utc>)> + '_ {
        Prayer::ALL
            .into_iter()
            .filter_map(|prayer| self.time_for_prayer(prayer).map(|time| (prayer, time)))
    }

    /// The latest prayer that has started at `time`, or [`Prayer::None`] before Fajr.
    #[must_use]
    pub fn current_prayer<Tz: TimeZone>(&self, time: &DateTime<Tz>) -> Prayer {
        let time = time.with_timezone(&Utc);
        self.iter()
            .filter(|(_, start)| *start <= time)
            .map(|(prayer, _)| prayer)
            .last()
            .unwrap_or(Prayer::None)
    }

    /// The first prayer that has not started at `time`, or [`Prayer::None`] after Isha.
    #[must_use]
    pub fn next_prayer<Tz: TimeZone>(&self, time: &DateTime<Tz>) -> Prayer {
        self.current_prayer(time).next()
    }

    /// [`PrayerTimes::current_prayer`] at the system clock's current time.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn current_prayer_now(&self) -> Prayer {
        self.current_prayer(&Utc::now())
    }

    /// [`PrayerTimes::next_prayer`] at the system clock's current time.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn next_prayer_now(&self) -> Prayer {
        self.next_prayer(&Utc::now())
    }
}

/// Seconds from `maghrib` on `date` to the next sunrise.
///
/// Close to the date line the transit of consecutive dates can wrap across 0h UT.
/// The following date then either solves the same solar day again, so its sunrise
/// precedes `maghrib`, or skips a solar day and its sunrise is a day too late.
fn night_after(
    coordinates: Coordinates,
    date: CalendarDate,
    maghrib: DateTime<Utc>,
) -> Result<i64> {
    let sunrise_on = |day: CalendarDate| -> Result<DateTime<Utc>> {
        SolarTime::new(day, coordinates)?
            .sunrise()
            .to_datetime(&day)
    };

    let tomorrow = date.next_day();
    let mut sunrise = sunrise_on(tomorrow)?;
    if sunrise <= maghrib {
        let after = tomorrow.next_day();
        debug!("sunrise of {tomorrow:?} precedes maghrib of {date:?}, using {after:?}");
        sunrise = sunrise_on(after)?;
    }

    let night = (sunrise - maghrib).num_seconds();
    if night > SECONDS_PER_DAY {
        // Sunrise moves by minutes from one day to the next
        debug!("sunrise of {tomorrow:?} skips a solar day after {date:?}");
        return Ok(night - SECONDS_PER_DAY);
    }
    Ok(night)
}

/// Fajr and Isha derivation for one day.
struct Engine<'a> {
    solar_time: &'a SolarTime,
    coordinates: &'a Coordinates,
    date: &'a CalendarDate,
    parameters: &'a CalculationParameters,
    /// Seconds from today's sunset to tomorrow's sunrise
    night: i64,
}

impl Engine<'_> {
    fn is_moonsighting(&self) -> bool {
        self.parameters.method() == CalculationMethod::MoonsightingCommittee
    }

    fn uses_seventh_of_night(&self) -> bool {
        self.is_moonsighting() && self.coordinates.latitude() >= MOONSIGHTING_HIGH_LATITUDE
    }

    fn night_fraction(&self, portion: f64) -> TimeDelta {
        TimeDelta::seconds((portion * self.night as f64) as i64)
    }

    /// Time at which the sun is `angle` degrees below the horizon, if it gets that low.
    fn twilight(&self, angle: f64, after_transit: bool) -> Result<Option<DateTime<Utc>>> {
        let altitude = Horizon::Twilight(angle).elevation_angle();
        match self.solar_time.hour_angle(altitude, after_transit) {
            Ok(hours) => hours.to_datetime(self.date).map(Some),
            Err(Error::UnsolvableHourAngle { altitude }) => {
                debug!(
                    "sun does not reach {altitude}° on {:?} at {:?}",
                    self.date, self.coordinates
                );
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn fajr(&self, sunrise: DateTime<Utc>) -> Result<DateTime<Utc>> {
        let candidate = if self.uses_seventh_of_night() {
            Some(sunrise - TimeDelta::seconds(self.night / 7))
        } else {
            self.twilight(self.parameters.fajr_angle(), false)?
        };

        let safe_bound = if self.is_moonsighting() {
            let seconds = season_adjusted_morning_twilight(
                self.coordinates.latitude(),
                self.date.day_of_year(),
                self.date.year(),
            );
            sunrise - TimeDelta::seconds(seconds)
        } else {
            let portion = self.parameters.night_portions()?.fajr();
            sunrise - self.night_fraction(portion)
        };

        match candidate {
            Some(fajr) if fajr >= safe_bound => Ok(fajr),
            _ => {
                debug!("fajr on {:?} bounded to {safe_bound}", self.date);
                Ok(safe_bound)
            }
        }
    }

    fn isha(&self, sunset: DateTime<Utc>) -> Result<DateTime<Utc>> {
        let interval = self.parameters.isha_interval();
        if interval > 0 {
            return Ok(sunset + TimeDelta::minutes(i64::from(interval)));
        }

        let candidate = if self.uses_seventh_of_night() {
            Some(sunset + TimeDelta::seconds(self.night / 7))
        } else {
            self.twilight(self.parameters.isha_angle(), true)?
        };

        let safe_bound = if self.is_moonsighting() {
            let seconds = season_adjusted_evening_twilight(
                self.coordinates.latitude(),
                self.date.day_of_year(),
                self.date.year(),
            );
            sunset + TimeDelta::seconds(seconds)
        } else {
            let portion = self.parameters.night_portions()?.isha();
            sunset + self.night_fraction(portion)
        };

        match candidate {
            Some(isha) if isha <= safe_bound => Ok(isha),
            _ => {
                debug!("isha on {:?} bounded to {safe_bound}", self.date);
                Ok(safe_bound)
            }
        }
    }
}

/// Rounds to the nearest whole minute; 30 seconds round up.
fn rounded_minute(time: DateTime<Utc>) -> Result<DateTime<Utc>> {
    let timestamp = time.timestamp();
    let minutes = timestamp.div_euclid(60) + i64::from(timestamp.rem_euclid(60) >= 30);
    DateTime::from_timestamp(minutes * 60, 0)
        .ok_or_else(|| Error::invalid_time_value(timestamp as f64 / 3600.0))
}
