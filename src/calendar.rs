//! Bridges real calendar dates and clock times onto the continuous month and
//! time-of-day controls.
//!
//! Wall-clock time stands in for local solar time: there is no longitude or
//! equation-of-time correction, which matches the accuracy of the rest of the
//! model.

use chrono::{DateTime, Datelike, TimeZone, Timelike};

use crate::angles::{self, DEGREES_PER_HOUR};
use crate::types::{SunParameters, SunPosition};

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn days_in_months(year: i32) -> [u32; 12] {
    [
        31,
        if leap_year(year) { 29 } else { 28 },
        31, 30, 31, 30, 31, 31, 30, 31, 30, 31,
    ]
}

/// Continuous month for a calendar date: the zero-based month plus the
/// fraction of it already elapsed. 1 January → 0.0, 16 July → ~6.48.
pub fn continuous_month<D: Datelike>(date: &D) -> f64 {
    let month0 = date.month0() as usize;
    let dim = days_in_months(date.year())[month0];
    month0 as f64 + date.day0() as f64 / dim as f64
}

pub fn solar_hours<T: Timelike>(time: &T) -> f64 {
    time.hour() as f64 + time.minute() as f64 / 60.0 + time.second() as f64 / 3600.0
}

/// Where `solar_hours` falls between sunrise (0) and sunset (1), or `None`
/// when the sun is down or never rises.
pub fn time_of_day_fraction(latitude: f64, month: f64, solar_hours: f64) -> Option<f64> {
    let half_day_hours = angles::half_day_angle(latitude, month) / DEGREES_PER_HOUR;
    if half_day_hours <= 0.0 {
        return None;
    }
    let sunrise = 12.0 - half_day_hours;
    let fraction = (solar_hours - sunrise) / (2.0 * half_day_hours);
    (0.0..=1.0).contains(&fraction).then_some(fraction)
}

/// UI parameters equivalent to a concrete local date and time. `None` when
/// that moment falls outside daylight.
pub fn sun_parameters_at<Tz: TimeZone>(latitude: f64, dt: &DateTime<Tz>) -> Option<SunParameters> {
    let local = dt.naive_local();
    let month = continuous_month(&local);
    let time_of_day = time_of_day_fraction(latitude, month, solar_hours(&local))?;
    Some(SunParameters {
        enabled: true,
        latitude,
        month,
        time_of_day,
    })
}

pub fn sun_position_at<Tz: TimeZone>(latitude: f64, dt: &DateTime<Tz>) -> SunPosition {
    match sun_parameters_at(latitude, dt) {
        Some(params) => angles::sun_position(latitude, params.month, params.time_of_day),
        None => SunPosition::NIGHT,
    }
}
