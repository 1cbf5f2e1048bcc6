use log::trace;

use crate::types::SunPosition;

pub const EARTH_AXIAL_TILT: f64 = 23.45;
pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const DAYS_PER_YEAR: f64 = 365.25;
/// Day of year on which the declination crosses zero heading north.
pub const SPRING_EQUINOX_DAY: f64 = 81.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Fractional day of year for a continuous month in [0, 12).
pub fn day_of_year_from_month(month: f64) -> f64 {
    month / 12.0 * DAYS_PER_YEAR
}

pub fn solar_declination(day_of_year: f64) -> f64 {
    EARTH_AXIAL_TILT * deg_to_rad(360.0 / 365.0 * (day_of_year - SPRING_EQUINOX_DAY)).sin()
}

/// Hour angle of sunrise/sunset, in degrees.
///
/// Returns 0 for polar night (the sun never rises) and 180 for polar day
/// (it never sets).
pub fn sunset_hour_angle(latitude: f64, declination: f64) -> f64 {
    let cos_h = -deg_to_rad(latitude).tan() * deg_to_rad(declination).tan();
    if cos_h >= 1.0 {
        0.0
    } else if cos_h <= -1.0 {
        180.0
    } else {
        rad_to_deg(cos_h.acos())
    }
}

/// Half the daylight arc for a latitude and continuous month.
///
/// Both [`sun_position`] and [`daylight_hours`] go through this so the
/// rendered sun and the reported day length never disagree.
pub fn half_day_angle(latitude: f64, month: f64) -> f64 {
    let decl = solar_declination(day_of_year_from_month(month));
    sunset_hour_angle(latitude, decl)
}

pub fn daylight_hours(latitude: f64, month: f64) -> f64 {
    2.0 * half_day_angle(latitude, month) / DEGREES_PER_HOUR
}

/// Maps time-of-day (0 = sunrise, 1 = sunset) linearly onto `[-ω0, +ω0]`.
pub fn hour_angle(time_of_day: f64, half_day_angle: f64) -> f64 {
    half_day_angle * (2.0 * time_of_day - 1.0)
}

pub fn solar_zenith_angle(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let cos_zenith =
        lat_rad.sin() * dec_rad.sin() + lat_rad.cos() * dec_rad.cos() * ha_rad.cos();
    rad_to_deg(cos_zenith.clamp(-1.0, 1.0).acos())
}

pub fn solar_altitude(zenith_angle: f64) -> f64 {
    90.0 - zenith_angle
}

pub fn solar_azimuth(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let sin_az = -dec_rad.cos() * ha_rad.sin();
    let cos_az = dec_rad.sin() * lat_rad.cos() - dec_rad.cos() * lat_rad.sin() * ha_rad.cos();
    let az_rad = sin_az.atan2(cos_az);
    normalize_angle(rad_to_deg(az_rad))
}

/// Sun position for a latitude, continuous month and time-of-day fraction.
pub fn sun_position(latitude: f64, month: f64, time_of_day: f64) -> SunPosition {
    let decl = solar_declination(day_of_year_from_month(month));
    let half_day = half_day_angle(latitude, month);
    let ha = hour_angle(time_of_day, half_day);
    let altitude = solar_altitude(solar_zenith_angle(latitude, decl, ha));
    let azimuth = solar_azimuth(latitude, decl, ha);
    let is_night = half_day == 0.0 || altitude <= 0.0;
    trace!(
        "sun_position lat={latitude:.2} month={month:.2} t={time_of_day:.3}: \
         decl={decl:.2} omega0={half_day:.2} alt={altitude:.2} az={azimuth:.2} night={is_night}"
    );
    SunPosition {
        altitude,
        azimuth,
        is_night,
    }
}
