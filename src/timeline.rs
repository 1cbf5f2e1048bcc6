//! Samples a whole day of sun and shade so a planner can see how many hours
//! of useful light each plant gets.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::angles;
use crate::config::{ShadeConfig, TimelineConfig};
use crate::error::Result;
use crate::shade::detect_shaded_plants;
use crate::structures::{plants_from_snapshot, structures_from_snapshot};
use crate::types::{GardenSnapshot, SunPosition};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSample {
    pub time_of_day: f64,
    pub sun: SunPosition,
    pub shaded_plants: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayTimeline {
    pub latitude: f64,
    pub month: f64,
    pub daylight_hours: f64,
    /// Ordered by `time_of_day`; each covers an equal share of the daylight.
    pub samples: Vec<TimelineSample>,
}

/// Interpolates between two bearings along the shorter arc.
pub fn interpolate_angle(a1: f64, a2: f64, fraction: f64) -> f64 {
    let diff = a2 - a1;
    let adjusted_diff = if diff > 180.0 {
        diff - 360.0
    } else if diff < -180.0 {
        diff + 360.0
    } else {
        diff
    };
    (a1 + adjusted_diff * fraction).rem_euclid(360.0)
}

pub fn generate_day_timeline(
    latitude: f64,
    month: f64,
    snapshot: &GardenSnapshot,
    config: &ShadeConfig,
    timeline_config: &TimelineConfig,
) -> Result<DayTimeline> {
    config.validate()?;
    timeline_config.validate()?;

    let plants = plants_from_snapshot(snapshot);
    let structures = structures_from_snapshot(snapshot, config);
    let n = timeline_config.samples;

    let samples: Vec<TimelineSample> = (0..n)
        .map(|i| {
            let time_of_day = (i as f64 + 0.5) / n as f64;
            let sun = angles::sun_position(latitude, month, time_of_day);
            let shaded_plants = detect_shaded_plants(&plants, &sun, &structures, config);
            TimelineSample {
                time_of_day,
                sun,
                shaded_plants,
            }
        })
        .collect();

    let daylight_hours = angles::daylight_hours(latitude, month);
    debug!(
        "timeline lat={latitude:.2} month={month:.2}: {n} samples over {daylight_hours:.2} h of daylight"
    );
    Ok(DayTimeline {
        latitude,
        month,
        daylight_hours,
        samples,
    })
}

/// Sun position at any time of day, interpolated from the nearest samples.
/// Times before the first or after the last sample take that sample's
/// value. `None` outside `[0, 1]` or for an empty timeline.
pub fn lookup_sun_position(timeline: &DayTimeline, time_of_day: f64) -> Option<SunPosition> {
    if !(0.0..=1.0).contains(&time_of_day) {
        return None;
    }
    let samples = &timeline.samples;
    let first = samples.first()?;
    let last = samples.last()?;
    if time_of_day <= first.time_of_day {
        return Some(first.sun);
    }
    if time_of_day >= last.time_of_day {
        return Some(last.sun);
    }

    let idx_after = samples.partition_point(|s| s.time_of_day <= time_of_day);
    let before = &samples[idx_after - 1];
    let after = &samples[idx_after];
    let fraction =
        (time_of_day - before.time_of_day) / (after.time_of_day - before.time_of_day);
    let altitude = before.sun.altitude + fraction * (after.sun.altitude - before.sun.altitude);
    Some(SunPosition {
        altitude,
        azimuth: interpolate_angle(before.sun.azimuth, after.sun.azimuth, fraction),
        is_night: altitude <= 0.0 || (before.sun.is_night && after.sun.is_night),
    })
}

/// Hours a plant spends unshaded while the sun is strong enough to count.
pub fn direct_sun_hours(timeline: &DayTimeline, plant_id: &str, config: &ShadeConfig) -> f64 {
    if timeline.samples.is_empty() {
        return 0.0;
    }
    let hours_per_sample = timeline.daylight_hours / timeline.samples.len() as f64;
    let lit = timeline
        .samples
        .iter()
        .filter(|s| {
            !s.sun.is_night
                && s.sun.altitude >= config.min_shade_detection_altitude
                && !s.shaded_plants.contains(plant_id)
        })
        .count();
    lit as f64 * hours_per_sample
}

pub fn sun_hours_by_plant(
    timeline: &DayTimeline,
    snapshot: &GardenSnapshot,
    config: &ShadeConfig,
) -> BTreeMap<String, f64> {
    snapshot
        .plants
        .iter()
        .map(|plant| (plant.id.clone(), direct_sun_hours(timeline, &plant.id, config)))
        .collect()
}
