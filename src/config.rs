use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Longest shadow ever projected, in inches (25 ft).
pub const MAX_SHADOW_LENGTH: f64 = 300.0;
/// Below this altitude no shadow geometry is produced.
pub const MIN_SHADOW_RENDER_ALTITUDE: f64 = 10.0;
/// Altitude at which rendered shadows reach full opacity.
pub const FULL_SHADOW_ALTITUDE: f64 = 25.0;
/// Below this altitude light is too weak for shading to matter to plants.
pub const MIN_SHADE_DETECTION_ALTITUDE: f64 = 20.0;
/// cos(~20°): half-angle of the cone a plant's shadow sweeps.
pub const SHADOW_CONE_COSINE: f64 = 0.94;
/// Plants closer than this (inches) never shade each other.
pub const MIN_PLANT_SEPARATION: f64 = 6.0;
/// Sides used when approximating a circular bed.
pub const CIRCLE_SEGMENTS: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadeConfig {
    pub max_shadow_length: f64,
    pub min_shadow_render_altitude: f64,
    pub full_shadow_altitude: f64,
    pub min_shade_detection_altitude: f64,
    pub shadow_cone_cosine: f64,
    pub min_plant_separation: f64,
    pub circle_segments: usize,
}

impl Default for ShadeConfig {
    fn default() -> Self {
        Self {
            max_shadow_length: MAX_SHADOW_LENGTH,
            min_shadow_render_altitude: MIN_SHADOW_RENDER_ALTITUDE,
            full_shadow_altitude: FULL_SHADOW_ALTITUDE,
            min_shade_detection_altitude: MIN_SHADE_DETECTION_ALTITUDE,
            shadow_cone_cosine: SHADOW_CONE_COSINE,
            min_plant_separation: MIN_PLANT_SEPARATION,
            circle_segments: CIRCLE_SEGMENTS,
        }
    }
}

impl ShadeConfig {
    /// Parses a (possibly partial) JSON object; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ShadeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.max_shadow_length > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "max_shadow_length must be positive, got {}",
                self.max_shadow_length
            )));
        }
        if !(self.full_shadow_altitude > self.min_shadow_render_altitude) {
            return Err(Error::InvalidConfig(format!(
                "full_shadow_altitude ({}) must exceed min_shadow_render_altitude ({})",
                self.full_shadow_altitude, self.min_shadow_render_altitude
            )));
        }
        if !(self.min_shade_detection_altitude >= self.min_shadow_render_altitude) {
            return Err(Error::InvalidConfig(format!(
                "min_shade_detection_altitude ({}) must not be below min_shadow_render_altitude ({})",
                self.min_shade_detection_altitude, self.min_shadow_render_altitude
            )));
        }
        if !(self.shadow_cone_cosine > -1.0 && self.shadow_cone_cosine <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "shadow_cone_cosine must lie in (-1, 1], got {}",
                self.shadow_cone_cosine
            )));
        }
        if self.circle_segments < 3 {
            return Err(Error::InvalidConfig(format!(
                "circle_segments must be at least 3, got {}",
                self.circle_segments
            )));
        }
        if !(self.min_plant_separation >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "min_plant_separation must not be negative, got {}",
                self.min_plant_separation
            )));
        }
        Ok(())
    }
}

/// Sampling density for [`crate::timeline::generate_day_timeline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub samples: usize,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self { samples: 48 }
    }
}

impl TimelineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            return Err(Error::InvalidConfig(
                "timeline needs at least one sample".to_string(),
            ));
        }
        Ok(())
    }
}
