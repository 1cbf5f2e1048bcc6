use log::{debug, trace};

use crate::angles::{deg_to_rad, normalize_angle};
use crate::config::ShadeConfig;
use crate::geometry::{bearing_vector, is_segment_sun_facing};
use crate::structures::MIN_SEGMENT_LENGTH;
use crate::types::{
    FenceShadowData, PlantForShadow, Point2, Quadrilateral, ShadowData, StructureForShading,
    StructureKind, SunPosition,
};

/// `height / tan(altitude)`, capped at `config.max_shadow_length`.
///
/// A sun at or below the horizon yields the cap; a sun at the zenith yields 0.
pub fn shadow_length(height: f64, altitude: f64, config: &ShadeConfig) -> f64 {
    if altitude <= 0.0 {
        return config.max_shadow_length;
    }
    if altitude >= 90.0 {
        return 0.0;
    }
    (height / deg_to_rad(altitude).tan()).min(config.max_shadow_length)
}

/// Bearing the shadow points along: opposite the sun.
pub fn shadow_angle(azimuth: f64) -> f64 {
    normalize_angle(azimuth + 180.0)
}

pub fn shadow_offset(length: f64, angle: f64) -> Point2 {
    bearing_vector(angle) * length
}

/// Whether the sun is high enough for any shadow geometry to be drawn.
pub fn casts_shadows(sun: &SunPosition, config: &ShadeConfig) -> bool {
    !sun.is_night && sun.altitude >= config.min_shadow_render_altitude
}

/// Fade-in factor for rendered shadows, linear between the render threshold
/// and the full-shadow altitude.
pub fn shadow_opacity(sun: &SunPosition, config: &ShadeConfig) -> f64 {
    if sun.is_night {
        return 0.0;
    }
    let span = config.full_shadow_altitude - config.min_shadow_render_altitude;
    ((sun.altitude - config.min_shadow_render_altitude) / span).clamp(0.0, 1.0)
}

pub fn calculate_plant_shadow(
    plant: &PlantForShadow,
    sun: &SunPosition,
    config: &ShadeConfig,
) -> Option<ShadowData> {
    if !casts_shadows(sun, config) || plant.height_max <= 0.0 {
        return None;
    }
    let length = shadow_length(plant.height_max, sun.altitude, config);
    let angle = shadow_angle(sun.azimuth);
    let end = plant.position() + shadow_offset(length, angle);
    Some(ShadowData {
        plant_id: plant.id.clone(),
        origin_x: plant.x,
        origin_y: plant.y,
        shadow_length: length,
        shadow_angle: angle,
        end_x: end.x,
        end_y: end.y,
        height_max: plant.height_max,
    })
}

pub fn calculate_plant_shadows(
    plants: &[PlantForShadow],
    sun: &SunPosition,
    config: &ShadeConfig,
) -> Vec<ShadowData> {
    plants
        .iter()
        .filter_map(|plant| calculate_plant_shadow(plant, sun, config))
        .collect()
}

/// One shadow quadrilateral per casting wall segment.
///
/// Fence segments always cast; bed segments cast only when they pass
/// [`is_segment_sun_facing`] against the bed interior. Zero-length segments
/// are skipped, and `segment_index` is always the position in
/// `structure.segments`.
pub fn calculate_structure_shadows(
    structure: &StructureForShading,
    sun: &SunPosition,
    config: &ShadeConfig,
) -> Vec<FenceShadowData> {
    if !casts_shadows(sun, config) || structure.height_inches <= 0.0 {
        return Vec::new();
    }
    let length = shadow_length(structure.height_inches, sun.altitude, config);
    let angle = shadow_angle(sun.azimuth);
    let offset = shadow_offset(length, angle);

    structure
        .segments
        .iter()
        .enumerate()
        .filter(|(index, segment)| {
            let casts = segment.length() > MIN_SEGMENT_LENGTH
                && match structure.kind {
                    StructureKind::Fence => true,
                    StructureKind::Bed { interior } => {
                        is_segment_sun_facing(segment.start, segment.end, sun.azimuth, interior)
                    }
                };
            if !casts {
                trace!("{} segment {index} casts no shadow", structure.id);
            }
            casts
        })
        .map(|(index, segment)| FenceShadowData {
            caster_id: structure.id.clone(),
            segment_index: index,
            quadrilateral: Quadrilateral {
                p1: segment.start,
                p2: segment.end,
                p3: segment.end + offset,
                p4: segment.start + offset,
            },
            shadow_length: length,
            shadow_angle: angle,
        })
        .collect()
}

pub fn calculate_all_structure_shadows(
    structures: &[StructureForShading],
    sun: &SunPosition,
    config: &ShadeConfig,
) -> Vec<FenceShadowData> {
    let shadows: Vec<FenceShadowData> = structures
        .iter()
        .flat_map(|structure| calculate_structure_shadows(structure, sun, config))
        .collect();
    debug!(
        "projected {} structure shadow(s) from {} structure(s)",
        shadows.len(),
        structures.len()
    );
    shadows
}
