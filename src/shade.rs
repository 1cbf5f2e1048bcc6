use std::collections::BTreeSet;

use log::{debug, trace};

use crate::config::ShadeConfig;
use crate::geometry::{bearing_vector, distance_to_segment, point_in_quadrilateral};
use crate::shadow::{calculate_structure_shadows, shadow_angle, shadow_length};
use crate::types::{FenceShadowData, PlantForShadow, StructureForShading, SunPosition};

/// Height of a shadow's upper boundary `distance` inches from a caster of
/// `caster_height`: full height at the base, zero at the tip.
pub fn shadow_plane_height(caster_height: f64, distance: f64, shadow_length: f64) -> f64 {
    if shadow_length <= 0.0 {
        return 0.0;
    }
    caster_height * (1.0 - distance / shadow_length)
}

/// Whether the taller `caster` puts `target` in its shadow cone deep enough
/// to cover it.
pub fn is_shaded_by_plant(
    target: &PlantForShadow,
    caster: &PlantForShadow,
    sun: &SunPosition,
    config: &ShadeConfig,
) -> bool {
    if caster.height_max <= target.height_max {
        return false;
    }
    let length = shadow_length(caster.height_max, sun.altitude, config);
    let offset = target.position() - caster.position();
    let distance = offset.length();
    if length <= 0.0 || distance > length || distance < config.min_plant_separation || distance == 0.0 {
        return false;
    }
    let cosine = (offset * (1.0 / distance)).dot(bearing_vector(shadow_angle(sun.azimuth)));
    if cosine <= config.shadow_cone_cosine {
        return false;
    }
    target.height_max < shadow_plane_height(caster.height_max, distance, length)
}

struct StructureShadows<'a> {
    structure: &'a StructureForShading,
    shadows: Vec<FenceShadowData>,
}

fn is_shaded_by_structure(target: &PlantForShadow, cast: &StructureShadows<'_>) -> bool {
    let position = target.position();
    cast.shadows.iter().any(|shadow| {
        if !point_in_quadrilateral(position, &shadow.quadrilateral) {
            return false;
        }
        let Some(segment) = cast.structure.segments.get(shadow.segment_index) else {
            return false;
        };
        let distance = distance_to_segment(position, segment);
        let plane =
            shadow_plane_height(cast.structure.height_inches, distance, shadow.shadow_length);
        target.height_max < plane
    })
}

/// Identifiers of every plant shaded by a taller plant or a structure.
///
/// Empty at night and whenever the sun is below
/// `config.min_shade_detection_altitude`. The first shading cause found
/// wins; plant casters are checked before structures.
pub fn detect_shaded_plants(
    plants: &[PlantForShadow],
    sun: &SunPosition,
    structures: &[StructureForShading],
    config: &ShadeConfig,
) -> BTreeSet<String> {
    let mut shaded = BTreeSet::new();
    if sun.is_night || sun.altitude < config.min_shade_detection_altitude {
        return shaded;
    }

    for (i, target) in plants.iter().enumerate() {
        let caster = plants
            .iter()
            .enumerate()
            .find(|&(j, caster)| i != j && is_shaded_by_plant(target, caster, sun, config));
        if let Some((_, caster)) = caster {
            trace!("{} shaded by plant {}", target.id, caster.id);
            shaded.insert(target.id.clone());
        }
    }

    let cast: Vec<StructureShadows<'_>> = structures
        .iter()
        .map(|structure| StructureShadows {
            structure,
            shadows: calculate_structure_shadows(structure, sun, config),
        })
        .filter(|cast| !cast.shadows.is_empty())
        .collect();

    for target in plants {
        if shaded.contains(&target.id) {
            continue;
        }
        if let Some(hit) = cast.iter().find(|cast| is_shaded_by_structure(target, cast)) {
            trace!("{} shaded by structure {}", target.id, hit.structure.id);
            shaded.insert(target.id.clone());
        }
    }

    debug!(
        "{} of {} plant(s) shaded at altitude {:.1}, azimuth {:.1}",
        shaded.len(),
        plants.len(),
        sun.altitude,
        sun.azimuth
    );
    shaded
}
