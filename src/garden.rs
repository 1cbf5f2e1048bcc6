use std::collections::BTreeSet;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::angles;
use crate::config::ShadeConfig;
use crate::shade::detect_shaded_plants;
use crate::shadow::{calculate_all_structure_shadows, calculate_plant_shadows, shadow_opacity};
use crate::structures::{plants_from_snapshot, structures_from_snapshot};
use crate::types::{FenceShadowData, GardenSnapshot, ShadowData, SunParameters, SunPosition};

/// Everything the renderer needs for one frame of the sun overlay.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GardenShade {
    /// `None` when the overlay is switched off.
    pub sun: Option<SunPosition>,
    pub daylight_hours: f64,
    pub plant_shadows: Vec<ShadowData>,
    pub structure_shadows: Vec<FenceShadowData>,
    pub shaded_plants: BTreeSet<String>,
    pub opacity: f64,
}

/// Recomputes the whole overlay from scratch for the given controls and
/// garden snapshot.
pub fn compute_garden_shade(
    params: &SunParameters,
    snapshot: &GardenSnapshot,
    config: &ShadeConfig,
) -> GardenShade {
    if !params.enabled {
        return GardenShade::default();
    }

    let sun = angles::sun_position(params.latitude, params.month, params.time_of_day);
    let plants = plants_from_snapshot(snapshot);
    let structures = structures_from_snapshot(snapshot, config);

    let result = GardenShade {
        sun: Some(sun),
        daylight_hours: angles::daylight_hours(params.latitude, params.month),
        plant_shadows: calculate_plant_shadows(&plants, &sun, config),
        structure_shadows: calculate_all_structure_shadows(&structures, &sun, config),
        shaded_plants: detect_shaded_plants(&plants, &sun, &structures, config),
        opacity: shadow_opacity(&sun, config),
    };
    debug!(
        "garden shade: alt={:.1} az={:.1} night={} plant_shadows={} structure_shadows={} shaded={}",
        sun.altitude,
        sun.azimuth,
        sun.is_night,
        result.plant_shadows.len(),
        result.structure_shadows.len(),
        result.shaded_plants.len()
    );
    result
}
