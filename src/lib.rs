pub mod angles;
pub mod calendar;
pub mod config;
pub mod error;
pub mod garden;
pub mod geometry;
pub mod shade;
pub mod shadow;
pub mod structures;
pub mod timeline;
pub mod types;

pub use angles::{
    day_of_year_from_month, daylight_hours, deg_to_rad, half_day_angle, hour_angle,
    normalize_angle, rad_to_deg, solar_altitude, solar_azimuth, solar_declination,
    solar_zenith_angle, sun_position, sunset_hour_angle, DEGREES_PER_HOUR, EARTH_AXIAL_TILT,
};

pub use calendar::{continuous_month, sun_parameters_at, sun_position_at, time_of_day_fraction};

pub use config::{
    ShadeConfig, TimelineConfig, CIRCLE_SEGMENTS, FULL_SHADOW_ALTITUDE, MAX_SHADOW_LENGTH,
    MIN_PLANT_SEPARATION, MIN_SHADE_DETECTION_ALTITUDE, MIN_SHADOW_RENDER_ALTITUDE,
    SHADOW_CONE_COSINE,
};

pub use error::Error;

pub use garden::{compute_garden_shade, GardenShade};

pub use geometry::{
    distance_to_segment, is_segment_sun_facing, point_in_quadrilateral, polygonize_circle,
};

pub use shade::detect_shaded_plants;

pub use shadow::{
    calculate_all_structure_shadows, calculate_plant_shadow, calculate_plant_shadows,
    calculate_structure_shadows, shadow_angle, shadow_length, shadow_opacity,
};

pub use structures::{bed_structure, fence_structure, structures_from_snapshot};

pub use timeline::{direct_sun_hours, generate_day_timeline, lookup_sun_position, DayTimeline};

pub use types::{
    BedInput, BedShape, FenceInput, FenceShadowData, GardenSnapshot, PlantForShadow, PlantInput,
    Point2, Quadrilateral, Segment, ShadowData, StructureForShading, StructureKind,
    SunParameters, SunPosition,
};
