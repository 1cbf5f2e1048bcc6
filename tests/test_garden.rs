use garden_shade::timeline::*;
use garden_shade::{
    compute_garden_shade, BedInput, BedShape, Error, FenceInput, GardenShade, GardenSnapshot,
    PlantInput, Point2, ShadeConfig, SunParameters, TimelineConfig,
};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn sample_garden() -> GardenSnapshot {
    GardenSnapshot {
        plants: vec![
            PlantInput {
                id: "tomato".to_string(),
                x: 0.0,
                y: 0.0,
                height_max: 60.0,
            },
            PlantInput {
                id: "lettuce".to_string(),
                x: 0.0,
                y: -12.0,
                height_max: 6.0,
            },
        ],
        beds: vec![BedInput {
            id: "herbs".to_string(),
            shape: BedShape::Circle,
            x: 200.0,
            y: 200.0,
            width_feet: 3.0,
            height_feet: None,
            rotation: None,
            raised_wall_height_feet: 1.0,
        }],
        fences: vec![FenceInput {
            id: "north-fence".to_string(),
            vertices: vec![Point2::new(-120.0, -200.0), Point2::new(120.0, -200.0)],
            height_feet: 5.0,
        }],
    }
}

fn july_noon() -> SunParameters {
    SunParameters {
        enabled: true,
        latitude: 40.0,
        month: 6.0,
        time_of_day: 0.5,
    }
}

// ── One-shot recomputation ──

#[test]
fn test_disabled_overlay_is_empty() {
    let params = SunParameters {
        enabled: false,
        ..july_noon()
    };
    let shade = compute_garden_shade(&params, &sample_garden(), &ShadeConfig::default());
    assert_eq!(shade, GardenShade::default());
}

#[test]
fn test_july_noon_overlay() {
    let shade = compute_garden_shade(&july_noon(), &sample_garden(), &ShadeConfig::default());
    let sun = shade.sun.unwrap();
    assert!(!sun.is_night);
    assert!(shade.daylight_hours > 13.0);
    assert_approx!(shade.opacity, 1.0, 1e-12);
    assert_eq!(shade.plant_shadows.len(), 2);
    assert_eq!(shade.structure_shadows.len(), 1 + 12);
    assert!(shade.shaded_plants.contains("lettuce"));
    assert!(!shade.shaded_plants.contains("tomato"));
}

#[test]
fn test_sunrise_overlay_has_no_shadows() {
    let params = SunParameters {
        time_of_day: 0.0,
        month: 0.0,
        ..july_noon()
    };
    let shade = compute_garden_shade(&params, &sample_garden(), &ShadeConfig::default());
    assert!(shade.plant_shadows.is_empty());
    assert!(shade.structure_shadows.is_empty());
    assert!(shade.shaded_plants.is_empty());
    assert_eq!(shade.opacity, 0.0);
}

#[test]
fn test_overlay_serializes_for_renderer() {
    let shade = compute_garden_shade(&july_noon(), &sample_garden(), &ShadeConfig::default());
    let json = serde_json::to_string(&shade).unwrap();
    let back: GardenShade = serde_json::from_str(&json).unwrap();
    assert_eq!(back.shaded_plants, shade.shaded_plants);
    assert_eq!(back.structure_shadows.len(), shade.structure_shadows.len());
}

#[test]
fn test_snapshot_from_json() {
    let json = r#"{
        "plants": [{"id": "kale", "x": 10.0, "y": 20.0, "height_max": 18.0}],
        "beds": [{"id": "b1", "shape": "rect", "x": 0.0, "y": 0.0, "width_feet": 4.0,
                  "height_feet": 8.0, "rotation": 30.0, "raised_wall_height_feet": 1.0}]
    }"#;
    let snapshot: GardenSnapshot = serde_json::from_str(json).unwrap();
    assert_eq!(snapshot.plants.len(), 1);
    assert_eq!(snapshot.beds[0].shape, BedShape::Rect);
    assert!(snapshot.fences.is_empty());
}

// ── Configuration ──

#[test]
fn test_default_config() {
    let c = ShadeConfig::default();
    assert_eq!(c.max_shadow_length, 300.0);
    assert_eq!(c.min_shadow_render_altitude, 10.0);
    assert_eq!(c.full_shadow_altitude, 25.0);
    assert_eq!(c.min_shade_detection_altitude, 20.0);
    assert_eq!(c.shadow_cone_cosine, 0.94);
    assert_eq!(c.min_plant_separation, 6.0);
    assert_eq!(c.circle_segments, 24);
    assert!(c.validate().is_ok());
    assert_eq!(TimelineConfig::default().samples, 48);
}

#[test]
fn test_partial_config_json_keeps_defaults() {
    let c = ShadeConfig::from_json(r#"{"max_shadow_length": 240.0, "circle_segments": 32}"#).unwrap();
    assert_eq!(c.max_shadow_length, 240.0);
    assert_eq!(c.circle_segments, 32);
    assert_eq!(c.shadow_cone_cosine, 0.94);
}

#[test]
fn test_invalid_config_rejected() {
    let err = ShadeConfig::from_json(r#"{"full_shadow_altitude": 5.0}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)), "{}", err);
    let err = ShadeConfig::from_json(r#"{"min_shade_detection_altitude": 5.0}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
    let err = ShadeConfig::from_json(r#"{"circle_segments": 2}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
    let err = ShadeConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

// ── Day timeline ──

#[test]
fn test_timeline_sampling() {
    let config = ShadeConfig::default();
    let timeline =
        generate_day_timeline(40.0, 6.0, &sample_garden(), &config, &TimelineConfig { samples: 24 }).unwrap();
    assert_eq!(timeline.samples.len(), 24);
    assert_approx!(timeline.samples[0].time_of_day, 1.0 / 48.0, 1e-12);
    for pair in timeline.samples.windows(2) {
        assert!(pair[0].time_of_day < pair[1].time_of_day);
    }
}

#[test]
fn test_timeline_rejects_zero_samples() {
    let result = generate_day_timeline(
        40.0,
        6.0,
        &sample_garden(),
        &ShadeConfig::default(),
        &TimelineConfig { samples: 0 },
    );
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn test_direct_sun_hours() {
    let config = ShadeConfig::default();
    let timeline =
        generate_day_timeline(40.0, 6.0, &sample_garden(), &config, &TimelineConfig::default()).unwrap();
    let tomato = direct_sun_hours(&timeline, "tomato", &config);
    let lettuce = direct_sun_hours(&timeline, "lettuce", &config);
    assert!(tomato > 0.0 && tomato <= timeline.daylight_hours);
    assert!(lettuce < tomato, "lettuce {} tomato {}", lettuce, tomato);

    let by_plant = sun_hours_by_plant(&timeline, &sample_garden(), &config);
    assert_eq!(by_plant.len(), 2);
    assert_eq!(by_plant["tomato"], tomato);
}

#[test]
fn test_polar_night_timeline_has_no_sun() {
    let config = ShadeConfig::default();
    let timeline =
        generate_day_timeline(80.0, 0.0, &sample_garden(), &config, &TimelineConfig::default()).unwrap();
    assert_eq!(timeline.daylight_hours, 0.0);
    assert!(timeline.samples.iter().all(|s| s.sun.is_night));
    assert_eq!(direct_sun_hours(&timeline, "tomato", &config), 0.0);
}

#[test]
fn test_lookup_sun_position() {
    let config = ShadeConfig::default();
    let timeline =
        generate_day_timeline(40.0, 6.0, &sample_garden(), &config, &TimelineConfig::default()).unwrap();
    let sample = &timeline.samples[10];
    let exact = lookup_sun_position(&timeline, sample.time_of_day).unwrap();
    assert_approx!(exact.altitude, sample.sun.altitude, 1e-9);
    assert_approx!(exact.azimuth, sample.sun.azimuth, 1e-9);

    let noon = lookup_sun_position(&timeline, 0.5).unwrap();
    assert!(noon.altitude > 60.0);
    assert!(noon.azimuth > 170.0 && noon.azimuth < 190.0, "azimuth={}", noon.azimuth);

    assert!(lookup_sun_position(&timeline, -0.1).is_none());
    assert!(lookup_sun_position(&timeline, 1.1).is_none());
    assert_eq!(lookup_sun_position(&timeline, 0.0).unwrap(), timeline.samples[0].sun);
}

#[test]
fn test_interpolate_angle_wraps() {
    assert_approx!(interpolate_angle(350.0, 10.0, 0.5), 0.0, 1e-9);
    assert_approx!(interpolate_angle(10.0, 350.0, 0.25), 5.0, 1e-9);
    assert_approx!(interpolate_angle(90.0, 180.0, 0.5), 135.0, 1e-9);
}
