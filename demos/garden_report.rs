use chrono::TimeZone;
use chrono_tz::America::Chicago;

use garden_shade::calendar::sun_parameters_at;
use garden_shade::timeline::{generate_day_timeline, sun_hours_by_plant};
use garden_shade::{
    compute_garden_shade, BedInput, BedShape, FenceInput, GardenSnapshot, PlantInput, Point2,
    ShadeConfig, TimelineConfig,
};

fn sample_garden() -> GardenSnapshot {
    let plant = |id: &str, x: f64, y: f64, height_max: f64| PlantInput {
        id: id.to_string(),
        x,
        y,
        height_max,
    };
    GardenSnapshot {
        plants: vec![
            plant("sweet-corn", 30.0, 60.0, 84.0),
            plant("bush-bean", 30.0, 40.0, 20.0),
            plant("lettuce", 30.0, 28.0, 8.0),
            plant("basil", 100.0, 70.0, 18.0),
            plant("spinach", 100.0, -20.0, 10.0),
        ],
        beds: vec![BedInput {
            id: "main-bed".to_string(),
            shape: BedShape::Rect,
            x: 0.0,
            y: 0.0,
            width_feet: 4.0,
            height_feet: Some(8.0),
            rotation: Some(10.0),
            raised_wall_height_feet: 1.5,
        }],
        fences: vec![FenceInput {
            id: "back-fence".to_string(),
            vertices: vec![
                Point2::new(-24.0, -60.0),
                Point2::new(96.0, -60.0),
                Point2::new(140.0, -30.0),
            ],
            height_feet: 6.0,
        }],
    }
}

fn main() {
    env_logger::init();

    let latitude = 39.8;
    let config = ShadeConfig::default();
    let garden = sample_garden();

    let dt = Chicago.with_ymd_and_hms(2026, 6, 21, 15, 0, 0).unwrap();
    let Some(params) = sun_parameters_at(latitude, &dt) else {
        println!("The sun is down at {}", dt);
        return;
    };

    let shade = compute_garden_shade(&params, &garden, &config);

    println!("=== Garden Shade Report ===");
    println!("Latitude: {:.1}°  Date/Time: {}", latitude, dt);
    println!(
        "Month: {:.2}  Time of day: {:.2} (0 = sunrise, 1 = sunset)",
        params.month, params.time_of_day
    );
    println!("Daylight: {:.1} hours", shade.daylight_hours);
    if let Some(sun) = shade.sun {
        println!(
            "Sun altitude: {:.1}°  azimuth: {:.1}°  night: {}",
            sun.altitude, sun.azimuth, sun.is_night
        );
    }
    println!("Shadow opacity: {:.2}", shade.opacity);
    println!();

    println!("--- Plant shadows ---");
    for s in &shade.plant_shadows {
        println!(
            "{:<12} {:>6.1} in toward {:>5.1}°",
            s.plant_id, s.shadow_length, s.shadow_angle
        );
    }
    println!();

    println!("--- Structure shadows ---");
    for s in &shade.structure_shadows {
        println!(
            "{:<12} segment {} {:>6.1} in",
            s.caster_id, s.segment_index, s.shadow_length
        );
    }
    println!();

    println!("--- Shaded now ---");
    for id in &shade.shaded_plants {
        println!("{}", id);
    }
    println!();

    let timeline = match generate_day_timeline(
        latitude,
        params.month,
        &garden,
        &config,
        &TimelineConfig::default(),
    ) {
        Ok(timeline) => timeline,
        Err(err) => {
            eprintln!("could not build timeline: {}", err);
            return;
        }
    };
    println!("--- Direct sun hours ---");
    for (id, hours) in sun_hours_by_plant(&timeline, &garden, &config) {
        println!("{:<12} {:>4.1} h", id, hours);
    }
}
