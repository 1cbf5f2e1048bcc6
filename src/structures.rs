//! Converts layout entities (positions in inches, sizes in feet) into the
//! inch-only wall segments the shading pass works on.

use log::trace;

use crate::config::ShadeConfig;
use crate::geometry::{polygon_segments, polygonize_circle, polyline_segments, rotate_about};
use crate::types::{
    BedInput, BedShape, FenceInput, GardenSnapshot, PlantForShadow, Point2, Segment,
    StructureForShading, StructureKind,
};

pub const INCHES_PER_FOOT: f64 = 12.0;

/// Segments this short are walls of no width and never cast.
pub const MIN_SEGMENT_LENGTH: f64 = 1e-6;

/// Whether any wall segment has length. Zero-length segments stay in the
/// list so segment indices keep matching the caller's vertex pairs.
fn has_wall(id: &str, segments: &[Segment]) -> bool {
    let degenerate = segments
        .iter()
        .filter(|s| s.length() <= MIN_SEGMENT_LENGTH)
        .count();
    if degenerate > 0 {
        trace!("{id}: {degenerate} zero-length segment(s) will cast nothing");
    }
    degenerate < segments.len()
}

/// Centre and wall outline of a bed, or `None` for a zero-size footprint.
pub fn bed_outline(bed: &BedInput, config: &ShadeConfig) -> Option<(Point2, Vec<Point2>)> {
    match bed.shape {
        BedShape::Rect => {
            let width = bed.width_feet * INCHES_PER_FOOT;
            let length = bed.height_feet.unwrap_or(bed.width_feet) * INCHES_PER_FOOT;
            if width <= 0.0 || length <= 0.0 {
                return None;
            }
            let center = Point2::new(bed.x + width / 2.0, bed.y + length / 2.0);
            let corners = [
                Point2::new(bed.x, bed.y),
                Point2::new(bed.x + width, bed.y),
                Point2::new(bed.x + width, bed.y + length),
                Point2::new(bed.x, bed.y + length),
            ];
            let rotation = bed.rotation.unwrap_or(0.0);
            let outline = corners
                .iter()
                .map(|&c| {
                    if rotation == 0.0 {
                        c
                    } else {
                        rotate_about(c, center, rotation)
                    }
                })
                .collect();
            Some((center, outline))
        }
        BedShape::Circle => {
            let radius = bed.width_feet * INCHES_PER_FOOT / 2.0;
            if radius <= 0.0 {
                return None;
            }
            let center = Point2::new(bed.x + radius, bed.y + radius);
            Some((center, polygonize_circle(center, radius, config.circle_segments)))
        }
    }
}

pub fn bed_structure(bed: &BedInput, config: &ShadeConfig) -> Option<StructureForShading> {
    let height_inches = bed.raised_wall_height_feet * INCHES_PER_FOOT;
    if height_inches <= 0.0 {
        return None;
    }
    let (center, outline) = bed_outline(bed, config)?;
    let segments = polygon_segments(&outline);
    if !has_wall(&bed.id, &segments) {
        return None;
    }
    Some(StructureForShading {
        kind: StructureKind::Bed { interior: center },
        id: bed.id.clone(),
        segments,
        height_inches,
    })
}

pub fn fence_structure(fence: &FenceInput) -> Option<StructureForShading> {
    let height_inches = fence.height_feet * INCHES_PER_FOOT;
    if height_inches <= 0.0 {
        return None;
    }
    let segments = polyline_segments(&fence.vertices);
    if !has_wall(&fence.id, &segments) {
        return None;
    }
    Some(StructureForShading {
        kind: StructureKind::Fence,
        id: fence.id.clone(),
        segments,
        height_inches,
    })
}

/// Every bed and fence in the snapshot that can cast a shadow, fences first.
pub fn structures_from_snapshot(
    snapshot: &GardenSnapshot,
    config: &ShadeConfig,
) -> Vec<StructureForShading> {
    snapshot
        .fences
        .iter()
        .filter_map(fence_structure)
        .chain(snapshot.beds.iter().filter_map(|bed| bed_structure(bed, config)))
        .collect()
}

pub fn plants_from_snapshot(snapshot: &GardenSnapshot) -> Vec<PlantForShadow> {
    snapshot.plants.iter().map(PlantForShadow::from).collect()
}
