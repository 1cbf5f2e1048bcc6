//! Plane geometry shared by shadow projection and shade detection.
//!
//! Coordinates follow the garden plan: `x` east, `y` south, so compass
//! bearing 0° (North) is `-y` and 90° (East) is `+x`.

use crate::angles::deg_to_rad;
use crate::types::{Point2, Quadrilateral, Segment};

const EPSILON: f64 = 1e-9;

/// Unit vector pointing along a compass bearing.
pub fn bearing_vector(bearing: f64) -> Point2 {
    let rad = deg_to_rad(bearing);
    Point2::new(rad.sin(), -rad.cos())
}

/// Rotates `point` clockwise (as seen on the plan) by `degrees` about `center`.
pub fn rotate_about(point: Point2, center: Point2, degrees: f64) -> Point2 {
    let (sin, cos) = deg_to_rad(degrees).sin_cos();
    let d = point - center;
    Point2::new(
        center.x + d.x * cos - d.y * sin,
        center.y + d.x * sin + d.y * cos,
    )
}

/// Approximates a circle by `segments` vertices evenly spaced by angle,
/// starting due east of the centre and running counter-clockwise as drawn
/// on the plan (east, then north, then west).
pub fn polygonize_circle(center: Point2, radius: f64, segments: usize) -> Vec<Point2> {
    let step = std::f64::consts::TAU / segments as f64;
    (0..segments)
        .map(|i| {
            let (sin, cos) = (i as f64 * step).sin_cos();
            Point2::new(center.x + radius * cos, center.y - radius * sin)
        })
        .collect()
}

/// Edges of the closed polygon through `vertices`, last vertex joined to the first.
pub fn polygon_segments(vertices: &[Point2]) -> Vec<Segment> {
    if vertices.len() < 2 {
        return Vec::new();
    }
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(&a, &b)| Segment::new(a, b))
        .collect()
}

/// Edges of the open polyline through `vertices`.
pub fn polyline_segments(vertices: &[Point2]) -> Vec<Segment> {
    vertices
        .windows(2)
        .map(|pair| Segment::new(pair[0], pair[1]))
        .collect()
}

/// Whether a wall edge casts shadow away from the polygon.
///
/// The outward normal is whichever perpendicular points from `interior`
/// towards the edge midpoint. The edge casts when that normal faces away
/// from the sun. Zero-length edges, and edges lying along the sun's bearing,
/// never cast.
pub fn is_segment_sun_facing(start: Point2, end: Point2, sun_azimuth: f64, interior: Point2) -> bool {
    let direction = end - start;
    let length = direction.length();
    if length < EPSILON {
        return false;
    }
    let normal = Point2::new(-direction.y / length, direction.x / length);
    let to_mid = Segment::new(start, end).midpoint() - interior;
    let outward = if normal.dot(to_mid) >= 0.0 {
        normal
    } else {
        normal * -1.0
    };
    outward.dot(bearing_vector(sun_azimuth)) < -EPSILON
}

fn twice_signed_area(vertices: &[Point2; 4]) -> f64 {
    (0..4)
        .map(|i| vertices[i].cross(vertices[(i + 1) % 4]))
        .sum()
}

/// Same-sign cross product test against all four edges. Collapsed
/// quadrilaterals (zero-length shadows) contain nothing.
pub fn point_in_quadrilateral(point: Point2, quad: &Quadrilateral) -> bool {
    let vertices = quad.vertices();
    if twice_signed_area(&vertices).abs() < EPSILON {
        return false;
    }
    let mut has_positive = false;
    let mut has_negative = false;
    for i in 0..4 {
        let a = vertices[i];
        let b = vertices[(i + 1) % 4];
        let cross = (b - a).cross(point - a);
        if cross > 0.0 {
            has_positive = true;
        } else if cross < 0.0 {
            has_negative = true;
        }
        if has_positive && has_negative {
            return false;
        }
    }
    true
}

/// Distance from `point` to the nearest point of `segment`.
pub fn distance_to_segment(point: Point2, segment: &Segment) -> f64 {
    let direction = segment.end - segment.start;
    let length_sq = direction.dot(direction);
    if length_sq < EPSILON {
        return point.distance(segment.start);
    }
    let t = ((point - segment.start).dot(direction) / length_sq).clamp(0.0, 1.0);
    point.distance(segment.start + direction * t)
}
