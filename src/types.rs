use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A point on the garden plan, in inches. `x` grows east, `y` grows south.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Point2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z component of the 3-D cross product.
    pub fn cross(self, other: Point2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Point2) -> f64 {
        (self - other).length()
    }
}

impl Add for Point2 {
    type Output = Point2;

    fn add(self, other: Point2) -> Point2 {
        Point2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point2 {
    type Output = Point2;

    fn sub(self, other: Point2) -> Point2 {
        Point2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Point2 {
    type Output = Point2;

    fn mul(self, factor: f64) -> Point2 {
        Point2::new(self.x * factor, self.y * factor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    pub const fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    pub fn midpoint(&self) -> Point2 {
        (self.start + self.end) * 0.5
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunPosition {
    /// Degrees above the horizon.
    pub altitude: f64,
    /// Compass bearing in [0, 360), 0 = North, 90 = East.
    pub azimuth: f64,
    /// Authoritative even when `altitude` is marginally positive.
    pub is_night: bool,
}

impl SunPosition {
    pub const NIGHT: SunPosition = SunPosition {
        altitude: 0.0,
        azimuth: 0.0,
        is_night: true,
    };
}

/// The three scalar controls plus the on/off switch supplied by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunParameters {
    pub enabled: bool,
    pub latitude: f64,
    /// Continuous month in [0, 12): 0.0 = start of January, 6.5 = mid July.
    pub month: f64,
    /// 0 = sunrise, 0.5 = solar noon, 1 = sunset.
    pub time_of_day: f64,
}

impl Default for SunParameters {
    fn default() -> Self {
        Self {
            enabled: false,
            latitude: 40.0,
            month: 5.5,
            time_of_day: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantForShadow {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub height_max: f64,
}

impl PlantForShadow {
    pub fn position(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StructureKind {
    /// Thin two-sided wall; every segment casts.
    Fence,
    /// Closed wall around `interior`; only sun-facing segments cast.
    Bed { interior: Point2 },
}

/// Fences and bed walls reduced to one shape: a list of wall segments of a
/// single height, in inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureForShading {
    pub kind: StructureKind,
    pub id: String,
    pub segments: Vec<Segment>,
    pub height_inches: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowData {
    pub plant_id: String,
    pub origin_x: f64,
    pub origin_y: f64,
    pub shadow_length: f64,
    /// Degrees from north, the direction the shadow points.
    pub shadow_angle: f64,
    pub end_x: f64,
    pub end_y: f64,
    pub height_max: f64,
}

/// `p1`, `p2` are the wall segment; `p3`, `p4` the same points pushed along
/// the shadow offset, so the vertices wind p1 → p2 → p3 → p4.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quadrilateral {
    pub p1: Point2,
    pub p2: Point2,
    pub p3: Point2,
    pub p4: Point2,
}

impl Quadrilateral {
    pub fn vertices(&self) -> [Point2; 4] {
        [self.p1, self.p2, self.p3, self.p4]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FenceShadowData {
    pub caster_id: String,
    pub segment_index: usize,
    pub quadrilateral: Quadrilateral,
    pub shadow_length: f64,
    pub shadow_angle: f64,
}

// ── Caller-facing entity inputs ──

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantInput {
    pub id: String,
    /// Absolute field position, inches.
    pub x: f64,
    pub y: f64,
    /// Mature height, inches.
    pub height_max: f64,
}

impl From<&PlantInput> for PlantForShadow {
    fn from(plant: &PlantInput) -> Self {
        PlantForShadow {
            id: plant.id.clone(),
            x: plant.x,
            y: plant.y,
            height_max: plant.height_max,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BedShape {
    Rect,
    Circle,
}

/// A raised bed as the layout stores it. `x`, `y` is the top-left corner of
/// the unrotated footprint (its bounding square for circles), in inches;
/// dimensions are in feet. A circle's diameter is `width_feet`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BedInput {
    pub id: String,
    pub shape: BedShape,
    pub x: f64,
    pub y: f64,
    pub width_feet: f64,
    #[serde(default)]
    pub height_feet: Option<f64>,
    /// Clockwise degrees about the bed centre.
    #[serde(default)]
    pub rotation: Option<f64>,
    pub raised_wall_height_feet: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FenceInput {
    pub id: String,
    /// Ordered polyline, inches.
    pub vertices: Vec<Point2>,
    pub height_feet: f64,
}

/// Immutable view of the garden handed to each recomputation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GardenSnapshot {
    #[serde(default)]
    pub plants: Vec<PlantInput>,
    #[serde(default)]
    pub beds: Vec<BedInput>,
    #[serde(default)]
    pub fences: Vec<FenceInput>,
}
