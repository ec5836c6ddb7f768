use {
  super::{BoundingBox, CanvasSpace},
  crate::sdf::{HalfPlane, Intersection, SDF},
  euclid::{Box2D, Point2D, Vector2D as V2},
  serde::Deserialize,
  std::f64::consts::TAU
};

/// Disc with a center and a radius, in canvas pixels.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(from = "CircleRecord")]
pub struct Circle {
  pub center: Point2D<f64, CanvasSpace>,
  pub r: f64
}

#[derive(Deserialize)]
struct CircleRecord { x: f64, y: f64, r: f64 }

impl From<CircleRecord> for Circle {
  fn from(CircleRecord { x, y, r }: CircleRecord) -> Self { Circle::new(x, y, r) }
}

impl Circle {
  pub const fn new(x: f64, y: f64, r: f64) -> Self {
    Circle { center: Point2D::new(x, y), r }
  }
  /// Leftmost `x` covered by the disc.
  pub fn left(&self) -> f64 { self.center.x - self.r }
  /// Rightmost `x` covered by the disc.
  pub fn right(&self) -> f64 { self.center.x + self.r }
  /// Point on the circumference at `angle` radians.
  pub fn point_at(&self, angle: f64) -> Point2D<f64, CanvasSpace> {
    self.center + V2::new(angle.cos(), angle.sin()) * self.r
  }
}

impl BoundingBox<f64, CanvasSpace> for Circle {
  fn bounding_box(&self) -> Box2D<f64, CanvasSpace> {
    Box2D::new(
      self.center - V2::splat(self.r),
      self.center + V2::splat(self.r)
    )}}

impl SDF<f64> for Circle {
  fn sdf(&self, pixel: Point2D<f64, CanvasSpace>) -> f64 {
    (pixel - self.center).length() - self.r
  }
}

/// Region closed by an arc and its chord: what filling the path of a single arc yields.
/// The arc sweeps from `start` to `end` in the direction of increasing angle, wrapping at 2π.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
  pub circle: Circle,
  pub start: f64,
  pub end: f64
}

impl Segment {
  /// Angle covered by the arc, in `[0, 2π)`.
  pub fn sweep(&self) -> f64 {
    (self.end - self.start).rem_euclid(TAU)
  }
}

impl BoundingBox<f64, CanvasSpace> for Segment {
  fn bounding_box(&self) -> Box2D<f64, CanvasSpace> { self.circle.bounding_box() }
}

impl SDF<f64> for Segment {
  fn sdf(&self, pixel: Point2D<f64, CanvasSpace>) -> f64 {
    let middle = self.circle.point_at(self.start + self.sweep() / 2.0);
    match HalfPlane::through(self.circle.point_at(self.start), self.circle.point_at(self.end), middle) {
      Some(chord) => Intersection { s1: self.circle, s2: chord }.sdf(pixel),
      // zero sweep: nothing enclosed
      None => f64::INFINITY
    }
  }
}

/// Axis-aligned rectangle
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect(pub Box2D<f64, CanvasSpace>);

impl Rect {
  pub fn new(min: Point2D<f64, CanvasSpace>, max: Point2D<f64, CanvasSpace>) -> Self {
    Rect(Box2D::new(min, max))
  }
}

impl BoundingBox<f64, CanvasSpace> for Rect {
  fn bounding_box(&self) -> Box2D<f64, CanvasSpace> { self.0 }
}

impl SDF<f64> for Rect {
  fn sdf(&self, pixel: Point2D<f64, CanvasSpace>) -> f64 {
    let half = (self.0.max - self.0.min) / 2.0;
    let dist = (pixel - self.0.center()).abs() - half;
    let outside_dist = dist
      .max(V2::splat(0.0))
      .length();
    let inside_dist = dist.x
      .max(dist.y)
      .min(0.0);
    outside_dist + inside_dist
  }
}
