use {
  euclid::{Point2D, Vector2D as V2},
  num_traits::Float,
  crate::geometry::CanvasSpace
};

/// Signed distance function. Negative inside, positive outside, in canvas pixels.
pub trait SDF<T> {
  fn sdf(&self, pixel: Point2D<T, CanvasSpace>) -> T;
}

/// Everything on one side of a line.
/// `normal` is a unit vector pointing away from the inside.
#[derive(Debug, Copy, Clone)]
pub struct HalfPlane<T> {
  pub origin: Point2D<T, CanvasSpace>,
  pub normal: V2<T, CanvasSpace>
}

impl<T: Float> HalfPlane<T> {
  /// Half-plane bounded by the line through `a` and `b`, containing `inside`.
  /// Returns `None` when `a` and `b` coincide.
  pub fn through(
    a: Point2D<T, CanvasSpace>,
    b: Point2D<T, CanvasSpace>,
    inside: Point2D<T, CanvasSpace>
  ) -> Option<Self> {
    let d = b - a;
    let length = d.length();
    if length <= T::epsilon() {
      return None;
    }
    let mut normal = V2::new(-d.y, d.x) / length;
    if (inside - a).dot(normal) > T::zero() {
      normal = -normal;
    }
    Some(Self { origin: a, normal })
  }
}

impl<T: Float> SDF<T> for HalfPlane<T> {
  fn sdf(&self, pixel: Point2D<T, CanvasSpace>) -> T {
    (pixel - self.origin).dot(self.normal)
  }
}

/// Intersection of two SDFs.
#[derive(Clone, Copy, Debug)]
pub struct Intersection<S1, S2> {
  pub s1: S1,
  pub s2: S2,
}

impl<T, S1, S2> SDF<T> for Intersection<S1, S2>
  where T: Float,
        S1: SDF<T>,
        S2: SDF<T> {
  fn sdf(&self, pixel: Point2D<T, CanvasSpace>) -> T {
    self.s1.sdf(pixel).max(self.s2.sdf(pixel))
  }}
