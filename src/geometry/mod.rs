//! .
//!
//! The origin of coordinate system is in top-left corner of the drawing surface, `y` grows
//! downwards and one unit is one pixel. Angles follow the surface convention: zero along the
//! positive `x` axis, increasing towards positive `y`.

use {
  euclid::Box2D,
  crate::sdf::SDF
};

pub mod shapes;
pub use shapes::*;

/// Canvas pixel coordinate basis
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasSpace;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// Something inside a rectangular area.
pub trait Shape: SDF<f64> + BoundingBox<f64, CanvasSpace> {
  #[cfg(feature = "drawing")]
  #[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
  fn texture<P>(self, paint: P) -> crate::drawing::Texture<Self, P> where Self: Sized {
    crate::drawing::Texture { shape: self, paint }
  }
}
impl <T> Shape for T where T: SDF<f64> + BoundingBox<f64, CanvasSpace> {}
