//! The fixed, ordered set of circles the thermometer is made of.

use {
  crate::{
    error::{Error, Result},
    geometry::Circle
  },
  std::ops::Deref
};

/// Non-empty ordered list of circles with positive radii.
/// Order is draw order: later circles cover earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure(Vec<Circle>);

impl Figure {
  pub fn new(circles: Vec<Circle>) -> Result<Self> {
    if circles.is_empty() {
      return Err(Error::InvalidFigure("at least one circle is required".into()));
    }
    if let Some((i, c)) = circles.iter().enumerate()
      .find(|(_, c)| !(c.r > 0.0 && c.r.is_finite() && c.center.x.is_finite() && c.center.y.is_finite()))
    {
      return Err(Error::InvalidFigure(format!(
        "circle #{i} at ({}, {}) with radius {} is not drawable", c.center.x, c.center.y, c.r
      )));
    }
    Ok(Figure(circles))
  }

  /// The caterpillar: head, body, tail, back legs, front legs and antennae.
  pub fn caterpillar() -> Self {
    Figure(CATERPILLAR.to_vec())
  }

  pub fn circles(&self) -> &[Circle] { &self.0 }

  pub fn bounds(&self, surface_width: f64) -> Bounds {
    compute_bounds(self, surface_width)
  }
}

impl Deref for Figure {
  type Target = [Circle];
  fn deref(&self) -> &[Circle] { &self.0 }
}

const CATERPILLAR: [Circle; 23] = [
  // head
  Circle::new(742.0, 148.0, 59.0),
  // body
  Circle::new(670.0, 180.0, 45.0),
  Circle::new(595.0, 150.0, 50.0),
  Circle::new(515.0, 114.0, 63.0),
  Circle::new(435.0, 125.0, 50.0),
  Circle::new(360.0, 157.0, 43.0),
  Circle::new(304.0, 185.0, 35.0),
  // tail
  Circle::new(240.0, 185.0, 30.0),
  // back legs
  Circle::new(262.0, 225.0, 5.0),
  Circle::new(280.0, 235.0, 7.0),
  Circle::new(302.0, 240.0, 7.0),
  Circle::new(325.0, 235.0, 7.0),
  // front legs
  Circle::new(644.0, 235.0, 7.0),
  Circle::new(667.0, 240.0, 7.0),
  Circle::new(687.0, 235.0, 7.0),
  // antennae
  Circle::new(720.0, 50.0, 15.0),
  Circle::new(705.0, 63.0, 5.0),
  Circle::new(703.0, 78.0, 5.0),
  Circle::new(708.0, 93.0, 5.0),
  Circle::new(770.0, 50.0, 15.0),
  Circle::new(755.0, 63.0, 5.0),
  Circle::new(748.0, 75.0, 5.0),
  Circle::new(758.0, 85.0, 5.0),
];

/// Horizontal extent of a figure, clamped to the drawing surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
  pub min: f64,
  pub max: f64
}

impl Bounds {
  pub fn span(&self) -> f64 { self.max - self.min }
}

/// Tightest `[min, max]` covering every circle, clamped to `[0, surface_width]`.
pub fn compute_bounds(circles: &[Circle], surface_width: f64) -> Bounds {
  let (min, max) = circles.iter()
    .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), c| {
      (min.min(c.left()), max.max(c.right()))
    });
  Bounds {
    min: min.max(0.0),
    max: max.min(surface_width)
  }
}
