//! Proportional fill of the figure.
//!
//! A vertical boundary, the separator, sweeps from the left edge of the figure to the right one
//! as the goal is approached. Circles left of it are drawn in the achieved color, circles right
//! of it in the remaining color, and circles it passes through are cut along the vertical chord
//! at the separator. The cut follows the separator's position, not the share of area.

use {
  crate::{
    figure::{Bounds, Figure},
    geometry::{Circle, Segment},
    progress::{separator, Progress}
  },
  std::f64::consts::TAU
};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Classification {
  /// Entirely left of the separator.
  Filled,
  /// Entirely right of the separator.
  Unfilled,
  /// Crossed by the separator; the angle in `(0, π)` where the arcs meet.
  Split(f64)
}

/// Requires `circle.r > 0`.
pub fn classify(circle: &Circle, separator: f64) -> Classification {
  if circle.right() <= separator {
    Classification::Filled
  } else if circle.left() >= separator {
    Classification::Unfilled
  } else {
    Classification::Split(((separator - circle.center.x) / circle.r).acos())
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Fill {
  Achieved,
  Remaining
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DrawCommand {
  /// Full disc in one color.
  Disc { circle: Circle, fill: Fill },
  /// Arc `start → end` filled with `fills.0`, arc `end → start` with `fills.1`.
  Arcs { circle: Circle, start: f64, end: f64, fills: (Fill, Fill) }
}

impl DrawCommand {
  pub fn circle(&self) -> &Circle {
    match self {
      DrawCommand::Disc { circle, .. } | DrawCommand::Arcs { circle, .. } => circle
    }
  }

  /// Both halves of a split disc, in paint order.
  pub fn split_segments(&self) -> Option<[(Segment, Fill); 2]> {
    match *self {
      DrawCommand::Disc { .. } => None,
      DrawCommand::Arcs { circle, start, end, fills } => Some([
        (Segment { circle, start, end }, fills.0),
        (Segment { circle, start: end, end: start }, fills.1)
      ])
    }
  }
}

/// Draw commands for every circle of `figure`, in figure order.
pub fn render(figure: &Figure, progress: Progress, bounds: Bounds) -> Vec<DrawCommand> {
  let separator = separator(bounds, progress);
  log::trace!("separator at {separator} for {}/{}", progress.current(), progress.goal());
  figure.iter()
    .map(|&circle| match classify(&circle, separator) {
      Classification::Filled => DrawCommand::Disc { circle, fill: Fill::Achieved },
      Classification::Unfilled => DrawCommand::Disc { circle, fill: Fill::Remaining },
      Classification::Split(angle) => DrawCommand::Arcs {
        circle,
        start: angle,
        end: TAU - angle,
        fills: (Fill::Achieved, Fill::Remaining)
      }
    })
    .collect()
}
