//! One complete frame, independent of the surface it ends up on.

use {
  crate::{
    config::{Color, Palette},
    figure::Bounds,
    geometry::CanvasSpace,
    renderer::{DrawCommand, Fill}
  },
  euclid::Point2D
};

/// Milestone lines are drawn at every tenth of the goal.
pub const MILESTONES: u32 = 10;

/// Vertical milestone line.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Milestone {
  pub position: f64,
  pub percent: u32
}

impl Milestone {
  pub fn label(&self) -> String {
    format!("{}%", self.percent)
  }
}

/// Milestones at `0%, 10%, ..., 100%` of the bounds.
pub fn milestones(bounds: Bounds) -> Vec<Milestone> {
  (0..=MILESTONES)
    .map(|i| Milestone {
      position: bounds.min + (i as f64 / MILESTONES as f64 * bounds.span()).round(),
      percent: i * 100 / MILESTONES
    })
    .collect()
}

/// Text anchored at its baseline's left end.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
  pub text: String,
  pub baseline: Point2D<f64, CanvasSpace>,
  pub color: Color
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
  pub width: u32,
  pub height: u32,
  pub palette: Palette,
  /// Empty when the grid is hidden.
  pub milestones: Vec<Milestone>,
  pub commands: Vec<DrawCommand>,
  pub logo: bool
}

impl Scene {
  pub fn color(&self, fill: Fill) -> Color {
    match fill {
      Fill::Achieved => self.palette.achieved,
      Fill::Remaining => self.palette.remaining
    }
  }

  /// Percent labels under the milestone lines, each with a shadow in the achieved color.
  pub fn milestone_labels(&self) -> Vec<Label> {
    let bottom = self.height as f64;
    self.milestones.iter()
      .flat_map(|m| [
        Label {
          text: m.label(),
          baseline: Point2D::new(m.position + 3.0, bottom - 20.0),
          color: self.palette.achieved
        },
        Label {
          text: m.label(),
          baseline: Point2D::new(m.position, bottom - 23.0),
          color: Color::BLACK
        }
      ])
      .collect()
  }

  pub fn logo_labels(&self) -> Vec<Label> {
    if !self.logo {
      return vec![];
    }
    vec![
      Label { text: "UW".into(), baseline: Point2D::new(25.0, 22.0), color: Color::PURPLE },
      Label { text: "CK".into(), baseline: Point2D::new(0.0, 15.0), color: Color::GOLD }
    ]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn eleven_rounded_milestones() {
    let lines = milestones(Bounds { min: 210.0, max: 801.0 });
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], Milestone { position: 210.0, percent: 0 });
    // 59.1 rounds down, 295.5 rounds up
    assert_eq!(lines[1].position, 269.0);
    assert_eq!(lines[5].position, 506.0);
    assert_eq!(lines[10], Milestone { position: 801.0, percent: 100 });
    assert_eq!(lines[7].label(), "70%");
  }

  #[test] fn labels_follow_milestones() {
    let scene = Scene {
      width: 100,
      height: 300,
      palette: Palette::default(),
      milestones: milestones(Bounds { min: 0.0, max: 100.0 }),
      commands: vec![],
      logo: false
    };
    let labels = scene.milestone_labels();
    assert_eq!(labels.len(), 22);
    assert_eq!(labels[2].baseline, Point2D::new(13.0, 280.0));
    assert_eq!(labels[2].color, Palette::default().achieved);
    assert_eq!(labels[3].baseline, Point2D::new(10.0, 277.0));
    assert_eq!(labels[3].color, Color::BLACK);
    assert_eq!(labels[3].text, "10%");
    assert!(scene.logo_labels().is_empty());
    assert_eq!(Scene { logo: true, ..scene }.logo_labels().len(), 2);
  }
}
