//! State of one drawing surface across user actions.

use {
  crate::{
    config::{Config, Palette},
    error::Result,
    figure::{Bounds, Figure},
    progress::Progress,
    renderer::render,
    scene::{milestones, Scene},
    summary::Summary
  }
};

/// Everything needed to redraw one surface. Bounds are computed once, at construction.
#[derive(Debug, Clone)]
pub struct Session {
  figure: Figure,
  palette: Palette,
  width: u32,
  height: u32,
  bounds: Bounds,
  grid: bool,
  logo: bool,
  progress: Progress
}

impl Session {
  pub fn new(config: &Config) -> Result<Self> {
    let figure = config.figure()?;
    let bounds = figure.bounds(config.surface.width as f64);
    log::debug!(
      "{} circles span [{}, {}] on a {}x{} surface",
      figure.len(), bounds.min, bounds.max, config.surface.width, config.surface.height
    );
    Ok(Session {
      figure,
      palette: config.palette,
      width: config.surface.width,
      height: config.surface.height,
      bounds,
      grid: config.display.grid,
      logo: config.display.logo,
      progress: Progress::INITIAL
    })
  }

  pub fn bounds(&self) -> Bounds { self.bounds }
  pub fn grid_visible(&self) -> bool { self.grid }
  /// Last accepted progress.
  pub fn progress(&self) -> Progress { self.progress }

  /// Validate the form values and, if they hold, make them the current progress.
  /// A rejected submission leaves the session as it was.
  pub fn submit(&mut self, current: &str, goal: &str) -> Result<Summary> {
    let progress = Progress::parse(current, goal).map_err(|e| {
      log::warn!("rejected amounts {current:?} / {goal:?}: {e}");
      e
    })?;
    self.progress = progress;
    log::debug!("progress is now {}/{}", progress.current(), progress.goal());
    Ok(progress.into())
  }

  /// Flip the milestone grid and redraw with the last accepted progress.
  pub fn toggle_grid(&mut self) -> Scene {
    self.grid = !self.grid;
    log::debug!("grid {}", if self.grid { "shown" } else { "hidden" });
    self.scene()
  }

  pub fn scene(&self) -> Scene {
    Scene {
      width: self.width,
      height: self.height,
      palette: self.palette,
      milestones: if self.grid { milestones(self.bounds) } else { vec![] },
      commands: render(&self.figure, self.progress, self.bounds),
      logo: self.logo
    }
  }
}
