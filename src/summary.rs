//! Message shown under the thermometer after a submission.

use {
  crate::progress::Progress,
  std::fmt
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Band {
  /// below 10%
  JustStarted,
  /// below 25%
  KeepItUp,
  /// below 50%
  GreatJob,
  /// below 75%
  PastHalfway,
  /// below 100%
  HomeStretch,
  GoalReached
}

impl Band {
  pub fn from_percent(percent: u32) -> Self {
    match percent {
      0..=9 => Band::JustStarted,
      10..=24 => Band::KeepItUp,
      25..=49 => Band::GreatJob,
      50..=74 => Band::PastHalfway,
      75..=99 => Band::HomeStretch,
      _ => Band::GoalReached
    }
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Summary {
  pub percent: u32,
  pub band: Band,
  pub current: u64,
  pub goal: u64
}

impl Summary {
  pub fn headline(&self) -> String {
    let percent = self.percent;
    match self.band {
      Band::JustStarted => "We're just getting started.".to_string(),
      Band::KeepItUp => format!("We're at {percent}% there. Keep it up!"),
      Band::GreatJob => format!("Great job fundraising. We're at {percent}% of our goal!"),
      Band::PastHalfway => format!("We've reached {percent}% our goal. Keep up the great work!"),
      Band::HomeStretch => format!("In the home stretch now. We are at {percent}% of our goal"),
      Band::GoalReached => "We've reached our goal!".to_string()
    }
  }

  pub fn raised(&self) -> String {
    format!("Raised {} of {}", self.current, self.goal)
  }
}

impl From<Progress> for Summary {
  fn from(progress: Progress) -> Self {
    let percent = progress.percent();
    Summary {
      percent,
      band: Band::from_percent(percent),
      current: progress.current(),
      goal: progress.goal()
    }
  }
}

impl fmt::Display for Summary {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}\n{}", self.headline(), self.raised())
  }
}
