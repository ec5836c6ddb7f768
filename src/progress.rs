//! Amount raised against the fundraising goal.

use crate::{
  error::InvalidProgress,
  figure::Bounds
};

/// Validated `(current, goal)` pair: `0 <= current <= goal` and `goal > 0`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Progress {
  current: u64,
  goal: u64
}

impl Progress {
  /// What the surface shows before anything was submitted.
  pub const INITIAL: Progress = Progress { current: 0, goal: 1000 };

  pub fn new(current: i64, goal: i64) -> Result<Self, InvalidProgress> {
    if current < 0 {
      return Err(InvalidProgress::NegativeCurrent(current));
    }
    if goal <= 0 {
      return Err(InvalidProgress::NonPositiveGoal(goal));
    }
    if current > goal {
      return Err(InvalidProgress::ExceedsGoal { current, goal });
    }
    Ok(Progress { current: current as u64, goal: goal as u64 })
  }

  /// Parse the two form fields.
  pub fn parse(current: &str, goal: &str) -> Result<Self, InvalidProgress> {
    Self::new(parse_amount(current)?, parse_amount(goal)?)
  }

  pub fn current(&self) -> u64 { self.current }
  pub fn goal(&self) -> u64 { self.goal }

  /// Fraction of the goal reached, in `[0, 1]`.
  pub fn ratio(&self) -> f64 {
    self.current as f64 / self.goal as f64
  }

  /// Rounded percentage of the goal reached.
  pub fn percent(&self) -> u32 {
    (self.ratio() * 100.0).round() as u32
  }
}

impl Default for Progress {
  fn default() -> Self { Progress::INITIAL }
}

/// Leading integer of `text`: an optional sign and the ASCII digits after it.
/// Whatever follows the digits is ignored, so `"250.75"` reads as 250.
fn parse_amount(text: &str) -> Result<i64, InvalidProgress> {
  let trimmed = text.trim_start();
  let sign = usize::from(trimmed.starts_with(|c| c == '+' || c == '-'));
  let digits = trimmed[sign..].bytes()
    .take_while(u8::is_ascii_digit)
    .count();
  trimmed[..sign + digits].parse::<i64>()
    .map_err(|_| InvalidProgress::NotAnInteger(text.to_string()))
}

/// Horizontal position up to which the figure counts as achieved.
pub fn separator(bounds: Bounds, progress: Progress) -> f64 {
  bounds.min + (bounds.span() * progress.current as f64 / progress.goal as f64).round()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn accepts_valid_amounts() {
    let p = Progress::parse(" 250 ", "1000").unwrap();
    assert_eq!((p.current(), p.goal()), (250, 1000));
    assert_eq!(p.percent(), 25);
    assert_eq!(Progress::parse("0", "1").unwrap().percent(), 0);
    assert_eq!(Progress::parse("7", "7").unwrap().percent(), 100);
    assert_eq!(Progress::parse("+3", "4").unwrap(), Progress::new(3, 4).unwrap());
  }

  #[test] fn trailing_text_after_digits_is_ignored() {
    assert_eq!(Progress::parse("250.75", "1000").unwrap(), Progress::new(250, 1000).unwrap());
    assert_eq!(Progress::parse("12abc", "100").unwrap(), Progress::new(12, 100).unwrap());
    assert_eq!(Progress::parse("1.5", "10").unwrap(), Progress::new(1, 10).unwrap());
    assert_eq!(Progress::parse("1,000", "5000").unwrap(), Progress::new(1, 5000).unwrap());
    assert_eq!(Progress::parse("5", "10 dollars").unwrap(), Progress::new(5, 10).unwrap());
    assert_eq!(Progress::parse("-2.5", "10"), Err(InvalidProgress::NegativeCurrent(-2)));
  }

  #[test] fn rejects_invalid_amounts() {
    assert_eq!(Progress::parse("-1", "10"), Err(InvalidProgress::NegativeCurrent(-1)));
    assert_eq!(Progress::parse("5", "0"), Err(InvalidProgress::NonPositiveGoal(0)));
    assert_eq!(Progress::parse("5", "-3"), Err(InvalidProgress::NonPositiveGoal(-3)));
    assert_eq!(Progress::parse("20", "10"), Err(InvalidProgress::ExceedsGoal { current: 20, goal: 10 }));
    assert_eq!(Progress::parse("lots", "10"), Err(InvalidProgress::NotAnInteger("lots".into())));
    assert_eq!(Progress::parse("5", ""), Err(InvalidProgress::NotAnInteger("".into())));
    assert_eq!(Progress::parse("-", "10"), Err(InvalidProgress::NotAnInteger("-".into())));
    assert_eq!(Progress::parse(".5", "10"), Err(InvalidProgress::NotAnInteger(".5".into())));
    assert_eq!(Progress::parse("5", "$10"), Err(InvalidProgress::NotAnInteger("$10".into())));
  }

  #[test] fn percent_rounds_half_up() {
    assert_eq!(Progress::new(1, 8).unwrap().percent(), 13); // 12.5
    assert_eq!(Progress::new(3, 8).unwrap().percent(), 38); // 37.5
    assert_eq!(Progress::new(1, 3).unwrap().percent(), 33);
  }

  #[test] fn separator_spans_the_bounds() {
    let bounds = Bounds { min: 90.0, max: 110.0 };
    assert_eq!(separator(bounds, Progress::new(0, 100).unwrap()), 90.0);
    assert_eq!(separator(bounds, Progress::new(50, 100).unwrap()), 100.0);
    assert_eq!(separator(bounds, Progress::new(100, 100).unwrap()), 110.0);
    // 20 * 1 / 3 = 6.67
    assert_eq!(separator(bounds, Progress::new(1, 3).unwrap()), 97.0);
  }

  #[test] fn initial_progress_is_empty() {
    assert_eq!(Progress::default(), Progress::INITIAL);
    assert_eq!(Progress::INITIAL.percent(), 0);
  }
}
