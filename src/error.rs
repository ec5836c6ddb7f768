//! Errors of this crate.
//!
//! Only [`Error::InvalidProgress`] can happen while the widget is running; everything else is
//! raised while loading configuration or writing the exported image.

/// Why a pair of form values was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidProgress {
  #[error("`{0}` is not an integer")]
  NotAnInteger(String),
  #[error("current amount {0} is negative")]
  NegativeCurrent(i64),
  #[error("goal {0} must be greater than zero")]
  NonPositiveGoal(i64),
  #[error("current amount {current} exceeds the goal of {goal}")]
  ExceedsGoal { current: i64, goal: i64 },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("please put in valid amounts: {0}")]
  InvalidProgress(#[from] InvalidProgress),
  #[error("invalid figure: {0}")]
  InvalidFigure(String),
  #[error("invalid color `{0}`")]
  InvalidColor(String),
  #[error("malformed configuration: {0}")]
  Config(#[from] toml::de::Error),
  #[error(transparent)]
  Io(#[from] std::io::Error),
  #[cfg(feature = "drawing")]
  #[error(transparent)]
  Image(#[from] image::ImageError),
}

impl Error {
  /// Rejections of user input, as opposed to configuration or I/O failures.
  pub fn is_user_error(&self) -> bool {
    matches!(self, Error::InvalidProgress(_))
  }
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = ::std::result::Result<T, Error>;
