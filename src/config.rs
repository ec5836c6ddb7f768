//! Static configuration: surface size, colors, display flags and the figure.
//!
//! Loaded from TOML. Every section is optional:
//! ```toml
//! [surface]
//! width = 1000
//! height = 300
//!
//! [palette]
//! achieved = "orange"
//! remaining = "#ffffff"
//! gradient = ["#4b2e83", "#b7a57a"]
//!
//! [display]
//! grid = true
//! logo = true
//!
//! [[circles]]
//! x = 742
//! y = 148
//! r = 59
//! ```

use {
  crate::{
    error::{Error, Result},
    figure::Figure,
    geometry::Circle
  },
  serde::Deserialize,
  std::{fs, path::Path, str::FromStr}
};

/// Straight RGBA color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color(pub [u8; 4]);

impl Color {
  pub const BLACK: Color = Color([0, 0, 0, 255]);
  pub const WHITE: Color = Color([255, 255, 255, 255]);
  pub const PURPLE: Color = Color([128, 0, 128, 255]);
  pub const GOLD: Color = Color([255, 215, 0, 255]);
  pub const ORANGE: Color = Color([255, 165, 0, 255]);
}

impl FromStr for Color {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let invalid = || Error::InvalidColor(s.to_string());
    match s.trim().to_ascii_lowercase().as_str() {
      "black" => return Ok(Color::BLACK),
      "white" => return Ok(Color::WHITE),
      "purple" => return Ok(Color::PURPLE),
      "gold" => return Ok(Color::GOLD),
      "orange" => return Ok(Color::ORANGE),
      _ => {}
    }
    let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !hex.is_ascii() {
      return Err(invalid());
    }
    let digit = |i: usize, len: usize| u8::from_str_radix(&hex[i..i + len], 16).map_err(|_| invalid());
    match hex.len() {
      3 => {
        let [r, g, b] = [digit(0, 1)?, digit(1, 1)?, digit(2, 1)?];
        Ok(Color([r * 17, g * 17, b * 17, 255]))
      }
      6 => Ok(Color([digit(0, 2)?, digit(2, 2)?, digit(4, 2)?, 255])),
      8 => Ok(Color([digit(0, 2)?, digit(2, 2)?, digit(4, 2)?, digit(6, 2)?])),
      _ => Err(invalid())
    }
  }
}

impl TryFrom<String> for Color {
  type Error = Error;
  fn try_from(s: String) -> Result<Self> { s.parse() }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Surface {
  pub width: u32,
  pub height: u32
}

impl Default for Surface {
  fn default() -> Self {
    Surface { width: 1000, height: 300 }
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Palette {
  /// Part of the figure already raised.
  pub achieved: Color,
  /// Part of the figure still to go.
  pub remaining: Color,
  /// Background, left to right.
  pub gradient: [Color; 2]
}

impl Default for Palette {
  fn default() -> Self {
    Palette {
      achieved: Color::ORANGE,
      remaining: Color::WHITE,
      gradient: [Color([0x4b, 0x2e, 0x83, 255]), Color([0xb7, 0xa5, 0x7a, 255])]
    }
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
  /// Start with milestone lines shown.
  pub grid: bool,
  pub logo: bool
}

impl Default for DisplayOptions {
  fn default() -> Self {
    DisplayOptions { grid: true, logo: true }
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
  pub surface: Surface,
  pub palette: Palette,
  pub display: DisplayOptions,
  pub circles: Vec<Circle>
}

impl Default for Config {
  fn default() -> Self {
    Config {
      surface: Surface::default(),
      palette: Palette::default(),
      display: DisplayOptions::default(),
      circles: Figure::caterpillar().circles().to_vec()
    }
  }
}

impl Config {
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    log::debug!("loading configuration from {}", path.display());
    fs::read_to_string(path)?.parse()
  }

  /// The configured circles, validated.
  pub fn figure(&self) -> Result<Figure> {
    Figure::new(self.circles.clone())
  }
}

impl FromStr for Config {
  type Err = Error;
  fn from_str(s: &str) -> Result<Self> {
    Ok(toml::from_str(s)?)
  }
}
