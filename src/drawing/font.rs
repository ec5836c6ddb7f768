//! Tiny 5x7 bitmap font, enough for percent labels and the logo.

use {
  euclid::{Point2D, Vector2D as V2},
  image::RgbaImage,
  crate::{
    config::Color,
    drawing::Draw,
    geometry::{CanvasSpace, Rect, Shape}
  }
};

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Size of one glyph cell in pixels; 7 rows of 2 match the cap height of 20px text.
pub const SCALE: f64 = 2.0;

/// Rows top to bottom, the low 5 bits of each are the pixels (bit 4 = leftmost).
pub fn glyph(ch: char) -> Option<[u8; 7]> {
  macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
    Some([$a,$b,$c,$d,$e,$f,$g])
  }; }

  match ch {
    '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
    '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
    '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
    '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
    '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
    '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
    '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
    '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
    '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
    '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),
    '%' => g!(0b11001,0b11010,0b00010,0b00100,0b01000,0b01011,0b10011),
    'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
    'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
    'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
    'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
    ' ' => g!(0,0,0,0,0,0,0),
    _ => None
  }
}

/// Distance from the baseline to the top of a glyph.
pub fn height() -> f64 {
  GLYPH_HEIGHT as f64 * SCALE
}

/// Horizontal distance between the origins of two consecutive glyphs.
pub fn advance() -> f64 {
  (GLYPH_WIDTH + 1) as f64 * SCALE
}

/// Draw `text` with its baseline's left end at `baseline`.
/// Characters without a glyph leave a gap.
pub fn draw_text(image: &mut RgbaImage, text: &str, baseline: Point2D<f64, CanvasSpace>, color: Color) {
  let top = baseline - V2::new(0.0, height());
  for (i, ch) in text.chars().enumerate() {
    let Some(rows) = glyph(ch) else {
      log::trace!("no glyph for {ch:?}");
      continue;
    };
    let origin = top + V2::new(i as f64 * advance(), 0.0);
    itertools::iproduct!(0..GLYPH_HEIGHT, 0..GLYPH_WIDTH)
      .filter(|&(row, col)| rows[row as usize] & (1 << (GLYPH_WIDTH - 1 - col)) != 0)
      .for_each(|(row, col)| {
        let min = origin + V2::new(col as f64, row as f64) * SCALE;
        Rect::new(min, min + V2::splat(SCALE))
          .texture(color)
          .draw(image)
      });
  }
}
