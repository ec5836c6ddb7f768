//! Rasterization of scenes onto [`image::RgbaImage`], and PNG export.

use {
  crate::{
    config::Color,
    error::Result,
    geometry::CanvasSpace
  },
  euclid::Point2D,
  image::{codecs::png::PngEncoder, ColorType, ImageEncoder, Rgba, RgbaImage},
  std::path::{Path, PathBuf}
};

pub mod font;
mod impl_draw_rgbaimage;
#[cfg(test)] mod tests;

/// Name the exported picture is always saved under.
pub const EXPORT_FILE_NAME: &str = "KarlThermometer.png";

pub trait Draw<Backend> {
  fn draw(&self, image: &mut Backend);
}

/// Color source for the inside of a shape.
pub trait Paint {
  fn paint(&self, pixel: Point2D<f64, CanvasSpace>) -> Rgba<u8>;
}

impl Paint for Rgba<u8> {
  fn paint(&self, _: Point2D<f64, CanvasSpace>) -> Rgba<u8> { *self }
}

impl Paint for Color {
  fn paint(&self, _: Point2D<f64, CanvasSpace>) -> Rgba<u8> { Rgba(self.0) }
}

/// Horizontal gradient: `from` at `x = x0`, `to` at `x = x1`, constant beyond.
#[derive(Debug, Copy, Clone)]
pub struct LinearGradient {
  pub x0: f64,
  pub x1: f64,
  pub from: Color,
  pub to: Color
}

impl Paint for LinearGradient {
  fn paint(&self, pixel: Point2D<f64, CanvasSpace>) -> Rgba<u8> {
    let t = if self.x1 > self.x0 {
      ((pixel.x - self.x0) / (self.x1 - self.x0)).clamp(0.0, 1.0)
    } else {
      0.0
    };
    let mut out = [0u8; 4];
    out.iter_mut()
      .zip(self.from.0.iter().zip(self.to.0.iter()))
      .for_each(|(c, (&a, &b))| *c = (a as f64 + (b as f64 - a as f64) * t).round() as u8);
    Rgba(out)
  }
}

#[derive(Debug, Copy, Clone)]
pub struct Texture<S, P> {
  pub shape: S,
  pub paint: P
}

/// Encode the surface as PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
  let mut bytes = vec![];
  PngEncoder::new(&mut bytes)
    .write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)?;
  Ok(bytes)
}

/// Save the surface as [`EXPORT_FILE_NAME`] inside `dir`.
pub fn export(image: &RgbaImage, dir: impl AsRef<Path>) -> Result<PathBuf> {
  let path = dir.as_ref().join(EXPORT_FILE_NAME);
  let bytes = encode_png(image)?;
  std::fs::write(&path, &bytes)?;
  log::info!("exported {}x{} image to {} ({} bytes)", image.width(), image.height(), path.display(), bytes.len());
  Ok(path)
}
