//! A fundraiser thermometer drawn as a caterpillar made of circles.
//!
//! The circles left of a vertical boundary are painted in the "achieved" color, those right of
//! it in the "remaining" color, and the ones the boundary crosses are cut in two along it. The
//! boundary sits at `current / goal` of the way across the figure.
//!
//! The computation lives in [`renderer`] and is free of any drawing surface; [`session`] keeps
//! the state of one surface between user actions, and [`drawing`] rasterizes the resulting
//! [`scene::Scene`] (requires `drawing` feature).
//!
//! # Basic usage
//! ```no_run
//! # use karl_thermometer::{config::Config, drawing::{self, Draw}, error::Result, session::Session};
//! # fn main() -> Result<()> {
//! let mut session = Session::new(&Config::default())?;
//! let summary = session.submit("250", "1000")?;
//! println!("{summary}");
//!
//! let scene = session.scene();
//! let mut image = image::RgbaImage::new(scene.width, scene.height);
//! scene.draw(&mut image);
//! drawing::export(&image, ".")?; // ./KarlThermometer.png
//! #   Ok(())
//! # }
//! ```
//! Without a surface, the draw commands are available directly:
//! ```
//! # use karl_thermometer::{figure::Figure, progress::Progress, renderer::{render, DrawCommand}};
//! let figure = Figure::caterpillar();
//! let commands = render(&figure, Progress::new(1, 2).unwrap(), figure.bounds(1000.0));
//! assert_eq!(commands.len(), figure.len());
//! assert!(matches!(commands[0], DrawCommand::Disc { .. })); // the head is still to go
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod sdf;
pub mod geometry;
pub mod figure;
pub mod progress;
pub mod renderer;
pub mod summary;
pub mod scene;
pub mod config;
pub mod session;
#[cfg(feature = "drawing")]
#[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
pub mod drawing;
