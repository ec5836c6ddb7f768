use {
  super::*,
  crate::{
    config::{Config, Palette},
    geometry::{Circle, Rect, Segment, Shape},
    session::Session
  },
  anyhow::Result,
  image::Rgba,
  std::f64::consts::FRAC_PI_2
};

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BLANK: Rgba<u8> = Rgba([0, 0, 0, 0]);

#[test] fn circle_covers_its_pixels() {
  let mut image = RgbaImage::new(32, 32);
  Circle::new(16.0, 16.0, 8.0)
    .texture(RED)
    .draw(&mut image);
  assert_eq!(*image.get_pixel(16, 16), RED);
  assert_eq!(*image.get_pixel(9, 16), RED);
  assert_eq!(*image.get_pixel(2, 2), BLANK);
  // antialiased rim: partially covered pixels are translucent
  assert!(image.pixels().any(|p| p.0[3] > 0 && p.0[3] < 255));
}

#[test] fn shapes_off_screen_are_skipped() {
  let mut image = RgbaImage::new(8, 8);
  Circle::new(-50.0, -50.0, 4.0).texture(RED).draw(&mut image);
  assert!(image.pixels().all(|p| *p == BLANK));
}

#[test] fn later_shapes_cover_earlier_ones() {
  let mut image = RgbaImage::new(16, 16);
  Rect::new(Point2D::new(0.0, 0.0), Point2D::new(16.0, 16.0)).texture(RED).draw(&mut image);
  Rect::new(Point2D::new(4.0, 4.0), Point2D::new(8.0, 8.0)).texture(Color::WHITE).draw(&mut image);
  assert_eq!(*image.get_pixel(5, 5), Rgba([255, 255, 255, 255]));
  assert_eq!(*image.get_pixel(10, 10), RED);
}

#[test] fn split_halves_meet_at_chord() {
  let mut image = RgbaImage::new(40, 40);
  let circle = Circle::new(20.0, 20.0, 16.0);
  Segment { circle, start: FRAC_PI_2, end: 3.0 * FRAC_PI_2 }.texture(RED).draw(&mut image);
  Segment { circle, start: 3.0 * FRAC_PI_2, end: FRAC_PI_2 }.texture(Color::WHITE).draw(&mut image);
  assert_eq!(*image.get_pixel(12, 20), RED);
  assert_eq!(*image.get_pixel(27, 20), Rgba([255, 255, 255, 255]));
}

#[test] fn gradient_runs_left_to_right() {
  let gradient = LinearGradient { x0: 0.0, x1: 100.0, from: Color::BLACK, to: Color::WHITE };
  assert_eq!(gradient.paint(Point2D::new(-5.0, 0.0)), Rgba([0, 0, 0, 255]));
  assert_eq!(gradient.paint(Point2D::new(50.0, 7.0)), Rgba([128, 128, 128, 255]));
  assert_eq!(gradient.paint(Point2D::new(250.0, 0.0)), Rgba([255, 255, 255, 255]));
}

#[test] fn glyphs_cover_labels() {
  for ch in "0123456789%UWCK".chars() {
    assert!(font::glyph(ch).is_some(), "{ch}");
  }
  assert!(font::glyph('?').is_none());
  let mut image = RgbaImage::new(60, 30);
  font::draw_text(&mut image, "1?0%", Point2D::new(0.0, 25.0), Color::BLACK);
  assert_eq!(font::height(), 14.0);
  // the stem of the '1' sits in the third glyph column
  assert_eq!(*image.get_pixel(4, 15), Rgba([0, 0, 0, 255]));
  // nothing above the glyph or below the baseline
  assert!((0..11).chain(25..30).all(|y| image.get_pixel(4, y).0[3] == 0));
}

#[test] fn logo_stays_on_the_surface() -> Result<()> {
  let scene = Session::new(&Config::default())?.scene();
  for label in scene.logo_labels() {
    assert!(label.baseline.y - font::height() >= 0.0, "{} is clipped", label.text);
  }
  let mut image = RgbaImage::new(scene.width, scene.height);
  scene.draw(&mut image);
  // top row of the 'C' in "CK"
  assert_eq!(*image.get_pixel(3, 1), Rgba(Color::GOLD.0));
  Ok(())
}

#[test] fn scene_paints_fill_roles() -> Result<()> {
  let mut session = Session::new(&Config {
    circles: vec![Circle::new(100.0, 50.0, 20.0)],
    ..Config::default()
  })?;
  session.submit("1", "2")?;
  let scene = session.toggle_grid();
  let mut image = RgbaImage::new(scene.width, scene.height);
  scene.draw(&mut image);

  let palette = Palette::default();
  assert_eq!(*image.get_pixel(90, 50), Rgba(palette.achieved.0));
  assert_eq!(*image.get_pixel(110, 50), Rgba(palette.remaining.0));
  // background gradient starts at the first stop
  assert_eq!(*image.get_pixel(0, 150), Rgba(palette.gradient[0].0));

  // hidden grid: the 0% milestone column below the circle shows only the background
  assert!(scene.milestones.is_empty());
  let background = LinearGradient {
    x0: 0.0, x1: scene.width as f64, from: palette.gradient[0], to: palette.gradient[1]
  };
  assert_eq!(*image.get_pixel(80, 150), background.paint(Point2D::new(80.5, 150.5)));

  let shown = session.toggle_grid();
  let mut with_grid = RgbaImage::new(shown.width, shown.height);
  shown.draw(&mut with_grid);
  assert_ne!(*with_grid.get_pixel(80, 150), *image.get_pixel(80, 150));
  Ok(())
}

#[test] fn grid_lines_are_drawn_when_visible() -> Result<()> {
  let session = Session::new(&Config {
    circles: vec![Circle::new(500.0, 20.0, 200.0)],
    ..Config::default()
  })?;
  let scene = session.scene();
  assert_eq!(scene.milestones[1].position, 340.0);
  let mut image = RgbaImage::new(scene.width, scene.height);
  scene.draw(&mut image);
  // the 0% line at x = 300 straddles two pixel columns, half covering each
  let on_line = *image.get_pixel(300, 250);
  let off_line = *image.get_pixel(320, 250);
  assert!(on_line.0[..3].iter().zip(off_line.0[..3].iter()).all(|(a, b)| a < b));
  Ok(())
}

#[test] fn export_writes_fixed_file_name() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let image = RgbaImage::from_pixel(4, 3, RED);
  let path = export(&image, dir.path())?;
  assert_eq!(path, dir.path().join(EXPORT_FILE_NAME));
  let bytes = std::fs::read(&path)?;
  assert_eq!(&bytes[1..4], b"PNG");
  assert_eq!(bytes, encode_png(&image)?);
  Ok(())
}
