use {
  euclid::{Box2D, Point2D, Size2D},
  image::{Pixel, Rgba, RgbaImage},
  rayon::prelude::*,
  crate::{
    drawing::{font, Draw, LinearGradient, Paint, Texture},
    geometry::{CanvasSpace, Rect, Shape},
    renderer::DrawCommand,
    scene::Scene,
    config::Color
  }
};

impl <Cutie, P> Draw<RgbaImage> for Texture<Cutie, P>
  where Cutie: Shape + Sync,
        P: Paint + Sync
{
  fn draw(&self, image: &mut RgbaImage) {
    let resolution = Size2D::<_, CanvasSpace>::from(image.dimensions());
    let bounding_box = match pixel_range(self.shape.bounding_box(), resolution) {
      Some(x) => x,
      None => return // bounding box has no intersection with screen at all
    };
    let stride = resolution.width as usize * 4;
    let (x_range, y_range) = (bounding_box.x_range(), bounding_box.y_range());

    image.par_chunks_mut(stride)
      .enumerate()
      .skip(y_range.start as usize)
      .take(y_range.len())
      .for_each(|(y, row)| {
        for x in x_range.clone() {
          let center = Point2D::new(x as f64 + 0.5, y as f64 + 0.5);
          let sdf = self.shape.sdf(center);
          if sdf >= 0.5 {
            continue;
          }
          let offset = x as usize * 4;
          let pixel = Rgba::from_slice_mut(&mut row[offset..offset + 4]);
          *pixel = sdf_overlay_aa(sdf, *pixel, self.paint.paint(center));
        }
      });
  }
}

/// Pixels whose centers may fall inside `bounding_box`.
fn pixel_range(
  bounding_box: Box2D<f64, CanvasSpace>,
  resolution: Size2D<u32, CanvasSpace>
) -> Option<Box2D<u32, CanvasSpace>> {
  bounding_box
    .round_out()
    .intersection(&Box2D::from_size(resolution.to_f64()))
    .map(|x| x.to_u32())
}

/// Blend `col2` over `col1`, with coverage from a one pixel wide ramp across the edge.
fn sdf_overlay_aa(sdf: f64, mut col1: Rgba<u8>, mut col2: Rgba<u8>) -> Rgba<u8> {
  let alpha = (0.5 - sdf) // antialias
    .clamp(0.0, 1.0);
  if alpha >= 1.0 && col2.0[3] == u8::MAX {
    return col2;
  }
  col2.0[3] = ((col2.0[3] as f64) * alpha).round() as u8;
  col1.blend(&col2);
  col1
}

impl Draw<RgbaImage> for Scene {
  fn draw(&self, image: &mut RgbaImage) {
    let (width, height) = (self.width as f64, self.height as f64);
    let [from, to] = self.palette.gradient;

    Rect::new(Point2D::origin(), Point2D::new(width, height))
      .texture(LinearGradient { x0: 0.0, x1: width, from, to })
      .draw(image);

    self.milestones.iter().for_each(|m| Rect::new(
      Point2D::new(m.position - 0.5, 0.0),
      Point2D::new(m.position + 0.5, height)
    ).texture(Color::BLACK).draw(image));
    self.milestone_labels().iter()
      .for_each(|label| font::draw_text(image, &label.text, label.baseline, label.color));

    // painter's order: later circles cover earlier ones
    self.commands.iter().for_each(|command| match *command {
      DrawCommand::Disc { circle, fill } => circle.texture(self.color(fill)).draw(image),
      DrawCommand::Arcs { .. } => command.split_segments().into_iter().flatten()
        .for_each(|(segment, fill)| segment.texture(self.color(fill)).draw(image))
    });

    self.logo_labels().iter()
      .for_each(|label| font::draw_text(image, &label.text, label.baseline, label.color));
  }
}
