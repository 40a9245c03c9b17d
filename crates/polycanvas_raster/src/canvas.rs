//! tiny-skia implementation of the draw command executor.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use tiny_skia::{
    ColorU8, FillRule, FilterQuality, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Stroke,
    StrokeDash, Transform,
};

use crate::{Color, Dash, DrawCommand, RasterError};

/// An off-screen RGBA canvas.
pub struct Canvas {
    pixmap: Pixmap,
    transform: Transform,
}

impl Canvas {
    /// Create a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        let pixmap = Pixmap::new(width, height).ok_or(RasterError::InvalidSize { width, height })?;
        Ok(Self {
            pixmap,
            transform: Transform::identity(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Execute a display list in order.
    pub fn execute(&mut self, commands: &[DrawCommand]) {
        for command in commands {
            self.execute_one(command);
        }
    }

    fn execute_one(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Clear { color, opacity } => {
                self.pixmap.fill(color.to_skia(*opacity));
            }
            DrawCommand::SetTransform {
                scale,
                translate_x,
                translate_y,
            } => {
                self.transform = Transform::from_row(*scale, 0.0, 0.0, *scale, *translate_x, *translate_y);
            }
            DrawCommand::ResetTransform => {
                self.transform = Transform::identity();
            }
            DrawCommand::Image {
                image,
                x,
                y,
                width,
                height,
            } => self.draw_image(image, *x, *y, *width, *height),
            DrawCommand::FillPolygon {
                points,
                color,
                opacity,
            } => {
                if let Some(path) = polyline(points, true) {
                    let paint = solid_paint(*color, *opacity);
                    self.pixmap
                        .fill_path(&path, &paint, FillRule::EvenOdd, self.transform, None);
                }
            }
            DrawCommand::StrokePath {
                points,
                closed,
                color,
                width,
                dash,
            } => {
                if let Some(path) = polyline(points, *closed) {
                    self.stroke(&path, *color, *width, *dash);
                }
            }
            DrawCommand::FillCircle {
                center,
                radius,
                color,
                opacity,
            } => {
                if let Some(path) = PathBuilder::from_circle(center[0], center[1], *radius) {
                    let paint = solid_paint(*color, *opacity);
                    self.pixmap
                        .fill_path(&path, &paint, FillRule::Winding, self.transform, None);
                }
            }
            DrawCommand::StrokeRect {
                x,
                y,
                width,
                height,
                color,
                line_width,
                dash,
            } => {
                let corners = [
                    [*x, *y],
                    [x + width, *y],
                    [x + width, y + height],
                    [*x, y + height],
                ];
                if let Some(path) = polyline(&corners, true) {
                    self.stroke(&path, *color, *line_width, *dash);
                }
            }
        }
    }

    fn stroke(&mut self, path: &Path, color: Color, width: f32, dash: Option<Dash>) {
        let paint = solid_paint(color, 1.0);
        let stroke = Stroke {
            width,
            dash: dash.and_then(|[on, off]| StrokeDash::new(vec![on, off], 0.0)),
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(path, &paint, &stroke, self.transform, None);
    }

    fn draw_image(&mut self, image: &RgbaImage, x: f32, y: f32, width: f32, height: f32) {
        if image.width() == 0 || image.height() == 0 {
            return;
        }
        let Some(source) = image_to_pixmap(image) else {
            log::error!("Failed to create pixmap {}x{}", image.width(), image.height());
            return;
        };

        let transform = self
            .transform
            .pre_translate(x, y)
            .pre_scale(width / image.width() as f32, height / image.height() as f32);
        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        self.pixmap
            .draw_pixmap(0, 0, source.as_ref(), &paint, transform, None);
    }

    /// Straight (non-premultiplied) RGBA at a pixel, `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
    }

    /// Copy out as a straight-alpha image.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width(), self.height(), |x, y| {
            Rgba(self.pixel(x, y).unwrap_or([0, 0, 0, 0]))
        })
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, RasterError> {
        let mut buffer = Cursor::new(Vec::new());
        self.to_rgba_image().write_to(&mut buffer, ImageFormat::Png)?;
        Ok(buffer.into_inner())
    }
}

fn solid_paint(color: Color, opacity: f32) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.to_skia(opacity));
    paint.anti_alias = true;
    paint
}

fn polyline(points: &[[f32; 2]], closed: bool) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first[0], first[1]);
    for p in rest {
        pb.line_to(p[0], p[1]);
    }
    if closed {
        pb.close();
    }
    pb.finish()
}

fn image_to_pixmap(image: &RgbaImage) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(image.width(), image.height())?;
    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Some(pixmap)
}
