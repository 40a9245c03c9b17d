use std::sync::Arc;

use image::RgbaImage;

use crate::Color;

/// Dash pattern as `[on, off]` lengths.
pub type Dash = [f32; 2];

/// A draw command to be executed by a [`Canvas`](crate::Canvas).
///
/// Geometry is expressed in the coordinate space set by the most recent
/// `SetTransform` (identity until one is issued). Opacity is part of each
/// fill command, so no alpha state survives from one command to the next.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// Replace every pixel with the given color at the given opacity.
    Clear { color: Color, opacity: f32 },
    /// Scale then translate all following geometry (`screen = world * scale + translate`).
    SetTransform {
        scale: f32,
        translate_x: f32,
        translate_y: f32,
    },
    /// Back to identity.
    ResetTransform,
    /// Draw a raster image stretched into the destination rectangle.
    Image {
        image: Arc<RgbaImage>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    /// Fill a closed polygon (even-odd rule, matching the hit test).
    FillPolygon {
        points: Vec<[f32; 2]>,
        color: Color,
        opacity: f32,
    },
    /// Stroke a polyline, optionally closing it.
    StrokePath {
        points: Vec<[f32; 2]>,
        closed: bool,
        color: Color,
        width: f32,
        dash: Option<Dash>,
    },
    FillCircle {
        center: [f32; 2],
        radius: f32,
        color: Color,
        opacity: f32,
    },
    StrokeRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
        line_width: f32,
        dash: Option<Dash>,
    },
}
