//! Display list construction.
//!
//! The renderer reads a [`Scene`] and emits [`DrawCommand`]s; it never
//! mutates anything. The background is drawn under the view transform,
//! while polygons and overlays are projected to screen space here so stroke
//! widths and handle sizes stay constant at any zoom.

use polycanvas_raster::{Color, DrawCommand};

use crate::config::InteractionConfig;
use crate::constants::style;
use crate::geometry::Point;
use crate::model::Polygon;
use crate::scene::{Mode, Scene};
use crate::transform::ViewTransform;

/// Backdrop behind everything, including transparent image regions.
const CANVAS_BACKGROUND: Color = Color::WHITE;

/// Handles under the pointer are drawn this much larger.
const HOVER_HANDLE_SCALE: f32 = 1.5;

/// Sizes of strokes and decorations, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub stroke_width: f32,
    pub handle_radius: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            stroke_width: style::STROKE_WIDTH,
            handle_radius: style::HANDLE_RADIUS,
        }
    }
}

impl From<&InteractionConfig> for RenderStyle {
    fn from(config: &InteractionConfig) -> Self {
        Self {
            stroke_width: config.stroke_width,
            handle_radius: config.handle_radius,
        }
    }
}

/// What to draw and through which transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub view: ViewTransform,
    /// Pointer position in screen space, for the rubber band.
    pub pointer: Option<Point>,
    /// Selection highlight, handles, in-progress polygon and marquee.
    pub decorations: bool,
}

impl RenderOptions {
    /// The interactive view of a scene.
    pub fn live(scene: &Scene, pointer: Option<Point>) -> Self {
        Self {
            view: *scene.view(),
            pointer,
            decorations: true,
        }
    }

    /// Full content at 1:1 with no interaction overlays.
    pub fn export() -> Self {
        Self {
            view: ViewTransform::identity(),
            pointer: None,
            decorations: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    style: RenderStyle,
}

impl Renderer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> RenderStyle {
        self.style
    }

    /// Build the display list for one frame.
    pub fn build(&self, scene: &Scene, options: &RenderOptions) -> Vec<DrawCommand> {
        let mut commands = vec![DrawCommand::Clear {
            color: CANVAS_BACKGROUND,
            opacity: 1.0,
        }];

        self.push_background(&mut commands, scene, &options.view);

        let hovered_on = scene.single_selected().map(Polygon::id);
        for polygon in scene.polygons() {
            let hovered = if options.decorations && hovered_on == Some(polygon.id()) {
                scene.hovered_vertex()
            } else {
                None
            };
            self.push_polygon(&mut commands, polygon, options, hovered);
        }

        if options.decorations {
            self.push_in_progress(&mut commands, scene, options);
            self.push_marquee(&mut commands, scene);
        }

        commands
    }

    fn push_background(&self, commands: &mut Vec<DrawCommand>, scene: &Scene, view: &ViewTransform) {
        let Some(image) = scene.imported_image() else {
            return;
        };
        let (x, y, width, height) = fit_image(
            (image.width(), image.height()),
            scene.canvas_size(),
            scene.image_offset(),
        );
        commands.push(DrawCommand::SetTransform {
            scale: view.scale as f32,
            translate_x: view.origin_x as f32,
            translate_y: view.origin_y as f32,
        });
        commands.push(DrawCommand::Image {
            image: image.shared(),
            x,
            y,
            width,
            height,
        });
        commands.push(DrawCommand::ResetTransform);
    }

    fn push_polygon(
        &self,
        commands: &mut Vec<DrawCommand>,
        polygon: &Polygon,
        options: &RenderOptions,
        hovered: Option<usize>,
    ) {
        let points = project(&polygon.vertices, &options.view);

        if let Some((color, opacity)) = polygon.fill() {
            commands.push(DrawCommand::FillPolygon {
                points: points.clone(),
                color,
                opacity,
            });
        }

        let highlighted = options.decorations && polygon.is_selected();
        let stroke_color = if highlighted {
            style::SELECTED_COLOR
        } else {
            style::STROKE_COLOR
        };

        let handles: Vec<DrawCommand> = if highlighted {
            points
                .iter()
                .enumerate()
                .map(|(i, p)| DrawCommand::FillCircle {
                    center: *p,
                    radius: if hovered == Some(i) {
                        self.style.handle_radius * HOVER_HANDLE_SCALE
                    } else {
                        self.style.handle_radius
                    },
                    color: style::SELECTED_COLOR,
                    opacity: 1.0,
                })
                .collect()
        } else {
            Vec::new()
        };

        commands.push(DrawCommand::StrokePath {
            points,
            closed: polygon.is_closable(),
            color: stroke_color,
            width: self.style.stroke_width,
            dash: None,
        });
        commands.extend(handles);
    }

    fn push_in_progress(&self, commands: &mut Vec<DrawCommand>, scene: &Scene, options: &RenderOptions) {
        let Some(current) = scene.current_polygon() else {
            return;
        };
        let points = project(&current.vertices, &options.view);
        let (Some(first), Some(last)) = (points.first().copied(), points.last().copied()) else {
            return;
        };

        commands.push(DrawCommand::StrokePath {
            points,
            closed: false,
            color: style::STROKE_COLOR,
            width: self.style.stroke_width,
            dash: None,
        });

        if let Some(pointer) = options.pointer {
            commands.push(DrawCommand::StrokePath {
                points: vec![last, [pointer.x as f32, pointer.y as f32]],
                closed: false,
                color: style::RUBBER_BAND_COLOR,
                width: self.style.stroke_width,
                dash: Some(style::DASH),
            });
        }

        if scene.mode() == Mode::Draw && scene.hovered_vertex() == Some(0) && current.is_closable() {
            commands.push(DrawCommand::FillCircle {
                center: first,
                radius: style::CLOSE_MARKER_RADIUS,
                color: style::CLOSE_MARKER_COLOR,
                opacity: style::CLOSE_MARKER_OPACITY,
            });
        }
    }

    fn push_marquee(&self, commands: &mut Vec<DrawCommand>, scene: &Scene) {
        let Some(rect) = scene.selection_rect() else {
            return;
        };
        let r = rect.normalized();
        commands.push(DrawCommand::StrokeRect {
            x: r.x as f32,
            y: r.y as f32,
            width: r.width as f32,
            height: r.height as f32,
            color: style::MARQUEE_COLOR,
            line_width: style::MARQUEE_LINE_WIDTH,
            dash: Some(style::DASH),
        });
    }
}

fn project(vertices: &[Point], view: &ViewTransform) -> Vec<[f32; 2]> {
    vertices
        .iter()
        .map(|v| {
            let s = view.world_to_screen(*v);
            [s.x as f32, s.y as f32]
        })
        .collect()
}

/// World-space rectangle for a background: scaled to fit the canvas, centred
/// on the slack axis, then shifted by the user's offset.
pub fn fit_image(image: (u32, u32), canvas: (u32, u32), offset: Point) -> (f32, f32, f32, f32) {
    let (iw, ih) = (f64::from(image.0), f64::from(image.1));
    let (cw, ch) = (f64::from(canvas.0), f64::from(canvas.1));
    if iw <= 0.0 || ih <= 0.0 {
        return (offset.x as f32, offset.y as f32, 0.0, 0.0);
    }
    let scale = (cw / iw).min(ch / ih);
    let (w, h) = (iw * scale, ih * scale);
    let x = (cw - w) / 2.0 + offset.x;
    let y = (ch - h) / 2.0 + offset.y;
    (x as f32, y as f32, w as f32, h as f32)
}
