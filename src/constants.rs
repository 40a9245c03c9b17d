//! Global constants for polycanvas

use polycanvas_raster::Color;

/// Minimum number of vertices for a polygon to be committed.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Fill color used when no tag has been chosen (and after the active tag is deleted).
pub const DEFAULT_COLOR: Color = Color::rgb(0x4a, 0x90, 0xe2);

/// Fill opacity used when no tag has been chosen.
pub const DEFAULT_OPACITY: f32 = 1.0;

/// Interaction thresholds, all in screen pixels.
pub mod interaction {
    /// Radius for both closing a polygon on its first vertex and grabbing a
    /// vertex of the selected polygon.
    pub const VERTEX_HIT_RADIUS: f64 = 10.0;

    /// A marquee must be larger than this along one axis to select anything.
    pub const MARQUEE_MIN_SIZE: f64 = 5.0;
}

/// Zoom limits and wheel sensitivity.
pub mod zoom {
    pub const MIN_SCALE: f64 = 0.1;
    pub const MAX_SCALE: f64 = 5.0;

    /// Fractional scale change per wheel notch.
    pub const WHEEL_STEP: f64 = 0.1;
}

/// Polygon and overlay styling.
pub mod style {
    use polycanvas_raster::Color;

    pub const STROKE_WIDTH: f32 = 2.0;
    pub const STROKE_COLOR: Color = Color::BLACK;
    pub const SELECTED_COLOR: Color = Color::RED;
    pub const HANDLE_RADIUS: f32 = 5.0;

    pub const RUBBER_BAND_COLOR: Color = Color::GRAY;
    pub const DASH: [f32; 2] = [5.0, 5.0];

    /// Marker drawn over the first vertex while the pointer can close the polygon.
    pub const CLOSE_MARKER_RADIUS: f32 = 8.0;
    pub const CLOSE_MARKER_COLOR: Color = Color::GREEN;
    pub const CLOSE_MARKER_OPACITY: f32 = 0.5;

    pub const MARQUEE_COLOR: Color = Color::BLACK;
    pub const MARQUEE_LINE_WIDTH: f32 = 1.0;
}

/// Canvas size used before the host reports one.
pub const DEFAULT_CANVAS_SIZE: (u32, u32) = (800, 600);
