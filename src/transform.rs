//! Screen/world coordinate mapping and zoom-to-cursor mathematics.
//!
//! `screen = world * scale + origin`. The origin is the screen position of
//! the world origin, so panning moves `origin` and zooming rescales around a
//! fixed screen point by solving for a new origin.

use serde::{Deserialize, Serialize};

use crate::constants::zoom;
use crate::geometry::Point;

/// Allowed zoom range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomBounds {
    pub min: f64,
    pub max: f64,
}

impl ZoomBounds {
    /// Build a usable range from possibly bad input: the ends are swapped
    /// when inverted, and non-finite or non-positive ends fall back to the
    /// defaults.
    pub fn new(min: f64, max: f64) -> Self {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        let min = if valid(min) { min } else { zoom::MIN_SCALE };
        let max = if valid(max) { max } else { zoom::MAX_SCALE };
        if min > max {
            log::warn!("Inverted zoom range {}..{}, swapping", min, max);
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    /// The same range with both ends made usable.
    pub fn normalized(&self) -> Self {
        Self::new(self.min, self.max)
    }

    pub fn clamp(&self, scale: f64) -> f64 {
        let bounds = self.normalized();
        scale.max(bounds.min).min(bounds.max)
    }
}

impl Default for ZoomBounds {
    fn default() -> Self {
        Self {
            min: zoom::MIN_SCALE,
            max: zoom::MAX_SCALE,
        }
    }
}

/// Pan/zoom state of the live view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

impl ViewTransform {
    pub fn new(scale: f64, origin_x: f64, origin_y: f64) -> Self {
        Self {
            scale,
            origin_x,
            origin_y,
        }
    }

    /// Create an identity transform (scale=1, no pan).
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.origin_x) / self.scale,
            (screen.y - self.origin_y) / self.scale,
        )
    }

    pub fn world_to_screen(&self, world: Point) -> Point {
        Point::new(
            world.x * self.scale + self.origin_x,
            world.y * self.scale + self.origin_y,
        )
    }

    /// Convert a screen-pixel distance (hit radius, handle size) into world units.
    pub fn screen_radius_to_world(&self, radius: f64) -> f64 {
        radius / self.scale
    }

    /// Multiply the scale by `factor`, keeping the world point under `cursor` fixed.
    ///
    /// The new scale is clamped to `bounds`. Returns false (and changes
    /// nothing) when the clamped scale equals the current one.
    pub fn zoom_at(&mut self, factor: f64, cursor: Point, bounds: ZoomBounds) -> bool {
        let new_scale = bounds.clamp(self.scale * factor);
        if new_scale == self.scale {
            return false;
        }

        // World point under cursor before the zoom
        let world = self.screen_to_world(cursor);

        self.scale = new_scale;
        self.origin_x = cursor.x - world.x * new_scale;
        self.origin_y = cursor.y - world.y * new_scale;
        true
    }

    /// Set the scale directly (clamped), leaving the origin alone.
    pub fn set_scale(&mut self, scale: f64, bounds: ZoomBounds) -> bool {
        let new_scale = bounds.clamp(scale);
        let changed = new_scale != self.scale;
        self.scale = new_scale;
        changed
    }

    /// Apply a pan delta in screen pixels.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.origin_x += dx;
        self.origin_y += dy;
    }

    pub fn reset(&mut self) {
        *self = Self::identity();
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Zoom factor for one wheel notch: scrolling up (negative delta) zooms in.
pub fn wheel_factor(delta_y: f64, step: f64) -> f64 {
    if delta_y < 0.0 { 1.0 + step } else { 1.0 - step }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_identity_transform() {
        let t = ViewTransform::identity();
        let p = Point::new(12.5, -3.0);
        assert_eq!(t.screen_to_world(p), p);
        assert_eq!(t.world_to_screen(p), p);
    }

    #[test]
    fn test_screen_world_are_inverse() {
        let t = ViewTransform::new(2.5, 40.0, -10.0);
        let world = Point::new(7.0, 11.0);
        let screen = t.world_to_screen(world);
        assert!(approx_eq(screen.x, 57.5));
        assert!(approx_eq(screen.y, 17.5));
        let back = t.screen_to_world(screen);
        assert!(approx_eq(back.x, world.x));
        assert!(approx_eq(back.y, world.y));
    }

    #[test]
    fn test_zoom_at_preserves_cursor_point() {
        let mut t = ViewTransform::new(1.0, 50.0, 30.0);
        let cursor = Point::new(150.0, 120.0);
        let before = t.screen_to_world(cursor);

        assert!(t.zoom_at(wheel_factor(-1.0, 0.1), cursor, ZoomBounds::default()));

        assert!(approx_eq(t.scale, 1.1));
        let after = t.world_to_screen(before);
        assert!(approx_eq(after.x, cursor.x));
        assert!(approx_eq(after.y, cursor.y));
    }

    #[test]
    fn test_zoom_out_preserves_cursor_point() {
        let mut t = ViewTransform::new(2.0, 100.0, 100.0);
        let cursor = Point::new(150.0, 150.0);
        let before = t.screen_to_world(cursor);
        t.zoom_at(wheel_factor(1.0, 0.1), cursor, ZoomBounds::default());
        assert!(approx_eq(t.scale, 1.8));
        let after = t.screen_to_world(cursor);
        assert!(approx_eq(before.x, after.x));
        assert!(approx_eq(before.y, after.y));
    }

    #[test]
    fn test_zoom_clamped_at_max_is_noop() {
        let mut t = ViewTransform::new(5.0, 10.0, 20.0);
        let changed = t.zoom_at(1.1, Point::new(0.0, 0.0), ZoomBounds::default());
        assert!(!changed);
        assert_eq!(t, ViewTransform::new(5.0, 10.0, 20.0));
    }

    #[test]
    fn test_zoom_clamps_to_min() {
        let mut t = ViewTransform::new(0.105, 0.0, 0.0);
        assert!(t.zoom_at(0.9, Point::new(0.0, 0.0), ZoomBounds::default()));
        assert!(approx_eq(t.scale, 0.1));
    }

    #[test]
    fn test_inverted_bounds_are_swapped() {
        let bounds = ZoomBounds::new(5.0, 0.1);
        assert_eq!(bounds, ZoomBounds { min: 0.1, max: 5.0 });

        let raw = ZoomBounds { min: 3.0, max: 1.0 };
        assert_eq!(raw.clamp(10.0), 3.0);
        assert_eq!(raw.clamp(0.5), 1.0);

        let mut t = ViewTransform::identity();
        assert!(t.zoom_at(4.0, Point::new(0.0, 0.0), raw));
        assert_eq!(t.scale, 3.0);
    }

    #[test]
    fn test_degenerate_bounds_fall_back_to_defaults() {
        assert_eq!(ZoomBounds::new(f64::NAN, 2.0).min, zoom::MIN_SCALE);
        assert_eq!(ZoomBounds::new(0.5, -1.0).max, zoom::MAX_SCALE);
        assert_eq!(ZoomBounds::new(0.0, f64::INFINITY), ZoomBounds::default());
    }

    #[test]
    fn test_wheel_factor_direction() {
        assert!(approx_eq(wheel_factor(-120.0, 0.1), 1.1));
        assert!(approx_eq(wheel_factor(120.0, 0.1), 0.9));
    }

    #[test]
    fn test_set_scale_and_reset() {
        let mut t = ViewTransform::new(1.0, 5.0, 5.0);
        assert!(t.set_scale(9.0, ZoomBounds::default()));
        assert_eq!(t.scale, 5.0);
        t.reset();
        assert_eq!(t, ViewTransform::identity());
    }

    #[test]
    fn test_screen_radius_shrinks_when_zoomed_in() {
        let t = ViewTransform::new(2.0, 0.0, 0.0);
        assert!(approx_eq(t.screen_radius_to_world(10.0), 5.0));
    }

    #[test]
    fn test_pan_by() {
        let mut t = ViewTransform::new(2.0, 10.0, 20.0);
        t.pan_by(5.0, -10.0);
        assert_eq!(t, ViewTransform::new(2.0, 15.0, 10.0));
    }
}
