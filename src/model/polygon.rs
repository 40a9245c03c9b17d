//! Polygon annotation model.

use polycanvas_raster::Color;

use crate::constants::MIN_POLYGON_VERTICES;
use crate::geometry::{self, Point, Rect};

/// Unique identifier for a committed polygon.
///
/// Ids are handed out by the scene at commit time; an in-progress polygon
/// carries id 0.
pub type PolygonId = u64;

/// A vertex chain with fill and tag metadata.
///
/// Vertices are world-space and authoritative; `drag_offset` only records how
/// far the polygon has travelled during the current drag session.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    id: PolygonId,
    /// Boundary path in insertion order; the first vertex anchors closure.
    pub vertices: Vec<Point>,
    /// Only the scene writes this, keeping it in step with its selection list.
    pub(crate) selected: bool,
    /// `None` means outline only.
    pub fill_color: Option<Color>,
    pub fill_opacity: f32,
    pub tag_name: Option<String>,
    pub drag_offset: Point,
}

impl Polygon {
    /// An empty, unfilled, in-progress polygon.
    pub fn new() -> Self {
        Self {
            id: 0,
            vertices: Vec::new(),
            selected: false,
            fill_color: None,
            fill_opacity: 1.0,
            tag_name: None,
            drag_offset: Point::default(),
        }
    }

    /// Build a polygon from vertices (used when restoring documents).
    pub fn from_vertices(vertices: Vec<Point>) -> Self {
        Self {
            vertices,
            ..Self::new()
        }
    }

    pub fn id(&self) -> PolygonId {
        self.id
    }

    pub(crate) fn assign_id(&mut self, id: PolygonId) {
        self.id = id;
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Append a vertex. No dedup, no snapping.
    pub fn add_vertex(&mut self, point: Point) {
        self.vertices.push(point);
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Enough vertices to be committed and filled.
    pub fn is_closable(&self) -> bool {
        self.vertices.len() >= MIN_POLYGON_VERTICES
    }

    /// Point-in-polygon; always false below three vertices.
    pub fn contains_point(&self, point: Point) -> bool {
        geometry::point_in_polygon(point, &self.vertices)
    }

    /// Closure detection helper.
    pub fn is_near_first_vertex(&self, point: Point, radius: f64) -> bool {
        self.vertices
            .first()
            .is_some_and(|first| geometry::near_vertex(point, *first, radius))
    }

    /// Index of the first vertex within `radius` of `point`.
    pub fn vertex_near(&self, point: Point, radius: f64) -> Option<usize> {
        geometry::find_vertex_near(&self.vertices, point, radius)
    }

    /// Move every vertex by `(dx, dy)` and accumulate the drag offset.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for v in &mut self.vertices {
            *v = v.offset(dx, dy);
        }
        self.drag_offset = self.drag_offset.offset(dx, dy);
    }

    /// Move one vertex by `(dx, dy)`. Returns false for an out-of-range index.
    pub fn move_vertex(&mut self, index: usize, dx: f64, dy: f64) -> bool {
        match self.vertices.get_mut(index) {
            Some(v) => {
                *v = v.offset(dx, dy);
                true
            }
            None => false,
        }
    }

    pub fn set_fill(&mut self, color: Color, opacity: f32) {
        self.fill_color = Some(color);
        self.fill_opacity = opacity.clamp(0.0, 1.0);
    }

    /// Fill color and opacity, when the polygon is filled and closable.
    pub fn fill(&self) -> Option<(Color, f32)> {
        if !self.is_closable() {
            return None;
        }
        self.fill_color.map(|c| (c, self.fill_opacity))
    }

    /// Get the bounding box of the polygon.
    pub fn bounding_box(&self) -> Option<Rect> {
        let first = self.vertices.first()?;
        let (mut min, mut max) = (*first, *first);
        for p in &self.vertices {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Rect::from_corners(min, max))
    }

    /// True when at least one vertex lies in `rect` (marquee selection rule).
    pub fn has_vertex_in(&self, rect: &Rect) -> bool {
        self.vertices.iter().any(|v| rect.contains(*v))
    }
}

impl Default for Polygon {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Polygon {
        Polygon::from_vertices(vec![
            Point::new(10.0, 10.0),
            Point::new(90.0, 10.0),
            Point::new(50.0, 90.0),
        ])
    }

    #[test]
    fn test_new_polygon_is_unfilled() {
        let p = Polygon::new();
        assert_eq!(p.id(), 0);
        assert!(!p.is_selected());
        assert!(p.fill().is_none());
        assert!(p.bounding_box().is_none());
    }

    #[test]
    fn test_contains_point_needs_three_vertices() {
        let mut p = Polygon::new();
        p.add_vertex(Point::new(0.0, 0.0));
        p.add_vertex(Point::new(10.0, 0.0));
        assert!(!p.contains_point(Point::new(5.0, 0.0)));
        p.add_vertex(Point::new(5.0, 10.0));
        assert!(p.contains_point(Point::new(5.0, 3.0)));
    }

    #[test]
    fn test_near_first_vertex() {
        let p = triangle();
        assert!(p.is_near_first_vertex(Point::new(15.0, 15.0), 10.0));
        assert!(!p.is_near_first_vertex(Point::new(20.0, 20.0), 10.0));
        assert!(!Polygon::new().is_near_first_vertex(Point::new(0.0, 0.0), 10.0));
    }

    #[test]
    fn test_translate_moves_vertices_and_offset() {
        let mut p = triangle();
        p.translate(5.0, -2.0);
        p.translate(1.0, 1.0);
        assert_eq!(p.vertices[0], Point::new(16.0, 9.0));
        assert_eq!(p.drag_offset, Point::new(6.0, -1.0));
    }

    #[test]
    fn test_move_vertex_out_of_range() {
        let mut p = triangle();
        assert!(p.move_vertex(2, 1.0, 1.0));
        assert_eq!(p.vertices[2], Point::new(51.0, 91.0));
        assert!(!p.move_vertex(3, 1.0, 1.0));
    }

    #[test]
    fn test_fill_requires_color_and_vertices() {
        let mut p = triangle();
        assert!(p.fill().is_none());
        p.set_fill(Color::RED, 1.5);
        assert_eq!(p.fill(), Some((Color::RED, 1.0)));

        let mut short = Polygon::from_vertices(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        short.set_fill(Color::RED, 0.5);
        assert!(short.fill().is_none());
    }

    #[test]
    fn test_bounding_box_and_vertex_in_rect() {
        let p = triangle();
        assert_eq!(p.bounding_box(), Some(Rect::new(10.0, 10.0, 80.0, 80.0)));
        assert!(p.has_vertex_in(&Rect::new(45.0, 85.0, 10.0, 10.0)));
        assert!(!p.has_vertex_in(&Rect::new(40.0, 40.0, 10.0, 10.0)));
    }
}
