//! Drawing state.
//!
//! The scene owns every committed polygon, the polygon being drawn, the
//! selection, paint settings, the background reference and the view
//! transform. All mutation goes through its methods so the selection list
//! and each polygon's `selected` flag never disagree.

use polycanvas_raster::Color;

use crate::background::BackgroundImage;
use crate::constants::{DEFAULT_CANVAS_SIZE, DEFAULT_COLOR, DEFAULT_OPACITY};
use crate::geometry::{Point, Rect, SelectionRect};
use crate::model::{Polygon, PolygonId, Tag};
use crate::transform::{ViewTransform, ZoomBounds};

/// Interaction mode.
///
/// `MoveVertex` and `DragPolygon` are transient substates of `Select`: they
/// are entered by the `start_*` methods and always return to `Select`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// No tool chosen yet.
    #[default]
    Idle,
    Draw,
    Select,
    Fill,
    MoveVertex,
    DragPolygon,
}

impl Mode {
    /// Whether this is a pointer-gesture substate.
    pub fn is_transient(self) -> bool {
        matches!(self, Mode::MoveVertex | Mode::DragPolygon)
    }
}

#[derive(Debug, Clone)]
pub struct Scene {
    mode: Mode,
    polygons: Vec<Polygon>,
    current: Option<Polygon>,
    selected: Vec<PolygonId>,
    selection_rect: Option<SelectionRect>,

    current_color: Color,
    current_opacity: f32,

    image: Option<BackgroundImage>,
    image_offset: Point,

    view: ViewTransform,
    zoom_bounds: ZoomBounds,
    canvas_size: (u32, u32),

    active_vertex: Option<usize>,
    hovered_vertex: Option<usize>,
    /// World-space pointer position of the previous drag event.
    drag_start: Option<Point>,

    next_id: PolygonId,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        let (width, height) = DEFAULT_CANVAS_SIZE;
        Self::with_canvas_size(width, height)
    }

    pub fn with_canvas_size(width: u32, height: u32) -> Self {
        Self {
            mode: Mode::Idle,
            polygons: Vec::new(),
            current: None,
            selected: Vec::new(),
            selection_rect: None,
            current_color: DEFAULT_COLOR,
            current_opacity: DEFAULT_OPACITY,
            image: None,
            image_offset: Point::default(),
            view: ViewTransform::identity(),
            zoom_bounds: ZoomBounds::default(),
            canvas_size: (width, height),
            active_vertex: None,
            hovered_vertex: None,
            drag_start: None,
            next_id: 1,
        }
    }

    // ========================================================================
    // Mode
    // ========================================================================

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch tool mode.
    ///
    /// Leaving `Draw` discards the in-progress polygon. Gesture transients
    /// (active vertex, drag anchor, marquee, hover) are reset.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode != Mode::Draw && self.current.take().is_some() {
            log::debug!("✏️ Discarded in-progress polygon on switch to {:?}", mode);
        }
        self.active_vertex = None;
        self.hovered_vertex = None;
        self.drag_start = None;
        self.selection_rect = None;
        if self.mode != mode {
            log::debug!("🔧 Mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
    }

    // ========================================================================
    // Drawing
    // ========================================================================

    /// Begin a fresh polygon, replacing any in-progress one, and enter draw mode.
    pub fn start_new_polygon(&mut self) -> &mut Polygon {
        if self.mode != Mode::Draw {
            self.set_mode(Mode::Draw);
        }
        self.hovered_vertex = None;
        self.current.insert(Polygon::new())
    }

    pub fn current_polygon(&self) -> Option<&Polygon> {
        self.current.as_ref()
    }

    /// Append a vertex to the in-progress polygon, starting one if needed.
    ///
    /// Ignored outside draw mode.
    pub fn add_vertex(&mut self, point: Point) -> bool {
        if self.mode != Mode::Draw {
            return false;
        }
        let polygon = self.current.get_or_insert_with(Polygon::new);
        polygon.add_vertex(point);
        log::debug!(
            "✏️ Vertex {} at ({:.1}, {:.1})",
            polygon.vertex_count(),
            point.x,
            point.y
        );
        true
    }

    /// Commit the in-progress polygon.
    ///
    /// The polygon is stamped with the current color/opacity and the tag's
    /// name. With fewer than three vertices nothing happens and the polygon
    /// stays in progress.
    pub fn finish_current_polygon(&mut self, tag: Option<&Tag>) -> Option<PolygonId> {
        if !self.current.as_ref().is_some_and(Polygon::is_closable) {
            log::debug!("✏️ Not enough vertices to finish polygon");
            return None;
        }
        let mut polygon = self.current.take()?;

        let id = self.next_id;
        self.next_id += 1;
        polygon.assign_id(id);
        polygon.set_fill(self.current_color, self.current_opacity);
        polygon.tag_name = tag.map(|t| t.name.clone());
        polygon.selected = false;

        log::info!(
            "✅ Committed polygon {} ({} vertices, tag {:?})",
            id,
            polygon.vertex_count(),
            polygon.tag_name
        );
        self.polygons.push(polygon);
        self.hovered_vertex = None;
        Some(id)
    }

    pub fn cancel_current_polygon(&mut self) {
        if self.current.take().is_some() {
            log::debug!("✏️ Cancelled in-progress polygon");
        }
        self.hovered_vertex = None;
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Committed polygons in paint order.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn polygon(&self, id: PolygonId) -> Option<&Polygon> {
        self.polygons.iter().find(|p| p.id() == id)
    }

    /// First polygon, in insertion order, containing `point`.
    ///
    /// Insertion order is also paint order, so when polygons overlap this
    /// returns the bottom-most one rather than the one drawn on top.
    pub fn get_polygon_at(&self, point: Point) -> Option<PolygonId> {
        self.polygons
            .iter()
            .find(|p| p.contains_point(point))
            .map(Polygon::id)
    }

    pub fn selected_ids(&self) -> &[PolygonId] {
        &self.selected
    }

    pub fn selected_polygons(&self) -> impl Iterator<Item = &Polygon> {
        self.selected.iter().filter_map(|id| self.polygon(*id))
    }

    /// The selected polygon when exactly one is selected.
    pub fn single_selected(&self) -> Option<&Polygon> {
        match self.selected.as_slice() {
            [id] => self.polygon(*id),
            _ => None,
        }
    }

    /// True when every polygon's flag matches selection membership and the
    /// selection holds no stale or duplicate ids.
    pub fn selection_consistent(&self) -> bool {
        let flags_match = self
            .polygons
            .iter()
            .all(|p| p.is_selected() == self.selected.contains(&p.id()));
        let all_known = self.selected.iter().all(|id| self.polygon(*id).is_some());
        let mut ids = self.selected.clone();
        ids.sort_unstable();
        ids.dedup();
        flags_match && all_known && ids.len() == self.selected.len()
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn clear_selection(&mut self) {
        for id in std::mem::take(&mut self.selected) {
            if let Some(p) = self.polygon_mut(id) {
                p.selected = false;
            }
        }
        self.hovered_vertex = None;
    }

    /// Replace the selection with a single polygon.
    pub fn select_only(&mut self, id: PolygonId) -> bool {
        if self.polygon(id).is_none() {
            log::warn!("Cannot select polygon {}: not found", id);
            return false;
        }
        self.clear_selection();
        self.mark_selected(id);
        true
    }

    /// Add the polygon to the selection, or remove it if already selected.
    pub fn toggle_selection(&mut self, id: PolygonId) -> bool {
        if self.selected.contains(&id) {
            self.selected.retain(|s| *s != id);
            if let Some(p) = self.polygon_mut(id) {
                p.selected = false;
            }
            self.hovered_vertex = None;
            return true;
        }
        if self.polygon(id).is_none() {
            log::warn!("Cannot toggle polygon {}: not found", id);
            return false;
        }
        self.mark_selected(id);
        true
    }

    /// Select every polygon with at least one vertex inside `rect` (world space).
    ///
    /// Non-additive selection replaces the previous one. Returns how many
    /// polygons were hit.
    pub fn select_in_rect(&mut self, rect: &Rect, additive: bool) -> usize {
        if !additive {
            self.clear_selection();
        }
        let hits: Vec<PolygonId> = self
            .polygons
            .iter()
            .filter(|p| p.has_vertex_in(rect))
            .map(Polygon::id)
            .collect();
        for id in &hits {
            self.mark_selected(*id);
        }
        log::debug!("🔲 Marquee hit {} polygon(s)", hits.len());
        hits.len()
    }

    fn mark_selected(&mut self, id: PolygonId) {
        let Some(p) = self.polygon_mut(id) else {
            return;
        };
        p.selected = true;
        if !self.selected.contains(&id) {
            self.selected.push(id);
        }
    }

    pub fn selection_rect(&self) -> Option<&SelectionRect> {
        self.selection_rect.as_ref()
    }

    /// Set or clear the marquee (screen space).
    pub fn set_selection_rect(&mut self, rect: Option<SelectionRect>) {
        self.selection_rect = rect;
    }

    // ========================================================================
    // Fill and tags
    // ========================================================================

    /// Fill every selected polygon. The tag name is re-stamped when a tag is given.
    pub fn fill_selected_polygons(&mut self, color: Color, opacity: f32, tag: Option<&Tag>) -> usize {
        let ids = self.selected.clone();
        for id in &ids {
            if let Some(p) = self.polygon_mut(*id) {
                p.set_fill(color, opacity);
                if let Some(tag) = tag {
                    p.tag_name = Some(tag.name.clone());
                }
            }
        }
        if !ids.is_empty() {
            log::debug!("🎨 Filled {} polygon(s) with {} @ {:.2}", ids.len(), color, opacity);
        }
        ids.len()
    }

    /// Repaint every polygon carrying the named tag.
    pub fn recolor_tagged(&mut self, tag_name: &str, color: Color, opacity: f32) -> usize {
        let mut count = 0;
        for p in self
            .polygons
            .iter_mut()
            .filter(|p| p.tag_name.as_deref() == Some(tag_name))
        {
            p.set_fill(color, opacity);
            count += 1;
        }
        count
    }

    /// Remove every polygon carrying the named tag, including from the selection.
    pub fn remove_polygons_tagged(&mut self, tag_name: &str) -> usize {
        let doomed: Vec<PolygonId> = self
            .polygons
            .iter()
            .filter(|p| p.tag_name.as_deref() == Some(tag_name))
            .map(Polygon::id)
            .collect();
        self.remove_ids(&doomed)
    }

    /// Remove the selected polygons and clear the selection.
    pub fn delete_selected(&mut self) -> usize {
        let doomed = std::mem::take(&mut self.selected);
        self.remove_ids(&doomed)
    }

    fn remove_ids(&mut self, ids: &[PolygonId]) -> usize {
        if ids.is_empty() {
            return 0;
        }
        let before = self.polygons.len();
        self.polygons.retain(|p| !ids.contains(&p.id()));
        self.selected.retain(|id| !ids.contains(id));
        self.hovered_vertex = None;
        self.active_vertex = None;
        let removed = before - self.polygons.len();
        log::info!("🗑️ Removed {} polygon(s)", removed);
        removed
    }

    pub fn current_color(&self) -> Color {
        self.current_color
    }

    pub fn current_opacity(&self) -> f32 {
        self.current_opacity
    }

    pub fn set_current_color(&mut self, color: Color) {
        self.current_color = color;
    }

    pub fn set_current_opacity(&mut self, opacity: f32) {
        self.current_opacity = opacity.clamp(0.0, 1.0);
    }

    // ========================================================================
    // Dragging
    // ========================================================================

    /// Begin moving the sole selected polygon. `point` is world space.
    pub fn start_dragging_polygon(&mut self, point: Point) -> bool {
        let Some(id) = self.single_selected().map(Polygon::id) else {
            return false;
        };
        if let Some(p) = self.polygon_mut(id) {
            p.drag_offset = Point::default();
        }
        self.mode = Mode::DragPolygon;
        self.drag_start = Some(point);
        true
    }

    /// Translate the dragged polygon by the movement since the previous event.
    pub fn update_dragged_polygon(&mut self, point: Point) -> bool {
        if self.mode != Mode::DragPolygon {
            return false;
        }
        let (Some(start), Some(id)) = (self.drag_start, self.single_selected().map(Polygon::id))
        else {
            return false;
        };
        if let Some(p) = self.polygon_mut(id) {
            p.translate(point.x - start.x, point.y - start.y);
        }
        self.drag_start = Some(point);
        true
    }

    pub fn stop_dragging_polygon(&mut self) {
        if self.mode == Mode::DragPolygon {
            self.mode = Mode::Select;
            self.drag_start = None;
        }
    }

    /// Begin moving one vertex of the sole selected polygon.
    pub fn start_moving_vertex(&mut self, id: PolygonId, index: usize, point: Point) -> bool {
        let valid = self
            .single_selected()
            .is_some_and(|p| p.id() == id && index < p.vertex_count());
        if !valid {
            return false;
        }
        self.mode = Mode::MoveVertex;
        self.active_vertex = Some(index);
        self.drag_start = Some(point);
        true
    }

    /// Move the active vertex by the movement since the previous event.
    pub fn update_vertex_position(&mut self, point: Point) -> bool {
        if self.mode != Mode::MoveVertex {
            return false;
        }
        let (Some(start), Some(index), Some(id)) = (
            self.drag_start,
            self.active_vertex,
            self.single_selected().map(Polygon::id),
        ) else {
            return false;
        };
        let moved = self
            .polygon_mut(id)
            .is_some_and(|p| p.move_vertex(index, point.x - start.x, point.y - start.y));
        self.drag_start = Some(point);
        moved
    }

    pub fn stop_moving_vertex(&mut self) {
        if self.mode == Mode::MoveVertex {
            self.mode = Mode::Select;
            self.active_vertex = None;
            self.drag_start = None;
        }
    }

    pub fn active_vertex(&self) -> Option<usize> {
        self.active_vertex
    }

    pub fn hovered_vertex(&self) -> Option<usize> {
        self.hovered_vertex
    }

    pub fn set_hovered_vertex(&mut self, index: Option<usize>) {
        self.hovered_vertex = index;
    }

    // ========================================================================
    // Background image
    // ========================================================================

    /// Install a background and reset its offset.
    pub fn set_imported_image(&mut self, image: BackgroundImage) {
        log::info!("🖼️ Background set ({}x{})", image.width(), image.height());
        self.image = Some(image);
        self.image_offset = Point::default();
    }

    pub fn clear_imported_image(&mut self) {
        self.image = None;
        self.image_offset = Point::default();
    }

    pub fn imported_image(&self) -> Option<&BackgroundImage> {
        self.image.as_ref()
    }

    pub fn image_offset(&self) -> Point {
        self.image_offset
    }

    pub fn pan_image(&mut self, dx: f64, dy: f64) {
        self.image_offset = self.image_offset.offset(dx, dy);
    }

    // ========================================================================
    // Canvas and view
    // ========================================================================

    pub fn canvas_size(&self) -> (u32, u32) {
        self.canvas_size
    }

    /// Resize the canvas, scaling the image offset so the backdrop keeps its
    /// apparent position.
    pub fn resize_canvas(&mut self, width: u32, height: u32) {
        let (old_w, old_h) = self.canvas_size;
        if old_w > 0 && old_h > 0 {
            self.image_offset = Point::new(
                self.image_offset.x * f64::from(width) / f64::from(old_w),
                self.image_offset.y * f64::from(height) / f64::from(old_h),
            );
        }
        self.canvas_size = (width, height);
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn zoom_bounds(&self) -> ZoomBounds {
        self.zoom_bounds
    }

    /// Set the zoom range; inverted or degenerate ranges are normalised.
    pub fn set_zoom_bounds(&mut self, bounds: ZoomBounds) {
        let bounds = bounds.normalized();
        self.zoom_bounds = bounds;
        self.view.set_scale(self.view.scale, bounds);
    }

    pub fn screen_to_world(&self, screen: Point) -> Point {
        self.view.screen_to_world(screen)
    }

    /// Zoom about a screen point. Returns whether the scale changed.
    pub fn zoom_at(&mut self, factor: f64, cursor: Point) -> bool {
        self.view.zoom_at(factor, cursor, self.zoom_bounds)
    }

    pub fn pan_view(&mut self, dx: f64, dy: f64) {
        self.view.pan_by(dx, dy);
    }

    pub fn reset_view(&mut self) {
        self.view.reset();
    }

    // ========================================================================
    // Bulk
    // ========================================================================

    /// Drop all polygons, the in-progress polygon, the selection and the
    /// background. The mode is kept.
    pub fn clear(&mut self) {
        self.polygons.clear();
        self.current = None;
        self.selected.clear();
        self.selection_rect = None;
        self.image = None;
        self.image_offset = Point::default();
        self.active_vertex = None;
        self.hovered_vertex = None;
        self.drag_start = None;
        if self.mode.is_transient() {
            self.mode = Mode::Select;
        }
        log::info!("🧹 Canvas cleared");
    }

    /// Replace all committed polygons, assigning fresh ids. Selection flags
    /// on the input are ignored and polygons with fewer than three vertices
    /// are skipped. Returns how many were kept.
    pub fn replace_polygons(&mut self, polygons: Vec<Polygon>) -> usize {
        self.clear_selection();
        self.polygons.clear();
        for mut polygon in polygons {
            if !polygon.is_closable() {
                log::warn!("Skipping polygon with {} vertices", polygon.vertex_count());
                continue;
            }
            polygon.assign_id(self.next_id);
            polygon.selected = false;
            self.next_id += 1;
            self.polygons.push(polygon);
        }
        self.polygons.len()
    }

    fn polygon_mut(&mut self, id: PolygonId) -> Option<&mut Polygon> {
        self.polygons.iter_mut().find(|p| p.id() == id)
    }
}
