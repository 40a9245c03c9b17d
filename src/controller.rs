//! Interaction controller.
//!
//! Turns pointer, wheel and key input into scene mutations. It is bound once
//! for the lifetime of a canvas and dispatches on the scene's mode; the only
//! state it keeps itself is gesture bookkeeping in screen space.

use crate::config::{EditorConfig, InteractionConfig, ZoomConfig};
use crate::error::EditorError;
use crate::geometry::{Point, Rect, SelectionRect};
use crate::input::{Key, Modifiers, PointerButton, Tool};
use crate::keybindings::KeyBindings;
use crate::model::ActiveTag;
use crate::scene::{Mode, Scene};
use crate::transform::wheel_factor;

#[derive(Debug, Clone)]
pub struct Controller {
    interaction: InteractionConfig,
    zoom: ZoomConfig,
    keybindings: KeyBindings,

    /// Last known pointer position (screen), for the rubber band.
    pointer: Option<Point>,
    /// Shift was held when the marquee started.
    marquee_additive: bool,
    /// Previous screen position of a middle-button pan.
    pan_anchor: Option<Point>,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl Controller {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            interaction: config.interaction.clone(),
            zoom: config.zoom.clone(),
            keybindings: config.keybindings.clone(),
            pointer: None,
            marquee_additive: false,
            pan_anchor: None,
        }
    }

    /// Pick up changed thresholds and key bindings.
    pub fn apply_config(&mut self, config: &EditorConfig) {
        self.interaction = config.interaction.clone();
        self.zoom = config.zoom.clone();
        self.keybindings = config.keybindings.clone();
    }

    /// Last pointer position in screen space.
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn keybindings(&self) -> &KeyBindings {
        &self.keybindings
    }

    fn hit_radius(&self, scene: &Scene) -> f64 {
        scene
            .view()
            .screen_radius_to_world(self.interaction.vertex_hit_radius)
    }

    // ========================================================================
    // Tools
    // ========================================================================

    /// Switch tools. The draw tool needs an active tag.
    pub fn activate_tool(
        &mut self,
        scene: &mut Scene,
        tags: &dyn ActiveTag,
        tool: Tool,
    ) -> Result<(), EditorError> {
        self.pan_anchor = None;
        match tool {
            Tool::Draw => {
                if tags.active_tag().is_none() {
                    log::warn!("Draw tool rejected: no active tag");
                    return Err(EditorError::NoActiveTag);
                }
                if scene.current_polygon().is_none() {
                    scene.start_new_polygon();
                } else {
                    scene.set_mode(Mode::Draw);
                }
            }
            Tool::Select | Tool::Fill => scene.set_mode(tool.into()),
        }
        log::debug!("🔧 Tool: {}", tool.name());
        Ok(())
    }

    // ========================================================================
    // Pointer
    // ========================================================================

    /// Handle a button press. Returns whether a redraw is needed.
    pub fn pointer_pressed(
        &mut self,
        scene: &mut Scene,
        tags: &dyn ActiveTag,
        position: Point,
        button: PointerButton,
        modifiers: Modifiers,
    ) -> bool {
        self.pointer = Some(position);
        if button == PointerButton::Middle {
            self.pan_anchor = Some(position);
            return false;
        }

        let world = scene.screen_to_world(position);
        match (scene.mode(), button) {
            (Mode::Draw, PointerButton::Left) => self.draw_click(scene, tags, world),
            (Mode::Draw, PointerButton::Right) => self.draw_right_click(scene, tags, world),
            (Mode::Select, PointerButton::Left) => {
                self.select_press(scene, position, world, modifiers);
                true
            }
            (Mode::Fill, PointerButton::Left) => Self::fill_at(scene, tags, world),
            _ => false,
        }
    }

    fn draw_click(&self, scene: &mut Scene, tags: &dyn ActiveTag, world: Point) -> bool {
        let radius = self.hit_radius(scene);
        let closes = scene
            .current_polygon()
            .is_some_and(|p| p.is_closable() && p.is_near_first_vertex(world, radius));

        if closes {
            Self::finish_and_restart(scene, tags);
        } else {
            scene.add_vertex(world);
        }
        true
    }

    fn draw_right_click(&self, scene: &mut Scene, tags: &dyn ActiveTag, world: Point) -> bool {
        if scene.current_polygon().is_some_and(|p| p.is_closable()) {
            Self::finish_and_restart(scene, tags);
            return true;
        }
        Self::fill_at(scene, tags, world)
    }

    fn finish_and_restart(scene: &mut Scene, tags: &dyn ActiveTag) {
        if scene.finish_current_polygon(tags.active_tag()).is_some() {
            scene.start_new_polygon();
        }
    }

    /// Select the polygon under `world` exclusively and paint it with the
    /// current color.
    fn fill_at(scene: &mut Scene, tags: &dyn ActiveTag, world: Point) -> bool {
        let Some(id) = scene.get_polygon_at(world) else {
            return false;
        };
        scene.select_only(id);
        let (color, opacity) = (scene.current_color(), scene.current_opacity());
        scene.fill_selected_polygons(color, opacity, tags.active_tag());
        true
    }

    fn select_press(&mut self, scene: &mut Scene, screen: Point, world: Point, modifiers: Modifiers) {
        let radius = self.hit_radius(scene);

        if let Some(polygon) = scene.single_selected() {
            let id = polygon.id();
            if let Some(index) = polygon.vertex_near(world, radius) {
                scene.start_moving_vertex(id, index, world);
                return;
            }
            if polygon.contains_point(world) && !modifiers.shift {
                scene.start_dragging_polygon(world);
                return;
            }
        }

        match scene.get_polygon_at(world) {
            Some(id) if modifiers.shift => {
                scene.toggle_selection(id);
            }
            Some(id) => {
                scene.select_only(id);
            }
            None => {
                if !modifiers.shift {
                    scene.clear_selection();
                }
                self.marquee_additive = modifiers.shift;
                scene.set_selection_rect(Some(SelectionRect::at(screen)));
            }
        }
    }

    /// Handle pointer movement. Returns whether a redraw is needed.
    pub fn pointer_moved(&mut self, scene: &mut Scene, position: Point) -> bool {
        self.pointer = Some(position);

        if let Some(anchor) = self.pan_anchor {
            scene.pan_view(position.x - anchor.x, position.y - anchor.y);
            self.pan_anchor = Some(position);
            return true;
        }

        let world = scene.screen_to_world(position);
        match scene.mode() {
            Mode::Draw => {
                let radius = self.hit_radius(scene);
                let near_first = scene
                    .current_polygon()
                    .is_some_and(|p| p.is_closable() && p.is_near_first_vertex(world, radius));
                scene.set_hovered_vertex(near_first.then_some(0));
                scene.current_polygon().is_some()
            }
            Mode::Select => {
                if let Some(mut rect) = scene.selection_rect().copied() {
                    rect.drag_to(position);
                    scene.set_selection_rect(Some(rect));
                    return true;
                }
                let radius = self.hit_radius(scene);
                let hovered = scene
                    .single_selected()
                    .and_then(|p| p.vertex_near(world, radius));
                let changed = hovered != scene.hovered_vertex();
                scene.set_hovered_vertex(hovered);
                changed
            }
            Mode::MoveVertex => scene.update_vertex_position(world),
            Mode::DragPolygon => scene.update_dragged_polygon(world),
            Mode::Idle | Mode::Fill => false,
        }
    }

    /// Handle a button release. Returns whether a redraw is needed.
    pub fn pointer_released(
        &mut self,
        scene: &mut Scene,
        position: Point,
        button: PointerButton,
    ) -> bool {
        self.pointer = Some(position);
        match button {
            PointerButton::Middle => {
                self.pan_anchor = None;
                false
            }
            PointerButton::Left => match scene.mode() {
                Mode::MoveVertex => {
                    scene.stop_moving_vertex();
                    true
                }
                Mode::DragPolygon => {
                    scene.stop_dragging_polygon();
                    true
                }
                Mode::Select => self.finish_marquee(scene, position),
                _ => false,
            },
            PointerButton::Right => false,
        }
    }

    fn finish_marquee(&mut self, scene: &mut Scene, position: Point) -> bool {
        let Some(mut rect) = scene.selection_rect().copied() else {
            return false;
        };
        rect.drag_to(position);
        scene.set_selection_rect(None);

        if rect.exceeds(self.interaction.marquee_min_size) {
            let screen = rect.normalized();
            let world = Rect::from_corners(
                scene.screen_to_world(screen.top_left()),
                scene.screen_to_world(screen.bottom_right()),
            );
            scene.select_in_rect(&world, self.marquee_additive);
        }
        self.marquee_additive = false;
        true
    }

    /// Zoom about the pointer. Ignored in draw mode while a polygon is in
    /// progress, even an empty one.
    pub fn wheel(&mut self, scene: &mut Scene, position: Point, delta_y: f64) -> bool {
        if scene.mode() == Mode::Draw && scene.current_polygon().is_some() {
            return false;
        }
        let factor = wheel_factor(delta_y, self.zoom.wheel_step);
        let changed = scene.zoom_at(factor, position);
        if changed {
            log::debug!("🔍 Zoom {:.2}", scene.view().scale);
        }
        changed
    }

    // ========================================================================
    // Keyboard
    // ========================================================================

    /// Global shortcuts. Returns whether a redraw is needed.
    pub fn key_pressed(
        &mut self,
        scene: &mut Scene,
        tags: &dyn ActiveTag,
        key: Key,
        modifiers: Modifiers,
    ) -> Result<bool, EditorError> {
        match key {
            Key::Delete => Ok(scene.delete_selected() > 0),
            Key::Escape => {
                if scene.mode() == Mode::Draw {
                    scene.start_new_polygon();
                    Ok(true)
                } else if !scene.selected_ids().is_empty() {
                    scene.clear_selection();
                    Ok(true)
                } else {
                    Ok(false)
                }
            }
            Key::Char(_) => match self.keybindings.tool_for_key(key, modifiers) {
                Some(tool) => {
                    self.activate_tool(scene, tags, tool)?;
                    Ok(true)
                }
                None => Ok(false),
            },
            Key::Other => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Polygon, Tag};
    use polycanvas_raster::Color;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn active() -> Option<Tag> {
        Some(Tag::new("car", Color::RED, 0.5))
    }

    fn click(c: &mut Controller, scene: &mut Scene, tags: &dyn ActiveTag, x: f64, y: f64) {
        c.pointer_pressed(scene, tags, Point::new(x, y), PointerButton::Left, Modifiers::NONE);
        c.pointer_released(scene, Point::new(x, y), PointerButton::Left);
    }

    fn draw_square(c: &mut Controller, scene: &mut Scene, tags: &dyn ActiveTag, x: f64, y: f64) {
        c.activate_tool(scene, tags, Tool::Draw).unwrap();
        click(c, scene, tags, x, y);
        click(c, scene, tags, x + 40.0, y);
        click(c, scene, tags, x + 40.0, y + 40.0);
        click(c, scene, tags, x, y + 40.0);
        click(c, scene, tags, x + 2.0, y + 2.0);
    }

    #[test]
    fn test_draw_tool_requires_tag() {
        let mut scene = Scene::new();
        let mut c = Controller::default();
        let err = c.activate_tool(&mut scene, &None::<Tag>, Tool::Draw).unwrap_err();
        assert!(matches!(err, EditorError::NoActiveTag));
        assert_eq!(scene.mode(), Mode::Idle);
        assert!(scene.current_polygon().is_none());
    }

    #[test]
    fn test_click_near_first_vertex_closes() {
        let mut scene = Scene::new();
        let mut c = Controller::default();
        let tags = active();
        scene.set_current_color(Color::GREEN);
        draw_square(&mut c, &mut scene, &tags, 10.0, 10.0);

        assert_eq!(scene.polygons().len(), 1);
        let p = &scene.polygons()[0];
        assert_eq!(p.vertex_count(), 4);
        assert_eq!(p.tag_name.as_deref(), Some("car"));
        assert_eq!(p.fill_color, Some(Color::GREEN));
        assert_eq!(scene.current_polygon().map(Polygon::vertex_count), Some(0));
        assert_eq!(scene.mode(), Mode::Draw);
    }

    #[test]
    fn test_click_near_first_with_two_vertices_appends() {
        let mut scene = Scene::new();
        let mut c = Controller::default();
        let tags = active();
        c.activate_tool(&mut scene, &tags, Tool::Draw).unwrap();
        click(&mut c, &mut scene, &tags, 0.0, 0.0);
        click(&mut c, &mut scene, &tags, 50.0, 0.0);
        click(&mut c, &mut scene, &tags, 1.0, 1.0);
        assert!(scene.polygons().is_empty());
        assert_eq!(scene.current_polygon().map(Polygon::vertex_count), Some(3));
    }

    #[test]
    fn test_closing_radius_is_screen_space() {
        let mut scene = Scene::new();
        let mut c = Controller::default();
        let tags = active();
        // At 4x, 10 screen px is 2.5 world units.
        scene.zoom_at(4.0, Point::new(0.0, 0.0));
        c.activate_tool(&mut scene, &tags, Tool::Draw).unwrap();
        click(&mut c, &mut scene, &tags, 0.0, 0.0);
        click(&mut c, &mut scene, &tags, 200.0, 0.0);
        click(&mut c, &mut scene, &tags, 200.0, 200.0);
        click(&mut c, &mut scene, &tags, 12.0, 0.0);
        assert!(scene.polygons().is_empty());
        click(&mut c, &mut scene, &tags, 1.0, 8.0);
        assert_eq!(scene.polygons().len(), 1);
        assert_eq!(scene.polygons()[0].vertex_count(), 4);
    }

    #[test]
    fn test_right_click_finishes_or_fills() {
        let mut scene = Scene::new();
        let mut c = Controller::default();
        let tags = active();
        c.activate_tool(&mut scene, &tags, Tool::Draw).unwrap();
        for (x, y) in [(0.0, 0.0), (100.0, 0.0), (50.0, 100.0)] {
            click(&mut c, &mut scene, &tags, x, y);
        }
        c.pointer_pressed(&mut scene, &tags, Point::new(500.0, 500.0), PointerButton::Right, Modifiers::NONE);
        assert_eq!(scene.polygons().len(), 1);
        let id = scene.polygons()[0].id();

        // Nothing in progress now, so a right click inside fills the polygon.
        scene.set_current_color(Color::BLACK);
        scene.set_current_opacity(0.3);
        let redraw = c.pointer_pressed(&mut scene, &tags, Point::new(50.0, 30.0), PointerButton::Right, Modifiers::NONE);
        assert!(redraw);
        assert_eq!(scene.selected_ids(), &[id]);
        assert_eq!(scene.polygon(id).unwrap().fill(), Some((Color::BLACK, 0.3)));
        assert!(scene.selection_consistent());
    }

    #[test]
    fn test_select_click_shift_toggle_and_empty_clear() {
        let mut scene = Scene::new();
        let mut c = Controller::default();
        let tags = active();
        draw_square(&mut c, &mut scene, &tags, 0.0, 0.0);
        draw_square(&mut c, &mut scene, &tags, 100.0, 0.0);
        let (a, b) = (scene.polygons()[0].id(), scene.polygons()[1].id());
        c.activate_tool(&mut scene, &tags, Tool::Select).unwrap();
        assert!(scene.current_polygon().is_none());

        click(&mut c, &mut scene, &tags, 20.0, 20.0);
        assert_eq!(scene.selected_ids(), &[a]);

        c.pointer_pressed(&mut scene, &tags, Point::new(120.0, 20.0), PointerButton::Left, Modifiers::SHIFT);
        c.pointer_released(&mut scene, Point::new(120.0, 20.0), PointerButton::Left);
        assert_eq!(scene.selected_ids(), &[a, b]);

        click(&mut c, &mut scene, &tags, 300.0, 300.0);
        assert!(scene.selected_ids().is_empty());
        assert!(scene.selection_consistent());
    }

    #[test]
    fn test_marquee_selects_by_vertex() {
        let mut scene = Scene::new();
        let mut c = Controller::default();
        let tags = active();
        draw_square(&mut c, &mut scene, &tags, 0.0, 0.0);
        draw_square(&mut c, &mut scene, &tags, 100.0, 0.0);
        draw_square(&mut c, &mut scene, &tags, 200.0, 0.0);
        let ids: Vec<_> = scene.polygons().iter().map(Polygon::id).collect();
        c.activate_tool(&mut scene, &tags, Tool::Select).unwrap();

        // Covers the right edge of the first square and the left edge of the second.
        c.pointer_pressed(&mut scene, &tags, Point::new(30.0, 60.0), PointerButton::Left, Modifiers::NONE);
        c.pointer_moved(&mut scene, Point::new(60.0, 30.0));
        assert!(scene.selection_rect().is_some());
        c.pointer_released(&mut scene, Point::new(110.0, -10.0), PointerButton::Left);
        assert!(scene.selection_rect().is_none());
        assert_eq!(scene.selected_ids(), &ids[..2]);

        // Shift keeps the prior selection.
        c.pointer_pressed(&mut scene, &tags, Point::new(230.0, -5.0), PointerButton::Left, Modifiers::SHIFT);
        c.pointer_released(&mut scene, Point::new(250.0, 5.0), PointerButton::Left);
        assert_eq!(scene.selected_ids(), &ids[..]);
        assert!(scene.selection_consistent());
    }

    #[test]
    fn test_tiny_marquee_selects_nothing() {
        let mut scene = Scene::new();
        let mut c = Controller::default();
        let tags = active();
        draw_square(&mut c, &mut scene, &tags, 0.0, 0.0);
        c.activate_tool(&mut scene, &tags, Tool::Select).unwrap();
        c.pointer_pressed(&mut scene, &tags, Point::new(41.0, 41.0), PointerButton::Left, Modifiers::NONE);
        c.pointer_released(&mut scene, Point::new(38.0, 38.0), PointerButton::Left);
        assert!(scene.selected_ids().is_empty());
    }

    #[test]
    fn test_drag_polygon_under_zoom() {
        let mut scene = Scene::new();
        let mut c = Controller::default();
        let tags = active();
        draw_square(&mut c, &mut scene, &tags, 0.0, 0.0);
        let id = scene.polygons()[0].id();
        c.activate_tool(&mut scene, &tags, Tool::Select).unwrap();
        click(&mut c, &mut scene, &tags, 20.0, 20.0);

        scene.zoom_at(2.0, Point::new(0.0, 0.0));
        // World (10,10) is screen (20,20) at 2x.
        c.pointer_pressed(&mut scene, &tags, Point::new(20.0, 20.0), PointerButton::Left, Modifiers::NONE);
        assert_eq!(scene.mode(), Mode::DragPolygon);
        for i in 1..=5 {
            c.pointer_moved(&mut scene, Point::new(20.0 + 8.0 * f64::from(i), 20.0));
        }
        c.pointer_released(&mut scene, Point::new(60.0, 20.0), PointerButton::Left);
        assert_eq!(scene.mode(), Mode::Select);

        let first = scene.polygon(id).unwrap().vertices[0];
        assert!(approx_eq(first.x, 20.0));
        assert!(approx_eq(first.y, 0.0));
    }

    #[test]
    fn test_move_vertex_via_hover_radius() {
        let mut scene = Scene::new();
        let mut c = Controller::default();
        let tags = active();
        draw_square(&mut c, &mut scene, &tags, 0.0, 0.0);
        let id = scene.polygons()[0].id();
        c.activate_tool(&mut scene, &tags, Tool::Select).unwrap();
        click(&mut c, &mut scene, &tags, 20.0, 20.0);

        c.pointer_moved(&mut scene, Point::new(43.0, 38.0));
        assert_eq!(scene.hovered_vertex(), Some(2));

        c.pointer_pressed(&mut scene, &tags, Point::new(43.0, 38.0), PointerButton::Left, Modifiers::NONE);
        assert_eq!(scene.mode(), Mode::MoveVertex);
        c.pointer_moved(&mut scene, Point::new(53.0, 48.0));
        c.pointer_released(&mut scene, Point::new(53.0, 48.0), PointerButton::Left);

        let p = scene.polygon(id).unwrap();
        assert_eq!(p.vertices[2], Point::new(50.0, 50.0));
        assert_eq!(p.vertices[0], Point::new(0.0, 0.0));
    }

    #[test]
    fn test_fill_mode_click() {
        let mut scene = Scene::new();
        let mut c = Controller::default();
        let tags = active();
        draw_square(&mut c, &mut scene, &tags, 0.0, 0.0);
        draw_square(&mut c, &mut scene, &tags, 100.0, 0.0);
        let b = scene.polygons()[1].id();
        c.activate_tool(&mut scene, &tags, Tool::Fill).unwrap();
        scene.set_current_color(Color::WHITE);

        click(&mut c, &mut scene, &tags, 120.0, 20.0);
        assert_eq!(scene.selected_ids(), &[b]);
        assert_eq!(scene.polygon(b).unwrap().fill_color, Some(Color::WHITE));
        assert_ne!(scene.polygons()[0].fill_color, Some(Color::WHITE));
    }

    #[test]
    fn test_wheel_ignored_while_drawing() {
        let mut scene = Scene::new();
        let mut c = Controller::default();
        let tags = active();
        c.activate_tool(&mut scene, &tags, Tool::Draw).unwrap();
        let before = *scene.view();
        assert!(!c.wheel(&mut scene, Point::new(10.0, 10.0), -1.0));
        click(&mut c, &mut scene, &tags, 5.0, 5.0);
        assert!(!c.wheel(&mut scene, Point::new(10.0, 10.0), -1.0));
        assert_eq!(*scene.view(), before);

        // After a clear nothing is in progress until the next click.
        scene.clear();
        assert_eq!(scene.mode(), Mode::Draw);
        assert!(c.wheel(&mut scene, Point::new(10.0, 10.0), -1.0));

        c.activate_tool(&mut scene, &tags, Tool::Select).unwrap();
        assert!(c.wheel(&mut scene, Point::new(10.0, 10.0), -1.0));
    }

    #[test]
    fn test_middle_drag_pans() {
        let mut scene = Scene::new();
        let mut c = Controller::default();
        let tags = active();
        c.pointer_pressed(&mut scene, &tags, Point::new(10.0, 10.0), PointerButton::Middle, Modifiers::NONE);
        c.pointer_moved(&mut scene, Point::new(15.0, 12.0));
        c.pointer_moved(&mut scene, Point::new(30.0, 20.0));
        c.pointer_released(&mut scene, Point::new(30.0, 20.0), PointerButton::Middle);
        assert_eq!(scene.view().origin_x, 20.0);
        assert_eq!(scene.view().origin_y, 10.0);
        assert!(!c.pointer_moved(&mut scene, Point::new(50.0, 50.0)));
    }

    #[test]
    fn test_keyboard_shortcuts() {
        let mut scene = Scene::new();
        let mut c = Controller::default();
        let tags = active();
        draw_square(&mut c, &mut scene, &tags, 0.0, 0.0);
        click(&mut c, &mut scene, &tags, 100.0, 100.0);

        // Escape in draw mode restarts the in-progress polygon.
        assert!(c.key_pressed(&mut scene, &tags, Key::Escape, Modifiers::NONE).unwrap());
        assert_eq!(scene.current_polygon().map(Polygon::vertex_count), Some(0));

        assert!(c.key_pressed(&mut scene, &tags, Key::Char('s'), Modifiers::NONE).unwrap());
        assert_eq!(scene.mode(), Mode::Select);
        click(&mut c, &mut scene, &tags, 20.0, 20.0);
        assert_eq!(scene.selected_ids().len(), 1);

        assert!(c.key_pressed(&mut scene, &tags, Key::Escape, Modifiers::NONE).unwrap());
        assert!(scene.selected_ids().is_empty());

        click(&mut c, &mut scene, &tags, 20.0, 20.0);
        assert!(c.key_pressed(&mut scene, &tags, Key::Delete, Modifiers::NONE).unwrap());
        assert!(scene.polygons().is_empty());

        let ctrl = Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        };
        assert!(!c.key_pressed(&mut scene, &tags, Key::Char('f'), ctrl).unwrap());
        assert_eq!(scene.mode(), Mode::Select);
        assert!(!c.key_pressed(&mut scene, &tags, Key::Char('D'), Modifiers::SHIFT).unwrap());
        assert_eq!(scene.mode(), Mode::Select);

        let err = c.key_pressed(&mut scene, &None::<Tag>, Key::Char('d'), Modifiers::NONE);
        assert!(matches!(err, Err(EditorError::NoActiveTag)));
        assert_eq!(scene.mode(), Mode::Select);
    }
}
