//! Editor facade.
//!
//! Owns the scene, the tag registry, the controller and the renderer, and is
//! the single place where tag changes cascade into polygons and collaborator
//! results (imports, segmentation masks) enter the scene.

use polycanvas_raster::{Canvas, Color, DrawCommand};

use crate::background::{self, BackgroundImage};
use crate::config::EditorConfig;
use crate::controller::Controller;
use crate::document::SceneDocument;
use crate::error::{EditorError, SegmentationError};
use crate::export;
use crate::message::Message;
use crate::model::Tag;
use crate::render::{RenderOptions, RenderStyle, Renderer};
use crate::scene::{Mode, Scene};
use crate::segmentation::{self, SegmentationBackend};
use crate::tags::TagStore;

#[derive(Debug)]
pub struct Editor {
    scene: Scene,
    tags: TagStore,
    controller: Controller,
    renderer: Renderer,
    config: EditorConfig,
    segmentation_busy: bool,
    status_message: Option<String>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    /// Build an editor. Invalid zoom limits are normalised rather than
    /// rejected; use [`EditorConfig::validate`] to refuse them up front.
    pub fn new(config: EditorConfig) -> Self {
        if let Err(e) = config.validate() {
            log::warn!("Config problem, continuing with normalised values: {}", e);
        }
        let mut scene = Scene::new();
        scene.set_zoom_bounds(config.zoom.bounds());
        scene.set_current_color(config.preferences.default_color);
        scene.set_current_opacity(config.preferences.default_opacity);

        Self {
            scene,
            tags: TagStore::new(),
            controller: Controller::new(&config),
            renderer: Renderer::new(RenderStyle::from(&config.interaction)),
            config,
            segmentation_busy: false,
            status_message: None,
        }
    }

    pub fn with_canvas_size(config: EditorConfig, width: u32, height: u32) -> Self {
        let mut editor = Self::new(config);
        editor.scene.resize_canvas(width, height);
        editor
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn tags(&self) -> &TagStore {
        &self.tags
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Swap in new settings; thresholds, zoom limits and keys apply at once.
    pub fn apply_config(&mut self, config: EditorConfig) {
        if let Err(e) = config.validate() {
            log::warn!("Config problem, continuing with normalised values: {}", e);
        }
        self.controller.apply_config(&config);
        self.renderer = Renderer::new(RenderStyle::from(&config.interaction));
        self.scene.set_zoom_bounds(config.zoom.bounds());
        self.config = config;
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    fn set_status(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::info!("💬 {}", message);
        self.status_message = Some(message);
    }

    pub fn is_segmentation_busy(&self) -> bool {
        self.segmentation_busy
    }

    // ========================================================================
    // Messages
    // ========================================================================

    /// Apply one message. Returns whether the view needs a redraw.
    pub fn update(&mut self, message: Message) -> Result<bool, EditorError> {
        let result = self.dispatch(message);
        if let Err(e) = &result {
            self.set_status(e.to_string());
        }
        result
    }

    fn dispatch(&mut self, message: Message) -> Result<bool, EditorError> {
        let redraw = match message {
            Message::PointerPressed {
                position,
                button,
                modifiers,
            } => self.controller.pointer_pressed(
                &mut self.scene,
                &self.tags,
                position,
                button,
                modifiers,
            ),
            Message::PointerMoved { position } => {
                self.controller.pointer_moved(&mut self.scene, position)
            }
            Message::PointerReleased { position, button } => {
                self.controller
                    .pointer_released(&mut self.scene, position, button)
            }
            Message::Wheel { position, delta_y } => {
                self.controller.wheel(&mut self.scene, position, delta_y)
            }
            Message::KeyPressed { key, modifiers } => {
                self.controller
                    .key_pressed(&mut self.scene, &self.tags, key, modifiers)?
            }
            Message::ActivateTool(tool) => {
                self.controller
                    .activate_tool(&mut self.scene, &self.tags, tool)?;
                true
            }
            Message::SetColor(color) => {
                self.scene.set_current_color(color);
                self.refill_selection_in_fill_mode();
                true
            }
            Message::SetOpacity(opacity) => {
                self.scene.set_current_opacity(opacity);
                self.refill_selection_in_fill_mode();
                true
            }
            Message::DeleteSelected => self.scene.delete_selected() > 0,
            Message::ClearCanvas => {
                self.scene.clear();
                true
            }
            Message::ResetZoom => {
                self.scene.reset_view();
                true
            }
            Message::Resize { width, height } => {
                self.scene.resize_canvas(width, height);
                true
            }
        };
        Ok(redraw)
    }

    /// Color and opacity edits repaint the selection while the fill tool is active.
    fn refill_selection_in_fill_mode(&mut self) {
        if self.scene.mode() == Mode::Fill {
            let (color, opacity) = (self.scene.current_color(), self.scene.current_opacity());
            self.scene
                .fill_selected_polygons(color, opacity, self.tags.active());
        }
    }

    // ========================================================================
    // Tags
    // ========================================================================

    fn adopt_paint(&mut self, tag: &Tag) {
        self.scene.set_current_color(tag.color);
        self.scene.set_current_opacity(tag.opacity);
    }

    /// Register a tag. The first tag becomes active and sets the tool paint.
    pub fn add_tag(&mut self, name: &str, color: Color, opacity: f32) -> Result<(), EditorError> {
        let tag = self.tags.add(name, color, opacity)?.clone();
        if self.tags.active().is_some_and(|a| a.name == tag.name) {
            self.adopt_paint(&tag);
        }
        Ok(())
    }

    /// Make a tag active and take over its paint.
    pub fn select_tag(&mut self, name: &str) -> Result<(), EditorError> {
        match self.tags.select(name) {
            Ok(tag) => {
                let tag = tag.clone();
                self.adopt_paint(&tag);
                log::debug!("🏷️ Active tag: {}", tag.name);
                Ok(())
            }
            Err(e) => {
                log::warn!("Cannot select tag: {}", e);
                Err(e.into())
            }
        }
    }

    pub fn clear_active_tag(&mut self) {
        self.tags.clear_active();
    }

    /// Change a tag's paint, repainting every polygon that carries it.
    pub fn edit_tag(&mut self, name: &str, color: Color, opacity: f32) -> Result<usize, EditorError> {
        let tag = self.tags.edit(name, color, opacity)?.clone();
        let recolored = self.scene.recolor_tagged(name, tag.color, tag.opacity);
        if self.tags.active().is_some_and(|a| a.name == tag.name) {
            self.adopt_paint(&tag);
        }
        log::debug!("🏷️ Edited tag '{}', repainted {} polygon(s)", name, recolored);
        Ok(recolored)
    }

    /// Delete a tag together with every polygon carrying it.
    ///
    /// Returns the number of polygons removed.
    pub fn remove_tag(&mut self, name: &str) -> Result<usize, EditorError> {
        let was_active = self.tags.active().is_some_and(|a| a.name == name);
        let removed_tag = match self.tags.remove(name) {
            Ok(tag) => tag,
            Err(e) => {
                log::warn!("Cannot remove tag: {}", e);
                return Err(e.into());
            }
        };
        let removed = self.scene.remove_polygons_tagged(&removed_tag.name);
        if was_active {
            self.scene
                .set_current_color(self.config.preferences.default_color);
            self.scene
                .set_current_opacity(self.config.preferences.default_opacity);
        }
        self.set_status(format!(
            "Deleted tag '{}' and {} polygon(s)",
            removed_tag.name, removed
        ));
        Ok(removed)
    }

    // ========================================================================
    // Background
    // ========================================================================

    /// Decode and install a background image.
    ///
    /// Returns the image's dominant color as a suggestion for a new tag. A
    /// decode failure leaves the scene untouched.
    pub fn import_image(&mut self, bytes: &[u8]) -> Result<Color, EditorError> {
        let image = match BackgroundImage::decode(bytes) {
            Ok(image) => image,
            Err(e) => {
                log::error!("Failed to decode image: {}", e);
                let err = EditorError::Image(e);
                self.set_status(err.to_string());
                return Err(err);
            }
        };
        let dominant = background::dominant_color(image.pixels());
        self.set_background(image);
        Ok(dominant)
    }

    pub fn set_background(&mut self, image: BackgroundImage) {
        self.set_status(format!("Imported {}x{} image", image.width(), image.height()));
        self.scene.set_imported_image(image);
    }

    pub fn pan_background(&mut self, dx: f64, dy: f64) {
        self.scene.pan_image(dx, dy);
    }

    // ========================================================================
    // Rendering and export
    // ========================================================================

    /// Display list for the live view.
    pub fn display_list(&self) -> Vec<DrawCommand> {
        let options = RenderOptions::live(&self.scene, self.controller.pointer());
        self.renderer.build(&self.scene, &options)
    }

    /// Paint the live view onto `canvas`.
    pub fn render(&self, canvas: &mut Canvas) {
        canvas.execute(&self.display_list());
    }

    pub fn render_full(&self) -> Result<image::RgbaImage, EditorError> {
        Ok(export::render_full(&self.scene, &self.renderer)?)
    }

    pub fn export_png(&self) -> Result<Vec<u8>, EditorError> {
        Ok(export::export_png(&self.scene, &self.renderer)?)
    }

    pub fn to_data_url(&self) -> Result<String, EditorError> {
        Ok(export::to_data_url(&self.scene, &self.renderer)?)
    }

    // ========================================================================
    // Segmentation
    // ========================================================================

    /// Start a segmentation request and return the PNG to send.
    ///
    /// Needs an active tag and a background, and refuses while another
    /// request is outstanding.
    pub fn begin_segmentation(&mut self) -> Result<Vec<u8>, EditorError> {
        let checked = if self.segmentation_busy {
            Err(EditorError::SegmentationBusy)
        } else if self.tags.active().is_none() {
            Err(EditorError::NoActiveTag)
        } else if self.scene.imported_image().is_none() {
            Err(EditorError::NoImage)
        } else {
            Ok(())
        };
        if let Err(e) = checked {
            log::warn!("Segmentation rejected: {}", e);
            self.set_status(e.to_string());
            return Err(e);
        }

        let png = self.export_png()?;
        self.segmentation_busy = true;
        self.set_status("Running segmentation...");
        Ok(png)
    }

    /// Complete a request started with [`Editor::begin_segmentation`].
    ///
    /// On success the mask replaces the background and its offset is reset.
    /// Polygons and selection are never touched. A result arriving with no
    /// request outstanding is dropped with [`EditorError::NoSegmentationPending`].
    pub fn finish_segmentation(
        &mut self,
        result: Result<String, SegmentationError>,
    ) -> Result<(), EditorError> {
        if !self.segmentation_busy {
            log::warn!("Ignoring segmentation result: no request outstanding");
            return Err(EditorError::NoSegmentationPending);
        }
        self.segmentation_busy = false;
        match result.and_then(|mask| segmentation::decode_mask(&mask)) {
            Ok(mask) => {
                self.scene.set_imported_image(mask);
                self.set_status("Segmentation finished");
                Ok(())
            }
            Err(e) => {
                log::error!("Segmentation failed: {}", e);
                let err = EditorError::Segmentation(e);
                self.set_status(err.to_string());
                Err(err)
            }
        }
    }

    /// Run a full round-trip against a synchronous backend.
    pub fn run_segmentation(&mut self, backend: &dyn SegmentationBackend) -> Result<(), EditorError> {
        let png = self.begin_segmentation()?;
        let result = backend.segment(&png);
        self.finish_segmentation(result)
    }

    // ========================================================================
    // Documents
    // ========================================================================

    pub fn document(&self) -> SceneDocument {
        SceneDocument::from_scene(&self.scene, &self.tags)
    }

    /// Replace polygons, paint and tags with a snapshot.
    pub fn load_document(&mut self, document: &SceneDocument) -> Result<(), EditorError> {
        let tags = document.tag_store()?;
        document.apply_to(&mut self.scene);
        self.tags = tags;
        Ok(())
    }
}
