//! JSON snapshot of a scene's annotations.
//!
//! Only durable content is captured: polygons, paint settings, canvas size
//! and the tag list. Selection, view and background are left out.

use polycanvas_raster::Color;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CANVAS_SIZE, DEFAULT_COLOR, DEFAULT_OPACITY};
use crate::error::TagError;
use crate::geometry::Point;
use crate::model::{Polygon, Tag};
use crate::scene::Scene;
use crate::tags::TagStore;

/// One committed polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonRecord {
    pub vertices: Vec<Point>,
    #[serde(default)]
    pub fill_color: Option<Color>,
    #[serde(default = "default_opacity")]
    pub fill_opacity: f32,
    #[serde(default)]
    pub tag: Option<String>,
}

impl From<&Polygon> for PolygonRecord {
    fn from(polygon: &Polygon) -> Self {
        Self {
            vertices: polygon.vertices.clone(),
            fill_color: polygon.fill_color,
            fill_opacity: polygon.fill_opacity,
            tag: polygon.tag_name.clone(),
        }
    }
}

impl From<PolygonRecord> for Polygon {
    fn from(record: PolygonRecord) -> Self {
        let mut polygon = Polygon::from_vertices(record.vertices);
        polygon.fill_color = record.fill_color;
        polygon.fill_opacity = record.fill_opacity.clamp(0.0, 1.0);
        polygon.tag_name = record.tag;
        polygon
    }
}

fn default_opacity() -> f32 {
    DEFAULT_OPACITY
}

fn default_color() -> Color {
    DEFAULT_COLOR
}

fn default_width() -> u32 {
    DEFAULT_CANVAS_SIZE.0
}

fn default_height() -> u32 {
    DEFAULT_CANVAS_SIZE.1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_color")]
    pub current_color: Color,
    #[serde(default = "default_opacity")]
    pub current_opacity: f32,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub polygons: Vec<PolygonRecord>,
}

impl SceneDocument {
    pub fn from_scene(scene: &Scene, tags: &TagStore) -> Self {
        let (width, height) = scene.canvas_size();
        Self {
            width,
            height,
            current_color: scene.current_color(),
            current_opacity: scene.current_opacity(),
            tags: tags.iter().cloned().collect(),
            polygons: scene.polygons().iter().map(PolygonRecord::from).collect(),
        }
    }

    /// Replace the scene's polygons and paint settings with this snapshot.
    ///
    /// Polygons with fewer than three vertices are skipped.
    pub fn apply_to(&self, scene: &mut Scene) {
        scene.resize_canvas(self.width, self.height);
        scene.set_current_color(self.current_color);
        scene.set_current_opacity(self.current_opacity);

        let polygons: Vec<Polygon> = self
            .polygons
            .iter()
            .cloned()
            .map(Polygon::from)
            .collect();
        let loaded = scene.replace_polygons(polygons);
        log::info!("📄 Loaded {} polygon(s) from document", loaded);
    }

    /// Rebuild a tag store from the snapshot's tags.
    pub fn tag_store(&self) -> Result<TagStore, TagError> {
        let mut store = TagStore::new();
        for tag in &self.tags {
            store.add(&tag.name, tag.color, tag.opacity)?;
        }
        Ok(store)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ActiveTag;

    #[test]
    fn test_snapshot_restores_polygons_and_paint() {
        let mut scene = Scene::with_canvas_size(320, 240);
        let mut tags = TagStore::new();
        tags.add("roof", Color::RED, 0.6).unwrap();
        scene.set_current_color(Color::GREEN);
        scene.start_new_polygon();
        for (x, y) in [(1.0, 1.0), (30.0, 1.0), (15.0, 20.0)] {
            scene.add_vertex(Point::new(x, y));
        }
        scene.finish_current_polygon(tags.active());
        let id = scene.polygons()[0].id();
        scene.select_only(id);

        let json = SceneDocument::from_scene(&scene, &tags).to_json().unwrap();
        let doc = SceneDocument::from_json(&json).unwrap();

        let mut restored = Scene::new();
        doc.apply_to(&mut restored);
        assert_eq!(restored.canvas_size(), (320, 240));
        assert_eq!(restored.current_color(), Color::GREEN);
        let p = &restored.polygons()[0];
        assert_eq!(p.vertices, scene.polygons()[0].vertices);
        assert_eq!(p.tag_name.as_deref(), Some("roof"));
        assert!(restored.selected_ids().is_empty());
        assert!(restored.selection_consistent());
        assert_eq!(doc.tag_store().unwrap().active_tag_name(), Some("roof"));
    }

    #[test]
    fn test_minimal_document_uses_defaults() {
        let doc = SceneDocument::from_json(
            r##"{"polygons":[{"vertices":[{"x":0,"y":0},{"x":5,"y":0},{"x":0,"y":5}],"fill_color":"#f00"},
                 {"vertices":[{"x":0,"y":0}]}]}"##,
        )
        .unwrap();
        assert_eq!((doc.width, doc.height), DEFAULT_CANVAS_SIZE);

        let mut scene = Scene::new();
        doc.apply_to(&mut scene);
        assert_eq!(scene.polygons().len(), 1);
        assert_eq!(scene.polygons()[0].fill(), Some((Color::RED, 1.0)));
    }
}
