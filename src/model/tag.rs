//! Tag data model.
//!
//! A tag is a named color/opacity preset. Polygons record the name of the tag
//! that was active when they were committed or last filled.

use polycanvas_raster::Color;
use serde::{Deserialize, Serialize};

/// A named paint preset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tag {
    /// Display name, unique within a tag store
    pub name: String,
    /// Fill color applied to polygons carrying this tag
    pub color: Color,
    /// Fill opacity in 0..=1
    pub opacity: f32,
}

impl Tag {
    /// Create a new tag; opacity is clamped to 0..=1.
    pub fn new(name: &str, color: Color, opacity: f32) -> Self {
        Self {
            name: name.to_string(),
            color,
            opacity: opacity.clamp(0.0, 1.0),
        }
    }
}

/// Read-only access to the currently active tag.
///
/// Scene and controller operations take this instead of reaching into a
/// global, so tests can pass a bare `Option<Tag>`.
pub trait ActiveTag {
    fn active_tag(&self) -> Option<&Tag>;

    fn active_tag_name(&self) -> Option<&str> {
        self.active_tag().map(|t| t.name.as_str())
    }
}

impl ActiveTag for Option<Tag> {
    fn active_tag(&self) -> Option<&Tag> {
        self.as_ref()
    }
}

impl ActiveTag for Tag {
    fn active_tag(&self) -> Option<&Tag> {
        Some(self)
    }
}
