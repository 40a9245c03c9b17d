//! Tag registry.
//!
//! Holds the user's tags in creation order and tracks which one is active.
//! Cascading effects on polygons (recolor, delete) are applied by the editor,
//! which owns both the registry and the scene.

use polycanvas_raster::Color;

use crate::error::TagError;
use crate::model::{ActiveTag, Tag};

#[derive(Debug, Clone, Default)]
pub struct TagStore {
    tags: Vec<Tag>,
    active: Option<usize>,
}

impl TagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag. The name is trimmed and must be non-empty and unique.
    ///
    /// The first tag added becomes active.
    pub fn add(&mut self, name: &str, color: Color, opacity: f32) -> Result<&Tag, TagError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TagError::EmptyName);
        }
        if self.position(name).is_some() {
            return Err(TagError::DuplicateName(name.to_string()));
        }

        self.tags.push(Tag::new(name, color, opacity));
        let index = self.tags.len() - 1;
        if self.tags.len() == 1 {
            self.active = Some(index);
        }
        log::debug!("🏷️ Added tag '{}' ({}, {:.2})", name, color, opacity);
        Ok(&self.tags[index])
    }

    /// Make the named tag active.
    pub fn select(&mut self, name: &str) -> Result<&Tag, TagError> {
        let index = self
            .position(name)
            .ok_or_else(|| TagError::NotFound(name.to_string()))?;
        self.active = Some(index);
        Ok(&self.tags[index])
    }

    pub fn active(&self) -> Option<&Tag> {
        self.active.and_then(|i| self.tags.get(i))
    }

    pub fn clear_active(&mut self) {
        self.active = None;
    }

    /// Change a tag's color and opacity.
    pub fn edit(&mut self, name: &str, color: Color, opacity: f32) -> Result<&Tag, TagError> {
        let index = self
            .position(name)
            .ok_or_else(|| TagError::NotFound(name.to_string()))?;
        let tag = &mut self.tags[index];
        tag.color = color;
        tag.opacity = opacity.clamp(0.0, 1.0);
        Ok(&self.tags[index])
    }

    /// Remove a tag, clearing the active tag if it was the one removed.
    pub fn remove(&mut self, name: &str) -> Result<Tag, TagError> {
        let index = self
            .position(name)
            .ok_or_else(|| TagError::NotFound(name.to_string()))?;
        let removed = self.tags.remove(index);

        self.active = match self.active {
            Some(a) if a == index => None,
            Some(a) if a > index => Some(a - 1),
            other => other,
        };
        Ok(removed)
    }

    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.position(name).map(|i| &self.tags[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.tags.iter().position(|t| t.name == name)
    }
}

impl ActiveTag for TagStore {
    fn active_tag(&self) -> Option<&Tag> {
        self.active()
    }
}
