//! polycanvas - polygon annotation engine
//!
//! Draw, select, fill, move and export polygon annotations over a raster
//! background. The engine is headless: hosts feed it [`Message`]s in screen
//! coordinates and paint the [`DrawCommand`](polycanvas_raster::DrawCommand)
//! lists it produces, or let [`polycanvas_raster::Canvas`] do it.

pub mod background;
pub mod config;
pub mod constants;
pub mod controller;
pub mod document;
pub mod editor;
pub mod error;
pub mod export;
pub mod geometry;
pub mod input;
pub mod keybindings;
pub mod message;
pub mod model;
pub mod render;
pub mod scene;
pub mod segmentation;
pub mod tags;
pub mod transform;

#[cfg(test)]
mod tests;

pub use background::BackgroundImage;
pub use config::{ConfigError, EditorConfig, LogLevel};
pub use controller::Controller;
pub use document::SceneDocument;
pub use editor::Editor;
pub use error::{EditorError, SegmentationError, TagError};
pub use geometry::{Point, Rect};
pub use input::{Key, Modifiers, PointerButton, Tool};
pub use message::Message;
pub use model::{ActiveTag, Polygon, PolygonId, Tag};
pub use render::{RenderOptions, Renderer};
pub use scene::{Mode, Scene};
pub use segmentation::SegmentationBackend;
pub use tags::TagStore;
pub use transform::ViewTransform;

pub use polycanvas_raster::{Canvas, Color};
