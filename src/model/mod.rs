//! Data models for polycanvas.

mod polygon;
mod tag;

pub use polygon::{Polygon, PolygonId};
pub use tag::{ActiveTag, Tag};
