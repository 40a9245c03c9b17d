//! polycanvas_raster - software raster back end for polycanvas
//!
//! The annotation engine describes a frame as a list of [`DrawCommand`]s;
//! this crate executes them on a tiny-skia pixmap and converts the result
//! into an [`image::RgbaImage`] or PNG bytes.

mod canvas;
mod color;
mod command;
mod error;

pub use canvas::Canvas;
pub use color::Color;
pub use command::{DrawCommand, Dash};
pub use error::RasterError;
