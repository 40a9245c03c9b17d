use thiserror::Error;

/// Errors produced by the raster back end.
#[derive(Error, Debug)]
pub enum RasterError {
    /// A pixmap could not be allocated for the requested size.
    #[error("invalid canvas size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    /// A color string was not `#rgb` or `#rrggbb`.
    #[error("invalid color '{0}'")]
    ColorParse(String),

    /// PNG encoding failed.
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}
