//! Error types for editor operations.
//!
//! Interaction handlers guard their preconditions and rarely fail; these
//! errors cover the operations a host has to report to the user.

use polycanvas_raster::RasterError;
use thiserror::Error;

/// Errors from tag registry operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TagError {
    #[error("Tag name must not be empty")]
    EmptyName,

    #[error("A tag named '{0}' already exists")]
    DuplicateName(String),

    #[error("Tag not found: {0}")]
    NotFound(String),
}

/// Errors from the segmentation hand-off.
#[derive(Error, Debug)]
pub enum SegmentationError {
    /// The backend could not be reached or answered with an error
    #[error("Segmentation request failed: {0}")]
    Transport(String),

    /// The backend answered without a mask
    #[error("Segmentation response contained no mask")]
    EmptyMask,

    #[error("Mask is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Mask could not be decoded: {0}")]
    Decode(#[from] image::ImageError),
}

/// Errors surfaced by [`Editor`](crate::Editor) operations.
#[derive(Error, Debug)]
pub enum EditorError {
    /// Drawing and segmentation need an active tag
    #[error("Select a tag before drawing")]
    NoActiveTag,

    /// Operation needs a background image
    #[error("Import an image first")]
    NoImage,

    /// A segmentation request is already in flight
    #[error("A segmentation request is already running")]
    SegmentationBusy,

    /// A segmentation result arrived without a matching request
    #[error("No segmentation request is running")]
    NoSegmentationPending,

    #[error(transparent)]
    Segmentation(#[from] SegmentationError),

    #[error(transparent)]
    Tag(#[from] TagError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Render error: {0}")]
    Raster(#[from] RasterError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
