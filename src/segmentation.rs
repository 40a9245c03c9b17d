//! Hand-off to an external segmentation service.
//!
//! The editor sends the composited canvas as PNG and gets a base64 PNG mask
//! back, which replaces the background. How the bytes travel is up to the
//! host; it plugs in a [`SegmentationBackend`].

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;

use crate::background::BackgroundImage;
use crate::error::SegmentationError;

/// Something that can turn a PNG into a base64-encoded PNG mask.
pub trait SegmentationBackend {
    fn segment(&self, png: &[u8]) -> Result<String, SegmentationError>;
}

/// JSON body returned by the inference endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SegmentationResponse {
    #[serde(default)]
    pub mask: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl SegmentationResponse {
    /// Parse an endpoint reply into the base64 mask it carries.
    pub fn parse(body: &str) -> Result<String, SegmentationError> {
        let response: Self = serde_json::from_str(body)
            .map_err(|e| SegmentationError::Transport(format!("malformed response: {}", e)))?;
        if let Some(error) = response.error {
            return Err(SegmentationError::Transport(error));
        }
        response
            .mask
            .filter(|m| !m.trim().is_empty())
            .ok_or(SegmentationError::EmptyMask)
    }
}

/// Decode a base64 PNG mask, with or without a `data:` URL prefix.
pub fn decode_mask(mask: &str) -> Result<BackgroundImage, SegmentationError> {
    let mask = mask.trim();
    let payload = match mask.split_once(";base64,") {
        Some((prefix, data)) if prefix.starts_with("data:") => data,
        _ => mask,
    };
    if payload.is_empty() {
        return Err(SegmentationError::EmptyMask);
    }
    let bytes = STANDARD.decode(payload)?;
    let image = image::load_from_memory(&bytes)?;
    log::debug!("🧠 Decoded mask {}x{}", image.width(), image.height());
    Ok(BackgroundImage::new(image.to_rgba8()))
}
