//! Image ingestion for upload and clipboard sources.
//!
//! Picked files and pasted image bytes are inlined into the document as
//! base64 data URIs, so a document is self-contained once saved. Display
//! sizing caps the largest edge while keeping aspect ratio.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::GenericImageView;
use thiserror::Error;

use crate::constants::MAX_UPLOAD_EDGE;
use crate::types::{ImageSource, SourceKind};

/// Errors raised while turning raw bytes into an image source
#[derive(Error, Debug)]
pub enum ImageIngestError {
    /// The bytes do not start with a known image signature
    #[error("unrecognized image format")]
    UnrecognizedFormat,

    /// The bytes matched a format signature but failed to decode
    #[error("image failed to decode: {0}")]
    Decode(#[from] image::ImageError),
}

/// Inline image bytes as a `data:<mime>;base64,…` URI
pub fn data_uri_from_bytes(bytes: &[u8]) -> Result<String, ImageIngestError> {
    let format = image::guess_format(bytes).map_err(|_| ImageIngestError::UnrecognizedFormat)?;
    Ok(format!(
        "data:{};base64,{}",
        format.to_mime_type(),
        BASE64.encode(bytes)
    ))
}

impl ImageSource {
    /// Inline picked-file bytes as an upload source
    pub fn from_upload(bytes: &[u8]) -> Result<Self, ImageIngestError> {
        Ok(Self {
            kind: SourceKind::Upload,
            src: data_uri_from_bytes(bytes)?,
        })
    }

    /// Inline clipboard bytes as a paste source
    pub fn from_paste(bytes: &[u8]) -> Result<Self, ImageIngestError> {
        Ok(Self {
            kind: SourceKind::Paste,
            src: data_uri_from_bytes(bytes)?,
        })
    }
}

/// Decode the image and compute its display size, scaled down so neither
/// edge exceeds the upload cap. Images already within bounds keep their
/// natural size
pub fn display_size(bytes: &[u8]) -> Result<(f32, f32), ImageIngestError> {
    let decoded = image::load_from_memory(bytes)?;
    let (width, height) = decoded.dimensions();
    Ok(fit_within(width as f32, height as f32, MAX_UPLOAD_EDGE))
}

/// Scale `(width, height)` down so neither edge exceeds `max_edge`,
/// preserving aspect ratio. Never scales up
pub fn fit_within(width: f32, height: f32, max_edge: f32) -> (f32, f32) {
    let largest = width.max(height);
    if largest <= max_edge {
        return (width, height);
    }
    let scale = max_edge / largest;
    (width * scale, height * scale)
}
