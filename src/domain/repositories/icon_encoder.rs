//! Icon encoder trait
//!
//! Defines the interface for compressing a raster into an image file.

use crate::domain::entities::Canvas;
use thiserror::Error;

/// Errors that can occur when encoding a canvas
///
/// These are infrastructure failures. No input raster is invalid.
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Image encoding error: {0}")]
    Image(String),

    #[error("Encoder produced malformed output: {0}")]
    Malformed(String),
}

/// Trait for encoding a canvas into a compressed image
///
/// Implementations must be deterministic: the same canvas always encodes to
/// the same bytes, so encoded icons can be cached and compared directly.
///
/// # Example
///
/// ```ignore
/// let encoder = PngIconEncoder::new();
/// let bytes = encoder.encode(&Canvas::blank())?;
/// assert_eq!(encoder.content_type(), "image/png");
/// ```
pub trait IconEncoder: Send + Sync {
    /// Encodes the canvas
    fn encode(&self, canvas: &Canvas) -> Result<Vec<u8>, EncodeError>;

    /// MIME type of the encoded bytes
    fn content_type(&self) -> &'static str;

    /// File extension of the encoded bytes, without the dot
    fn extension(&self) -> &'static str;
}
