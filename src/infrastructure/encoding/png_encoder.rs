//! PNG icon encoder
//!
//! Encodes canvases with the `image` crate's PNG encoder and checks the
//! result with the container inspector before handing it out.

use crate::domain::entities::{Canvas, PNG_CONTENT_TYPE};
use crate::domain::repositories::{EncodeError, IconEncoder};
use crate::formats::png::{COLOR_TYPE_TRUECOLOR, inspect_png};
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};

/// PNG encoder with fixed settings
///
/// Compression and filter are pinned so the same canvas always produces the
/// same bytes. Output is 8-bit truecolor, non-interlaced.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngIconEncoder;

impl PngIconEncoder {
    pub const fn new() -> Self {
        Self
    }

    /// Checks that the encoder wrote a complete PNG of the canvas' size
    fn verify(&self, data: &[u8], canvas: &Canvas) -> Result<(), EncodeError> {
        let info = inspect_png(data)
            .ok_or_else(|| EncodeError::Malformed("missing PNG header".to_string()))?;

        if !info.is_well_formed() {
            return Err(EncodeError::Malformed(format!(
                "crc_valid={}, has_iend={}, idat_count={}",
                info.crc_valid, info.has_iend, info.idat_count
            )));
        }

        if (info.width, info.height) != (canvas.width(), canvas.height())
            || info.color_type != COLOR_TYPE_TRUECOLOR
        {
            return Err(EncodeError::Malformed(format!(
                "expected {}x{} truecolor, got {}x{} color type {}",
                canvas.width(),
                canvas.height(),
                info.width,
                info.height,
                info.color_type
            )));
        }

        Ok(())
    }
}

impl IconEncoder for PngIconEncoder {
    fn encode(&self, canvas: &Canvas) -> Result<Vec<u8>, EncodeError> {
        let mut png_data = Vec::new();

        PngEncoder::new_with_quality(&mut png_data, CompressionType::Best, FilterType::Adaptive)
            .write_image(
                canvas.as_raw(),
                canvas.width(),
                canvas.height(),
                ExtendedColorType::Rgb8,
            )
            .map_err(|e| EncodeError::Image(e.to_string()))?;

        self.verify(&png_data, canvas)?;

        Ok(png_data)
    }

    fn content_type(&self) -> &'static str {
        PNG_CONTENT_TYPE
    }

    fn extension(&self) -> &'static str {
        "png"
    }
}
