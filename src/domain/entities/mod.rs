//! Domain entities
//!
//! Transient values computed for a single icon: hash, mosaic, color,
//! raster and the encoded image. Nothing here is persisted.

mod bit_pattern;
mod canvas;
mod color;
mod content_hash;
mod icon_image;

pub use bit_pattern::{BitPattern, PATTERN_SIZE};
pub use canvas::{CANVAS_SIZE, Canvas, PIXEL_SIZE};
pub use color::Rgb;
pub use content_hash::{CONTENT_HASH_HEX_LEN, CONTENT_HASH_LEN, ContentHash};
pub use icon_image::{IconImage, PNG_CONTENT_TYPE};

/// Account identifier supplied by the user store
///
/// Any value is valid input, including zero and negative ids.
pub type UserId = i64;
